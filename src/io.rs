use std::fs;
use std::path::Path;

use crate::errors::LoaderError;
use crate::hackathon::Hackathon;

/// Reads a batch of hackathon records from a JSON array file.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<Hackathon>, LoaderError> {
    let contents =
        fs::read_to_string(path.as_ref()).map_err(|source| LoaderError::Io { source })?;

    serde_json::from_str(&contents).map_err(|source| LoaderError::MalformedRecords { source })
}
