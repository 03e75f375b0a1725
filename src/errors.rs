use thiserror::Error;

/// Enumerates the reasons a record can be rejected before it is sent
/// to the database. Display strings are part of the loader's output
/// contract.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a required column absent from the record.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Represents an empty `categories` list.
    #[error("categories must be a non-empty list")]
    EmptyCategories,

    /// Represents a `start_date` or `end_date` that does not parse.
    #[error("Invalid date format. Use ISO 8601 format (YYYY-MM-DDTHH:MM:SSZ)")]
    InvalidDate,
}

/// Enumerates high-level errors returned by this library.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Represents a missing environment variable.
    #[error("must define {0} environment variable")]
    MissingVariable(&'static str),

    /// Represents an environment variable whose value cannot be used
    /// as-is (e.g. a key with characters illegal in an HTTP header).
    #[error("malformed {0} environment variable")]
    MalformedVariable(&'static str),

    /// Represents an unparseable URL.
    #[error("unable to parse {name} as a URL")]
    InvalidUrl {
        name: &'static str,
        source: url::ParseError,
    },

    /// Represents an error reading the records file.
    #[error("unable to read records file")]
    Io { source: std::io::Error },

    /// Represents a records file that is not a JSON array of records.
    #[error("unable to parse records file")]
    MalformedRecords { source: serde_json::Error },

    /// Represents a transport-level HTTP failure.
    #[error("HTTP error")]
    Http { source: reqwest::Error },

    /// Represents a non-success response from the hackathons API.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Represents a uniqueness violation on the record's name.
    #[error("a hackathon with this name already exists")]
    NameAlreadyExists,
}
