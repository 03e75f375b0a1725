use std::env;

use url::Url;

use crate::errors::LoaderError;

/// The base URL of the hosted backend, e.g. `https://xyz.supabase.co`.
pub const SUPABASE_URL: &str = "SUPABASE_URL";

/// The service key used for both the `apikey` and bearer headers.
pub const SUPABASE_SERVICE_KEY: &str = "SUPABASE_SERVICE_KEY";

/// The path of the JSON records file (optional, defaults to
/// `hackathons.json`).
pub const RECORDS_FILE: &str = "LOADER_RECORDS_FILE";

/// Set to `1` to skip records whose name is already in the table.
pub const SKIP_EXISTING: &str = "LOADER_SKIP_EXISTING";

/// Connection settings for the hosted backend. Built once and handed
/// to the client factory; nothing else reads the environment after
/// this.
#[derive(Clone, Debug)]
pub struct Settings {
    supabase_url: Url,
    supabase_key: String,
}

impl Settings {
    pub fn new(supabase_url: Url, supabase_key: String) -> Self {
        Self {
            supabase_url,
            supabase_key,
        }
    }

    /// Reads the settings from the environment, failing on the first
    /// missing or malformed variable.
    pub fn from_env() -> Result<Self, LoaderError> {
        let url = get_variable(SUPABASE_URL)?;
        let key = get_variable(SUPABASE_SERVICE_KEY)?;

        let supabase_url = Url::parse(&url).map_err(|source| LoaderError::InvalidUrl {
            name: SUPABASE_URL,
            source,
        })?;

        Ok(Self::new(supabase_url, key))
    }

    pub fn supabase_url(&self) -> &Url {
        &self.supabase_url
    }

    pub fn supabase_key(&self) -> &str {
        &self.supabase_key
    }
}

/// Returns the value of the named environment variable if it exists.
pub fn get_variable(name: &'static str) -> Result<String, LoaderError> {
    env::var(name).map_err(|_| LoaderError::MissingVariable(name))
}
