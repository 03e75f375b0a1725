use futures::future::BoxFuture;

use crate::errors::LoaderError;
use crate::hackathon::Hackathon;

/// The operations the loader needs from the persistence service.
pub trait Db {
    /// Inserts one row into the `hackathons` table.
    fn insert(&self, hackathon: &Hackathon) -> BoxFuture<Result<(), LoaderError>>;

    /// Retrieves the names of the rows already in the table. Only
    /// used when the duplicate guard is enabled.
    fn existing_names(&self) -> BoxFuture<Result<Vec<String>, LoaderError>>;
}

pub use self::rest::*;

mod rest {
    use futures::future::BoxFuture;
    use futures::FutureExt;
    use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
    use reqwest::{Client, Response, StatusCode, Url};
    use serde::Deserialize;

    use crate::config::{Settings, SUPABASE_SERVICE_KEY, SUPABASE_URL};
    use crate::errors::LoaderError;
    use crate::hackathon::Hackathon;

    const TABLE: &str = "hackathons";

    #[derive(Debug, Deserialize)]
    struct NameRow {
        name: String,
    }

    /// A client for the backend's PostgREST interface. The service
    /// key is attached to every request as both the `apikey` and
    /// bearer headers.
    pub struct RestDb {
        client: Client,
        table_url: Url,
    }

    impl RestDb {
        /// Creates a client from the given settings. No network
        /// traffic happens here; construction only fails on
        /// unusable settings.
        pub fn new(settings: &Settings) -> Result<Self, LoaderError> {
            let apikey = HeaderValue::from_str(settings.supabase_key())
                .map_err(|_| LoaderError::MalformedVariable(SUPABASE_SERVICE_KEY))?;
            let mut bearer =
                HeaderValue::from_str(&format!("Bearer {}", settings.supabase_key()))
                    .map_err(|_| LoaderError::MalformedVariable(SUPABASE_SERVICE_KEY))?;
            bearer.set_sensitive(true);

            let mut headers = HeaderMap::new();
            headers.insert("apikey", apikey);
            headers.insert(AUTHORIZATION, bearer);

            let client = Client::builder()
                .default_headers(headers)
                .build()
                .map_err(|source| LoaderError::Http { source })?;

            let table_url = settings
                .supabase_url()
                .join(&format!("rest/v1/{}", TABLE))
                .map_err(|source| LoaderError::InvalidUrl {
                    name: SUPABASE_URL,
                    source,
                })?;

            Ok(Self { client, table_url })
        }
    }

    impl super::Db for RestDb {
        fn insert(&self, hackathon: &Hackathon) -> BoxFuture<Result<(), LoaderError>> {
            let request = self
                .client
                .post(self.table_url.clone())
                .header("Prefer", "return=minimal")
                .json(hackathon);

            async move {
                let response = request
                    .send()
                    .await
                    .map_err(|source| LoaderError::Http { source })?;

                if response.status().is_success() {
                    Ok(())
                } else {
                    Err(read_failure(response).await)
                }
            }
            .boxed()
        }

        fn existing_names(&self) -> BoxFuture<Result<Vec<String>, LoaderError>> {
            let request = self
                .client
                .get(self.table_url.clone())
                .query(&[("select", "name")]);

            async move {
                let response = request
                    .send()
                    .await
                    .map_err(|source| LoaderError::Http { source })?;

                if !response.status().is_success() {
                    return Err(read_failure(response).await);
                }

                let rows: Vec<NameRow> = response
                    .json()
                    .await
                    .map_err(|source| LoaderError::Http { source })?;

                Ok(rows.into_iter().map(|row| row.name).collect())
            }
            .boxed()
        }
    }

    // PostgREST reports a violated uniqueness constraint as a
    // conflict; the table's `name` column is the only such
    // constraint in this schema.
    async fn read_failure(response: Response) -> LoaderError {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();

        if status == StatusCode::CONFLICT {
            LoaderError::NameAlreadyExists
        } else {
            LoaderError::Api {
                status: status.as_u16(),
                message,
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use url::Url;

        use crate::config::Settings;

        use super::RestDb;

        #[test]
        fn the_factory_needs_no_network() {
            let settings = Settings::new(
                Url::parse("https://example.supabase.co").expect("parse URL"),
                "service-key".to_string(),
            );

            let db = RestDb::new(&settings).expect("build client");
            assert_eq!(
                db.table_url.as_str(),
                "https://example.supabase.co/rest/v1/hackathons"
            );
        }

        #[test]
        fn keys_with_illegal_header_characters_are_rejected() {
            let settings = Settings::new(
                Url::parse("https://example.supabase.co").expect("parse URL"),
                "bad\nkey".to_string(),
            );

            assert!(RestDb::new(&settings).is_err());
        }
    }
}
