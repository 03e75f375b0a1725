use std::collections::HashSet;
use std::env;
use std::error::Error;

use loader::batch;
use loader::config::{self, Settings};
use loader::db::{Db, RestDb};
use loader::io::read_records;
use loader::log::{info, initialize_logger};
use loader::normalization::dedup_key;

const DEFAULT_RECORDS_FILE: &str = "hackathons.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let logger = initialize_logger();

    let settings = Settings::from_env()?;
    let db = RestDb::new(&settings)?;

    let records_file = env::var(config::RECORDS_FILE)
        .unwrap_or_else(|_| DEFAULT_RECORDS_FILE.to_string());
    let hackathons = read_records(&records_file)?;

    info!(logger, "Read records file"; "file" => records_file, "records" => hackathons.len());

    let skip_existing = env::var(config::SKIP_EXISTING)
        .map(|value| value == "1")
        .unwrap_or(false);

    let existing = if skip_existing {
        info!(logger, "Fetching names already in the table...");
        let names = db.existing_names().await?;
        info!(logger, "Fetched existing names"; "names" => names.len());

        Some(names.iter().map(dedup_key).collect::<HashSet<_>>())
    } else {
        None
    };

    let summary = batch::insert_all(&logger, &db, &hackathons, existing.as_ref()).await;
    batch::log_summary(&logger, &summary);

    Ok(())
}
