use std::collections::HashSet;

use crate::db::Db;
use crate::hackathon::Hackathon;
use crate::log::{error, info, o, warn, Logger};
use crate::normalization::dedup_key;
use crate::validation::validate;

/// The tallies for one completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Records inserted into the table.
    pub success_count: usize,

    /// Records rejected by validation or refused by the database.
    pub error_count: usize,

    /// Records skipped by the duplicate guard. Zero unless the guard
    /// was enabled for the run.
    pub skipped_count: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.success_count + self.error_count + self.skipped_count
    }
}

/// Validates and inserts the given records, one at a time, in input
/// order.
///
/// A record that fails validation or is refused by the database is
/// counted and logged with its reason; it never stops the batch.
/// `existing`, when present, holds the `dedup_key`s of rows already
/// in the table; matching records are skipped before the insert is
/// attempted.
pub async fn insert_all(
    logger: &Logger,
    db: &dyn Db,
    hackathons: &[Hackathon],
    existing: Option<&HashSet<String>>,
) -> Summary {
    let mut summary = Summary::default();
    let total = hackathons.len();

    if total == 0 {
        warn!(logger, "No hackathon records to insert");
        return summary;
    }

    info!(logger, "Starting batch insert"; "records" => total);

    for (index, hackathon) in hackathons.iter().enumerate() {
        let name = hackathon.display_name().to_string();
        let logger = logger.new(o!("index" => index + 1, "total" => total, "name" => name.clone()));

        info!(logger, "Processing record");

        if let Err(reason) = validate(hackathon) {
            error!(logger, "Validation error"; "reason" => %reason);
            summary.error_count += 1;
            continue;
        }

        if let Some(existing) = existing {
            if existing.contains(&dedup_key(&name)) {
                info!(logger, "Skipping record already present in the table");
                summary.skipped_count += 1;
                continue;
            }
        }

        match db.insert(hackathon).await {
            Ok(()) => {
                info!(logger, "Inserted");
                summary.success_count += 1;
            }
            Err(reason) => {
                error!(logger, "Database error"; "reason" => %reason);
                summary.error_count += 1;
            }
        }
    }

    summary
}

/// Logs the end-of-run tally block.
pub fn log_summary(logger: &Logger, summary: &Summary) {
    info!(logger, "Successful: {}", summary.success_count);
    info!(logger, "Failed: {}", summary.error_count);
    if summary.skipped_count > 0 {
        info!(logger, "Skipped: {}", summary.skipped_count);
    }
    info!(logger, "Total: {}", summary.total());
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::RwLock;

    use futures::future::{self, BoxFuture, FutureExt};
    use slog::{o, Discard, Logger};

    use crate::db::Db;
    use crate::errors::LoaderError;
    use crate::hackathon::{sample_hackathon, Hackathon};
    use crate::normalization::dedup_key;

    use super::{insert_all, Summary};

    /// Records inserts in memory; names listed in `refuse` fail with
    /// a database error instead.
    #[derive(Default)]
    struct MockDb {
        inserted: RwLock<Vec<String>>,
        refuse: Vec<String>,
    }

    impl Db for MockDb {
        fn insert(&self, hackathon: &Hackathon) -> BoxFuture<Result<(), LoaderError>> {
            let name = hackathon.display_name().to_string();

            let result = if self.refuse.contains(&name) {
                Err(LoaderError::Api {
                    status: 500,
                    message: "internal error".to_string(),
                })
            } else {
                self.inserted.write().unwrap().push(name);
                Ok(())
            };

            future::ready(result).boxed()
        }

        fn existing_names(&self) -> BoxFuture<Result<Vec<String>, LoaderError>> {
            let names = self.inserted.read().unwrap().clone();

            future::ready(Ok(names)).boxed()
        }
    }

    fn test_logger() -> Logger {
        Logger::root(Discard, o!())
    }

    #[tokio::test]
    async fn an_empty_batch_reports_zeroes() {
        let db = MockDb::default();

        let summary = insert_all(&test_logger(), &db, &[], None).await;

        assert_eq!(summary, Summary::default());
        assert_eq!(summary.total(), 0);
    }

    // The three-record batch: one missing a required field, one with
    // an empty category list, one fully valid.
    #[tokio::test]
    async fn invalid_records_are_counted_and_skipped() {
        let mut missing_city = sample_hackathon("No City 2025");
        missing_city.city = None;

        let mut empty_categories = sample_hackathon("No Categories 2025");
        empty_categories.categories = Some(vec![]);

        let valid = sample_hackathon("Example Hackathon 2025");

        let db = MockDb::default();
        let batch = [missing_city, empty_categories, valid];

        let summary = insert_all(&test_logger(), &db, &batch, None).await;

        assert_eq!(summary.success_count, 1);
        assert_eq!(summary.error_count, 2);
        assert_eq!(summary.total(), 3);
        assert_eq!(
            *db.inserted.read().unwrap(),
            vec!["Example Hackathon 2025".to_string()]
        );
    }

    #[tokio::test]
    async fn a_database_failure_does_not_stop_the_batch() {
        let db = MockDb {
            refuse: vec!["Second 2025".to_string()],
            ..MockDb::default()
        };
        let batch = [
            sample_hackathon("First 2025"),
            sample_hackathon("Second 2025"),
            sample_hackathon("Third 2025"),
        ];

        let summary = insert_all(&test_logger(), &db, &batch, None).await;

        assert_eq!(summary.success_count, 2);
        assert_eq!(summary.error_count, 1);
        assert_eq!(summary.total(), 3);
        assert_eq!(
            *db.inserted.read().unwrap(),
            vec!["First 2025".to_string(), "Third 2025".to_string()]
        );
    }

    #[tokio::test]
    async fn the_duplicate_guard_skips_known_names() {
        let db = MockDb::default();
        let batch = [
            sample_hackathon("Already There 2025"),
            sample_hackathon("Brand New 2025"),
        ];

        let existing: HashSet<String> = vec![dedup_key("already there 2025")]
            .into_iter()
            .collect();

        let summary = insert_all(&test_logger(), &db, &batch, Some(&existing)).await;

        assert_eq!(summary.success_count, 1);
        assert_eq!(summary.skipped_count, 1);
        assert_eq!(summary.error_count, 0);
        assert_eq!(summary.total(), 2);
        assert_eq!(
            *db.inserted.read().unwrap(),
            vec!["Brand New 2025".to_string()]
        );
    }

    #[tokio::test]
    async fn validation_runs_before_the_duplicate_guard() {
        // An invalid duplicate counts as an error, not a skip.
        let mut invalid_duplicate = sample_hackathon("Already There 2025");
        invalid_duplicate.start_date = Some("not-a-date".to_string());

        let db = MockDb::default();
        let existing: HashSet<String> =
            vec![dedup_key("Already There 2025")].into_iter().collect();

        let summary = insert_all(&test_logger(), &db, &[invalid_duplicate], Some(&existing)).await;

        assert_eq!(summary.error_count, 1);
        assert_eq!(summary.skipped_count, 0);
    }
}
