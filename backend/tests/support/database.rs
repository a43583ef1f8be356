//! PostgreSQL selection for integration suites that need a real database.

/// Connection URL for the PostgreSQL suite, if one is configured.
///
/// Prints a `SKIP-TEST-CLUSTER` marker naming `test` when `TEST_DATABASE_URL`
/// is unset so skipped suites stay visible in CI logs.
pub fn test_database_url(test: &str) -> Option<String> {
    match std::env::var("TEST_DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-CLUSTER: {test} skipped (TEST_DATABASE_URL unset)");
            None
        }
    }
}
