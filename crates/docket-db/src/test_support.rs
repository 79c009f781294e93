//! Shared test utilities for docket-db unit tests.

use docket_core::entities::NewCase;

use crate::DocketDb;

/// Fresh in-memory database with the schema applied.
pub(crate) async fn test_db() -> DocketDb {
    DocketDb::open_local(":memory:").await.unwrap()
}

/// Minimal valid case; the access code is always `secret`.
pub(crate) fn sample_case(case_number: &str) -> NewCase {
    NewCase::new(case_number, "Test Client", "100 Test Ln, Dallas, TX 75201", "secret")
}
