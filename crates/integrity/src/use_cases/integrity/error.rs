//! Integrity check errors.

use crate::infrastructure::ports::RepoError;

/// Errors that abort a check run.
///
/// Everything else (insert/delete failures, mismatches) is recorded in the
/// report instead.
#[derive(Debug, thiserror::Error)]
pub enum IntegrityError {
    #[error("Failed to fetch item types: {0}")]
    FetchItemTypes(#[source] RepoError),
}
