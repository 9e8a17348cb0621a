//! Error classification utilities.
//!
//! Distinguishes "no rows" outcomes from real database errors so
//! `find_one` can map the former to `Ok(None)` without swallowing
//! anything else.

use crate::executor::DockError;

/// Check whether an error only means the query matched no rows.
///
/// Matches the specific wordings `may_postgres` and executor
/// implementations use for empty results; broader phrases like plain
/// "not found" stay errors (they also appear in "table not found",
/// "column not found" and similar).
pub(crate) fn is_no_rows_error(error: &DockError) -> bool {
    let message = match error {
        DockError::Postgres(e) => e.to_string(),
        DockError::Query(msg) => msg.clone(),
        DockError::Config(_) | DockError::Unsupported(_) | DockError::Parse(_) => return false,
    };
    let message = message.to_lowercase();
    message.contains("no rows")
        || message.contains("no row")
        || message.contains("row not found")
        || message.contains("unexpected number of rows")
        || message.contains("expected one row")
}
