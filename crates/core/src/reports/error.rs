//! Report error types.

use thiserror::Error;

/// Errors raised while setting up report generation.
///
/// The report computations themselves never fail.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Time zone name is not a known IANA zone.
    #[error("Unknown time zone: {0}")]
    UnknownTimezone(String),

    /// Candidate pool for the highest-margin report is empty.
    #[error("Candidate pool size must be at least 1")]
    EmptyCandidatePool,
}
