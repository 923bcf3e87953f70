//! Checker error types

use crate::application::readiness::NotReadyError;
use crate::application::use_cases::RejectedRow;
use crate::domain::validation::ValidationError;
use thiserror::Error;

/// Errors surfaced by the checker service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckerError {
    /// A ticket row failed validation
    #[error("malformed ticket record at row {row}: {source}")]
    MalformedRecord {
        row: usize,
        #[source]
        source: ValidationError,
    },

    /// No row of a ticket load passed validation
    #[error("no valid tickets among {rows} rows")]
    NoValidTickets { rows: usize },

    /// Draw input rejected; the previous draw is kept
    #[error("invalid draw: {0}")]
    InvalidDraw(#[source] ValidationError),

    /// Check requested before all inputs were loaded
    #[error(transparent)]
    NotReady(#[from] NotReadyError),
}

pub type Result<T> = std::result::Result<T, CheckerError>;

impl From<RejectedRow> for CheckerError {
    fn from(rejected: RejectedRow) -> Self {
        CheckerError::MalformedRecord {
            row: rejected.row,
            source: rejected.error,
        }
    }
}
