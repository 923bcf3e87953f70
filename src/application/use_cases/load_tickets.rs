/// Load Tickets Use Case
///
/// Validates tokenized ticket rows one at a time. A bad row is logged,
/// counted and skipped; it never aborts the load.

use crate::domain::entities::TicketRecord;
use crate::domain::validation::{TicketValidator, ValidationError};
use crate::shared::metrics::METRICS;
use std::sync::Arc;

/// A row that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based position among the rows handed to the loader
    pub row: usize,
    pub error: ValidationError,
}

/// Result of validating a batch of ticket rows
#[derive(Debug, Clone, Default)]
pub struct TicketLoadSummary {
    pub tickets: Vec<Arc<TicketRecord>>,
    pub rejected: Vec<RejectedRow>,
}

impl TicketLoadSummary {
    #[inline]
    pub fn validated_count(&self) -> usize {
        self.tickets.len()
    }

    #[inline]
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// Rows seen, valid or not
    #[inline]
    pub fn total_rows(&self) -> usize {
        self.validated_count() + self.rejected_count()
    }
}

/// Validates ticket rows into an ordered ticket set
#[derive(Debug, Clone, Default)]
pub struct LoadTicketsUseCase {
    validator: TicketValidator,
}

impl LoadTicketsUseCase {
    pub fn new(validator: TicketValidator) -> Self {
        Self { validator }
    }

    pub fn execute<R, S>(&self, rows: &[R]) -> TicketLoadSummary
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut summary = TicketLoadSummary {
            tickets: Vec::with_capacity(rows.len()),
            rejected: Vec::new(),
        };

        for (i, row) in rows.iter().enumerate() {
            match self.validator.validate_row(row.as_ref()) {
                Ok(ticket) => {
                    METRICS.ticket_rows_total.with_label_values(&["valid"]).inc();
                    summary.tickets.push(Arc::new(ticket));
                }
                Err(error) => {
                    tracing::warn!(row = i + 1, %error, "ticket row rejected");
                    METRICS.ticket_rows_total.with_label_values(&["rejected"]).inc();
                    summary.rejected.push(RejectedRow { row: i + 1, error });
                }
            }
        }

        summary
    }
}
