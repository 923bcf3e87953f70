/// Use Cases - High-level business operations
///
/// ## Available Use Cases
/// - `LoadTicketsUseCase`: validates ticket rows into a ticket set
/// - `CheckRunner`: checks a ticket set against a drawing

pub mod load_tickets;
pub mod check_tickets;

// Re-export key types
pub use load_tickets::{LoadTicketsUseCase, RejectedRow, TicketLoadSummary};
pub use check_tickets::{CheckReport, CheckRunner, Outcome, Verdict};
