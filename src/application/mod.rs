/// Application Layer - Use Cases and Services
///
/// This layer orchestrates domain logic into the operations a caller sees:
/// loading tickets, loading a drawing, asking whether a check may run and
/// running it.
///
/// ## Modules
/// - `readiness`: gate deciding when a check is permitted
/// - `use_cases`: ticket loading and checking
/// - `services`: CheckerService, the session facade
/// - `dto`: serializable report views for the interfaces layer

pub mod readiness;
pub mod use_cases;
pub mod services;
pub mod dto;

// Re-export key services
pub use readiness::{MissingInput, NotReadyError, ReadinessGate, ReadinessState};
pub use services::CheckerService;
