/// Domain Layer - Core Business Logic
///
/// Pure ticket checking rules with no I/O. Everything here can be tested in
/// isolation.
///
/// ## Modules
/// - `entities`: TicketRecord and DrawResult
/// - `validation`: raw token validation into entities
/// - `matching`: multiset white ball matching
/// - `prize`: fixed prize tier table

pub mod entities;
pub mod validation;
pub mod matching;
pub mod prize;

// Re-export key types
pub use entities::{DrawResult, TicketRecord, WHITE_BALL_COUNT};
pub use validation::{DrawValidator, TicketValidator, ValidationConfig, ValidationError};
pub use matching::{MatchCounts, MatchEngine};
pub use prize::{PrizeCalculator, PrizeTier};
