//! Powerball ticket checker
//!
//! Loads purchased tickets and one official drawing, then works out which
//! tickets won and which prize tier each one reached.
//!
//! ## Layers
//! - `domain`: entities, validation, matching, prize table
//! - `application`: readiness gate, use cases, `CheckerService`
//! - `infrastructure`: CSV ticket file loading
//! - `interfaces`: command line
//! - `shared`: errors and metrics

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use application::services::CheckerService;
pub use application::use_cases::{CheckReport, Outcome};
pub use domain::{DrawResult, PrizeTier, TicketRecord};
pub use shared::error::CheckerError;
