/// Application Services
///
/// Services coordinate use cases and hold session state.
///
/// ## Available Services
/// - `CheckerService`: ticket/draw loading, readiness and checking for one run

pub mod checker_service;

pub use checker_service::CheckerService;
