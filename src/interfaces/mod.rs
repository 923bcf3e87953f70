/// Interfaces Layer - External Entry Points
///
/// ## Modules
/// - `cli`: Command-line interface (main.rs logic) and text rendering

pub mod cli;
