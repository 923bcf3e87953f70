/// Main entry point for the Powerball checker
///
/// This serves as a thin wrapper that delegates to the interfaces layer.
/// The actual application logic is implemented in `interfaces::cli`.

use powerball_checker::interfaces::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run()
}
