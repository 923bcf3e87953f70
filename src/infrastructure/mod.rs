/// Infrastructure Layer - File Access
///
/// Reads ticket files from disk and hands raw rows to the application
/// layer. Holds no ticket checking rules.
///
/// ## Modules
/// - `loader`: CSV ticket file tokenizer

pub mod loader;

pub use loader::{read_ticket_file, read_ticket_rows, LoaderError};
