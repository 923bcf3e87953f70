/// Shared utilities and types used across all layers
///
/// This module contains:
/// - Error types
/// - Metrics

pub mod error;
pub mod metrics;

// Re-export commonly used types
pub use error::{CheckerError, Result};
pub use metrics::METRICS;
