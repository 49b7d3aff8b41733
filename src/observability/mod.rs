//! Observability module for session metrics.
//!
//! Counts commands and failures over a session and times each command,
//! reporting through `tracing`.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};
