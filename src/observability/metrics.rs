//! Session metrics tracking.
//!
//! This module counts what happened during one assistant session so a summary
//! can be logged at shutdown.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Metrics tracker for one session.
///
/// Clones share the same counters.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    commands_total: Arc<AtomicU64>,
    commands_failed_total: Arc<AtomicU64>,
    birthday_queries_total: Arc<AtomicU64>,
    birthdays_reported_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            commands_total: Arc::new(AtomicU64::new(0)),
            commands_failed_total: Arc::new(AtomicU64::new(0)),
            birthday_queries_total: Arc::new(AtomicU64::new(0)),
            birthdays_reported_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track one executed command.
    pub fn track_command(&self, command: &str, success: bool) {
        self.commands_total.fetch_add(1, Ordering::Relaxed);

        if !success {
            self.commands_failed_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::trace!(command = %command, success = success, "Command tracked");
    }

    /// Track an upcoming-birthdays query and how many contacts it returned.
    pub fn track_birthday_query(&self, result_count: usize) {
        self.birthday_queries_total.fetch_add(1, Ordering::Relaxed);
        self.birthdays_reported_total
            .fetch_add(result_count as u64, Ordering::Relaxed);

        tracing::debug!(result_count = result_count, "Birthday query completed");
    }

    pub fn commands_total(&self) -> u64 {
        self.commands_total.load(Ordering::Relaxed)
    }

    pub fn commands_failed_total(&self) -> u64 {
        self.commands_failed_total.load(Ordering::Relaxed)
    }

    pub fn birthday_queries_total(&self) -> u64 {
        self.birthday_queries_total.load(Ordering::Relaxed)
    }

    pub fn birthdays_reported_total(&self) -> u64 {
        self.birthdays_reported_total.load(Ordering::Relaxed)
    }

    /// Get the command failure rate (0.0 to 1.0).
    pub fn failure_rate(&self) -> f64 {
        let failed = self.commands_failed_total() as f64;
        let total = self.commands_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            failed / total
        }
    }

    /// Render a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Session Summary:\n\
             Commands: {}\n\
             Failed: {} ({:.2}% failure rate)\n\
             Birthday Queries: {}\n\
             Birthdays Reported: {}",
            self.commands_total(),
            self.commands_failed_total(),
            self.failure_rate() * 100.0,
            self.birthday_queries_total(),
            self.birthdays_reported_total(),
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Finish the timer with a specific status, returning elapsed microseconds.
    pub fn finish_with_status(self, success: bool) -> u128 {
        let duration_us = self.start.elapsed().as_micros();

        if success {
            tracing::debug!(
                operation = %self.operation,
                duration_us = duration_us,
                "Operation succeeded"
            );
        } else {
            tracing::debug!(
                operation = %self.operation,
                duration_us = duration_us,
                "Operation failed"
            );
        }

        duration_us
    }
}
