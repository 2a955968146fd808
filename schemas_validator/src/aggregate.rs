//! Violation aggregation and validation reports.
//!
//! Violations are collected across a whole validation pass rather than
//! failing fast, so a caller can present every problem at once.

use schemas_core::{ValidationOutcome, Violation};
use serde_json::Value;
use std::time::Duration;

/// Collects violations and warning notes during a single validation pass.
#[derive(Debug, Default)]
pub struct Aggregator {
    violations: Vec<Violation>,
    warnings: Vec<String>,
    nodes_checked: usize,
    formats_checked: usize,
}

impl Aggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation.
    pub fn record(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Records a warning-level note (e.g. an unknown format name).
    pub fn warn(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Counts one schema node visited.
    pub fn node_checked(&mut self) {
        self.nodes_checked += 1;
    }

    /// Counts one format check performed.
    pub fn format_checked(&mut self) {
        self.formats_checked += 1;
    }

    /// Returns true if any violation has been recorded so far.
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Finishes the pass, producing the full report.
    ///
    /// The outcome is `Valid` with the normalized value only when no
    /// violation was recorded anywhere in the document.
    pub fn finish(self, normalized: Value, elapsed: Duration) -> ValidationReport {
        let outcome = if self.violations.is_empty() {
            ValidationOutcome::Valid(normalized)
        } else {
            ValidationOutcome::Invalid(self.violations)
        };
        ValidationReport {
            outcome,
            warnings: self.warnings,
            stats: ValidationStats {
                nodes_checked: self.nodes_checked,
                formats_checked: self.formats_checked,
                duration_ms: elapsed.as_millis() as u64,
            },
        }
    }
}

/// Full result of a validation pass: the outcome plus warnings and stats.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// The validation outcome
    pub outcome: ValidationOutcome,

    /// Warning-level notes that are not violations
    pub warnings: Vec<String>,

    /// Statistics about the pass
    pub stats: ValidationStats,
}

impl ValidationReport {
    /// Returns true if the outcome is valid.
    pub fn passed(&self) -> bool {
        self.outcome.is_valid()
    }
}

/// Statistics about validation execution.
#[derive(Debug, Clone, Default)]
pub struct ValidationStats {
    /// Number of schema nodes visited
    pub nodes_checked: usize,

    /// Number of format checks performed
    pub formats_checked: usize,

    /// Validation duration in milliseconds
    pub duration_ms: u64,
}
