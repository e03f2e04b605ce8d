//! Stage timings.
//!
//! Collected only by the verbose path (`suggest_verbose`); the plain
//! operations never read the clock.

use std::time::Duration;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunMetrics {
    /// Whole pipeline, tokenize through filter.
    pub total: Duration,
    pub tokenize: Duration,
    pub resolve: Duration,
    pub filter: Duration,
}
