//! Helper error types.

use thiserror::Error;

/// Input-contract violations raised by helper functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UtilError {
    /// Weekday index outside `0..=6`.
    #[error("weekday index out of range: {0} (expected 0..=6)")]
    WeekdayOutOfRange(usize),
    /// Month outside `1..=12` or year outside the calendar range.
    #[error("invalid calendar month: {year}-{month}")]
    InvalidMonth {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: u32,
    },
}
