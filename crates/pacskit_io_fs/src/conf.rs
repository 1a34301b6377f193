//! Fixed calendar grid.

use std::ops::RangeInclusive;

/// Month directories created under every year.
pub const RANGE_MONTHS: RangeInclusive<u32> = 1..=12;
/// Day directories created under every month.
///
/// Always 31 regardless of month length; readers must tolerate `02/30`.
pub const RANGE_DAYS: RangeInclusive<u32> = 1..=31;
