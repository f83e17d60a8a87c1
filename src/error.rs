//! Errors for contract violations at construction boundaries.
//!
//! The planning operations themselves are total; the only fallible entry
//! point is building calendar values from unchecked dates.

use chrono::{NaiveDate, Weekday};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("week start {date} is a {weekday}, expected a Monday")]
    NotMonday { date: NaiveDate, weekday: Weekday },

    #[error("weekday ordinal {0} is outside 1..=5")]
    InvalidOrdinal(u8),
}
