//! Calendar arithmetic for the Monday-first working week.
//!
//! Only Monday..=Friday have a [`WeekDay`]; weekend dates classify to `None`.
//! Week starts are always computed the same way (`date - num_days_from_monday`)
//! so exception records keyed by [`WeekStart`] match by plain equality.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// A working day. Weekends are represented by the absence of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
}

impl WeekDay {
    pub const ALL: [WeekDay; 5] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
    ];

    /// 1 for Monday through 5 for Friday.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Result<Self, CalendarError> {
        match ordinal {
            1 => Ok(WeekDay::Monday),
            2 => Ok(WeekDay::Tuesday),
            3 => Ok(WeekDay::Wednesday),
            4 => Ok(WeekDay::Thursday),
            5 => Ok(WeekDay::Friday),
            other => Err(CalendarError::InvalidOrdinal(other)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeekDay::Monday => "Monday",
            WeekDay::Tuesday => "Tuesday",
            WeekDay::Wednesday => "Wednesday",
            WeekDay::Thursday => "Thursday",
            WeekDay::Friday => "Friday",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            WeekDay::Monday => "Mon",
            WeekDay::Tuesday => "Tue",
            WeekDay::Wednesday => "Wed",
            WeekDay::Thursday => "Thu",
            WeekDay::Friday => "Fri",
        }
    }

    /// Days after the week's Monday.
    fn offset(self) -> i64 {
        i64::from(self.ordinal()) - 1
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a date as a working day, or `None` on weekends.
pub fn weekday_of(date: NaiveDate) -> Option<WeekDay> {
    match date.weekday() {
        Weekday::Mon => Some(WeekDay::Monday),
        Weekday::Tue => Some(WeekDay::Tuesday),
        Weekday::Wed => Some(WeekDay::Wednesday),
        Weekday::Thu => Some(WeekDay::Thursday),
        Weekday::Fri => Some(WeekDay::Friday),
        Weekday::Sat | Weekday::Sun => None,
    }
}

pub fn is_weekday(date: NaiveDate) -> bool {
    weekday_of(date).is_some()
}

/// The Monday that opens a week.
///
/// Can only be built from [`WeekStart::of`] or the checked `TryFrom`, so a
/// value of this type is always a Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct WeekStart(NaiveDate);

impl WeekStart {
    /// Week containing `date`. Saturday and Sunday belong to the week that
    /// began on the preceding Monday.
    pub fn of(date: NaiveDate) -> Self {
        let back = i64::from(date.weekday().num_days_from_monday());
        Self(date - Duration::days(back))
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Concrete date of `day` within this week.
    pub fn date_for(self, day: WeekDay) -> NaiveDate {
        self.0 + Duration::days(day.offset())
    }

    /// The five working dates of this week, Monday first.
    pub fn weekdays(self) -> [(WeekDay, NaiveDate); 5] {
        WeekDay::ALL.map(|day| (day, self.date_for(day)))
    }

    pub fn add_weeks(self, weeks: i64) -> Self {
        Self(self.0 + Duration::weeks(weeks))
    }

    /// True when `date` falls anywhere in this week, weekend included.
    pub fn contains(self, date: NaiveDate) -> bool {
        WeekStart::of(date) == self
    }
}

impl TryFrom<NaiveDate> for WeekStart {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        match date.weekday() {
            Weekday::Mon => Ok(Self(date)),
            weekday => Err(CalendarError::NotMonday { date, weekday }),
        }
    }
}

impl From<WeekStart> for NaiveDate {
    fn from(week: WeekStart) -> Self {
        week.0
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "week of {}", self.0)
    }
}

pub fn is_same_week(a: NaiveDate, b: NaiveDate) -> bool {
    WeekStart::of(a) == WeekStart::of(b)
}

/// Whole days from `start` to `end`; negative when `end` is earlier.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}
