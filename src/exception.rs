//! Per-week schedule overrides.
//!
//! A [`WeeklyException`] only stores the days that were actually overridden;
//! a missing entry means "use the recurring pattern".

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calendar::{WeekDay, WeekStart};
use crate::traits::{ExceptionLookup, Id};

/// Override status for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Scheduled,
    Away,
    Injured,
    Cancelled,
    /// Moved to another day. The destination is not recorded, so the visit
    /// counts as unscheduled for the original day only.
    Rescheduled,
}

impl DayStatus {
    /// Whether the animal is picked up on a day carrying this status.
    pub fn is_scheduled(self) -> bool {
        match self {
            DayStatus::Scheduled => true,
            DayStatus::Away | DayStatus::Injured | DayStatus::Cancelled => false,
            DayStatus::Rescheduled => false,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            DayStatus::Scheduled => "Scheduled",
            DayStatus::Away => "Away",
            DayStatus::Injured => "Injured",
            DayStatus::Cancelled => "Cancelled",
            DayStatus::Rescheduled => "Rescheduled",
        }
    }
}

/// Overrides for one animal in one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyException<I> {
    pub animal_id: I,
    pub week_start: WeekStart,
    #[serde(default)]
    overrides: BTreeMap<WeekDay, DayStatus>,
}

impl<I> WeeklyException<I> {
    pub fn new(animal_id: I, week_start: WeekStart) -> Self {
        Self {
            animal_id,
            week_start,
            overrides: BTreeMap::new(),
        }
    }

    /// Builder-style override, handy when assembling records from storage.
    pub fn with_status(mut self, day: WeekDay, status: DayStatus) -> Self {
        self.overrides.insert(day, status);
        self
    }

    pub fn status_for(&self, day: WeekDay) -> Option<DayStatus> {
        self.overrides.get(&day).copied()
    }

    /// Set or clear (`None`) the override for `day`.
    pub fn set_status(&mut self, day: WeekDay, status: Option<DayStatus>) {
        match status {
            Some(status) => {
                self.overrides.insert(day, status);
            }
            None => {
                self.overrides.remove(&day);
            }
        }
    }

    pub fn overrides(&self) -> impl Iterator<Item = (WeekDay, DayStatus)> + '_ {
        self.overrides.iter().map(|(day, status)| (*day, *status))
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

/// Exception records keyed by `(animal id, week start)`.
///
/// Holds at most one record per animal per week: the first record inserted
/// for a key is kept and later ones are dropped.
#[derive(Debug, Clone)]
pub struct ExceptionIndex<I> {
    records: HashMap<(I, WeekStart), WeeklyException<I>>,
}

impl<I: Id> Default for ExceptionIndex<I> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
        }
    }
}

impl<I: Id> ExceptionIndex<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when a record for the same animal and week already
    /// exists; the existing record is left untouched.
    pub fn insert(&mut self, exception: WeeklyException<I>) -> bool {
        let key = (exception.animal_id.clone(), exception.week_start);
        if self.records.contains_key(&key) {
            warn!(week = %exception.week_start, "duplicate weekly exception ignored");
            return false;
        }
        self.records.insert(key, exception);
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<I: Id> FromIterator<WeeklyException<I>> for ExceptionIndex<I> {
    fn from_iter<T: IntoIterator<Item = WeeklyException<I>>>(iter: T) -> Self {
        let mut index = Self::new();
        for exception in iter {
            index.insert(exception);
        }
        index
    }
}

impl<I: Id> ExceptionLookup for ExceptionIndex<I> {
    type AnimalId = I;

    fn exception_for(&self, animal_id: &I, week: WeekStart) -> Option<&WeeklyException<I>> {
        self.records.get(&(animal_id.clone(), week))
    }
}

impl<I: Id> ExceptionLookup for HashMap<(I, WeekStart), WeeklyException<I>> {
    type AnimalId = I;

    fn exception_for(&self, animal_id: &I, week: WeekStart) -> Option<&WeeklyException<I>> {
        self.get(&(animal_id.clone(), week))
    }
}
