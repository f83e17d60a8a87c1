//! Core domain traits for the hike planner.
//!
//! The host application owns the records (clients, dogs, trails, exception
//! rows) and implements these traits for its own data models. The planner
//! only ever reads through them.

use std::hash::Hash;

use crate::calendar::{WeekDay, WeekStart};
use crate::exception::WeeklyException;
use crate::geo::Coordinate;

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// An animal that may be picked up for a hike.
pub trait Animal {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Display name. Callers pass animals sorted by this.
    fn name(&self) -> &str;

    fn is_active(&self) -> bool;

    /// Recurring weekly pattern.
    fn regular_schedule(&self) -> &[WeekDay];

    /// Pickup coordinate, if the address has been geocoded.
    fn location(&self) -> Option<Coordinate>;

    fn is_scheduled_on(&self, day: WeekDay) -> bool {
        self.regular_schedule().contains(&day)
    }
}

/// A hiking location that can be suggested as a hike's destination.
pub trait Trail {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    fn name(&self) -> &str;

    fn coordinate(&self) -> Coordinate;

    fn is_active(&self) -> bool;

    /// Free-form area label, e.g. "Bedford".
    fn region(&self) -> &str;
}

/// Finds the exception record for an animal in a given week.
pub trait ExceptionLookup {
    type AnimalId: Id;

    fn exception_for(
        &self,
        animal_id: &Self::AnimalId,
        week: WeekStart,
    ) -> Option<&WeeklyException<Self::AnimalId>>;
}

/// Provides a distance matrix (meters) for a set of locations.
///
/// The matrix is indexed by the provided location order.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[Coordinate]) -> Vec<Vec<f64>>;
}
