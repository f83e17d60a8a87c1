//! Daily hike planner.
//!
//! Resolves who is scheduled, splits them into hikes, orders each hike's
//! pickups and suggests a trail. Every call builds a fresh result from the
//! snapshots it is given; nothing is cached or mutated.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::calendar::{WeekDay, WeekStart, weekday_of};
use crate::geo::Coordinate;
use crate::grouping::{GroupingOptions, group_into_hikes};
use crate::haversine::HaversineMatrix;
use crate::polyline::Polyline;
use crate::resolver::scheduled_animals;
use crate::route::{Pickup, RouteStrategy, optimize_route};
use crate::trail::suggest_trail;
use crate::traits::{Animal, ExceptionLookup, Trail};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerOptions {
    pub grouping: GroupingOptions,
    pub route_strategy: RouteStrategy,
    /// Where the walker sets out from. Without one, each route starts at its
    /// first pickup.
    pub start_location: Option<Coordinate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnassignedReason {
    /// Scheduled, but every hike of the day was already full.
    CapacityExceeded,
}

#[derive(Debug)]
pub struct UnassignedAnimal<'a, A> {
    pub animal: &'a A,
    pub reason: UnassignedReason,
}

/// One hike of the day.
#[derive(Debug)]
pub struct Hike<'a, A, T> {
    /// 1-based position within the day.
    pub number: usize,
    /// Animals in pickup order.
    pub animals: Vec<&'a A>,
    /// Animals on this hike without a usable pickup coordinate. They are not
    /// part of the route.
    pub unrouted: Vec<&'a A>,
    /// Pickup coordinates, parallel to `animals`.
    pub route: Polyline,
    pub total_distance_m: f64,
    pub strategy: RouteStrategy,
    pub suggested_trail: Option<&'a T>,
}

impl<'a, A: Animal, T> Hike<'a, A, T> {
    pub fn animal_count(&self) -> usize {
        self.animals.len() + self.unrouted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animal_count() == 0
    }

    /// Every animal on the hike: routed pickups first, then unrouted.
    pub fn all_animals(&self) -> impl Iterator<Item = &'a A> + '_ {
        self.animals.iter().chain(self.unrouted.iter()).copied()
    }

    /// "Max, Luna, Bella"
    pub fn animal_names(&self) -> String {
        self.all_animals()
            .map(|animal| animal.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn distance_km(&self) -> f64 {
        self.total_distance_m / 1000.0
    }
}

/// The computed plan for one date. Never persisted.
#[derive(Debug)]
pub struct DailySchedule<'a, A, T> {
    pub date: NaiveDate,
    pub hikes: Vec<Hike<'a, A, T>>,
    /// Scheduled animals that did not fit into any hike.
    pub unassigned: Vec<UnassignedAnimal<'a, A>>,
}

impl<'a, A: Animal, T> DailySchedule<'a, A, T> {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            hikes: Vec::new(),
            unassigned: Vec::new(),
        }
    }

    pub fn hike(&self, number: usize) -> Option<&Hike<'a, A, T>> {
        self.hikes.iter().find(|hike| hike.number == number)
    }

    /// Animals across all hikes; unassigned ones are not counted.
    pub fn total_animals(&self) -> usize {
        self.hikes.iter().map(Hike::animal_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_animals() == 0
    }
}

/// Build the hike plan for `date`.
///
/// `animals` and `trails` are expected sorted by name; that order decides the
/// hike split and the fallback trail.
pub fn compute_daily_schedule<'a, A, E, T>(
    date: NaiveDate,
    animals: &'a [A],
    exceptions: &E,
    trails: &'a [T],
    options: &PlannerOptions,
) -> DailySchedule<'a, A, T>
where
    A: Animal,
    E: ExceptionLookup<AnimalId = A::Id>,
    T: Trail,
{
    if weekday_of(date).is_none() {
        debug!(%date, "weekend, no hikes");
        return DailySchedule::empty(date);
    }

    let eligible = scheduled_animals(date, animals, exceptions);
    let eligible_count = eligible.len();
    let grouping = group_into_hikes(eligible, &options.grouping);

    let hikes: Vec<_> = grouping
        .groups
        .into_iter()
        .enumerate()
        .map(|(index, group)| build_hike(index + 1, group, trails, options))
        .collect();

    if !grouping.overflow.is_empty() {
        warn!(
            %date,
            unassigned = grouping.overflow.len(),
            "scheduled animals left without a hike"
        );
    }
    let unassigned = grouping
        .overflow
        .into_iter()
        .map(|animal| UnassignedAnimal {
            animal,
            reason: UnassignedReason::CapacityExceeded,
        })
        .collect();

    debug!(%date, eligible = eligible_count, hikes = hikes.len(), "daily schedule computed");

    DailySchedule {
        date,
        hikes,
        unassigned,
    }
}

fn build_hike<'a, A, T>(
    number: usize,
    group: Vec<&'a A>,
    trails: &'a [T],
    options: &PlannerOptions,
) -> Hike<'a, A, T>
where
    A: Animal,
    T: Trail,
{
    let pickups: Vec<Pickup<usize>> = group
        .iter()
        .enumerate()
        .filter_map(|(index, animal)| {
            animal
                .location()
                .map(|coordinate| Pickup::new(index, coordinate))
        })
        .collect();

    let optimized = optimize_route(
        &pickups,
        options.start_location,
        options.route_strategy,
        &HaversineMatrix,
    );

    let mut routed = vec![false; group.len()];
    for pickup in &optimized.pickups {
        routed[pickup.key] = true;
    }

    let route = optimized.polyline();
    let suggested_trail = suggest_trail(route.last(), trails.iter().filter(|trail| trail.is_active()));

    Hike {
        number,
        animals: optimized.pickups.iter().map(|pickup| group[pickup.key]).collect(),
        unrouted: group
            .iter()
            .zip(&routed)
            .filter(|(_, is_routed)| !**is_routed)
            .map(|(animal, _)| *animal)
            .collect(),
        route,
        total_distance_m: optimized.total_distance_m,
        strategy: optimized.strategy,
        suggested_trail,
    }
}

/// Scheduled animals for each working day of `week`, in input order.
pub fn scheduled_for_week<'a, A, E>(
    week: WeekStart,
    animals: &'a [A],
    exceptions: &E,
) -> BTreeMap<WeekDay, Vec<&'a A>>
where
    A: Animal + Sync,
    E: ExceptionLookup<AnimalId = A::Id> + Sync,
{
    WeekDay::ALL[..]
        .par_iter()
        .map(|&day| (day, scheduled_animals(week.date_for(day), animals, exceptions)))
        .collect()
}

/// [`compute_daily_schedule`] for several dates, computed in parallel.
/// Results follow the order of `dates`.
pub fn compute_daily_schedules<'a, A, E, T>(
    dates: &[NaiveDate],
    animals: &'a [A],
    exceptions: &E,
    trails: &'a [T],
    options: &PlannerOptions,
) -> Vec<DailySchedule<'a, A, T>>
where
    A: Animal + Sync,
    E: ExceptionLookup<AnimalId = A::Id> + Sync,
    T: Trail + Sync,
{
    dates
        .par_iter()
        .map(|&date| compute_daily_schedule(date, animals, exceptions, trails, options))
        .collect()
}
