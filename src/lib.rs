//! hike-planner core
//!
//! Resolves which animals are scheduled for a day, groups them into
//! capacity-bounded hikes, and orders each hike's pickups into a short route.

pub mod calendar;
pub mod error;
pub mod exception;
pub mod geo;
pub mod grouping;
pub mod haversine;
pub mod planner;
pub mod polyline;
pub mod resolver;
pub mod route;
pub mod trail;
pub mod traits;
