//! Test fixtures for hike-planner.
//!
//! Provides Halifax-area pickup addresses and hiking trails used across the
//! integration tests.

pub mod halifax_locations;
