//! Ordered pickup coordinates of a hike.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// A route as the ordered sequence of pickup coordinates.
///
/// Straight legs between consecutive points; there is no road geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Final pickup, where the hike leaves for the trail.
    pub fn last(&self) -> Option<Coordinate> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of great-circle leg lengths in meters.
    pub fn length_m(&self) -> f64 {
        self.points
            .windows(2)
            .map(|leg| leg[0].distance_m(&leg[1]))
            .sum()
    }
}

impl FromIterator<Coordinate> for Polyline {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
