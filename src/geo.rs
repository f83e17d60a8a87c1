//! Pickup and trail coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::haversine;

/// WGS-84 latitude/longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether this coordinate can be used as a routing waypoint.
    ///
    /// `(0, 0)` is the placeholder stored for an unknown address and is never
    /// a real pickup. Non-finite or out-of-range values are rejected too.
    pub fn is_valid(&self) -> bool {
        if self.lat == 0.0 && self.lng == 0.0 {
            return false;
        }
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Great-circle distance in meters.
    pub fn distance_m(&self, other: &Coordinate) -> f64 {
        haversine::haversine_m(*self, *other)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_invalid() {
        assert!(!Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(0.0, -63.6).is_valid());
        assert!(Coordinate::new(44.7, 0.0).is_valid());
    }

    #[test]
    fn test_out_of_range_is_invalid() {
        assert!(!Coordinate::new(91.0, -63.6).is_valid());
        assert!(!Coordinate::new(44.7, 181.0).is_valid());
        assert!(!Coordinate::new(f64::NAN, -63.6).is_valid());
    }

    #[test]
    fn test_display() {
        let c = Coordinate::new(44.7321, -63.6841);
        assert_eq!(c.to_string(), "(44.732100, -63.684100)");
    }
}
