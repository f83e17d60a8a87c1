//! Haversine distance matrix provider.
//!
//! Uses great-circle distance between pickups. Ignores roads entirely, which
//! is accurate enough for ordering a handful of stops in one neighbourhood.

use crate::geo::Coordinate;
use crate::traits::DistanceMatrixProvider;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates in meters.
pub fn haversine_m(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Haversine-based distance matrix provider, in meters.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineMatrix;

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[Coordinate]) -> Vec<Vec<f64>> {
        let n = locations.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for (i, from) in locations.iter().enumerate() {
            // Symmetric: fill both halves from the upper triangle.
            for (j, to) in locations.iter().enumerate().skip(i + 1) {
                let meters = haversine_m(*from, *to);
                matrix[i][j] = meters;
                matrix[j][i] = meters;
            }
        }

        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let p = Coordinate::new(44.7321, -63.6841);
        assert!(haversine_m(p, p) < 0.001, "Same point should have ~0 distance");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Halifax (44.65, -63.57) to Moncton (46.09, -64.78), roughly 185 km
        let dist = haversine_m(Coordinate::new(44.65, -63.57), Coordinate::new(46.09, -64.78));
        assert!(
            dist > 175_000.0 && dist < 195_000.0,
            "Halifax to Moncton should be ~185km, got {}",
            dist
        );
    }

    #[test]
    fn test_matrix_diagonal_is_zero() {
        let locations = vec![
            Coordinate::new(44.73, -63.68),
            Coordinate::new(44.74, -63.67),
            Coordinate::new(44.76, -63.65),
        ];
        let matrix = HaversineMatrix.matrix_for(&locations);

        for i in 0..locations.len() {
            assert_eq!(matrix[i][i], 0.0, "Diagonal should be zero");
        }
    }

    #[test]
    fn test_matrix_symmetric() {
        let locations = vec![Coordinate::new(44.73, -63.68), Coordinate::new(44.81, -63.58)];
        let matrix = HaversineMatrix.matrix_for(&locations);

        assert_eq!(matrix[0][1], matrix[1][0], "Matrix should be symmetric");
        assert!(matrix[0][1] > 0.0);
    }

    #[test]
    fn test_empty_matrix() {
        assert!(HaversineMatrix.matrix_for(&[]).is_empty());
    }
}
