//! Pickup route optimizer.
//!
//! Orders a hike's pickups to keep total straight-line travel short. Small
//! groups are solved exactly by trying every permutation; larger ones fall
//! back to a nearest-neighbour walk.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geo::Coordinate;
use crate::polyline::Polyline;
use crate::traits::DistanceMatrixProvider;

/// Largest pickup count searched exhaustively. Cost grows factorially, so this
/// is a fixed ceiling rather than an option.
pub const EXACT_SEARCH_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStrategy {
    /// Every permutation, up to [`EXACT_SEARCH_LIMIT`] pickups; nearest
    /// neighbour above that.
    #[default]
    Exact,
    /// Greedy closest-next-stop.
    NearestNeighbor,
}

/// A routing waypoint tagged with the caller's key.
#[derive(Debug, Clone, PartialEq)]
pub struct Pickup<K> {
    pub key: K,
    pub coordinate: Coordinate,
}

impl<K> Pickup<K> {
    pub fn new(key: K, coordinate: Coordinate) -> Self {
        Self { key, coordinate }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedRoute<K> {
    /// Valid pickups in visiting order.
    pub pickups: Vec<Pickup<K>>,
    /// Meters, including the leg from the start location when one was given.
    pub total_distance_m: f64,
    /// Strategy actually run.
    pub strategy: RouteStrategy,
}

impl<K> OptimizedRoute<K> {
    fn empty(strategy: RouteStrategy) -> Self {
        Self {
            pickups: Vec::new(),
            total_distance_m: 0.0,
            strategy,
        }
    }

    pub fn polyline(&self) -> Polyline {
        self.pickups.iter().map(|pickup| pickup.coordinate).collect()
    }
}

/// Order `pickups` to minimise total distance.
///
/// Pickups with an invalid coordinate (see [`Coordinate::is_valid`]) are
/// dropped first. The route starts at `start` when given, otherwise at
/// whichever pickup comes first in the chosen order.
pub fn optimize_route<K, M>(
    pickups: &[Pickup<K>],
    start: Option<Coordinate>,
    strategy: RouteStrategy,
    matrix_provider: &M,
) -> OptimizedRoute<K>
where
    K: Clone,
    M: DistanceMatrixProvider,
{
    let valid: Vec<&Pickup<K>> = pickups
        .iter()
        .filter(|pickup| pickup.coordinate.is_valid())
        .collect();

    if valid.len() < pickups.len() {
        debug!(
            skipped = pickups.len() - valid.len(),
            "pickups without a usable coordinate left out of route"
        );
    }

    match valid.len() {
        0 => return OptimizedRoute::empty(strategy),
        1 => {
            return OptimizedRoute {
                pickups: vec![valid[0].clone()],
                total_distance_m: 0.0,
                strategy,
            };
        }
        _ => {}
    }

    let start = start.filter(Coordinate::is_valid);
    let n = valid.len();
    let mut locations: Vec<Coordinate> = valid.iter().map(|pickup| pickup.coordinate).collect();
    let start_idx = start.map(|coordinate| {
        locations.push(coordinate);
        n
    });
    let matrix = matrix_provider.matrix_for(&locations);

    let strategy = match strategy {
        RouteStrategy::Exact if n > EXACT_SEARCH_LIMIT => {
            debug!(pickups = n, limit = EXACT_SEARCH_LIMIT, "too many pickups for exact search");
            RouteStrategy::NearestNeighbor
        }
        other => other,
    };

    let (order, total_distance_m) = match strategy {
        RouteStrategy::Exact => exact_order(n, start_idx, &matrix),
        RouteStrategy::NearestNeighbor => nearest_neighbor_order(n, start_idx, &matrix),
    };

    debug!(pickups = n, ?strategy, total_distance_m, "route optimized");

    OptimizedRoute {
        pickups: order.into_iter().map(|i| valid[i].clone()).collect(),
        total_distance_m,
        strategy,
    }
}

/// Total length of visiting `order`, starting from `start_idx` when given.
fn route_cost(order: &[usize], start_idx: Option<usize>, matrix: &[Vec<f64>]) -> f64 {
    let Some(&first) = order.first() else {
        return 0.0;
    };

    let mut total = match start_idx {
        Some(start) => matrix[start][first],
        None => 0.0,
    };
    for leg in order.windows(2) {
        total += matrix[leg[0]][leg[1]];
    }
    total
}

/// Exhaustive search over all permutations (Heap's algorithm, iterative).
///
/// Keeps the first permutation reaching the minimum, so the result is
/// reproducible for identical input.
fn exact_order(n: usize, start_idx: Option<usize>, matrix: &[Vec<f64>]) -> (Vec<usize>, f64) {
    debug_assert!(n <= EXACT_SEARCH_LIMIT);

    let mut perm: Vec<usize> = (0..n).collect();
    let mut best = perm.clone();
    let mut best_cost = route_cost(&perm, start_idx, matrix);

    let mut counters = vec![0usize; n];
    let mut i = 1;
    while i < n {
        if counters[i] < i {
            if i % 2 == 0 {
                perm.swap(0, i);
            } else {
                perm.swap(counters[i], i);
            }

            let cost = route_cost(&perm, start_idx, matrix);
            if cost < best_cost {
                best_cost = cost;
                best.copy_from_slice(&perm);
            }

            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }

    (best, best_cost)
}

/// Greedy walk to the closest unvisited pickup. Ties go to the earliest
/// pickup in input order.
fn nearest_neighbor_order(
    n: usize,
    start_idx: Option<usize>,
    matrix: &[Vec<f64>],
) -> (Vec<usize>, f64) {
    let mut remaining: Vec<usize> = (0..n).collect();
    let mut order = Vec::with_capacity(n);
    let mut total = 0.0;

    // Without a start location the walk begins on the first pickup itself.
    let mut current = match start_idx {
        Some(start) => start,
        None => {
            order.push(remaining.remove(0));
            0
        }
    };

    while !remaining.is_empty() {
        let mut nearest_pos = 0;
        let mut nearest_distance = f64::INFINITY;
        for (pos, &candidate) in remaining.iter().enumerate() {
            let distance = matrix[current][candidate];
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest_pos = pos;
            }
        }

        let next = remaining.remove(nearest_pos);
        total += matrix[current][next];
        order.push(next);
        current = next;
    }

    (order, total)
}
