//! Picks a trail near where a hike's pickups finish.

use crate::geo::Coordinate;
use crate::traits::Trail;

/// Closest candidate to `last_pickup`.
///
/// With no pickups the first candidate is returned; with no candidates there
/// is no suggestion. Candidates with an invalid coordinate are never picked
/// by distance, and the first candidate stands in when none is usable. Ties
/// keep the earlier candidate.
pub fn suggest_trail<'a, T, I>(last_pickup: Option<Coordinate>, candidates: I) -> Option<&'a T>
where
    T: Trail + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut candidates = candidates.into_iter().peekable();
    let first = *candidates.peek()?;
    let Some(last_pickup) = last_pickup else {
        return Some(first);
    };

    let mut best: Option<(&'a T, f64)> = None;
    for candidate in candidates {
        let coordinate = candidate.coordinate();
        if !coordinate.is_valid() {
            continue;
        }
        let distance = last_pickup.distance_m(&coordinate);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((candidate, distance));
        }
    }

    Some(best.map_or(first, |(trail, _)| trail))
}
