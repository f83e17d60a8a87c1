//! Splits the day's scheduled animals into capacity-bounded hikes.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GroupingOptions {
    /// Largest group a single hike may carry.
    pub max_per_hike: usize,
    /// Hikes run per day.
    pub max_hikes: usize,
}

impl Default for GroupingOptions {
    fn default() -> Self {
        Self {
            max_per_hike: 8,
            max_hikes: 2,
        }
    }
}

impl GroupingOptions {
    /// Total animals a day can carry.
    pub fn capacity(&self) -> usize {
        self.max_per_hike.saturating_mul(self.max_hikes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<T> {
    /// Non-empty groups in hike order.
    pub groups: Vec<Vec<T>>,
    /// Items past the day's capacity, in input order.
    pub overflow: Vec<T>,
}

/// Partition `items` into hikes, preserving input order.
///
/// Up to `max_per_hike` items form one group. Beyond that the items are split
/// into contiguous, near-equal groups (at `n / 2` with two hikes). Anything
/// past [`GroupingOptions::capacity`] is returned as overflow.
pub fn group_into_hikes<T>(items: Vec<T>, options: &GroupingOptions) -> Grouping<T> {
    let max_per_hike = options.max_per_hike.max(1);
    let capacity = options.capacity();

    let mut items = items;
    let overflow = if items.len() > capacity {
        items.split_off(capacity)
    } else {
        Vec::new()
    };

    let n = items.len();
    if n == 0 {
        return Grouping {
            groups: Vec::new(),
            overflow,
        };
    }

    let group_count = n.div_ceil(max_per_hike).min(options.max_hikes.max(1));

    // Group i covers [i*n/k, (i+1)*n/k); later groups take the odd extra.
    let mut groups = Vec::with_capacity(group_count);
    let mut rest = items;
    for i in (1..group_count).rev() {
        let boundary = i * n / group_count;
        let tail = rest.split_off(boundary);
        groups.push(tail);
    }
    groups.push(rest);
    groups.reverse();

    Grouping { groups, overflow }
}
