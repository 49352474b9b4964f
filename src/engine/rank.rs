// src/engine/rank.rs
use std::cmp::Ordering;

use crate::model::UnifiedEntry;

/// Solved descending, then penalty ascending.
pub fn compare(a: &UnifiedEntry, b: &UnifiedEntry) -> Ordering {
    b.solved_total
        .cmp(&a.solved_total)
        .then(a.penalty_total.cmp(&b.penalty_total))
}

/// Stable in-place ranking: ties keep their first-seen order.
pub fn rank(entries: &mut [UnifiedEntry]) {
    // slice::sort_by is a stable merge sort
    entries.sort_by(compare);
}
