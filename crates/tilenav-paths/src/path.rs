//! Route reconstruction from a predecessor map.

use std::collections::HashMap;

use tilenav_core::Point;

/// Walk predecessor links back from `goal` to `start` and return the route in
/// start-to-goal order, both ends included.
///
/// Returns `[start]` when `start == goal`, and an empty vector when the chain
/// breaks before reaching `start` (the goal is unreachable). A chain longer
/// than `limit` links is treated as unreachable too, so a corrupt map with a
/// cycle cannot loop forever.
pub fn reconstruct(
    start: Point,
    goal: Point,
    limit: usize,
    predecessor: impl Fn(Point) -> Option<Point>,
) -> Vec<Point> {
    if start == goal {
        return vec![start];
    }

    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        let Some(prev) = predecessor(current) else {
            return Vec::new();
        };
        if path.len() > limit {
            return Vec::new();
        }
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// [`reconstruct`] over a `HashMap` of `cell -> predecessor` edges.
pub fn reconstruct_from_map(
    predecessors: &HashMap<Point, Point>,
    start: Point,
    goal: Point,
) -> Vec<Point> {
    reconstruct(start, goal, predecessors.len(), |p| {
        predecessors.get(&p).copied()
    })
}
