//! Read-only view of a search in progress.
//!
//! Everything here takes `&self`: renderers and inspectors can query the
//! frontier, settled set, predecessor edges and current path between steps
//! without influencing the search.

use tilenav_core::Point;

use crate::node::{NodeState, PathNode};
use crate::search::{Pathfinder, SearchStatus};

/// Owned copy of a [`Pathfinder`]'s observable state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchSnapshot {
    pub start: Point,
    pub goal: Point,
    pub current: Point,
    pub status: SearchStatus,
    pub steps: usize,
    pub frontier: Vec<PathNode>,
    pub settled: Vec<PathNode>,
    /// `(cell, predecessor)` pairs.
    pub edges: Vec<(Point, Point)>,
    pub path: Vec<Point>,
    pub path_cost: Option<f32>,
}

impl Pathfinder {
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The cell the next expansion will consider: the cheapest frontier
    /// entry after the last step.
    #[inline]
    pub fn current(&self) -> Point {
        self.current
    }

    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Number of cells settled so far in this run.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Route from start to goal through the best known predecessors, or
    /// empty if the goal has not been reached.
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Total cost of [`path`](Self::path), or `None` when it is empty.
    pub fn path_cost(&self) -> Option<f32> {
        if self.path.is_empty() {
            return None;
        }
        self.cost_at(self.goal)
    }

    /// Frontier entries with their tentative costs, in row-major order.
    /// Unreached cells seeded into the frontier report
    /// [`UNREACHABLE`](crate::UNREACHABLE).
    pub fn frontier(&self) -> Vec<PathNode> {
        let mut nodes: Vec<PathNode> = self
            .touched
            .iter()
            .filter_map(|&i| match self.record(i) {
                (NodeState::Open, cost) => Some(PathNode {
                    pos: self.point(i),
                    cost,
                }),
                _ => None,
            })
            .collect();
        nodes.sort_by_key(|n| n.pos);
        nodes
    }

    /// Settled cells with their final costs, in the order they were settled.
    pub fn settled(&self) -> Vec<PathNode> {
        self.settled_order
            .iter()
            .map(|&i| PathNode {
                pos: self.point(i),
                cost: self.nodes[i].g,
            })
            .collect()
    }

    /// Predecessor links as `(cell, predecessor)` pairs, in discovery order.
    pub fn edges(&self) -> Vec<(Point, Point)> {
        self.touched
            .iter()
            .filter_map(|&i| self.parent(i).map(|pi| (self.point(i), self.point(pi))))
            .collect()
    }

    /// Tentative cost of `p` if it is in the frontier.
    pub fn frontier_cost_at(&self, p: Point) -> Option<f32> {
        match self.record(self.idx(p)?) {
            (NodeState::Open, cost) => Some(cost),
            _ => None,
        }
    }

    /// Final cost of `p` if it has been settled.
    pub fn settled_cost_at(&self, p: Point) -> Option<f32> {
        match self.record(self.idx(p)?) {
            (NodeState::Settled, cost) => Some(cost),
            _ => None,
        }
    }

    /// Best known finite cost of `p`, whether settled or still in the
    /// frontier.
    pub fn cost_at(&self, p: Point) -> Option<f32> {
        match self.record(self.idx(p)?) {
            (NodeState::Unvisited, _) => None,
            (_, cost) if cost.is_finite() => Some(cost),
            _ => None,
        }
    }

    /// Cheapest known cell leading into `p`.
    pub fn predecessor_of(&self, p: Point) -> Option<Point> {
        self.parent(self.idx(p)?).map(|i| self.point(i))
    }

    /// Heuristic estimate from `p` to the goal under the current
    /// configuration. Always 0 for uniform-cost search.
    pub fn estimate_at(&self, p: Point) -> f32 {
        self.config
            .heuristic
            .estimate(p, self.goal, self.min_cost)
    }

    /// Owned copy of everything above.
    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            start: self.start,
            goal: self.goal,
            current: self.current,
            status: self.status,
            steps: self.steps,
            frontier: self.frontier(),
            settled: self.settled(),
            edges: self.edges(),
            path: self.path.clone(),
            path_cost: self.path_cost(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchConfig;
    use tilenav_core::Tilemap;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn accessors_after_one_step() {
        let grid = Tilemap::from_ascii("...\n...").unwrap();
        let mut pf = Pathfinder::new(SearchConfig::dijkstra());
        pf.initialize(&grid, p(0, 0), p(2, 1)).unwrap();
        pf.step(&grid);

        assert_eq!(pf.settled(), vec![PathNode { pos: p(0, 0), cost: 0.0 }]);
        assert_eq!(
            pf.frontier(),
            vec![
                PathNode { pos: p(1, 0), cost: 1.0 },
                PathNode { pos: p(0, 1), cost: 1.0 },
            ]
        );
        assert_eq!(pf.edges(), vec![(p(1, 0), p(0, 0)), (p(0, 1), p(0, 0))]);
        assert_eq!(pf.settled_cost_at(p(0, 0)), Some(0.0));
        assert_eq!(pf.frontier_cost_at(p(0, 0)), None);
        assert_eq!(pf.frontier_cost_at(p(1, 0)), Some(1.0));
        assert_eq!(pf.predecessor_of(p(0, 1)), Some(p(0, 0)));
        assert_eq!(pf.predecessor_of(p(0, 0)), None);
        assert_eq!(pf.cost_at(p(2, 1)), None);
        assert_eq!(pf.current(), p(1, 0));
        assert!(pf.path().is_empty());
        assert_eq!(pf.estimate_at(p(0, 0)), 0.0);
    }

    #[test]
    fn out_of_grid_queries_are_none() {
        let grid = Tilemap::new(2, 2);
        let mut pf = Pathfinder::default();
        pf.initialize(&grid, p(0, 0), p(1, 1)).unwrap();
        assert_eq!(pf.cost_at(p(-1, 0)), None);
        assert_eq!(pf.frontier_cost_at(p(5, 5)), None);
        assert_eq!(pf.predecessor_of(p(2, 0)), None);
    }

    #[test]
    fn queries_do_not_mutate() {
        let grid = Tilemap::new(4, 4);
        let mut pf = Pathfinder::default();
        pf.initialize(&grid, p(0, 0), p(3, 3)).unwrap();
        pf.step(&grid);
        pf.step(&grid);
        let before = pf.snapshot();
        let _ = (pf.frontier(), pf.settled(), pf.edges(), pf.path_cost());
        let _ = (pf.cost_at(p(1, 1)), pf.estimate_at(p(2, 2)));
        assert_eq!(pf.snapshot(), before);
    }

    #[test]
    fn snapshot_after_completion() {
        let grid = Tilemap::from_ascii("...").unwrap();
        let mut pf = Pathfinder::default();
        pf.find_path(&grid, p(0, 0), p(2, 0)).unwrap();
        let snap = pf.snapshot();
        assert_eq!(snap.status, SearchStatus::Found);
        assert_eq!(snap.path, vec![p(0, 0), p(1, 0), p(2, 0)]);
        assert_eq!(snap.path_cost, Some(2.0));
        assert_eq!(snap.steps, 2);
        assert_eq!(snap.frontier, vec![PathNode { pos: p(2, 0), cost: 2.0 }]);
    }
}
