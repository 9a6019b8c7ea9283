//! The steppable search engine.
//!
//! [`Pathfinder`] runs uniform-cost search or A* one expansion at a time so
//! that a caller can draw the intermediate state every frame, or run it to
//! completion in one call.

use std::collections::BinaryHeap;

use log::{debug, trace};
use tilenav_core::{Point, Range};

use crate::config::SearchConfig;
use crate::error::{Endpoint, SearchError};
use crate::node::{NO_PARENT, Node, NodeRef, NodeState, UNREACHABLE};
use crate::path::reconstruct;
use crate::traits::WeightedPather;

/// Where a search run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// More expansions are needed.
    Searching,
    /// The goal is the cheapest frontier cell; the path is final.
    Found,
    /// The frontier ran dry before the goal was reached, or the run was
    /// never started. The path is empty.
    Exhausted,
}

impl SearchStatus {
    /// Whether further calls to [`Pathfinder::step`] are no-ops.
    #[inline]
    pub fn is_done(self) -> bool {
        self != Self::Searching
    }
}

/// Incremental best-first search over a [`WeightedPather`].
///
/// The grid is borrowed per call rather than stored, so callers can keep
/// ownership of it between frames. Every call after
/// [`initialize`](Self::initialize) must pass the same grid.
///
/// Per-cell records live in a flat array sized to the grid bounds and are
/// reused across runs: bumping a generation counter invalidates every
/// record at once.
pub struct Pathfinder {
    pub(crate) config: SearchConfig,
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<NodeRef>,
    /// Indices with a record in the current generation, in discovery order.
    pub(crate) touched: Vec<usize>,
    /// Indices in the order they were settled.
    pub(crate) settled_order: Vec<usize>,
    pub(crate) start: Point,
    pub(crate) goal: Point,
    pub(crate) current: Point,
    pub(crate) status: SearchStatus,
    pub(crate) steps: usize,
    pub(crate) path: Vec<Point>,
    /// Heuristic scale: no step is cheaper than this.
    pub(crate) min_cost: f32,
    nbuf: Vec<Point>,
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Pathfinder {
    /// Create an idle pathfinder. Call [`initialize`](Self::initialize)
    /// before stepping.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            rng: Range::default(),
            width: 0,
            nodes: Vec::new(),
            generation: 0,
            open: BinaryHeap::new(),
            touched: Vec::new(),
            settled_order: Vec::new(),
            start: Point::ZERO,
            goal: Point::ZERO,
            current: Point::ZERO,
            status: SearchStatus::Exhausted,
            steps: 0,
            path: Vec::new(),
            min_cost: 1.0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Change the configuration. Takes effect at the next
    /// [`initialize`](Self::initialize) or [`restart`](Self::restart).
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Discard all search state and begin a new run from `start` to `goal`.
    ///
    /// Fails if either endpoint is outside the grid or blocked. The previous
    /// run is discarded either way; after a failure the pathfinder reports
    /// [`SearchStatus::Exhausted`] with empty state.
    pub fn initialize<P: WeightedPather>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Result<(), SearchError> {
        self.reset(pather.bounds());
        self.start = start;
        self.goal = goal;
        self.current = start;

        let si = self.endpoint_index(pather, Endpoint::Start, start)?;
        self.endpoint_index(pather, Endpoint::Goal, goal)?;

        self.min_cost = pather.min_cost().max(0.0);

        if self.config.seed_unvisited {
            for p in pather.traversable_cells() {
                if let Some(i) = self.idx(p) {
                    self.touch(i, UNREACHABLE, NO_PARENT);
                }
            }
        }

        let f = self.estimate_at(start);
        self.touch(si, 0.0, NO_PARENT);
        self.open.push(NodeRef {
            idx: si,
            pos: start,
            g: 0.0,
            f,
        });

        self.status = SearchStatus::Searching;
        self.refresh_path();
        debug!(
            "search initialized: {start} -> {goal} ({})",
            self.config.heuristic.name()
        );
        Ok(())
    }

    /// Change the endpoints and restart.
    pub fn set_start_and_goal<P: WeightedPather>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Result<(), SearchError> {
        self.initialize(pather, start, goal)
    }

    /// Restart the current run from scratch with the same endpoints.
    pub fn restart<P: WeightedPather>(&mut self, pather: &P) -> Result<(), SearchError> {
        self.initialize(pather, self.start, self.goal)
    }

    /// Perform one expansion and return the resulting status.
    ///
    /// Once the run has finished this is a no-op that returns the final
    /// status, so it is safe to call from a polling loop.
    pub fn step<P: WeightedPather>(&mut self, pather: &P) -> SearchStatus {
        if self.status.is_done() {
            return self.status;
        }

        let Some(top) = self.frontier_min() else {
            return self.finish(SearchStatus::Exhausted);
        };
        if top.pos == self.goal {
            return self.finish(SearchStatus::Found);
        }

        self.open.pop();
        let ci = top.idx;
        let cp = top.pos;
        let cg = self.nodes[ci].g;
        self.nodes[ci].state = NodeState::Settled;
        self.settled_order.push(ci);
        self.steps += 1;
        trace!("settled {cp} at cost {cg}");

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        let mut goal_improved = false;
        for &np in nbuf.iter() {
            let Some(ni) = self.idx(np) else {
                continue;
            };
            let tentative = cg + pather.cost_of(np);
            let (state, g) = self.record(ni);
            if state == NodeState::Settled || tentative >= g {
                continue;
            }
            let f = tentative + self.estimate_at(np);
            self.touch(ni, tentative, ci);
            self.open.push(NodeRef {
                idx: ni,
                pos: np,
                g: tentative,
                f,
            });
            goal_improved |= np == self.goal;
        }
        self.nbuf = nbuf;

        if let Some(next) = self.frontier_min() {
            self.current = next.pos;
        }
        if goal_improved {
            self.refresh_path();
        }
        SearchStatus::Searching
    }

    /// Step until the run finds the goal or exhausts the frontier.
    ///
    /// Every non-final step settles one cell, so this halts after at most
    /// one step per cell in the grid.
    pub fn run_to_completion<P: WeightedPather>(&mut self, pather: &P) -> SearchStatus {
        loop {
            let status = self.step(pather);
            if status.is_done() {
                return status;
            }
        }
    }

    /// Initialize, run to completion and return the path.
    ///
    /// The path is empty when the goal cannot be reached.
    pub fn find_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Result<Vec<Point>, SearchError> {
        self.initialize(pather, start, goal)?;
        self.run_to_completion(pather);
        Ok(self.path.clone())
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Drop every trace of the previous run and size storage for `rng`.
    fn reset(&mut self, rng: Range) {
        if rng != self.rng {
            self.rng = rng;
            self.width = rng.width().max(0) as usize;
            self.nodes.clear();
            self.nodes.resize(rng.len(), Node::default());
            self.generation = 0;
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.nodes.fill(Node::default());
            self.generation = 1;
        }
        self.open.clear();
        self.touched.clear();
        self.settled_order.clear();
        self.path.clear();
        self.steps = 0;
        self.status = SearchStatus::Exhausted;
    }

    fn finish(&mut self, status: SearchStatus) -> SearchStatus {
        self.status = status;
        self.refresh_path();
        debug!(
            "search {:?} after {} expansions, path length {}",
            status,
            self.steps,
            self.path.len()
        );
        status
    }

    /// Cheapest live frontier entry, discarding stale heap entries on the
    /// way.
    fn frontier_min(&mut self) -> Option<NodeRef> {
        while let Some(&top) = self.open.peek() {
            let n = &self.nodes[top.idx];
            let live = n.generation == self.generation
                && n.state == NodeState::Open
                && n.g.total_cmp(&top.g).is_eq();
            if live {
                return Some(top);
            }
            self.open.pop();
        }
        None
    }

    /// Create or update the current-generation record of cell `i` as an
    /// open frontier entry.
    fn touch(&mut self, i: usize, g: f32, parent: usize) {
        let cur_gen = self.generation;
        let n = &mut self.nodes[i];
        if n.generation != cur_gen {
            n.generation = cur_gen;
            self.touched.push(i);
        }
        n.g = g;
        n.parent = parent;
        n.state = NodeState::Open;
    }

    /// State and cost of cell `i` in the current run.
    #[inline]
    pub(crate) fn record(&self, i: usize) -> (NodeState, f32) {
        let n = &self.nodes[i];
        if n.generation == self.generation {
            (n.state, n.g)
        } else {
            (NodeState::Unvisited, UNREACHABLE)
        }
    }

    /// Predecessor index of cell `i` in the current run.
    #[inline]
    pub(crate) fn parent(&self, i: usize) -> Option<usize> {
        let n = &self.nodes[i];
        (n.generation == self.generation && n.parent != NO_PARENT).then_some(n.parent)
    }

    /// Recompute the route to the goal from the current predecessor links.
    fn refresh_path(&mut self) {
        self.path = if self.status == SearchStatus::Exhausted {
            Vec::new()
        } else {
            reconstruct(self.start, self.goal, self.nodes.len(), |p| {
                self.idx(p)
                    .and_then(|i| self.parent(i))
                    .map(|pi| self.point(pi))
            })
        };
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Flat index of an endpoint, or the error rejecting it.
    fn endpoint_index<P: WeightedPather>(
        &self,
        pather: &P,
        endpoint: Endpoint,
        pos: Point,
    ) -> Result<usize, SearchError> {
        match self.idx(pos) {
            Some(i) if pather.is_traversable(pos) => Ok(i),
            _ => {
                debug!("rejecting search: {endpoint} {pos} is not traversable");
                Err(SearchError::InvalidEndpoint { endpoint, pos })
            }
        }
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Heuristic;
    use crate::node::PathNode;
    use tilenav_core::{Tile, Tilemap};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn map(s: &str) -> Tilemap {
        Tilemap::from_ascii(s).unwrap()
    }

    fn both_modes() -> [SearchConfig; 2] {
        [SearchConfig::dijkstra(), SearchConfig::astar()]
    }

    #[test]
    fn straight_corridor() {
        let grid = map("...");
        for config in both_modes() {
            let mut pf = Pathfinder::new(config);
            let path = pf.find_path(&grid, p(0, 0), p(2, 0)).unwrap();
            assert_eq!(path, vec![p(0, 0), p(1, 0), p(2, 0)]);
            assert_eq!(pf.status(), SearchStatus::Found);
            assert_eq!(pf.path_cost(), Some(2.0));
        }
    }

    #[test]
    fn wall_blocks_only_route() {
        let grid = map(".#.");
        for config in both_modes() {
            let mut pf = Pathfinder::new(config);
            let path = pf.find_path(&grid, p(0, 0), p(2, 0)).unwrap();
            assert!(path.is_empty());
            assert_eq!(pf.status(), SearchStatus::Exhausted);
            assert_eq!(pf.path_cost(), None);
        }
    }

    #[test]
    fn start_equals_goal() {
        let grid = map("...");
        let mut pf = Pathfinder::default();
        pf.initialize(&grid, p(1, 0), p(1, 0)).unwrap();
        assert_eq!(pf.path(), &[p(1, 0)]);
        assert_eq!(pf.step(&grid), SearchStatus::Found);
        assert_eq!(pf.path(), &[p(1, 0)]);
        assert!(pf.settled().is_empty());
    }

    #[test]
    fn invalid_endpoints_are_rejected() {
        let grid = map(".#.");
        let mut pf = Pathfinder::default();
        assert_eq!(
            pf.initialize(&grid, p(1, 0), p(2, 0)),
            Err(SearchError::InvalidEndpoint {
                endpoint: Endpoint::Start,
                pos: p(1, 0)
            })
        );
        assert_eq!(
            pf.initialize(&grid, p(0, 0), p(7, 0)),
            Err(SearchError::InvalidEndpoint {
                endpoint: Endpoint::Goal,
                pos: p(7, 0)
            })
        );
        assert_eq!(pf.status(), SearchStatus::Exhausted);
        assert_eq!(pf.step(&grid), SearchStatus::Exhausted);
        assert!(pf.frontier().is_empty());
    }

    #[test]
    fn failed_initialize_discards_previous_run() {
        let grid = map("....");
        let mut pf = Pathfinder::default();
        pf.find_path(&grid, p(0, 0), p(3, 0)).unwrap();
        assert!(!pf.settled().is_empty());
        assert!(pf.initialize(&grid, p(0, 0), p(9, 9)).is_err());
        assert!(pf.settled().is_empty());
        assert!(pf.edges().is_empty());
        assert!(pf.path().is_empty());
    }

    #[test]
    fn weighted_terrain_is_avoided() {
        // The direct route crosses a 9-cost tile; going around costs 4.
        let grid = map(
            "
.9.
...",
        );
        for config in both_modes() {
            let mut pf = Pathfinder::new(config);
            let path = pf.find_path(&grid, p(0, 0), p(2, 0)).unwrap();
            assert_eq!(path, vec![p(0, 0), p(0, 1), p(1, 1), p(2, 1), p(2, 0)]);
            assert_eq!(pf.path_cost(), Some(4.0));
        }
    }

    #[test]
    fn zero_cost_tiles() {
        let mut grid = Tilemap::new(4, 1);
        grid.set(p(1, 0), Tile::weighted(0.0)).unwrap();
        grid.set(p(2, 0), Tile::weighted(0.0)).unwrap();
        for config in both_modes() {
            let mut pf = Pathfinder::new(config);
            let path = pf.find_path(&grid, p(0, 0), p(3, 0)).unwrap();
            assert_eq!(path.len(), 4);
            assert_eq!(pf.path_cost(), Some(1.0));
        }
    }

    #[test]
    fn step_after_termination_is_noop() {
        let grid = map(
            "
...
.#.
...",
        );
        for goal in [p(2, 2), p(1, 1)] {
            let mut pf = Pathfinder::default();
            if pf.initialize(&grid, p(0, 0), goal).is_err() {
                continue;
            }
            let status = pf.run_to_completion(&grid);
            let before = pf.snapshot();
            for _ in 0..5 {
                assert_eq!(pf.step(&grid), status);
            }
            assert_eq!(pf.snapshot(), before);
        }

        let unreachable = map(".#.");
        let mut pf = Pathfinder::default();
        pf.initialize(&unreachable, p(0, 0), p(2, 0)).unwrap();
        assert_eq!(pf.run_to_completion(&unreachable), SearchStatus::Exhausted);
        let before = pf.snapshot();
        assert_eq!(pf.step(&unreachable), SearchStatus::Exhausted);
        assert_eq!(pf.snapshot(), before);
    }

    #[test]
    fn settled_costs_never_change() {
        let grid = map(
            "
..2..
.#3#.
..1..
.#.#.
.....",
        );
        for config in both_modes() {
            let mut pf = Pathfinder::new(config);
            pf.initialize(&grid, p(0, 0), p(4, 4)).unwrap();
            let mut seen = std::collections::HashMap::new();
            while !pf.step(&grid).is_done() {
                for node in pf.settled() {
                    let cost = *seen.entry(node.pos).or_insert(node.cost);
                    assert_eq!(cost, node.cost);
                }
            }
        }
    }

    #[test]
    fn frontier_and_settled_are_disjoint() {
        let grid = map(
            "
....
.##.
....",
        );
        let mut pf = Pathfinder::new(SearchConfig::dijkstra().with_seed_unvisited(true));
        pf.initialize(&grid, p(0, 0), p(3, 2)).unwrap();
        loop {
            let frontier: Vec<Point> = pf.frontier().iter().map(|n| n.pos).collect();
            for s in pf.settled() {
                assert!(!frontier.contains(&s.pos));
            }
            if pf.step(&grid).is_done() {
                break;
            }
        }
    }

    #[test]
    fn disconnected_grid_halts() {
        let grid = map(
            "
..#..
..#..
###..",
        );
        let mut pf = Pathfinder::default();
        pf.initialize(&grid, p(0, 0), p(4, 2)).unwrap();
        assert_eq!(pf.run_to_completion(&grid), SearchStatus::Exhausted);
        // The four cells of the left pocket are the only ones settled.
        assert_eq!(pf.settled().len(), 4);
        assert_eq!(pf.steps(), 4);
    }

    #[test]
    fn restart_clears_previous_state() {
        let grid = map(
            "
.....
.....
.....",
        );
        let mut pf = Pathfinder::default();
        pf.initialize(&grid, p(0, 0), p(4, 2)).unwrap();
        pf.run_to_completion(&grid);

        pf.set_start_and_goal(&grid, p(4, 0), p(3, 0)).unwrap();
        assert!(pf.settled().is_empty());
        assert_eq!(pf.frontier(), vec![PathNode { pos: p(4, 0), cost: 0.0 }]);
        assert!(pf.edges().is_empty());
        assert!(pf.path().is_empty());
        assert_eq!(pf.current(), p(4, 0));

        pf.run_to_completion(&grid);
        assert_eq!(pf.path(), &[p(4, 0), p(3, 0)]);
    }

    #[test]
    fn restart_on_resized_grid() {
        let small = map("..");
        let big = map(
            "
....
....",
        );
        let mut pf = Pathfinder::default();
        pf.find_path(&small, p(0, 0), p(1, 0)).unwrap();
        let path = pf.find_path(&big, p(0, 0), p(3, 1)).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.last(), Some(&p(3, 1)));
    }

    #[test]
    fn resuming_after_pause_matches_single_run() {
        let grid = map(
            "
......
.####.
......",
        );
        let mut paused = Pathfinder::new(SearchConfig::dijkstra());
        paused.initialize(&grid, p(0, 0), p(5, 2)).unwrap();
        for _ in 0..3 {
            paused.step(&grid);
        }
        // Caller stops polling for a while, then resumes.
        paused.run_to_completion(&grid);

        let mut straight = Pathfinder::new(SearchConfig::dijkstra());
        let path = straight.find_path(&grid, p(0, 0), p(5, 2)).unwrap();
        assert_eq!(paused.path(), path.as_slice());
        assert_eq!(paused.snapshot(), straight.snapshot());
    }

    #[test]
    fn astar_settles_fewer_cells_than_dijkstra() {
        let grid = Tilemap::new(12, 12);
        let mut dijkstra = Pathfinder::new(SearchConfig::dijkstra());
        let mut astar = Pathfinder::new(SearchConfig::astar());
        dijkstra.find_path(&grid, p(0, 5), p(11, 5)).unwrap();
        astar.find_path(&grid, p(0, 5), p(11, 5)).unwrap();
        assert_eq!(astar.steps(), 11);
        assert!(astar.steps() < dijkstra.steps());
        assert_eq!(astar.path_cost(), dijkstra.path_cost());
    }

    #[test]
    fn identical_runs_are_deterministic() {
        let grid = Tilemap::new(6, 6);
        let run = || {
            let mut pf = Pathfinder::new(SearchConfig::dijkstra());
            pf.find_path(&grid, p(0, 0), p(5, 5)).unwrap()
        };
        let first = run();
        assert_eq!(first, run());
        assert_eq!(first.len(), 11);
    }

    #[test]
    fn seeded_frontier_lists_every_traversable_cell() {
        let grid = map(".#\n..");
        let mut pf = Pathfinder::new(SearchConfig::default().with_seed_unvisited(true));
        pf.initialize(&grid, p(0, 0), p(1, 1)).unwrap();
        let frontier = pf.frontier();
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier[0], PathNode { pos: p(0, 0), cost: 0.0 });
        assert!(frontier[1..].iter().all(|n| n.cost == UNREACHABLE));
        assert_eq!(pf.run_to_completion(&grid), SearchStatus::Found);
        assert_eq!(pf.path(), &[p(0, 0), p(0, 1), p(1, 1)]);
    }

    #[test]
    fn seeded_unreachable_cells_do_not_block_exhaustion() {
        let grid = map(".#.");
        let mut pf = Pathfinder::new(SearchConfig::default().with_seed_unvisited(true));
        pf.initialize(&grid, p(0, 0), p(2, 0)).unwrap();
        assert_eq!(pf.run_to_completion(&grid), SearchStatus::Exhausted);
        // The goal stays in the frontier at infinite cost.
        assert_eq!(pf.frontier_cost_at(p(2, 0)), Some(UNREACHABLE));
    }

    #[test]
    fn config_change_applies_on_restart() {
        let grid = Tilemap::new(5, 5);
        let mut pf = Pathfinder::new(SearchConfig::dijkstra());
        pf.initialize(&grid, p(0, 0), p(4, 4)).unwrap();
        pf.set_config(SearchConfig::default().with_heuristic(Heuristic::Manhattan));
        assert_eq!(pf.estimate_at(p(0, 0)), 8.0);
        pf.restart(&grid).unwrap();
        assert_eq!(pf.run_to_completion(&grid), SearchStatus::Found);
        assert_eq!(pf.path_cost(), Some(8.0));
    }

    #[test]
    fn modes_agree_on_random_grids() {
        use rand::rngs::StdRng;
        use rand::{RngExt, SeedableRng};
        use tilenav_core::{MapGen, WallScatter};

        let mut rng = StdRng::seed_from_u64(0x7117);
        for round in 0..60 {
            let mut grid = Tilemap::new(rng.random_range(2..14), rng.random_range(2..14));
            let rule = WallScatter {
                wall_fraction: rng.random_range(0.0..0.45),
                ..WallScatter::default()
            };
            let mut mg = MapGen::new(StdRng::seed_from_u64(round));
            mg.scatter_walls(&mut grid, &rule);
            // Sprinkle some expensive terrain.
            for _ in 0..rng.random_range(0..8) {
                let c = p(rng.random_range(0..grid.width()), rng.random_range(0..grid.height()));
                if grid.is_traversable(c) {
                    grid.set(c, Tile::weighted(rng.random_range(2..6) as f32)).unwrap();
                }
            }
            let (Some(start), Some(goal)) = (mg.random_floor(&grid), mg.random_floor(&grid)) else {
                continue;
            };

            let mut dijkstra = Pathfinder::new(SearchConfig::dijkstra());
            let mut astar = Pathfinder::new(SearchConfig::astar());
            let dp = dijkstra.find_path(&grid, start, goal).unwrap();
            let ap = astar.find_path(&grid, start, goal).unwrap();
            assert_eq!(dp.is_empty(), ap.is_empty(), "round {round}:\n{grid}");
            assert_eq!(dijkstra.path_cost(), astar.path_cost(), "round {round}:\n{grid}");

            // The reported cost matches the cost of walking the path.
            if let Some(cost) = astar.path_cost() {
                let walked: f32 = ap[1..].iter().map(|&c| grid.cost_of(c)).sum();
                assert_eq!(walked, cost);
                for w in ap.windows(2) {
                    assert_eq!(crate::distance::manhattan(w[0], w[1]), 1);
                }
            }
        }
    }

    /// A pather relying on the trait's default adjacency and unit costs.
    struct Ring {
        size: i32,
    }

    impl crate::traits::Pather for Ring {
        fn bounds(&self) -> Range {
            Range::new(0, 0, self.size, self.size)
        }

        fn is_traversable(&self, p: Point) -> bool {
            let edge = self.size - 1;
            self.bounds().contains(p) && (p.x == 0 || p.y == 0 || p.x == edge || p.y == edge)
        }
    }

    impl WeightedPather for Ring {}

    #[test]
    fn default_trait_methods() {
        let ring = Ring { size: 5 };
        assert_eq!(crate::traits::Pather::traversable_cells(&ring).len(), 16);
        let mut pf = Pathfinder::new(SearchConfig::astar().with_seed_unvisited(true));
        pf.initialize(&ring, p(0, 0), p(4, 4)).unwrap();
        assert_eq!(pf.frontier().len(), 16);
        assert_eq!(pf.run_to_completion(&ring), SearchStatus::Found);
        assert_eq!(pf.path_cost(), Some(8.0));
        assert!(pf.initialize(&ring, p(2, 2), p(4, 4)).is_err());
    }

    /// Open everywhere, but searchable only inside an offset rectangle.
    struct Offset;

    impl crate::traits::Pather for Offset {
        fn bounds(&self) -> Range {
            Range::new(3, 2, 6, 4)
        }

        fn is_traversable(&self, _p: Point) -> bool {
            true
        }
    }

    impl WeightedPather for Offset {}

    #[test]
    fn endpoints_map_to_their_own_cells() {
        let mut pf = Pathfinder::new(SearchConfig::dijkstra());
        pf.initialize(&Offset, p(5, 3), p(3, 2)).unwrap();
        assert_eq!(pf.frontier(), vec![PathNode { pos: p(5, 3), cost: 0.0 }]);
        pf.step(&Offset);
        assert_eq!(pf.settled(), vec![PathNode { pos: p(5, 3), cost: 0.0 }]);
        assert_eq!(pf.run_to_completion(&Offset), SearchStatus::Found);
        assert_eq!(pf.path_cost(), Some(3.0));

        // Traversable but outside the bounds.
        assert_eq!(
            pf.initialize(&Offset, p(0, 0), p(3, 2)),
            Err(SearchError::InvalidEndpoint {
                endpoint: Endpoint::Start,
                pos: p(0, 0)
            })
        );
    }
}
