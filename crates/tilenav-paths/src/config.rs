use tilenav_core::Point;

use crate::distance::manhattan;

/// Priority estimate added to the accumulated cost of frontier cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// No estimate: plain uniform-cost search (Dijkstra).
    None,
    /// Manhattan distance to the goal (A*). Admissible and consistent on
    /// 4-directional grids once scaled by the minimum step cost.
    #[default]
    Manhattan,
}

impl Heuristic {
    /// Estimated remaining cost from `from` to `goal`, given that no step
    /// costs less than `min_cost`.
    #[inline]
    pub fn estimate(self, from: Point, goal: Point, min_cost: f32) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Manhattan => manhattan(from, goal) as f32 * min_cost,
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::None => Self::Manhattan,
            Self::Manhattan => Self::None,
        }
    }

    /// Short human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "dijkstra",
            Self::Manhattan => "a*",
        }
    }
}

/// Options for a [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    /// When set, every traversable cell starts in the frontier with an
    /// infinite cost instead of being discovered lazily. Only the debug view
    /// differs; the search itself is unchanged.
    pub seed_unvisited: bool,
}

impl SearchConfig {
    /// Uniform-cost search configuration.
    pub fn dijkstra() -> Self {
        Self::default().with_heuristic(Heuristic::None)
    }

    /// A* with the Manhattan heuristic.
    pub fn astar() -> Self {
        Self::default().with_heuristic(Heuristic::Manhattan)
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_seed_unvisited(mut self, seed: bool) -> Self {
        self.seed_unvisited = seed;
        self
    }
}
