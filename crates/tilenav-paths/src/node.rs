use std::cmp::Ordering;

use tilenav_core::Point;

/// A cell with an associated cost, as reported by the debug accessors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: f32,
}

/// Cost of a cell that has not been reached.
pub const UNREACHABLE: f32 = f32::INFINITY;

/// Parent sentinel for cells without a predecessor.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-cell search record
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeState {
    Unvisited,
    Open,
    Settled,
}

/// Search record for one cell. Only meaningful when `generation` matches the
/// engine's current generation; older records read as unvisited.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: f32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) state: NodeState,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: NO_PARENT,
            generation: 0,
            state: NodeState::Unvisited,
        }
    }
}

// ---------------------------------------------------------------------------
// Frontier heap entry
// ---------------------------------------------------------------------------

/// Frontier entry ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// priority first, breaking ties by row-major cell order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) pos: Point,
    /// Accumulated cost when pushed; the entry is stale once the node's `g`
    /// differs.
    pub(crate) g: f32,
    /// `g` plus heuristic estimate.
    pub(crate) f: f32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.pos.cmp(&self.pos))
            .then_with(|| other.g.total_cmp(&self.g))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}
