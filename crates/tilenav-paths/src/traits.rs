use tilenav_core::{Point, Range, Tilemap};

/// Minimal pathfinding interface: bounds, traversability and adjacency.
pub trait Pather {
    /// Rectangle of cells the search may visit. Cells outside are never
    /// traversable.
    fn bounds(&self) -> Range;

    /// Whether `p` is inside [`bounds`](Self::bounds) and can be entered.
    fn is_traversable(&self, p: Point) -> bool;

    /// Append neighbours of `p` into `buf`. The caller clears `buf` before
    /// calling. Defaults to the traversable orthogonal neighbours in the
    /// order up, right, down, left.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.is_traversable(n) {
                buf.push(n);
            }
        }
    }

    /// Every traversable cell, in row-major order.
    fn traversable_cells(&self) -> Vec<Point> {
        self.bounds()
            .iter()
            .filter(|&p| self.is_traversable(p))
            .collect()
    }
}

/// Pather whose cells carry a non-negative entry cost.
pub trait WeightedPather: Pather {
    /// Cost of stepping onto `p`. Must be finite and >= 0.
    fn cost_of(&self, _p: Point) -> f32 {
        1.0
    }

    /// Smallest [`cost_of`](Self::cost_of) over traversable cells. Heuristic
    /// estimates are scaled by this value so they never overestimate.
    fn min_cost(&self) -> f32 {
        1.0
    }
}

impl Pather for Tilemap {
    fn bounds(&self) -> Range {
        Tilemap::bounds(self)
    }

    fn is_traversable(&self, p: Point) -> bool {
        Tilemap::is_traversable(self, p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        Tilemap::neighbors(self, p, buf)
    }

    fn traversable_cells(&self) -> Vec<Point> {
        Tilemap::traversable_cells(self)
    }
}

impl WeightedPather for Tilemap {
    fn cost_of(&self, p: Point) -> f32 {
        Tilemap::cost_of(self, p)
    }

    fn min_cost(&self) -> f32 {
        Tilemap::min_cost(self).unwrap_or(0.0)
    }
}
