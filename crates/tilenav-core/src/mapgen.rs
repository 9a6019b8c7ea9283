//! Random level generation.
//!
//! [`MapGen`] scatters walls over a [`Tilemap`], leaving chosen cells open so
//! that a start and goal can always be placed.

use log::debug;
use rand::{Rng, RngExt};

use crate::geom::Point;
use crate::tilemap::{Tile, Tilemap};

/// Parameters for [`MapGen::scatter_walls`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallScatter {
    /// Fraction of all cells (0.0–1.0) that become walls.
    pub wall_fraction: f64,
    /// Cells that must stay open.
    pub keep_clear: Vec<Point>,
}

impl Default for WallScatter {
    fn default() -> Self {
        Self {
            wall_fraction: 0.2,
            keep_clear: Vec::new(),
        }
    }
}

impl WallScatter {
    /// Builder: set the cells that must stay open.
    pub fn with_keep_clear(mut self, cells: impl IntoIterator<Item = Point>) -> Self {
        self.keep_clear = cells.into_iter().collect();
        self
    }
}

/// Map generator driven by a random number generator.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Reset `map` to floor, then turn `wall_fraction` of its cells into
    /// walls, chosen uniformly among cells not listed in `keep_clear`.
    ///
    /// Returns the number of walls placed.
    pub fn scatter_walls(&mut self, map: &mut Tilemap, rule: &WallScatter) -> usize {
        for p in map.bounds() {
            // In-bounds writes of a floor tile cannot fail.
            let _ = map.set(p, Tile::FLOOR);
        }

        let mut candidates: Vec<Point> = map
            .bounds()
            .iter()
            .filter(|p| !rule.keep_clear.contains(p))
            .collect();
        let total = map.bounds().len();
        let fraction = rule.wall_fraction.clamp(0.0, 1.0);
        let target = ((total as f64 * fraction) as usize).min(candidates.len());

        // Partial Fisher-Yates: the first `target` slots end up a uniform
        // sample of the candidates.
        for i in 0..target {
            let j = self.rng.random_range(i..candidates.len());
            candidates.swap(i, j);
            let _ = map.set(candidates[i], Tile::WALL);
        }

        debug!(
            "scattered {target} walls over {}x{} map",
            map.width(),
            map.height()
        );
        target
    }

    /// A uniformly chosen traversable cell, or `None` if the map is all wall.
    pub fn random_floor(&mut self, map: &Tilemap) -> Option<Point> {
        let cells = map.traversable_cells();
        if cells.is_empty() {
            return None;
        }
        Some(cells[self.rng.random_range(0..cells.len())])
    }
}
