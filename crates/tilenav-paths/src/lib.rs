//! Steppable shortest-path search over tile grids.
//!
//! One engine, [`Pathfinder`], covers both uniform-cost search (Dijkstra) and
//! A* with a Manhattan heuristic; the mode is picked through
//! [`SearchConfig`]. A search can be advanced one expansion at a time with
//! [`Pathfinder::step`], e.g. once per rendered frame, or finished in one go
//! with [`Pathfinder::run_to_completion`].
//!
//! ```
//! use tilenav_core::{Point, Tilemap};
//! use tilenav_paths::{Pathfinder, SearchConfig, SearchStatus};
//!
//! let map = Tilemap::from_ascii("...\n.#.\n...").unwrap();
//! let mut pf = Pathfinder::new(SearchConfig::astar());
//! pf.initialize(&map, Point::new(0, 0), Point::new(2, 2)).unwrap();
//! assert_eq!(pf.run_to_completion(&map), SearchStatus::Found);
//! assert_eq!(pf.path().len(), 5);
//! ```
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | bounds, traversability, adjacency |
//! | [`WeightedPather`] : [`Pather`] | per-cell entry cost |
//!
//! [`Tilemap`](tilenav_core::Tilemap) implements both.

mod config;
mod debug;
mod distance;
mod error;
mod node;
mod path;
mod search;
mod traits;

pub use config::{Heuristic, SearchConfig};
pub use debug::SearchSnapshot;
pub use distance::manhattan;
pub use error::{Endpoint, SearchError};
pub use node::{PathNode, UNREACHABLE};
pub use path::{reconstruct, reconstruct_from_map};
pub use search::{Pathfinder, SearchStatus};
pub use traits::{Pather, WeightedPather};
