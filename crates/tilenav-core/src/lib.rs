//! **tilenav-core** — tile grid primitives for the *tilenav* pathfinding
//! workspace.
//!
//! This crate provides the coordinate types ([`Point`], [`Range`]), the
//! [`Tilemap`] describing traversable terrain and its movement costs, and a
//! small random map generator.

pub mod geom;
pub mod mapgen;
pub mod tilemap;

pub use geom::{Point, Range, RangeIter};
pub use mapgen::{MapGen, WallScatter};
pub use tilemap::{Tile, Tilemap, TilemapError};
