//! The [`Tilemap`] type: a fixed-size grid of [`Tile`]s describing where an
//! agent may walk and how expensive each step is.
//!
//! Maps can be built programmatically or parsed from ASCII art:
//!
//! ```
//! use tilenav_core::{Point, Tilemap};
//!
//! let map = Tilemap::from_ascii("..#\n.3.").unwrap();
//! assert!(!map.is_traversable(Point::new(2, 0)));
//! assert_eq!(map.cost_of(Point::new(1, 1)), 3.0);
//! ```

use std::fmt;

use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// A single map cell: whether it can be entered and the cost of entering it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub traversable: bool,
    pub cost: f32,
}

impl Tile {
    /// Open ground with unit cost.
    pub const FLOOR: Self = Self {
        traversable: true,
        cost: 1.0,
    };

    /// A blocked cell.
    pub const WALL: Self = Self {
        traversable: false,
        cost: 1.0,
    };

    /// Traversable terrain with a custom entry cost.
    #[inline]
    pub const fn weighted(cost: f32) -> Self {
        Self {
            traversable: true,
            cost,
        }
    }

    fn from_rune(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::FLOOR),
            '#' => Some(Self::WALL),
            '1'..='9' => ch.to_digit(10).map(|d| Self::weighted(d as f32)),
            _ => None,
        }
    }

    fn rune(self) -> char {
        if !self.traversable {
            return '#';
        }
        if self.cost == 1.0 {
            return '.';
        }
        if self.cost.fract() == 0.0 && (2.0..=9.0).contains(&self.cost) {
            return char::from_digit(self.cost as u32, 10).unwrap_or('?');
        }
        '?'
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::FLOOR
    }
}

// ---------------------------------------------------------------------------
// Tilemap
// ---------------------------------------------------------------------------

/// A `width * height` grid of tiles stored row-major.
///
/// Dimensions are fixed at construction. Coordinates outside
/// `[0, width) x [0, height)` are never traversable, and every tile's cost is
/// finite and non-negative.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTilemap")
)]
pub struct Tilemap {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
}

impl Tilemap {
    /// Create a map of the given size filled with [`Tile::FLOOR`].
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            tiles: vec![Tile::FLOOR; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Parse a map from ASCII art.
    ///
    /// `.` is floor, `#` is wall and the digits `1`–`9` are floor with that
    /// entry cost. Lines must all have the same width; surrounding blank
    /// lines are ignored.
    pub fn from_ascii(s: &str) -> Result<Self, TilemapError> {
        let s = s.trim_matches('\n');
        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        if lines.iter().any(|l| l.chars().count() != width) {
            return Err(TilemapError::InconsistentSize(s.to_string()));
        }

        let mut tiles = Vec::with_capacity(width * lines.len());
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let tile = Tile::from_rune(ch).ok_or_else(|| TilemapError::InvalidRune {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                tiles.push(tile);
            }
        }

        Ok(Self {
            tiles,
            width: width as i32,
            height: lines.len() as i32,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The rectangle of valid coordinates.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `p` lies inside the map.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// The tile at `p`, or `None` outside the map.
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Replace the tile at `p`.
    ///
    /// Fails if `p` is outside the map or the tile's cost is negative or
    /// not finite.
    pub fn set(&mut self, p: Point, tile: Tile) -> Result<(), TilemapError> {
        validate_cost(tile)?;
        let i = self.index(p).ok_or(TilemapError::OutOfBounds(p))?;
        self.tiles[i] = tile;
        Ok(())
    }

    /// Fill every cell with `tile`.
    pub fn fill(&mut self, tile: Tile) -> Result<(), TilemapError> {
        validate_cost(tile)?;
        self.tiles.fill(tile);
        Ok(())
    }

    /// Whether `p` is inside the map and not a wall.
    #[inline]
    pub fn is_traversable(&self, p: Point) -> bool {
        self.at(p).is_some_and(|t| t.traversable)
    }

    /// Cost of entering `p`. Cells outside the map report the default cost
    /// of 1; callers only ask about traversable cells.
    #[inline]
    pub fn cost_of(&self, p: Point) -> f32 {
        self.at(p).map_or(1.0, |t| t.cost)
    }

    /// Append the traversable orthogonal neighbours of `p` to `buf`, in the
    /// order up, right, down, left.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| self.is_traversable(n)),
        );
    }

    /// Every traversable cell, in row-major order.
    pub fn traversable_cells(&self) -> Vec<Point> {
        self.bounds()
            .iter()
            .filter(|&p| self.is_traversable(p))
            .collect()
    }

    /// The cheapest entry cost among traversable cells, or `None` when the
    /// map has no traversable cell.
    pub fn min_cost(&self) -> Option<f32> {
        self.tiles
            .iter()
            .filter(|t| t.traversable)
            .map(|t| t.cost)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.tiles.iter().filter(|t| !t.traversable).count()
    }
}

/// Unchecked serialized form of a [`Tilemap`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTilemap {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTilemap> for Tilemap {
    type Error = TilemapError;

    fn try_from(raw: RawTilemap) -> Result<Self, Self::Error> {
        let RawTilemap {
            tiles,
            width,
            height,
        } = raw;
        let expected = (width.max(0) as usize) * (height.max(0) as usize);
        if width < 0 || height < 0 || tiles.len() != expected {
            return Err(TilemapError::TileCount {
                width,
                height,
                tiles: tiles.len(),
            });
        }
        for &tile in &tiles {
            validate_cost(tile)?;
        }
        Ok(Self {
            tiles,
            width,
            height,
        })
    }
}

fn validate_cost(tile: Tile) -> Result<(), TilemapError> {
    if tile.cost.is_finite() && tile.cost >= 0.0 {
        Ok(())
    } else {
        Err(TilemapError::InvalidCost(tile.cost))
    }
}

/// Renders the map in the same ASCII form [`Tilemap::from_ascii`] accepts.
/// Costs with no single-digit representation are drawn as `?`.
impl fmt::Display for Tilemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                let tile = self.at(Point::new(x, y)).unwrap_or(Tile::WALL);
                write!(f, "{}", tile.rune())?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TilemapError
// ---------------------------------------------------------------------------

/// Errors that can occur when building or editing a [`Tilemap`].
#[derive(Debug, Clone, PartialEq)]
pub enum TilemapError {
    /// Lines of an ASCII map have different widths.
    InconsistentSize(String),
    /// An ASCII map contains a character with no tile meaning.
    InvalidRune { ch: char, pos: Point },
    /// A coordinate outside the map was written to.
    OutOfBounds(Point),
    /// A tile cost was negative, infinite or NaN.
    InvalidCost(f32),
    /// Serialized tiles do not fill a `width * height` map.
    TileCount { width: i32, height: i32, tiles: usize },
}

impl fmt::Display for TilemapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "tilemap: inconsistent line widths:\n{s}"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "tilemap: invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::OutOfBounds(p) => write!(f, "tilemap: {p} is outside the map"),
            Self::InvalidCost(c) => write!(f, "tilemap: invalid tile cost {c}"),
            Self::TileCount {
                width,
                height,
                tiles,
            } => write!(f, "tilemap: {tiles} tiles do not fill a {width}x{height} map"),
        }
    }
}

impl std::error::Error for TilemapError {}
