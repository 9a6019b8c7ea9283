//! Command-line configuration for the demo.

use std::path::PathBuf;

use clap::{Parser, ValueEnum, value_parser};
use tilenav_paths::Heuristic;

const DEFAULT_WIDTH: i32 = 16;
const DEFAULT_HEIGHT: i32 = 12;
const DEFAULT_WALLS: f64 = 0.2;

/// Search mode the demo starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Uniform-cost search
    Dijkstra,
    /// A* with a Manhattan heuristic
    Astar,
}

impl Mode {
    pub fn heuristic(self) -> Heuristic {
        match self {
            Self::Dijkstra => Heuristic::None,
            Self::Astar => Heuristic::Manhattan,
        }
    }
}

/// Watch Dijkstra and A* explore a random tile map one step at a time.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tilenav", version, about, long_about = None)]
pub struct DemoConfig {
    /// Map width in tiles
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = value_parser!(i32).range(2..=200))]
    pub width: i32,

    /// Map height in tiles
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = value_parser!(i32).range(2..=200))]
    pub height: i32,

    /// Fraction of tiles turned into walls, 0.0-1.0
    #[arg(long = "walls", value_name = "FRACTION", default_value_t = DEFAULT_WALLS, value_parser = parse_fraction)]
    pub wall_fraction: f64,

    /// Random seed for map generation (default: random)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Search mode at startup
    #[arg(long, value_enum, default_value_t = Mode::Astar)]
    pub mode: Mode,

    /// Write debug logs to FILE
    #[arg(long = "log", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            wall_fraction: DEFAULT_WALLS,
            seed: None,
            mode: Mode::Astar,
            log_file: None,
        }
    }
}

fn parse_fraction(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(format!("{v} is not between 0.0 and 1.0"))
    }
}
