//! The demo model: owns the map and the pathfinder, reacts to input
//! messages and renders everything into a [`Frame`].
//!
//! Nothing here touches the terminal, so the whole interaction can be driven
//! from tests.

use log::{debug, info, warn};
use rand::{RngExt, SeedableRng};
use rand::rngs::StdRng;
use tilenav_core::{MapGen, Point, Tile, Tilemap, WallScatter};
use tilenav_paths::{Heuristic, Pathfinder, SearchConfig, SearchStatus};

use crate::config::DemoConfig;
use crate::frame::{Cell, Color, Frame};

/// Screen columns used by one map tile.
pub const TILE_W: u16 = 4;
/// Text rows above the map.
pub const HEADER_ROWS: u16 = 4;

const HELP_1: &str = "space step  enter solve  a auto  r restart  m dijkstra/a*  tab overlay";
const HELP_2: &str = "arrows/hjkl cursor  g goal  s start  w wall  n new map  click goal  q quit";

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Space,
    Escape,
    Tab,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

/// Input delivered to [`Demo::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    KeyDown(Key),
    /// Main mouse button pressed at a screen position.
    Click { col: u16, row: u16 },
    /// Periodic frame tick.
    Tick,
}

/// Side effect requested by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Quit,
}

/// What is written inside each tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Frontier and settled costs.
    Costs,
    /// Cost plus heuristic estimate.
    CostPlusEstimate,
    /// Arrows towards each cell's predecessor.
    Edges,
    Off,
}

impl Overlay {
    fn next(self) -> Self {
        match self {
            Self::Costs => Self::CostPlusEstimate,
            Self::CostPlusEstimate => Self::Edges,
            Self::Edges => Self::Off,
            Self::Off => Self::Costs,
        }
    }
}

// ---------------------------------------------------------------------------
// Demo
// ---------------------------------------------------------------------------

pub struct Demo {
    map: Tilemap,
    finder: Pathfinder,
    mapgen: MapGen<StdRng>,
    wall_fraction: f64,
    start: Point,
    goal: Point,
    cursor: Point,
    overlay: Overlay,
    auto: bool,
    message: String,
}

impl Demo {
    /// Create a demo on a freshly generated random map.
    pub fn new(config: &DemoConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        info!("map seed {seed}");
        let rng = StdRng::seed_from_u64(seed);
        let mut demo = Self::build(Tilemap::new(config.width, config.height), rng, config);
        demo.new_map();
        demo
    }

    /// Create a demo on a given map, with start in the top-left corner and
    /// goal in the bottom-right one.
    pub fn with_map(map: Tilemap, config: &DemoConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed.unwrap_or_default());
        let mut demo = Self::build(map, rng, config);
        let (start, goal) = demo.corners();
        demo.set_endpoints(start, goal);
        demo
    }

    fn build(map: Tilemap, rng: StdRng, config: &DemoConfig) -> Self {
        Self {
            map,
            finder: Pathfinder::new(SearchConfig::default().with_heuristic(config.mode.heuristic())),
            mapgen: MapGen::new(rng),
            wall_fraction: config.wall_fraction,
            start: Point::ZERO,
            goal: Point::ZERO,
            cursor: Point::ZERO,
            overlay: Overlay::Costs,
            auto: false,
            message: String::new(),
        }
    }

    pub fn map(&self) -> &Tilemap {
        &self.map
    }

    pub fn finder(&self) -> &Pathfinder {
        &self.finder
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn corners(&self) -> (Point, Point) {
        (
            Point::ZERO,
            Point::new(self.map.width() - 1, self.map.height() - 1),
        )
    }

    /// Process one input message.
    pub fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::KeyDown(key) => return self.key_down(key),
            Msg::Click { col, row } => {
                if let Some(p) = self.screen_to_tile(col, row) {
                    self.cursor = p;
                    self.set_endpoints(self.start, p);
                }
            }
            Msg::Tick => {
                if self.auto && self.finder.step(&self.map).is_done() {
                    self.auto = false;
                }
            }
        }
        None
    }

    fn key_down(&mut self, key: Key) -> Option<Effect> {
        match key {
            Key::Escape | Key::Char('q') => return Some(Effect::Quit),
            Key::Space => {
                if self.finder.status().is_done() {
                    self.restart();
                } else {
                    self.finder.step(&self.map);
                }
            }
            Key::Enter => {
                self.finder.run_to_completion(&self.map);
            }
            Key::Char('a') => self.auto = !self.auto,
            Key::Char('r') => self.restart(),
            Key::Char('m') => {
                let config = self.finder.config();
                let heuristic = config.heuristic.toggled();
                self.finder.set_config(config.with_heuristic(heuristic));
                info!("switched to {}", heuristic.name());
                self.restart();
            }
            Key::Char('n') => self.new_map(),
            Key::Char('g') => self.set_endpoints(self.start, self.cursor),
            Key::Char('s') => self.set_endpoints(self.cursor, self.goal),
            Key::Char('w') => self.toggle_wall(),
            Key::Tab => self.overlay = self.overlay.next(),
            Key::ArrowUp | Key::Char('k') => self.move_cursor(0, -1),
            Key::ArrowDown | Key::Char('j') => self.move_cursor(0, 1),
            Key::ArrowLeft | Key::Char('h') => self.move_cursor(-1, 0),
            Key::ArrowRight | Key::Char('l') => self.move_cursor(1, 0),
            Key::Char(_) => {}
        }
        None
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        self.cursor = self.map.bounds().clamp(self.cursor.shift(dx, dy));
    }

    fn restart(&mut self) {
        self.set_endpoints(self.start, self.goal);
    }

    /// Start a new search between `start` and `goal`. A rejected endpoint
    /// leaves the previous endpoints in place.
    fn set_endpoints(&mut self, start: Point, goal: Point) {
        match self.finder.set_start_and_goal(&self.map, start, goal) {
            Ok(()) => {
                self.start = start;
                self.goal = goal;
                self.message.clear();
            }
            Err(e) => {
                warn!("{e}");
                self.message = e.to_string();
                if let Err(e) = self.finder.set_start_and_goal(&self.map, self.start, self.goal) {
                    warn!("previous endpoints no longer valid: {e}");
                }
            }
        }
        self.auto = false;
    }

    fn new_map(&mut self) {
        let (start, goal) = self.corners();
        let rule = WallScatter {
            wall_fraction: self.wall_fraction,
            ..WallScatter::default()
        }
        .with_keep_clear([start, goal]);
        let walls = self.mapgen.scatter_walls(&mut self.map, &rule);
        info!(
            "new {}x{} map with {walls} walls",
            self.map.width(),
            self.map.height()
        );
        self.set_endpoints(start, goal);
    }

    fn toggle_wall(&mut self) {
        let p = self.cursor;
        if p == self.start || p == self.goal {
            self.message = "cannot wall off the start or goal".to_string();
            return;
        }
        let tile = if self.map.is_traversable(p) {
            Tile::WALL
        } else {
            Tile::FLOOR
        };
        if let Err(e) = self.map.set(p, tile) {
            warn!("{e}");
            return;
        }
        debug!("toggled tile at {p}");
        self.restart();
    }

    fn screen_to_tile(&self, col: u16, row: u16) -> Option<Point> {
        let row = row.checked_sub(HEADER_ROWS)?;
        let p = Point::new((col / TILE_W) as i32, row as i32);
        self.map.contains(p).then_some(p)
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Render the current state.
    pub fn draw(&self) -> Frame {
        let map_w = self.map.width() as u16 * TILE_W;
        let width = map_w.max(HELP_1.len() as u16).max(HELP_2.len() as u16);
        let height = HEADER_ROWS + self.map.height() as u16;
        let mut frame = Frame::new(width, height);

        frame.put_str(0, 0, HELP_1, Color::Grey, Color::Default);
        frame.put_str(0, 1, HELP_2, Color::Grey, Color::Default);
        frame.put_str(0, 2, &self.status_line(), Color::White, Color::Default);
        frame.put_str(0, 3, &self.message, Color::Yellow, Color::Default);

        let on_path: std::collections::HashSet<Point> =
            self.finder.path().iter().copied().collect();

        for p in self.map.bounds() {
            let bg = self.tile_bg(p, on_path.contains(&p));
            let (label, mut fg) = self.tile_label(p);
            if bg != Color::Default && bg != Color::DarkGrey {
                fg = Color::White;
            }
            let x0 = p.x as u16 * TILE_W;
            let y = HEADER_ROWS + p.y as u16;
            for (i, ch) in fit(&label).chars().enumerate() {
                frame.set(x0 + i as u16, y, Cell { ch, fg, bg });
            }
            if p == self.cursor {
                let cursor = Cell { ch: '[', fg: Color::Yellow, bg };
                frame.set(x0, y, cursor);
                frame.set(x0 + TILE_W - 1, y, cursor.with_char(']'));
            }
        }
        frame
    }

    fn status_line(&self) -> String {
        let f = &self.finder;
        let path = match f.path_cost() {
            Some(cost) => format!("path {} tiles, cost {}", f.path().len(), fmt_cost(cost)),
            None => "no path".to_string(),
        };
        format!(
            "{:<8} {:<9} settled {:<4} frontier {:<4} {path}{}",
            f.config().heuristic.name(),
            format!("{:?}", f.status()).to_lowercase(),
            f.steps(),
            f.frontier().len(),
            if self.auto { "  [auto]" } else { "" },
        )
    }

    fn tile_bg(&self, p: Point, on_path: bool) -> Color {
        if !self.map.is_traversable(p) {
            Color::DarkGrey
        } else if p == self.start {
            Color::Green
        } else if p == self.goal {
            Color::Red
        } else if p == self.finder.current() && self.finder.status() == SearchStatus::Searching {
            Color::Blue
        } else if on_path {
            Color::DarkBlue
        } else {
            Color::Default
        }
    }

    fn tile_label(&self, p: Point) -> (String, Color) {
        let f = &self.finder;
        match self.overlay {
            Overlay::Off => {
                let cost = self.map.cost_of(p);
                if self.map.is_traversable(p) && cost != 1.0 {
                    (fmt_cost(cost), Color::Magenta)
                } else {
                    (String::new(), Color::Default)
                }
            }
            Overlay::Costs => {
                if let Some(c) = f.settled_cost_at(p) {
                    (fmt_cost(c), Color::DarkGreen)
                } else if let Some(c) = f.frontier_cost_at(p) {
                    (fmt_cost(c), Color::Grey)
                } else {
                    (String::new(), Color::Default)
                }
            }
            Overlay::CostPlusEstimate => match f.cost_at(p) {
                Some(c) if f.config().heuristic == Heuristic::None => (fmt_cost(c), Color::Grey),
                Some(c) => (
                    format!("{}+{}", fmt_cost(c), fmt_cost(f.estimate_at(p))),
                    Color::Grey,
                ),
                None => (String::new(), Color::Default),
            },
            Overlay::Edges => match f.predecessor_of(p) {
                Some(prev) => (arrow(prev - p).to_string(), Color::DarkGreen),
                None => (String::new(), Color::Default),
            },
        }
    }
}

/// Arrow pointing along `d`, a unit orthogonal step.
fn arrow(d: Point) -> char {
    match (d.x, d.y) {
        (-1, 0) => '←',
        (1, 0) => '→',
        (0, -1) => '↑',
        (0, 1) => '↓',
        _ => '·',
    }
}

fn fmt_cost(c: f32) -> String {
    if c.is_infinite() {
        "∞".to_string()
    } else if c.fract() == 0.0 {
        format!("{}", c as i64)
    } else {
        format!("{c:.1}")
    }
}

/// Center `s` in a tile, truncating what does not fit.
fn fit(s: &str) -> String {
    let w = TILE_W as usize;
    let s: String = s.chars().take(w).collect();
    format!("{s:^w$}")
}
