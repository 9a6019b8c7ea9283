//! Screen buffers: a [`Frame`] of styled character cells and the diff
//! between two frames.

/// Terminal colours used by the demo.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Default,
    Black,
    White,
    Grey,
    DarkGrey,
    Green,
    DarkGreen,
    Red,
    Blue,
    DarkBlue,
    Yellow,
    Magenta,
}

/// A styled character cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Default,
            bg: Color::Default,
        }
    }
}

impl Cell {
    #[inline]
    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = ch;
        self
    }

    #[inline]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    #[inline]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }
}

/// A full screen of cells, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// The cell at (x, y), or the default cell outside the frame.
    pub fn at(&self, x: u16, y: u16) -> Cell {
        self.index(x, y).map(|i| self.cells[i]).unwrap_or_default()
    }

    /// Set the cell at (x, y). No-op outside the frame.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Write `text` starting at (x, y) with the given colours, clipped to
    /// the frame.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Color, bg: Color) {
        for (i, ch) in text.chars().enumerate() {
            let Ok(dx) = u16::try_from(i) else {
                break;
            };
            self.set(x.saturating_add(dx), y, Cell { ch, fg, bg });
        }
    }

    /// The text of row `y`, for tests and logging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width).map(|x| self.at(x, y).ch).collect()
    }
}

/// A single cell that changed between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameCell {
    pub x: u16,
    pub y: u16,
    pub cell: Cell,
}

/// Cells of `curr` that differ from `prev`. A size change redraws
/// everything.
pub fn diff(prev: &Frame, curr: &Frame) -> Vec<FrameCell> {
    let resized = prev.width != curr.width || prev.height != curr.height;
    let mut changed = Vec::new();
    for y in 0..curr.height {
        for x in 0..curr.width {
            let cell = curr.at(x, y);
            if resized || prev.at(x, y) != cell {
                changed.push(FrameCell { x, y, cell });
            }
        }
    }
    changed
}
