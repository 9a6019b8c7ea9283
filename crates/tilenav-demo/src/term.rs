//! Crossterm terminal driver: raw-mode setup, input polling and
//! incremental frame output.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use crate::frame::{self, Color, Frame};
use crate::model::{Key, Msg};

/// How long [`Terminal::poll`] waits for input before reporting a tick.
const TICK: Duration = Duration::from_millis(50);

fn to_ct_color(c: Color) -> CtColor {
    match c {
        Color::Default => CtColor::Reset,
        Color::Black => CtColor::Black,
        Color::White => CtColor::White,
        Color::Grey => CtColor::Grey,
        Color::DarkGrey => CtColor::DarkGrey,
        Color::Green => CtColor::Green,
        Color::DarkGreen => CtColor::DarkGreen,
        Color::Red => CtColor::Red,
        Color::Blue => CtColor::Blue,
        Color::DarkBlue => CtColor::DarkBlue,
        Color::Yellow => CtColor::Yellow,
        Color::Magenta => CtColor::Magenta,
    }
}

fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

/// Translate a crossterm event into a model message.
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
            to_key(code).map(Msg::KeyDown)
        }
        Event::Mouse(me) => match me.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Msg::Click {
                col: me.column,
                row: me.row,
            }),
            _ => None,
        },
        _ => None,
    }
}

/// The terminal in raw mode on the alternate screen. Dropping it restores
/// the previous terminal state.
pub struct Terminal {
    last: Option<Frame>,
}

impl Terminal {
    pub fn init() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        Ok(Self { last: None })
    }

    /// Wait up to one tick for input. Returns the pending messages, or a
    /// single [`Msg::Tick`] when nothing arrived.
    pub fn poll(&mut self) -> io::Result<Vec<Msg>> {
        if !event::poll(TICK)? {
            return Ok(vec![Msg::Tick]);
        }
        let mut msgs = Vec::new();
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                self.last = None;
                execute!(io::stdout(), terminal::Clear(ClearType::All))?;
            }
            msgs.extend(to_msg(ev));
        }
        Ok(msgs)
    }

    /// Draw the cells of `frame` that changed since the last flush.
    pub fn flush(&mut self, frame: Frame) -> io::Result<()> {
        let changes = match &self.last {
            Some(last) => frame::diff(last, &frame),
            None => frame::diff(&Frame::new(0, 0), &frame),
        };
        let mut stdout = io::stdout();
        for fc in &changes {
            queue!(
                stdout,
                cursor::MoveTo(fc.x, fc.y),
                SetForegroundColor(to_ct_color(fc.cell.fg)),
                SetBackgroundColor(to_ct_color(fc.cell.bg)),
                Print(fc.cell.ch)
            )?;
        }
        queue!(stdout, ResetColor)?;
        stdout.flush()?;
        self.last = Some(frame);
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            ResetColor,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
