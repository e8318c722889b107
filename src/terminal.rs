use std::io;
use std::io::Stdout;
use std::io::Write;
use std::time::Duration;

use crossterm::cursor;
use crossterm::event;
use crossterm::event::Event as CtEvent;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;

use crate::ScreenSize;

/// Everything the simulator needs from a character cell terminal.
pub trait Terminal {
    /// `(cols, rows)` of the screen
    fn size(&self) -> io::Result<(ScreenSize, ScreenSize)>;

    /// Blank the whole screen
    fn clear(&mut self) -> io::Result<()>;

    /// Blank a single row
    fn clear_line(&mut self, y: ScreenSize) -> io::Result<()>;

    /// Write `text` starting at column `x` of row `y`
    fn print_at(&mut self, x: ScreenSize, y: ScreenSize, text: &str) -> io::Result<()>;

    fn move_cursor(&mut self, x: ScreenSize, y: ScreenSize) -> io::Result<()>;

    /// Push pending output to the screen
    fn flush(&mut self) -> io::Result<()>;

    /// Wait for the next key press
    fn read_key(&mut self) -> io::Result<KeyEvent>;

    /// Return a pending key press, if any, without waiting
    fn poll_key(&mut self) -> io::Result<Option<KeyEvent>>;
}

/// A [`Terminal`] on stdout, driven by crossterm.
///
/// Raw mode and the alternate screen are entered on creation and left again when dropped, so the
/// user's terminal is restored on every exit path.
pub struct CrosstermTerminal {
    stdout: Stdout,
}

impl CrosstermTerminal {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;

        Ok(Self { stdout })
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, terminal::LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Only presses count. Releases and repeats are reported on some platforms.
fn key_press(event: CtEvent) -> Option<KeyEvent> {
    match event {
        CtEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => Some(key_event),
        _ => None,
    }
}

impl Terminal for CrosstermTerminal {
    fn size(&self) -> io::Result<(ScreenSize, ScreenSize)> {
        terminal::size()
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))
    }

    fn clear_line(&mut self, y: ScreenSize) -> io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(0, y),
            terminal::Clear(terminal::ClearType::CurrentLine)
        )
    }

    fn print_at(&mut self, x: ScreenSize, y: ScreenSize, text: &str) -> io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(x, y), style::Print(text))
    }

    fn move_cursor(&mut self, x: ScreenSize, y: ScreenSize) -> io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(x, y))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    fn read_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Some(key_event) = key_press(event::read()?) {
                return Ok(key_event);
            }
        }
    }

    fn poll_key(&mut self) -> io::Result<Option<KeyEvent>> {
        while event::poll(Duration::ZERO)? {
            if let Some(key_event) = key_press(event::read()?) {
                return Ok(Some(key_event));
            }
        }

        Ok(None)
    }
}
