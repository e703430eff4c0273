use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor, event, execute,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::event::Event;
use crate::layout::Rect;
use crate::style::{Rgb, TextStyle};

/// Raw-mode terminal presenter with double-buffered, diff-based output.
///
/// Construction switches to the alternate screen and enables mouse
/// capture; dropping the presenter restores the terminal.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Wait up to `timeout` (or indefinitely with `None`) and drain all
    /// pending input, translated to grid events.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<Event>> {
        let mut raw = Vec::new();

        match timeout {
            Some(dur) => {
                if event::poll(dur)? {
                    raw.push(event::read()?);
                }
            }
            None => raw.push(event::read()?),
        }

        if !raw.is_empty() {
            while event::poll(Duration::ZERO)? {
                raw.push(event::read()?);
            }
        }

        Ok(raw.iter().filter_map(Event::from_crossterm).collect())
    }

    /// Run one paint pass: hand the full-screen area and back buffer to
    /// `f`, then flush only the cells that changed since the last pass.
    pub fn draw(&mut self, f: impl FnOnce(Rect, &mut Buffer)) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
        }

        self.current_buffer.clear();
        f(Rect::from_size(width, height), &mut self.current_buffer);

        self.flush_diff()?;
        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_fg = Rgb::new(255, 255, 255);
        let mut last_bg = Rgb::new(0, 0, 0);
        let mut last_style = TextStyle::new();

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            // Shadow cells behind double-width glyphs carry no output.
            if cell.ch == '\0' {
                continue;
            }

            execute!(self.stdout, cursor::MoveTo(x, y))?;

            if cell.fg != last_fg {
                execute!(
                    self.stdout,
                    SetForegroundColor(CtColor::Rgb {
                        r: cell.fg.r,
                        g: cell.fg.g,
                        b: cell.fg.b,
                    })
                )?;
                last_fg = cell.fg;
            }

            if cell.bg != last_bg {
                execute!(
                    self.stdout,
                    SetBackgroundColor(CtColor::Rgb {
                        r: cell.bg.r,
                        g: cell.bg.g,
                        b: cell.bg.b,
                    })
                )?;
                last_bg = cell.bg;
            }

            if cell.style != last_style {
                if cell.style.bold != last_style.bold {
                    let attr = if cell.style.bold {
                        Attribute::Bold
                    } else {
                        Attribute::NormalIntensity
                    };
                    execute!(self.stdout, SetAttribute(attr))?;
                }
                if cell.style.dim != last_style.dim {
                    let attr = if cell.style.dim {
                        Attribute::Dim
                    } else {
                        Attribute::NormalIntensity
                    };
                    execute!(self.stdout, SetAttribute(attr))?;
                }
                if cell.style.underline != last_style.underline {
                    let attr = if cell.style.underline {
                        Attribute::Underlined
                    } else {
                        Attribute::NoUnderline
                    };
                    execute!(self.stdout, SetAttribute(attr))?;
                }
                last_style = cell.style;
            }

            write!(self.stdout, "{}", cell.ch)?;
        }

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
