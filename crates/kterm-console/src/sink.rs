//! ANSI-colored output sink.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use kterm_types::{Color, OutputSink, Result};

/// SGR foreground code for a console color.
fn sgr_fore(color: Color) -> u8 {
    match color {
        Color::Black => 30,
        Color::DarkRed => 31,
        Color::DarkGreen => 32,
        Color::DarkYellow => 33,
        Color::DarkBlue => 34,
        Color::DarkMagenta => 35,
        Color::DarkCyan => 36,
        Color::Gray => 37,
        Color::DarkGray => 90,
        Color::Red => 91,
        Color::Green => 92,
        Color::Yellow => 93,
        Color::Blue => 94,
        Color::Magenta => 95,
        Color::Cyan => 96,
        Color::White => 97,
    }
}

/// SGR background code for a console color.
fn sgr_back(color: Color) -> u8 {
    sgr_fore(color) + 10
}

/// [`OutputSink`] over any writer, colored with ANSI SGR sequences.
///
/// Each write holds the internal lock for the whole set-colors / emit /
/// reset / flush sequence, so concurrent writers interleave at write
/// granularity and colors never bleed between writes.
pub struct AnsiSink<W: Write + Send> {
    writer: Mutex<W>,
    color: bool,
}

impl AnsiSink<io::Stdout> {
    /// Sink over the process stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> AnsiSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            color: true,
        }
    }

    /// Disable or re-enable color sequences (for dumb terminals).
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> OutputSink for AnsiSink<W> {
    fn write(&self, text: &str, fore: Color, back: Color, newline: bool) -> Result<()> {
        // Color state is re-emitted on every write, so a poisoned lock
        // is safe to recover.
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if self.color {
            write!(writer, "\x1b[{};{}m", sgr_fore(fore), sgr_back(back))?;
        }
        writer.write_all(text.as_bytes())?;
        if self.color {
            writer.write_all(b"\x1b[0m")?;
        }
        if newline {
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }
}
