use crate::driver::{Frame, FrameSink};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{size, Clear, ClearType},
};
use std::io::{self, stdout, Stdout, Write};

/// Live display: redraws the whole screen for every frame.
///
/// Raw mode is never enabled, so Ctrl-C still ends the program and leaves
/// the terminal as it was.
pub struct Terminal {
    out: Stdout,
    width: u16,
    height: u16,
    status: bool,
}

impl Terminal {
    pub fn new(status: bool) -> io::Result<Self> {
        let (width, height) = size()?;
        Ok(Self {
            out: stdout(),
            width,
            height,
            status,
        })
    }

    /// Get terminal dimensions
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Clear the actual terminal
    pub fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()
    }
}

impl FrameSink for Terminal {
    fn show(&mut self, frame: &Frame) -> io::Result<()> {
        draw_frame(&mut self.out, frame, self.status, self.height)?;
        self.out.flush()
    }
}

/// Queue a cleared screen, the frame rows, and the status line below them
/// when `status` is set and the terminal has room for it
fn draw_frame<W: Write>(out: &mut W, frame: &Frame, status: bool, height: u16) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    for (y, row) in frame.rows.iter().enumerate() {
        queue!(out, MoveTo(0, y as u16), Print(row))?;
    }

    let status_y = frame.rows.len() as u16;
    if status && status_y < height {
        queue!(out, MoveTo(0, status_y), Print(frame.status()))?;
    }

    Ok(())
}

/// Print mode: frames go to a writer one after another, separated by a
/// blank line, with no escape sequences.
pub struct PlainPrinter<W: Write> {
    out: W,
    status: bool,
    started: bool,
}

impl<W: Write> PlainPrinter<W> {
    pub fn new(out: W, status: bool) -> Self {
        Self {
            out,
            status,
            started: false,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for PlainPrinter<W> {
    fn show(&mut self, frame: &Frame) -> io::Result<()> {
        if self.started {
            writeln!(self.out)?;
        }
        self.started = true;
        if self.status {
            writeln!(self.out, "{}", frame.status())?;
        }
        for row in &frame.rows {
            writeln!(self.out, "{row}")?;
        }
        self.out.flush()
    }
}
