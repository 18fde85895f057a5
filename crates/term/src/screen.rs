//! TerminalScreen: flushes rendered frames to a real terminal.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, terminal, QueueableCommand};

use tui_donut_core::Frame;

/// Owns the terminal for the duration of the animation.
///
/// All drawing goes through an internal byte buffer and a single
/// `write_all`/`flush` pair per frame, so a frame never reaches the terminal
/// half-painted.
pub struct TerminalScreen {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint the whole frame from the home position.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame repaint into `out` without touching stdout.
///
/// Rows are separated by `\r\n` because the screen runs in raw mode.
pub fn encode_frame_into(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    let mut first = true;
    for row in frame.rows() {
        if !first {
            out.extend_from_slice(b"\r\n");
        }
        first = false;
        let mut encoded = [0u8; 4];
        for &ch in row {
            out.extend_from_slice(ch.encode_utf8(&mut encoded).as_bytes());
        }
    }
    Ok(())
}
