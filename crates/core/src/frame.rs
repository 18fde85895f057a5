//! A rendered text frame.

use std::fmt;

/// Background character for cells no surface sample reached.
pub const BACKGROUND: char = ' ';

/// A width x height grid of shaded characters, row-major.
///
/// A `Frame` lives only between a render call and the sink that consumes it.
/// It carries no terminal escape codes; serialization is plain text with a
/// `\n` after every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Frame {
    /// Create a frame filled with the background character.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BACKGROUND; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x < self.width && y < self.height {
            Some(self.cells[x + y * self.width])
        } else {
            None
        }
    }

    /// Overwrite the cell at a row-major index. Callers bounds-check first.
    pub(crate) fn put(&mut self, idx: usize, ch: char) {
        self.cells[idx] = ch;
    }

    /// Rows as character slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        let width = self.width;
        (0..self.height).map(move |y| &self.cells[y * width..(y + 1) * width])
    }

    /// Row-major serialization with a `\n` terminating every row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.width * self.height + self.height);
        for row in self.rows() {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
