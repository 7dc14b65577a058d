use crate::cell::Cell;
use crate::error::{GridError, Result};
use rand::Rng;

/// The glyph marking a live cell in pattern text. Anything else on a
/// pattern line is read as dead.
pub const ALIVE_GLYPH: char = 'x';

/// The glyph written for a dead cell by [`Grid::to_pattern`].
pub const DEAD_GLYPH: char = '.';

/// A fixed-shape, row-major rectangle of cells.
///
/// Shape is immutable after construction and always at least 1x1.
/// The engine never mutates a grid: each generation is assembled as a
/// fresh `Grid` and swapped in wholesale, so readers only ever see
/// complete states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid by calling `seed` once per coordinate, row-major.
    pub fn from_fn<F>(rows: usize, cols: usize, mut seed: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> bool,
    {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(row, col, seed(row, col)));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Builds a randomly seeded grid. Each cell is alive with
    /// probability `1 / (weight + 1)`.
    pub fn random<R: Rng>(rows: usize, cols: usize, weight: u32, rng: &mut R) -> Result<Self> {
        Self::from_fn(rows, cols, |_, _| rng.gen_range(0..=weight) == 0)
    }

    /// Parses a rectangular block of pattern text.
    ///
    /// One line per row; [`ALIVE_GLYPH`] marks a live cell, any other
    /// character a dead one. A single leading and/or trailing blank
    /// line is stripped, so raw string literals can keep their natural
    /// indentation-free shape. Rows of unequal width are rejected.
    pub fn from_pattern(text: &str) -> Result<Self> {
        let mut lines: Vec<&str> = text.split('\n').collect();
        if lines.first().is_some_and(|l| l.trim().is_empty()) {
            lines.remove(0);
        }
        if lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        if lines.is_empty() || lines[0].is_empty() {
            return Err(GridError::EmptyGrid);
        }

        let cols = lines[0].chars().count();
        let mut cells = Vec::with_capacity(lines.len() * cols);
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != cols {
                return Err(GridError::MalformedPattern {
                    row,
                    len,
                    expected: cols,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                cells.push(Cell::new(row, col, ch == ALIVE_GLYPH));
            }
        }
        Ok(Self {
            rows: lines.len(),
            cols,
            cells,
        })
    }

    /// Renders the grid as pattern text, the inverse of
    /// [`Grid::from_pattern`] modulo the fixed glyph pair.
    pub fn to_pattern(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = &self.cells[row * self.cols + col];
                out.push(if cell.is_alive() { ALIVE_GLYPH } else { DEAD_GLYPH });
            }
            if row + 1 < self.rows {
                out.push('\n');
            }
        }
        out
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Coordinate-checked access.
    pub fn get(&self, row: usize, col: usize) -> Result<&Cell> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(&self.cells[row * self.cols + col])
    }

    /// Row-major iteration over all cells. Restartable and finite.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}
