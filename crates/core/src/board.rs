//! Board module - the fixed-size grid of locked cells.
//!
//! Row-major storage with row 0 at the top. Dimensions are set once at
//! construction and never change; all mutation happens through `merge`
//! and `clear_completed_rows`.

use gridfall_types::{Cell, ColorTag, ConfigError, Position};

use crate::catalog::Shape;

/// The playfield grid. Cells are `None` (empty) or a locked color tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat row-major cell storage (y * width + x).
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-empty board. Fails only on zero dimensions.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat index for signed coordinates, `None` when out of bounds.
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Cell at (x, y), or `None` when the coordinate is off the board.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether (x, y) is on the board and holds a locked cell.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Write a cell directly. Returns false when out of bounds.
    ///
    /// Gameplay goes through `merge`; this exists for tests and scenario
    /// setup.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Write every occupied shape cell that lands inside the board.
    ///
    /// Cells falling outside the bounds (including negative y while a piece
    /// is still entering from above) are silently ignored; callers are
    /// expected to have validated the placement with collision checks.
    pub fn merge(&mut self, shape: &Shape, color: ColorTag, position: Position) {
        for (sx, sy) in shape.cells() {
            let x = position.x + sx as i32;
            let y = position.y + sy as i32;
            if let Some(idx) = self.index(x, y) {
                self.cells[idx] = Some(color);
            }
        }
    }

    /// Whether every cell in row `y` is occupied.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every full row, insert that many empty rows at the top, and
    /// return how many rows were cleared.
    ///
    /// Surviving rows keep their relative top-to-bottom order. Runs as a
    /// single bottom-up compaction pass over the flat storage.
    pub fn clear_completed_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut write_y = self.height;

        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * self.width;
                    let dst = write_y * self.width;
                    self.cells.copy_within(src..src + self.width, dst);
                }
            }
        }

        for cell in &mut self.cells[..write_y * self.width] {
            *cell = None;
        }

        cleared
    }

    /// Reset every cell to empty, keeping the dimensions.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Iterate over rows top to bottom (for rendering).
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}
