// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation

use serde::{Serialize, Deserialize};

use crate::{Color, Coord};

/// A rectangular grid of coloured cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Number of columns
    width: u8,
    /// Number of rows
    height: u8,
    /// Cell colours in row-major order
    cells: Vec<Color>,
}

impl Board {
    /// Build a board from already validated parts
    pub(crate) fn new(width: u8, height: u8, cells: Vec<Color>) -> Self {
        debug_assert_eq!(cells.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            cells,
        }
    }

    /// Create a board from row-major cells.
    ///
    /// Returns `None` when a dimension is zero or the cell count does not
    /// match the dimensions.
    pub fn from_cells(width: u8, height: u8, cells: Vec<Color>) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        if cells.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self::new(width, height, cells))
    }

    /// Get the colour at the specified coordinate
    pub fn get(&self, coord: Coord) -> Option<Color> {
        if !coord.is_valid(self.width, self.height) {
            return None;
        }
        Some(self.cells[self.coord_to_index(coord)])
    }

    /// Set the colour at the specified coordinate
    pub(crate) fn set(&mut self, coord: Coord, color: Color) -> bool {
        if !coord.is_valid(self.width, self.height) {
            return false;
        }
        let idx = self.coord_to_index(coord);
        self.cells[idx] = color;
        true
    }

    /// Convert a coordinate to a vector index
    fn coord_to_index(&self, coord: Coord) -> usize {
        (coord.y as usize) * (self.width as usize) + (coord.x as usize)
    }

    /// Get adjacent coordinates (up, down, left, right)
    pub fn adjacent_coords(&self, coord: Coord) -> Vec<Coord> {
        let mut result = Vec::with_capacity(4);
        let x = coord.x;
        let y = coord.y;

        // Up
        if y > 0 {
            result.push(Coord::new(x, y - 1));
        }

        // Down
        if y < self.height - 1 {
            result.push(Coord::new(x, y + 1));
        }

        // Left
        if x > 0 {
            result.push(Coord::new(x - 1, y));
        }

        // Right
        if x < self.width - 1 {
            result.push(Coord::new(x + 1, y));
        }

        result
    }

    /// Get the number of columns
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get the number of rows
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether every cell on the board shares a single colour
    pub fn is_uniform(&self) -> bool {
        match self.cells.first() {
            Some(first) => self.cells.iter().all(|cell| cell == first),
            None => true,
        }
    }

    /// Calculate a hash of the current board position
    pub fn position_hash(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        self.width.hash(&mut hasher);
        self.height.hash(&mut hasher);
        self.cells.hash(&mut hasher);
        hasher.finish()
    }
}
