// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flood-It Core - Game Rules and Board Logic
//!
//! This crate provides the core game functionality including:
//! - Board representation and seeded board generation
//! - The flood-fill move operation, round counting and win detection
//! - Listener registration for move and win notifications
//! - CBOR serialization helpers for game snapshots

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod game;
pub mod generator;
pub mod record;

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// The default amount of columns in a game.
pub const DEFAULT_WIDTH: u8 = 15;

/// The default amount of rows in a game.
pub const DEFAULT_HEIGHT: u8 = 15;

/// The default amount of colours in a game. More colours is more difficult.
pub const DEFAULT_COLOR_COUNT: u8 = 6;

/// A palette colour, identified by its index in `[0, color_count)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(u8);

impl Color {
    /// Create a colour from its palette index
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// The palette index of this colour
    pub const fn index(&self) -> u8 {
        self.0
    }
}

/// Board coordinate representing a cell position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (column)
    pub x: u8,
    /// Y coordinate (row)
    pub y: u8,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check if the coordinate lies on a board of the given dimensions
    pub fn is_valid(&self, width: u8, height: u8) -> bool {
        self.x < width && self.y < height
    }
}

/// The fixed cell every flood move starts from (top left)
pub const ANCHOR: Coord = Coord { x: 0, y: 0 };

/// Construction parameters for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// The amount of columns, so there are `width * height` cells
    pub width: u8,
    /// The amount of rows
    pub height: u8,
    /// The amount of colours in the palette
    pub color_count: u8,
    /// Seed for board generation
    pub seed: u64,
}

impl GameConfig {
    /// Create a new configuration
    pub fn new(width: u8, height: u8, color_count: u8, seed: u64) -> Self {
        Self {
            width,
            height,
            color_count,
            seed,
        }
    }

    /// Check that the parameters describe a playable game
    pub fn validate(&self) -> Result<(), GameError> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::InvalidConfiguration(
                "board dimensions must be positive".to_string(),
            ));
        }
        if self.color_count < 2 {
            return Err(GameError::InvalidConfiguration(
                "at least two colours are required".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            color_count: DEFAULT_COLOR_COUNT,
            seed: 0,
        }
    }
}

/// Errors that can occur during game play
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The construction parameters describe an unplayable board
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The coordinate is outside the board
    #[error("Coordinate ({x}, {y}) is outside the board")]
    OutOfBounds {
        /// X coordinate of the rejected query
        x: u8,
        /// Y coordinate of the rejected query
        y: u8,
    },

    /// The colour is not part of the palette
    #[error("Colour {0} is not in the palette")]
    InvalidColor(u8),
}

// Re-export the main types for convenience
pub use board::Board;
pub use game::{Game, GamePlayListener, GameWinListener};
pub use generator::BoardGenerator;
pub use record::MoveRecord;
