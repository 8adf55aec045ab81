// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game state, the flood-fill move operation and listener notification

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Deserialize};

use crate::{Board, BoardGenerator, Color, Coord, GameConfig, GameError, ANCHOR};

/// Observer informed after every successful move
pub trait GamePlayListener {
    /// Invoked when the game state has changed
    fn on_game_changed(&self, game: &Game, round: u32);
}

/// Observer informed once, when the game has been won
pub trait GameWinListener {
    /// Invoked when the whole board has become a single colour
    fn on_won(&self, game: &Game, rounds: u32);
}

/// A running Flood-It game.
///
/// The board is mutated only by [`Game::play_color`], which flood-fills from
/// the anchor cell, advances the round counter and notifies registered
/// listeners. Listener registrations are runtime state and are not part of a
/// serialized snapshot.
#[derive(Clone, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
    /// Number of successful moves so far
    round: u32,
    /// Colours played, in order
    moves: Vec<Color>,
    /// Whether the win listeners have already been informed
    won_announced: bool,
    #[serde(skip)]
    play_listeners: Vec<Arc<dyn GamePlayListener>>,
    #[serde(skip)]
    win_listeners: Vec<Arc<dyn GameWinListener>>,
}

impl Game {
    /// Create a new game with a board generated from the config seed
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let board = BoardGenerator::new(config.seed).generate(
            config.width,
            config.height,
            config.color_count,
        );
        Ok(Self::with_board(config, board))
    }

    /// Create a game over an explicit board, for hosts that bring their own
    /// generation strategy
    pub fn from_cells(
        width: u8,
        height: u8,
        color_count: u8,
        cells: Vec<Color>,
    ) -> Result<Self, GameError> {
        let config = GameConfig::new(width, height, color_count, 0);
        config.validate()?;

        if let Some(cell) = cells.iter().find(|cell| cell.index() >= color_count) {
            return Err(GameError::InvalidColor(cell.index()));
        }

        let board = Board::from_cells(width, height, cells).ok_or_else(|| {
            GameError::InvalidConfiguration(
                "cell count does not match the board dimensions".to_string(),
            )
        })?;

        Ok(Self::with_board(config, board))
    }

    fn with_board(config: GameConfig, board: Board) -> Self {
        Self {
            config,
            board,
            round: 0,
            moves: Vec::new(),
            won_announced: false,
            play_listeners: Vec::new(),
            win_listeners: Vec::new(),
        }
    }

    /// The configuration this game was created with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The amount of columns in the game
    pub fn width(&self) -> u8 {
        self.config.width
    }

    /// The amount of rows in the game
    pub fn height(&self) -> u8 {
        self.config.height
    }

    /// The amount of colours in the game
    pub fn color_count(&self) -> u8 {
        self.config.color_count
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current round, starting at 0 before the first move
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The colours played so far, in order
    pub fn moves(&self) -> &[Color] {
        &self.moves
    }

    /// The colour at the given coordinate
    pub fn color_at(&self, coord: Coord) -> Result<Color, GameError> {
        self.board.get(coord).ok_or(GameError::OutOfBounds {
            x: coord.x,
            y: coord.y,
        })
    }

    /// Determine whether the game has been won
    pub fn is_won(&self) -> bool {
        self.board.is_uniform()
    }

    /// Play one move: flood-fill from the anchor cell with the given colour.
    ///
    /// Picking the colour already occupying the anchor cell leaves the board
    /// unchanged but still counts as a round and still notifies the play
    /// listeners. A rejected move leaves the game untouched.
    pub fn play_color(&mut self, color: Color) -> Result<(), GameError> {
        if color.index() >= self.config.color_count {
            return Err(GameError::InvalidColor(color.index()));
        }

        let filled = flood_fill(&mut self.board, ANCHOR, color);
        self.round += 1;
        self.moves.push(color);
        tracing::debug!(
            "Played colour {} in round {}, recoloured {} cells",
            color.index(),
            self.round,
            filled
        );

        let round = self.round;
        for listener in self.play_listeners.clone() {
            listener.on_game_changed(self, round);
        }

        if !self.won_announced && self.board.is_uniform() {
            self.won_announced = true;
            tracing::debug!("Game won after {} rounds", round);
            for listener in self.win_listeners.clone() {
                listener.on_won(self, round);
            }
        }

        Ok(())
    }

    /// Add the given listener to the set informed after each move (if it is
    /// not there yet)
    pub fn add_play_listener(&mut self, listener: Arc<dyn GamePlayListener>) {
        if !self
            .play_listeners
            .iter()
            .any(|registered| Arc::ptr_eq(registered, &listener))
        {
            self.play_listeners.push(listener);
        }
    }

    /// Remove the given listener from the play listener set; unregistered
    /// listeners are ignored
    pub fn remove_play_listener(&mut self, listener: &Arc<dyn GamePlayListener>) {
        self.play_listeners
            .retain(|registered| !Arc::ptr_eq(registered, listener));
    }

    /// Add the given listener to the set informed on a win (if it is not
    /// there yet)
    pub fn add_win_listener(&mut self, listener: Arc<dyn GameWinListener>) {
        if !self
            .win_listeners
            .iter()
            .any(|registered| Arc::ptr_eq(registered, &listener))
        {
            self.win_listeners.push(listener);
        }
    }

    /// Remove the given listener from the win listener set; unregistered
    /// listeners are ignored
    pub fn remove_win_listener(&mut self, listener: &Arc<dyn GameWinListener>) {
        self.win_listeners
            .retain(|registered| !Arc::ptr_eq(registered, listener));
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("round", &self.round)
            .field("won_announced", &self.won_announced)
            .finish_non_exhaustive()
    }
}

/// Recolour the maximal 4-connected region of the start cell's colour.
///
/// Recoloured cells double as the visited set, so every cell is enqueued at
/// most once and the fill runs in O(cells). Returns the number of cells that
/// changed colour.
fn flood_fill(board: &mut Board, start: Coord, color: Color) -> usize {
    let target = match board.get(start) {
        Some(current) => current,
        None => return 0,
    };
    if target == color {
        return 0;
    }

    let mut queue = VecDeque::from([start]);
    board.set(start, color);
    let mut filled = 1;

    while let Some(current) = queue.pop_front() {
        for neighbor in board.adjacent_coords(current) {
            if board.get(neighbor) == Some(target) {
                board.set(neighbor, color);
                filled += 1;
                queue.push_back(neighbor);
            }
        }
    }

    filled
}
