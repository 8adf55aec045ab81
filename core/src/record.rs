// SPDX-License-Identifier: MIT OR Apache-2.0

//! CBOR serialization helpers for game snapshots
//!
//! This module provides functions for serializing and deserializing game
//! snapshots and move records using the Concise Binary Object
//! Representation (CBOR).

use serde::{Serialize, Deserialize};

use crate::{Color, Game};

/// A single move of a finished or ongoing game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The colour that was played
    pub color: Color,
    /// The round this move produced
    pub round: u32,
}

/// The replayable move list of a game
pub fn move_records(game: &Game) -> Vec<MoveRecord> {
    game.moves()
        .iter()
        .enumerate()
        .map(|(i, &color)| MoveRecord {
            color,
            round: (i + 1) as u32,
        })
        .collect()
}

/// Serialize a game snapshot to CBOR
pub fn serialize_game(game: &Game) -> Vec<u8> {
    match serde_cbor::to_vec(game) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!("Failed to serialize game: {}", err);
            Vec::new() // Return empty vector on error
        }
    }
}

/// Deserialize a game snapshot from CBOR.
///
/// Listener registrations are runtime state and are not part of a snapshot;
/// a restored game starts with empty listener sets.
pub fn deserialize_game(data: &[u8]) -> Option<Game> {
    if data.is_empty() {
        return None;
    }

    match serde_cbor::from_slice(data) {
        Ok(game) => Some(game),
        Err(err) => {
            tracing::error!("Failed to deserialize game: {}", err);
            None
        }
    }
}
