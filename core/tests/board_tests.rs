// SPDX-License-Identifier: MIT OR Apache-2.0

use floodit_core::{Board, Color, Coord};

fn board_3x2() -> Board {
    let cells = [0, 1, 2, 1, 1, 0].into_iter().map(Color::new).collect();
    Board::from_cells(3, 2, cells).unwrap()
}

#[test]
fn board_creation() {
    let board = board_3x2();
    assert_eq!(board.width(), 3);
    assert_eq!(board.height(), 2);
    assert_eq!(board.get(Coord::new(0, 0)), Some(Color::new(0)));
    assert_eq!(board.get(Coord::new(2, 0)), Some(Color::new(2)));
    assert_eq!(board.get(Coord::new(2, 1)), Some(Color::new(0)));
}

#[test]
fn cell_count_must_match_dimensions() {
    assert!(Board::from_cells(3, 2, vec![Color::new(0); 5]).is_none());
    assert!(Board::from_cells(0, 2, Vec::new()).is_none());
    assert!(Board::from_cells(2, 0, Vec::new()).is_none());
}

#[test]
fn out_of_bounds_reads_return_none() {
    let board = board_3x2();
    assert_eq!(board.get(Coord::new(3, 0)), None);
    assert_eq!(board.get(Coord::new(0, 2)), None);
    assert_eq!(board.get(Coord::new(255, 255)), None);
}

#[test]
fn adjacency_respects_edges() {
    let board = board_3x2();

    // Corner cells have two neighbors
    let corner = board.adjacent_coords(Coord::new(0, 0));
    assert_eq!(corner.len(), 2);
    assert!(corner.contains(&Coord::new(1, 0)));
    assert!(corner.contains(&Coord::new(0, 1)));

    // Top edge cells have three
    let edge = board.adjacent_coords(Coord::new(1, 0));
    assert_eq!(edge.len(), 3);
    assert!(!edge.contains(&Coord::new(1, 0)));
}

#[test]
fn interior_cells_have_four_neighbors() {
    let cells = vec![Color::new(0); 9];
    let board = Board::from_cells(3, 3, cells).unwrap();
    let center = board.adjacent_coords(Coord::new(1, 1));
    assert_eq!(center.len(), 4);
}

#[test]
fn uniform_detection() {
    assert!(!board_3x2().is_uniform());

    let uniform = Board::from_cells(2, 2, vec![Color::new(3); 4]).unwrap();
    assert!(uniform.is_uniform());
}

#[test]
fn position_hash_tracks_cells() {
    assert_eq!(board_3x2().position_hash(), board_3x2().position_hash());

    let uniform = Board::from_cells(3, 2, vec![Color::new(0); 6]).unwrap();
    assert_ne!(board_3x2().position_hash(), uniform.position_hash());
}
