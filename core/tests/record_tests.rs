// SPDX-License-Identifier: MIT OR Apache-2.0

use floodit_core::{record, Color, Game, GameConfig, MoveRecord};

#[test]
fn snapshot_round_trip() {
    let mut game = Game::new(GameConfig::new(5, 4, 3, 7)).unwrap();
    game.play_color(Color::new(1)).unwrap();
    game.play_color(Color::new(2)).unwrap();

    let bytes = record::serialize_game(&game);
    assert!(!bytes.is_empty());

    let restored = record::deserialize_game(&bytes).unwrap();
    assert_eq!(restored.round(), 2);
    assert_eq!(restored.moves(), game.moves());
    assert_eq!(restored.config(), game.config());
    assert_eq!(
        restored.board().position_hash(),
        game.board().position_hash()
    );
}

#[test]
fn empty_or_garbage_snapshots_are_rejected() {
    assert!(record::deserialize_game(&[]).is_none());
    assert!(record::deserialize_game(&[0xff, 0x00, 0x13]).is_none());
}

#[test]
fn move_records_carry_rounds() {
    let mut game = Game::new(GameConfig::new(4, 4, 4, 1)).unwrap();
    game.play_color(Color::new(3)).unwrap();
    game.play_color(Color::new(0)).unwrap();

    let records = record::move_records(&game);
    assert_eq!(
        records,
        vec![
            MoveRecord {
                color: Color::new(3),
                round: 1
            },
            MoveRecord {
                color: Color::new(0),
                round: 2
            },
        ]
    );
}

#[test]
fn json_snapshot_is_also_stable() {
    let game = Game::new(GameConfig::new(3, 3, 2, 9)).unwrap();
    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(
        restored.board().position_hash(),
        game.board().position_hash()
    );
}
