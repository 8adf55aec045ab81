// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flood-It CLI - Command-line interface for playing and scripting games
//!
//! This binary provides a headless interface for running the Flood-It
//! engine without a GUI. It supports interactive play on a terminal as well
//! as scripted move sequences for automation and testing.

mod render;

use std::fs;
use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use floodit_core::{Color, Coord, Game, GameConfig, GamePlayListener, GameWinListener};

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(
    name = "floodit-cli",
    about = "Flood-It puzzle command-line interface",
    version
)]
struct Args {
    /// Board width in cells
    #[clap(long, default_value_t = floodit_core::DEFAULT_WIDTH)]
    width: u8,

    /// Board height in cells
    #[clap(long, default_value_t = floodit_core::DEFAULT_HEIGHT)]
    height: u8,

    /// Number of colours in the palette
    #[clap(long, default_value_t = floodit_core::DEFAULT_COLOR_COUNT)]
    colors: u8,

    /// Seed for board generation; random when omitted
    #[clap(long)]
    seed: Option<u64>,

    /// Comma-separated colour sequence to play without prompting
    #[clap(long)]
    play: Option<String>,

    /// Render without ANSI colours
    #[clap(long)]
    plain: bool,

    /// Enable debug logging
    #[clap(long)]
    debug: bool,
}

/// Prints move and win notifications to the terminal
struct TerminalAnnouncer;

impl GamePlayListener for TerminalAnnouncer {
    fn on_game_changed(&self, game: &Game, round: u32) {
        println!(
            "Round {}: {} colour(s) left on the board.",
            round,
            distinct_colors(game)
        );
    }
}

impl GameWinListener for TerminalAnnouncer {
    fn on_won(&self, _game: &Game, rounds: u32) {
        println!("Flooded the whole board in {} rounds!", rounds);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    if args.colors > 10 {
        return Err(anyhow!("At most 10 colours can be rendered on a terminal."));
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = GameConfig::new(args.width, args.height, args.colors, seed);
    let mut game = Game::new(config).context("failed to start a game")?;

    println!(
        "Flood-It {}x{} with {} colours (seed {})",
        args.width, args.height, args.colors, seed
    );

    let announcer = Arc::new(TerminalAnnouncer);
    game.add_play_listener(announcer.clone());
    game.add_win_listener(announcer);

    match args.play.as_deref() {
        Some(sequence) => play_scripted(&mut game, sequence, args.plain),
        None => interactive_loop(&mut game, args.plain),
    }
}

/// Play a comma-separated colour sequence and print the final position
fn play_scripted(game: &mut Game, sequence: &str, plain: bool) -> Result<()> {
    for token in sequence.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let color = parse_color(token)?;
        game.play_color(color)
            .map_err(|err| anyhow!("move '{}' rejected: {}", token, err))?;
    }

    println!("{}", render::render_board(game, plain));
    if !game.is_won() {
        println!("Not solved after {} rounds.", game.round());
    }
    Ok(())
}

/// Prompt for moves until the board is flooded or the player quits
fn interactive_loop(game: &mut Game, plain: bool) -> Result<()> {
    println!("{}", render::render_board(game, plain));

    loop {
        print!(
            "Colour (0-{}), 'save <path>' or 'quit': ",
            game.color_count() - 1
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }
        if let Some(path) = line.strip_prefix("save ") {
            let path = path.trim();
            match save_snapshot(game, path) {
                Ok(()) => println!("Saved game to {}", path),
                Err(err) => eprintln!("Failed to save: {}", err),
            }
            continue;
        }

        let color = match parse_color(line) {
            Ok(color) => color,
            Err(err) => {
                eprintln!("{}", err);
                continue;
            }
        };
        if let Err(err) = game.play_color(color) {
            eprintln!("Invalid move: {}", err);
            continue;
        }

        println!("{}", render::render_board(game, plain));
        if game.is_won() {
            break;
        }
    }

    Ok(())
}

/// Count the distinct colours still present on the board
fn distinct_colors(game: &Game) -> u32 {
    let mut seen = [false; 256];
    let mut distinct = 0;
    for y in 0..game.height() {
        for x in 0..game.width() {
            if let Ok(color) = game.color_at(Coord::new(x, y)) {
                let index = color.index() as usize;
                if !seen[index] {
                    seen[index] = true;
                    distinct += 1;
                }
            }
        }
    }
    distinct
}

/// Parse a colour index from user input
fn parse_color(input: &str) -> Result<Color> {
    let index: u8 = input
        .parse()
        .map_err(|_| anyhow!("Expected a colour index, got '{}'.", input))?;
    Ok(Color::new(index))
}

/// Write a JSON snapshot of the game
fn save_snapshot(game: &Game, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(game)?;
    fs::write(path, json)?;
    Ok(())
}
