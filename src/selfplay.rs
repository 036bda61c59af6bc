//! Self-play game generation.
//!
//! Plays Othello games by selecting uniformly random legal moves for the
//! side to move, and records every applied move plus the final position as
//! JSONL for replay and regression data.
//!
//! The core engine never detects passes or game over, so termination is a
//! harness policy: a playout stops as soon as the side to move has no legal
//! move. Games are independent and run in parallel.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{GameState, STANDARD_SIZE};
use crate::movegen::random_move;
use crate::protocol::ofen::encode_ofen;
use crate::resolve::attempt_move;

/// Configuration for self-play game generation.
#[derive(Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Board side length (even, >= 4).
    pub board_size: usize,
    /// Random seed for the first game; game i uses `seed + i`.
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            board_size: STANDARD_SIZE,
            seed: 1,
        }
    }
}

/// One applied move within a game record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveRecord {
    /// "White" or "Black".
    pub player: String,
    pub row: usize,
    pub col: usize,
    /// Tokens flipped by this move.
    pub flipped: u32,
}

/// A complete self-play game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub seed: u64,
    pub board_size: usize,
    pub moves: Vec<MoveRecord>,
    /// OFEN of the position the playout stopped in.
    pub final_position: String,
    pub score_white: u32,
    pub score_black: u32,
}

/// Plays a single random-move game to a stop and returns its record.
pub fn play_random_game(seed: u64, board_size: usize) -> GameRecord {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut state = GameState::new(board_size);
    let mut moves = Vec::new();

    while let Some((row, col)) = random_move(&state.board, state.to_move, &mut rng) {
        let player = state.to_move;
        let applied = attempt_move(&mut state, row, col)
            .expect("enumerated move must apply");
        moves.push(MoveRecord {
            player: player.to_string(),
            row,
            col,
            flipped: applied.flipped,
        });
    }

    GameRecord {
        seed,
        board_size,
        moves,
        final_position: encode_ofen(&state),
        score_white: state.score_white,
        score_black: state.score_black,
    }
}

/// Plays the configured number of games in parallel, ordered by seed.
pub fn run(config: &SelfPlayConfig) -> Vec<GameRecord> {
    (0..config.num_games)
        .into_par_iter()
        .map(|i| play_random_game(config.seed + i as u64, config.board_size))
        .collect()
}

/// Serializes records as JSONL, one game per line.
pub fn write_jsonl<W: std::io::Write>(
    out: &mut W,
    records: &[GameRecord],
) -> std::io::Result<()> {
    for record in records {
        let line = serde_json::to_string(record)?;
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
