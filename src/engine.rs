//! Engine state management.
//!
//! Holds the current game and engine options, and implements the OTI
//! command handlers. Each handler writes its machine-parsable reply to the
//! provided output and flushes, so a UI driving the engine over a pipe sees
//! responses immediately.

use std::collections::HashMap;
use std::io::Write;

use crate::board::{GameState, STANDARD_SIZE};
use crate::protocol::ofen::{encode_rows, parse_ofen};
use crate::resolve::{attempt_move, MoveError};

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub game: GameState,
    pub options: HashMap<String, String>,
}

impl Engine {
    /// Creates a new engine holding the standard opening position.
    pub fn new() -> Self {
        Engine {
            game: GameState::standard(),
            options: HashMap::new(),
        }
    }

    /// Starts a fresh game. Without an explicit size, the `BoardSize`
    /// option applies (default 8). Returns an error message for sizes the
    /// board cannot represent (odd or below 4).
    pub fn new_game(&mut self, size: Option<usize>) -> Result<(), String> {
        let size = size.unwrap_or_else(|| self.board_size_option());
        if size < 4 || size % 2 != 0 {
            return Err(format!("invalid size {}", size));
        }
        self.game = GameState::new(size);
        Ok(())
    }

    /// Sets the current position from an OFEN string.
    /// Returns an error message on failure.
    pub fn set_position(&mut self, ofen: &str) -> Result<(), String> {
        match parse_ofen(ofen) {
            Ok(game) => {
                self.game = game;
                Ok(())
            }
            Err(e) => Err(format!("failed to parse OFEN: {}", e)),
        }
    }

    /// Sets an engine option.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Returns the configured board size from options, or the default.
    fn board_size_option(&self) -> usize {
        self.options
            .get("BoardSize")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(STANDARD_SIZE)
    }

    /// Handles the OTI handshake: writes id, options, protocol_version,
    /// and otiok.
    pub fn handle_oti<W: Write>(&self, out: &mut W) {
        writeln!(out, "id name flipstone").unwrap();
        writeln!(out, "id author flipstone").unwrap();
        writeln!(out, "option name BoardSize type spin default 8 min 4 max 26").unwrap();
        writeln!(out, "protocol_version 1").unwrap();
        writeln!(out, "otiok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `move` command. Replies `moveok <flipped>` when the move
    /// is applied, or `illegal <reason>` when it is rejected; a rejected
    /// move leaves the game untouched.
    ///
    /// Coordinates arrive over stdin, so the bounds precondition of the
    /// core is enforced here before calling into it.
    pub fn handle_move<W: Write>(&mut self, out: &mut W, row: usize, col: usize) {
        let size = self.game.board.size();
        if row >= size || col >= size {
            writeln!(out, "illegal outofbounds").unwrap();
            out.flush().unwrap();
            return;
        }

        match attempt_move(&mut self.game, row, col) {
            Ok(applied) => writeln!(out, "moveok {}", applied.flipped).unwrap(),
            Err(MoveError::Occupied) => writeln!(out, "illegal occupied").unwrap(),
            Err(MoveError::NoCapture) => writeln!(out, "illegal nocapture").unwrap(),
        }
        out.flush().unwrap();
    }

    /// Handles the `show` command: writes the full observable snapshot
    /// (board rows, side to move, both scores). Idempotent; repeated calls
    /// report the same state until a move is applied.
    pub fn handle_show<W: Write>(&self, out: &mut W) {
        writeln!(out, "board {}", encode_rows(&self.game.board)).unwrap();
        writeln!(out, "turn {}", self.game.to_move).unwrap();
        writeln!(
            out,
            "score White {} Black {}",
            self.game.score_white, self.game.score_black
        )
        .unwrap();
        out.flush().unwrap();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
