//! Flipstone -- an Othello engine implementing the OTI protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! following the OTI (Othello Text Interface) convention. A UI drives the
//! engine by sending `move <row> <col>` for the cell a player picked and
//! reading the updated snapshot back with `show`.

use std::io::{self, BufRead};

use flipstone::engine::Engine;
use flipstone::protocol::parser::{parse_command, Command};

/// Runs the main OTI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Oti => {
                engine.handle_oti(&mut out);
            }
            Command::IsReady => {
                engine.handle_isready(&mut out);
            }
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
            }
            Command::NewGame { size } => {
                if let Err(e) = engine.new_game(size) {
                    eprintln!("error {}", e);
                }
            }
            Command::Position { ofen } => {
                if let Err(e) = engine.set_position(&ofen) {
                    eprintln!("{}", e);
                }
            }
            Command::Move { row, col } => {
                engine.handle_move(&mut out, row, col);
            }
            Command::Show => {
                engine.handle_show(&mut out);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
