//! OTI command parser.
//!
//! Parses incoming OTI protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

/// A parsed server-to-engine OTI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the OTI protocol handshake.
    Oti,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Start a fresh game, optionally on a board of the given side length.
    NewGame { size: Option<usize> },

    /// Set the position from an OFEN string.
    Position { ofen: String },

    /// Attempt a move at a 0-based (row, col) cell.
    Move { row: usize, col: usize },

    /// Report the current board, side to move, and scores.
    Show,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line into a command. Returns None for blank lines and
/// anything unrecognized; the main loop ignores those.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut tokens = line.split_whitespace();
    let head = tokens.next()?;

    match head {
        "oti" => Some(Command::Oti),
        "isready" => Some(Command::IsReady),
        "setoption" => parse_setoption(&tokens.collect::<Vec<_>>()),
        "newgame" => {
            let size = match tokens.next() {
                Some(arg) => Some(arg.parse().ok()?),
                None => None,
            };
            Some(Command::NewGame { size })
        }
        "position" => {
            let rest: Vec<&str> = tokens.collect();
            if rest.is_empty() {
                return None;
            }
            Some(Command::Position {
                ofen: rest.join(" "),
            })
        }
        "move" => {
            let row = tokens.next()?.parse().ok()?;
            let col = tokens.next()?.parse().ok()?;
            Some(Command::Move { row, col })
        }
        "show" => Some(Command::Show),
        "quit" => Some(Command::Quit),
        _ => None,
    }
}

/// Parses `setoption name <id...> [value <x...>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.first() != Some(&"name") {
        return None;
    }
    let rest = &tokens[1..];
    let (name_part, value_part) = match rest.iter().position(|&t| t == "value") {
        Some(idx) => (&rest[..idx], Some(&rest[idx + 1..])),
        None => (rest, None),
    };
    if name_part.is_empty() {
        return None;
    }
    let name = name_part.join(" ");
    let value = value_part.map(|v| v.join(" "));
    Some(Command::SetOption { name, value })
}
