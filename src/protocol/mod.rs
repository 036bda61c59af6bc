//! OTI protocol handling.
//!
//! This module implements parsing and serialization for the OTI (Othello
//! Text Interface) protocol: OFEN position encoding and the command parser
//! for the main loop.

pub mod ofen;
pub mod parser;

pub use ofen::{encode_ofen, encode_rows, parse_ofen, OfenError};
pub use parser::{parse_command, Command};
