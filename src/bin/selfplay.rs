//! Self-play game generation CLI.
//!
//! Plays Othello games with random legal moves and outputs one JSON game
//! record per line.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N       Number of games to play (default: 10)
//!   --size N        Board side length, even and >= 4 (default: 8)
//!   --seed N        Random seed for the first game (default: 1)
//!   --output FILE   Output file path (default: stdout)
//!   --quiet         Suppress summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Instant;

use flipstone::selfplay::{self, SelfPlayConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = args[i].parse().expect("invalid --games value");
            }
            "--size" => {
                i += 1;
                config.board_size = args[i].parse().expect("invalid --size value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if config.board_size < 4 || config.board_size % 2 != 0 {
        eprintln!("invalid --size value: {}", config.board_size);
        std::process::exit(1);
    }

    let start = Instant::now();
    let records = selfplay::run(&config);

    let result = match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            selfplay::write_jsonl(&mut BufWriter::new(file), &records)
        }
        None => selfplay::write_jsonl(&mut io::stdout().lock(), &records),
    };
    result.expect("failed to write records");

    if !quiet {
        let total_moves: usize = records.iter().map(|r| r.moves.len()).sum();
        eprintln!(
            "played {} games ({} moves) in {:.2}s",
            records.len(),
            total_moves,
            start.elapsed().as_secs_f64()
        );
    }
}

fn print_usage() {
    eprintln!(
        "Usage: selfplay [--games N] [--size N] [--seed N] [--output FILE] [--quiet]"
    );
}
