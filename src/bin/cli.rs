//! Thin demonstration binary over the `rookery` library: reads
//! long-algebraic moves from stdin, one per line, printing the board
//! after each; `go` asks the engine to search and play its own move;
//! `quit` exits.
//!
//! This is not the interactive menu-driven game loop the engine was
//! extracted from — just enough surface to exercise the library from a
//! terminal.

use std::io::{self, BufRead};
use std::time::Duration;

use rookery::board::Board;
use rookery::notation::{format_move, parse_move};
use rookery::search::Engine;

const MAX_DEPTH: u32 = 4;
const MAX_TIME: Duration = Duration::from_secs(5);

fn main() {
    rookery::logger::init();

    let mut board = Board::new();
    let mut engine = Engine::new(64);

    println!("{}", board.display());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "quit" | "exit" => break,
            "go" => {
                let (mv, score) = engine.search(&board, MAX_DEPTH, MAX_TIME);
                match mv {
                    Some(mv) => {
                        board.make_move(mv);
                        println!("bestmove {} score {}", format_move(mv), score);
                        println!("{}", board.display());
                    }
                    None => println!("bestmove none"),
                }
            }
            "d" | "display" => println!("{}", board.display()),
            _ => match parse_move(line) {
                Some(mv) => {
                    if board.make_move(mv) {
                        println!("{}", board.display());
                    } else {
                        println!("illegal move: {line}");
                    }
                }
                None => println!("unrecognized input: {line}"),
            },
        }
    }
}
