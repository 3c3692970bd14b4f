//! Interactive command-line front end for the engine.
//!
//! Commands: `FEN <fen>`, `display`, `move_gen`, `move <mv>`,
//! `perft <depth>`, `evaluate`, `search <depth>`, `clear`, `exit`.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use ruy::board::{parallel_divide, search, Position, INFINITY};

fn prompt() {
    print!("Enter command: ");
    let _ = io::stdout().flush();
}

fn main() {
    let stdin = io::stdin();
    let mut pos = Position::initial();

    prompt();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("Error reading from standard input: {err}");
                std::process::exit(1);
            }
        };
        let mut parts = line.trim().split_whitespace();
        let command = parts.next().unwrap_or("");
        let rest: Vec<&str> = parts.collect();

        match command {
            "" => {}
            "FEN" => match Position::try_from_fen(&rest.join(" ")) {
                Ok(parsed) => {
                    pos = parsed;
                    println!("{pos}");
                }
                Err(err) => println!("Bad FEN: {err}"),
            },
            "display" => println!("{pos}"),
            "move_gen" => {
                let moves = pos.generate_moves();
                println!("Number of moves: {}", moves.len());
                let listed: Vec<String> = moves.iter().map(ToString::to_string).collect();
                println!("All moves available: [{}]", listed.join(", "));
            }
            "move" => match rest.first() {
                Some(text) => match pos.parse_move(text) {
                    Ok(mv) => {
                        pos = pos.make_move(mv);
                        println!("{pos}");
                    }
                    Err(err) => println!("{err}"),
                },
                None => println!("Usage: move <from><to>[promotion]"),
            },
            "perft" => match rest.first().and_then(|d| d.parse::<u32>().ok()) {
                Some(depth) => {
                    let start = Instant::now();
                    let results = parallel_divide(&pos, depth);
                    let elapsed = start.elapsed();
                    let mut total = 0u64;
                    for (mv, nodes) in &results {
                        println!("{mv}: {nodes}");
                        total += nodes;
                    }
                    println!("Total nodes found: {total}");
                    println!(
                        "Took {} ms ({:.2} seconds)",
                        elapsed.as_millis(),
                        elapsed.as_secs_f64()
                    );
                }
                None => println!("Usage: perft <depth>"),
            },
            "evaluate" => println!("Current position evaluation: {}", pos.evaluate()),
            "search" => match rest.first().and_then(|d| d.parse::<u32>().ok()) {
                Some(depth) => {
                    let start = Instant::now();
                    let (score, best) = search(&pos, depth, -INFINITY, INFINITY);
                    let elapsed = start.elapsed();
                    match best {
                        Some(mv) => println!("Found move: {mv} (score {score})"),
                        None => println!("No move found"),
                    }
                    println!(
                        "Took {} ms ({:.2} seconds)",
                        elapsed.as_millis(),
                        elapsed.as_secs_f64()
                    );
                }
                None => println!("Usage: search <depth>"),
            },
            "clear" => print!("\x1B[2J\x1B[H"),
            "exit" => return,
            other => println!("Unknown command: {other}"),
        }

        prompt();
    }
}
