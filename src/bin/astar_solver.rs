use clap::Parser;
use fifteen_solver::engine::Board;
use fifteen_solver::heuristics::Heuristic;
use fifteen_solver::solver::{search, SearchReport};
use fifteen_solver::utils::board_from_str;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Run only this heuristic instead of comparing both
    #[clap(long, value_enum)]
    heuristic: Option<Heuristic>,

    /// Path to a file holding the starting configuration; omit it to be
    /// prompted on the console (16 numbers, 0 = empty space)
    board_file: Option<PathBuf>,
}

/// Obtains the raw configuration line, either from the given file or by
/// prompting on the console, and validates it into a `Board`.
fn read_configuration(args: &Args) -> Result<Board, String> {
    let line = match &args.board_file {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?
        }
        None => {
            println!("\nEnter list of 16 numbers as starting configuration (0 = empty space):");
            io::stdout()
                .flush()
                .map_err(|e| format!("Failed to flush prompt: {}", e))?;

            let mut input = String::new();
            io::stdin()
                .read_line(&mut input)
                .map_err(|e| format!("Failed to read input: {}", e))?;
            input
        }
    };

    board_from_str(&line)
}

fn print_report(report: &SearchReport) {
    match &report.solution {
        Some(moves) => {
            println!("Goal Found!");
            let letters: Vec<String> = moves.iter().map(|m| m.to_char().to_string()).collect();
            println!("Moves: {}", letters.join(" "));
            println!("Number of Nodes Expanded: {}", report.nodes_expanded);
            println!(
                "Memory Used: {} kB",
                report.estimated_memory_bytes as f64 / 1000.0
            );
            let seconds = report.elapsed.as_secs_f64();
            println!(
                "Time Taken: {} seconds or {} milliseconds",
                seconds,
                seconds * 1000.0
            );
        }
        None => println!("Frontier is empty - Goal not found"),
    }
}

fn main() {
    let args = Args::parse();

    let initial = match read_configuration(&args) {
        Ok(board) => board,
        Err(message) => {
            eprintln!("{} - exiting...", message);
            process::exit(1);
        }
    };

    println!("Starting configuration:\n{}", initial);

    let runs = match args.heuristic {
        Some(heuristic) => vec![heuristic],
        None => vec![Heuristic::MisplacedTiles, Heuristic::ManhattanDistance],
    };

    let goal = Board::solved();
    for (i, heuristic) in runs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}:", heuristic);
        let report = search(&goal, &initial, *heuristic);
        print_report(&report);
    }
}
