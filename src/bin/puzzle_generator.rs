use clap::Parser;
use fifteen_solver::engine::Board;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Seed for the first configuration; configuration i uses seed + i
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Number of configurations to print, one per line
    #[clap(short, long, default_value_t = 1)]
    count: usize,

    /// Scramble by walking this many random legal moves from the goal
    /// instead of a full shuffle, bounding the optimal solution length
    #[clap(short, long)]
    walk: Option<usize>,
}

fn main() {
    let args = Args::parse();

    for i in 0..args.count {
        let seed = args.seed + i as u64;
        let board = match args.walk {
            Some(moves) => Board::scrambled(seed, moves),
            None => Board::random_solvable(seed),
        };

        let tokens: Vec<String> = board.cells().iter().map(|v| v.to_string()).collect();
        println!("{}", tokens.join(" "));
    }
}
