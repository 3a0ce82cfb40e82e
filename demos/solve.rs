//! Solve a maze and print the shortest path.
//!
//! Run: cargo run --bin solve -- demos/mazes/rooms.txt
//!      cargo run --bin solve -- --json demos/mazes/detour.json
//!      cargo run --bin solve -- --random 12x30 --density 0.3 --explored
//!
//! Set `RUST_LOG=debug` (or `trace`) to watch the search.

use std::error::Error;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use gridstar_core::Maze;
use gridstar_demos::{Size, load_json, parse_density, random_maze, report};
use gridstar_search::Solver;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze file in the bordered text format (stdin if omitted)
    file: Option<PathBuf>,

    /// Read the maze as a JSON description instead of text
    #[arg(short, long)]
    json: bool,

    /// Generate a random ROWSxCOLS maze instead of reading one
    #[arg(short, long, value_name = "ROWSxCOLS", conflicts_with_all = ["file", "json"])]
    random: Option<Size>,

    /// Obstacle probability for --random
    #[arg(short, long, default_value = "0.25", value_parser = parse_density)]
    density: f64,

    /// Also draw explored squares and print search counters
    #[arg(short, long)]
    explored: bool,
}

fn read_input(file: Option<&PathBuf>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            Ok(s)
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let maze: Maze = match args.random {
        Some(size) => {
            let maze = random_maze(size, args.density)?;
            print!("{maze}");
            maze
        }
        None => {
            let input = read_input(args.file.as_ref())?;
            if args.json {
                load_json(&input)?
            } else {
                input.parse()?
            }
        }
    };

    let solver = Solver::new(&maze)?;
    print!("{}", report(&maze, &solver, args.explored));
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
