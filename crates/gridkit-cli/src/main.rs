//! Command line front-end for the gridkit puzzle algorithms.
//!
//! Each subcommand reads one puzzle input file and prints its answers.
//!
//! # Usage
//!
//! ```sh
//! gridkit maze input.txt --turn-cost 1000
//! gridkit regions garden.txt
//! gridkit bytes bytes.txt --size 71 --take 1024
//! gridkit network links.txt --prefix t
//! gridkit words letters.txt --word XMAS
//! ```
//!
//! Set `RUST_LOG=debug` to see search statistics.

use std::{path::PathBuf, process};

use clap::{Parser, Subcommand};

use crate::{commands::MazeOptions, input::CliError};

mod commands;
mod input;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Lowest route cost through a maze and the number of tiles on any lowest-cost route.
    Maze {
        /// Character grid containing the start and end markers.
        file: PathBuf,
        /// Start marker.
        #[arg(long, default_value_t = 'S')]
        start: char,
        /// End marker.
        #[arg(long, default_value_t = 'E')]
        end: char,
        /// Impassable cell.
        #[arg(long, default_value_t = '#')]
        wall: char,
        /// Cost of one step forward.
        #[arg(long, value_name = "COST", default_value_t = 1)]
        forward_cost: u64,
        /// Cost of one quarter turn.
        #[arg(long, value_name = "COST", default_value_t = 1000)]
        turn_cost: u64,
        /// Ignore facing and turn costs; every step costs one.
        #[arg(long)]
        no_facing: bool,
    },
    /// Fence prices of the plant regions in a garden grid.
    Regions {
        /// Character grid of plant types.
        file: PathBuf,
    },
    /// Shortest path through a grid of falling bytes and the first byte that cuts it.
    Bytes {
        /// One `x,y` coordinate per line.
        file: PathBuf,
        /// Side length of the square memory grid.
        #[arg(long, value_name = "N")]
        size: usize,
        /// Number of bytes fallen before measuring the shortest path.
        #[arg(long, value_name = "COUNT", default_value_t = 1024)]
        take: usize,
    },
    /// Triangles and the largest fully connected group in a network.
    Network {
        /// One `a-b` link per line.
        file: PathBuf,
        /// Count only triangles with a node whose name starts with this prefix.
        #[arg(long, default_value = "t")]
        prefix: String,
    },
    /// Occurrences of a word in every direction of a letter grid.
    Words {
        /// Character grid of letters.
        file: PathBuf,
        /// Word to search for.
        #[arg(long, default_value = "XMAS")]
        word: String,
    },
}

fn run(command: Command) -> Result<String, CliError> {
    match command {
        Command::Maze {
            file,
            start,
            end,
            wall,
            forward_cost,
            turn_cost,
            no_facing,
        } => {
            let options = MazeOptions {
                start,
                end,
                wall,
                forward_cost,
                turn_cost,
                facing: !no_facing,
            };
            commands::maze(&input::read(&file)?, &options)
        }
        Command::Regions { file } => commands::regions_report(&input::read(&file)?),
        Command::Bytes { file, size, take } => commands::bytes(&input::read(&file)?, size, take),
        Command::Network { file, prefix } => commands::network(&input::read(&file)?, &prefix),
        Command::Words { file, word } => commands::words(&input::read(&file)?, &word),
    }
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(args.command) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}
