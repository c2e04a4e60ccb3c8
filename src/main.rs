//! Quartiles Solver - CLI
//!
//! Solves Quartiles puzzles: lists every valid word obtainable from 1 to 4
//! tiles, grouped by tile count, with review markers on single-source words.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use quartiles_solver::{
    commands::{DEFAULT_TILES, check_word, solve_puzzle},
    dictionary::{Dictionary, DictionarySelection},
    output::{print_check_result, print_solve_result},
    wordlists::{ENABLE, TWL06, loader::load_from_file},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "quartiles_solver",
    about = "Quartiles puzzle solver using prefix-pruned combinatorial search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary selection: twl06, enable, or both (default)
    #[arg(short, long, global = true, default_value = "both")]
    dict: String,

    /// Override the bundled TWL06 list with a word-list file
    #[arg(long, global = true, value_name = "PATH")]
    twl06_file: Option<PathBuf>,

    /// Override the bundled ENABLE list with a word-list file
    #[arg(long, global = true, value_name = "PATH")]
    enable_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle from its tiles (default - uses a sample puzzle if none given)
    Solve {
        /// The puzzle tiles, in grid order
        tiles: Vec<String>,

        /// Minimum word length to report (2-10)
        #[arg(short, long, default_value = "2")]
        min_length: usize,

        /// Cap on visited search nodes
        #[arg(long)]
        budget: Option<usize>,

        /// Show tile indices alongside each word
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check whether a word is in the active dictionary
    Check {
        /// Word to look up
        word: String,
    },
}

/// Build the active dictionary from the -d flag and any file overrides
fn load_dictionary(cli: &Cli) -> Result<Dictionary> {
    let selection = DictionarySelection::from_name(&cli.dict);

    let twl06: Vec<String> = match &cli.twl06_file {
        Some(path) => load_from_file(path)?,
        None => TWL06.iter().map(ToString::to_string).collect(),
    };
    let enable: Vec<String> = match &cli.enable_file {
        Some(path) => load_from_file(path)?,
        None => ENABLE.iter().map(ToString::to_string).collect(),
    };

    Ok(Dictionary::build(selection, &twl06, &enable)?)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(&cli)?;

    // Default to solving the sample puzzle if no command given
    let command = cli.command.unwrap_or(Commands::Solve {
        tiles: Vec::new(),
        min_length: 2,
        budget: None,
        verbose: false,
    });

    match command {
        Commands::Solve {
            tiles,
            min_length,
            budget,
            verbose,
        } => run_solve_command(&tiles, &dictionary, min_length, budget, verbose),
        Commands::Check { word } => {
            print_check_result(&check_word(&word, &dictionary));
            Ok(())
        }
    }
}

fn run_solve_command(
    tiles: &[String],
    dictionary: &Dictionary,
    min_length: usize,
    budget: Option<usize>,
    verbose: bool,
) -> Result<()> {
    let result = if tiles.is_empty() {
        info!("no tiles provided, solving the sample puzzle");
        println!("No tiles provided. Using the sample puzzle:");
        println!("  {}", DEFAULT_TILES.join(" "));
        solve_puzzle(DEFAULT_TILES, dictionary, min_length, budget)?
    } else {
        solve_puzzle(tiles, dictionary, min_length, budget)?
    };

    print_solve_result(&result, verbose);
    Ok(())
}
