//! SkraBBKle - CLI
//!
//! Play against the computer at the terminal, watch two computers play, check
//! board layout files, or ask for a suggested move.

use anyhow::Result;
use clap::{Parser, Subcommand};
use skrabbkle::{
    commands::{
        BoardReport, BoardSource, DEFAULT_WORDLIST, GameConfig, parse_rack, run_autoplay,
        run_play, suggest,
    },
    output::{print_board_report, print_suggestion},
    solver::SearchLimits,
    wordlists::load_board,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "skrabbkle",
    about = "SkraBBKle: a tile-placement word game against an exhaustive-search computer",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board layout: 'default' (built-in 16x16) or path to a board file
    #[arg(short, long, global = true, default_value = "default")]
    board: String,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Seed for a reproducible tile bag
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Cap on candidate words the computer examines per turn
    #[arg(long, global = true)]
    max_candidates: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer (default)
    Play {
        /// Open game: show the computer's tiles
        #[arg(short, long)]
        open: bool,
    },

    /// Let two computers play each other
    Autoplay,

    /// Validate a board layout file
    CheckBoard {
        /// Board file to check
        path: PathBuf,
    },

    /// Suggest a move for a rack on an empty board
    Suggest {
        /// Rack letters, '_' for a wildcard (e.g. "QUIZ_E")
        #[arg(short, long)]
        rack: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play { open: false });

    let mut config = GameConfig {
        board: BoardSource::from_arg(&cli.board),
        wordlist: cli.wordlist,
        seed: cli.seed,
        open: false,
        limits: SearchLimits {
            max_candidates: cli.max_candidates,
        },
    };

    match command {
        Commands::Play { open } => {
            config.open = open;
            run_play(&config)?;
        }
        Commands::Autoplay => {
            run_autoplay(&config)?;
        }
        Commands::CheckBoard { path } => run_check_board_command(&path)?,
        Commands::Suggest { rack } => run_suggest_command(&config, &rack)?,
    }
    Ok(())
}

fn run_check_board_command(path: &Path) -> Result<()> {
    let board = load_board(path)?;
    print_board_report(&BoardReport::from_board(&board), &board);
    Ok(())
}

fn run_suggest_command(config: &GameConfig, letters: &str) -> Result<()> {
    let rack = parse_rack(letters)?;
    let board = config.board.load()?;
    let dictionary = config.load_dictionary();
    let outcome = suggest(&board, &rack, &dictionary, config.limits);
    print_suggestion(&outcome);
    Ok(())
}
