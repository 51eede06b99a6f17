//! Pendu - CLI
//!
//! Two-player hangman against a frequency-ranking letter guesser.

use anyhow::{Context, Result};
use clap::builder::TypedValueParser;
use clap::{Parser, Subcommand};
use pendu::{
    commands::{Console, SessionMode, SolveConfig, run_benchmark, run_session, solve_word},
    config::{DEFAULT_DICTIONARY, GameConfig},
    dictionary::{DEFAULT_MIN_LENGTH, Dictionary},
    output::{format_scores, print_benchmark_result, print_solve_result},
    solver::DEFAULT_MAX_ERRORS,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pendu",
    about = "Hangman for two: you guess the computer's word, it guesses yours",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list, one word per line (ISO-8859-1); learned words are appended to it
    #[arg(short, long, global = true, default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,

    /// Wrong letters allowed per round
    #[arg(
        short = 'e',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ERRORS,
        value_parser = clap::value_parser!(u64).range(1..=26).map(|v| v as usize)
    )]
    max_errors: usize,

    /// Shortest word that can be picked or played
    #[arg(
        short = 'm',
        long,
        global = true,
        default_value_t = DEFAULT_MIN_LENGTH,
        value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize)
    )]
    min_length: usize,

    /// Seed for the random word picks and turn order
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Both sides guess in turn, with scores (default)
    Play,

    /// Only the computer guesses (you think of words)
    Guess,

    /// Only you guess (the computer picks words)
    Challenge,

    /// Let the computer guess a given word, answering for you
    Solve {
        /// The hidden word
        word: String,

        /// Show candidate counts at every turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run the computer against every dictionary word
    Benchmark {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            dictionary_path: self.dictionary.clone(),
            max_errors: self.max_errors,
            min_length: self.min_length,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config();
    log::debug!("{config:?}");

    let mut dictionary = config.load_dictionary().with_context(|| {
        format!(
            "loading dictionary from {}",
            config.dictionary_path.display()
        )
    })?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&mut dictionary, &config, SessionMode::Alternate),
        Commands::Guess => {
            run_play_command(&mut dictionary, &config, SessionMode::ComputerGuesses)
        }
        Commands::Challenge => {
            run_play_command(&mut dictionary, &config, SessionMode::PlayerGuesses)
        }
        Commands::Solve { word, verbose } => run_solve_command(&word, verbose, &dictionary, &config),
        Commands::Benchmark { limit } => {
            run_benchmark_command(limit, &dictionary, &config);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &mut Dictionary, config: &GameConfig, mode: SessionMode) -> Result<()> {
    let mut rng = config.rng();
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let scores = run_session(&mut console, dictionary, config, mode, &mut rng)?;
    println!();
    for line in format_scores(&scores) {
        println!("{line}");
    }
    Ok(())
}

fn run_solve_command(word: &str, verbose: bool, dictionary: &Dictionary, config: &GameConfig) -> Result<()> {
    let solve_config = SolveConfig {
        target: word.to_string(),
        max_errors: config.max_errors,
    };
    let result = solve_word(solve_config, dictionary).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(limit: Option<usize>, dictionary: &Dictionary, config: &GameConfig) {
    println!(
        "Running the computer against {} words...",
        limit.map_or(dictionary.eligible().len(), |l| l.min(dictionary.eligible().len()))
    );

    let result = run_benchmark(dictionary, config.max_errors, limit);
    print_benchmark_result(&result, config.max_errors);
}
