//! Wordle Game - CLI
//!
//! Play Wordle in the terminal, either line by line or in a full-screen TUI.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{ClassicOptions, run_classic, run_merge},
    game::GameSession,
    logging,
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list, one word per line (default: built-in list)
    #[arg(short, long, global = true, requires = "guesses")]
    answers: Option<PathBuf>,

    /// Additional accepted guesses, one word per line (default: built-in list)
    #[arg(short, long, global = true, requires = "answers")]
    guesses: Option<PathBuf>,

    /// Reveal the answer before the first guess
    #[arg(short, long, global = true)]
    debug: bool,

    /// Seed for answer selection, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-by-line game with colored feedback (default)
    Play,

    /// Full-screen interactive game
    Tui,

    /// Merge an answer list and a guess list into one sorted, de-duplicated list
    MergeLists {
        /// Answer list
        #[arg(value_name = "ANSWERS")]
        answers_file: PathBuf,

        /// Additional guess list
        #[arg(value_name = "GUESSES")]
        guesses_file: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Load word lists from the given paths, or the embedded ones
fn load_source(cli: &Cli) -> Result<WordSource> {
    let source = match (&cli.answers, &cli.guesses) {
        (Some(answers), Some(guesses)) => WordSource::load(answers, guesses)?,
        _ => WordSource::embedded()?,
    };
    Ok(source)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => run_play_command(&cli),
        Commands::Tui => run_tui_command(&cli),
        Commands::MergeLists {
            answers_file,
            guesses_file,
            output,
        } => {
            let count = run_merge(answers_file, guesses_file, output.as_deref())?;
            if let Some(path) = output {
                eprintln!("Wrote {count} words to {}", path.display());
            }
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let source = load_source(cli)?;
    let mut rng = make_rng(cli.seed);
    let mut session = GameSession::start(&source, &mut rng)?;

    let options = ClassicOptions { debug: cli.debug };
    run_classic(
        &mut session,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        options,
    )
    .context("game aborted")?;
    Ok(())
}

fn run_tui_command(cli: &Cli) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let source = load_source(cli)?;
    let app = App::new(&source, make_rng(cli.seed), cli.debug)?;
    run_tui(app)
}
