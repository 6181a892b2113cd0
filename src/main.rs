//! Wriddle - CLI
//!
//! Word-guessing game with TUI and line-based modes, plus leaderboard tools.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wriddle::{
    commands::{add_score, eval_guess, list_scores, run_simple, show_score, streak, update_score},
    config::{FileConfig, Overrides, Settings, default_config_path},
    core::{ScoringRule, Word},
    dictionary::{ANSWERS, WordList, loader::load_from_file, loader::words_from_slice},
    game::Session,
    logging,
    output::{print_eval_result, print_leaderboard, print_score, print_streak},
    storage::{JsonScoreBoard, JsonStreakStore},
};

#[derive(Parser)]
#[command(
    name = "wriddle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Scoring rule: standard (default) or naive
    #[arg(short, long, global = true)]
    scoring: Option<ScoringRule>,

    /// Wordlist: 'all' (default), 'answers' (answers only), or path to file
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Directory for streak, scores and log files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Player name for the leaderboard
    #[arg(long, global = true)]
    player: Option<String>,

    /// Config file (default: <config dir>/wriddle/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score one guess against an answer
    Eval {
        /// The hidden word
        answer: String,

        /// The guess to score
        guess: String,
    },

    /// Leaderboard tools
    Scores {
        #[command(subcommand)]
        command: ScoresCommand,
    },

    /// Show the current win streak
    Streak {
        /// Reset the streak to zero
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
enum ScoresCommand {
    /// Show the best scores
    List {
        /// Number of scores to show
        #[arg(short = 'n', long, default_value = "4")]
        limit: usize,
    },

    /// Show one score
    Show { id: u64 },

    /// Add a score
    Add { name: String, value: u32 },

    /// Change a score's name and/or value
    Update {
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        value: Option<u32>,
    },
}

/// Load settings from config file and flags
///
/// Config problems are returned as warnings so they can be logged once
/// tracing is up; the game still starts with defaults.
fn load_settings(cli: &Cli) -> (Settings, Vec<String>) {
    let mut warnings = Vec::new();

    let file = cli
        .config
        .clone()
        .or_else(default_config_path)
        .and_then(|path| match FileConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warnings.push(format!("ignoring config: {e}"));
                None
            }
        })
        .unwrap_or_default();

    let overrides = Overrides {
        scoring: cli.scoring,
        data_dir: cli.data_dir.clone(),
        player_name: cli.player.clone(),
        wordlist: cli.wordlist.clone(),
    };

    (Settings::resolve(file, overrides), warnings)
}

/// Load wordlists based on the -w flag
///
/// Returns (`answers`, `dictionary`)
/// - "all": secret words from the answer list, guesses from answers plus allowed
/// - "answers": answer list for both
/// - "<path>": custom file for both
fn load_wordlists(wordlist_mode: &str) -> Result<(Vec<Word>, WordList)> {
    match wordlist_mode {
        "all" => Ok((words_from_slice(ANSWERS), WordList::embedded())),
        "answers" => {
            let answers = words_from_slice(ANSWERS);
            let dictionary = WordList::new(&answers);
            Ok((answers, dictionary))
        }
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to load wordlist from {path}"))?;
            if words.is_empty() {
                return Err(anyhow!("wordlist {path} has no five-letter words"));
            }
            let dictionary = WordList::new(&words);
            Ok((words, dictionary))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (settings, warnings) = load_settings(&cli);
    logging::init(&settings.log_path(), &warnings);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&settings),
        Commands::Simple => run_simple_command(&settings),
        Commands::Eval { answer, guess } => {
            let result = eval_guess(&answer, &guess, settings.scoring).map_err(|e| anyhow!(e))?;
            print_eval_result(&result);
            Ok(())
        }
        Commands::Scores { command } => run_scores_command(&settings, command),
        Commands::Streak { reset } => {
            let mut store = JsonStreakStore::in_dir(&settings.data_dir);
            let current = streak(&mut store, reset).context("failed to access streak")?;
            print_streak(current);
            Ok(())
        }
    }
}

fn run_scores_command(settings: &Settings, command: ScoresCommand) -> Result<()> {
    let mut board = JsonScoreBoard::in_dir(&settings.data_dir);

    match command {
        ScoresCommand::List { limit } => {
            let scores = list_scores(&board, limit)?;
            print_leaderboard(&scores);
        }
        ScoresCommand::Show { id } => print_score(&show_score(&board, id)?),
        ScoresCommand::Add { name, value } => {
            let score = add_score(&mut board, &name, value)?;
            println!("Added score:");
            print_score(&score);
        }
        ScoresCommand::Update { id, name, value } => {
            let score = update_score(&mut board, id, name, value)?;
            println!("Updated score:");
            print_score(&score);
        }
    }
    Ok(())
}

/// Build a session over the chosen wordlist and persistent stores
fn with_session<T>(settings: &Settings, run: impl FnOnce(Session<'_>) -> Result<T>) -> Result<T> {
    let (answers, dictionary) = load_wordlists(&settings.wordlist)?;

    let mut session = Session::new(
        &answers,
        &dictionary,
        Box::new(JsonStreakStore::in_dir(&settings.data_dir)),
        settings.scoring,
        StdRng::from_os_rng(),
    )?;

    if let Some(player) = &settings.player_name {
        let board = JsonScoreBoard::in_dir(&settings.data_dir);
        session = session.with_leaderboard(Box::new(board), player);
    }

    run(session)
}

fn run_simple_command(settings: &Settings) -> Result<()> {
    with_session(settings, |mut session| {
        run_simple(&mut session).map_err(|e| anyhow!(e))
    })
}

fn run_play_command(settings: &Settings) -> Result<()> {
    use wriddle::interactive::{App, run_tui};

    with_session(settings, |session| run_tui(App::new(session)))
}
