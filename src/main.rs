//! Word Scramble - CLI
//!
//! Four-letter word guessing game with TUI and line-based modes.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{check_guess, read_status, reset_attempts, run_simple},
    config::{AppConfig, DEFAULT_CONFIG_FILE},
    core::EvaluationMode,
    game::{GameController, GameRules},
    interactive::{App, run_tui},
    output::{print_check_result, print_status},
    source::{EmbeddedWordApi, Fetcher, HttpWordApi, WordProvider, WordSource},
    state::{GameState, JsonFileStore, MemoryStore, StoreBackend},
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Guess the four-letter word before you run out of attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (TOML); defaults apply when it does not exist
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Directory holding the persisted game state
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Base URL of the random-word service
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Draw words from the local list instead of the network
    #[arg(long, global = true)]
    offline: bool,

    /// Keep attempts in memory only
    #[arg(long, global = true)]
    no_persist: bool,

    /// Letter rule: containment (default) or counted
    #[arg(short, long, global = true)]
    evaluation: Option<EvaluationMode>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Show the feedback for a guess against a known word
    Check {
        /// The guessed word
        guess: String,

        /// The word to compare against
        target: String,
    },

    /// Reset the persisted attempt count
    Reset,

    /// Show persisted state and effective settings
    Status,
}

/// Load the config file and apply command-line overrides
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load_or_default(&cli.config)?;

    if let Some(ref dir) = cli.state_dir {
        config.store.dir.clone_from(dir);
    }
    if let Some(ref endpoint) = cli.endpoint {
        config.api.base_url.clone_from(endpoint);
    }
    if cli.offline {
        config.api.offline = true;
    }
    if cli.no_persist {
        config.store.persist = false;
    }
    if let Some(mode) = cli.evaluation {
        config.game.evaluation = mode;
    }

    config.validate()?;
    Ok(config)
}

fn open_store(config: &AppConfig) -> StoreBackend {
    if config.store.persist {
        StoreBackend::File(JsonFileStore::open(
            &config.store.dir,
            &config.store.namespace,
        ))
    } else {
        StoreBackend::Memory(MemoryStore::default())
    }
}

fn build_provider(config: &AppConfig) -> Result<WordProvider> {
    if !config.api.offline {
        let api = HttpWordApi::new(&config.api.base_url, config.api.timeout())?;
        log::info!("using word service at {}", api.url());
        return Ok(WordProvider::Http(api));
    }

    let api = match config.api.word_list {
        Some(ref path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            EmbeddedWordApi::new(words)
        }
        None => EmbeddedWordApi::embedded(),
    };
    if api.is_empty() {
        anyhow::bail!("word list contains no four-letter words");
    }
    log::info!("offline play with {} words", api.len());
    Ok(WordProvider::Embedded(api))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { guess, target } => {
            run_check_command(&guess, &target, config.game.evaluation)
        }
        Commands::Reset => run_reset_command(&config),
        Commands::Status => run_status_command(&config),
    }
}

fn run_check_command(guess: &str, target: &str, mode: EvaluationMode) -> Result<()> {
    let result = check_guess(guess, target, mode).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_reset_command(config: &AppConfig) -> Result<()> {
    let mut state = GameState::new(open_store(config));
    reset_attempts(&mut state).map_err(|e| anyhow::anyhow!(e))?;
    println!("Attempts reset to 0.");
    Ok(())
}

fn run_status_command(config: &AppConfig) -> Result<()> {
    let store = open_store(config);
    let location = store.describe();
    let mut state = GameState::new(store);
    let report = read_status(&mut state, location).map_err(|e| anyhow::anyhow!(e))?;
    print_status(&report, config);
    Ok(())
}

fn run_simple_command(config: &AppConfig) -> Result<()> {
    let runtime = build_runtime()?;
    let source = WordSource::new(build_provider(config)?, config.retry.clone());
    let (fetcher, mut reports) = Fetcher::new(source, runtime.handle().clone());

    let state = GameState::new(open_store(config));
    let mut controller = GameController::new(state, fetcher, GameRules::from(&config.game));
    run_simple(&mut controller, &mut reports).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(config: &AppConfig) -> Result<()> {
    let runtime = build_runtime()?;
    let source = WordSource::new(build_provider(config)?, config.retry.clone());
    let (fetcher, reports) = Fetcher::new(source, runtime.handle().clone());

    let state = GameState::new(open_store(config));
    let controller = GameController::new(state, fetcher, GameRules::from(&config.game));
    let app = App::new(controller, Duration::from_secs(config.game.notice_secs));
    run_tui(app, reports)
}

/// Runtime for background word fetches; the UI stays on the main thread
fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to start async runtime")
}
