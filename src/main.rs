use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use memory_match::core::GameConfig;
use memory_match::game::GameSession;
use memory_match::ui::App;

/// Read from the working directory when `--config` is not given.
const DEFAULT_CONFIG: &str = "memory-match.toml";

/// Play a game of memory against the computer.
#[derive(Parser)]
#[command(name = "memory-match", about = "Memory matching game against a computer opponent")]
struct Cli {
    /// Path to a TOML configuration file [default: ./memory-match.toml if present]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the shuffle seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        init_logging(path)?;
    }

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::load_or_default(Path::new(DEFAULT_CONFIG))?,
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let session = GameSession::new(config).context("Invalid game configuration")?;
    run(session).context("Terminal error")
}

/// Logs go to a file only; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("memory_match=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(session: GameSession) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
