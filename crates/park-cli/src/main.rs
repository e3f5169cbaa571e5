//! `park` — terminal UI for browsing the Profile Park user directory.
//!
//! # Usage
//!
//! ```
//! park
//! park --url http://localhost:8080/users --log-file park.log
//! park --config ~/.config/park/config.toml
//! ```

mod app;
mod client;
mod ui;

use std::{
  io,
  path::{Path, PathBuf},
  sync::Mutex,
  time::Duration,
};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use client::{ApiClient, ApiConfig};
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use park_core::UserSource;
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "park", version, about = "Browse and search the Profile Park user directory")]
struct Args {
  /// Path to a TOML config file (url, timeout_secs).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Directory endpoint (default: https://jsonplaceholder.typicode.com/users).
  #[arg(long, env = "PARK_URL")]
  url: Option<String>,

  /// Request timeout in seconds (default: 30).
  #[arg(long, env = "PARK_TIMEOUT", value_name = "SECS")]
  timeout: Option<u64>,

  /// Write logs to this file. The terminal is busy, so nothing is logged
  /// without it. Verbosity follows `RUST_LOG`.
  #[arg(long, env = "PARK_LOG_FILE", value_name = "FILE")]
  log_file: Option<PathBuf>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default, Debug)]
struct ConfigFile {
  #[serde(default)]
  url:          Option<String>,
  #[serde(default)]
  timeout_secs: Option<u64>,
}

impl ConfigFile {
  fn load(path: &Path) -> Result<Self> {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")
  }
}

/// CLI flags override the config file, which overrides defaults.
fn resolve_config(args: &Args, file: ConfigFile) -> ApiConfig {
  let defaults = ApiConfig::default();
  ApiConfig {
    endpoint: args
      .url
      .clone()
      .or(file.url.filter(|u| !u.is_empty()))
      .unwrap_or(defaults.endpoint),
    timeout:  args
      .timeout
      .or(file.timeout_secs)
      .map(Duration::from_secs)
      .unwrap_or(defaults.timeout),
  }
}

// ─── Logging ──────────────────────────────────────────────────────────────────

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
  let Some(path) = log_file else {
    return Ok(());
  };
  let file = std::fs::OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("opening log file {}", path.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .init();
  Ok(())
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();
  init_tracing(args.log_file.as_deref())?;

  let file_cfg = match &args.config {
    Some(path) => ConfigFile::load(path)?,
    None => ConfigFile::default(),
  };
  let api_config = resolve_config(&args, file_cfg);

  let client = ApiClient::new(api_config)?;
  tracing::info!(endpoint = client.endpoint(), "starting park");
  let mut app = App::new(client);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // The fetch runs in the background; the first frames show the loading view.
  app.start();
  let run_result = run_event_loop(&mut terminal, &mut app);

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

// ─── Event loop ───────────────────────────────────────────────────────────────

fn run_event_loop<S: UserSource>(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App<S>,
) -> Result<()> {
  loop {
    app.tick();
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, letting the fetch task progress on other workers.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    match maybe_event {
      Some(Event::Key(key)) => {
        if !app.handle_key(key) {
          break;
        }
      }
      // Resize and the rest are picked up by the next draw.
      _ => {}
    }
  }

  Ok(())
}
