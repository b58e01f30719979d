//! HRISELINK Console - Terminal-based HR management frontend
//!
//! This application renders the employee roster with sidebar navigation,
//! status tabs, pagination, and a delete-confirmation workflow backed by
//! the remote HRISELINK task API.

use std::fs;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hriselink::api::HttpTaskClient;
use hriselink::config::{Config, ThemeMode};
use hriselink::constants::{APP_BINARY_NAME, APP_NAME};
use hriselink::tui::{self, AppState};

/// Timeout for the informational startup health probe.
const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// HRISELINK Console - Terminal-based HR management frontend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Persist an API base address override (e.g. https://api.example.com)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Persist a theme preference (auto, dark, or light)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging()?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting {APP_NAME}");

    let mut config = Config::load().unwrap_or_else(|err| {
        eprintln!("Warning: could not load config ({err}), using defaults");
        Config::default()
    });

    // CLI flags are the configuration surface for the persisted overrides;
    // the resolver itself only ever reads.
    if let Some(url) = cli.api_url {
        config.api.base_url = Some(url);
        config
            .save()
            .context("Failed to persist API address override")?;
    }
    if let Some(mode) = cli.theme {
        config.ui.theme_mode = parse_theme_mode(&mode)?;
        config.save().context("Failed to persist theme preference")?;
    }

    let mut state = AppState::new(config);
    state.status_message = probe_api(&state.config);

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(&mut terminal)?;

    result
}

/// Routes diagnostics to a log file under the config directory, since the
/// alternate screen owns stdout while the TUI runs.
fn init_logging() -> Result<()> {
    let log_path = Config::log_file_path()?;
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    let log_file = fs::File::create(&log_path)
        .context(format!("Failed to open log file: {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn parse_theme_mode(mode: &str) -> Result<ThemeMode> {
    match mode {
        "auto" => Ok(ThemeMode::Auto),
        "dark" => Ok(ThemeMode::Dark),
        "light" => Ok(ThemeMode::Light),
        other => anyhow::bail!(
            "Invalid theme '{other}' (expected auto, dark, or light). Example: {APP_BINARY_NAME} --theme dark"
        ),
    }
}

/// Informational startup probe of `GET /api/health`; never fatal.
fn probe_api(config: &Config) -> String {
    let base_url = config.resolve_base_url();

    let reachable = HttpTaskClient::with_timeout(&base_url, HEALTH_PROBE_TIMEOUT)
        .map(|client| client.health_check().is_ok())
        .unwrap_or(false);

    if reachable {
        info!(url = %base_url, "API reachable");
        format!("Connected to {base_url} | Press ? for help")
    } else {
        info!(url = %base_url, "API unreachable at startup");
        format!("API unreachable at {base_url} - deletions will fail until it returns")
    }
}
