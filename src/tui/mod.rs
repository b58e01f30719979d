//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

pub mod component;
pub mod delete_confirm;
pub mod handlers;
pub mod help_overlay;
pub mod pagination;
pub mod sidebar;
pub mod status_bar;
pub mod table;
pub mod tabs;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{error, info};

use crate::api::{DeleteTracker, TaskGateway};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::sample_employees;
use crate::roster::Roster;

pub use component::Component;
pub use delete_confirm::ConfirmationGate;
pub use help_overlay::HelpOverlay;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use table::EmployeeTable;
pub use theme::Theme;

/// Popup types that can be displayed over the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Delete confirmation modal
    DeleteConfirm,
    /// Help overlay popup
    HelpOverlay,
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    /// The display set of employee records
    pub roster: Roster,
    /// Sidebar navigation menu
    pub sidebar: Sidebar,
    /// Delete confirmation gate
    pub gate: ConfirmationGate,
    /// In-flight background deletions
    pub deletes: DeleteTracker,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Help overlay component
    pub help_overlay: HelpOverlay,
    /// Current UI theme
    pub theme: Theme,
    /// Application configuration
    pub config: Config,
    /// Status bar message
    pub status_message: String,
    /// Current error notification (if any)
    pub error_message: Option<String>,
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the app state with the sample roster seeded, mirroring the
    /// frontend's behavior of loading sample data into an empty table.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let status_message = if config.ui.show_help_hint {
            "Press ? for help".to_string()
        } else {
            String::new()
        };

        Self {
            roster: Roster::new(sample_employees()),
            sidebar: Sidebar::new(),
            gate: ConfirmationGate::new(),
            deletes: DeleteTracker::new(),
            active_popup: None,
            help_overlay: HelpOverlay,
            theme,
            config,
            status_message,
            error_message: None,
            should_quit: false,
        }
    }

    /// Opens the confirmation gate on the highlighted row.
    ///
    /// With no row highlighted (empty view), this is an `InvalidArgument`
    /// fast-failure: a notification is shown and no network call is made.
    pub fn request_deletion_of_selected(&mut self) {
        let Some(id) = self.roster.selected().map(|e| e.id.clone()) else {
            self.error_message = Some(crate::api::ApiError::InvalidId.notification());
            return;
        };

        match self.gate.request_deletion(&id) {
            Ok(()) => {
                self.active_popup = Some(PopupType::DeleteConfirm);
            }
            Err(err) => {
                self.error_message = Some(err.notification());
            }
        }
    }

    /// Confirms the pending deletion through the given gateway.
    ///
    /// The gate closes synchronously; the request runs in the background and
    /// the roster is reconciled later by [`AppState::apply_delete_outcomes`].
    /// With no pending target this only closes the modal.
    pub fn confirm_deletion<G>(&mut self, gateway: G)
    where
        G: TaskGateway + Send + 'static,
    {
        self.active_popup = None;

        if let Some(id) = self.gate.confirm() {
            self.status_message = format!("Deleting {id}...");
            self.deletes.spawn(gateway, id);
        }
    }

    /// Cancels the pending deletion and closes the modal.
    pub fn cancel_deletion(&mut self) {
        self.gate.cancel();
        self.active_popup = None;
    }

    /// Drains completed deletions and reconciles the display set.
    ///
    /// Success removes the row (the empty-state placeholder renders once the
    /// view is empty); failure leaves the roster untouched and surfaces a
    /// notification. Returns the number of outcomes applied.
    pub fn apply_delete_outcomes(&mut self) -> usize {
        let mut applied = 0;

        while let Some(outcome) = self.deletes.poll() {
            applied += 1;
            match outcome.result {
                Ok(()) => {
                    self.roster.remove(&outcome.id);
                    info!(id = %outcome.id, "employee removed from roster");
                    self.status_message = format!("{} deleted", outcome.id);
                }
                Err(err) => {
                    error!(id = %outcome.id, error = %err, "delete failed");
                    self.error_message = Some(err.notification());
                }
            }
        }

        applied
    }
}

/// Sets up the terminal for TUI rendering.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restores the terminal to its original state.
pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handlers::handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        // Reconcile completed background deletions
        state.apply_delete_outcomes();

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let columns = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22), // Sidebar
            Constraint::Min(40),    // Main content
        ])
        .split(f.area());

    state.sidebar.render(f, columns[0], &state.theme);

    let rows = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Tabs
            Constraint::Min(8),    // Table
            Constraint::Length(3), // Pagination
            Constraint::Length(5), // Status bar
        ])
        .split(columns[1]);

    render_title_bar(f, rows[0], state);
    tabs::render_tabs(f, rows[1], state.roster.filter, &state.theme);
    EmployeeTable::render(f, rows[2], &state.roster, &state.theme);
    pagination::render_pagination(f, rows[3], &state.roster, &state.theme);
    StatusBar::render(f, rows[4], state, &state.theme);

    // Render popup if active
    match state.active_popup {
        Some(PopupType::DeleteConfirm) => {
            delete_confirm::render_delete_confirm(f, &state.gate, &state.roster, &state.theme);
        }
        Some(PopupType::HelpOverlay) => {
            state.help_overlay.render(f, f.area(), &state.theme);
        }
        None => {}
    }
}

/// Render title bar with the active section title
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(" {} - {}", APP_NAME, state.sidebar.section_title());

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}
