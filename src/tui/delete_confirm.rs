//! Delete confirmation gate and modal.
//!
//! A destructive deletion never fires on a single keypress: the gate captures
//! the target id, the modal asks for an explicit confirmation, and only then
//! does the delete command go out. The gate is an explicit state machine
//! owned by `AppState`, not module-level globals, so it is testable without
//! a terminal.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::api::ApiError;
use crate::roster::Roster;

use super::Theme;

/// Gate state: closed, or open on exactly one pending target.
#[derive(Debug, Clone, PartialEq, Eq)]
enum GateState {
    Closed,
    Open { target_id: String },
}

/// Two-step guard in front of the remote deletion.
///
/// Transitions:
/// - `Closed --request_deletion(id)--> Open(id)`
/// - `Open(id) --request_deletion(id2)--> Open(id2)` (silent replace, no queue)
/// - `Open(id) --confirm--> Closed`, yielding `id` to the caller
/// - `Open(id) --cancel / outside interaction--> Closed`
///
/// The gate is reusable; confirming closes it synchronously, before the
/// network result of the triggered deletion is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationGate {
    state: GateState,
}

impl ConfirmationGate {
    /// Creates a closed gate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: GateState::Closed,
        }
    }

    /// Records `id` as the pending target and opens the gate.
    ///
    /// Empty or blank identifiers are rejected with [`ApiError::InvalidId`]
    /// before any state change. Calling while already open replaces the
    /// prior target: at most one deletion is ever pending.
    pub fn request_deletion(&mut self, id: &str) -> Result<(), ApiError> {
        if id.trim().is_empty() {
            return Err(ApiError::InvalidId);
        }

        self.state = GateState::Open {
            target_id: id.to_string(),
        };
        Ok(())
    }

    /// Confirms the pending deletion, returning the target id and closing
    /// the gate. Returns `None` (silent no-op) when no deletion is pending,
    /// tolerating duplicate or stray confirm events.
    pub fn confirm(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.state, GateState::Closed) {
            GateState::Open { target_id } => Some(target_id),
            GateState::Closed => None,
        }
    }

    /// Clears the pending target and closes the gate unconditionally.
    ///
    /// Valid immediately after `request_deletion`; interaction outside the
    /// confirmation surface routes here as well.
    pub fn cancel(&mut self) {
        self.state = GateState::Closed;
    }

    /// True while a deletion awaits confirmation.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, GateState::Open { .. })
    }

    /// The pending target id, if the gate is open.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match &self.state {
            GateState::Open { target_id } => Some(target_id),
            GateState::Closed => None,
        }
    }
}

impl Default for ConfirmationGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the confirmation modal over the table.
pub fn render_delete_confirm(f: &mut Frame, gate: &ConfirmationGate, roster: &Roster, theme: &Theme) {
    let Some(target_id) = gate.target() else {
        return;
    };

    let area = centered_rect(50, 30, f.area());
    f.render_widget(Clear, area);

    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Message
            Constraint::Length(3), // Help text
        ])
        .split(area);

    // Show the name when the id is still on the roster, otherwise just the id
    let subject = roster
        .find(target_id)
        .map_or_else(|| target_id.to_string(), |e| format!("{} ({})", e.name, e.id));

    let message = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("Delete "),
            Span::styled(
                subject,
                Style::default()
                    .fg(theme.error)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("?"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "This action cannot be undone.",
            Style::default().fg(theme.text_muted),
        )),
    ];

    let body = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .title(" Confirm Deletion ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error))
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(body, chunks[0]);

    let help = Paragraph::new("y/Enter: Delete | Esc: Cancel | any other key dismisses")
        .alignment(ratatui::layout::Alignment::Center)
        .style(Style::default().fg(theme.text_muted))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(help, chunks[1]);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_starts_closed() {
        let gate = ConfirmationGate::new();
        assert!(!gate.is_open());
        assert_eq!(gate.target(), None);
    }

    #[test]
    fn test_request_then_cancel() {
        let mut gate = ConfirmationGate::new();
        gate.request_deletion("EMP001").unwrap();
        assert!(gate.is_open());
        assert_eq!(gate.target(), Some("EMP001"));

        // Immediate cancel is valid
        gate.cancel();
        assert!(!gate.is_open());
        assert_eq!(gate.target(), None);
    }

    #[test]
    fn test_request_then_confirm_yields_target() {
        let mut gate = ConfirmationGate::new();
        gate.request_deletion("EMP002").unwrap();

        assert_eq!(gate.confirm().as_deref(), Some("EMP002"));
        // Gate closed synchronously on confirm
        assert!(!gate.is_open());
    }

    #[test]
    fn test_confirm_without_pending_is_noop() {
        let mut gate = ConfirmationGate::new();
        assert_eq!(gate.confirm(), None);
        // Duplicate confirm after a real one is also a no-op
        gate.request_deletion("EMP001").unwrap();
        gate.confirm();
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn test_new_request_replaces_pending_target() {
        let mut gate = ConfirmationGate::new();
        gate.request_deletion("EMP001").unwrap();
        gate.request_deletion("EMP002").unwrap();

        assert_eq!(gate.target(), Some("EMP002"));
        assert_eq!(gate.confirm().as_deref(), Some("EMP002"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut gate = ConfirmationGate::new();
        assert!(matches!(
            gate.request_deletion(""),
            Err(ApiError::InvalidId)
        ));
        assert!(matches!(
            gate.request_deletion("  "),
            Err(ApiError::InvalidId)
        ));
        assert!(!gate.is_open());
    }

    #[test]
    fn test_cancel_on_closed_gate_is_harmless() {
        let mut gate = ConfirmationGate::new();
        gate.cancel();
        assert!(!gate.is_open());
    }
}
