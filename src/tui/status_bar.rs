//! Status bar widget for notifications and contextual help.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Renders the notification line, the in-flight indicator, and key hints.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        // First line: error notification beats status message
        if let Some(error) = &state.error_message {
            lines.push(Line::from(vec![
                Span::styled(
                    "ERROR: ",
                    Style::default()
                        .fg(theme.error)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(error.clone(), Style::default().fg(theme.error)),
            ]));
        } else if !state.status_message.is_empty() {
            lines.push(Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.text),
            )));
        } else {
            lines.push(Line::from(""));
        }

        // Second line: deletions still in flight
        if state.deletes.in_flight() > 0 {
            lines.push(Line::from(Span::styled(
                format!("Deleting... ({} in flight)", state.deletes.in_flight()),
                Style::default().fg(theme.warning),
            )));
        } else {
            lines.push(Line::from(""));
        }

        // Help line at the bottom
        lines.push(Self::help_line(state, theme));

        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = if state.gate.is_open() {
            &[("y/Enter", "Delete"), ("Esc", "Cancel")]
        } else {
            &[
                ("j/k", "Move"),
                ("Tab", "Filter"),
                ("Space", "Check"),
                ("d", "Delete"),
                ("t", "Theme"),
                ("?", "Help"),
                ("q", "Quit"),
            ]
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default().fg(theme.accent),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw((*action).to_string()));
        }

        Line::from(spans)
    }
}
