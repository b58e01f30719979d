//! Help overlay listing all key bindings.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::component::Component;
use super::Theme;

/// Full-screen help overlay. Any key dismisses it.
#[derive(Debug, Default)]
pub struct HelpOverlay;

/// Events emitted by the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpOverlayEvent {
    /// Overlay dismissed
    Closed,
}

const BINDINGS: &[(&str, &str)] = &[
    ("j / Down", "Move cursor down"),
    ("k / Up", "Move cursor up"),
    ("h / Left", "Previous page"),
    ("l / Right", "Next page"),
    ("Tab", "Cycle status filter tab"),
    ("1-6", "Activate sidebar menu item"),
    ("Space", "Toggle check mark on row"),
    ("a", "Check/uncheck all visible rows"),
    ("d / Delete", "Request deletion of highlighted row"),
    ("t", "Cycle theme (auto/dark/light)"),
    ("?", "Show this help"),
    ("q / Ctrl+C", "Quit"),
];

impl Component for HelpOverlay {
    type Event = HelpOverlayEvent;

    fn handle_input(&mut self, _key: KeyEvent) -> Option<Self::Event> {
        Some(HelpOverlayEvent::Closed)
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(50, 70, area);
        f.render_widget(Clear, popup);

        let background = Block::default().style(Style::default().bg(theme.background));
        f.render_widget(background, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(popup);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {key:<12}"),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*action, Style::default().fg(theme.text)),
                ])
            })
            .collect();

        let body = Paragraph::new(lines).block(
            Block::default()
                .title(" Key Bindings ")
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background))
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(body, chunks[0]);

        let footer = Paragraph::new("Press any key to close")
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(theme.text_muted))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(footer, chunks[1]);
    }
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
