//! Status filter tab bar above the roster table.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::roster::StatusFilter;

use super::Theme;

/// Renders the tab bar with the active filter highlighted.
pub fn render_tabs(f: &mut Frame, area: Rect, active: StatusFilter, theme: &Theme) {
    let titles: Vec<Line> = StatusFilter::ALL
        .iter()
        .map(|filter| Line::from(Span::raw(filter.label())))
        .collect();

    let selected = StatusFilter::ALL
        .iter()
        .position(|f| *f == active)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(theme.text_secondary).bg(theme.background))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background))
                .border_style(Style::default().fg(theme.primary)),
        );

    f.render_widget(tabs, area);
}
