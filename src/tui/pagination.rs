//! Pagination bar: page buttons plus the records label.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::roster::Roster;

use super::Theme;

/// Renders the page buttons and the `"{first}-{last} of {total}"` label.
pub fn render_pagination(f: &mut Frame, area: Rect, roster: &Roster, theme: &Theme) {
    let mut spans: Vec<Span> = vec![Span::styled("< ", Style::default().fg(theme.text_muted))];

    for page in 0..roster.page_count() {
        if page > 0 {
            spans.push(Span::raw(" "));
        }
        let label = format!("{}", page + 1);
        if page == roster.page {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(theme.text_secondary)));
        }
    }

    spans.push(Span::styled(" >", Style::default().fg(theme.text_muted)));
    spans.push(Span::raw("   "));
    spans.push(Span::styled(
        roster.records_label(),
        Style::default().fg(theme.text_secondary),
    ));

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background))
            .border_style(Style::default().fg(theme.primary)),
    );

    f.render_widget(bar, area);
}
