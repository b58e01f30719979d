//! Employee roster table with the empty-state placeholder.
//!
//! The placeholder is a distinct element so "no rows" is never ambiguous
//! with a loading or error state.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::roster::Roster;

use super::Theme;

/// Roster table widget.
pub struct EmployeeTable;

impl EmployeeTable {
    /// Renders the current roster page, or the empty-state placeholder when
    /// the filtered view has no rows.
    pub fn render(f: &mut Frame, area: Rect, roster: &Roster, theme: &Theme) {
        if roster.is_empty() {
            Self::render_empty_state(f, area, theme);
            return;
        }

        let header_check = if roster.all_checked() { "[x]" } else { "[ ]" };
        let header = Row::new(vec![
            Cell::from(header_check),
            Cell::from("ID"),
            Cell::from("Employee"),
            Cell::from("Department"),
            Cell::from("Role"),
            Cell::from("Hired"),
            Cell::from("Status"),
        ])
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = roster
            .current_page()
            .iter()
            .enumerate()
            .map(|(idx, employee)| {
                let check = if roster.is_checked(&employee.id) {
                    "[x]"
                } else {
                    "[ ]"
                };

                let name_cell = Cell::from(Line::from(vec![
                    Span::styled(
                        format!("{} ", employee.initials),
                        Style::default().fg(theme.text_muted),
                    ),
                    Span::styled(employee.name.clone(), Style::default().fg(theme.text)),
                    Span::styled(
                        format!("  {}", employee.email),
                        Style::default().fg(theme.text_muted),
                    ),
                ]));

                let row = Row::new(vec![
                    Cell::from(check),
                    Cell::from(employee.id.clone()),
                    name_cell,
                    Cell::from(employee.department.clone()),
                    Cell::from(employee.role.clone()),
                    Cell::from(employee.hired_on_label()),
                    Cell::from(Span::styled(
                        employee.status.label(),
                        Style::default().fg(theme.status_color(employee.status)),
                    )),
                ]);

                if idx == roster.cursor {
                    row.style(
                        Style::default()
                            .bg(theme.highlight_bg)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    row
                }
            })
            .collect();

        let widths = [
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(30),
            Constraint::Length(16),
            Constraint::Length(22),
            Constraint::Length(10),
            Constraint::Length(11),
        ];

        let table = Table::new(rows, widths).header(header).block(
            Block::default()
                .title(" Employees ")
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background))
                .border_style(Style::default().fg(theme.primary)),
        );

        f.render_widget(table, area);
    }

    /// Distinct placeholder shown when the display set is empty.
    fn render_empty_state(f: &mut Frame, area: Rect, theme: &Theme) {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No employees to display",
                Style::default()
                    .fg(theme.text_secondary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Records you add, or a different tab filter, will appear here.",
                Style::default().fg(theme.text_muted),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Employees ")
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background))
                .border_style(Style::default().fg(theme.primary)),
        );

        f.render_widget(placeholder, area);
    }
}
