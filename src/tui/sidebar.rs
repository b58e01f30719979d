//! Sidebar navigation menu.
//!
//! Pure UI reflection: the active item is whichever was activated last, and
//! it drives the section title in the header. Items with a submenu show a
//! chevron that flips when the item is expanded.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::Theme;

/// One entry in the sidebar menu.
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Display label (also the section title when active)
    pub label: &'static str,
    /// Whether the item carries a submenu chevron
    pub has_submenu: bool,
    /// Whether the submenu is expanded
    pub expanded: bool,
}

/// Sidebar menu state.
#[derive(Debug, Clone)]
pub struct Sidebar {
    items: Vec<MenuItem>,
    active: usize,
}

impl Sidebar {
    /// Creates the default HRISELINK menu with Employees active.
    #[must_use]
    pub fn new() -> Self {
        let item = |label, has_submenu| MenuItem {
            label,
            has_submenu,
            expanded: false,
        };

        Self {
            items: vec![
                item("Dashboard", false),
                item("Employees", true),
                item("Recruitment", false),
                item("Payroll", true),
                item("Reports", false),
                item("Settings", false),
            ],
            active: 1,
        }
    }

    /// Number of menu items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the menu has no items (never, for the default menu).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Activates the item at `index`; flips the chevron on submenu items.
    ///
    /// Out-of-range indices are ignored.
    pub fn activate(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            if item.has_submenu && self.active == index {
                // Re-activating an open submenu item collapses it
                item.expanded = !item.expanded;
            } else if item.has_submenu {
                item.expanded = true;
            }
            self.active = index;
        }
    }

    /// Index of the active item.
    #[must_use]
    pub const fn active(&self) -> usize {
        self.active
    }

    /// Section title shown in the header: the active item's label.
    #[must_use]
    pub fn section_title(&self) -> &'static str {
        self.items[self.active].label
    }

    /// Renders the menu list.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let marker = if idx == self.active { "> " } else { "  " };
                let chevron = if item.has_submenu {
                    if item.expanded {
                        " ^"
                    } else {
                        " v"
                    }
                } else {
                    ""
                };

                let style = if idx == self.active {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(format!("{marker}{}. ", idx + 1), Style::default().fg(theme.text_muted)),
                    Span::styled(item.label, style),
                    Span::styled(chevron, Style::default().fg(theme.text_muted)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background))
                .border_style(Style::default().fg(theme.primary)),
        );

        f.render_widget(list, area);
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_section_is_employees() {
        let sidebar = Sidebar::new();
        assert_eq!(sidebar.section_title(), "Employees");
    }

    #[test]
    fn test_activate_reflects_last_clicked() {
        let mut sidebar = Sidebar::new();
        sidebar.activate(0);
        assert_eq!(sidebar.section_title(), "Dashboard");
        sidebar.activate(4);
        assert_eq!(sidebar.section_title(), "Reports");
    }

    #[test]
    fn test_submenu_chevron_toggles_on_reactivation() {
        let mut sidebar = Sidebar::new();
        // Employees starts expanded=false but active; activating expands
        sidebar.activate(1);
        // Re-activate collapses again
        let expanded_after_first = sidebar.items[1].expanded;
        sidebar.activate(1);
        assert_ne!(sidebar.items[1].expanded, expanded_after_first);
    }

    #[test]
    fn test_out_of_range_activation_ignored() {
        let mut sidebar = Sidebar::new();
        sidebar.activate(99);
        assert_eq!(sidebar.section_title(), "Employees");
    }
}
