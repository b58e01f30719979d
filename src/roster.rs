//! The employee roster: the set of records currently displayed.
//!
//! The roster is the single source of truth for the table view. It owns the
//! status filter, the page cursor, the highlighted row, and the per-row check
//! marks. Rows leave the roster only through [`Roster::remove`], which the
//! delete workflow calls after a successfully acknowledged remote deletion.

use std::collections::HashSet;

use crate::constants::PAGE_SIZE;
use crate::models::{Employee, EmployeeStatus};

/// Tab filter applied to the roster table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Show every employee
    #[default]
    All,
    /// Only active employees
    Active,
    /// Only employees still onboarding
    Onboarding,
    /// Only inactive employees
    Inactive,
}

impl StatusFilter {
    /// All tabs in display order.
    pub const ALL: [Self; 4] = [Self::All, Self::Active, Self::Onboarding, Self::Inactive];

    /// Tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Onboarding => "Onboarding",
            Self::Inactive => "Inactive",
        }
    }

    /// Next tab, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn matches(self, status: EmployeeStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == EmployeeStatus::Active,
            Self::Onboarding => status == EmployeeStatus::Onboarding,
            Self::Inactive => status == EmployeeStatus::Inactive,
        }
    }
}

/// Display set of employee records with filter, paging, and selection state.
#[derive(Debug, Clone)]
pub struct Roster {
    employees: Vec<Employee>,
    /// Active tab filter
    pub filter: StatusFilter,
    /// Zero-based page index into the filtered view
    pub page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Highlighted row index within the current page
    pub cursor: usize,
    /// Ids with a check mark set
    checked: HashSet<String>,
}

impl Roster {
    /// Creates a roster over the given employees.
    #[must_use]
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees,
            filter: StatusFilter::default(),
            page: 0,
            page_size: PAGE_SIZE,
            cursor: 0,
            checked: HashSet::new(),
        }
    }

    /// Employees matching the active filter, in display order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| self.filter.matches(e.status))
            .collect()
    }

    /// The slice of the filtered view shown on the current page.
    #[must_use]
    pub fn current_page(&self) -> Vec<&Employee> {
        let visible = self.visible();
        let start = self.page * self.page_size;
        visible
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    /// Number of employees matching the active filter.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible().len()
    }

    /// True when the filtered view has no rows (empty-state placeholder shown).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible_len() == 0
    }

    /// Total number of pages for the filtered view (at least 1).
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.visible_len().div_ceil(self.page_size).max(1)
    }

    /// Records label for the pagination bar, e.g. `"1-10 of 42"`.
    ///
    /// An empty view yields `"0-0 of 0"`, keeping the label shape uniform
    /// alongside the empty-state placeholder.
    #[must_use]
    pub fn records_label(&self) -> String {
        let total = self.visible_len();
        if total == 0 {
            return "0-0 of 0".to_string();
        }
        let first = self.page * self.page_size + 1;
        let last = (first + self.page_size - 1).min(total);
        format!("{first}-{last} of {total}")
    }

    /// The employee under the cursor, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Employee> {
        self.current_page().get(self.cursor).copied()
    }

    /// Looks up an employee by id across the whole roster.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Moves the cursor down within the current page.
    pub fn select_next(&mut self) {
        let rows = self.current_page().len();
        if rows > 0 {
            self.cursor = (self.cursor + 1) % rows;
        }
    }

    /// Moves the cursor up within the current page.
    pub fn select_previous(&mut self) {
        let rows = self.current_page().len();
        if rows > 0 {
            self.cursor = if self.cursor == 0 {
                rows - 1
            } else {
                self.cursor - 1
            };
        }
    }

    /// Advances to the next page, clamped to the last page.
    pub fn next_page(&mut self) {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            self.cursor = 0;
        }
    }

    /// Returns to the previous page.
    pub fn previous_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
            self.cursor = 0;
        }
    }

    /// Switches the tab filter and resets paging and cursor.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.page = 0;
        self.cursor = 0;
    }

    /// Whether the given id carries a check mark.
    #[must_use]
    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    /// Toggles the check mark on the row under the cursor.
    pub fn toggle_checked(&mut self) {
        if let Some(id) = self.selected().map(|e| e.id.clone()) {
            if !self.checked.remove(&id) {
                self.checked.insert(id);
            }
        }
    }

    /// Header checkbox semantics: if every visible row is checked, clear them
    /// all; otherwise check every visible row.
    pub fn toggle_check_all(&mut self) {
        let visible_ids: Vec<String> = self.visible().iter().map(|e| e.id.clone()).collect();
        if self.all_checked() {
            for id in &visible_ids {
                self.checked.remove(id);
            }
        } else {
            self.checked.extend(visible_ids);
        }
    }

    /// True when every visible row is checked (and there is at least one).
    #[must_use]
    pub fn all_checked(&self) -> bool {
        let visible = self.visible();
        !visible.is_empty() && visible.iter().all(|e| self.checked.contains(&e.id))
    }

    /// Removes the employee with the given id from the display set.
    ///
    /// Returns true if a row was removed. Clamps the page and cursor and
    /// drops any check mark for the id, so selection state never points at
    /// a vanished row.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != id);
        let removed = self.employees.len() < before;

        if removed {
            self.checked.remove(id);
            if self.page >= self.page_count() {
                self.page = self.page_count() - 1;
            }
            let rows = self.current_page().len();
            if rows == 0 {
                self.cursor = 0;
            } else if self.cursor >= rows {
                self.cursor = rows - 1;
            }
        }

        removed
    }

    /// Ids of all employees currently in the roster, unfiltered.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.employees.iter().map(|e| e.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_employees;

    fn roster() -> Roster {
        Roster::new(sample_employees())
    }

    #[test]
    fn test_visible_respects_filter() {
        let mut r = roster();
        assert_eq!(r.visible_len(), 10);

        r.set_filter(StatusFilter::Onboarding);
        assert_eq!(r.visible_len(), 2);
        assert!(r
            .visible()
            .iter()
            .all(|e| e.status == crate::models::EmployeeStatus::Onboarding));
    }

    #[test]
    fn test_records_label() {
        let mut r = roster();
        assert_eq!(r.records_label(), "1-10 of 10");

        r.set_filter(StatusFilter::Inactive);
        assert_eq!(r.records_label(), "1-1 of 1");

        r.remove("EMP006");
        // Empty view keeps the "{first}-{last} of {total}" shape
        assert_eq!(r.records_label(), "0-0 of 0");
    }

    #[test]
    fn test_pagination_clamps() {
        let mut r = roster();
        r.page_size = 4;
        assert_eq!(r.page_count(), 3);

        r.next_page();
        r.next_page();
        assert_eq!(r.page, 2);
        // Last page, cannot advance further
        r.next_page();
        assert_eq!(r.page, 2);

        r.previous_page();
        assert_eq!(r.page, 1);
    }

    #[test]
    fn test_remove_clamps_page_and_cursor() {
        let mut r = roster();
        r.page_size = 9;
        r.next_page();
        assert_eq!(r.page, 1);

        // Removing the only row on page 2 pulls us back to page 1
        r.remove("EMP010");
        assert_eq!(r.page, 0);
        assert!(r.cursor < r.current_page().len());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut r = roster();
        assert!(!r.remove("EMP999"));
        assert_eq!(r.visible_len(), 10);
    }

    #[test]
    fn test_check_all_semantics() {
        let mut r = roster();
        assert!(!r.all_checked());

        r.toggle_check_all();
        assert!(r.all_checked());

        // Unchecking one row clears the header state
        r.toggle_checked();
        assert!(!r.all_checked());

        // Re-checking it restores the header state
        r.toggle_checked();
        assert!(r.all_checked());

        r.toggle_check_all();
        assert!(!r.is_checked("EMP001"));
    }

    #[test]
    fn test_remove_drops_check_mark() {
        let mut r = roster();
        r.toggle_checked();
        let id = r.selected().unwrap().id.clone();
        assert!(r.is_checked(&id));

        r.remove(&id);
        assert!(!r.is_checked(&id));
    }

    #[test]
    fn test_cursor_wraps() {
        let mut r = roster();
        r.select_previous();
        assert_eq!(r.cursor, r.current_page().len() - 1);
        r.select_next();
        assert_eq!(r.cursor, 0);
    }

    #[test]
    fn test_empty_state_transition() {
        let mut r = Roster::new(sample_employees().into_iter().take(1).collect());
        assert!(!r.is_empty());

        r.remove("EMP001");
        assert!(r.is_empty());
        assert!(r.selected().is_none());
    }
}
