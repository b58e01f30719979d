//! Data model for the employee roster.
//!
//! Employees are display records: the console renders them, removes them
//! after a confirmed remote deletion, and never mutates them in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employment status of a roster record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    /// Fully onboarded, actively employed
    Active,
    /// Hired, still in the onboarding process
    Onboarding,
    /// No longer active
    Inactive,
}

impl EmployeeStatus {
    /// Human-readable label for the status pill.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Onboarding => "Onboarding",
            Self::Inactive => "Inactive",
        }
    }
}

/// A single employee record as shown in the roster table.
///
/// The `id` is assigned externally and immutable; everything else is
/// presentation-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Opaque unique identifier (e.g. "EMP001")
    pub id: String,
    /// Full name
    pub name: String,
    /// Initials shown in the avatar column
    pub initials: String,
    /// Work email address
    pub email: String,
    /// Department name
    pub department: String,
    /// Job title
    pub role: String,
    /// Hire date
    pub hired_on: NaiveDate,
    /// Employment status
    pub status: EmployeeStatus,
}

impl Employee {
    /// Hire date formatted for the table (day/month/year).
    #[must_use]
    pub fn hired_on_label(&self) -> String {
        self.hired_on.format("%d/%m/%Y").to_string()
    }
}

fn employee(
    id: &str,
    name: &str,
    initials: &str,
    email: &str,
    department: &str,
    role: &str,
    hired: (i32, u32, u32),
    status: EmployeeStatus,
) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        initials: initials.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        role: role.to_string(),
        // Dates are fixed sample values, always valid
        hired_on: NaiveDate::from_ymd_opt(hired.0, hired.1, hired.2).unwrap_or_default(),
        status,
    }
}

/// Sample roster seeded at startup when no data source is configured.
#[must_use]
pub fn sample_employees() -> Vec<Employee> {
    use EmployeeStatus::{Active, Inactive, Onboarding};

    vec![
        employee(
            "EMP001",
            "Ana Silva",
            "AS",
            "ana.silva@company.com",
            "Technology",
            "Frontend Developer",
            (2022, 3, 15),
            Active,
        ),
        employee(
            "EMP002",
            "Carlos Oliveira",
            "CO",
            "carlos.oliveira@company.com",
            "Marketing",
            "Marketing Analyst",
            (2023, 1, 5),
            Active,
        ),
        employee(
            "EMP003",
            "Mariana Costa",
            "MC",
            "mariana.costa@company.com",
            "Human Resources",
            "HR Manager",
            (2021, 6, 10),
            Active,
        ),
        employee(
            "EMP004",
            "Pedro Santos",
            "PS",
            "pedro.santos@company.com",
            "Finance",
            "Financial Analyst",
            (2022, 9, 22),
            Onboarding,
        ),
        employee(
            "EMP005",
            "Juliana Lima",
            "JL",
            "juliana.lima@company.com",
            "Sales",
            "Sales Representative",
            (2023, 2, 14),
            Active,
        ),
        employee(
            "EMP006",
            "Roberto Almeida",
            "RA",
            "roberto.almeida@company.com",
            "Technology",
            "Backend Developer",
            (2021, 8, 3),
            Inactive,
        ),
        employee(
            "EMP007",
            "Fernanda Martins",
            "FM",
            "fernanda.martins@company.com",
            "Design",
            "UI/UX Designer",
            (2022, 4, 19),
            Active,
        ),
        employee(
            "EMP008",
            "Lucas Pereira",
            "LP",
            "lucas.pereira@company.com",
            "Support",
            "Support Analyst",
            (2022, 11, 8),
            Onboarding,
        ),
        employee(
            "EMP009",
            "Camila Rodrigues",
            "CR",
            "camila.rodrigues@company.com",
            "Administration",
            "Administrative Assistant",
            (2021, 7, 25),
            Active,
        ),
        employee(
            "EMP010",
            "Gabriel Ferreira",
            "GF",
            "gabriel.ferreira@company.com",
            "Technology",
            "Software Architect",
            (2020, 5, 12),
            Active,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_employees_have_unique_ids() {
        let employees = sample_employees();
        assert_eq!(employees.len(), 10);

        let mut ids: Vec<&str> = employees.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_hired_on_label_format() {
        let employees = sample_employees();
        assert_eq!(employees[0].hired_on_label(), "15/03/2022");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(EmployeeStatus::Active.label(), "Active");
        assert_eq!(EmployeeStatus::Onboarding.label(), "Onboarding");
        assert_eq!(EmployeeStatus::Inactive.label(), "Inactive");
    }
}
