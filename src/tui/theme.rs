//! Theme system for consistent UI colors across dark and light modes.
//!
//! This module provides a centralized theme management system that can
//! detect the OS theme (dark/light mode) and applies appropriate colors.
//! The user preference is persisted in the config file.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::models::EmployeeStatus;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color (active status pills, confirmations)
    pub success: Color,
    /// Error state color (errors and destructive actions)
    pub error: Color,
    /// Warning state color (onboarding status pills, cautions)
    pub warning: Color,

    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and less important content
    pub text_secondary: Color,
    /// Muted text color for help text, disabled items, and dim content
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for panels and elevated elements
    pub surface: Color,

    /// Active/focused element color
    pub active: Color,
    /// Inactive/disabled element color
    pub inactive: Color,
}

impl Theme {
    /// Returns the theme for the given persisted mode preference.
    ///
    /// `Auto` detects the OS setting via the `dark-light` crate.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Detects the OS theme and returns the appropriate Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),

            active: Color::Yellow,
            inactive: Color::Gray,
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 95, 6),
            success: Color::Rgb(0, 128, 0),
            error: Color::Rgb(200, 0, 0),
            warning: Color::Rgb(180, 95, 6),

            text: Color::Black,
            text_secondary: Color::Rgb(64, 64, 64),
            text_muted: Color::Rgb(112, 112, 112),

            background: Color::White,
            highlight_bg: Color::Rgb(220, 220, 220),
            surface: Color::Rgb(240, 240, 240),

            active: Color::Blue,
            inactive: Color::Rgb(128, 128, 128),
        }
    }

    /// Color for an employee status pill.
    #[must_use]
    pub const fn status_color(&self, status: EmployeeStatus) -> Color {
        match status {
            EmployeeStatus::Active => self.success,
            EmployeeStatus::Onboarding => self.warning,
            EmployeeStatus::Inactive => self.inactive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes_ignore_os_detection() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_dark_and_light_differ() {
        assert_ne!(Theme::dark(), Theme::light());
    }
}
