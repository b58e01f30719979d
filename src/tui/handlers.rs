//! Keyboard event handling.
//!
//! Handlers mutate `AppState` explicitly; rendering reads it immutably.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{error, warn};

use crate::api::HttpTaskClient;
use crate::config::ThemeMode;

use super::component::Component;
use super::{AppState, PopupType, Theme};

/// Handles a key event. Returns `Ok(true)` when the application should quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match state.active_popup {
        Some(PopupType::DeleteConfirm) => {
            handle_delete_confirm_key(state, key);
            Ok(false)
        }
        Some(PopupType::HelpOverlay) => {
            if state.help_overlay.handle_input(key).is_some() {
                state.active_popup = None;
            }
            Ok(false)
        }
        None => handle_main_key(state, key),
    }
}

/// Keys while the confirmation modal is open.
///
/// Only an explicit confirm proceeds; Esc/n cancel, and every other key is
/// interaction outside the confirmation surface, which also cancels.
fn handle_delete_confirm_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => confirm_pending(state),
        _ => state.cancel_deletion(),
    }
}

/// Confirms the pending deletion with a client resolved fresh from disk.
fn confirm_pending(state: &mut AppState) {
    match HttpTaskClient::from_disk_config() {
        Ok(client) => state.confirm_deletion(client),
        Err(err) => {
            error!(error = %err, "could not construct API client");
            state.cancel_deletion();
            state.error_message = Some("Delete failed: configuration unreadable".to_string());
        }
    }
}

fn handle_main_key(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // A new keypress clears the previous notification
    state.error_message = None;

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('?') => state.active_popup = Some(PopupType::HelpOverlay),

        KeyCode::Char('j') | KeyCode::Down => state.roster.select_next(),
        KeyCode::Char('k') | KeyCode::Up => state.roster.select_previous(),
        KeyCode::Char('l') | KeyCode::Right => state.roster.next_page(),
        KeyCode::Char('h') | KeyCode::Left => state.roster.previous_page(),

        KeyCode::Tab => {
            let next = state.roster.filter.next();
            state.roster.set_filter(next);
        }

        KeyCode::Char(' ') => state.roster.toggle_checked(),
        KeyCode::Char('a') => state.roster.toggle_check_all(),

        KeyCode::Char('d') | KeyCode::Delete => state.request_deletion_of_selected(),

        KeyCode::Char('t') => cycle_theme(state),

        KeyCode::Char(c @ '1'..='6') => {
            // '1' activates the first menu item
            let index = (c as usize) - ('1' as usize);
            state.sidebar.activate(index);
            state.status_message = format!("Section: {}", state.sidebar.section_title());
        }

        _ => {}
    }

    Ok(false)
}

/// Cycles the theme preference and persists it, like the browser frontend
/// persisted its `theme` key.
fn cycle_theme(state: &mut AppState) {
    state.config.ui.theme_mode = state.config.ui.theme_mode.next();
    state.theme = Theme::from_mode(state.config.ui.theme_mode);

    let mode = match state.config.ui.theme_mode {
        ThemeMode::Auto => "auto",
        ThemeMode::Dark => "dark",
        ThemeMode::Light => "light",
    };
    state.status_message = format!("Theme: {mode}");

    if let Err(err) = state.config.save() {
        warn!(error = %err, "failed to persist theme preference");
        state.error_message = Some("Could not save theme preference".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with_open_modal() -> AppState {
        let mut state = AppState::new(Config::default());
        let quit = handle_key_event(&mut state, key(KeyCode::Char('d'))).unwrap();
        assert!(!quit);
        assert_eq!(state.active_popup, Some(PopupType::DeleteConfirm));
        assert!(state.gate.is_open());
        state
    }

    #[test]
    fn test_stray_key_dismisses_modal_without_deleting() {
        let mut state = state_with_open_modal();
        let before = state.roster.ids();

        handle_key_event(&mut state, key(KeyCode::Char('x'))).unwrap();

        // Interaction outside the confirmation surface cancels
        assert_eq!(state.active_popup, None);
        assert!(!state.gate.is_open());
        assert_eq!(state.deletes.in_flight(), 0);
        assert_eq!(state.roster.ids(), before);
    }

    #[test]
    fn test_esc_dismisses_modal_without_deleting() {
        let mut state = state_with_open_modal();
        let before = state.roster.ids();

        handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();

        assert_eq!(state.active_popup, None);
        assert!(!state.gate.is_open());
        assert_eq!(state.deletes.in_flight(), 0);
        assert_eq!(state.roster.ids(), before);
    }

    #[test]
    fn test_cursor_keys_do_not_confirm_while_modal_open() {
        let mut state = state_with_open_modal();
        let cursor_before = state.roster.cursor;

        // j is a cursor move in the main view, not a confirm key
        handle_key_event(&mut state, key(KeyCode::Char('j'))).unwrap();

        assert!(!state.gate.is_open());
        assert_eq!(state.deletes.in_flight(), 0);
        assert_eq!(state.roster.cursor, cursor_before);
    }

    #[test]
    fn test_ctrl_c_quits_even_with_modal_open() {
        let mut state = state_with_open_modal();
        let quit = handle_key_event(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        )
        .unwrap();
        assert!(quit);
    }
}
