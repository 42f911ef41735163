//! Input handling for the dashboard TUI.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages.

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char(' ') => Some(AppMsg::ToggleSymbolFilter),
        KeyCode::Char('s') => Some(AppMsg::CycleSectorFilter),
        KeyCode::Char('i') => Some(AppMsg::CycleSubIndustryFilter),
        KeyCode::Char('h') => Some(AppMsg::CycleLocationFilter),
        KeyCode::Char('[') => Some(AppMsg::LowerMinYear),
        KeyCode::Char(']') => Some(AppMsg::RaiseMinYear),
        KeyCode::Char('{') => Some(AppMsg::LowerMaxYear),
        KeyCode::Char('}') => Some(AppMsg::RaiseMaxYear),
        KeyCode::Esc => Some(AppMsg::ClearFilters),
        KeyCode::Enter => Some(AppMsg::SelectCompany),
        KeyCode::Char('r') => Some(AppMsg::RefreshRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}
