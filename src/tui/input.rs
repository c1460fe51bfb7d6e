//! TUI input handling - keyboard and mouse event handlers

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::error::Result;

use super::state::*;
use super::types::*;
use super::utils::contains;

/// Main key event dispatcher
pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) -> Result<()> {
    if app.dashboard.confirm_dialog_open() {
        return handle_confirm_input(app, key);
    }

    match app.mode {
        Mode::Normal => handle_normal_input(app, key, modifiers),
        Mode::Help => {
            app.mode = Mode::Normal;
            Ok(())
        }
        Mode::Search => handle_search_input(app, key),
        Mode::AddUrl => handle_add_input(app, key),
    }
}

/// Handle mouse events: a left click on a row selects that site
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left)
        || app.mode != Mode::Normal
        || app.dashboard.confirm_dialog_open()
    {
        return Ok(());
    }

    let area = app.layout_areas.sites;
    if contains(area, mouse.column, mouse.row) {
        // The first and last rows of the area are the border
        let row = usize::from(mouse.row.saturating_sub(area.y));
        if row > 0 && row + 1 < usize::from(area.height) {
            let idx = app.list_offset + row - 1;
            if idx < app.dashboard.filtered_sites().len() {
                app.cursor = idx;
                app.select_cursor();
            }
        }
    }
    Ok(())
}

fn handle_normal_input(app: &mut App, key: KeyCode, modifiers: KeyModifiers) -> Result<()> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        KeyCode::Char('?') => app.mode = Mode::Help,
        KeyCode::Char('/') => {
            app.mode = Mode::Search;
            app.status_message = Some("Type to filter...".to_string());
        }
        KeyCode::Char('a') => {
            app.mode = Mode::AddUrl;
            app.status_message = None;
        }
        KeyCode::Char('j') | KeyCode::Down => app.next_site(),
        KeyCode::Char('k') | KeyCode::Up => app.previous_site(),
        KeyCode::Char('g') | KeyCode::Home => app.first_site(),
        KeyCode::Char('G') | KeyCode::End => app.last_site(),
        KeyCode::PageDown => { for _ in 0..5 { app.next_site(); } }
        KeyCode::PageUp => { for _ in 0..5 { app.previous_site(); } }
        KeyCode::Enter => app.select_cursor(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        _ => {}
    }
    Ok(())
}

fn handle_search_input(app: &mut App, key: KeyCode) -> Result<()> {
    match key {
        KeyCode::Esc => {
            app.clear_search();
            app.mode = Mode::Normal;
            app.status_message = None;
        }
        KeyCode::Enter => {
            app.mode = Mode::Normal;
            if app.dashboard.search_term().is_empty() {
                app.status_message = None;
            } else {
                let count = app.dashboard.filtered_sites().len();
                app.status_message = Some(format!(
                    "Filter: \"{}\" ({} matches)",
                    app.dashboard.search_term(),
                    count
                ));
            }
        }
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(c) => app.push_search_char(c),
        _ => {}
    }
    Ok(())
}

fn handle_add_input(app: &mut App, key: KeyCode) -> Result<()> {
    match key {
        KeyCode::Esc => {
            app.url_input.clear();
            app.mode = Mode::Normal;
        }
        KeyCode::Enter => {
            app.submit_url();
            if app.url_input.is_empty() {
                app.mode = Mode::Normal;
            }
        }
        KeyCode::Backspace => {
            app.url_input.pop();
        }
        KeyCode::Char(c) => app.url_input.push(c),
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input(app: &mut App, key: KeyCode) -> Result<()> {
    match key {
        KeyCode::Char('y') | KeyCode::Enter => app.confirm_delete(),
        _ => app.cancel_delete(),
    }
    Ok(())
}
