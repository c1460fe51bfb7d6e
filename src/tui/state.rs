//! TUI state - App wraps the dashboard controller with cursor and input state

use chrono::Utc;
use ratatui::layout::Rect;

use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::site::Site;

use super::types::*;

/// Layout areas for click detection
#[derive(Default, Clone, Copy)]
pub struct LayoutAreas {
    pub sites: Rect,
}

/// Main application state
pub struct App {
    pub dashboard: Dashboard,
    pub mode: Mode,
    /// Highlighted row in the filtered list
    pub cursor: usize,
    /// First visible row of the list, updated on each render
    pub list_offset: usize,
    pub url_input: String,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub layout_areas: LayoutAreas,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_dashboard(Dashboard::from_config(config, Utc::now()))
    }

    pub fn with_dashboard(dashboard: Dashboard) -> Self {
        Self {
            dashboard,
            mode: Mode::Normal,
            cursor: 0,
            list_offset: 0,
            url_input: String::new(),
            should_quit: false,
            status_message: None,
            layout_areas: LayoutAreas::default(),
        }
    }

    /// Site under the cursor in the filtered list
    pub fn cursor_site(&self) -> Option<&Site> {
        self.dashboard.filtered_sites().get(self.cursor).copied()
    }

    fn visible_len(&self) -> usize {
        self.dashboard.filtered_sites().len()
    }

    /// Keep the cursor inside the filtered list after it shrinks
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    pub fn next_site(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn previous_site(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
        }
    }

    pub fn first_site(&mut self) {
        self.cursor = 0;
    }

    pub fn last_site(&mut self) {
        self.cursor = self.visible_len().saturating_sub(1);
    }

    /// Show the site under the cursor in the details pane
    pub fn select_cursor(&mut self) {
        if let Some(id) = self.cursor_site().map(|s| s.id()) {
            self.dashboard.select(id);
        }
    }

    // === Search ===

    pub fn push_search_char(&mut self, c: char) {
        let mut term = self.dashboard.search_term().to_string();
        term.push(c);
        self.dashboard.set_search_term(term);
        self.clamp_cursor();
    }

    pub fn pop_search_char(&mut self) {
        let mut term = self.dashboard.search_term().to_string();
        term.pop();
        self.dashboard.set_search_term(term);
        self.clamp_cursor();
    }

    pub fn clear_search(&mut self) {
        self.dashboard.set_search_term("");
        self.clamp_cursor();
    }

    // === Add ===

    /// Add whatever is in the URL box. Blank input leaves everything unchanged.
    pub fn submit_url(&mut self) {
        let added = self.dashboard.add_site(&self.url_input).map(|s| s.url().to_string());
        match added {
            Some(url) => {
                self.status_message = Some(format!("Added {}", url));
                self.url_input.clear();
            }
            None => {
                self.status_message = Some("Enter a URL first".to_string());
            }
        }
    }

    // === Delete ===

    /// Open the delete prompt for the site under the cursor
    pub fn request_delete(&mut self) {
        if let Some(id) = self.cursor_site().map(|s| s.id()) {
            self.dashboard.delete_requested(id);
        }
    }

    pub fn confirm_delete(&mut self) {
        let url = self.dashboard.pending_delete_site().map(|s| s.url().to_string());
        if self.dashboard.delete_confirmed().is_some() {
            self.status_message = url.map(|u| format!("Deleted {}", u));
        }
        self.clamp_cursor();
    }

    pub fn cancel_delete(&mut self) {
        self.dashboard.delete_cancelled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(urls: &[&str]) -> App {
        let mut dashboard = Dashboard::new(Utc::now());
        for url in urls {
            dashboard.add_site(url);
        }
        App::with_dashboard(dashboard)
    }

    #[test]
    fn test_cursor_wraps() {
        let mut app = app_with(&["https://a.com", "https://b.com"]);
        app.previous_site();
        assert_eq!(app.cursor, 1);
        app.next_site();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_search_clamps_cursor() {
        let mut app = app_with(&["https://a.com", "https://b.com", "https://bb.com"]);
        app.last_site();
        assert_eq!(app.cursor, 2);

        for c in "a.".chars() {
            app.push_search_char(c);
        }
        assert_eq!(app.cursor, 0);
        assert_eq!(app.cursor_site().map(|s| s.url()), Some("https://a.com"));

        app.clear_search();
        assert_eq!(app.dashboard.filtered_sites().len(), 3);
    }

    #[test]
    fn test_submit_url() {
        let mut app = app_with(&[]);
        app.url_input = "   ".into();
        app.submit_url();
        assert_eq!(app.dashboard.total(), 0);
        assert_eq!(app.url_input, "   ");

        app.url_input = "https://new.com".into();
        app.submit_url();
        assert_eq!(app.dashboard.total(), 1);
        assert!(app.url_input.is_empty());
    }

    #[test]
    fn test_delete_selected_from_cursor() {
        let mut app = app_with(&["https://a.com", "https://b.com"]);
        app.last_site();
        app.select_cursor();
        app.request_delete();
        assert!(app.dashboard.confirm_dialog_open());

        app.confirm_delete();
        assert!(!app.dashboard.confirm_dialog_open());
        assert!(app.dashboard.selected_site().is_none());
        assert_eq!(app.cursor, 0);
        assert_eq!(app.status_message.as_deref(), Some("Deleted https://b.com"));
    }

    #[test]
    fn test_request_delete_on_empty_list_is_noop() {
        let mut app = app_with(&[]);
        app.request_delete();
        assert!(!app.dashboard.confirm_dialog_open());
    }
}
