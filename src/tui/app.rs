//! TUI application state and event handling.
//!
//! The `App` keeps the query, the active tab and the current result list. Every
//! edit to the query re-runs the search against whatever engine the
//! [`EngineHandle`] currently holds, so a reindex (Ctrl+R) swaps the engine
//! underneath without the UI holding on to the old snapshot.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_path_to_clipboard;
use crate::engine::EngineHandle;
use crate::models::{SearchResult, TypeFilter};
use crate::utils::format_path_with_tilde;

const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
const STATUS_ERROR_DURATION_MS: u64 = 5000;
const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    handle: EngineHandle,
    search_query: String,
    tab: TypeFilter,
    results: Vec<SearchResult>,
    selected_idx: usize,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    needs_redraw: bool,
}

impl App {
    pub fn new(handle: EngineHandle) -> Self {
        Self {
            handle,
            search_query: String::new(),
            tab: TypeFilter::All,
            results: Vec::new(),
            selected_idx: 0,
            should_quit: false,
            status_message: None,
            needs_redraw: true,
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.clear_expired_status();

            if self.needs_redraw {
                let root = format_path_with_tilde(self.handle.current().root());
                terminal.draw(|f| {
                    let state = RenderState {
                        search_query: &self.search_query,
                        tab: self.tab,
                        selected_idx: self.selected_idx,
                        root: &root,
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &self.results, &state);
                })?;
                self.needs_redraw = false;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn clear_expired_status(&mut self) {
        if self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at) {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    /// Re-run the current query against the current engine
    fn refresh_results(&mut self) {
        self.results = self.handle.current().search_filtered(&self.search_query, self.tab);
        self.selected_idx = 0;
        self.needs_redraw = true;
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearSearch => {
                if self.search_query.is_empty() {
                    self.should_quit = true;
                } else {
                    self.search_query.clear();
                    self.refresh_results();
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-(PAGE_SIZE as isize)),
            Action::PageDown => self.move_selection(PAGE_SIZE as isize),
            Action::RunSearch => self.refresh_results(),
            Action::NextTab => {
                self.tab = self.tab.next();
                self.refresh_results();
            }
            Action::UpdateSearch(c) => {
                self.search_query.push(c);
                self.refresh_results();
            }
            Action::DeleteChar => {
                if self.search_query.pop().is_some() {
                    self.refresh_results();
                }
            }
            Action::CopyToClipboard => self.copy_selected(),
            Action::Refresh => self.reindex(),
            Action::None => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.results.is_empty() {
            return;
        }
        let last = self.results.len() - 1;
        self.selected_idx = self.selected_idx.saturating_add_signed(delta).min(last);
        self.needs_redraw = true;
    }

    fn copy_selected(&mut self) {
        let Some(result) = self.results.get(self.selected_idx) else {
            self.set_status("Nothing selected", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };
        match copy_path_to_clipboard(&result.path) {
            Ok(()) => {
                let text = format!("Copied {}", format_path_with_tilde(&result.path));
                self.set_status(text, MessageType::Success, STATUS_SUCCESS_DURATION_MS);
            }
            Err(e) => {
                self.set_status(format!("Copy failed: {}", e), MessageType::Error, STATUS_ERROR_DURATION_MS)
            }
        }
    }

    fn reindex(&mut self) {
        match self.handle.refresh() {
            Ok(()) => {
                let stats = self.handle.current().stats();
                let text =
                    format!("Reindexed {} directories, {} files", stats.directories, stats.files);
                self.set_status(text, MessageType::Success, STATUS_SUCCESS_DURATION_MS);
                self.refresh_results();
            }
            Err(e) => {
                self.set_status(format!("Reindex failed: {}", e), MessageType::Error, STATUS_ERROR_DURATION_MS)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::engine::{Engine, EngineConfig};
    use crate::models::FileType;

    /// App over a small tree; the TempDirs must outlive the App
    fn create_app() -> (App, TempDir, TempDir) {
        let root = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(root.path().join("docs")).unwrap();
        fs::write(root.path().join("docs/report.pdf"), b"x").unwrap();
        fs::write(root.path().join("docs/report-chart.png"), b"x").unwrap();
        fs::write(root.path().join("report.txt"), b"x").unwrap();
        let cache = TempDir::new().expect("Failed to create temp dir");

        let engine = Engine::new(
            EngineConfig::new(root.path(), Duration::from_secs(60)).with_snapshot_dir(cache.path()),
        )
        .expect("Failed to create engine");
        (App::new(EngineHandle::new(engine)), root, cache)
    }

    fn type_in(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_action(Action::UpdateSearch(c));
        }
    }

    #[test]
    fn test_app_new_initializes_state() {
        let (app, _root, _cache) = create_app();
        assert!(app.search_query.is_empty());
        assert!(app.results.is_empty());
        assert_eq!(app.tab, TypeFilter::All);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_typing_searches() {
        let (mut app, _root, _cache) = create_app();
        type_in(&mut app, "REP");
        assert_eq!(app.search_query, "REP");
        assert_eq!(app.results.len(), 3);
        // Grouped: document, image, other
        let tags: Vec<FileType> = app.results.iter().map(|r| r.file_type).collect();
        assert_eq!(tags, vec![FileType::Document, FileType::Image, FileType::Other]);
    }

    #[test]
    fn test_delete_char_researches() {
        let (mut app, _root, _cache) = create_app();
        type_in(&mut app, "chartx");
        assert!(app.results.is_empty());
        app.handle_action(Action::DeleteChar);
        assert_eq!(app.results.len(), 1);
    }

    #[test]
    fn test_delete_char_empty_query() {
        let (mut app, _root, _cache) = create_app();
        app.handle_action(Action::DeleteChar);
        assert!(app.search_query.is_empty());
    }

    #[test]
    fn test_next_tab_filters_results() {
        let (mut app, _root, _cache) = create_app();
        type_in(&mut app, "report");

        app.handle_action(Action::NextTab);
        assert_eq!(app.tab, TypeFilter::Documents);
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results[0].file_type, FileType::Document);

        app.handle_action(Action::NextTab);
        assert_eq!(app.tab, TypeFilter::Images);
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results[0].file_type, FileType::Image);

        app.handle_action(Action::NextTab);
        assert_eq!(app.tab, TypeFilter::All);
        assert_eq!(app.results.len(), 3);
    }

    #[test]
    fn test_move_selection_bounds() {
        let (mut app, _root, _cache) = create_app();
        type_in(&mut app, "report");

        app.handle_action(Action::MoveUp);
        assert_eq!(app.selected_idx, 0);
        app.handle_action(Action::MoveDown);
        assert_eq!(app.selected_idx, 1);
        app.handle_action(Action::PageDown);
        assert_eq!(app.selected_idx, 2);
        app.handle_action(Action::PageUp);
        assert_eq!(app.selected_idx, 0);
    }

    #[test]
    fn test_move_selection_no_results() {
        let (mut app, _root, _cache) = create_app();
        app.handle_action(Action::MoveDown);
        assert_eq!(app.selected_idx, 0);
    }

    #[test]
    fn test_clear_search_then_quit() {
        let (mut app, _root, _cache) = create_app();
        type_in(&mut app, "rep");
        app.handle_action(Action::ClearSearch);
        assert!(app.search_query.is_empty());
        assert!(app.results.is_empty());
        assert!(!app.should_quit);

        app.handle_action(Action::ClearSearch);
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit() {
        let (mut app, _root, _cache) = create_app();
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_copy_with_no_selection_sets_error() {
        let (mut app, _root, _cache) = create_app();
        app.handle_action(Action::CopyToClipboard);
        let status = app.status_message.as_ref().expect("Expected status message");
        assert_eq!(status.message_type, MessageType::Error);
        assert_eq!(status.text, "Nothing selected");
    }

    #[test]
    fn test_refresh_picks_up_new_files() {
        let (mut app, root, _cache) = create_app();
        type_in(&mut app, "notes");
        assert!(app.results.is_empty());

        fs::write(root.path().join("notes.md"), b"x").unwrap();
        app.handle_action(Action::Refresh);

        assert_eq!(app.results.len(), 1);
        let status = app.status_message.as_ref().expect("Expected status message");
        assert_eq!(status.message_type, MessageType::Success);
        assert!(status.text.contains("Reindexed"));
    }

    #[test]
    fn test_expired_status_is_cleared() {
        let (mut app, _root, _cache) = create_app();
        app.set_status("old", MessageType::Success, 0);
        app.needs_redraw = false;
        app.clear_expired_status();
        assert!(app.status_message.is_none());
        assert!(app.needs_redraw);
    }
}
