//! Terminal Session
//!
//! Per-session view state the front end renders: the command history and
//! which panels or modals are open. Commands reach it through [`UiSignals`].

use chrono::{DateTime, Utc};

use crate::commands::UiSignals;

/// One submitted command line and what it printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub command: String,
    pub output: String,
    pub timestamp: DateTime<Utc>,
    pub is_error: bool,
}

/// Markdown shown in the reading panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPanel {
    pub content: String,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct TerminalSession {
    history: Vec<HistoryEntry>,
    session_start: DateTime<Utc>,
    whoami_open: bool,
    blog_panel: Option<BlogPanel>,
}

impl TerminalSession {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            session_start: Utc::now(),
            whoami_open: false,
            blog_panel: None,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn session_start(&self) -> DateTime<Utc> {
        self.session_start
    }

    pub fn add_history(&mut self, command: &str, output: &str, is_error: bool) {
        self.history.push(HistoryEntry {
            command: command.to_string(),
            output: output.to_string(),
            timestamp: Utc::now(),
            is_error,
        });
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn whoami_open(&self) -> bool {
        self.whoami_open
    }

    pub fn set_whoami_open(&mut self, open: bool) {
        self.whoami_open = open;
    }

    pub fn blog_panel(&self) -> Option<&BlogPanel> {
        self.blog_panel.as_ref()
    }

    pub fn open_blog_panel(&mut self, content: &str, title: &str) {
        self.blog_panel = Some(BlogPanel {
            content: content.to_string(),
            title: title.to_string(),
        });
    }

    pub fn close_blog_panel(&mut self) -> Option<BlogPanel> {
        self.blog_panel.take()
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl UiSignals for TerminalSession {
    fn clear_history(&mut self) {
        TerminalSession::clear_history(self);
    }

    fn open_markdown_panel(&mut self, content: &str, title: &str) {
        self.open_blog_panel(content, title);
    }

    fn open_profile_modal(&mut self) {
        self.set_whoami_open(true);
    }
}
