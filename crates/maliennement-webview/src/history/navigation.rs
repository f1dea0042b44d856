use crate::history::state::{NavigationState, NAVIGATION_STATE_VERSION};

/// Oldest entries are dropped past this many.
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Back list of committed URLs with a current position.
///
/// Navigations the shell issues itself (initial load, back, restore) are
/// marked as awaiting commit: the next committed URL replaces the current
/// entry instead of pushing a new one, so redirects never create a back
/// entry that bounces forward again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationHistory {
    entries: Vec<String>,
    index: usize,
    awaiting_commit: bool,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a history whose first entry is a load the shell just issued.
    pub fn starting_at(url: &str) -> Self {
        Self {
            entries: vec![url.to_string()],
            index: 0,
            awaiting_commit: true,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    /// Record a committed main-frame URL.
    pub fn record(&mut self, url: &str) {
        if self.entries.is_empty() {
            self.entries.push(url.to_string());
            self.index = 0;
            self.awaiting_commit = false;
            return;
        }

        if self.awaiting_commit {
            self.awaiting_commit = false;
            self.entries[self.index] = url.to_string();
            return;
        }

        if self.current() == Some(url) {
            return;
        }

        self.entries.truncate(self.index + 1);
        self.entries.push(url.to_string());
        if self.entries.len() > MAX_HISTORY_ENTRIES {
            let overflow = self.entries.len() - MAX_HISTORY_ENTRIES;
            self.entries.drain(..overflow);
        }
        self.index = self.entries.len() - 1;
    }

    /// The page moved through its own history (`popstate`). Steps to the
    /// nearest entry holding `url`, searching backwards first. A URL with no
    /// matching entry is recorded as a new page.
    pub fn traverse(&mut self, url: &str) {
        self.awaiting_commit = false;
        if self.current() == Some(url) {
            return;
        }
        let behind = self.entries[..self.index.min(self.entries.len())]
            .iter()
            .rposition(|entry| entry == url);
        let ahead = self
            .entries
            .iter()
            .enumerate()
            .skip(self.index + 1)
            .find(|(_, entry)| *entry == url)
            .map(|(i, _)| i);
        match behind.or(ahead) {
            Some(i) => self.index = i,
            None => self.record(url),
        }
    }

    /// The page rewrote its current URL (`replaceState`).
    pub fn replace_current(&mut self, url: &str) {
        match self.entries.get_mut(self.index) {
            Some(entry) => *entry = url.to_string(),
            None => self.record(url),
        }
    }

    /// The shell is reloading the current entry; whatever commits next
    /// replaces it.
    pub fn mark_reload(&mut self) {
        if !self.entries.is_empty() {
            self.awaiting_commit = true;
        }
    }

    /// Step back one entry and return the URL to load, or `None` at the
    /// start of history. The caller must load the returned URL.
    pub fn go_back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        self.awaiting_commit = true;
        self.current()
    }

    /// Snapshot for saving, with the page's current scroll offset.
    pub fn to_state(&self, scroll_y: f64) -> Option<NavigationState> {
        if self.entries.is_empty() {
            return None;
        }
        Some(NavigationState {
            version: NAVIGATION_STATE_VERSION,
            entries: self.entries.clone(),
            index: self.index,
            scroll_y,
        })
    }

    /// Rebuild from a saved snapshot. The current entry awaits commit since
    /// the caller is about to load it.
    pub fn from_state(state: &NavigationState) -> Self {
        Self {
            entries: state.entries.clone(),
            index: state.index,
            awaiting_commit: true,
        }
    }
}
