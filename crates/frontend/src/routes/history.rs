//! History bridge backends.
//!
//! The router only talks to [`HistoryBackend`]; the browser implementation
//! writes `NavigationEntry` payloads into `window.history`, the in-memory one
//! replays them for tests.

use contracts::routing::{NavigationEntry, Route};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("window.history is not available")]
    Unavailable,
    #[error("failed to serialize history state: {0}")]
    Serialize(String),
    #[error("history update rejected: {0}")]
    Rejected(String),
}

pub trait HistoryBackend {
    /// Append an entry to the back/forward stack.
    fn push(&mut self, entry: &NavigationEntry) -> Result<(), HistoryError>;

    /// Rewrite the current entry in place. Used once at startup so the
    /// landing entry carries a payload and a canonical URL.
    fn replace(&mut self, entry: &NavigationEntry) -> Result<(), HistoryError>;
}

// ============================================================================
// Browser
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct BrowserHistory {
    /// Path prefix the app is served under (`/vbdb` on project pages)
    base_path: String,
}

impl BrowserHistory {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into().trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, entry: &NavigationEntry) -> String {
        format!("{}/{}", self.base_path, entry.url_hint)
    }

    fn write(&self, entry: &NavigationEntry, replace: bool) -> Result<(), HistoryError> {
        let window = web_sys::window().ok_or(HistoryError::Unavailable)?;
        let history = window.history().map_err(|_| HistoryError::Unavailable)?;
        let state = entry_to_js(entry)?;
        let url = self.url_for(entry);

        let result = if replace {
            history.replace_state_with_url(&state, &entry.title_hint, Some(&url))
        } else {
            history.push_state_with_url(&state, &entry.title_hint, Some(&url))
        };
        result.map_err(|e| HistoryError::Rejected(js_error_text(&e)))?;

        if let Some(document) = window.document() {
            document.set_title(&entry.title_hint);
        }
        Ok(())
    }
}

impl HistoryBackend for BrowserHistory {
    fn push(&mut self, entry: &NavigationEntry) -> Result<(), HistoryError> {
        self.write(entry, false)
    }

    fn replace(&mut self, entry: &NavigationEntry) -> Result<(), HistoryError> {
        self.write(entry, true)
    }
}

fn entry_to_js(entry: &NavigationEntry) -> Result<JsValue, HistoryError> {
    entry
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| HistoryError::Serialize(e.to_string()))
}

fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Decode the `state` of a popstate event.
///
/// Foreign or malformed payloads count as no payload.
pub fn entry_from_state(state: JsValue) -> Option<NavigationEntry> {
    if state.is_null() || state.is_undefined() {
        return None;
    }
    match serde_wasm_bindgen::from_value::<NavigationEntry>(state) {
        Ok(entry) => Some(entry),
        Err(e) => {
            log::warn!("ignoring unreadable history state: {}", e);
            None
        }
    }
}

// ============================================================================
// In-memory
// ============================================================================

#[derive(Debug, Default)]
struct MemoryStack {
    /// `None` marks an entry the app did not write (the landing page)
    entries: Vec<Option<NavigationEntry>>,
    cursor: usize,
    title: String,
    fail_pushes: bool,
}

/// History stack kept in memory. Clones share the same stack.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    stack: Rc<RefCell<MemoryStack>>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHistory {
    /// One foreign entry, like a freshly opened tab.
    pub fn new() -> Self {
        Self {
            stack: Rc::new(RefCell::new(MemoryStack {
                entries: vec![None],
                ..Default::default()
            })),
        }
    }

    pub fn len(&self) -> usize {
        self.stack.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cursor(&self) -> usize {
        self.stack.borrow().cursor
    }

    pub fn title(&self) -> String {
        self.stack.borrow().title.clone()
    }

    pub fn current(&self) -> Option<NavigationEntry> {
        let stack = self.stack.borrow();
        stack.entries.get(stack.cursor).cloned().flatten()
    }

    pub fn current_route(&self) -> Option<Route> {
        self.current().map(|e| e.route)
    }

    /// Make every following push fail, as a sandboxed iframe would.
    pub fn fail_pushes(&self, fail: bool) {
        self.stack.borrow_mut().fail_pushes = fail;
    }

    /// Step back. Returns the popstate payload, `None` when already at the start.
    pub fn back(&self) -> Option<Option<NavigationEntry>> {
        let mut stack = self.stack.borrow_mut();
        if stack.cursor == 0 {
            return None;
        }
        stack.cursor -= 1;
        Some(stack.entries[stack.cursor].clone())
    }

    pub fn forward(&self) -> Option<Option<NavigationEntry>> {
        let mut stack = self.stack.borrow_mut();
        if stack.cursor + 1 >= stack.entries.len() {
            return None;
        }
        stack.cursor += 1;
        Some(stack.entries[stack.cursor].clone())
    }
}

impl HistoryBackend for MemoryHistory {
    fn push(&mut self, entry: &NavigationEntry) -> Result<(), HistoryError> {
        let mut stack = self.stack.borrow_mut();
        if stack.fail_pushes {
            return Err(HistoryError::Rejected("SecurityError".into()));
        }
        let keep = stack.cursor + 1;
        stack.entries.truncate(keep);
        stack.entries.push(Some(entry.clone()));
        stack.cursor = stack.entries.len() - 1;
        stack.title = entry.title_hint.clone();
        Ok(())
    }

    fn replace(&mut self, entry: &NavigationEntry) -> Result<(), HistoryError> {
        let mut stack = self.stack.borrow_mut();
        let cursor = stack.cursor;
        stack.entries[cursor] = Some(entry.clone());
        stack.title = entry.title_hint.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{LeagueId, TabId};

    fn entry(league: LeagueId, tab: TabId) -> NavigationEntry {
        NavigationEntry::for_route(Route::league_tab(league, tab))
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = MemoryHistory::new();
        history.push(&entry(LeagueId::Lovb, TabId::Teams)).unwrap();
        history.push(&entry(LeagueId::Lovb, TabId::Players)).unwrap();
        assert_eq!(history.len(), 3);

        let popped = history.back().unwrap().unwrap();
        assert_eq!(popped.route, Route::league_tab(LeagueId::Lovb, TabId::Teams));

        history.push(&entry(LeagueId::PvfPro, TabId::Teams)).unwrap();
        assert_eq!(history.len(), 3);
        assert!(history.forward().is_none());
        assert_eq!(history.title(), "PVF Pro - Teams");
    }

    #[test]
    fn test_back_past_origin_has_no_payload() {
        let mut history = MemoryHistory::new();
        history.push(&entry(LeagueId::NcaaMen, TabId::Schedule)).unwrap();
        assert_eq!(history.back(), Some(None));
        assert_eq!(history.back(), None);
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = MemoryHistory::new();
        history.replace(&entry(LeagueId::Lovb, TabId::Overview)).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(
            history.current_route(),
            Some(Route::league_tab(LeagueId::Lovb, TabId::Overview))
        );
    }

    #[test]
    fn test_failing_push_is_reported() {
        let mut history = MemoryHistory::new();
        history.fail_pushes(true);
        let err = history.push(&entry(LeagueId::Lovb, TabId::Teams)).unwrap_err();
        assert!(matches!(err, HistoryError::Rejected(_)));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_browser_url_keeps_base_path() {
        let history = BrowserHistory::new("/vbdb/");
        let e = NavigationEntry::for_route(Route::team_detail(LeagueId::PvfPro, "", "42"));
        assert_eq!(history.url_for(&e), "/vbdb/#/pvf-pro/team/42");
        assert_eq!(BrowserHistory::default().url_for(&e), "/#/pvf-pro/team/42");
    }
}
