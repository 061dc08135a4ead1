use crate::routes::panel::ResolvedView;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

/// Overlay state written by the panel executor and read by the panels.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// The overlay is displayed
    pub overlay_visible: RwSignal<bool>,
    /// Transition class on the overlay content
    pub content_active: RwSignal<bool>,
    /// Escape and back controls react only while bound
    pub dismiss_bound: RwSignal<bool>,
    pub view: RwSignal<Option<ResolvedView>>,
    /// Per-tab UI state (filters, page) of the league on screen
    pub tab_states: RwSignal<HashMap<String, serde_json::Value>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            overlay_visible: RwSignal::new(false),
            content_active: RwSignal::new(false),
            dismiss_bound: RwSignal::new(false),
            view: RwSignal::new(None),
            tab_states: RwSignal::new(HashMap::new()),
        }
    }

    pub fn get_tab_state<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.tab_states
            .with_untracked(|states| states.get(key).cloned())
            .and_then(|value| serde_json::from_value(value).ok())
    }

    pub fn set_tab_state<T: Serialize>(&self, key: &str, state: &T) {
        match serde_json::to_value(state) {
            Ok(value) => self.tab_states.update(|states| {
                states.insert(key.to_string(), value);
            }),
            Err(e) => log::warn!("tab state for {} not saved: {}", key, e),
        }
    }

    pub fn reset_tab_states(&self) {
        leptos::logging::log!("🧹 reset tab states");
        self.tab_states.update(|states| states.clear());
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
