//! Persisted UI preferences: the sidebar collapse flag and dark mode.
//! Both survive reloads through local storage; dark mode also mirrors
//! itself onto the document element as a `dark` class for the stylesheet.

use leptos::*;

use crate::utils::storage as storage_utils;

pub const SIDEBAR_OPEN_KEY: &str = "isSidebarOpen";
pub const DARK_MODE_KEY: &str = "isDarkMode";

#[derive(Clone, Copy)]
pub struct PrefStore {
    pub sidebar_open: RwSignal<bool>,
    pub dark_mode: RwSignal<bool>,
}

impl PrefStore {
    pub fn new() -> Self {
        Self {
            sidebar_open: create_rw_signal(storage_utils::get_bool(SIDEBAR_OPEN_KEY, true)),
            dark_mode: create_rw_signal(storage_utils::get_bool(DARK_MODE_KEY, false)),
        }
    }

    pub fn toggle_sidebar(&self) {
        let next = !self.sidebar_open.get();
        self.sidebar_open.set(next);
        persist(SIDEBAR_OPEN_KEY, next);
    }

    pub fn toggle_dark_mode(&self) {
        let next = !self.dark_mode.get();
        self.dark_mode.set(next);
        persist(DARK_MODE_KEY, next);
        apply_dark_class(next);
    }
}

impl Default for PrefStore {
    fn default() -> Self {
        Self::new()
    }
}

fn persist(key: &str, value: bool) {
    if let Err(err) = storage_utils::set_bool(key, value) {
        log::warn!("Failed to persist preference {key}: {err}");
    }
}

fn apply_dark_class(dark: bool) {
    let Ok(window) = storage_utils::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(root) = document.document_element() else {
        return;
    };
    let class_list = root.class_list();
    if dark {
        let _ = class_list.add_1("dark");
    } else {
        let _ = class_list.remove_1("dark");
    }
}

pub fn provide_prefs() -> PrefStore {
    let store = PrefStore::new();
    provide_context(store);
    apply_dark_class(store.dark_mode.get_untracked());
    store
}

pub fn use_prefs() -> PrefStore {
    match use_context::<PrefStore>() {
        Some(store) => store,
        None => {
            let store = PrefStore::new();
            provide_context(store);
            store
        }
    }
}
