//! Typed store for the per-category answered-question counters. Q&A views
//! write through `increment`/`seed_count`; the dashboard subscribes to the
//! same signal, so no browser custom events are involved. Values persist to
//! the category's local storage key; readers tolerate missing values as 0.

use leptos::*;

use crate::api::QuestionCategory;
use crate::utils::storage as storage_utils;

/// Progress bars render out of this many questions per category.
pub const QUESTIONS_PER_CATEGORY: u32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressCounts {
    pub resume: u32,
    pub role: u32,
    pub company: u32,
}

impl ProgressCounts {
    pub fn get(&self, category: QuestionCategory) -> u32 {
        match category {
            QuestionCategory::Resume => self.resume,
            QuestionCategory::Role => self.role,
            QuestionCategory::Company => self.company,
        }
    }

    fn set(&mut self, category: QuestionCategory, value: u32) {
        match category {
            QuestionCategory::Resume => self.resume = value,
            QuestionCategory::Role => self.role = value,
            QuestionCategory::Company => self.company = value,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ProgressStore {
    counts: RwSignal<ProgressCounts>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self {
            counts: create_rw_signal(load_counts()),
        }
    }

    pub fn counts(&self) -> ProgressCounts {
        self.counts.get()
    }

    pub fn count(&self, category: QuestionCategory) -> u32 {
        self.counts.get().get(category)
    }

    /// Replace a category's counter, e.g. after a fetch reveals how many
    /// questions already carry answers.
    pub fn seed_count(&self, category: QuestionCategory, value: u32) {
        self.counts.update(|counts| counts.set(category, value));
        persist(category, value);
    }

    /// Optimistic bump when one answer was generated. Returns the new value.
    pub fn increment(&self, category: QuestionCategory) -> u32 {
        let next = self.count(category) + 1;
        self.counts.update(|counts| counts.set(category, next));
        persist(category, next);
        next
    }
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new()
    }
}

fn load_counts() -> ProgressCounts {
    ProgressCounts {
        resume: storage_utils::get_u32(QuestionCategory::Resume.answered_count_key()),
        role: storage_utils::get_u32(QuestionCategory::Role.answered_count_key()),
        company: storage_utils::get_u32(QuestionCategory::Company.answered_count_key()),
    }
}

fn persist(category: QuestionCategory, value: u32) {
    if let Err(err) = storage_utils::set_u32(category.answered_count_key(), value) {
        log::warn!("Failed to persist answered count: {err}");
    }
}

/// Fraction of the per-category budget answered, as a CSS width.
pub fn progress_width(count: u32, total: u32) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    let percent = (f64::from(count.min(total)) / f64::from(total)) * 100.0;
    format!("{}%", percent.round() as u32)
}

pub fn use_progress_store() -> ProgressStore {
    match use_context::<ProgressStore>() {
        Some(store) => store,
        None => {
            let store = ProgressStore::new();
            provide_context(store);
            store
        }
    }
}
