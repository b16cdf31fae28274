use crate::api::{ApiClient, ApiError};
use crate::utils::storage as storage_utils;

/// Accumulated study time, seconds. Written on dashboard unmount, read on
/// mount; a UI convenience cache only.
pub const TOTAL_TIME_SPENT_KEY: &str = "totalTimeSpent";
pub const SESSION_START_KEY: &str = "sessionStartTime";

pub struct ResourceCard {
    pub href: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const RESOURCE_CARDS: &[ResourceCard] = &[
    ResourceCard {
        href: "/tips",
        title: "Interview Tips",
        description: "Practical advice for before, during and after the interview.",
    },
    ResourceCard {
        href: "/behavioral",
        title: "Behavioral Questions",
        description: "Common prompts and what interviewers listen for.",
    },
    ResourceCard {
        href: "/star-method",
        title: "STAR Method",
        description: "A four-part structure for concrete, memorable answers.",
    },
];

/// Resume score for the dashboard card. A pending or missing analysis is
/// shown as 0 rather than an error; the analysis page owns the full flow.
pub async fn fetch_resume_score(api: &ApiClient, user_id: &str) -> Result<u32, ApiError> {
    let status = api.resume_analysis(user_id).await?;
    Ok(status.analysis.map(|a| a.score).unwrap_or(0))
}

/// Wall-clock milliseconds. Host builds (tests, SSR) get a fixed zero
/// instead of reaching through the wasm-bindgen shims.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

pub fn time_spent_minutes() -> u32 {
    storage_utils::get_u32(TOTAL_TIME_SPENT_KEY) / 60
}

pub fn record_session_start(now_ms: f64) {
    if let Err(err) = storage_utils::set_string(SESSION_START_KEY, &format!("{}", now_ms as u64)) {
        log::warn!("Failed to record session start: {err}");
    }
}

/// Fold the elapsed time since the recorded session start into the total.
pub fn accumulate_time_spent(now_ms: f64) {
    let Some(started) = storage_utils::get_string(SESSION_START_KEY) else {
        return;
    };
    let Ok(started_ms) = started.trim().parse::<u64>() else {
        return;
    };
    let elapsed_secs = ((now_ms as u64).saturating_sub(started_ms)) / 1000;
    let total = storage_utils::get_u32(TOTAL_TIME_SPENT_KEY)
        .saturating_add(u32::try_from(elapsed_secs).unwrap_or(u32::MAX));
    if let Err(err) = storage_utils::set_u32(TOTAL_TIME_SPENT_KEY, total) {
        log::warn!("Failed to persist time spent: {err}");
    }
    storage_utils::remove(SESSION_START_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_cards_link_the_static_pages() {
        let hrefs: Vec<&str> = RESOURCE_CARDS.iter().map(|c| c.href).collect();
        assert_eq!(hrefs, vec!["/tips", "/behavioral", "/star-method"]);
    }

    #[test]
    fn time_spent_reads_zero_off_browser() {
        assert_eq!(time_spent_minutes(), 0);
    }
}
