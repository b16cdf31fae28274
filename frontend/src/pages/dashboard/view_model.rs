use leptos::*;

use crate::api::{ApiClient, ApiError};
use crate::pages::dashboard::repository;
use crate::state::progress::{use_progress_store, ProgressStore};
use crate::state::session::use_session;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub score_resource: Resource<Option<String>, Result<u32, ApiError>>,
    pub time_spent_minutes: RwSignal<u32>,
    pub progress: ProgressStore,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let (session, _) = use_session();
        let progress = use_progress_store();

        let score_resource = create_resource(
            move || session.get().user.map(|u| u.id),
            move |user_id| {
                let api = api.clone();
                async move {
                    let Some(user_id) = user_id else {
                        return Ok(0);
                    };
                    match repository::fetch_resume_score(&api, &user_id).await {
                        Ok(score) => Ok(score),
                        Err(err) => {
                            // The card degrades to 0; the analysis page owns
                            // surfacing the failure.
                            log::warn!("Resume score unavailable: {}", err.error);
                            Ok(0)
                        }
                    }
                }
            },
        );

        let time_spent_minutes = create_rw_signal(repository::time_spent_minutes());

        repository::record_session_start(repository::now_ms());
        on_cleanup(|| {
            repository::accumulate_time_spent(repository::now_ms());
        });

        Self {
            score_resource,
            time_spent_minutes,
            progress,
        }
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}
