use leptos::*;

use crate::api::{ApiClient, ApiError, ResumeAnalysis};
use crate::pages::resume_analysis::repository;
use crate::state::session::use_session;
use crate::utils::poll::{CancelToken, PollOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisViewState {
    Loading,
    Ready(ResumeAnalysis),
    Failed(ApiError),
    TimedOut,
}

#[derive(Clone, Copy)]
pub struct ResumeAnalysisViewModel {
    pub state: RwSignal<AnalysisViewState>,
    pub show_all_strengths: RwSignal<bool>,
    pub show_all_improvements: RwSignal<bool>,
}

impl ResumeAnalysisViewModel {
    /// Starts polling as soon as the session user is known. The token is
    /// cancelled by the page on unmount, so a late result never lands.
    pub fn new(cancel: CancelToken) -> Self {
        let vm = Self {
            state: create_rw_signal(AnalysisViewState::Loading),
            show_all_strengths: create_rw_signal(false),
            show_all_improvements: create_rw_signal(false),
        };

        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let (session, _) = use_session();
        let state = vm.state;
        let started = store_value(false);
        create_effect(move |_| {
            let Some(user) = session.get().user else {
                return;
            };
            if started.get_value() {
                return;
            }
            started.set_value(true);
            let api = api.clone();
            let cancel = cancel.clone();
            spawn_local(async move {
                match repository::wait_for_analysis(&api, &user.id, &cancel).await {
                    PollOutcome::Done(analysis) => state.set(AnalysisViewState::Ready(analysis)),
                    PollOutcome::Failed(err) => state.set(AnalysisViewState::Failed(err)),
                    PollOutcome::TimedOut => state.set(AnalysisViewState::TimedOut),
                    PollOutcome::Cancelled => {}
                }
            });
        });

        vm
    }
}
