use leptos::*;

use crate::api::{ApiClient, ApiError, IntakeSubmission, ResumeUpload};
use crate::pages::input_form::repository;
use crate::state::session::{use_session, SessionState};
use crate::utils::poll::{CancelToken, PollOutcome};
use crate::utils::storage as storage_utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakePhase {
    Editing,
    Submitting,
    GeneratingQuestions,
    Done,
    TimedOut,
}

#[derive(Clone, Copy)]
pub struct InputFormViewModel {
    pub name: RwSignal<String>,
    pub company: RwSignal<String>,
    pub role: RwSignal<String>,
    pub resume: RwSignal<Option<ResumeUpload>>,
    pub phase: RwSignal<IntakePhase>,
    pub error: RwSignal<Option<ApiError>>,
    session: ReadSignal<SessionState>,
    api: StoredValue<ApiClient>,
}

impl InputFormViewModel {
    /// Contexts are resolved here, while the setup scope is still current;
    /// event handlers only use what the view model captured.
    pub fn new() -> Self {
        let (session, _) = use_session();
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let vm = Self {
            name: create_rw_signal(String::new()),
            company: create_rw_signal(String::new()),
            role: create_rw_signal(String::new()),
            resume: create_rw_signal(None),
            phase: create_rw_signal(IntakePhase::Editing),
            error: create_rw_signal(None),
            session,
            api: store_value(api),
        };

        // Prefill the name from the identity snapshot once it arrives.
        let name = vm.name;
        create_effect(move |_| {
            if let Some(user) = session.get().user {
                if name.get_untracked().is_empty() {
                    name.set(user.full_name);
                }
            }
        });

        vm
    }

    pub fn busy(&self) -> bool {
        matches!(
            self.phase.get(),
            IntakePhase::Submitting | IntakePhase::GeneratingQuestions
        )
    }

    /// Validate, submit the multipart form, then poll until the backend
    /// reports the question set is generated. `cancel` belongs to the view
    /// and is flipped on unmount.
    pub fn submit(&self, cancel: CancelToken) {
        if matches!(
            self.phase.get_untracked(),
            IntakePhase::Submitting | IntakePhase::GeneratingQuestions
        ) {
            return;
        }
        let Some(user) = self.session.get_untracked().user else {
            self.error.set(Some(ApiError::unknown("Not signed in")));
            return;
        };

        let submission = IntakeSubmission {
            user_id: user.id.clone(),
            name: self.name.get_untracked(),
            company: self.company.get_untracked(),
            role: self.role.get_untracked(),
            // Taken from the session at submit time; may still be absent.
            email: user.primary_email.clone(),
            resume: self.resume.get_untracked(),
        };
        if let Err(err) = repository::validate(&submission) {
            self.error.set(Some(err));
            return;
        }

        self.error.set(None);
        self.phase.set(IntakePhase::Submitting);

        let phase = self.phase;
        let error = self.error;
        let api = self.api.get_value();
        spawn_local(async move {
            if let Err(err) = api.submit_intake(submission).await {
                if !cancel.is_cancelled() {
                    error.set(Some(err));
                    phase.set(IntakePhase::Editing);
                }
                return;
            }
            if cancel.is_cancelled() {
                return;
            }
            phase.set(IntakePhase::GeneratingQuestions);
            match repository::wait_for_questions(&api, &user.id, &cancel).await {
                PollOutcome::Done(()) => phase.set(IntakePhase::Done),
                PollOutcome::Failed(err) => {
                    error.set(Some(err));
                    phase.set(IntakePhase::Editing);
                }
                PollOutcome::TimedOut => phase.set(IntakePhase::TimedOut),
                PollOutcome::Cancelled => {}
            }
        });
    }
}

impl Default for InputFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Full reload so the gate re-runs its profile check from `INITIALIZING`.
pub fn continue_to_dashboard() {
    if let Ok(window) = storage_utils::window() {
        let _ = window.location().set_href("/dashboard");
    }
}
