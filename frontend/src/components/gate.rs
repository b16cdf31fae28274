//! Route gate. One profile-existence check runs per full page load, and
//! every protected view mounts behind the resulting phase. A failed check
//! falls open toward intake but keeps its own phase so the failure stays
//! visible instead of silently looking like a brand-new user.

use leptos::*;

use crate::api::{ApiClient, ApiError};
use crate::components::error::InlineErrorMessage;
use crate::components::layout::LoadingSpinner;
use crate::router::{is_protected_path, DASHBOARD_PATH, INTAKE_PATH, LANDING_PATH};
use crate::state::session::use_session;
use crate::utils::storage as storage_utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Initializing,
    SignedOut,
    CheckingProfile,
    NeedsIntake,
    CheckFailed,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Redirect(&'static str),
    Hold,
}

/// What to do for `path` given the current gate phase. Pure so the whole
/// reachability table is testable without a browser.
pub fn decide_route(phase: GatePhase, path: &str) -> RouteDecision {
    match phase {
        GatePhase::Initializing | GatePhase::CheckingProfile => RouteDecision::Hold,
        GatePhase::SignedOut => {
            if path == LANDING_PATH {
                RouteDecision::Render
            } else {
                RouteDecision::Redirect(LANDING_PATH)
            }
        }
        GatePhase::NeedsIntake | GatePhase::CheckFailed => {
            if path == INTAKE_PATH {
                RouteDecision::Render
            } else {
                RouteDecision::Redirect(INTAKE_PATH)
            }
        }
        GatePhase::Ready => {
            if path == INTAKE_PATH {
                RouteDecision::Redirect(DASHBOARD_PATH)
            } else if path == LANDING_PATH || is_protected_path(path) {
                RouteDecision::Render
            } else {
                RouteDecision::Redirect(DASHBOARD_PATH)
            }
        }
    }
}

#[derive(Clone, Copy)]
pub struct GateState {
    pub phase: RwSignal<GatePhase>,
    pub check_error: RwSignal<Option<ApiError>>,
}

impl GateState {
    fn new() -> Self {
        Self {
            phase: create_rw_signal(GatePhase::Initializing),
            check_error: create_rw_signal(None),
        }
    }
}

/// Installs the gate state machine at the app root. The profile check is
/// issued at most once; client-side phase changes never re-run it.
pub fn provide_gate(client: ApiClient) -> GateState {
    let gate = GateState::new();
    provide_context(gate);
    let (session, _set_session) = use_session();
    let check_started = store_value(false);
    create_effect(move |_| {
        let state = session.get();
        if !state.loaded {
            return;
        }
        let Some(user) = state.user else {
            gate.phase.set(GatePhase::SignedOut);
            return;
        };
        if check_started.get_value() {
            return;
        }
        check_started.set_value(true);
        gate.phase.set(GatePhase::CheckingProfile);
        let client = client.clone();
        spawn_local(async move {
            match client
                .check_profile(&user.id, user.primary_email.as_deref())
                .await
            {
                Ok(resp) if resp.is_new_user => gate.phase.set(GatePhase::NeedsIntake),
                Ok(_) => gate.phase.set(GatePhase::Ready),
                Err(err) => {
                    log::error!("Profile check failed, falling open to intake: {}", err.error);
                    gate.check_error.set(Some(err));
                    gate.phase.set(GatePhase::CheckFailed);
                }
            }
        });
    });
    gate
}

pub fn use_gate() -> GateState {
    match use_context::<GateState>() {
        Some(gate) => gate,
        None => {
            let gate = GateState::new();
            provide_context(gate);
            gate
        }
    }
}

fn current_path() -> String {
    storage_utils::window()
        .ok()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| LANDING_PATH.to_string())
}

#[component]
pub fn CheckFailedBanner() -> impl IntoView {
    let gate = use_gate();
    let error = Signal::derive(move || {
        if gate.phase.get() == GatePhase::CheckFailed {
            gate.check_error.get()
        } else {
            None
        }
    });
    view! { <InlineErrorMessage error=error /> }
}

/// Wraps a protected view. Holds on a spinner until the phase settles,
/// renders the children when the phase admits this path, and navigates
/// away otherwise.
#[component]
pub fn ProfileGate(children: ChildrenFn) -> impl IntoView {
    let gate = use_gate();
    let decision = create_memo(move |_| decide_route(gate.phase.get(), &current_path()));
    create_effect(move |_| {
        if let RouteDecision::Redirect(target) = decision.get() {
            if let Ok(window) = storage_utils::window() {
                let _ = window.location().set_href(target);
            }
        }
    });
    view! {
        <Show
            when=move || decision.get() == RouteDecision::Render
            fallback=move || {
                if decision.get() == RouteDecision::Hold {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            <CheckFailedBanner/>
            {children()}
        </Show>
    }
}
