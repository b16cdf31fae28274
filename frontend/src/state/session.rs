//! Session context. The identity provider is external: its hosted sign-in
//! flow leaves a bearer token and a serialized user in local storage, and
//! this provider only reads that snapshot once per page load. `loaded`
//! flips false -> true exactly once; `user` is `None` when signed out.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::api::client::{ACCESS_TOKEN_KEY, CURRENT_USER_KEY};
use crate::utils::storage as storage_utils;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub primary_email: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub loaded: bool,
    pub user: Option<SessionUser>,
}

type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

fn read_session_snapshot() -> Option<SessionUser> {
    let storage = storage_utils::local_storage().ok()?;
    let token = storage.get_item(ACCESS_TOKEN_KEY).ok()??;
    if token.trim().is_empty() {
        return None;
    }
    let raw_user = storage.get_item(CURRENT_USER_KEY).ok()??;
    match serde_json::from_str(&raw_user) {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("Discarding unreadable session snapshot: {err}");
            None
        }
    }
}

fn create_session_context() -> SessionContext {
    let (session, set_session) = create_signal(SessionState::default());
    spawn_local(async move {
        let user = read_session_snapshot();
        if user.is_some() {
            log::info!("Session restored from identity snapshot");
        }
        set_session.update(|state| {
            state.user = user;
            state.loaded = true;
        });
    });
    (session, set_session)
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_session_context();
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

/// Drop the identity snapshot and reset the session to signed-out. The
/// identity provider's own UI owns the real sign-out round trip.
pub fn sign_out(set_session: WriteSignal<SessionState>) {
    storage_utils::remove(ACCESS_TOKEN_KEY);
    storage_utils::remove(CURRENT_USER_KEY);
    set_session.update(|state| {
        state.user = None;
        state.loaded = true;
    });
}
