#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

use leptos::*;

use crate::state::session::{SessionState, SessionUser};

pub fn sample_user() -> SessionUser {
    SessionUser {
        id: "u1".into(),
        full_name: "Alice Example".into(),
        primary_email: Some("alice@example.com".into()),
    }
}

pub fn provide_session(
    user: Option<SessionUser>,
) -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let (session, set_session) = create_signal(SessionState { loaded: true, user });
    provide_context((session, set_session));
    (session, set_session)
}
