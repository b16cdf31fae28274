use leptos::*;

use crate::api::{ApiClient, ApiError, UpdateProfileRequest};
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{Layout, SuccessMessage};
use crate::state::session::use_session;

fn validate_username(username: &str) -> Result<String, ApiError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("Username must not be empty"));
    }
    Ok(trimmed.to_string())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (session, _set_session) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    let username = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let saved_message = create_rw_signal(None::<String>);

    // Prefill once the session snapshot is in.
    create_effect(move |_| {
        if let Some(user) = session.get().user {
            if username.get_untracked().is_empty() {
                username.set(user.full_name);
            }
        }
    });

    let save_action = create_action(move |request: &UpdateProfileRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { api.update_profile(request).await }
    });
    let saving = save_action.pending();

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(resp) => {
                    saved_message.set(Some(
                        resp.message.unwrap_or_else(|| "Profile updated".to_string()),
                    ));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        error.set(None);
        saved_message.set(None);
        let Some(user) = session.get_untracked().user else {
            error.set(Some(ApiError::unknown("Not signed in")));
            return;
        };
        match validate_username(&username.get_untracked()) {
            Ok(name) => save_action.dispatch(UpdateProfileRequest {
                user_id: user.id,
                username: name,
            }),
            Err(err) => error.set(Some(err)),
        }
    };

    let email = move || {
        session
            .get()
            .user
            .and_then(|u| u.primary_email)
            .unwrap_or_else(|| "(no email on record)".to_string())
    };
    let user_id = move || session.get().user.map(|u| u.id).unwrap_or_default();

    view! {
        <Layout>
            <h2 class="text-2xl font-bold text-fg mb-6">"Profile"</h2>
            <div class="max-w-lg bg-surface-elevated border border-border rounded-lg p-6 shadow-sm space-y-4">
                <div>
                    <span class="block text-sm font-medium text-fg-muted">"User ID"</span>
                    <span class="block text-fg">{user_id}</span>
                </div>
                <div>
                    <span class="block text-sm font-medium text-fg-muted">"Email"</span>
                    <span class="block text-fg">{email}</span>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted mb-1" for="profile-username">
                        "Display name"
                    </label>
                    <input
                        id="profile-username"
                        type="text"
                        class="w-full border border-border rounded-md px-3 py-2 bg-surface text-fg"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </div>
                <InlineErrorMessage error={Signal::derive(move || error.get())} />
                <Show when=move || saved_message.get().is_some()>
                    <SuccessMessage message={saved_message.get().unwrap_or_default()} />
                </Show>
                <button
                    class="px-4 py-2 rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover disabled:opacity-50"
                    on:click=on_save
                    disabled=move || saving.get()
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </Layout>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use crate::test_support::{provide_session, sample_user};

    #[test]
    fn profile_page_shows_the_signed_in_identity() {
        let html = render_to_string(|| {
            provide_session(Some(sample_user()));
            view! { <ProfilePage/> }
        });
        assert!(html.contains("alice@example.com"));
        assert!(html.contains("Display name"));
    }
}
