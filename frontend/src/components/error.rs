use crate::api::ApiError;
use leptos::*;

fn validation_items(error: &ApiError) -> Option<Vec<String>> {
    if error.code != "VALIDATION_ERROR" {
        return None;
    }
    let items = error
        .details
        .as_ref()?
        .get("errors")?
        .as_array()?
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect::<Vec<_>>();
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

fn show_code(error: &ApiError) -> bool {
    !error.code.is_empty() && error.code != "UNKNOWN"
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    if let Some(items) = validation_items(&e) {
                        view! {
                            <ul class="list-disc list-inside text-sm">
                                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                            </ul>
                        }.into_view()
                    } else if show_code(&e) {
                        view! { <div class="text-xs opacity-75">{"Code: "}{e.code.clone()}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_items_require_the_matching_code() {
        let err = ApiError {
            error: "bad".into(),
            code: "REQUEST_FAILED".into(),
            details: Some(json!({ "errors": ["Name is required"] })),
        };
        assert!(validation_items(&err).is_none());
    }

    #[test]
    fn unknown_code_is_not_surfaced() {
        assert!(!show_code(&ApiError::unknown("boom")));
        assert!(show_code(&ApiError::request_failed("boom")));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_validation_details() {
        let html = render_to_string(move || {
            let error = ApiError {
                error: "Validation failed".into(),
                code: "VALIDATION_ERROR".into(),
                details: Some(json!({
                    "errors": ["Name is required", "Resume file is missing"]
                })),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Validation failed"));
        assert!(html.contains("Name is required"));
        assert!(html.contains("Resume file is missing"));
    }

    #[test]
    fn inline_error_renders_code_when_present() {
        let html = render_to_string(move || {
            let error = ApiError {
                error: "Request failed".into(),
                code: "REQUEST_FAILED".into(),
                details: None,
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Request failed"));
        assert!(html.contains("Code: REQUEST_FAILED"));
    }

    #[test]
    fn inline_error_renders_nothing_without_an_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("status-error"));
    }
}
