use leptos::*;
use web_sys::HtmlInputElement;

use crate::api::{ApiError, ResumeUpload};
use crate::components::error::InlineErrorMessage;
use crate::components::layout::LoadingSpinner;
use crate::pages::input_form::view_model::{
    continue_to_dashboard, InputFormViewModel, IntakePhase,
};
use crate::utils::poll::CancelToken;

async fn read_resume_file(file: web_sys::File) -> Result<ResumeUpload, ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::unknown("Failed to read the resume file"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(ResumeUpload {
        file_name: file.name(),
        mime_type: file.type_(),
        bytes,
    })
}

#[component]
pub fn InputFormPage() -> impl IntoView {
    let vm = InputFormViewModel::new();
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }

    let on_resume_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target::<HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        let resume = vm.resume;
        let error = vm.error;
        if let Some(file) = file {
            spawn_local(async move {
                match read_resume_file(file).await {
                    Ok(upload) => resume.set(Some(upload)),
                    Err(err) => error.set(Some(err)),
                }
            });
        } else {
            resume.set(None);
        }
    };

    let on_submit = {
        let cancel = cancel.clone();
        move |_| vm.submit(cancel.clone())
    };

    view! {
        <div class="min-h-screen bg-surface py-12 px-4">
            <div class="max-w-xl mx-auto bg-surface-elevated border border-border rounded-lg shadow-sm p-8">
                {move || match vm.phase.get() {
                    IntakePhase::Done => view! {
                        <div class="text-center space-y-4">
                            <i class="fas fa-check-circle text-5xl text-status-success-text"></i>
                            <h2 class="text-2xl font-bold text-fg">"Your questions are ready"</h2>
                            <p class="text-fg-muted">
                                "We analyzed your resume and generated personalized interview questions."
                            </p>
                            <button
                                class="px-6 py-3 rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                                on:click=move |_| continue_to_dashboard()
                            >
                                "Continue to Dashboard"
                            </button>
                        </div>
                    }.into_view(),
                    IntakePhase::GeneratingQuestions => view! {
                        <div class="text-center space-y-4">
                            <LoadingSpinner/>
                            <h2 class="text-xl font-semibold text-fg">"Generating your questions"</h2>
                            <p class="text-fg-muted text-sm">
                                "This usually takes under a minute. Leave this page open."
                            </p>
                        </div>
                    }.into_view(),
                    IntakePhase::TimedOut => view! {
                        <div class="text-center space-y-4">
                            <h2 class="text-xl font-semibold text-fg">"Still working on it"</h2>
                            <p class="text-fg-muted text-sm">
                                "Question generation is taking longer than expected. Reload this page in a little while to check again."
                            </p>
                        </div>
                    }.into_view(),
                    IntakePhase::Editing | IntakePhase::Submitting => view! {
                        <div>
                            <h2 class="text-2xl font-bold text-fg mb-1">"Tell us about your target job"</h2>
                            <p class="text-sm text-fg-muted mb-6">
                                "We use your resume and target role to generate tailored interview questions."
                            </p>
                            <InlineErrorMessage error={Signal::derive(move || vm.error.get())} />
                            <div class="space-y-4">
                                <div>
                                    <label class="block text-sm font-medium text-fg-muted mb-1" for="intake-name">"Name"</label>
                                    <input
                                        id="intake-name"
                                        type="text"
                                        class="w-full border border-border rounded-md px-3 py-2 bg-surface text-fg"
                                        prop:value=move || vm.name.get()
                                        on:input=move |ev| vm.name.set(event_target_value(&ev))
                                    />
                                </div>
                                <div>
                                    <label class="block text-sm font-medium text-fg-muted mb-1" for="intake-company">"Target company"</label>
                                    <input
                                        id="intake-company"
                                        type="text"
                                        class="w-full border border-border rounded-md px-3 py-2 bg-surface text-fg"
                                        prop:value=move || vm.company.get()
                                        on:input=move |ev| vm.company.set(event_target_value(&ev))
                                    />
                                </div>
                                <div>
                                    <label class="block text-sm font-medium text-fg-muted mb-1" for="intake-role">"Target role"</label>
                                    <input
                                        id="intake-role"
                                        type="text"
                                        class="w-full border border-border rounded-md px-3 py-2 bg-surface text-fg"
                                        prop:value=move || vm.role.get()
                                        on:input=move |ev| vm.role.set(event_target_value(&ev))
                                    />
                                </div>
                                <div>
                                    <label class="block text-sm font-medium text-fg-muted mb-1" for="intake-resume">"Resume (.pdf, .doc, .docx)"</label>
                                    <input
                                        id="intake-resume"
                                        type="file"
                                        accept=".pdf,.doc,.docx"
                                        class="w-full text-sm text-fg-muted"
                                        on:change=on_resume_change.clone()
                                    />
                                    {move || vm.resume.get().map(|r| view! {
                                        <p class="text-xs text-fg-muted mt-1">{"Selected: "}{r.file_name}</p>
                                    })}
                                </div>
                                <button
                                    class="w-full px-4 py-3 rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover disabled:opacity-50"
                                    on:click=on_submit.clone()
                                    disabled=move || vm.phase.get() == IntakePhase::Submitting
                                >
                                    {move || if vm.phase.get() == IntakePhase::Submitting {
                                        "Submitting..."
                                    } else {
                                        "Generate My Questions"
                                    }}
                                </button>
                            </div>
                        </div>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use crate::test_support::{provide_session, sample_user};

    #[test]
    fn intake_form_renders_all_fields() {
        let html = render_to_string(|| {
            provide_session(Some(sample_user()));
            view! { <InputFormPage/> }
        });
        assert!(html.contains("Target company"));
        assert!(html.contains("Target role"));
        assert!(html.contains(".pdf,.doc,.docx"));
        assert!(html.contains("Generate My Questions"));
    }

}
