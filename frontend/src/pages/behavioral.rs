use crate::components::layout::Layout;
use leptos::*;

const PROMPTS: &[(&str, &str)] = &[
    (
        "Tell me about a time you disagreed with a teammate.",
        "Focus on how you surfaced the disagreement early and what evidence settled it, not on who was right.",
    ),
    (
        "Describe a project that failed.",
        "Pick a real failure, own your part in it, and spend most of the answer on what changed in how you work.",
    ),
    (
        "Tell me about a time you had to learn something quickly.",
        "Name the constraint, the strategy you used to ramp up, and how you validated what you learned.",
    ),
    (
        "Describe a situation where requirements changed late.",
        "Show how you re-scoped, communicated the trade-offs, and protected the deadline or renegotiated it.",
    ),
    (
        "Tell me about a time you received difficult feedback.",
        "The interviewer is listening for whether you acted on it, not for how gracefully you took it.",
    ),
];

#[component]
pub fn BehavioralPage() -> impl IntoView {
    view! {
        <Layout>
            <h2 class="text-2xl font-bold text-fg mb-2">"Behavioral Questions"</h2>
            <p class="text-sm text-fg-muted mb-6">
                "Common prompts with notes on what interviewers actually listen for. Structure your answers with the STAR method."
            </p>
            <div class="space-y-4">
                {PROMPTS.iter().map(|(prompt, note)| view! {
                    <div class="bg-surface-elevated border border-border rounded-lg p-5 shadow-sm">
                        <h3 class="font-semibold text-fg mb-2">{*prompt}</h3>
                        <p class="text-sm text-fg-muted">{*note}</p>
                    </div>
                }).collect_view()}
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn behavioral_page_renders_prompts() {
        let html = render_to_string(|| view! { <BehavioralPage/> });
        assert!(html.contains("Behavioral Questions"));
        assert!(html.contains("disagreed with a teammate"));
    }
}
