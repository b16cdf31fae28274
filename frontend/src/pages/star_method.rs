use crate::components::layout::Layout;
use leptos::*;

const STEPS: &[(&str, &str, &str)] = &[
    (
        "S",
        "Situation",
        "Set the scene in one or two sentences: the team, the product, and the problem context.",
    ),
    (
        "T",
        "Task",
        "State what you specifically were responsible for, distinct from what the team owned.",
    ),
    (
        "A",
        "Action",
        "Walk through the concrete steps you took. This should be the longest part of the answer.",
    ),
    (
        "R",
        "Result",
        "Close with the measurable outcome and, ideally, what you would do differently now.",
    ),
];

#[component]
pub fn StarMethodPage() -> impl IntoView {
    view! {
        <Layout>
            <h2 class="text-2xl font-bold text-fg mb-2">"The STAR Method"</h2>
            <p class="text-sm text-fg-muted mb-6">
                "A four-part structure that keeps behavioral answers concrete and easy to follow."
            </p>
            <div class="space-y-4">
                {STEPS.iter().map(|(letter, title, body)| view! {
                    <div class="bg-surface-elevated border border-border rounded-lg p-5 shadow-sm flex gap-4">
                        <div class="shrink-0 h-10 w-10 rounded-full bg-action-primary-bg text-action-primary-text flex items-center justify-center font-bold">
                            {*letter}
                        </div>
                        <div>
                            <h3 class="font-semibold text-fg mb-1">{*title}</h3>
                            <p class="text-sm text-fg-muted">{*body}</p>
                        </div>
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
    fn star_page_covers_all_four_parts() {
        let html = render_to_string(|| view! { <StarMethodPage/> });
        for part in ["Situation", "Task", "Action", "Result"] {
            assert!(html.contains(part), "missing section: {part}");
        }
    }
}
