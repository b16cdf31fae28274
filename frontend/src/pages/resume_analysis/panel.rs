use leptos::*;

use crate::api::ResumeAnalysis;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{Layout, LoadingSpinner};
use crate::pages::resume_analysis::repository;
use crate::pages::resume_analysis::view_model::{AnalysisViewState, ResumeAnalysisViewModel};
use crate::utils::poll::CancelToken;

#[component]
pub fn ResumeAnalysisPage() -> impl IntoView {
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let vm = ResumeAnalysisViewModel::new(cancel);

    view! {
        <Layout>
            <h2 class="text-2xl font-bold text-fg mb-6">"Resume Analysis"</h2>
            {move || match vm.state.get() {
                AnalysisViewState::Loading => view! {
                    <div class="text-center py-8">
                        <LoadingSpinner/>
                        <p class="text-fg-muted text-sm">"Analyzing your resume..."</p>
                    </div>
                }.into_view(),
                AnalysisViewState::Failed(err) => view! {
                    <InlineErrorMessage error={Signal::derive(move || Some(err.clone()))} />
                }.into_view(),
                AnalysisViewState::TimedOut => view! {
                    <p class="text-fg-muted py-8 text-center">
                        "The analysis is taking longer than expected. Reload this page in a little while to check again."
                    </p>
                }.into_view(),
                AnalysisViewState::Ready(analysis) => view! {
                    <AnalysisResult vm=vm analysis=analysis />
                }.into_view(),
            }}
        </Layout>
    }
}

#[component]
fn AnalysisResult(vm: ResumeAnalysisViewModel, analysis: ResumeAnalysis) -> impl IntoView {
    let score = analysis.score.min(100);
    let strengths = analysis.strengths.clone();
    let improvements = analysis.improvements.clone();

    view! {
        <div class="bg-surface-elevated border border-border rounded-lg p-6 shadow-sm mb-6">
            <div class="flex justify-between items-center mb-2">
                <h3 class="text-lg font-semibold text-fg">"Overall Score"</h3>
                <span class="text-2xl font-bold text-fg">{score}"/100"</span>
            </div>
            <div class="w-full bg-surface rounded-full h-3">
                <div
                    class="bg-action-primary-bg h-3 rounded-full"
                    style:width=format!("{}%", score)
                ></div>
            </div>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            <EntrySection
                title="Strengths"
                entries=strengths
                show_all=vm.show_all_strengths
            />
            <EntrySection
                title="Areas to Improve"
                entries=improvements
                show_all=vm.show_all_improvements
            />
        </div>
    }
}

#[component]
fn EntrySection(
    title: &'static str,
    entries: Vec<String>,
    show_all: RwSignal<bool>,
) -> impl IntoView {
    let needs_toggle = repository::needs_toggle(&entries);
    let entries = store_value(entries);

    view! {
        <div class="bg-surface-elevated border border-border rounded-lg p-6 shadow-sm">
            <h3 class="text-lg font-semibold text-fg mb-3">{title}</h3>
            <ul class="space-y-2">
                {move || repository::visible_entries(&entries.get_value(), show_all.get())
                    .into_iter()
                    .map(|entry| view! {
                        <li class="text-sm text-fg-muted bg-surface border border-border rounded-md px-3 py-2">
                            {entry}
                        </li>
                    })
                    .collect_view()}
            </ul>
            <Show when=move || needs_toggle>
                <button
                    class="mt-3 text-sm text-action-primary-bg hover:underline"
                    on:click=move |_| show_all.update(|v| *v = !*v)
                >
                    {move || if show_all.get() { "Show less" } else { "Show more" }}
                </button>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn analysis() -> ResumeAnalysis {
        ResumeAnalysis {
            score: 82,
            strengths: (1..=6).map(|i| format!("strength {i}")).collect(),
            improvements: vec!["Add metrics".into(), "Tighten the summary".into()],
        }
    }

    #[test]
    fn result_shows_score_bar_and_sections() {
        let html = render_to_string(|| {
            let vm = ResumeAnalysisViewModel::new(CancelToken::new());
            view! { <AnalysisResult vm=vm analysis=analysis() /> }
        });
        assert!(html.contains("82"));
        assert!(html.contains("width:82%") || html.contains("width: 82%"));
        assert!(html.contains("Strengths"));
        assert!(html.contains("Areas to Improve"));
    }

    #[test]
    fn long_lists_collapse_to_four_with_a_toggle() {
        let html = render_to_string(|| {
            let vm = ResumeAnalysisViewModel::new(CancelToken::new());
            view! { <AnalysisResult vm=vm analysis=analysis() /> }
        });
        assert!(html.contains("strength 4"));
        assert!(!html.contains("strength 5"));
        assert!(html.contains("Show more"));
    }

    #[test]
    fn short_lists_render_without_a_toggle() {
        let html = render_to_string(|| {
            let show_all = create_rw_signal(false);
            view! {
                <EntrySection
                    title="Areas to Improve"
                    entries=vec!["Add metrics".to_string()]
                    show_all=show_all
                />
            }
        });
        assert!(html.contains("Add metrics"));
        assert!(!html.contains("Show more"));
    }
}
