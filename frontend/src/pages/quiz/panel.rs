use leptos::*;

use crate::api::QuizQuestion;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{Layout, LoadingSpinner};
use crate::pages::quiz::view_model::{QuizStage, QuizViewModel};
use crate::state::progress::progress_width;
use crate::utils::poll::CancelToken;

/// Styling for one option button after the one-shot selection landed.
fn option_class(selected: Option<&str>, option_key: &str, correct_key: &str) -> &'static str {
    match selected {
        None => "w-full text-left px-4 py-3 rounded-md border border-border text-sm text-fg hover:border-action-primary-bg",
        Some(_) if option_key == correct_key => "w-full text-left px-4 py-3 rounded-md border border-status-success-border bg-status-success-bg text-status-success-text text-sm",
        Some(sel) if sel == option_key => "w-full text-left px-4 py-3 rounded-md border border-status-error-border bg-status-error-bg text-status-error-text text-sm",
        Some(_) => "w-full text-left px-4 py-3 rounded-md border border-border text-sm text-fg-muted opacity-75",
    }
}

#[component]
pub fn QuizPage() -> impl IntoView {
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let vm = QuizViewModel::new(cancel);

    view! {
        <Layout>
            <h2 class="text-2xl font-bold text-fg mb-6">"Practice Quiz"</h2>
            {move || match vm.stage.get() {
                QuizStage::Loading => view! {
                    <div class="text-center py-8">
                        <LoadingSpinner/>
                        <p class="text-fg-muted text-sm">"Preparing your quiz..."</p>
                    </div>
                }.into_view(),
                QuizStage::Failed(err) => view! {
                    <InlineErrorMessage error={Signal::derive(move || Some(err.clone()))} />
                }.into_view(),
                QuizStage::TimedOut => view! {
                    <p class="text-fg-muted py-8 text-center">
                        "Quiz generation is taking longer than expected. Reload this page in a little while to try again."
                    </p>
                }.into_view(),
                QuizStage::InProgress => view! { <QuizQuestionCard vm=vm /> }.into_view(),
                QuizStage::Complete => view! { <QuizResult vm=vm /> }.into_view(),
            }}
        </Layout>
    }
}

#[component]
fn QuizQuestionCard(vm: QuizViewModel) -> impl IntoView {
    view! {
        {move || {
            let Some(question) = vm.current_question() else {
                return ().into_view();
            };
            let total = vm.questions.get().len();
            let index = vm.current_index.get();
            let selected = vm.current_selection();
            let correct = question.correct_answer.clone();
            let is_last = index + 1 >= total;

            view! {
                <div class="bg-surface-elevated border border-border rounded-lg p-6 shadow-sm">
                    <p class="text-sm text-fg-muted mb-2">
                        {format!("Question {} of {}", index + 1, total)}
                    </p>
                    <h3 class="text-lg font-semibold text-fg mb-4">{question.question.clone()}</h3>
                    <div class="space-y-2">
                        {question.options.iter().map(|(key, text)| {
                            let key = key.clone();
                            let class = option_class(selected.as_deref(), &key, &correct);
                            let on_select = {
                                let key = key.clone();
                                move |_| vm.select(&key)
                            };
                            view! {
                                <button class=class on:click=on_select>
                                    <span class="font-medium mr-2 uppercase">{key.clone()}"."</span>
                                    {text.clone()}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                    <Show when=move || vm.current_selection().is_some()>
                        <button
                            class="mt-4 px-4 py-2 rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                            on:click=move |_| vm.next()
                        >
                            {if is_last { "Finish Quiz" } else { "Next Question" }}
                        </button>
                    </Show>
                </div>
            }.into_view()
        }}
    }
}

#[component]
fn QuizResult(vm: QuizViewModel) -> impl IntoView {
    view! {
        {move || {
            let questions = vm.questions.get();
            let selections = vm.selections.get();
            let total = questions.len() as u32;
            let score = vm.score();

            view! {
                <div class="bg-surface-elevated border border-border rounded-lg p-6 shadow-sm mb-6 text-center">
                    <h3 class="text-lg font-semibold text-fg mb-2">"Your Score"</h3>
                    <p class="text-4xl font-bold text-fg mb-4">{score}"/"{total}</p>
                    <div class="w-full bg-surface rounded-full h-3">
                        <div
                            class="bg-action-primary-bg h-3 rounded-full"
                            style:width=progress_width(score, total)
                        ></div>
                    </div>
                </div>

                <h3 class="text-lg font-semibold text-fg mb-3">"Review"</h3>
                <div class="space-y-3">
                    {questions.iter().zip(selections.iter()).map(|(question, selection)| {
                        let correct = selection.as_deref() == Some(question.correct_answer.as_str());
                        let your_answer = selection
                            .as_ref()
                            .and_then(|key| question.options.get(key))
                            .cloned()
                            .unwrap_or_else(|| "(not answered)".to_string());
                        let correct_answer = question
                            .options
                            .get(&question.correct_answer)
                            .cloned()
                            .unwrap_or_else(|| question.correct_answer.clone());
                        view! {
                            <div class="bg-surface-elevated border border-border rounded-lg p-4 shadow-sm">
                                <p class="font-medium text-fg mb-1">{question.question.clone()}</p>
                                <p class="text-sm">
                                    {if correct {
                                        view! { <span class="text-status-success-text">"Correct: "{your_answer.clone()}</span> }.into_view()
                                    } else {
                                        view! {
                                            <span class="text-status-error-text">"Your answer: "{your_answer.clone()}</span>
                                            <span class="text-fg-muted">{" - Correct answer: "}{correct_answer.clone()}</span>
                                        }.into_view()
                                    }}
                                </p>
                            </div>
                        }
                    }).collect_view()}
                </div>
            }.into_view()
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_are_neutral_until_a_selection_lands() {
        let class = option_class(None, "a", "b");
        assert!(class.contains("hover:border-action-primary-bg"));
    }

    #[test]
    fn selection_highlights_right_and_wrong() {
        assert!(option_class(Some("b"), "b", "b").contains("status-success"));
        assert!(option_class(Some("c"), "c", "b").contains("status-error"));
        assert!(option_class(Some("c"), "a", "b").contains("opacity-75"));
        // The correct option is revealed even when another was picked.
        assert!(option_class(Some("c"), "b", "b").contains("status-success"));
    }
}
