use leptos::*;

use crate::api::{Question, QuestionCategory};
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{Layout, LoadingSpinner};
use crate::pages::qa::repository::QaFilter;
use crate::pages::qa::view_model::QaViewModel;
use crate::state::progress::{progress_width, QUESTIONS_PER_CATEGORY};

#[component]
pub fn QaPage(category: QuestionCategory) -> impl IntoView {
    let vm = QaViewModel::new(category);

    let answered = move || vm.filter_count(QaFilter::Answered) as u32;
    let load_error = move || {
        vm.questions_resource
            .get()
            .and_then(|r| r.err())
    };

    view! {
        <Layout>
            <h2 class="text-2xl font-bold text-fg mb-1">{category.label()}</h2>
            <div class="mb-6">
                <div class="flex justify-between items-center mb-2">
                    <span class="text-sm text-fg-muted">"Answered"</span>
                    <span class="text-sm text-fg-muted">
                        {answered}{format!("/{}", QUESTIONS_PER_CATEGORY)}
                    </span>
                </div>
                <div class="w-full bg-surface rounded-full h-2">
                    <div
                        class="bg-action-primary-bg h-2 rounded-full"
                        style:width=move || progress_width(answered(), QUESTIONS_PER_CATEGORY)
                    ></div>
                </div>
            </div>

            <div class="flex gap-2 mb-6">
                {QaFilter::ALL.into_iter().map(|filter| view! {
                    <button
                        class=move || if vm.filter.get() == filter {
                            "px-3 py-1.5 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg"
                        } else {
                            "px-3 py-1.5 rounded-md text-sm font-medium text-fg-muted hover:bg-action-ghost-bg-hover"
                        }
                        on:click=move |_| vm.filter.set(filter)
                    >
                        {filter.label()}
                        {move || format!(" ({})", vm.filter_count(filter))}
                    </button>
                }).collect_view()}
            </div>

            <InlineErrorMessage error={Signal::derive(load_error)} />

            <Suspense fallback=move || view! { <LoadingSpinner/> }>
                {move || {
                    let questions = vm.questions();
                    let visible: Vec<Question> = questions
                        .into_iter()
                        .filter(|q| vm.filter.get().matches(q))
                        .collect();
                    if visible.is_empty() {
                        view! {
                            <p class="text-fg-muted text-sm py-8 text-center">
                                "No questions here yet."
                            </p>
                        }.into_view()
                    } else {
                        visible.into_iter().map(|question| view! {
                            <QaCard vm=vm question=question />
                        }).collect_view()
                    }
                }}
            </Suspense>
        </Layout>
    }
}

#[component]
fn QaCard(vm: QaViewModel, question: Question) -> impl IntoView {
    let question_id = question.id;
    let has_answer = question.answer.is_some();
    let answer = question.answer.clone();

    let is_expanded = move || vm.expanded.get().contains(&question_id);
    let is_generating = move || vm.generating.get() == Some(question_id);
    let card_error = move || vm.card_errors.get().get(&question_id).cloned();

    view! {
        <div class="bg-surface-elevated border border-border rounded-lg p-5 shadow-sm mb-4">
            <div class="flex justify-between items-start gap-4">
                <p class="font-medium text-fg">{question.question.clone()}</p>
                {if has_answer {
                    view! {
                        <button
                            class="shrink-0 text-sm text-action-primary-bg hover:underline"
                            on:click=move |_| vm.toggle_expanded(question_id)
                        >
                            {move || if is_expanded() { "Hide Answer" } else { "Show Answer" }}
                        </button>
                    }.into_view()
                } else {
                    view! {
                        <button
                            class="shrink-0 px-3 py-1.5 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover disabled:opacity-50"
                            on:click=move |_| vm.generate(question_id)
                            disabled=move || vm.generating.get().is_some()
                        >
                            {move || if is_generating() { "Generating..." } else { "Generate Answer" }}
                        </button>
                    }.into_view()
                }}
            </div>
            <Show when=move || is_expanded() && has_answer>
                <p class="mt-3 text-sm text-fg-muted whitespace-pre-wrap">
                    {answer.clone().unwrap_or_default()}
                </p>
            </Show>
            <InlineErrorMessage error={Signal::derive(card_error)} />
        </div>
    }
}
