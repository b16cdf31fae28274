use leptos::*;

use crate::api::QuestionCategory;
use crate::components::layout::Layout;
use crate::pages::dashboard::{repository, view_model::DashboardViewModel};
use crate::state::progress::{progress_width, QUESTIONS_PER_CATEGORY};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = DashboardViewModel::new();

    let score = move || {
        vm.score_resource
            .get()
            .and_then(|r| r.ok())
            .unwrap_or(0)
    };

    view! {
        <Layout>
            <h2 class="text-2xl font-bold text-fg mb-6">"Dashboard"</h2>

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-6 mb-8">
                <div class="bg-surface-elevated border border-border rounded-lg p-5 shadow-sm">
                    <h3 class="text-sm font-medium text-fg-muted">"Time Spent Preparing"</h3>
                    <p class="mt-2 text-3xl font-bold text-fg">
                        {move || vm.time_spent_minutes.get()}
                        <span class="text-base font-medium text-fg-muted ml-1">"min"</span>
                    </p>
                </div>
                <div class="bg-surface-elevated border border-border rounded-lg p-5 shadow-sm">
                    <h3 class="text-sm font-medium text-fg-muted">"Resume Score"</h3>
                    <p class="mt-2 text-3xl font-bold text-fg">
                        {score}
                        <span class="text-base font-medium text-fg-muted ml-1">"/ 100"</span>
                    </p>
                    <a href="/resume-analysis" class="text-sm text-action-primary-bg hover:underline">
                        "View full analysis"
                    </a>
                </div>
            </div>

            <h3 class="text-lg font-semibold text-fg mb-3">"Question Progress"</h3>
            <div class="space-y-4 mb-8">
                {QuestionCategory::ALL.into_iter().map(|category| {
                    let count = move || vm.progress.count(category);
                    view! {
                        <div class="bg-surface-elevated border border-border rounded-lg p-4 shadow-sm">
                            <div class="flex justify-between items-center mb-2">
                                <span class="text-sm font-medium text-fg">{category.label()}</span>
                                <span class="text-sm text-fg-muted">
                                    {move || format!("{}/{}", count(), QUESTIONS_PER_CATEGORY)}
                                </span>
                            </div>
                            <div class="w-full bg-surface rounded-full h-2">
                                <div
                                    class="bg-action-primary-bg h-2 rounded-full"
                                    style:width=move || progress_width(count(), QUESTIONS_PER_CATEGORY)
                                ></div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            <h3 class="text-lg font-semibold text-fg mb-3">"Recommended Resources"</h3>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {repository::RESOURCE_CARDS.iter().map(|card| view! {
                    <a href=card.href class="block bg-surface-elevated border border-border rounded-lg p-5 shadow-sm hover:border-action-primary-bg">
                        <h4 class="font-semibold text-fg mb-1">{card.title}</h4>
                        <p class="text-sm text-fg-muted">{card.description}</p>
                    </a>
                }).collect_view()}
            </div>
        </Layout>
    }
}
