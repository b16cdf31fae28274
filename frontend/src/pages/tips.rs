use crate::components::layout::Layout;
use leptos::*;

const TIPS: &[(&str, &str)] = &[
    (
        "Research the company",
        "Read the company's product pages, recent news, and engineering blog so your answers reference what they actually do.",
    ),
    (
        "Rehearse your introduction",
        "Prepare a two-minute summary of your background that connects your experience to the role you are applying for.",
    ),
    (
        "Quantify your impact",
        "Numbers stick. Replace \"improved performance\" with \"cut page load time by 40%\".",
    ),
    (
        "Prepare questions to ask",
        "Interviews go both ways. Ask about team structure, deployment cadence, or how success is measured.",
    ),
    (
        "Review your own resume",
        "Every line on your resume is fair game. Be ready to go deep on any project you listed.",
    ),
    (
        "Follow up afterwards",
        "A short thank-you note restating your interest keeps you memorable without being pushy.",
    ),
];

#[component]
pub fn TipsPage() -> impl IntoView {
    view! {
        <Layout>
            <h2 class="text-2xl font-bold text-fg mb-6">"Interview Tips"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {TIPS.iter().map(|(title, body)| view! {
                    <div class="bg-surface-elevated border border-border rounded-lg p-5 shadow-sm">
                        <h3 class="font-semibold text-fg mb-2">{*title}</h3>
                        <p class="text-sm text-fg-muted">{*body}</p>
                    </div>
                }).collect_view()}
            </div>
        </Layout>
    }
}
