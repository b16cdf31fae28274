use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::gate::{provide_gate, ProfileGate},
    pages::{
        behavioral::BehavioralPage, dashboard::DashboardPage, home::HomePage,
        input_form::InputFormPage, profile::ProfilePage, qa::QaPage, quiz::QuizPage,
        resume_analysis::ResumeAnalysisPage, star_method::StarMethodPage, tips::TipsPage,
    },
    state::prefs::provide_prefs,
    state::progress::use_progress_store,
    state::session::SessionProvider,
};

pub const LANDING_PATH: &str = "/";
pub const INTAKE_PATH: &str = "/input-form";
pub const DASHBOARD_PATH: &str = "/dashboard";

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/input-form",
    "/dashboard",
    "/resume-qa",
    "/role-qa",
    "/company-qa",
    "/resume-analysis",
    "/quiz",
    "/tips",
    "/behavioral",
    "/star-method",
    "/profile",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/input-form",
    "/dashboard",
    "/resume-qa",
    "/role-qa",
    "/company-qa",
    "/resume-analysis",
    "/quiz",
    "/tips",
    "/behavioral",
    "/star-method",
    "/profile",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/"];

pub fn is_protected_path(path: &str) -> bool {
    PROTECTED_ROUTE_PATHS.contains(&path)
}

pub fn mount_app() {
    #[cfg(target_arch = "wasm32")]
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    provide_prefs();
    use_progress_store();
    view! {
        <Title text="PrepMate"/>
        <SessionProvider>
            <GateRoot/>
        </SessionProvider>
    }
}

#[component]
fn GateRoot() -> impl IntoView {
    // Session context exists here, so the gate can watch it.
    provide_gate(expect_context::<crate::api::ApiClient>());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/input-form" view=GatedInputForm/>
                <Route path="/dashboard" view=GatedDashboard/>
                <Route path="/resume-qa" view=GatedResumeQa/>
                <Route path="/role-qa" view=GatedRoleQa/>
                <Route path="/company-qa" view=GatedCompanyQa/>
                <Route path="/resume-analysis" view=GatedResumeAnalysis/>
                <Route path="/quiz" view=GatedQuiz/>
                <Route path="/tips" view=GatedTips/>
                <Route path="/behavioral" view=GatedBehavioral/>
                <Route path="/star-method" view=GatedStarMethod/>
                <Route path="/profile" view=GatedProfile/>
                <Route path="/*any" view=GatedDashboard/>
            </Routes>
        </Router>
    }
}

#[component]
fn GatedInputForm() -> impl IntoView {
    view! { <ProfileGate><InputFormPage/></ProfileGate> }
}

#[component]
fn GatedDashboard() -> impl IntoView {
    view! { <ProfileGate><DashboardPage/></ProfileGate> }
}

#[component]
fn GatedResumeQa() -> impl IntoView {
    view! { <ProfileGate><QaPage category=crate::api::QuestionCategory::Resume/></ProfileGate> }
}

#[component]
fn GatedRoleQa() -> impl IntoView {
    view! { <ProfileGate><QaPage category=crate::api::QuestionCategory::Role/></ProfileGate> }
}

#[component]
fn GatedCompanyQa() -> impl IntoView {
    view! { <ProfileGate><QaPage category=crate::api::QuestionCategory::Company/></ProfileGate> }
}

#[component]
fn GatedResumeAnalysis() -> impl IntoView {
    view! { <ProfileGate><ResumeAnalysisPage/></ProfileGate> }
}

#[component]
fn GatedQuiz() -> impl IntoView {
    view! { <ProfileGate><QuizPage/></ProfileGate> }
}

#[component]
fn GatedTips() -> impl IntoView {
    view! { <ProfileGate><TipsPage/></ProfileGate> }
}

#[component]
fn GatedBehavioral() -> impl IntoView {
    view! { <ProfileGate><BehavioralPage/></ProfileGate> }
}

#[component]
fn GatedStarMethod() -> impl IntoView {
    view! { <ProfileGate><StarMethodPage/></ProfileGate> }
}

#[component]
fn GatedProfile() -> impl IntoView {
    view! { <ProfileGate><ProfilePage/></ProfileGate> }
}
