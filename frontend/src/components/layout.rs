use crate::state::prefs::use_prefs;
use crate::state::session::{sign_out, use_session};
use crate::utils::storage as storage_utils;
use leptos::*;

struct NavEntry {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        href: "/dashboard",
        label: "Dashboard",
        icon: "fa-gauge",
    },
    NavEntry {
        href: "/resume-qa",
        label: "Resume Q&A",
        icon: "fa-file-lines",
    },
    NavEntry {
        href: "/role-qa",
        label: "Role Q&A",
        icon: "fa-user-tie",
    },
    NavEntry {
        href: "/company-qa",
        label: "Company Q&A",
        icon: "fa-building",
    },
    NavEntry {
        href: "/resume-analysis",
        label: "Resume Analysis",
        icon: "fa-chart-simple",
    },
    NavEntry {
        href: "/quiz",
        label: "Quiz",
        icon: "fa-circle-question",
    },
    NavEntry {
        href: "/tips",
        label: "Interview Tips",
        icon: "fa-lightbulb",
    },
    NavEntry {
        href: "/behavioral",
        label: "Behavioral",
        icon: "fa-comments",
    },
    NavEntry {
        href: "/star-method",
        label: "STAR Method",
        icon: "fa-star",
    },
    NavEntry {
        href: "/profile",
        label: "Profile",
        icon: "fa-user",
    },
];

#[component]
pub fn Navbar() -> impl IntoView {
    let (session, set_session) = use_session();
    let prefs = use_prefs();
    let display_name = move || {
        session
            .get()
            .user
            .map(|u| u.full_name)
            .unwrap_or_default()
    };
    let on_sign_out = move |_| {
        sign_out(set_session);
        if let Ok(window) = storage_utils::window() {
            let _ = window.location().set_href("/");
        }
    };
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="flex justify-between items-center h-16 px-4 sm:px-6">
                <div class="flex items-center gap-3">
                    <button
                        type="button"
                        class="inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        on:click=move |_| prefs.toggle_sidebar()
                        aria-controls="sidebar-nav"
                        aria-expanded=move || prefs.sidebar_open.get()
                    >
                        <span class="sr-only">"Toggle sidebar"</span>
                        <i class="fas fa-bars"></i>
                    </button>
                    <h1 class="text-xl font-semibold text-fg">"PrepMate"</h1>
                </div>
                <div class="flex items-center gap-4">
                    <button
                        type="button"
                        class="p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        on:click=move |_| prefs.toggle_dark_mode()
                    >
                        <span class="sr-only">"Toggle dark mode"</span>
                        {move || if prefs.dark_mode.get() {
                            view! { <i class="fas fa-sun"></i> }
                        } else {
                            view! { <i class="fas fa-moon"></i> }
                        }}
                    </button>
                    <span class="hidden sm:inline text-sm text-fg-muted">{display_name}</span>
                    <button
                        type="button"
                        class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        on:click=on_sign_out
                    >
                        "Sign out"
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let prefs = use_prefs();
    view! {
        <Show when=move || prefs.sidebar_open.get()>
            <aside id="sidebar-nav" class="w-64 shrink-0 bg-surface-elevated border-r border-border min-h-screen">
                <nav class="px-3 py-4 space-y-1">
                    {NAV_ENTRIES.iter().map(|entry| view! {
                        <a
                            href=entry.href
                            class="flex items-center gap-3 text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        >
                            <i class=format!("fas {} w-4", entry.icon)></i>
                            {entry.label}
                        </a>
                    }).collect_view()}
                </nav>
            </aside>
        </Show>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Navbar/>
            <div class="flex">
                <Sidebar/>
                <main class="flex-1 max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                    {children()}
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn sidebar_lists_every_section() {
        let html = render_to_string(|| view! { <Sidebar/> });
        assert!(html.contains("Dashboard"));
        assert!(html.contains("Resume Q&amp;A") || html.contains("Resume Q&A"));
        assert!(html.contains("STAR Method"));
        assert!(html.contains("/resume-analysis"));
        assert!(html.contains("/quiz"));
    }

    #[test]
    fn navbar_shows_the_signed_in_name() {
        let html = render_to_string(|| {
            crate::test_support::provide_session(Some(crate::test_support::sample_user()));
            view! { <Navbar/> }
        });
        assert!(html.contains("Alice Example"));
        assert!(html.contains("Sign out"));
    }
}
