use leptos::*;

// Resource loads are suppressed so fetchers never fire off-browser.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    leptos_reactive::suppress_resource_load(true);
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    leptos_reactive::suppress_resource_load(false);
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(|| view().into_view().render_to_string().to_string())
}

/// Single-threaded async runtime for tests that spawn local futures.
pub fn with_local_runtime_async<F, Fut>(f: F)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = ()>,
{
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    tokio::task::LocalSet::new().block_on(&rt, f());
}
