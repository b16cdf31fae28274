fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting PrepMate frontend: initializing runtime config");

    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async {
        prepmate_frontend::config::init().await;
        log::info!("Runtime config initialized");
        prepmate_frontend::router::mount_app();
    });
}
