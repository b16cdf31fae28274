use web_sys::{Storage, Window};

/// Browser window handle. Errs on the host (tests, SSR) instead of
/// panicking through the wasm-bindgen shims.
pub fn window() -> Result<Window, String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err("No window object".to_string())
    }
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn get_string(key: &str) -> Option<String> {
    local_storage().ok()?.get_item(key).ok()?
}

pub fn set_string(key: &str, value: &str) -> Result<(), String> {
    local_storage()?
        .set_item(key, value)
        .map_err(|_| format!("Failed to persist {key}"))
}

pub fn remove(key: &str) {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn get_u32(key: &str) -> u32 {
    get_string(key)
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0)
}

pub fn set_u32(key: &str, value: u32) -> Result<(), String> {
    set_string(key, &value.to_string())
}

pub fn get_bool(key: &str, default: bool) -> bool {
    get_string(key)
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

pub fn set_bool(key: &str, value: bool) -> Result<(), String> {
    set_string(key, if value { "true" } else { "false" })
}
