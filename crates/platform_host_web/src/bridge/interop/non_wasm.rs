use super::*;

fn unsupported_fullscreen() -> String {
    "Fullscreen API is only available when compiled for wasm32".to_string()
}

pub fn open_external_url(_url: &str, _target: &str) -> Result<(), String> {
    Err("window.open is only available when compiled for wasm32".to_string())
}

pub async fn request_fullscreen() -> Result<(), String> {
    Err(unsupported_fullscreen())
}

pub async fn exit_fullscreen() -> Result<(), String> {
    Err(unsupported_fullscreen())
}

pub fn is_fullscreen() -> bool {
    false
}

pub fn on_fullscreen_change(_handler: FullscreenChangeHandler) -> Result<(), String> {
    Ok(())
}
