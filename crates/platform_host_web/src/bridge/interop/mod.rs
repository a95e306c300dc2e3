//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the bridge.

use platform_host::FullscreenChangeHandler;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub fn open_external_url(url: &str, target: &str) -> Result<(), String> {
    imp::open_external_url(url, target)
}

pub async fn request_fullscreen() -> Result<(), String> {
    imp::request_fullscreen().await
}

pub async fn exit_fullscreen() -> Result<(), String> {
    imp::exit_fullscreen().await
}

pub fn is_fullscreen() -> bool {
    imp::is_fullscreen()
}

pub fn on_fullscreen_change(handler: FullscreenChangeHandler) -> Result<(), String> {
    imp::on_fullscreen_change(handler)
}
