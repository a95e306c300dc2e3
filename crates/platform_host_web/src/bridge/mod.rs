//! Browser capability bridge for `platform_host_web` service adapters.

mod interop;

use platform_host::FullscreenChangeHandler;

pub fn open_external_url(url: &str, target: &str) -> Result<(), String> {
    interop::open_external_url(url, target)
}

pub async fn request_fullscreen() -> Result<(), String> {
    interop::request_fullscreen().await
}

pub async fn exit_fullscreen() -> Result<(), String> {
    interop::exit_fullscreen().await
}

pub fn is_fullscreen() -> bool {
    interop::is_fullscreen()
}

pub fn on_fullscreen_change(handler: FullscreenChangeHandler) -> Result<(), String> {
    interop::on_fullscreen_change(handler)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn fullscreen_public_api_non_wasm_parity() {
        let expected = "Fullscreen API is only available when compiled for wasm32".to_string();
        assert_eq!(
            block_on(request_fullscreen()).expect_err("request should fail"),
            expected
        );
        assert_eq!(
            block_on(exit_fullscreen()).expect_err("exit should fail"),
            expected
        );
        assert!(!is_fullscreen());
        on_fullscreen_change(Rc::new(|_| {})).expect("subscribe is a no-op");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn external_url_public_api_non_wasm_parity() {
        assert_eq!(
            open_external_url("https://example.dev", "_blank").expect_err("open should fail"),
            "window.open is only available when compiled for wasm32"
        );
    }
}
