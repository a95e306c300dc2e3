//! Fullscreen host-service adapter for browser contexts.

use platform_host::{FullscreenChangeHandler, FullscreenFuture, FullscreenService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser fullscreen adapter backed by the document Fullscreen API.
pub struct WebFullscreenService;

impl FullscreenService for WebFullscreenService {
    fn request_fullscreen<'a>(&'a self) -> FullscreenFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::request_fullscreen().await })
    }

    fn exit_fullscreen<'a>(&'a self) -> FullscreenFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::exit_fullscreen().await })
    }

    fn is_fullscreen(&self) -> bool {
        bridge::is_fullscreen()
    }

    fn on_change(&self, handler: FullscreenChangeHandler) -> Result<(), String> {
        bridge::on_fullscreen_change(handler)
    }
}
