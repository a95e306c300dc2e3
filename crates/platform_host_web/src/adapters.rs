use std::rc::Rc;

use platform_host::{
    ExternalUrlFuture, ExternalUrlService, FullscreenChangeHandler, FullscreenFuture,
    FullscreenService, HostCapabilities, HostServices, HostStrategy, NoopExternalUrlService,
    NoopFullscreenService,
};

use crate::{WebExternalUrlService, WebFullscreenService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Returns the capability posture of the selected host strategy.
pub const fn host_capabilities() -> HostCapabilities {
    match selected_host_strategy() {
        HostStrategy::Browser => HostCapabilities::browser(),
        HostStrategy::Stub => HostCapabilities::stub(),
    }
}

/// Adapter enum that erases the concrete external URL backend behind [`ExternalUrlService`].
#[derive(Debug, Clone, Copy)]
pub enum ExternalUrlServiceAdapter {
    /// Browser-backed `window.open`.
    Browser(WebExternalUrlService),
    /// No-op fallback.
    Stub(NoopExternalUrlService),
}

impl ExternalUrlService for ExternalUrlServiceAdapter {
    fn open_url<'a>(
        &'a self,
        url: &'a str,
        target: &'a str,
    ) -> ExternalUrlFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.open_url(url, target),
            Self::Stub(service) => service.open_url(url, target),
        }
    }
}

/// Adapter enum that erases the concrete fullscreen backend behind [`FullscreenService`].
#[derive(Debug, Clone, Copy)]
pub enum FullscreenServiceAdapter {
    /// Browser-backed document Fullscreen API.
    Browser(WebFullscreenService),
    /// No-op fallback.
    Stub(NoopFullscreenService),
}

impl FullscreenService for FullscreenServiceAdapter {
    fn request_fullscreen<'a>(&'a self) -> FullscreenFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.request_fullscreen(),
            Self::Stub(service) => service.request_fullscreen(),
        }
    }

    fn exit_fullscreen<'a>(&'a self) -> FullscreenFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.exit_fullscreen(),
            Self::Stub(service) => service.exit_fullscreen(),
        }
    }

    fn is_fullscreen(&self) -> bool {
        match self {
            Self::Browser(service) => service.is_fullscreen(),
            Self::Stub(service) => service.is_fullscreen(),
        }
    }

    fn on_change(&self, handler: FullscreenChangeHandler) -> Result<(), String> {
        match self {
            Self::Browser(service) => service.on_change(handler),
            Self::Stub(service) => service.on_change(handler),
        }
    }
}

/// Builds the external URL adapter for the compile-time selected host strategy.
pub fn external_url_service() -> ExternalUrlServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ExternalUrlServiceAdapter::Browser(WebExternalUrlService),
        HostStrategy::Stub => ExternalUrlServiceAdapter::Stub(NoopExternalUrlService),
    }
}

/// Builds the fullscreen adapter for the compile-time selected host strategy.
pub fn fullscreen_service() -> FullscreenServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => FullscreenServiceAdapter::Browser(WebFullscreenService),
        HostStrategy::Stub => FullscreenServiceAdapter::Stub(NoopFullscreenService),
    }
}

/// Assembles the [`HostServices`] bundle injected into the desktop runtime.
pub fn build_host_services() -> HostServices {
    HostServices {
        external_urls: Rc::new(external_url_service()),
        fullscreen: Rc::new(fullscreen_service()),
        capabilities: host_capabilities(),
        host_strategy: selected_host_strategy(),
    }
}
