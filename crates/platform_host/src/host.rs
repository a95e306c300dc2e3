//! Shared host-bundle and capability models for runtime composition.

use std::rc::Rc;

use crate::{
    ExternalUrlService, FullscreenService, NoopExternalUrlService, NoopFullscreenService,
};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Composition with no-op adapters, used off-browser and in tests.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Host availability state for one optional capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is available.
    Available,
    /// Capability is not supported on the active host.
    Unavailable,
    /// Capability exists but only works after a user gesture.
    RequiresUserActivation,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used immediately.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Host capability snapshot exposed to runtime wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// External URL opening availability.
    pub external_urls: CapabilityStatus,
    /// Fullscreen presentation availability.
    pub fullscreen: CapabilityStatus,
}

impl HostCapabilities {
    /// Browser-default capability posture. Fullscreen needs a user gesture in most engines.
    pub const fn browser() -> Self {
        Self {
            external_urls: CapabilityStatus::Available,
            fullscreen: CapabilityStatus::RequiresUserActivation,
        }
    }

    /// Capability posture of the stub host.
    pub const fn stub() -> Self {
        Self {
            external_urls: CapabilityStatus::Unavailable,
            fullscreen: CapabilityStatus::Unavailable,
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`.
#[derive(Clone)]
pub struct HostServices {
    /// External URL opening service.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Fullscreen presentation service.
    pub fullscreen: Rc<dyn FullscreenService>,
    /// Host availability snapshot.
    pub capabilities: HostCapabilities,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle of no-op services.
    pub fn stub() -> Self {
        Self {
            external_urls: Rc::new(NoopExternalUrlService),
            fullscreen: Rc::new(NoopFullscreenService),
            capabilities: HostCapabilities::stub(),
            host_strategy: HostStrategy::Stub,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stub_bundle_reports_stub_strategy() {
        let services = HostServices::stub();
        assert_eq!(services.host_strategy.as_str(), "stub");
        assert!(!services.capabilities.fullscreen.is_available());
        assert!(!services.fullscreen.is_fullscreen());
    }
}
