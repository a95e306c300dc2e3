//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; everything that touches the document (pointer listeners, focus,
//! fullscreen, navigation, timers) runs here behind the injected [`HostServices`] bundle.

mod boot;
mod host_ui;
mod pointer;

use std::{cell::RefCell, rc::Rc};

use leptos::{logging, Callback};
use platform_host::{
    CapabilityStatus, ExternalUrlService, FullscreenService, HostCapabilities, HostServices,
    HostStrategy,
};

use crate::{
    model::WindowKind,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
    viewport::Viewport,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    external_urls: Rc<dyn ExternalUrlService>,
    fullscreen: Rc<dyn FullscreenService>,
    capabilities: HostCapabilities,
    host_strategy: HostStrategy,
    pointer_listeners: Rc<RefCell<pointer::PointerListeners>>,
}

impl DesktopHostContext {
    /// Wraps the entry layer's service bundle.
    pub fn new(services: HostServices) -> Self {
        Self {
            external_urls: services.external_urls,
            fullscreen: services.fullscreen,
            capabilities: services.capabilities,
            host_strategy: services.host_strategy,
            pointer_listeners: Rc::default(),
        }
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.external_urls.clone()
    }

    /// Returns the configured fullscreen service.
    pub fn fullscreen_service(&self) -> Rc<dyn FullscreenService> {
        self.fullscreen.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy.as_str()
    }

    /// Dispatches the boot action and wires viewport and fullscreen change listeners.
    pub fn install_boot(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        if let Some(capability) = missing_capability(self.capabilities, &effect) {
            logging::debug_warn!(
                "{capability} unavailable on the {} host; dropping {effect:?}",
                self.host_strategy_name()
            );
            return;
        }
        match effect {
            RuntimeEffect::AttachPointerListeners(kind) => {
                pointer::attach(&self.pointer_listeners, runtime, kind);
            }
            RuntimeEffect::DetachPointerListeners(kind) => {
                pointer::detach(&self.pointer_listeners, kind);
            }
            RuntimeEffect::EnableTransitionsNextTick(kind) => {
                host_ui::enable_transitions_next_tick(runtime, kind);
            }
            RuntimeEffect::FocusWindowInput(kind) => self.focus_window_input(kind),
            RuntimeEffect::RequestFullscreen => host_ui::request_fullscreen(self.clone()),
            RuntimeEffect::ExitFullscreen => host_ui::exit_fullscreen(self.clone()),
            RuntimeEffect::OpenExternalUrl { url, target } => {
                host_ui::open_external_url(self.clone(), url, target.as_str());
            }
        }
    }

    /// Moves keyboard focus into the window's primary input, if it has one.
    pub fn focus_window_input(&self, kind: WindowKind) {
        host_ui::focus_window_input(kind);
    }

    /// Returns the current display dimensions.
    pub fn viewport(&self) -> Viewport {
        host_ui::current_viewport()
    }
}

/// Names the capability `effect` needs when the host cannot provide it.
fn missing_capability(
    capabilities: HostCapabilities,
    effect: &RuntimeEffect,
) -> Option<&'static str> {
    match effect {
        RuntimeEffect::RequestFullscreen | RuntimeEffect::ExitFullscreen
            if capabilities.fullscreen == CapabilityStatus::Unavailable =>
        {
            Some("fullscreen")
        }
        RuntimeEffect::OpenExternalUrl { .. }
            if capabilities.external_urls == CapabilityStatus::Unavailable =>
        {
            Some("external urls")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use system_shell_contract::UrlTarget;

    use super::*;

    #[test]
    fn stub_host_drops_fullscreen_and_url_effects() {
        let stub = HostCapabilities::stub();
        assert_eq!(
            missing_capability(stub, &RuntimeEffect::RequestFullscreen),
            Some("fullscreen")
        );
        assert_eq!(
            missing_capability(
                stub,
                &RuntimeEffect::OpenExternalUrl {
                    url: "https://example.dev".to_string(),
                    target: UrlTarget::NewTab,
                }
            ),
            Some("external urls")
        );
        assert_eq!(
            missing_capability(stub, &RuntimeEffect::FocusWindowInput(WindowKind::Terminal)),
            None
        );
    }

    #[test]
    fn browser_host_runs_every_effect() {
        let browser = HostCapabilities::browser();
        assert_eq!(missing_capability(browser, &RuntimeEffect::RequestFullscreen), None);
        assert_eq!(missing_capability(browser, &RuntimeEffect::ExitFullscreen), None);
    }
}
