use std::time::Duration;

use leptos::{logging, set_timeout, spawn_local, Callable};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::{
    host::DesktopHostContext,
    model::WindowKind,
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
    viewport::Viewport,
};

pub(super) fn focus_window_input(kind: WindowKind) {
    let Some(dom_id) = kind.primary_input_dom_id() else {
        return;
    };
    // Wait for the window body to mount before looking the input up.
    set_timeout(
        move || {
            #[cfg(target_arch = "wasm32")]
            {
                let Some(element) = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.get_element_by_id(dom_id))
                else {
                    return;
                };
                if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
                    let _ = element.focus();
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            let _ = dom_id;
        },
        Duration::ZERO,
    );
}

pub(super) fn enable_transitions_next_tick(runtime: DesktopRuntimeContext, kind: WindowKind) {
    set_timeout(
        move || {
            runtime
                .dispatch
                .call(DesktopAction::EnableTransitions { kind })
        },
        Duration::ZERO,
    );
}

pub(super) fn open_external_url(host: DesktopHostContext, url: String, target: &'static str) {
    spawn_local(async move {
        if let Err(err) = host.external_url_service().open_url(&url, target).await {
            logging::warn!("open external url failed for `{url}`: {err}");
        }
    });
}

pub(super) fn request_fullscreen(host: DesktopHostContext) {
    spawn_local(async move {
        if let Err(err) = host.fullscreen_service().request_fullscreen().await {
            logging::debug_warn!("fullscreen request refused: {err}");
        }
    });
}

pub(super) fn exit_fullscreen(host: DesktopHostContext) {
    spawn_local(async move {
        if let Err(err) = host.fullscreen_service().exit_fullscreen().await {
            logging::debug_warn!("fullscreen exit refused: {err}");
        }
    });
}

pub(super) fn current_viewport() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let default = Viewport::default();
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(default.width);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(default.height);
            return Viewport::new(width, height);
        }
    }

    Viewport::default()
}
