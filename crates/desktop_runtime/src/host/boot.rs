use std::rc::Rc;

use leptos::{create_effect, ev, logging, on_cleanup, window_event_listener, Callable, Callback};

use crate::{host::DesktopHostContext, reducer::DesktopAction};

pub(super) fn install_boot(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    let boot_host = host.clone();
    create_effect(move |booted: Option<()>| {
        if booted.is_some() {
            return;
        }
        dispatch.call(DesktopAction::Boot {
            viewport: boot_host.viewport(),
        });
    });

    let on_change = Rc::new(move |active: bool| {
        dispatch.call(DesktopAction::FullscreenChanged { active });
    });
    if let Err(err) = host.fullscreen_service().on_change(on_change) {
        logging::warn!("fullscreen change listener unavailable: {err}");
    }

    let viewport_host = host.clone();
    let resize_listener = window_event_listener(ev::resize, move |_| {
        dispatch.call(DesktopAction::ViewportChanged {
            viewport: viewport_host.viewport(),
        });
    });
    on_cleanup(move || resize_listener.remove());
}
