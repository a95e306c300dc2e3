//! Document-level pointer listeners that feed an active drag or resize gesture.
//!
//! Listeners are attached on gesture start and removed on release, cancel, or when the reducer
//! voids the gesture, so no pointer traffic reaches the reducer while every window is idle.

use std::{cell::RefCell, collections::BTreeMap};

use leptos::{ev, leptos_dom::helpers::WindowListenerHandle, window_event_listener, Callable};

use crate::{
    model::{PointerPosition, WindowKind},
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

pub(super) type PointerListeners = BTreeMap<WindowKind, Vec<WindowListenerHandle>>;

pub(super) fn attach(
    listeners: &RefCell<PointerListeners>,
    runtime: DesktopRuntimeContext,
    kind: WindowKind,
) {
    detach(listeners, kind);
    let dispatch = runtime.dispatch;
    let handles = vec![
        window_event_listener(ev::pointermove, move |ev| {
            dispatch.call(DesktopAction::PointerMove {
                kind,
                pointer: PointerPosition {
                    x: ev.client_x(),
                    y: ev.client_y(),
                },
            });
        }),
        window_event_listener(ev::pointerup, move |_| {
            dispatch.call(DesktopAction::PointerUp { kind });
        }),
        window_event_listener(ev::pointercancel, move |_| {
            dispatch.call(DesktopAction::PointerUp { kind });
        }),
    ];
    listeners.borrow_mut().insert(kind, handles);
}

pub(super) fn detach(listeners: &RefCell<PointerListeners>, kind: WindowKind) {
    let removed = listeners.borrow_mut().remove(&kind);
    for handle in removed.into_iter().flatten() {
        handle.remove();
    }
}
