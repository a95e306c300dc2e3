//! Desktop shell UI: shortcut grid, fullscreen toggle, and the three window frames.

mod window;

use leptos::*;
use system_shell_contract::UrlTarget;

use self::window::DesktopWindow;
use crate::{
    catalog::{DesktopShortcut, ShortcutTarget},
    icons::{FluentIcon, IconName, IconSize},
    model::{PointerPosition, ResizeEdge, WindowKind},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell UI.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let chrome_visible = create_memo(move |_| state.with(|s| s.desktop_chrome_visible()));

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            data-ui-kind="desktop-root"
            data-viewport=move || state.with(|s| if s.windows.is_mobile() { "mobile" } else { "desktop" })
        >
            <div class="desktop-backdrop" data-ui-kind="desktop-backdrop">
                <Show when=move || chrome_visible.get() fallback=|| ()>
                    <DesktopShortcutGrid />
                    <FullscreenToggle />
                </Show>

                <div class="desktop-window-layer" data-ui-kind="desktop-window-layer">
                    <For each=move || WindowKind::ALL key=|kind| *kind let:kind>
                        <DesktopWindow kind=kind />
                    </For>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DesktopShortcutGrid() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let shortcuts = move || runtime.state.with(|s| s.catalog.shortcuts.clone());

    view! {
        <nav class="desktop-icon-grid" data-ui-kind="desktop-icon-grid" aria-label="Desktop shortcuts">
            <For each=shortcuts key=|shortcut| shortcut.label.clone() let:shortcut>
                <DesktopShortcutButton shortcut=shortcut />
            </For>
        </nav>
    }
}

#[component]
fn DesktopShortcutButton(shortcut: DesktopShortcut) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let icon = IconName::from_shortcut_key(&shortcut.icon);
    let target = shortcut.target();
    let label = shortcut.label.clone();
    let activate = move |_| match target.clone() {
        Some(ShortcutTarget::Window(kind)) => {
            runtime.dispatch_action(DesktopAction::OpenWindow { kind });
        }
        Some(ShortcutTarget::Url(url)) => {
            runtime.dispatch_action(DesktopAction::OpenExternalUrl {
                url,
                target: UrlTarget::NewTab,
            });
        }
        None => logging::debug_warn!("desktop shortcut `{label}` has no target"),
    };

    view! {
        <button
            type="button"
            class="desktop-icon-button"
            data-ui-kind="desktop-icon-button"
            on:click=activate
        >
            <span class="desktop-icon-glyph">
                <FluentIcon icon=icon size=IconSize::Lg />
            </span>
            <span class="desktop-icon-label">{shortcut.label}</span>
        </button>
    }
}

#[component]
fn FullscreenToggle() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let active = move || runtime.state.with(|s| s.fullscreen.active);

    view! {
        <button
            type="button"
            class="desktop-fullscreen-toggle"
            aria-label=move || if active() { "Exit fullscreen" } else { "Enter fullscreen" }
            aria-pressed=move || active().to_string()
            on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleFullscreen)
        >
            {move || {
                let icon = if active() {
                    IconName::FullScreenMinimize
                } else {
                    IconName::FullScreenMaximize
                };
                view! { <FluentIcon icon=icon size=IconSize::Md /> }
            }}
        </button>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Whether a pointerdown should start a gesture: primary button for mice, primary contact
/// otherwise.
fn is_primary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}
