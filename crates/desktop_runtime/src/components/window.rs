use desktop_app_terminal::{TerminalApp, TerminalContent};
use system_shell_contract::{ShellEffect, UrlTarget};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::*;
use crate::window_manager::WindowState;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn window_style(win: &WindowState) -> String {
    if win.is_maximized() {
        return format!("z-index:{};", win.z_index());
    }
    let rect = win.rect();
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        rect.x,
        rect.y,
        rect.w,
        rect.h,
        win.z_index()
    )
}

fn window_class(win: &WindowState, transitions: bool, focused: bool) -> String {
    let mut class = format!("desktop-window window-{}", win.kind().slug());
    if focused {
        class.push_str(" focused");
    }
    if !win.is_visible() {
        class.push_str(" minimized");
    }
    if win.is_maximized() {
        class.push_str(" maximized");
    }
    if transitions {
        class.push_str(" animate-geometry");
    }
    class
}

#[component]
pub(super) fn DesktopWindow(kind: WindowKind) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let window = create_memo(move |_| state.with(|s| s.windows.window(kind).clone()));
    let mounted = create_memo(move |_| window.with(WindowState::is_mounted));
    let focused = create_memo(move |_| {
        state.with(|s| s.windows.window(kind).z_index() == s.windows.top_z_index())
    });
    let transitions =
        create_memo(move |_| runtime.interaction.with(|i| i.transitions_enabled(kind)));
    let controls = create_memo(move |_| state.with(|s| s.windows.controls(kind)));
    let title = state.with_untracked(|s| s.catalog.window(kind).title);

    let focus = move |_: web_sys::PointerEvent| {
        if !focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow { kind });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) || window.with_untracked(WindowState::is_maximized) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            kind,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        if controls.get_untracked().maximize {
            runtime.dispatch_action(DesktopAction::ToggleMaximize { kind });
        }
    };

    view! {
        <Show when=move || mounted.get() fallback=|| ()>
            <section
                class=move || window.with(|win| window_class(win, transitions.get(), focused.get()))
                style=move || window.with(window_style)
                data-window=kind.slug()
                on:pointerdown=focus
                role="dialog"
                aria-label=title.clone()
                aria-hidden=move || (!window.with(WindowState::is_visible)).to_string()
            >
                <header
                    class="titlebar"
                    on:pointerdown=begin_move
                    on:dblclick=titlebar_double_click
                >
                    <div class="titlebar-title">
                        <span class="titlebar-app-icon" aria-hidden="true">
                            <FluentIcon icon=IconName::from_shortcut_key(kind.slug()) size=IconSize::Sm />
                        </span>
                        <span>{title.clone()}</span>
                    </div>
                    <WindowControlButtons kind=kind window=window controls=controls />
                </header>
                <div class="window-body">
                    <WindowBody kind=kind />
                </div>
                <Show when=move || !window.with(WindowState::is_maximized) fallback=|| ()>
                    {ResizeEdge::ALL
                        .into_iter()
                        .map(|edge| view! { <WindowResizeHandle kind=kind edge=edge /> })
                        .collect_view()}
                </Show>
            </section>
        </Show>
    }
}

#[component]
fn WindowControlButtons(
    kind: WindowKind,
    window: Memo<WindowState>,
    controls: Memo<crate::model::WindowControls>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let swallow_pointer = move |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };
    let maximized = move || window.with(WindowState::is_maximized);

    view! {
        <div class="titlebar-controls">
            <Show when=move || controls.get().minimize fallback=|| ()>
                <button
                    type="button"
                    aria-label="Minimize window"
                    on:pointerdown=swallow_pointer
                    on:mousedown=move |ev| stop_mouse_event(&ev)
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        runtime.dispatch_action(DesktopAction::MinimizeWindow { kind });
                    }
                >
                    <FluentIcon icon=IconName::WindowMinimize size=IconSize::Xs />
                </button>
            </Show>
            <Show when=move || controls.get().maximize fallback=|| ()>
                <button
                    type="button"
                    aria-label=move || if maximized() { "Restore window" } else { "Maximize window" }
                    on:pointerdown=swallow_pointer
                    on:mousedown=move |ev| stop_mouse_event(&ev)
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        runtime.dispatch_action(DesktopAction::ToggleMaximize { kind });
                    }
                >
                    {move || {
                        let icon = if maximized() {
                            IconName::WindowRestore
                        } else {
                            IconName::WindowMaximize
                        };
                        view! { <FluentIcon icon=icon size=IconSize::Xs /> }
                    }}
                </button>
            </Show>
            <button
                type="button"
                class="titlebar-close"
                aria-label="Close window"
                on:pointerdown=swallow_pointer
                on:mousedown=move |ev| stop_mouse_event(&ev)
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::CloseWindow { kind });
                }
            >
                <FluentIcon icon=IconName::Dismiss size=IconSize::Xs />
            </button>
        </div>
    }
}

#[component]
fn WindowResizeHandle(kind: WindowKind, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            kind,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}

#[component]
fn WindowBody(kind: WindowKind) -> impl IntoView {
    match kind {
        WindowKind::Browser => view! { <BrowserBody /> }.into_view(),
        WindowKind::Terminal => view! { <TerminalBody /> }.into_view(),
        WindowKind::Resume => view! { <ResumeBody /> }.into_view(),
    }
}

#[component]
fn BrowserBody() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let (location, shortcuts) = runtime.state.with_untracked(|s| {
        (
            s.catalog.browser_location.clone(),
            s.catalog.shortcuts.clone(),
        )
    });
    let content = TerminalContent::default();

    let quick_links = shortcuts
        .into_iter()
        .filter(|shortcut| shortcut.window != Some(WindowKind::Browser))
        .filter_map(|shortcut| {
            let target = shortcut.target()?;
            let activate = move |_| match target.clone() {
                ShortcutTarget::Window(kind) => {
                    runtime.dispatch_action(DesktopAction::OpenWindow { kind });
                }
                ShortcutTarget::Url(url) => {
                    runtime.dispatch_action(DesktopAction::OpenExternalUrl {
                        url,
                        target: UrlTarget::NewTab,
                    });
                }
            };
            Some(view! {
                <button type="button" class="browser-quick-link" on:click=activate>
                    {shortcut.label}
                </button>
            })
        })
        .collect_view();

    view! {
        <div class="browser-body">
            <div class="browser-toolbar">
                <div class="browser-location" aria-label="Address">{location}</div>
            </div>
            <div class="browser-content">
                <section class="browser-hero">
                    <h1>{content.owner_name}</h1>
                    <p>{content.headline}</p>
                    <div class="browser-quick-links" role="group" aria-label="Quick links">
                        {quick_links}
                    </div>
                </section>
                <section class="browser-welcome">
                    {content
                        .about
                        .into_iter()
                        .map(|line| view! { <p>{line}</p> })
                        .collect_view()}
                    <p>"Open the terminal and type `help` to explore."</p>
                </section>
            </div>
        </div>
    }
}

#[component]
fn TerminalBody() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let resume_path = runtime
        .state
        .with_untracked(|s| s.catalog.resume_document_path.clone());
    let on_effect = Callback::new(move |effect: ShellEffect| match effect {
        ShellEffect::OpenUrl { url, target } => {
            runtime.dispatch_action(DesktopAction::OpenExternalUrl { url, target });
        }
        ShellEffect::ClearLog => {}
    });

    view! {
        <TerminalApp content=TerminalContent::with_resume_path(resume_path) on_effect=on_effect />
    }
}

#[component]
fn ResumeBody() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let path = runtime
        .state
        .with_untracked(|s| s.catalog.resume_document_path.clone());
    let frame_src = format!("{path}#toolbar=1&navpanes=0&scrollbar=1&view=FitH");

    view! {
        <div class="resume-body">
            <div class="resume-toolbar">
                <a class="resume-download app-action" href=path download="">
                    "Download"
                </a>
            </div>
            <div class="resume-frame">
                <iframe src=frame_src title="Resume document" />
            </div>
        </div>
    }
}
