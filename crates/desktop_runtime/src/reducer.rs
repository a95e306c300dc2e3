//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use system_shell_contract::UrlTarget;
use thiserror::Error;

use crate::{
    catalog::DesktopCatalog,
    interaction::{GestureRejection, GestureUpdate, InteractionController, InteractionState},
    model::{FullscreenState, PointerPosition, ResizeEdge, WindowKind},
    viewport::Viewport,
    window_manager::WindowManager,
};

/// Desktop state owned by the runtime provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    pub catalog: DesktopCatalog,
    pub windows: WindowManager,
    pub fullscreen: FullscreenState,
}

impl DesktopState {
    pub fn new(catalog: DesktopCatalog, viewport: Viewport) -> Self {
        Self {
            windows: WindowManager::new(&catalog, viewport),
            catalog,
            fullscreen: FullscreenState::default(),
        }
    }

    /// Whether the shortcut grid and fullscreen toggle are shown.
    pub fn desktop_chrome_visible(&self) -> bool {
        !self.windows.any_maximized()
    }
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(DesktopCatalog::default(), Viewport::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Apply the startup layout for the initial viewport and request fullscreen.
    Boot {
        /// Viewport at load time.
        viewport: Viewport,
    },
    /// Display dimensions changed.
    ViewportChanged {
        /// New viewport.
        viewport: Viewport,
    },
    /// Mount, show, and focus a window.
    OpenWindow {
        /// Window to open.
        kind: WindowKind,
    },
    /// Unmount a window.
    CloseWindow {
        /// Window to close.
        kind: WindowKind,
    },
    /// Hide a window while keeping it mounted.
    MinimizeWindow {
        /// Window to minimize.
        kind: WindowKind,
    },
    /// Flip the maximized flag of a window.
    ToggleMaximize {
        /// Window to maximize or restore.
        kind: WindowKind,
    },
    /// Raise a window to the top of the stack.
    FocusWindow {
        /// Window to focus.
        kind: WindowKind,
    },
    /// Pointer went down on a title bar.
    BeginMove {
        /// Window being dragged.
        kind: WindowKind,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Pointer went down on a resize handle.
    BeginResize {
        /// Window being resized.
        kind: WindowKind,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Pointer moved during a gesture.
    PointerMove {
        /// Window owning the gesture.
        kind: WindowKind,
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer released or cancelled.
    PointerUp {
        /// Window owning the gesture.
        kind: WindowKind,
    },
    /// Re-enable geometry animation after a gesture.
    EnableTransitions {
        /// Window whose transitions resume.
        kind: WindowKind,
    },
    /// Enter or leave fullscreen presentation.
    ToggleFullscreen,
    /// The platform reported a fullscreen change.
    FullscreenChanged {
        /// Whether the document is now fullscreen.
        active: bool,
    },
    /// Open a URL outside the desktop.
    OpenExternalUrl {
        /// URL to open.
        url: String,
        /// Browsing-context target.
        target: UrlTarget,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host to execute.
pub enum RuntimeEffect {
    /// Start forwarding document pointer-move and pointer-up events for a window's gesture.
    AttachPointerListeners(WindowKind),
    /// Stop forwarding pointer events for a window.
    DetachPointerListeners(WindowKind),
    /// Dispatch [`DesktopAction::EnableTransitions`] after the current event-loop tick.
    EnableTransitionsNextTick(WindowKind),
    /// Move keyboard focus into the window's primary input.
    FocusWindowInput(WindowKind),
    /// Best-effort fullscreen request.
    RequestFullscreen,
    /// Best-effort fullscreen exit.
    ExitFullscreen,
    /// Open a URL outside the desktop.
    OpenExternalUrl {
        /// URL to open.
        url: String,
        /// Browsing-context target.
        target: UrlTarget,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that do not apply to the current state.
pub enum ReducerError {
    /// The target window is not mounted.
    #[error("window {0:?} is not mounted")]
    WindowNotMounted(WindowKind),
    /// A drag or resize could not start.
    #[error("{kind:?} gesture rejected: {reason}")]
    GestureRejected {
        /// Target window.
        kind: WindowKind,
        /// Rejection cause.
        reason: GestureRejection,
    },
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError`] when the action targets an unmounted window or a gesture cannot
/// start. State is left untouched in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::Boot { viewport } => {
            if state.windows.set_viewport(viewport).is_none() {
                state.windows.relayout();
            }
            effects.push(RuntimeEffect::RequestFullscreen);
        }
        DesktopAction::ViewportChanged { viewport } => {
            if state.windows.set_viewport(viewport).is_some() {
                for kind in WindowKind::ALL {
                    if !state.windows.window(kind).is_mounted() {
                        end_gesture(state, interaction, kind, &mut effects);
                    }
                }
            }
        }
        DesktopAction::OpenWindow { kind } => {
            state.windows.open(kind);
            effects.push(RuntimeEffect::FocusWindowInput(kind));
        }
        DesktopAction::CloseWindow { kind } => {
            state.windows.close(kind);
            end_gesture(state, interaction, kind, &mut effects);
        }
        DesktopAction::MinimizeWindow { kind } => {
            state.windows.minimize(kind)?;
        }
        DesktopAction::ToggleMaximize { kind } => {
            state.windows.toggle_maximize(kind)?;
        }
        DesktopAction::FocusWindow { kind } => {
            state.windows.focus(kind)?;
            effects.push(RuntimeEffect::FocusWindowInput(kind));
        }
        DesktopAction::BeginMove { kind, pointer } => {
            controller(state, interaction, kind).begin_move(&state.windows, pointer)?;
            state.windows.focus(kind)?;
            effects.push(RuntimeEffect::AttachPointerListeners(kind));
        }
        DesktopAction::BeginResize {
            kind,
            edge,
            pointer,
        } => {
            controller(state, interaction, kind).begin_resize(&state.windows, edge, pointer)?;
            state.windows.focus(kind)?;
            effects.push(RuntimeEffect::AttachPointerListeners(kind));
        }
        DesktopAction::PointerMove { kind, pointer } => {
            let floor = state.catalog.window(kind).min_size();
            let update = interaction
                .controller_mut(kind, floor)
                .pointer_move(&mut state.windows, pointer)?;
            if update == GestureUpdate::Voided {
                effects.push(RuntimeEffect::DetachPointerListeners(kind));
                effects.push(RuntimeEffect::EnableTransitionsNextTick(kind));
            }
        }
        DesktopAction::PointerUp { kind } => {
            end_gesture(state, interaction, kind, &mut effects);
        }
        DesktopAction::EnableTransitions { kind } => {
            controller(state, interaction, kind).enable_transitions();
        }
        DesktopAction::ToggleFullscreen => {
            effects.push(if state.fullscreen.active {
                RuntimeEffect::ExitFullscreen
            } else {
                RuntimeEffect::RequestFullscreen
            });
        }
        DesktopAction::FullscreenChanged { active } => {
            state.fullscreen.active = active;
        }
        DesktopAction::OpenExternalUrl { url, target } => {
            effects.push(RuntimeEffect::OpenExternalUrl { url, target });
        }
    }
    Ok(effects)
}

/// Drops any gesture on `kind` and releases its listeners.
fn end_gesture(
    state: &DesktopState,
    interaction: &mut InteractionState,
    kind: WindowKind,
    effects: &mut Vec<RuntimeEffect>,
) {
    if controller(state, interaction, kind).pointer_up() {
        effects.push(RuntimeEffect::DetachPointerListeners(kind));
        effects.push(RuntimeEffect::EnableTransitionsNextTick(kind));
    }
}

fn controller<'a>(
    state: &DesktopState,
    interaction: &'a mut InteractionState,
    kind: WindowKind,
) -> &'a mut InteractionController {
    interaction.controller_mut(kind, state.catalog.window(kind).min_size())
}
