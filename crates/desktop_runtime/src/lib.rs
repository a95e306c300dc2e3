//! Simulated desktop runtime: window catalog, window manager, drag/resize interaction, reducer,
//! and the Leptos components that render the desktop.

pub mod catalog;
pub mod components;
mod effect_executor;
pub mod host;
pub mod icons;
pub mod interaction;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod viewport;
pub mod window_manager;

pub use catalog::{CatalogError, DesktopCatalog, DesktopShortcut, ShortcutTarget, WindowDefaults};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use interaction::{GesturePhase, GestureRejection, InteractionController, InteractionState};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, DesktopState, ReducerError, RuntimeEffect};
pub use viewport::{Viewport, ViewportClass, ViewportClassifier};
pub use window_manager::{WindowManager, WindowState};
