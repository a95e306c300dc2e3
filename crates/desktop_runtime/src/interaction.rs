//! Pointer-gesture state machine shared by every window.
//!
//! One [`InteractionController`] exists per window kind. It only reads geometry and writes it
//! back through [`WindowManager`] operations.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{
    model::{MinSize, PointerPosition, ResizeEdge, ResizeRequest, WindowKind, WindowRect},
    reducer::ReducerError,
    window_manager::{resize_rect, WindowManager},
};

/// Why a gesture could not start.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GestureRejection {
    #[error("window is maximized")]
    Maximized,
    #[error("another gesture is already active")]
    AlreadyActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging {
        origin_pointer: PointerPosition,
        origin_pos: PointerPosition,
    },
    Resizing {
        edge: ResizeEdge,
        origin_pointer: PointerPosition,
        origin_rect: WindowRect,
    },
}

/// Outcome of feeding one pointer-move event to a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureUpdate {
    /// No gesture is active.
    Ignored,
    /// Geometry was written back to the window manager.
    Applied,
    /// The window was closed mid-gesture; the controller is idle again.
    Voided,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionController {
    kind: WindowKind,
    floor: MinSize,
    phase: GesturePhase,
    transitions_enabled: bool,
}

impl InteractionController {
    pub fn new(kind: WindowKind, floor: MinSize) -> Self {
        Self {
            kind,
            floor,
            phase: GesturePhase::Idle,
            transitions_enabled: true,
        }
    }

    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != GesturePhase::Idle
    }

    /// Whether geometry changes may animate. Off from gesture start until the tick after release.
    pub fn transitions_enabled(&self) -> bool {
        self.transitions_enabled
    }

    /// Starts dragging from the title bar.
    ///
    /// # Errors
    ///
    /// Rejected for unmounted or maximized windows and while another gesture is active.
    pub fn begin_move(
        &mut self,
        windows: &WindowManager,
        pointer: PointerPosition,
    ) -> Result<(), ReducerError> {
        let rect = self.guard_entry(windows)?;
        self.phase = GesturePhase::Dragging {
            origin_pointer: pointer,
            origin_pos: PointerPosition {
                x: rect.x,
                y: rect.y,
            },
        };
        self.transitions_enabled = false;
        Ok(())
    }

    /// Starts resizing from one of the eight edge handles.
    ///
    /// # Errors
    ///
    /// Rejected for unmounted or maximized windows and while another gesture is active.
    pub fn begin_resize(
        &mut self,
        windows: &WindowManager,
        edge: ResizeEdge,
        pointer: PointerPosition,
    ) -> Result<(), ReducerError> {
        let rect = self.guard_entry(windows)?;
        self.phase = GesturePhase::Resizing {
            edge,
            origin_pointer: pointer,
            origin_rect: rect,
        };
        self.transitions_enabled = false;
        Ok(())
    }

    /// Applies a pointer move to the active gesture.
    ///
    /// # Errors
    ///
    /// Propagates window manager rejections; the mounted check above makes them unreachable in
    /// practice.
    pub fn pointer_move(
        &mut self,
        windows: &mut WindowManager,
        pointer: PointerPosition,
    ) -> Result<GestureUpdate, ReducerError> {
        if self.phase == GesturePhase::Idle {
            return Ok(GestureUpdate::Ignored);
        }
        if !windows.window(self.kind).is_mounted() {
            self.phase = GesturePhase::Idle;
            return Ok(GestureUpdate::Voided);
        }

        let viewport = windows.viewport();
        match self.phase {
            GesturePhase::Idle => return Ok(GestureUpdate::Ignored),
            GesturePhase::Dragging {
                origin_pointer,
                origin_pos,
            } => {
                let rect = windows.window(self.kind).rect();
                let x = clamp_axis(
                    origin_pos.x + pointer.x - origin_pointer.x,
                    viewport.width,
                    rect.w,
                );
                let y = clamp_axis(
                    origin_pos.y + pointer.y - origin_pointer.y,
                    viewport.height,
                    rect.h,
                );
                windows.move_to(self.kind, x, y)?;
            }
            GesturePhase::Resizing {
                edge,
                origin_pointer,
                origin_rect,
            } => {
                let proposed = resize_rect(
                    origin_rect,
                    edge,
                    pointer.x - origin_pointer.x,
                    pointer.y - origin_pointer.y,
                );
                let sized = proposed.clamped_min(self.floor);
                windows.resize(
                    self.kind,
                    ResizeRequest {
                        w: sized.w,
                        h: sized.h,
                        x: Some(clamp_axis(proposed.x, viewport.width, sized.w)),
                        y: Some(clamp_axis(proposed.y, viewport.height, sized.h)),
                    },
                )?;
            }
        }
        windows.focus(self.kind)?;
        Ok(GestureUpdate::Applied)
    }

    /// Ends the active gesture. Returns whether one was active.
    pub fn pointer_up(&mut self) -> bool {
        let was_active = self.is_active();
        self.phase = GesturePhase::Idle;
        was_active
    }

    pub fn enable_transitions(&mut self) {
        if !self.is_active() {
            self.transitions_enabled = true;
        }
    }

    fn guard_entry(&self, windows: &WindowManager) -> Result<WindowRect, ReducerError> {
        let window = windows.window(self.kind);
        if !window.is_mounted() {
            return Err(ReducerError::WindowNotMounted(self.kind));
        }
        let rejection = if window.is_maximized() {
            Some(GestureRejection::Maximized)
        } else if self.is_active() {
            Some(GestureRejection::AlreadyActive)
        } else {
            None
        };
        match rejection {
            Some(reason) => Err(ReducerError::GestureRejected {
                kind: self.kind,
                reason,
            }),
            None => Ok(window.rect()),
        }
    }
}

/// Clamps one axis so the window stays inside `[0, viewport - size]`.
pub fn clamp_axis(value: i32, viewport: i32, size: i32) -> i32 {
    value.clamp(0, (viewport - size).max(0))
}

/// Gesture controllers for every window, created on first use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    controllers: BTreeMap<WindowKind, InteractionController>,
}

impl InteractionState {
    pub fn controller(&self, kind: WindowKind) -> Option<&InteractionController> {
        self.controllers.get(&kind)
    }

    pub fn controller_mut(&mut self, kind: WindowKind, floor: MinSize) -> &mut InteractionController {
        self.controllers
            .entry(kind)
            .or_insert_with(|| InteractionController::new(kind, floor))
    }

    /// Whether geometry animation is currently allowed for `kind`.
    pub fn transitions_enabled(&self, kind: WindowKind) -> bool {
        self.controller(kind)
            .map(InteractionController::transitions_enabled)
            .unwrap_or(true)
    }

    pub fn is_active(&self, kind: WindowKind) -> bool {
        self.controller(kind)
            .map(InteractionController::is_active)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{catalog::DesktopCatalog, viewport::Viewport};

    const TERMINAL_FLOOR: MinSize = MinSize { w: 520, h: 360 };

    fn desktop_with_terminal() -> WindowManager {
        let viewport = Viewport::new(1280, 800);
        let mut windows = WindowManager::new(&DesktopCatalog::default(), viewport);
        windows.set_viewport(viewport);
        windows.open(WindowKind::Terminal);
        windows
    }

    #[test]
    fn drag_clamps_into_viewport_and_focuses() {
        let mut windows = desktop_with_terminal();
        let mut controller = InteractionController::new(WindowKind::Terminal, TERMINAL_FLOOR);
        controller
            .begin_move(&windows, PointerPosition { x: 500, y: 20 })
            .expect("begin");
        assert!(!controller.transitions_enabled());

        let z_before = windows.window(WindowKind::Terminal).z_index();
        let update = controller
            .pointer_move(&mut windows, PointerPosition { x: 5000, y: -900 })
            .expect("move");
        assert_eq!(update, GestureUpdate::Applied);
        let rect = windows.window(WindowKind::Terminal).rect();
        assert_eq!((rect.x, rect.y), (1280 - 960, 0));
        assert!(windows.window(WindowKind::Terminal).z_index() > z_before);
    }

    #[test]
    fn resize_clamps_to_floor_using_unclamped_position_delta() {
        let mut windows = desktop_with_terminal();
        let start = windows.window(WindowKind::Terminal).rect();
        let mut controller = InteractionController::new(WindowKind::Terminal, TERMINAL_FLOOR);
        controller
            .begin_resize(&windows, ResizeEdge::West, PointerPosition { x: 0, y: 0 })
            .expect("begin");
        controller
            .pointer_move(&mut windows, PointerPosition { x: 600, y: 0 })
            .expect("resize");

        let rect = windows.window(WindowKind::Terminal).rect();
        assert_eq!(rect.w, 520);
        assert_eq!(rect.h, start.h);
        assert_eq!(rect.x, (start.x + 600).min(1280 - 520));
    }

    #[test]
    fn maximized_window_rejects_gesture() {
        let mut windows = desktop_with_terminal();
        windows.toggle_maximize(WindowKind::Terminal).expect("maximize");
        let mut controller = InteractionController::new(WindowKind::Terminal, TERMINAL_FLOOR);
        assert_eq!(
            controller.begin_move(&windows, PointerPosition { x: 0, y: 0 }),
            Err(ReducerError::GestureRejected {
                kind: WindowKind::Terminal,
                reason: GestureRejection::Maximized,
            })
        );
        assert_eq!(controller.phase(), GesturePhase::Idle);
    }

    #[test]
    fn closing_mid_gesture_voids_it_silently() {
        let mut windows = desktop_with_terminal();
        let mut controller = InteractionController::new(WindowKind::Terminal, TERMINAL_FLOOR);
        controller
            .begin_move(&windows, PointerPosition { x: 10, y: 10 })
            .expect("begin");
        windows.close(WindowKind::Terminal);
        let before = windows.clone();

        let update = controller
            .pointer_move(&mut windows, PointerPosition { x: 50, y: 50 })
            .expect("void");
        assert_eq!(update, GestureUpdate::Voided);
        assert_eq!(windows, before);
        assert!(!controller.is_active());
        assert_eq!(
            controller
                .pointer_move(&mut windows, PointerPosition { x: 60, y: 60 })
                .expect("idle"),
            GestureUpdate::Ignored
        );
    }

    #[test]
    fn transitions_resume_only_after_release() {
        let windows = desktop_with_terminal();
        let mut controller = InteractionController::new(WindowKind::Terminal, TERMINAL_FLOOR);
        controller
            .begin_move(&windows, PointerPosition { x: 0, y: 0 })
            .expect("begin");
        controller.enable_transitions();
        assert!(!controller.transitions_enabled());
        assert!(controller.pointer_up());
        controller.enable_transitions();
        assert!(controller.transitions_enabled());
        assert!(!controller.pointer_up());
    }
}
