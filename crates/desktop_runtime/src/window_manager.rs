//! Window records and the operations that mutate them.
//!
//! Every window state change goes through [`WindowManager`], which keeps the invariant
//! `!mounted => !visible && !maximized` after each public operation and is the only source of new
//! z-index values.

use crate::{
    catalog::DesktopCatalog,
    model::{ResizeEdge, ResizeRequest, WindowControls, WindowKind, WindowRect},
    reducer::ReducerError,
    viewport::{Viewport, ViewportClass, ViewportClassifier},
};

/// Geometry, visibility, and stacking state of one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowState {
    kind: WindowKind,
    mounted: bool,
    visible: bool,
    maximized: bool,
    rect: WindowRect,
    z_index: u32,
}

impl WindowState {
    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Last non-maximized geometry. Maximized windows keep it untouched for restore.
    pub fn rect(&self) -> WindowRect {
        self.rect
    }

    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.visible = false;
        self.maximized = false;
    }
}

/// Owner of every [`WindowState`] and of the global z-index counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowManager {
    windows: [WindowState; 3],
    z_counter: u32,
    viewport: Viewport,
    classifier: ViewportClassifier,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(&DesktopCatalog::default(), Viewport::default())
    }
}

impl WindowManager {
    /// Creates unmounted windows at their catalog geometry and initial stacking order.
    pub fn new(catalog: &DesktopCatalog, viewport: Viewport) -> Self {
        let windows = WindowKind::ALL.map(|kind| {
            let defaults = catalog.window(kind);
            WindowState {
                kind,
                mounted: false,
                visible: false,
                maximized: false,
                rect: defaults.rect(),
                z_index: defaults.z_index,
            }
        });
        let max_initial = windows.iter().map(|w| w.z_index).max().unwrap_or(0);
        Self {
            windows,
            z_counter: catalog.z_counter_start.max(max_initial),
            viewport,
            classifier: ViewportClassifier::new(catalog.mobile_breakpoint),
        }
    }

    pub fn window(&self, kind: WindowKind) -> &WindowState {
        &self.windows[kind.index()]
    }

    pub fn windows(&self) -> impl Iterator<Item = &WindowState> {
        self.windows.iter()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn class(&self) -> ViewportClass {
        self.classifier.classify(self.viewport)
    }

    pub fn is_mobile(&self) -> bool {
        self.class() == ViewportClass::Mobile
    }

    pub fn any_maximized(&self) -> bool {
        self.windows.iter().any(|w| w.maximized)
    }

    /// Title-bar controls for `kind`. Mobile layouts expose only close.
    pub fn controls(&self, _kind: WindowKind) -> WindowControls {
        let desktop = !self.is_mobile();
        WindowControls {
            minimize: desktop,
            maximize: desktop,
            close: true,
        }
    }

    /// Records new viewport dimensions and reruns [`Self::relayout`] when the class changes.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Option<ViewportClass> {
        self.viewport = viewport;
        let transition = self.classifier.observe(viewport);
        if transition.is_some() {
            self.relayout();
        }
        transition
    }

    /// Applies the startup layout for the current viewport class.
    ///
    /// The browser window is always shown: maximized on mobile, centered and focused on desktop.
    /// Terminal and resume windows are closed.
    pub fn relayout(&mut self) {
        let mobile = self.is_mobile();
        let viewport = self.viewport;
        let browser = self.state_mut(WindowKind::Browser);
        browser.mounted = true;
        browser.visible = true;
        if mobile {
            browser.maximized = true;
        } else {
            browser.maximized = false;
            browser.rect = centered(browser.rect, viewport);
        }
        if !mobile {
            self.raise(WindowKind::Browser);
        }
        self.close(WindowKind::Terminal);
        self.close(WindowKind::Resume);
    }

    /// Mounts and shows `kind`, then focuses it.
    pub fn open(&mut self, kind: WindowKind) {
        let mobile = self.is_mobile();
        let viewport = self.viewport;
        let window = self.state_mut(kind);
        window.mounted = true;
        window.visible = true;
        if mobile {
            window.maximized = true;
        } else {
            window.maximized = false;
            window.rect = centered(window.rect, viewport);
        }
        self.raise(kind);
    }

    pub fn close(&mut self, kind: WindowKind) {
        self.state_mut(kind).unmount();
    }

    /// Hides `kind` while keeping it mounted. No-op on mobile layouts.
    ///
    /// # Errors
    ///
    /// Returns [`ReducerError::WindowNotMounted`] for unmounted windows.
    pub fn minimize(&mut self, kind: WindowKind) -> Result<(), ReducerError> {
        let mobile = self.is_mobile();
        let window = self.mounted_mut(kind)?;
        if mobile {
            return Ok(());
        }
        window.visible = false;
        window.maximized = false;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ReducerError::WindowNotMounted`] for unmounted windows.
    pub fn toggle_maximize(&mut self, kind: WindowKind) -> Result<(), ReducerError> {
        let window = self.mounted_mut(kind)?;
        window.maximized = !window.maximized;
        window.visible = true;
        Ok(())
    }

    /// Moves `kind` to `(x, y)`. Ignored while maximized.
    ///
    /// # Errors
    ///
    /// Returns [`ReducerError::WindowNotMounted`] for unmounted windows.
    pub fn move_to(&mut self, kind: WindowKind, x: i32, y: i32) -> Result<(), ReducerError> {
        let window = self.mounted_mut(kind)?;
        if !window.maximized {
            window.rect.x = x;
            window.rect.y = y;
        }
        Ok(())
    }

    /// Applies a resize request. Ignored while maximized.
    ///
    /// # Errors
    ///
    /// Returns [`ReducerError::WindowNotMounted`] for unmounted windows.
    pub fn resize(&mut self, kind: WindowKind, request: ResizeRequest) -> Result<(), ReducerError> {
        let window = self.mounted_mut(kind)?;
        if window.maximized {
            return Ok(());
        }
        window.rect.w = request.w;
        window.rect.h = request.h;
        if let Some(x) = request.x {
            window.rect.x = x;
        }
        if let Some(y) = request.y {
            window.rect.y = y;
        }
        Ok(())
    }

    /// Raises `kind` above every other window.
    ///
    /// # Errors
    ///
    /// Returns [`ReducerError::WindowNotMounted`] for unmounted windows.
    pub fn focus(&mut self, kind: WindowKind) -> Result<(), ReducerError> {
        self.mounted_mut(kind)?;
        self.raise(kind);
        Ok(())
    }

    /// Highest z-index currently assigned.
    pub fn top_z_index(&self) -> u32 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }

    fn raise(&mut self, kind: WindowKind) {
        self.z_counter = self.z_counter.saturating_add(1);
        let z_index = self.z_counter;
        self.state_mut(kind).z_index = z_index;
    }

    fn state_mut(&mut self, kind: WindowKind) -> &mut WindowState {
        &mut self.windows[kind.index()]
    }

    fn mounted_mut(&mut self, kind: WindowKind) -> Result<&mut WindowState, ReducerError> {
        let window = self.state_mut(kind);
        if window.mounted {
            Ok(window)
        } else {
            Err(ReducerError::WindowNotMounted(kind))
        }
    }
}

/// Centers `rect` in `viewport`, never placing it above or left of the origin.
pub fn centered(rect: WindowRect, viewport: Viewport) -> WindowRect {
    let center = |outer: i32, inner: i32| ((f64::from(outer - inner)) / 2.0).round() as i32;
    WindowRect {
        x: center(viewport.width, rect.w).max(0),
        y: center(viewport.height, rect.h).max(0),
        ..rect
    }
}

/// Applies resize deltas for a given edge/corner drag.
pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    match edge {
        ResizeEdge::East => WindowRect {
            w: start.w + dx,
            ..start
        },
        ResizeEdge::West => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            ..start
        },
        ResizeEdge::South => WindowRect {
            h: start.h + dy,
            ..start
        },
        ResizeEdge::North => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            ..start
        },
        ResizeEdge::NorthEast => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            w: start.w + dx,
            ..start
        },
        ResizeEdge::NorthWest => WindowRect {
            x: start.x + dx,
            y: start.y + dy,
            w: start.w - dx,
            h: start.h - dy,
        },
        ResizeEdge::SouthEast => WindowRect {
            w: start.w + dx,
            h: start.h + dy,
            ..start
        },
        ResizeEdge::SouthWest => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            h: start.h + dy,
            ..start
        },
    }
}
