use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum WindowKind {
    Browser,
    Terminal,
    Resume,
}

impl WindowKind {
    pub const ALL: [WindowKind; 3] = [Self::Browser, Self::Terminal, Self::Resume];

    /// Position of the kind in [`Self::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Browser => 0,
            Self::Terminal => 1,
            Self::Resume => 2,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Terminal => "terminal",
            Self::Resume => "resume",
        }
    }

    /// DOM id of the element that should receive keyboard focus when the window is focused.
    pub fn primary_input_dom_id(self) -> Option<&'static str> {
        match self {
            Self::Terminal => Some(desktop_app_terminal::TERMINAL_INPUT_DOM_ID),
            Self::Browser | Self::Resume => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn clamped_min(self, floor: MinSize) -> Self {
        Self {
            w: self.w.max(floor.w),
            h: self.h.max(floor.h),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinSize {
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];
}

/// Geometry update for [`crate::WindowManager::resize`]. Position is only changed when supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeRequest {
    pub w: i32,
    pub h: i32,
    pub x: Option<i32>,
    pub y: Option<i32>,
}

/// Title-bar controls exposed for one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowControls {
    pub minimize: bool,
    pub maximize: bool,
    pub close: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FullscreenState {
    pub active: bool,
}
