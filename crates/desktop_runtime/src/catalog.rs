//! Window defaults, size floors, and desktop shortcuts embedded from `windows.toml`.

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    model::{MinSize, WindowKind, WindowRect},
    viewport::DEFAULT_MOBILE_BREAKPOINT,
};

include!(concat!(env!("OUT_DIR"), "/window_catalog_generated.rs"));

pub const WINDOW_CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures while loading the embedded window catalog.
pub enum CatalogError {
    /// The payload is not valid catalog JSON.
    #[error("window catalog parse failed: {0}")]
    Parse(String),
    /// The payload was produced for another schema version.
    #[error("window catalog schema mismatch: expected {expected} found {found}")]
    SchemaMismatch {
        /// Supported schema version.
        expected: u32,
        /// Version found in the payload.
        found: u32,
    },
    /// A window kind has no defaults.
    #[error("window catalog has no entry for {0:?}")]
    MissingWindow(WindowKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDefaults {
    pub kind: WindowKind,
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub z_index: u32,
    pub min_width: i32,
    pub min_height: i32,
}

impl WindowDefaults {
    fn builtin(kind: WindowKind) -> Self {
        match kind {
            WindowKind::Browser => Self {
                kind,
                title: "Browser".to_string(),
                x: 140,
                y: 60,
                width: 900,
                height: 560,
                z_index: 200,
                min_width: 520,
                min_height: 340,
            },
            WindowKind::Terminal => Self {
                kind,
                title: "Terminal".to_string(),
                x: 0,
                y: 0,
                width: 960,
                height: 640,
                z_index: 300,
                min_width: 520,
                min_height: 360,
            },
            WindowKind::Resume => Self {
                kind,
                title: "Resume".to_string(),
                x: 160,
                y: 80,
                width: 900,
                height: 560,
                z_index: 400,
                min_width: 520,
                min_height: 340,
            },
        }
    }

    pub fn rect(&self) -> WindowRect {
        WindowRect {
            x: self.x,
            y: self.y,
            w: self.width,
            h: self.height,
        }
    }

    pub fn min_size(&self) -> MinSize {
        MinSize {
            w: self.min_width,
            h: self.min_height,
        }
    }
}

/// What a desktop shortcut activates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutTarget {
    Window(WindowKind),
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopShortcut {
    pub label: String,
    pub icon: String,
    #[serde(default)]
    pub window: Option<WindowKind>,
    #[serde(default)]
    pub url: Option<String>,
}

impl DesktopShortcut {
    fn window(label: &str, icon: &str, kind: WindowKind) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            window: Some(kind),
            url: None,
        }
    }

    fn link(label: &str, icon: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            window: None,
            url: Some(url.to_string()),
        }
    }

    pub fn target(&self) -> Option<ShortcutTarget> {
        match (self.window, &self.url) {
            (Some(kind), _) => Some(ShortcutTarget::Window(kind)),
            (None, Some(url)) => Some(ShortcutTarget::Url(url.clone())),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopCatalog {
    pub schema_version: u32,
    pub mobile_breakpoint: i32,
    pub z_counter_start: u32,
    pub resume_document_path: String,
    pub browser_location: String,
    pub windows: Vec<WindowDefaults>,
    #[serde(default)]
    pub shortcuts: Vec<DesktopShortcut>,
}

impl Default for DesktopCatalog {
    fn default() -> Self {
        Self {
            schema_version: WINDOW_CATALOG_SCHEMA_VERSION,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            z_counter_start: 400,
            resume_document_path: "/resume.pdf".to_string(),
            browser_location: "https://portfolio.example.dev".to_string(),
            windows: WindowKind::ALL
                .into_iter()
                .map(WindowDefaults::builtin)
                .collect(),
            shortcuts: vec![
                DesktopShortcut::window("Browser", "browser", WindowKind::Browser),
                DesktopShortcut::window("Terminal", "terminal", WindowKind::Terminal),
                DesktopShortcut::link("LinkedIn", "linkedin", "https://www.linkedin.com/"),
                DesktopShortcut::link("GitHub", "github", "https://github.com/"),
                DesktopShortcut::link("Blog", "blog", "https://blog.example.dev/"),
                DesktopShortcut::window("Resume", "document", WindowKind::Resume),
            ],
        }
    }
}

impl DesktopCatalog {
    /// Parses a catalog payload.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] for malformed JSON, another schema version, or a missing window
    /// kind.
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|err| CatalogError::Parse(err.to_string()))?;
        if catalog.schema_version != WINDOW_CATALOG_SCHEMA_VERSION {
            return Err(CatalogError::SchemaMismatch {
                expected: WINDOW_CATALOG_SCHEMA_VERSION,
                found: catalog.schema_version,
            });
        }
        if let Some(kind) = WindowKind::ALL
            .into_iter()
            .find(|kind| !catalog.windows.iter().any(|w| w.kind == *kind))
        {
            return Err(CatalogError::MissingWindow(kind));
        }
        Ok(catalog)
    }

    /// Loads the embedded catalog, falling back to the built-in defaults.
    pub fn load() -> Self {
        match Self::parse(WINDOW_CATALOG_JSON) {
            Ok(catalog) => catalog,
            Err(err) => {
                logging::warn!("{err}; using built-in window catalog");
                Self::default()
            }
        }
    }

    pub fn window(&self, kind: WindowKind) -> WindowDefaults {
        self.windows
            .iter()
            .find(|w| w.kind == kind)
            .cloned()
            .unwrap_or_else(|| WindowDefaults::builtin(kind))
    }
}
