use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const WINDOW_KINDS: [&str; 3] = ["browser", "terminal", "resume"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowEntry {
    kind: String,
    title: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    z_index: u32,
    min_width: i32,
    min_height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShortcutEntry {
    label: String,
    icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    window: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowCatalog {
    schema_version: u32,
    mobile_breakpoint: i32,
    z_counter_start: u32,
    resume_document_path: String,
    browser_location: String,
    windows: Vec<WindowEntry>,
    #[serde(default)]
    shortcuts: Vec<ShortcutEntry>,
}

fn validate(path: &std::path::Path, catalog: &WindowCatalog) {
    if catalog.schema_version != 1 {
        panic!(
            "window catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            catalog.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for window in &catalog.windows {
        if !WINDOW_KINDS.contains(&window.kind.as_str()) {
            panic!("unknown window kind `{}` in {}", window.kind, path.display());
        }
        if !seen.insert(window.kind.clone()) {
            panic!("duplicate window kind `{}` in {}", window.kind, path.display());
        }
        if window.width < window.min_width || window.height < window.min_height {
            panic!(
                "default size of `{}` is below its minimum size in {}",
                window.kind,
                path.display()
            );
        }
        if window.z_index > catalog.z_counter_start {
            panic!(
                "initial z-index of `{}` exceeds z_counter_start in {}",
                window.kind,
                path.display()
            );
        }
    }
    for kind in WINDOW_KINDS {
        if !seen.contains(kind) {
            panic!("missing window kind `{kind}` in {}", path.display());
        }
    }

    for shortcut in &catalog.shortcuts {
        match (&shortcut.window, &shortcut.url) {
            (Some(kind), None) if WINDOW_KINDS.contains(&kind.as_str()) => {}
            (None, Some(_)) => {}
            _ => panic!(
                "shortcut `{}` must name exactly one known window or url in {}",
                shortcut.label,
                path.display()
            ),
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("windows.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: WindowCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&path, &catalog);

    let json = serde_json::to_string_pretty(&catalog).expect("serialize window catalog");
    let generated = format!(
        "/// Build-time generated window catalog JSON.\n\
pub const WINDOW_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("window_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
