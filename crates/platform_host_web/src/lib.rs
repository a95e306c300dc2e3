//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Bridge bindings live under `bridge/`, with `bridge::interop` routing every call to the
//! `wasm32` JavaScript glue or to the non-wasm fallback.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod external_url;
pub mod fullscreen;

pub use adapters::{
    build_host_services, external_url_service, fullscreen_service, host_capabilities,
    host_strategy_name, selected_host_strategy, ExternalUrlServiceAdapter,
    FullscreenServiceAdapter,
};
pub use external_url::WebExternalUrlService;
pub use fullscreen::WebFullscreenService;
