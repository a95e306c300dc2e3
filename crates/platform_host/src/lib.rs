//! Typed host-domain contracts used across the desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the external-URL and
//! fullscreen service traits plus the host bundle injected into the runtime, while concrete
//! browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod fullscreen;
pub mod host;

pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService, RecordingExternalUrlService,
};
pub use fullscreen::{
    FullscreenChangeHandler, FullscreenFuture, FullscreenService, MemoryFullscreenService,
    NoopFullscreenService,
};
pub use host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};
