//! External URL host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin};

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for opening external URLs outside the desktop shell.
pub trait ExternalUrlService {
    /// Opens `url` in the browsing context named by `target` (`_blank`, `_self`).
    fn open_url<'a>(
        &'a self,
        url: &'a str,
        target: &'a str,
    ) -> ExternalUrlFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for unsupported targets.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(
        &'a self,
        _url: &'a str,
        _target: &'a str,
    ) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Default)]
/// In-memory service that records every request, for headless hosts and tests.
pub struct RecordingExternalUrlService {
    opened: RefCell<Vec<(String, String)>>,
}

impl RecordingExternalUrlService {
    /// Returns `(url, target)` pairs in request order.
    pub fn opened(&self) -> Vec<(String, String)> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for RecordingExternalUrlService {
    fn open_url<'a>(
        &'a self,
        url: &'a str,
        target: &'a str,
    ) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.opened
                .borrow_mut()
                .push((url.to_string(), target.to_string()));
            Ok(())
        })
    }
}
