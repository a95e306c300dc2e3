//! Fullscreen presentation host-service contracts.
//!
//! Requests are best-effort: hosts may refuse them (missing user activation, unsupported API), and
//! callers are expected to log the error and carry on. The authoritative state always comes from
//! change notifications, never from the request result.

use std::{
    cell::{Cell, RefCell},
    future::Future,
    pin::Pin,
    rc::Rc,
};

/// Object-safe boxed future used by [`FullscreenService`].
pub type FullscreenFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Callback invoked with the new fullscreen state after every change.
pub type FullscreenChangeHandler = Rc<dyn Fn(bool)>;

/// Host service for entering and leaving fullscreen presentation.
pub trait FullscreenService {
    /// Asks the host to present the document fullscreen.
    fn request_fullscreen<'a>(&'a self) -> FullscreenFuture<'a, Result<(), String>>;

    /// Asks the host to leave fullscreen presentation.
    fn exit_fullscreen<'a>(&'a self) -> FullscreenFuture<'a, Result<(), String>>;

    /// Returns whether the document is currently fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Registers `handler` for fullscreen changes for the lifetime of the page.
    fn on_change(&self, handler: FullscreenChangeHandler) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Fullscreen service for hosts without a fullscreen API. Requests succeed and change nothing.
pub struct NoopFullscreenService;

impl FullscreenService for NoopFullscreenService {
    fn request_fullscreen<'a>(&'a self) -> FullscreenFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn exit_fullscreen<'a>(&'a self) -> FullscreenFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn is_fullscreen(&self) -> bool {
        false
    }

    fn on_change(&self, _handler: FullscreenChangeHandler) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Default)]
/// In-memory fullscreen state that notifies handlers synchronously.
pub struct MemoryFullscreenService {
    active: Cell<bool>,
    handlers: RefCell<Vec<FullscreenChangeHandler>>,
}

impl MemoryFullscreenService {
    fn set_active(&self, active: bool) {
        if self.active.replace(active) == active {
            return;
        }
        let handlers = self.handlers.borrow().clone();
        for handler in handlers {
            handler(active);
        }
    }
}

impl FullscreenService for MemoryFullscreenService {
    fn request_fullscreen<'a>(&'a self) -> FullscreenFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.set_active(true);
            Ok(())
        })
    }

    fn exit_fullscreen<'a>(&'a self) -> FullscreenFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.set_active(false);
            Ok(())
        })
    }

    fn is_fullscreen(&self) -> bool {
        self.active.get()
    }

    fn on_change(&self, handler: FullscreenChangeHandler) -> Result<(), String> {
        self.handlers.borrow_mut().push(handler);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_service_reports_each_change_once() {
        let service = MemoryFullscreenService::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        service
            .on_change(Rc::new(move |active| sink.borrow_mut().push(active)))
            .expect("subscribe");

        block_on(service.request_fullscreen()).expect("request");
        block_on(service.request_fullscreen()).expect("request again");
        assert!(service.is_fullscreen());
        block_on(service.exit_fullscreen()).expect("exit");

        assert_eq!(*seen.borrow(), vec![true, false]);
        assert!(!service.is_fullscreen());
    }

    #[test]
    fn noop_service_never_enters_fullscreen() {
        block_on(NoopFullscreenService.request_fullscreen()).expect("request");
        assert!(!NoopFullscreenService.is_fullscreen());
    }
}
