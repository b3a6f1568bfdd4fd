//! Picture-in-Picture Toggle
//!
//! The one asynchronous control. While a request is in flight the pip
//! button stays disabled; the lock is released when the task finishes,
//! fails, or is dropped.

use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use crate::widgets::Overlay;

/// Result of a Picture-in-Picture toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipOutcome {
    /// The video is now the Picture-in-Picture element
    Entered,
    /// Picture-in-Picture was exited
    Exited,
    /// The request was rejected
    Failed(String),
    /// A request was already in flight; nothing was sent
    Busy,
}

/// Disables the pip button for as long as it is held
pub(crate) struct ControlLock {
    overlay: Rc<RefCell<Overlay>>,
}

impl ControlLock {
    /// Take the lock, or `None` if the button is already disabled
    pub(crate) fn acquire(overlay: &Rc<RefCell<Overlay>>) -> Option<Self> {
        {
            let mut o = overlay.borrow_mut();
            if o.pip_button.disabled {
                return None;
            }
            o.pip_button.disabled = true;
        }
        Some(Self {
            overlay: Rc::clone(overlay),
        })
    }
}

impl Drop for ControlLock {
    fn drop(&mut self) {
        self.overlay.borrow_mut().pip_button.disabled = false;
    }
}

/// Pending Picture-in-Picture toggle
pub struct PipTask {
    inner: Pin<Box<dyn Future<Output = PipOutcome>>>,
}

impl PipTask {
    pub(crate) fn new(future: impl Future<Output = PipOutcome> + 'static) -> Self {
        Self {
            inner: Box::pin(future),
        }
    }

    pub(crate) fn ready(outcome: PipOutcome) -> Self {
        Self::new(std::future::ready(outcome))
    }
}

impl Future for PipTask {
    type Output = PipOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<PipOutcome> {
        self.inner.as_mut().poll(cx)
    }
}

impl fmt::Debug for PipTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipTask").finish_non_exhaustive()
    }
}
