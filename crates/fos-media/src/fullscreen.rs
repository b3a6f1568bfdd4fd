//! Fullscreen API
//!
//! Fullscreen and Picture-in-Picture.

use std::future::Future;
use std::pin::Pin;

use smol::channel::{self, Sender};

use crate::{FullscreenError, PipError};

/// Fullscreen manager
#[derive(Debug)]
pub struct FullscreenManager {
    pub fullscreen_element: Option<u64>, // Element ID
    pub fullscreen_enabled: bool,
}

impl FullscreenManager {
    pub fn new() -> Self {
        Self {
            fullscreen_element: None,
            fullscreen_enabled: true,
        }
    }

    /// Request fullscreen, returns whether the fullscreen element changed
    pub fn request_fullscreen(&mut self, element_id: u64) -> Result<bool, FullscreenError> {
        if !self.fullscreen_enabled {
            return Err(FullscreenError::NotAllowed);
        }
        let changed = self.fullscreen_element != Some(element_id);
        self.fullscreen_element = Some(element_id);
        Ok(changed)
    }

    /// Exit fullscreen, returns whether anything was fullscreen
    pub fn exit_fullscreen(&mut self) -> bool {
        self.fullscreen_element.take().is_some()
    }

    /// Check if in fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen_element.is_some()
    }
}

impl Default for FullscreenManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Outstanding Picture-in-Picture request, resolved when the platform settles it
pub type PipRequest = Pin<Box<dyn Future<Output = Result<(), PipError>>>>;

/// Picture-in-Picture window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PictureInPictureWindow {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug)]
struct PendingRequest {
    element_id: u64,
    window: PictureInPictureWindow,
    sender: Sender<Result<(), PipError>>,
}

/// Picture-in-Picture manager
#[derive(Debug)]
pub struct PipManager {
    /// `document.pictureInPictureEnabled`
    pub enabled: bool,
    pip_element: Option<u64>,
    pip_window: Option<PictureInPictureWindow>,
    pending: Option<PendingRequest>,
}

impl PipManager {
    pub fn new() -> Self {
        Self {
            enabled: true,
            pip_element: None,
            pip_window: None,
            pending: None,
        }
    }

    /// Manager for a platform without Picture-in-Picture
    pub fn unsupported() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    /// Request PiP; the returned future resolves once `settle` is called
    pub fn request_pip(&mut self, element_id: u64, width: u32, height: u32) -> PipRequest {
        if !self.enabled {
            return Box::pin(std::future::ready(Err(PipError::NotSupported)));
        }
        if self.pending.is_some() {
            return Box::pin(std::future::ready(Err(PipError::InvalidState(
                "request already pending".into(),
            ))));
        }

        let (sender, receiver) = channel::bounded(1);
        self.pending = Some(PendingRequest {
            element_id,
            window: PictureInPictureWindow { width, height },
            sender,
        });

        Box::pin(async move { receiver.recv().await.unwrap_or(Err(PipError::Aborted)) })
    }

    /// Settle the pending request. Returns false if nothing was pending.
    pub fn settle(&mut self, result: Result<(), PipError>) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        if result.is_ok() {
            self.pip_element = Some(pending.element_id);
            self.pip_window = Some(pending.window);
        }
        // Receiver may already be gone if the requester dropped its task
        let _ = pending.sender.try_send(result);
        true
    }

    /// Exit PiP
    pub fn exit_pip(&mut self) {
        self.pip_element = None;
        self.pip_window = None;
    }

    /// `document.pictureInPictureElement`
    pub fn pip_element(&self) -> Option<u64> {
        self.pip_element
    }

    pub fn pip_window(&self) -> Option<&PictureInPictureWindow> {
        self.pip_window.as_ref()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for PipManager {
    fn default() -> Self {
        Self::new()
    }
}
