//! fOS Media
//!
//! Media element state for the fOS player controls.
//!
//! Features:
//! - HTMLMediaElement, HTMLVideoElement
//! - Media lifecycle events
//! - Fullscreen and Picture-in-Picture
//! - `MediaHost`, the seam the controls are written against

pub mod element;
pub mod events;
pub mod fullscreen;
pub mod host;

pub use element::{HTMLMediaElement, HTMLVideoElement, MediaRect, ReadyState};
pub use events::MediaEvent;
pub use fullscreen::{FullscreenManager, PictureInPictureWindow, PipManager, PipRequest};
pub use host::{MediaHost, VideoSurface};

/// Media error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MediaError {
    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Not allowed: {0}")]
    NotAllowed(String),
}

/// Fullscreen error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FullscreenError {
    #[error("Fullscreen not allowed")]
    NotAllowed,

    #[error("Fullscreen not supported")]
    NotSupported,
}

/// Picture-in-Picture error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipError {
    #[error("Picture-in-Picture not supported")]
    NotSupported,

    #[error("Picture-in-Picture not allowed: {0}")]
    NotAllowed(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Picture-in-Picture request aborted")]
    Aborted,
}
