//! fOS Controls
//!
//! Custom playback controls for an fOS video element.
//!
//! Features:
//! - Play/pause, seek, volume and mute
//! - Fullscreen and Picture-in-Picture
//! - Keyboard shortcuts and auto-hiding control bar
//!
//! # Example
//! ```rust,ignore
//! use fos_controls::{ControlsConfig, PlaybackUIController, UiEvent, Target};
//! use fos_media::{HTMLVideoElement, VideoSurface};
//!
//! let surface = VideoSurface::new(HTMLVideoElement::from_url("clip.mp4"));
//! let mut controls = PlaybackUIController::new(surface, ControlsConfig::default());
//! controls.attach();
//! controls.dispatch(&UiEvent::click(Target::PlayButton));
//! controls.pump();
//! ```

mod config;
mod controller;
mod pip;
pub mod events;
pub mod format;
pub mod timer;
pub mod widgets;

pub use config::{ControlsConfig, Shortcuts};
pub use controller::{Action, PlaybackUIController, VolumeLevel};
pub use events::{EventDetail, EventRegistry, EventType, ListenerId, Target, UiEvent};
pub use format::{TimeParts, format_time};
pub use pip::{PipOutcome, PipTask};
pub use timer::{TimerId, TimerQueue};
pub use widgets::Overlay;

/// Controls error
#[derive(Debug, thiserror::Error)]
pub enum ControlsError {
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Media(#[from] fos_media::MediaError),

    #[error(transparent)]
    Fullscreen(#[from] fos_media::FullscreenError),
}
