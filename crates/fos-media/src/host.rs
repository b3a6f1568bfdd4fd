//! Media Host
//!
//! The surface a control overlay talks to: one video element plus the
//! document-level fullscreen and Picture-in-Picture state.

use std::collections::VecDeque;
use std::time::Duration;

use crate::element::HTMLVideoElement;
use crate::fullscreen::{FullscreenManager, PipManager, PipRequest};
use crate::{FullscreenError, MediaError, MediaEvent};

/// Playback state and commands of a hosted video element.
///
/// State is authoritative on the host side; callers read it per event and
/// never cache it. Commands that change state queue the matching
/// [`MediaEvent`]s, drained with [`MediaHost::take_events`].
pub trait MediaHost {
    fn paused(&self) -> bool;
    fn ended(&self) -> bool;
    fn muted(&self) -> bool;
    fn set_muted(&mut self, muted: bool);
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, time: f64);
    /// NaN until metadata is loaded
    fn duration(&self) -> f64;

    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);

    /// Whether the container is the fullscreen element
    fn is_fullscreen(&self) -> bool;
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError>;
    fn exit_fullscreen(&mut self);

    /// `document.pictureInPictureEnabled`
    fn picture_in_picture_enabled(&self) -> bool;
    /// Whether the video is `document.pictureInPictureElement`
    fn is_picture_in_picture(&self) -> bool;
    fn request_picture_in_picture(&mut self) -> PipRequest;
    fn exit_picture_in_picture(&mut self);

    /// Left edge of the video frame in page coordinates
    fn frame_left(&self) -> f64;

    /// Drain queued media events in firing order
    fn take_events(&mut self) -> Vec<MediaEvent>;
}

const VIDEO_ID: u64 = 1;
const CONTAINER_ID: u64 = 2;

/// In-process host for a single video inside its container
#[derive(Debug, Default)]
pub struct VideoSurface {
    pub video: HTMLVideoElement,
    pub fullscreen: FullscreenManager,
    pub pip: PipManager,
    events: VecDeque<MediaEvent>,
}

impl VideoSurface {
    pub fn new(video: HTMLVideoElement) -> Self {
        Self {
            video,
            fullscreen: FullscreenManager::new(),
            pip: PipManager::new(),
            events: VecDeque::new(),
        }
    }

    /// Replace the Picture-in-Picture manager
    pub fn with_pip(mut self, pip: PipManager) -> Self {
        self.pip = pip;
        self
    }

    /// Load metadata and buffer enough to play
    pub fn load(&mut self, duration: f64) {
        self.video.load_metadata(duration, 1280, 720);
        self.video.base.can_play();
        tracing::debug!(duration, src = %self.video.base.src, "media loaded");
    }

    /// Advance the playback clock
    pub fn advance(&mut self, elapsed: Duration) {
        self.video.base.advance(elapsed);
    }

    /// Resolve the outstanding Picture-in-Picture request
    pub fn settle_picture_in_picture(&mut self, result: Result<(), crate::PipError>) -> bool {
        if !self.pip.settle(result) {
            return false;
        }
        if let Some(window) = self.pip.pip_window() {
            tracing::debug!(
                width = window.width,
                height = window.height,
                "picture-in-picture window opened"
            );
        }
        true
    }
}

impl MediaHost for VideoSurface {
    fn paused(&self) -> bool {
        self.video.base.paused()
    }

    fn ended(&self) -> bool {
        self.video.base.ended()
    }

    fn muted(&self) -> bool {
        self.video.base.muted()
    }

    fn set_muted(&mut self, muted: bool) {
        self.video.base.set_muted(muted);
    }

    fn volume(&self) -> f64 {
        self.video.base.volume()
    }

    fn set_volume(&mut self, volume: f64) {
        self.video.base.set_volume(volume);
    }

    fn current_time(&self) -> f64 {
        self.video.base.current_time()
    }

    fn set_current_time(&mut self, time: f64) {
        self.video.base.seek(time);
    }

    fn duration(&self) -> f64 {
        self.video.base.duration()
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.video.base.play()
    }

    fn pause(&mut self) {
        self.video.base.pause();
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen.fullscreen_element == Some(CONTAINER_ID)
    }

    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        if self.fullscreen.request_fullscreen(CONTAINER_ID)? {
            self.events.push_back(MediaEvent::FullscreenChange);
        }
        Ok(())
    }

    fn exit_fullscreen(&mut self) {
        if self.fullscreen.exit_fullscreen() {
            self.events.push_back(MediaEvent::FullscreenChange);
        }
    }

    fn picture_in_picture_enabled(&self) -> bool {
        self.pip.enabled
    }

    fn is_picture_in_picture(&self) -> bool {
        self.pip.pip_element() == Some(VIDEO_ID)
    }

    fn request_picture_in_picture(&mut self) -> PipRequest {
        if self.video.base.ready_state < crate::ReadyState::HaveMetadata {
            return Box::pin(std::future::ready(Err(crate::PipError::InvalidState(
                "metadata not loaded".into(),
            ))));
        }
        self.pip
            .request_pip(VIDEO_ID, self.video.video_width, self.video.video_height)
    }

    fn exit_picture_in_picture(&mut self) {
        self.pip.exit_pip();
    }

    fn frame_left(&self) -> f64 {
        self.video.rect.x
    }

    fn take_events(&mut self) -> Vec<MediaEvent> {
        let mut events = self.video.base.take_events();
        events.extend(self.events.drain(..));
        events
    }
}
