//! Media Elements
//!
//! HTMLMediaElement and HTMLVideoElement playback state.

use std::collections::VecDeque;
use std::time::Duration;

use crate::{MediaError, MediaEvent};

/// Ready state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyState {
    #[default]
    HaveNothing = 0,
    HaveMetadata = 1,
    HaveCurrentData = 2,
    HaveFutureData = 3,
    HaveEnoughData = 4,
}

/// Base media element (shared between video/audio)
#[derive(Debug)]
pub struct HTMLMediaElement {
    pub src: String,
    pub ready_state: ReadyState,

    // Playback
    current_time: f64,
    duration: f64,
    paused: bool,
    ended: bool,
    pub loop_: bool,
    pub playback_rate: f64,

    // Volume
    volume: f64,
    muted: bool,

    events: VecDeque<MediaEvent>,
}

impl HTMLMediaElement {
    pub fn new() -> Self {
        Self {
            src: String::new(),
            ready_state: ReadyState::HaveNothing,
            current_time: 0.0,
            duration: f64::NAN,
            paused: true,
            ended: false,
            loop_: false,
            playback_rate: 1.0,
            volume: 1.0,
            muted: false,
            events: VecDeque::new(),
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn ended(&self) -> bool {
        self.ended
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Duration in seconds, NaN until metadata is loaded
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Play media
    pub fn play(&mut self) -> Result<(), MediaError> {
        if self.ready_state < ReadyState::HaveFutureData {
            return Err(MediaError::InvalidState("Not enough data".into()));
        }
        if self.ended {
            self.current_time = 0.0;
            self.ended = false;
            self.queue(MediaEvent::TimeUpdate);
        }
        if self.paused {
            self.paused = false;
            self.queue(MediaEvent::Play);
        }
        Ok(())
    }

    /// Pause media
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.queue(MediaEvent::Pause);
        }
    }

    /// Seek to time
    pub fn seek(&mut self, time: f64) {
        let time = if time.is_nan() { 0.0 } else { time.max(0.0) };
        self.current_time = if self.duration.is_finite() {
            time.min(self.duration)
        } else {
            time
        };
        if self.current_time < self.duration {
            self.ended = false;
        }
        self.queue(MediaEvent::TimeUpdate);
    }

    /// Set volume, clamped to [0, 1]
    pub fn set_volume(&mut self, volume: f64) {
        let volume = if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) };
        if volume != self.volume {
            self.volume = volume;
            self.queue(MediaEvent::VolumeChange);
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        if muted != self.muted {
            self.muted = muted;
            self.queue(MediaEvent::VolumeChange);
        }
    }

    /// Metadata arrived from the pipeline
    pub fn load_metadata(&mut self, duration: f64) {
        self.duration = duration;
        self.ready_state = self.ready_state.max(ReadyState::HaveMetadata);
        self.queue(MediaEvent::LoadedMetadata);
    }

    /// Enough data buffered to play through
    pub fn can_play(&mut self) {
        self.ready_state = ReadyState::HaveEnoughData;
        self.queue(MediaEvent::CanPlay);
    }

    /// Advance the playback clock by `elapsed` of wall time
    pub fn advance(&mut self, elapsed: Duration) {
        if self.paused {
            return;
        }

        self.current_time += elapsed.as_secs_f64() * self.playback_rate;

        if self.duration.is_finite() && self.current_time >= self.duration {
            if self.loop_ {
                self.current_time = 0.0;
                self.queue(MediaEvent::TimeUpdate);
                return;
            }
            self.current_time = self.duration;
            self.queue(MediaEvent::TimeUpdate);
            self.paused = true;
            self.ended = true;
            self.queue(MediaEvent::Pause);
            self.queue(MediaEvent::Ended);
        } else {
            self.queue(MediaEvent::TimeUpdate);
        }
    }

    /// Drain queued events in firing order
    pub fn take_events(&mut self) -> Vec<MediaEvent> {
        self.events.drain(..).collect()
    }

    fn queue(&mut self, event: MediaEvent) {
        self.events.push_back(event);
    }
}

impl Default for HTMLMediaElement {
    fn default() -> Self {
        Self::new()
    }
}

/// Horizontal extent of the element in page coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MediaRect {
    pub x: f64,
    pub width: f64,
}

/// HTML Video Element
#[derive(Debug, Default)]
pub struct HTMLVideoElement {
    pub base: HTMLMediaElement,
    pub rect: MediaRect,
    pub video_width: u32,
    pub video_height: u32,
}

impl HTMLVideoElement {
    pub fn new() -> Self {
        Self {
            base: HTMLMediaElement::new(),
            rect: MediaRect { x: 0.0, width: 320.0 },
            video_width: 0,
            video_height: 0,
        }
    }

    /// Create from URL
    pub fn from_url(src: &str) -> Self {
        let mut video = Self::new();
        video.base.src = src.to_string();
        video
    }

    /// Load metadata and intrinsic dimensions
    pub fn load_metadata(&mut self, duration: f64, video_width: u32, video_height: u32) {
        self.video_width = video_width;
        self.video_height = video_height;
        self.base.load_metadata(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_video(duration: f64) -> HTMLVideoElement {
        let mut video = HTMLVideoElement::from_url("clip.mp4");
        video.load_metadata(duration, 640, 360);
        video.base.can_play();
        video.base.take_events();
        video
    }

    #[test]
    fn test_video_element() {
        let video = HTMLVideoElement::new();
        assert!(video.base.paused());
        assert_eq!(video.base.volume(), 1.0);
        assert!(video.base.duration().is_nan());
    }

    #[test]
    fn test_play_requires_data() {
        let mut video = HTMLVideoElement::new();
        assert!(video.base.play().is_err());
        assert!(video.base.paused());
    }

    #[test]
    fn test_play_pause_events() {
        let mut video = ready_video(10.0);
        video.base.play().unwrap();
        video.base.play().unwrap();
        video.base.pause();
        assert_eq!(video.base.take_events(), vec![MediaEvent::Play, MediaEvent::Pause]);
    }

    #[test]
    fn test_volume_change_only_on_change() {
        let mut video = ready_video(10.0);
        video.base.set_volume(1.0);
        video.base.set_volume(1.7);
        assert!(video.base.take_events().is_empty());

        video.base.set_volume(0.25);
        video.base.set_muted(true);
        assert_eq!(
            video.base.take_events(),
            vec![MediaEvent::VolumeChange, MediaEvent::VolumeChange]
        );
    }

    #[test]
    fn test_seek_without_metadata() {
        let mut video = HTMLVideoElement::new();
        video.base.seek(12.0);
        assert_eq!(video.base.current_time(), 12.0);
        video.base.seek(-3.0);
        assert_eq!(video.base.current_time(), 0.0);
    }

    #[test]
    fn test_advance_to_end() {
        let mut video = ready_video(2.0);
        video.base.play().unwrap();
        video.base.take_events();

        video.base.advance(Duration::from_millis(1500));
        assert_eq!(video.base.take_events(), vec![MediaEvent::TimeUpdate]);

        video.base.advance(Duration::from_secs(1));
        assert!(video.base.paused());
        assert!(video.base.ended());
        assert_eq!(video.base.current_time(), 2.0);
        assert_eq!(
            video.base.take_events(),
            vec![MediaEvent::TimeUpdate, MediaEvent::Pause, MediaEvent::Ended]
        );

        // Playing again restarts from the top
        video.base.play().unwrap();
        assert_eq!(video.base.current_time(), 0.0);
        assert!(!video.base.ended());
    }
}
