//! Media Events
//!
//! Lifecycle events queued by media elements and the document-level
//! fullscreen state.

/// Media event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaEvent {
    /// `loadedmetadata`: duration and dimensions are known
    LoadedMetadata,
    /// `canplay`: enough data to start playback
    CanPlay,
    /// `play`: paused flipped to false
    Play,
    /// `pause`: paused flipped to true
    Pause,
    /// `ended`: playback reached the end
    Ended,
    /// `volumechange`: volume or muted changed
    VolumeChange,
    /// `timeupdate`: current time moved
    TimeUpdate,
    /// `fullscreenchange`: fired on the fullscreen container
    FullscreenChange,
}

impl MediaEvent {
    /// DOM event name
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadedMetadata => "loadedmetadata",
            Self::CanPlay => "canplay",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Ended => "ended",
            Self::VolumeChange => "volumechange",
            Self::TimeUpdate => "timeupdate",
            Self::FullscreenChange => "fullscreenchange",
        }
    }
}

impl std::fmt::Display for MediaEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
