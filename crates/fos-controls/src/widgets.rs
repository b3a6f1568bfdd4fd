//! Overlay Widgets
//!
//! View state of the control overlay. Every field here is a projection of
//! media state written by the controller; nothing reads it back as truth.

use std::fmt;
use std::time::Duration;

use crate::config::Shortcuts;

/// Icon inside a button (`<use href="#name">`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: &'static str,
    pub hidden: bool,
}

/// Mutually exclusive icons of one button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    icons: Vec<Icon>,
}

impl IconSet {
    /// Icon set with `visible` shown and the rest hidden
    pub fn new(names: &[&'static str], visible: &str) -> Self {
        let icons = names
            .iter()
            .map(|&name| Icon {
                name,
                hidden: name != visible,
            })
            .collect();
        Self { icons }
    }

    /// Hide every icon except `name`
    pub fn show_only(&mut self, name: &str) {
        for icon in &mut self.icons {
            icon.hidden = icon.name != name;
        }
    }

    /// First visible icon
    pub fn visible(&self) -> Option<&'static str> {
        self.icons.iter().find(|i| !i.hidden).map(|i| i.name)
    }

    pub fn visible_count(&self) -> usize {
        self.icons.iter().filter(|i| !i.hidden).count()
    }

    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }
}

/// Button with a tooltip title (`data-title`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub title: String,
    pub disabled: bool,
    pub hidden: bool,
    pub icons: IconSet,
}

impl Button {
    pub fn new(title: String, icons: IconSet) -> Self {
        Self {
            title,
            disabled: false,
            hidden: false,
            icons,
        }
    }
}

/// Range input
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub value: f64,
    pub min: f64,
    /// `max` attribute, unset until known
    pub max: Option<f64>,
    /// Value saved while muted (`data-mute`)
    pub data_mute: Option<f64>,
    /// Pending seek position under the pointer (`data-position`)
    pub data_position: Option<f64>,
    /// Layout width in px
    pub client_width: f64,
}

impl Slider {
    pub fn new(value: f64, max: Option<f64>) -> Self {
        Self {
            value,
            min: 0.0,
            max,
            data_mute: None,
            data_position: None,
            client_width: 0.0,
        }
    }
}

/// `<progress>` bar
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Progress {
    pub value: f64,
    pub max: Option<f64>,
}

/// `<time>` label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLabel {
    pub text: String,
    pub datetime: String,
}

impl Default for TimeLabel {
    fn default() -> Self {
        Self {
            text: "00:00".into(),
            datetime: "00m 00s".into(),
        }
    }
}

/// Hover tooltip above the seek bar
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeekTooltip {
    pub text: String,
    /// `style.left` in px
    pub left: f64,
}

/// Control bar container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlBar {
    /// `hide` class present
    pub hide: bool,
}

/// Animation keyframe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub opacity: f32,
    pub scale: f32,
}

/// Play/pause pulse drawn over the video
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackAnimation {
    keyframes: [Keyframe; 2],
    duration: Duration,
    elapsed: Option<Duration>,
    plays: u32,
}

impl PlaybackAnimation {
    pub fn new() -> Self {
        Self {
            keyframes: [
                Keyframe { opacity: 0.6, scale: 1.0 },
                Keyframe { opacity: 0.0, scale: 1.3 },
            ],
            duration: Duration::ZERO,
            elapsed: None,
            plays: 0,
        }
    }

    /// Start the pulse over, replacing one in flight
    pub fn animate(&mut self, duration: Duration) {
        self.duration = duration;
        self.elapsed = Some(Duration::ZERO);
        self.plays += 1;
    }

    pub fn advance(&mut self, dt: Duration) {
        if let Some(elapsed) = self.elapsed {
            let elapsed = elapsed + dt;
            self.elapsed = (elapsed < self.duration).then_some(elapsed);
        }
    }

    pub fn is_running(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Number of pulses started
    pub fn plays(&self) -> u32 {
        self.plays
    }

    /// Current interpolated frame, `None` when idle
    pub fn frame(&self) -> Option<Keyframe> {
        let elapsed = self.elapsed?;
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        let [from, to] = self.keyframes;
        Some(Keyframe {
            opacity: from.opacity + (to.opacity - from.opacity) * t,
            scale: from.scale + (to.scale - from.scale) * t,
        })
    }
}

impl Default for PlaybackAnimation {
    fn default() -> Self {
        Self::new()
    }
}

pub const PLAY_ICON: &str = "play-icon";
pub const PAUSE_ICON: &str = "pause";
pub const VOLUME_MUTE_ICON: &str = "volume-mute";
pub const VOLUME_LOW_ICON: &str = "volume-low";
pub const VOLUME_HIGH_ICON: &str = "volume-high";
pub const FULLSCREEN_ICON: &str = "fullscreen";
pub const FULLSCREEN_EXIT_ICON: &str = "fullscreen-exit";
pub const PIP_ICON: &str = "pip";

/// All widgets of the player overlay
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub play_button: Button,
    pub volume_button: Button,
    pub volume: Slider,
    pub seek: Slider,
    pub progress: Progress,
    pub current_time: TimeLabel,
    pub total_time: TimeLabel,
    pub seek_tooltip: SeekTooltip,
    pub controls: ControlBar,
    pub fullscreen_button: Button,
    pub pip_button: Button,
    pub playback_animation: PlaybackAnimation,
}

impl Overlay {
    /// Markup defaults: paused, full volume, not fullscreen
    pub fn new(shortcuts: &Shortcuts) -> Self {
        Self {
            play_button: Button::new(
                format!("Play ({})", shortcuts.play),
                IconSet::new(&[PLAY_ICON, PAUSE_ICON], PLAY_ICON),
            ),
            volume_button: Button::new(
                format!("Mute ({})", shortcuts.mute),
                IconSet::new(
                    &[VOLUME_MUTE_ICON, VOLUME_LOW_ICON, VOLUME_HIGH_ICON],
                    VOLUME_HIGH_ICON,
                ),
            ),
            volume: Slider::new(1.0, Some(1.0)),
            seek: Slider::new(0.0, None),
            progress: Progress::default(),
            current_time: TimeLabel::default(),
            total_time: TimeLabel::default(),
            seek_tooltip: SeekTooltip {
                text: "00:00".into(),
                left: 0.0,
            },
            controls: ControlBar::default(),
            fullscreen_button: Button::new(
                format!("Full screen ({})", shortcuts.fullscreen),
                IconSet::new(&[FULLSCREEN_ICON, FULLSCREEN_EXIT_ICON], FULLSCREEN_ICON),
            ),
            pip_button: Button::new(
                format!("PIP ({})", shortcuts.pip),
                IconSet::new(&[PIP_ICON], PIP_ICON),
            ),
            playback_animation: PlaybackAnimation::new(),
        }
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new(&Shortcuts::default())
    }
}

fn opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = |b: &Button| b.icons.visible().unwrap_or("-");
        writeln!(f, "play        {} [{}]", icon(&self.play_button), self.play_button.title)?;
        writeln!(
            f,
            "volume      {} [{}] slider={}",
            icon(&self.volume_button),
            self.volume_button.title,
            self.volume.value
        )?;
        writeln!(
            f,
            "seek        value={} max={} position={}",
            self.seek.value,
            opt(self.seek.max),
            opt(self.seek.data_position)
        )?;
        writeln!(f, "progress    value={} max={}", self.progress.value, opt(self.progress.max))?;
        writeln!(f, "time        {} / {}", self.current_time.text, self.total_time.text)?;
        writeln!(f, "tooltip     {} @ {}px", self.seek_tooltip.text, self.seek_tooltip.left)?;
        writeln!(
            f,
            "fullscreen  {} [{}]",
            icon(&self.fullscreen_button),
            self.fullscreen_button.title
        )?;
        writeln!(
            f,
            "pip         hidden={} disabled={}",
            self.pip_button.hidden, self.pip_button.disabled
        )?;
        write!(
            f,
            "controls    {}",
            if self.controls.hide { "hidden" } else { "visible" }
        )
    }
}
