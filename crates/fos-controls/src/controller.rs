//! Playback UI Controller
//!
//! Keeps the overlay widgets in step with the media element and turns
//! user gestures into media commands. Every handler reads media state
//! fresh, writes widgets, and returns; nothing is cached between events.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use std::time::Duration;

use fos_media::MediaHost;
use smol::LocalExecutor;

use crate::config::ControlsConfig;
use crate::events::{EventDetail, EventRegistry, EventType, ListenerId, Target, UiEvent};
use crate::format::format_time;
use crate::pip::{ControlLock, PipOutcome, PipTask};
use crate::timer::{TimerId, TimerQueue};
use crate::widgets::{
    FULLSCREEN_EXIT_ICON, FULLSCREEN_ICON, Overlay, PAUSE_ICON, PLAY_ICON, VOLUME_HIGH_ICON,
    VOLUME_LOW_ICON, VOLUME_MUTE_ICON,
};
use crate::ControlsError;

/// Handler bound to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TogglePlay,
    /// Video surface click: toggle and pulse
    TogglePlayAnimated,
    ToggleMute,
    ToggleFullScreen,
    TogglePip,
    UpdatePlayButton,
    UpdateVolumeIcon,
    UpdateVolume,
    UpdateFullScreenButton,
    InitializeVideo,
    UpdateProgress,
    UpdateCurrentTime,
    UpdateSeekTooltip,
    UpdatePlayback,
    ShowControls,
    HideControls,
    KeyboardShortcuts,
    CheckPipSupport,
}

const BINDINGS: &[(Target, EventType, Action)] = &[
    (Target::PlayButton, EventType::Click, Action::TogglePlay),
    (Target::VolumeButton, EventType::Click, Action::ToggleMute),
    (Target::FullscreenButton, EventType::Click, Action::ToggleFullScreen),
    (Target::PipButton, EventType::Click, Action::TogglePip),
    (Target::Container, EventType::FullscreenChange, Action::UpdateFullScreenButton),
    (Target::Volume, EventType::Input, Action::UpdateVolume),
    (Target::Video, EventType::LoadedMetadata, Action::InitializeVideo),
    (Target::Video, EventType::Play, Action::UpdatePlayButton),
    (Target::Video, EventType::Pause, Action::UpdatePlayButton),
    (Target::Video, EventType::VolumeChange, Action::UpdateVolumeIcon),
    (Target::Video, EventType::MouseEnter, Action::ShowControls),
    (Target::Video, EventType::MouseOver, Action::ShowControls),
    (Target::Video, EventType::MouseLeave, Action::HideControls),
    (Target::Video, EventType::TimeUpdate, Action::UpdateProgress),
    (Target::Video, EventType::TimeUpdate, Action::UpdateCurrentTime),
    (Target::Video, EventType::Click, Action::TogglePlayAnimated),
    (Target::Controls, EventType::MouseLeave, Action::HideControls),
    (Target::Controls, EventType::MouseOver, Action::ShowControls),
    (Target::Seek, EventType::Input, Action::UpdatePlayback),
    (Target::Seek, EventType::MouseMove, Action::UpdateSeekTooltip),
    (Target::Document, EventType::KeyUp, Action::KeyboardShortcuts),
    (Target::Document, EventType::DOMContentLoaded, Action::CheckPipSupport),
];

/// Volume icon classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeLevel {
    Muted,
    Low,
    High,
}

impl VolumeLevel {
    /// `muted ∨ volume = 0` → Muted, `(0, 0.5]` → Low, otherwise High
    pub fn classify(muted: bool, volume: f64) -> Self {
        if muted || volume == 0.0 {
            Self::Muted
        } else if volume > 0.0 && volume <= 0.5 {
            Self::Low
        } else {
            Self::High
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Muted => VOLUME_MUTE_ICON,
            Self::Low => VOLUME_LOW_ICON,
            Self::High => VOLUME_HIGH_ICON,
        }
    }
}

/// Control overlay bound to one media element
pub struct PlaybackUIController<M: MediaHost> {
    media: M,
    overlay: Rc<RefCell<Overlay>>,
    config: ControlsConfig,
    registry: EventRegistry<Action>,
    listeners: Vec<ListenerId>,
    timers: TimerQueue<Action>,
    auto_hide: Option<TimerId>,
    tasks: LocalExecutor<'static>,
}

impl<M: MediaHost> PlaybackUIController<M> {
    pub fn new(media: M, config: ControlsConfig) -> Self {
        let overlay = Overlay::new(&config.shortcuts);
        Self {
            media,
            overlay: Rc::new(RefCell::new(overlay)),
            config,
            registry: EventRegistry::new(),
            listeners: Vec::new(),
            timers: TimerQueue::new(),
            auto_hide: None,
            tasks: LocalExecutor::new(),
        }
    }

    /// Subscribe every binding and run the load-time capability check
    pub fn attach(&mut self) {
        if self.is_attached() {
            return;
        }
        for &(target, event_type, action) in BINDINGS {
            let id = self.registry.subscribe(target, event_type, action);
            self.listeners.push(id);
        }
        self.check_pip_support();
        tracing::debug!(listeners = self.listeners.len(), "controls attached");
    }

    /// Unsubscribe everything attached; later events are ignored
    pub fn detach(&mut self) {
        for id in self.listeners.drain(..) {
            self.registry.unsubscribe(id);
        }
        self.cancel_auto_hide();
        tracing::debug!("controls detached");
    }

    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn overlay(&self) -> Ref<'_, Overlay> {
        self.overlay.borrow()
    }

    pub fn overlay_mut(&self) -> RefMut<'_, Overlay> {
        self.overlay.borrow_mut()
    }

    pub fn config(&self) -> &ControlsConfig {
        &self.config
    }

    /// Whether an auto-hide timer is armed
    pub fn auto_hide_pending(&self) -> bool {
        self.auto_hide.is_some_and(|id| self.timers.is_pending(id))
    }

    // ------------------------------------------------------------------
    // Event loop
    // ------------------------------------------------------------------

    /// Run the listeners bound to the event's target and type
    pub fn dispatch(&mut self, event: &UiEvent) {
        if event.event_type == EventType::Click && self.is_disabled(event.target) {
            tracing::trace!(element = ?event.target, "click on disabled control dropped");
            return;
        }

        for action in self.registry.actions_for(event.target, event.event_type) {
            tracing::trace!(?action, element = ?event.target, event = ?event.event_type, "dispatch");
            if let Err(err) = self.run(action, &event.detail) {
                tracing::warn!(%err, ?action, "control action failed");
            }
        }
    }

    /// Deliver queued media events and run ready background tasks
    pub fn pump(&mut self) {
        loop {
            let events = self.media.take_events();
            let mut progressed = !events.is_empty();

            for event in events {
                if let Some(event) = UiEvent::from_media(event) {
                    self.dispatch(&event);
                }
            }
            while self.tasks.try_tick() {
                progressed = true;
            }

            if !progressed {
                break;
            }
        }
    }

    /// Advance timers and animations by `elapsed`
    pub fn tick(&mut self, elapsed: Duration) {
        for (id, action) in self.timers.advance(elapsed) {
            if self.auto_hide == Some(id) {
                self.auto_hide = None;
            }
            if let Err(err) = self.run(action, &EventDetail::None) {
                tracing::warn!(%err, ?action, "timer action failed");
            }
        }
        self.overlay.borrow_mut().playback_animation.advance(elapsed);
    }

    fn run(&mut self, action: Action, detail: &EventDetail) -> Result<(), ControlsError> {
        match action {
            Action::TogglePlay => self.toggle_play()?,
            Action::TogglePlayAnimated => {
                let toggled = self.toggle_play();
                self.animate_playback();
                toggled?;
            }
            Action::ToggleMute => self.toggle_mute(),
            Action::ToggleFullScreen => self.toggle_full_screen()?,
            Action::TogglePip => {
                let task = self.toggle_pip();
                self.spawn(task);
            }
            Action::UpdatePlayButton => self.update_play_button(),
            Action::UpdateVolumeIcon => self.update_volume_icon(),
            Action::UpdateVolume => self.update_volume(input_value(detail)),
            Action::UpdateFullScreenButton => self.update_full_screen_button(),
            Action::InitializeVideo => self.initialize_video(),
            Action::UpdateProgress => self.update_progress(),
            Action::UpdateCurrentTime => self.update_current_time(),
            Action::UpdateSeekTooltip => {
                if let EventDetail::Pointer { offset_x, page_x } = *detail {
                    self.update_seek_tooltip(offset_x, page_x);
                }
            }
            Action::UpdatePlayback => self.update_playback(input_value(detail)),
            Action::ShowControls => self.show_controls(),
            Action::HideControls => self.hide_controls(),
            Action::KeyboardShortcuts => {
                if let EventDetail::Key { key } = detail {
                    self.keyboard_shortcuts(key)?;
                }
            }
            Action::CheckPipSupport => self.check_pip_support(),
        }
        Ok(())
    }

    fn is_disabled(&self, target: Target) -> bool {
        let overlay = self.overlay.borrow();
        match target {
            Target::PlayButton => overlay.play_button.disabled,
            Target::VolumeButton => overlay.volume_button.disabled,
            Target::FullscreenButton => overlay.fullscreen_button.disabled,
            Target::PipButton => overlay.pip_button.disabled,
            _ => false,
        }
    }

    fn spawn(&self, task: PipTask) {
        self.tasks
            .spawn(async move {
                let outcome = task.await;
                tracing::debug!(?outcome, "picture-in-picture toggle settled");
            })
            .detach();
    }

    // ------------------------------------------------------------------
    // Playback
    // ------------------------------------------------------------------

    /// Play if paused or ended, pause otherwise
    pub fn toggle_play(&mut self) -> Result<(), ControlsError> {
        if self.media.paused() || self.media.ended() {
            self.media.play()?;
        } else {
            self.media.pause();
        }
        Ok(())
    }

    /// Swap play/pause icons and title to match the paused flag
    pub fn update_play_button(&mut self) {
        let paused = self.media.paused();
        {
            let key = self.config.shortcuts.play;
            let mut overlay = self.overlay.borrow_mut();
            if paused {
                overlay.play_button.icons.show_only(PLAY_ICON);
                overlay.play_button.title = format!("Play ({key})");
            } else {
                overlay.play_button.icons.show_only(PAUSE_ICON);
                overlay.play_button.title = format!("Pause ({key})");
            }
        }
        if paused {
            self.show_controls();
            self.cancel_auto_hide();
        }
    }

    /// Restart the play/pause pulse
    pub fn animate_playback(&mut self) {
        let duration = self.config.pulse_duration();
        self.overlay.borrow_mut().playback_animation.animate(duration);
    }

    // ------------------------------------------------------------------
    // Volume
    // ------------------------------------------------------------------

    /// Flip muted, parking the slider value in `data-mute` while muted
    pub fn toggle_mute(&mut self) {
        let muted = !self.media.muted();
        self.media.set_muted(muted);

        let mut overlay = self.overlay.borrow_mut();
        let slider = &mut overlay.volume;
        if muted {
            slider.data_mute = Some(slider.value);
            slider.value = 0.0;
        } else if let Some(saved) = slider.data_mute {
            slider.value = saved;
        }
    }

    /// Show exactly one volume icon for the current volume
    pub fn update_volume_icon(&mut self) {
        let level = VolumeLevel::classify(self.media.muted(), self.media.volume());
        let key = self.config.shortcuts.mute;

        let mut overlay = self.overlay.borrow_mut();
        overlay.volume_button.icons.show_only(level.icon());
        overlay.volume_button.title = match level {
            VolumeLevel::Muted => format!("Unmute ({key})"),
            _ => format!("Mute ({key})"),
        };
    }

    /// Volume slider input: unmute, then apply the slider value
    pub fn update_volume(&mut self, value: Option<f64>) {
        let volume = {
            let mut overlay = self.overlay.borrow_mut();
            if let Some(value) = value {
                overlay.volume.value = value.clamp(0.0, 1.0);
            }
            overlay.volume.value
        };

        if self.media.muted() {
            self.media.set_muted(false);
        }
        self.media.set_volume(volume);
    }

    // ------------------------------------------------------------------
    // Fullscreen
    // ------------------------------------------------------------------

    /// Request or exit fullscreen on the container. The button follows the
    /// `fullscreenchange` event, not this call.
    pub fn toggle_full_screen(&mut self) -> Result<(), ControlsError> {
        if self.media.is_fullscreen() {
            self.media.exit_fullscreen();
        } else {
            self.media.request_fullscreen()?;
        }
        Ok(())
    }

    pub fn update_full_screen_button(&mut self) {
        let fullscreen = self.media.is_fullscreen();
        let key = self.config.shortcuts.fullscreen;

        let mut overlay = self.overlay.borrow_mut();
        if fullscreen {
            overlay.fullscreen_button.icons.show_only(FULLSCREEN_EXIT_ICON);
            overlay.fullscreen_button.title = format!("Exit full screen ({key})");
        } else {
            overlay.fullscreen_button.icons.show_only(FULLSCREEN_ICON);
            overlay.fullscreen_button.title = format!("Full screen ({key})");
        }
    }

    // ------------------------------------------------------------------
    // Picture-in-Picture
    // ------------------------------------------------------------------

    /// Enter or exit Picture-in-Picture.
    ///
    /// Entering disables the pip button until the returned task completes.
    /// A rejected request is logged and reported as [`PipOutcome::Failed`];
    /// the button is re-enabled either way, and also if the task is dropped.
    pub fn toggle_pip(&mut self) -> PipTask {
        if self.media.is_picture_in_picture() {
            self.media.exit_picture_in_picture();
            return PipTask::ready(PipOutcome::Exited);
        }

        let Some(lock) = ControlLock::acquire(&self.overlay) else {
            tracing::debug!("picture-in-picture request already in flight");
            return PipTask::ready(PipOutcome::Busy);
        };
        let request = self.media.request_picture_in_picture();

        PipTask::new(async move {
            let _lock = lock;
            match request.await {
                Ok(()) => PipOutcome::Entered,
                Err(err) => {
                    tracing::error!(%err, "picture-in-picture request failed");
                    PipOutcome::Failed(err.to_string())
                }
            }
        })
    }

    /// Hide the pip button when the platform has no Picture-in-Picture
    pub fn check_pip_support(&mut self) {
        if !self.media.picture_in_picture_enabled() {
            self.overlay.borrow_mut().pip_button.hidden = true;
            tracing::debug!("picture-in-picture unsupported, hiding control");
        }
    }

    // ------------------------------------------------------------------
    // Time and seeking
    // ------------------------------------------------------------------

    /// `loadedmetadata`: size the seek and progress bars, render total time
    pub fn initialize_video(&mut self) {
        let duration = self.media.duration();
        if !duration.is_finite() {
            tracing::warn!(duration, "metadata without a finite duration");
            return;
        }

        let duration = duration.round();
        let parts = format_time(duration);

        let mut overlay = self.overlay.borrow_mut();
        overlay.seek.max = Some(duration);
        overlay.progress.max = Some(duration);
        overlay.total_time.text = parts.label();
        overlay.total_time.datetime = parts.datetime();
    }

    /// Move seek and progress to the whole seconds played
    pub fn update_progress(&mut self) {
        let current = self.media.current_time().floor();
        let duration = self.media.duration();

        let mut overlay = self.overlay.borrow_mut();
        if overlay.progress.max.is_none() && duration.is_finite() {
            overlay.progress.max = Some(duration);
        }
        overlay.seek.value = current;
        overlay.progress.value = current;
    }

    pub fn update_current_time(&mut self) {
        let parts = format_time(self.media.current_time().round());

        let mut overlay = self.overlay.borrow_mut();
        overlay.current_time.text = parts.label();
        overlay.current_time.datetime = parts.datetime();
    }

    /// Pointer over the seek bar: stash the hovered time and place the tooltip
    pub fn update_seek_tooltip(&mut self, offset_x: f64, page_x: f64) {
        let frame_left = self.media.frame_left();

        let mut overlay = self.overlay.borrow_mut();
        let (Some(max), width) = (overlay.seek.max, overlay.seek.client_width) else {
            tracing::trace!("seek max unset, tooltip skipped");
            return;
        };
        if width <= 0.0 {
            return;
        }

        let hover_time = (offset_x / width) * max.trunc();
        overlay.seek.data_position = Some(hover_time);
        overlay.seek_tooltip.text = format_time(hover_time).label();
        overlay.seek_tooltip.left = page_x - frame_left;
    }

    /// Seek input: commit the stashed position to the media and both bars
    pub fn update_playback(&mut self, input: Option<f64>) {
        let Some(position) = self.overlay.borrow().seek.data_position.or(input) else {
            return;
        };

        self.media.set_current_time(position);
        let applied = self.media.current_time();
        let mut overlay = self.overlay.borrow_mut();
        overlay.seek.value = applied;
        overlay.progress.value = applied;
    }

    // ------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------

    pub fn show_controls(&mut self) {
        self.overlay.borrow_mut().controls.hide = false;
    }

    /// Hide the control bar, unless paused
    pub fn hide_controls(&mut self) {
        if self.media.paused() {
            return;
        }
        self.overlay.borrow_mut().controls.hide = true;
    }

    /// Schedule a hide, replacing any pending one
    fn arm_auto_hide(&mut self) {
        self.cancel_auto_hide();
        let delay = self.config.auto_hide_delay();
        self.auto_hide = Some(self.timers.schedule(delay, Action::HideControls));
    }

    fn cancel_auto_hide(&mut self) {
        if let Some(id) = self.auto_hide.take() {
            self.timers.cancel(id);
        }
    }

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    /// Document `keyup`. Keys other than the configured shortcuts are ignored.
    pub fn keyboard_shortcuts(&mut self, key: &str) -> Result<(), ControlsError> {
        let mut chars = key.chars();
        let (Some(key), None) = (chars.next(), chars.next()) else {
            return Ok(());
        };
        let shortcuts = self.config.shortcuts.clone();

        if key == shortcuts.play {
            let toggled = self.toggle_play();
            self.animate_playback();
            if self.media.paused() {
                self.show_controls();
                self.cancel_auto_hide();
            } else {
                self.arm_auto_hide();
            }
            toggled?;
        } else if key == shortcuts.mute {
            self.toggle_mute();
        } else if key == shortcuts.fullscreen {
            self.toggle_full_screen()?;
        } else if key == shortcuts.pip {
            let task = self.toggle_pip();
            self.spawn(task);
        }
        Ok(())
    }
}

fn input_value(detail: &EventDetail) -> Option<f64> {
    match *detail {
        EventDetail::Input { value } => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fos_media::{HTMLVideoElement, PipManager, VideoSurface};

    fn controller() -> PlaybackUIController<VideoSurface> {
        let mut surface = VideoSurface::new(HTMLVideoElement::from_url("clip.mp4"));
        surface.load(125.0);
        let mut controller = PlaybackUIController::new(surface, ControlsConfig::default());
        controller.attach();
        controller.pump();
        controller
    }

    #[test]
    fn test_volume_partition() {
        assert_eq!(VolumeLevel::classify(true, 0.8), VolumeLevel::Muted);
        assert_eq!(VolumeLevel::classify(false, 0.0), VolumeLevel::Muted);
        assert_eq!(VolumeLevel::classify(false, 0.01), VolumeLevel::Low);
        assert_eq!(VolumeLevel::classify(false, 0.5), VolumeLevel::Low);
        assert_eq!(VolumeLevel::classify(false, 0.51), VolumeLevel::High);
        assert_eq!(VolumeLevel::classify(false, 1.0), VolumeLevel::High);
    }

    #[test]
    fn test_volume_partition_grid() {
        for step in 0..=100 {
            let volume = f64::from(step) / 100.0;
            let expected = if step == 0 {
                VolumeLevel::Muted
            } else if step <= 50 {
                VolumeLevel::Low
            } else {
                VolumeLevel::High
            };
            assert_eq!(VolumeLevel::classify(false, volume), expected, "volume {volume}");
            assert_eq!(VolumeLevel::classify(true, volume), VolumeLevel::Muted);
        }
    }

    #[test]
    fn test_attach_is_idempotent() {
        let mut controller = controller();
        let listeners = controller.listeners.len();
        controller.attach();
        assert_eq!(controller.listeners.len(), listeners);
        assert_eq!(controller.registry.len(), BINDINGS.len());
    }

    #[test]
    fn test_detach_clears_registry() {
        let mut controller = controller();
        controller.detach();
        assert!(!controller.is_attached());
        assert!(controller.registry.is_empty());
    }

    #[test]
    fn test_initialize_video() {
        let controller = controller();
        let overlay = controller.overlay();
        assert_eq!(overlay.total_time.text, "02:05");
        assert_eq!(overlay.total_time.datetime, "02m 05s");
        assert_eq!(overlay.seek.max, Some(125.0));
        assert_eq!(overlay.progress.max, Some(125.0));
    }

    #[test]
    fn test_initialize_rounds_duration() {
        let mut surface = VideoSurface::new(HTMLVideoElement::new());
        surface.load(59.6);
        let mut controller = PlaybackUIController::new(surface, ControlsConfig::default());
        controller.initialize_video();
        assert_eq!(controller.overlay().seek.max, Some(60.0));
        assert_eq!(controller.overlay().total_time.text, "01:00");
    }

    #[test]
    fn test_initialize_skips_unknown_duration() {
        let surface = VideoSurface::new(HTMLVideoElement::new());
        let mut controller = PlaybackUIController::new(surface, ControlsConfig::default());
        controller.initialize_video();
        assert_eq!(controller.overlay().seek.max, None);
        assert_eq!(controller.overlay().total_time.text, "00:00");
    }

    #[test]
    fn test_progress_max_set_lazily() {
        let mut surface = VideoSurface::new(HTMLVideoElement::new());
        surface.load(90.0);
        surface.video.base.take_events();
        let mut controller = PlaybackUIController::new(surface, ControlsConfig::default());
        controller.media_mut().set_current_time(12.7);
        controller.update_progress();

        let overlay = controller.overlay();
        assert_eq!(overlay.progress.max, Some(90.0));
        assert_eq!(overlay.progress.value, 12.0);
        assert_eq!(overlay.seek.value, 12.0);
    }

    #[test]
    fn test_current_time_label_rounds() {
        let mut controller = controller();
        controller.media_mut().set_current_time(61.6);
        controller.update_current_time();
        assert_eq!(controller.overlay().current_time.text, "01:02");
        assert_eq!(controller.overlay().current_time.datetime, "01m 02s");
    }

    #[test]
    fn test_seek_tooltip() {
        let mut controller = controller();
        {
            let mut overlay = controller.overlay_mut();
            overlay.seek.max = Some(120.0);
            overlay.seek.client_width = 200.0;
        }
        controller.media_mut().video.rect.x = 10.0;
        controller.update_seek_tooltip(50.0, 75.0);

        let overlay = controller.overlay();
        assert_eq!(overlay.seek.data_position, Some(30.0));
        assert_eq!(overlay.seek_tooltip.text, "00:30");
        assert_eq!(overlay.seek_tooltip.left, 65.0);
        assert_eq!(controller.media().current_time(), 0.0);
    }

    #[test]
    fn test_seek_tooltip_without_width() {
        let mut controller = controller();
        controller.update_seek_tooltip(50.0, 50.0);
        assert_eq!(controller.overlay().seek.data_position, None);
    }

    #[test]
    fn test_update_playback_aligns_all_three() {
        let mut controller = controller();
        controller.overlay_mut().seek.data_position = Some(42.0);
        controller.update_playback(Some(3.0));

        assert_eq!(controller.media().current_time(), 42.0);
        assert_eq!(controller.overlay().seek.value, 42.0);
        assert_eq!(controller.overlay().progress.value, 42.0);
    }

    #[test]
    fn test_update_playback_falls_back_to_input() {
        let mut controller = controller();
        controller.update_playback(Some(7.0));
        assert_eq!(controller.media().current_time(), 7.0);
        assert_eq!(controller.overlay().progress.value, 7.0);
    }

    #[test]
    fn test_hide_refused_while_paused() {
        let mut controller = controller();
        controller.hide_controls();
        assert!(!controller.overlay().controls.hide);

        controller.overlay_mut().controls.hide = true;
        controller.show_controls();
        assert!(!controller.overlay().controls.hide);
    }

    #[test]
    fn test_toggle_mute_restores_slider() {
        let mut controller = controller();
        controller.overlay_mut().volume.value = 0.7;

        controller.toggle_mute();
        assert!(controller.media().muted());
        assert_eq!(controller.overlay().volume.value, 0.0);
        assert_eq!(controller.overlay().volume.data_mute, Some(0.7));

        controller.toggle_mute();
        assert!(!controller.media().muted());
        assert_eq!(controller.overlay().volume.value, 0.7);
    }

    #[test]
    fn test_toggle_mute_from_zero() {
        let mut controller = controller();
        controller.overlay_mut().volume.value = 0.0;
        controller.toggle_mute();
        controller.toggle_mute();
        assert_eq!(controller.overlay().volume.value, 0.0);
    }

    #[test]
    fn test_unmute_without_saved_value() {
        let mut controller = controller();
        controller.media_mut().set_muted(true);
        controller.overlay_mut().volume.value = 0.4;
        controller.toggle_mute();
        assert!(!controller.media().muted());
        assert_eq!(controller.overlay().volume.value, 0.4);
    }

    #[test]
    fn test_update_volume_unmutes() {
        let mut controller = controller();
        controller.media_mut().set_muted(true);
        controller.update_volume(Some(0.3));
        assert!(!controller.media().muted());
        assert_eq!(controller.media().volume(), 0.3);
        assert_eq!(controller.overlay().volume.value, 0.3);
    }

    #[test]
    fn test_update_volume_clamps() {
        let mut controller = controller();
        controller.update_volume(Some(1.5));
        assert_eq!(controller.media().volume(), 1.0);
    }

    #[test]
    fn test_unknown_key_is_noop() {
        let mut controller = controller();
        let before = controller.overlay().clone();
        controller.keyboard_shortcuts("x").unwrap();
        controller.keyboard_shortcuts("Enter").unwrap();
        controller.keyboard_shortcuts("").unwrap();
        controller.pump();
        assert_eq!(*controller.overlay(), before);
        assert!(controller.media().paused());
    }

    #[test]
    fn test_pip_hidden_when_unsupported() {
        let surface = VideoSurface::new(HTMLVideoElement::new()).with_pip(PipManager::unsupported());
        let mut controller = PlaybackUIController::new(surface, ControlsConfig::default());
        assert!(!controller.overlay().pip_button.hidden);
        controller.attach();
        assert!(controller.overlay().pip_button.hidden);
    }

    #[test]
    fn test_toggle_play_fails_without_data() {
        let surface = VideoSurface::new(HTMLVideoElement::new());
        let mut controller = PlaybackUIController::new(surface, ControlsConfig::default());
        assert!(controller.toggle_play().is_err());
        assert!(controller.media().paused());
    }
}
