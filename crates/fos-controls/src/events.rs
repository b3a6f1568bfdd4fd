//! Overlay Events
//!
//! User-interaction and media events delivered to the controls, and the
//! listener registry they are dispatched through.

use fos_media::MediaEvent;

/// Event targets on the player page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Document,
    /// Element that goes fullscreen
    Container,
    Video,
    /// Control bar
    Controls,
    PlayButton,
    VolumeButton,
    /// Volume slider
    Volume,
    /// Seek slider
    Seek,
    FullscreenButton,
    PipButton,
}

impl Target {
    /// Parse an element id as written in the page markup
    pub fn from_id(id: &str) -> Option<Self> {
        Some(match id {
            "document" => Self::Document,
            "video-container" | "container" => Self::Container,
            "video" => Self::Video,
            "video-controls" | "controls" => Self::Controls,
            "play" => Self::PlayButton,
            "volume-button" => Self::VolumeButton,
            "volume" => Self::Volume,
            "seek" => Self::Seek,
            "fullscreen-button" | "fullscreen" => Self::FullscreenButton,
            "pip-button" | "pip" => Self::PipButton,
            _ => return None,
        })
    }
}

/// Event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    // Pointer
    Click,
    MouseEnter,
    MouseOver,
    MouseLeave,
    MouseMove,

    // Form and keyboard
    Input,
    KeyUp,

    // Media and document
    FullscreenChange,
    LoadedMetadata,
    Play,
    Pause,
    VolumeChange,
    TimeUpdate,
    DOMContentLoaded,
}

/// Event payload
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EventDetail {
    #[default]
    None,
    Pointer {
        /// X relative to the target's padding edge
        offset_x: f64,
        /// X relative to the page
        page_x: f64,
    },
    Key {
        key: String,
    },
    Input {
        value: f64,
    },
}

/// Event delivered to the controls
#[derive(Debug, Clone, PartialEq)]
pub struct UiEvent {
    pub target: Target,
    pub event_type: EventType,
    pub detail: EventDetail,
}

impl UiEvent {
    pub fn new(target: Target, event_type: EventType) -> Self {
        Self {
            target,
            event_type,
            detail: EventDetail::None,
        }
    }

    pub fn click(target: Target) -> Self {
        Self::new(target, EventType::Click)
    }

    pub fn pointer_move(target: Target, offset_x: f64, page_x: f64) -> Self {
        Self {
            target,
            event_type: EventType::MouseMove,
            detail: EventDetail::Pointer { offset_x, page_x },
        }
    }

    /// Slider input carrying the slider's new value
    pub fn input(target: Target, value: f64) -> Self {
        Self {
            target,
            event_type: EventType::Input,
            detail: EventDetail::Input { value },
        }
    }

    /// `keyup` on the document
    pub fn key_up(key: &str) -> Self {
        Self {
            target: Target::Document,
            event_type: EventType::KeyUp,
            detail: EventDetail::Key { key: key.to_string() },
        }
    }

    pub fn content_loaded() -> Self {
        Self::new(Target::Document, EventType::DOMContentLoaded)
    }

    /// Map a media event onto the element it fires on. Events the controls
    /// never listen to map to `None`.
    pub fn from_media(event: MediaEvent) -> Option<Self> {
        let (target, event_type) = match event {
            MediaEvent::LoadedMetadata => (Target::Video, EventType::LoadedMetadata),
            MediaEvent::Play => (Target::Video, EventType::Play),
            MediaEvent::Pause => (Target::Video, EventType::Pause),
            MediaEvent::VolumeChange => (Target::Video, EventType::VolumeChange),
            MediaEvent::TimeUpdate => (Target::Video, EventType::TimeUpdate),
            MediaEvent::FullscreenChange => (Target::Container, EventType::FullscreenChange),
            MediaEvent::CanPlay | MediaEvent::Ended => return None,
        };
        Some(Self::new(target, event_type))
    }
}

/// Listener handle returned by [`EventRegistry::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug)]
struct Listener<A> {
    id: ListenerId,
    target: Target,
    event_type: EventType,
    action: A,
}

/// Listener registry keyed by target and event type
#[derive(Debug)]
pub struct EventRegistry<A> {
    listeners: Vec<Listener<A>>,
    next_id: u64,
}

impl<A: Copy> EventRegistry<A> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 1,
        }
    }

    /// Register `action` for events of `event_type` on `target`
    pub fn subscribe(&mut self, target: Target, event_type: EventType, action: A) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            target,
            event_type,
            action,
        });
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() < before
    }

    /// Actions bound to (target, event type), in subscription order
    pub fn actions_for(&self, target: Target, event_type: EventType) -> Vec<A> {
        self.listeners
            .iter()
            .filter(|l| l.target == target && l.event_type == event_type)
            .map(|l| l.action)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<A: Copy> Default for EventRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_and_lookup() {
        let mut registry = EventRegistry::new();
        registry.subscribe(Target::Video, EventType::TimeUpdate, 1);
        registry.subscribe(Target::Video, EventType::TimeUpdate, 2);
        registry.subscribe(Target::Seek, EventType::Input, 3);

        assert_eq!(registry.actions_for(Target::Video, EventType::TimeUpdate), vec![1, 2]);
        assert_eq!(registry.actions_for(Target::Seek, EventType::Input), vec![3]);
        assert!(registry.actions_for(Target::Seek, EventType::Click).is_empty());
    }

    #[test]
    fn test_unsubscribe() {
        let mut registry = EventRegistry::new();
        let id = registry.subscribe(Target::Document, EventType::KeyUp, ());
        assert_eq!(registry.len(), 1);
        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_media_event_mapping() {
        let event = UiEvent::from_media(MediaEvent::FullscreenChange).unwrap();
        assert_eq!(event.target, Target::Container);
        assert_eq!(event.event_type, EventType::FullscreenChange);

        assert_eq!(UiEvent::from_media(MediaEvent::Play).unwrap().target, Target::Video);
        assert!(UiEvent::from_media(MediaEvent::CanPlay).is_none());
    }

    #[test]
    fn test_target_from_id() {
        assert_eq!(Target::from_id("pip-button"), Some(Target::PipButton));
        assert_eq!(Target::from_id("seek"), Some(Target::Seek));
        assert_eq!(Target::from_id("nope"), None);
    }
}
