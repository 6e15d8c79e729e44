// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic events produced by the router.
//!
//! Every event is addressed to an [`EventTarget`]: either the scene as a whole
//! or one entity. Hosts receive them through the [`EventSink`] trait and fan
//! them out to whatever listener mechanism they use. [`EventQueue`] is the
//! simplest sink: it buffers emissions in order for the host to drain.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

use crate::entity::{EntityId, TouchId};

/// Kinds of pointer-carrying events.
///
/// The first six are raw device events forwarded at scene scope; the rest are
/// synthesized from hit testing and are addressed to entities (clicks are
/// addressed to both).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Raw pointer press.
    MouseDown,
    /// Raw pointer release.
    MouseUp,
    /// Raw pointer motion.
    MouseMove,
    /// Raw touch start.
    TouchStart,
    /// Raw touch motion.
    TouchMove,
    /// Raw touch end (also used for cancelled touches).
    TouchEnd,
    /// A drag session started on the target.
    Drag,
    /// The target moved under an active drag session.
    DragMove,
    /// The drag session on the target ended.
    Drop,
    /// The pointer entered the target.
    Hover,
    /// The pointer left the target.
    HoverOut,
    /// Primary-button click.
    Click,
    /// Secondary-button click.
    RightClick,
}

impl PointerEventKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::MouseDown,
        Self::MouseUp,
        Self::MouseMove,
        Self::TouchStart,
        Self::TouchMove,
        Self::TouchEnd,
        Self::Drag,
        Self::DragMove,
        Self::Drop,
        Self::Hover,
        Self::HoverOut,
        Self::Click,
        Self::RightClick,
    ];

    /// The event name hosts bind listeners to.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
            Self::MouseMove => "mousemove",
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::Drag => "drag",
            Self::DragMove => "dragMove",
            Self::Drop => "drop",
            Self::Hover => "hover",
            Self::HoverOut => "hoverOut",
            Self::Click => "click",
            Self::RightClick => "rightclick",
        }
    }

    /// Looks a kind up by its event name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Bit used by [`Listeners`](crate::entity::Listeners).
    #[inline]
    pub(crate) const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Coordinates and timing attached to every pointer-carrying event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPayload {
    /// Position relative to the rendering surface.
    pub position: Point,
    /// Position after the camera transform.
    pub world: Point,
    /// Raw device/screen position.
    pub screen: Point,
    /// Host timestamp of the originating device event.
    pub timestamp: f64,
    /// Touch identifier; `None` for the pointer.
    pub identifier: Option<TouchId>,
}

/// An event emitted by the router.
#[derive(Clone, Debug, PartialEq)]
pub enum InteractionEvent {
    /// The surface changed size.
    Resize {
        /// New width.
        width: f64,
        /// New height.
        height: f64,
    },
    /// A raw or synthesized pointer/touch event.
    Pointer {
        /// Which event.
        kind: PointerEventKind,
        /// Coordinates and timing.
        payload: PointerPayload,
    },
    /// A key went down; carries the full combo string.
    KeyDown {
        /// The canonical combo of all currently pressed keys.
        combo: String,
    },
    /// Same as [`KeyDown`](Self::KeyDown) but named after the combo itself,
    /// so hosts can bind directly to e.g. `"ctrl+s"`.
    Combo {
        /// The canonical combo of all currently pressed keys.
        combo: String,
    },
    /// A key was released; carries only that key's token.
    KeyUp {
        /// The normalized token of the released key.
        token: String,
    },
}

impl InteractionEvent {
    /// Creates a pointer event.
    #[inline]
    #[must_use]
    pub const fn pointer(kind: PointerEventKind, payload: PointerPayload) -> Self {
        Self::Pointer { kind, payload }
    }

    /// The event name hosts bind listeners to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Resize { .. } => "resize",
            Self::Pointer { kind, .. } => kind.name(),
            Self::KeyDown { .. } => "keydown",
            Self::Combo { combo } => combo,
            Self::KeyUp { .. } => "keyup",
        }
    }

    /// The pointer payload, if this is a pointer event.
    #[must_use]
    pub fn payload(&self) -> Option<&PointerPayload> {
        match self {
            Self::Pointer { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

/// Where an event is addressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventTarget {
    /// The scene-level dispatcher.
    Scene,
    /// One entity's dispatcher.
    Entity(EntityId),
}

/// Receives events from the router, in emission order.
pub trait EventSink {
    /// Delivers one event.
    fn emit(&mut self, target: EventTarget, event: InteractionEvent);
}

/// One buffered emission.
#[derive(Clone, Debug, PartialEq)]
pub struct Emission {
    /// Addressee.
    pub target: EventTarget,
    /// The event.
    pub event: InteractionEvent,
}

/// An [`EventSink`] that buffers emissions in order.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    emissions: Vec<Emission>,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buffered emissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.emissions.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emissions.is_empty()
    }

    /// Iterates buffered emissions in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Emission> {
        self.emissions.iter()
    }

    /// Removes and returns all buffered emissions.
    pub fn drain(&mut self) -> alloc::vec::Drain<'_, Emission> {
        self.emissions.drain(..)
    }

    /// Names of events addressed to `target`, in order.
    #[must_use]
    pub fn names_for(&self, target: EventTarget) -> Vec<&str> {
        self.emissions
            .iter()
            .filter(|e| e.target == target)
            .map(|e| e.event.name())
            .collect()
    }
}

impl EventSink for EventQueue {
    fn emit(&mut self, target: EventTarget, event: InteractionEvent) {
        self.emissions.push(Emission { target, event });
    }
}

impl<'a> IntoIterator for &'a EventQueue {
    type Item = &'a Emission;
    type IntoIter = core::slice::Iter<'a, Emission>;

    fn into_iter(self) -> Self::IntoIter {
        self.emissions.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    fn payload() -> PointerPayload {
        PointerPayload {
            position: Point::new(1.0, 2.0),
            world: Point::new(1.0, 2.0),
            screen: Point::new(11.0, 12.0),
            timestamp: 0.0,
            identifier: None,
        }
    }

    #[test]
    fn names_round_trip_through_from_name() {
        for kind in PointerEventKind::ALL {
            assert_eq!(PointerEventKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(PointerEventKind::from_name("dragmove"), None);
    }

    #[test]
    fn bits_are_distinct() {
        let mut seen = 0_u16;
        for kind in PointerEventKind::ALL {
            assert_eq!(seen & kind.bit(), 0, "{kind:?} shares a bit");
            seen |= kind.bit();
        }
    }

    #[test]
    fn combo_event_is_named_after_its_combo() {
        let event = InteractionEvent::Combo {
            combo: "ctrl+s".to_string(),
        };
        assert_eq!(event.name(), "ctrl+s");
        let event = InteractionEvent::KeyDown {
            combo: "ctrl+s".to_string(),
        };
        assert_eq!(event.name(), "keydown");
    }

    #[test]
    fn queue_preserves_order_and_filters_by_target() {
        let mut queue = EventQueue::new();
        queue.emit(
            EventTarget::Scene,
            InteractionEvent::pointer(PointerEventKind::MouseDown, payload()),
        );
        queue.emit(
            EventTarget::Scene,
            InteractionEvent::Resize {
                width: 10.0,
                height: 20.0,
            },
        );
        assert_eq!(queue.len(), 2);
        assert_eq!(
            queue.names_for(EventTarget::Scene),
            vec!["mousedown", "resize"]
        );

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained.len(), 2);
        assert!(queue.is_empty());
    }
}
