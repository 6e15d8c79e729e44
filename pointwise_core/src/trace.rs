// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for input routing.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! router calls as it processes input. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! Trace events are diagnostics only. They are never part of the event stream
//! hosts observe through an [`EventSink`](crate::event::EventSink).

use kurbo::{Point, Vec2};

use crate::entity::{EntityId, TouchId};
use crate::router::TouchRelease;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which router entry point received input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Surface resize.
    Resize,
    /// Pointer button press.
    PointerDown,
    /// Pointer motion.
    PointerMove,
    /// Pointer button release.
    PointerUp,
    /// Pointer click.
    Click,
    /// Touch contact began.
    TouchStart,
    /// Touch contact moved.
    TouchMove,
    /// Touch contact lifted.
    TouchEnd,
    /// Touch contact cancelled by the platform.
    TouchCancel,
    /// Key press.
    KeyDown,
    /// Key release.
    KeyUp,
    /// Pressed keys forgotten.
    ClearKeys,
}

impl InputKind {
    /// Short lower-case label, used by the debug sinks.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Resize => "resize",
            Self::PointerDown => "pointer_down",
            Self::PointerMove => "pointer_move",
            Self::PointerUp => "pointer_up",
            Self::Click => "click",
            Self::TouchStart => "touch_start",
            Self::TouchMove => "touch_move",
            Self::TouchEnd => "touch_end",
            Self::TouchCancel => "touch_cancel",
            Self::KeyDown => "key_down",
            Self::KeyUp => "key_up",
            Self::ClearKeys => "clear_keys",
        }
    }
}

/// Why the router skipped routing for an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The engine is not running; nothing was emitted.
    NotRunning,
    /// Physics owns entity motion; only the raw event was forwarded.
    PhysicsEnabled,
    /// The pointer button does not take part in this gesture.
    Button,
}

/// What a hit-test query was looking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Query {
    /// A draggable entity under a pointer or touch press.
    Drag,
    /// A hoverable entity under the pointer.
    Hover,
    /// A clickable entity under a click or tap.
    Click,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a router entry point is called while the engine runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputEvent {
    /// Entry point.
    pub kind: InputKind,
    /// Host timestamp of the input, in milliseconds, if the input carries one.
    pub timestamp: Option<f64>,
}

/// Emitted when routing was skipped for an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputIgnoredEvent {
    /// Entry point.
    pub kind: InputKind,
    /// Why it was skipped.
    pub reason: IgnoreReason,
}

/// Emitted after every hit-test query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetResolvedEvent {
    /// What the query was looking for.
    pub query: Query,
    /// World-space query point.
    pub world: Point,
    /// The winning entity, if any.
    pub target: Option<EntityId>,
}

/// Emitted when an entity is raised above its siblings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZPromotedEvent {
    /// The raised entity.
    pub entity: EntityId,
    /// Its z-index before promotion.
    pub from: i32,
    /// Its z-index after promotion.
    pub to: i32,
}

/// Emitted when a drag session starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragBeginEvent {
    /// Dragged entity.
    pub entity: EntityId,
    /// Touch identifier, or `None` for the pointer.
    pub identifier: Option<TouchId>,
    /// Grab offset from the entity's absolute position.
    pub offset: Vec2,
}

/// Emitted when a drag session ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragEndEvent {
    /// Dragged entity.
    pub entity: EntityId,
    /// Touch identifier, or `None` for the pointer.
    pub identifier: Option<TouchId>,
    /// Whether the entity was destroyed before the session ended.
    pub stale: bool,
}

/// Emitted when the hover target changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverChangedEvent {
    /// Previously hovered entity.
    pub previous: Option<EntityId>,
    /// Newly hovered entity.
    pub current: Option<EntityId>,
}

/// Emitted when a touch contact ends normally and is classified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchReleasedEvent {
    /// Touch identifier.
    pub identifier: TouchId,
    /// Tap or drag.
    pub release: TouchRelease,
    /// Surface-space displacement since the contact began.
    pub delta: Vec2,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the router.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a router entry point is invoked.
    fn on_input(&mut self, e: &InputEvent) {
        _ = e;
    }

    /// Called when routing is skipped for an input.
    fn on_input_ignored(&mut self, e: &InputIgnoredEvent) {
        _ = e;
    }

    /// Called after each hit-test query.
    fn on_target_resolved(&mut self, e: &TargetResolvedEvent) {
        _ = e;
    }

    /// Called when an entity's z-index is promoted.
    fn on_z_promoted(&mut self, e: &ZPromotedEvent) {
        _ = e;
    }

    /// Called when a drag session starts.
    fn on_drag_begin(&mut self, e: &DragBeginEvent) {
        _ = e;
    }

    /// Called when a drag session ends.
    fn on_drag_end(&mut self, e: &DragEndEvent) {
        _ = e;
    }

    /// Called when the hover target changes.
    fn on_hover_changed(&mut self, e: &HoverChangedEvent) {
        _ = e;
    }

    /// Called when a touch contact ends and is classified.
    fn on_touch_released(&mut self, e: &TouchReleasedEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Default for Tracer<'_> {
    fn default() -> Self {
        Self::none()
    }
}

/// Expands to a `Tracer` method that forwards one event to the sink.
macro_rules! dispatch {
    ($(#[$doc:meta])* $name:ident, $method:ident, $event:ty) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&mut self, e: &$event) {
            #[cfg(feature = "trace")]
            if let Some(s) = &mut self.sink {
                s.$method(e);
            }
            #[cfg(not(feature = "trace"))]
            {
                _ = e;
            }
        }
    };
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    dispatch!(
        /// Emits an [`InputEvent`].
        input, on_input, InputEvent
    );
    dispatch!(
        /// Emits an [`InputIgnoredEvent`].
        input_ignored, on_input_ignored, InputIgnoredEvent
    );
    dispatch!(
        /// Emits a [`TargetResolvedEvent`].
        target_resolved, on_target_resolved, TargetResolvedEvent
    );
    dispatch!(
        /// Emits a [`ZPromotedEvent`].
        z_promoted, on_z_promoted, ZPromotedEvent
    );
    dispatch!(
        /// Emits a [`DragBeginEvent`].
        drag_begin, on_drag_begin, DragBeginEvent
    );
    dispatch!(
        /// Emits a [`DragEndEvent`].
        drag_end, on_drag_end, DragEndEvent
    );
    dispatch!(
        /// Emits a [`HoverChangedEvent`].
        hover_changed, on_hover_changed, HoverChangedEvent
    );
    dispatch!(
        /// Emits a [`TouchReleasedEvent`].
        touch_released, on_touch_released, TouchReleasedEvent
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
