// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input routing.
//!
//! [`InteractionRouter`] turns raw pointer, touch and keyboard input into
//! higher-level interaction events on entities:
//!
//! ```text
//!  pointer_down ─► mousedown ─► drop (held session) ─► hit (draggable) ─► promote z ─► drag
//!  pointer_move ─► mousemove ─┬► session? ─► reposition ─► dragMove
//!                             └► hit (hoverable) ─► hoverOut / hover
//!  pointer_up   ─► mouseup   ─► drop
//!  click        ─► hit (clickable) ─► click | rightclick ─► scene
//!  touch_*      ─► per-identifier sessions, same as the pointer, no hover
//!  key_down/up  ─► pressed set ─► keydown + <combo> | keyup
//! ```
//!
//! Raw events always reach the scene while the engine runs. When physics owns
//! entity motion, presses and moves stop after the raw event. When the engine
//! is not running, every handler is a no-op.
//!
//! A press that arrives while its pointer or touch identifier still holds a
//! session (the release was lost) ends that session with `drop` before
//! picking a new target.
//!
//! The router holds [`EntityId`]s across events (the hover target and drag
//! sessions). Entities destroyed in between are detected with
//! [`SceneGraph::is_alive`] and silently forgotten.

use alloc::collections::BTreeMap;

use kurbo::{Point, Vec2};

use crate::camera::Camera;
use crate::entity::{EntityId, SceneGraph, TouchId};
use crate::event::{EventSink, EventTarget, InteractionEvent, PointerEventKind, PointerPayload};
use crate::keys::{self, PressedKeys};
use crate::order;
use crate::trace::{
    DragBeginEvent, DragEndEvent, HoverChangedEvent, IgnoreReason, InputEvent,
    InputIgnoredEvent, InputKind, Query, TargetResolvedEvent, TouchReleasedEvent, Tracer,
    ZPromotedEvent,
};

/// Per-axis displacement, in surface units, below which a touch release is a
/// tap.
pub const TAP_THRESHOLD: f64 = 5.0;

// ---------------------------------------------------------------------------
// Configuration and state
// ---------------------------------------------------------------------------

/// Router behavior switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouterConfig {
    /// Whether a touch released as a tap also emits `click`.
    ///
    /// Off by default: touch input only drags.
    pub tap_to_click: bool,
}

/// Engine flags the host toggles between events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineState {
    /// Whether input is processed at all.
    pub running: bool,
    /// Whether a physics simulation owns entity motion.
    pub physics_enabled: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            running: true,
            physics_enabled: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Which pointer button an input refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Main button, usually the left one.
    #[default]
    Primary,
    /// Context-menu button, usually the right one.
    Secondary,
    /// Any other button.
    Auxiliary,
}

/// One pointer sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Position relative to the rendering surface.
    pub position: Point,
    /// Raw device/screen position.
    pub screen: Point,
    /// Host timestamp, in milliseconds.
    pub timestamp: f64,
    /// Button involved.
    pub button: PointerButton,
}

impl PointerInput {
    /// A primary-button sample at `position`, with `screen` equal to it.
    #[must_use]
    pub const fn at(position: Point) -> Self {
        Self {
            position,
            screen: position,
            timestamp: 0.0,
            button: PointerButton::Primary,
        }
    }

    /// Replaces the button.
    #[must_use]
    pub const fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Replaces the timestamp.
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// One touch contact sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchInput {
    /// Contact identifier, stable for the contact's lifetime.
    pub id: TouchId,
    /// Position relative to the rendering surface.
    pub position: Point,
    /// Raw device/screen position.
    pub screen: Point,
    /// Host timestamp, in milliseconds.
    pub timestamp: f64,
}

impl TouchInput {
    /// A contact sample at `position`, with `screen` equal to it.
    #[must_use]
    pub const fn new(id: TouchId, position: Point) -> Self {
        Self {
            id,
            position,
            screen: position,
            timestamp: 0.0,
        }
    }
}

/// How a touch contact ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchRelease {
    /// Moved less than [`TAP_THRESHOLD`] on both axes.
    Tap,
    /// Moved at least [`TAP_THRESHOLD`] on some axis.
    Drag,
}

impl TouchRelease {
    /// Classifies a contact by its total displacement.
    #[must_use]
    pub fn classify(delta: Vec2) -> Self {
        if delta.x.abs() < TAP_THRESHOLD && delta.y.abs() < TAP_THRESHOLD {
            Self::Tap
        } else {
            Self::Drag
        }
    }
}

/// An active drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Dragged entity.
    pub entity: EntityId,
    /// World position of the press.
    pub origin: Point,
    /// Press position minus the entity's absolute position at press time.
    pub offset: Vec2,
}

/// Everything a handler touches besides the router's own state.
pub struct InputContext<'a> {
    /// The scene being interacted with.
    pub graph: &'a mut SceneGraph,
    /// Surface-to-world mapping.
    pub camera: &'a dyn Camera,
    /// Receives emitted events, in order.
    pub events: &'a mut dyn EventSink,
    /// Diagnostics.
    pub tracer: Tracer<'a>,
}

impl core::fmt::Debug for InputContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InputContext")
            .field("entities", &self.graph.len())
            .finish_non_exhaustive()
    }
}

impl<'a> InputContext<'a> {
    /// Bundles the collaborators of one handler call, without tracing.
    #[must_use]
    pub fn new(
        graph: &'a mut SceneGraph,
        camera: &'a dyn Camera,
        events: &'a mut dyn EventSink,
    ) -> Self {
        Self {
            graph,
            camera,
            events,
            tracer: Tracer::none(),
        }
    }

    /// Replaces the tracer.
    #[must_use]
    pub fn with_tracer(mut self, tracer: Tracer<'a>) -> Self {
        self.tracer = tracer;
        self
    }

    fn emit(&mut self, target: EventTarget, kind: PointerEventKind, payload: PointerPayload) {
        self.events
            .emit(target, InteractionEvent::pointer(kind, payload));
    }

    fn payload(&self, position: Point, screen: Point, timestamp: f64) -> PointerPayload {
        PointerPayload {
            position,
            world: self.camera.screen_to_world(position),
            screen,
            timestamp,
            identifier: None,
        }
    }

    fn touch_payload(&self, touch: &TouchInput) -> PointerPayload {
        PointerPayload {
            identifier: Some(touch.id),
            ..self.payload(touch.position, touch.screen, touch.timestamp)
        }
    }
}

// ---------------------------------------------------------------------------
// InteractionRouter
// ---------------------------------------------------------------------------

/// Routes input to entities.
///
/// See the [module documentation](self) for the event flow.
#[derive(Clone, Debug, Default)]
pub struct InteractionRouter {
    config: RouterConfig,
    state: EngineState,
    pointer_drag: Option<DragSession>,
    touch_drags: BTreeMap<TouchId, DragSession>,
    touch_starts: BTreeMap<TouchId, Point>,
    hovered: Option<EntityId>,
    keys: PressedKeys,
}

impl InteractionRouter {
    /// Creates a running router with physics disabled.
    #[must_use]
    pub fn new(config: RouterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The router's configuration.
    #[must_use]
    pub fn config(&self) -> RouterConfig {
        self.config
    }

    /// Current engine flags.
    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Replaces the engine flags.
    pub fn set_state(&mut self, state: EngineState) {
        self.state = state;
    }

    /// Starts or stops input processing.
    pub fn set_running(&mut self, running: bool) {
        self.state.running = running;
    }

    /// Hands entity motion to (or back from) a physics simulation.
    pub fn set_physics_enabled(&mut self, enabled: bool) {
        self.state.physics_enabled = enabled;
    }

    /// The pointer's drag session, if any.
    #[must_use]
    pub fn pointer_drag(&self) -> Option<&DragSession> {
        self.pointer_drag.as_ref()
    }

    /// The drag session of touch `id`, if any.
    #[must_use]
    pub fn touch_drag(&self, id: TouchId) -> Option<&DragSession> {
        self.touch_drags.get(&id)
    }

    /// Number of touch contacts currently dragging an entity.
    #[must_use]
    pub fn touch_drag_count(&self) -> usize {
        self.touch_drags.len()
    }

    /// The entity under the pointer, as of the last hover resolution.
    #[must_use]
    pub fn hovered(&self) -> Option<EntityId> {
        self.hovered
    }

    /// Keys currently held.
    #[must_use]
    pub fn pressed_keys(&self) -> &PressedKeys {
        &self.keys
    }

    // -- Handlers --

    /// Reports a new surface size.
    pub fn resize(&mut self, cx: &mut InputContext<'_>, width: f64, height: f64) {
        if !self.accept(cx, InputKind::Resize, None) {
            return;
        }
        cx.events
            .emit(EventTarget::Scene, InteractionEvent::Resize { width, height });
    }

    /// Handles a pointer button press.
    pub fn pointer_down(&mut self, cx: &mut InputContext<'_>, input: PointerInput) {
        if !self.accept(cx, InputKind::PointerDown, Some(input.timestamp)) {
            return;
        }
        let payload = cx.payload(input.position, input.screen, input.timestamp);
        cx.emit(EventTarget::Scene, PointerEventKind::MouseDown, payload);
        if self.physics_owns_motion(cx, InputKind::PointerDown) {
            return;
        }
        if input.button != PointerButton::Primary {
            cx.tracer.input_ignored(&InputIgnoredEvent {
                kind: InputKind::PointerDown,
                reason: IgnoreReason::Button,
            });
            return;
        }
        if let Some(previous) = self.pointer_drag.take() {
            release(cx, &previous, payload);
        }
        self.pointer_drag = acquire(cx, payload);
    }

    /// Handles pointer motion: drags the held entity, or resolves hover.
    pub fn pointer_move(&mut self, cx: &mut InputContext<'_>, input: PointerInput) {
        if !self.accept(cx, InputKind::PointerMove, Some(input.timestamp)) {
            return;
        }
        let payload = cx.payload(input.position, input.screen, input.timestamp);
        cx.emit(EventTarget::Scene, PointerEventKind::MouseMove, payload);
        if self.physics_owns_motion(cx, InputKind::PointerMove) {
            return;
        }
        match self.pointer_drag {
            Some(session) => {
                if !drag_to(cx, &session, payload) {
                    self.pointer_drag = None;
                }
            }
            None => self.resolve_hover(cx, payload),
        }
    }

    /// Handles a pointer button release, ending any drag.
    pub fn pointer_up(&mut self, cx: &mut InputContext<'_>, input: PointerInput) {
        if !self.accept(cx, InputKind::PointerUp, Some(input.timestamp)) {
            return;
        }
        let payload = cx.payload(input.position, input.screen, input.timestamp);
        cx.emit(EventTarget::Scene, PointerEventKind::MouseUp, payload);
        if let Some(session) = self.pointer_drag.take() {
            release(cx, &session, payload);
        }
    }

    /// Handles a click: `click` for the primary button, `rightclick` for the
    /// secondary one. Other buttons are ignored.
    ///
    /// The front-most clickable entity under the point receives the event
    /// first, then the scene receives it regardless of whether any entity
    /// was hit.
    pub fn click(&mut self, cx: &mut InputContext<'_>, input: PointerInput) {
        if !self.accept(cx, InputKind::Click, Some(input.timestamp)) {
            return;
        }
        let kind = match input.button {
            PointerButton::Primary => PointerEventKind::Click,
            PointerButton::Secondary => PointerEventKind::RightClick,
            PointerButton::Auxiliary => {
                cx.tracer.input_ignored(&InputIgnoredEvent {
                    kind: InputKind::Click,
                    reason: IgnoreReason::Button,
                });
                return;
            }
        };
        let payload = cx.payload(input.position, input.screen, input.timestamp);
        dispatch_click(cx, kind, payload);
    }

    /// Handles new touch contacts.
    pub fn touch_start(&mut self, cx: &mut InputContext<'_>, touches: &[TouchInput]) {
        if !self.accept(cx, InputKind::TouchStart, first_timestamp(touches)) {
            return;
        }
        let physics = self.physics_owns_motion(cx, InputKind::TouchStart);
        for touch in touches {
            let payload = cx.touch_payload(touch);
            cx.emit(EventTarget::Scene, PointerEventKind::TouchStart, payload);
            self.touch_starts.insert(touch.id, touch.position);
            if physics {
                continue;
            }
            if let Some(previous) = self.touch_drags.remove(&touch.id) {
                release(cx, &previous, payload);
            }
            if let Some(session) = acquire(cx, payload) {
                self.touch_drags.insert(touch.id, session);
            }
        }
    }

    /// Handles moving touch contacts.
    pub fn touch_move(&mut self, cx: &mut InputContext<'_>, touches: &[TouchInput]) {
        if !self.accept(cx, InputKind::TouchMove, first_timestamp(touches)) {
            return;
        }
        let physics = self.physics_owns_motion(cx, InputKind::TouchMove);
        for touch in touches {
            let payload = cx.touch_payload(touch);
            cx.emit(EventTarget::Scene, PointerEventKind::TouchMove, payload);
            if physics {
                continue;
            }
            if let Some(session) = self.touch_drags.get(&touch.id).copied()
                && !drag_to(cx, &session, payload)
            {
                self.touch_drags.remove(&touch.id);
            }
        }
    }

    /// Handles lifted touch contacts.
    pub fn touch_end(&mut self, cx: &mut InputContext<'_>, touches: &[TouchInput]) {
        if !self.accept(cx, InputKind::TouchEnd, first_timestamp(touches)) {
            return;
        }
        for touch in touches {
            self.finish_touch(cx, touch, true);
        }
    }

    /// Handles contacts the platform cancelled.
    ///
    /// Cleans up exactly like [`touch_end`](Self::touch_end), `drop`
    /// included, but never classifies the release as a tap.
    pub fn touch_cancel(&mut self, cx: &mut InputContext<'_>, touches: &[TouchInput]) {
        if !self.accept(cx, InputKind::TouchCancel, first_timestamp(touches)) {
            return;
        }
        for touch in touches {
            self.finish_touch(cx, touch, false);
        }
    }

    /// Records a key press and emits the resulting combo.
    pub fn key_down(&mut self, cx: &mut InputContext<'_>, raw: &str) {
        if !self.accept(cx, InputKind::KeyDown, None) {
            return;
        }
        self.keys.press(raw);
        let combo = keys::combo(&self.keys);
        cx.events.emit(
            EventTarget::Scene,
            InteractionEvent::KeyDown {
                combo: combo.clone(),
            },
        );
        cx.events
            .emit(EventTarget::Scene, InteractionEvent::Combo { combo });
    }

    /// Records a key release and emits its token.
    pub fn key_up(&mut self, cx: &mut InputContext<'_>, raw: &str) {
        if !self.accept(cx, InputKind::KeyUp, None) {
            return;
        }
        let token = self.keys.release(raw);
        cx.events
            .emit(EventTarget::Scene, InteractionEvent::KeyUp { token });
    }

    /// Forgets every held key, e.g. after the window lost focus.
    pub fn clear_keys(&mut self, cx: &mut InputContext<'_>) {
        if !self.accept(cx, InputKind::ClearKeys, None) {
            return;
        }
        self.keys.clear();
    }

    // -- Internal helpers --

    /// Traces the input and reports whether the engine is running.
    fn accept(&self, cx: &mut InputContext<'_>, kind: InputKind, timestamp: Option<f64>) -> bool {
        if !self.state.running {
            cx.tracer.input_ignored(&InputIgnoredEvent {
                kind,
                reason: IgnoreReason::NotRunning,
            });
            return false;
        }
        cx.tracer.input(&InputEvent { kind, timestamp });
        true
    }

    fn physics_owns_motion(&self, cx: &mut InputContext<'_>, kind: InputKind) -> bool {
        if self.state.physics_enabled {
            cx.tracer.input_ignored(&InputIgnoredEvent {
                kind,
                reason: IgnoreReason::PhysicsEnabled,
            });
        }
        self.state.physics_enabled
    }

    fn resolve_hover(&mut self, cx: &mut InputContext<'_>, payload: PointerPayload) {
        let current = order::first_match(cx.graph, payload.world, |c| c.hoverable);
        cx.tracer.target_resolved(&TargetResolvedEvent {
            query: Query::Hover,
            world: payload.world,
            target: current,
        });
        if current == self.hovered {
            return;
        }
        let previous = self.hovered;
        if let Some(prev) = previous
            && cx.graph.is_alive(prev)
        {
            cx.emit(EventTarget::Entity(prev), PointerEventKind::HoverOut, payload);
        }
        if let Some(entity) = current {
            cx.emit(EventTarget::Entity(entity), PointerEventKind::Hover, payload);
        }
        self.hovered = current;
        cx.tracer
            .hover_changed(&HoverChangedEvent { previous, current });
    }

    fn finish_touch(&mut self, cx: &mut InputContext<'_>, touch: &TouchInput, classify: bool) {
        let payload = cx.touch_payload(touch);
        cx.emit(EventTarget::Scene, PointerEventKind::TouchEnd, payload);
        let start = self.touch_starts.remove(&touch.id);
        if let Some(session) = self.touch_drags.remove(&touch.id) {
            release(cx, &session, payload);
        }
        let Some(start) = start.filter(|_| classify) else {
            return;
        };
        let delta = touch.position - start;
        let kind = TouchRelease::classify(delta);
        cx.tracer.touch_released(&TouchReleasedEvent {
            identifier: touch.id,
            release: kind,
            delta,
        });
        if kind == TouchRelease::Tap && self.config.tap_to_click {
            dispatch_click(cx, PointerEventKind::Click, payload);
        }
    }
}

// ---------------------------------------------------------------------------
// Shared gesture steps
// ---------------------------------------------------------------------------

/// Picks the front-most draggable entity under the press, raises it, and
/// emits `drag` to it.
fn acquire(cx: &mut InputContext<'_>, payload: PointerPayload) -> Option<DragSession> {
    let target = order::first_match(cx.graph, payload.world, |c| c.draggable);
    cx.tracer.target_resolved(&TargetResolvedEvent {
        query: Query::Drag,
        world: payload.world,
        target,
    });
    let entity = target?;

    let from = cx.graph.z_index(entity);
    let to = cx.graph.promote_z_index(entity);
    cx.tracer
        .z_promoted(&ZPromotedEvent { entity, from, to });

    let offset = payload.world - cx.graph.absolute_position(entity);
    cx.tracer.drag_begin(&DragBeginEvent {
        entity,
        identifier: payload.identifier,
        offset,
    });
    cx.emit(EventTarget::Entity(entity), PointerEventKind::Drag, payload);
    Some(DragSession {
        entity,
        origin: payload.world,
        offset,
    })
}

/// Moves the session's entity under the pointer and emits `dragMove`.
///
/// Returns `false`, emitting nothing, if the entity no longer exists.
fn drag_to(cx: &mut InputContext<'_>, session: &DragSession, payload: PointerPayload) -> bool {
    let entity = session.entity;
    if !cx.graph.is_alive(entity) {
        cx.tracer.drag_end(&DragEndEvent {
            entity,
            identifier: payload.identifier,
            stale: true,
        });
        return false;
    }

    let target = payload.world - session.offset;
    let local = match cx.graph.parent(entity) {
        Some(parent) => {
            let rel = target - cx.graph.absolute_position(parent);
            if cx.graph.drag_constrained(entity) {
                let room = cx.graph.size(parent) - cx.graph.size(entity);
                Point::new(clamp_axis(rel.x, room.width), clamp_axis(rel.y, room.height))
            } else {
                rel.to_point()
            }
        }
        None => target,
    };
    cx.graph.set_local_position(entity, local);
    cx.emit(EventTarget::Entity(entity), PointerEventKind::DragMove, payload);
    true
}

/// Emits `drop` to the session's entity if it still exists.
fn release(cx: &mut InputContext<'_>, session: &DragSession, payload: PointerPayload) {
    let stale = !cx.graph.is_alive(session.entity);
    if !stale {
        cx.emit(
            EventTarget::Entity(session.entity),
            PointerEventKind::Drop,
            payload,
        );
    }
    cx.tracer.drag_end(&DragEndEvent {
        entity: session.entity,
        identifier: payload.identifier,
        stale,
    });
}

/// Emits `kind` to the front-most clickable entity under the point, then to
/// the scene.
fn dispatch_click(cx: &mut InputContext<'_>, kind: PointerEventKind, payload: PointerPayload) {
    let target = order::first_match(cx.graph, payload.world, |c| c.clickable);
    cx.tracer.target_resolved(&TargetResolvedEvent {
        query: Query::Click,
        world: payload.world,
        target,
    });
    if let Some(entity) = target {
        cx.emit(EventTarget::Entity(entity), kind, payload);
    }
    cx.emit(EventTarget::Scene, kind, payload);
}

/// Clamps into `[0, limit]`, with a negative limit treated as zero.
fn clamp_axis(value: f64, limit: f64) -> f64 {
    value.max(0.0).min(limit.max(0.0))
}

fn first_timestamp(touches: &[TouchInput]) -> Option<f64> {
    touches.first().map(|t| t.timestamp)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Size;

    use super::*;
    use crate::camera::{IdentityCamera, ViewTransform};
    use crate::entity::Shape;
    use crate::event::EventQueue;

    struct Harness {
        graph: SceneGraph,
        events: EventQueue,
        router: InteractionRouter,
        camera: ViewTransform,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_config(RouterConfig::default())
        }

        fn with_config(config: RouterConfig) -> Self {
            Self {
                graph: SceneGraph::new(),
                events: EventQueue::new(),
                router: InteractionRouter::new(config),
                camera: ViewTransform::default(),
            }
        }

        fn run(&mut self, f: impl FnOnce(&mut InteractionRouter, &mut InputContext<'_>)) {
            let mut cx = InputContext::new(&mut self.graph, &self.camera, &mut self.events);
            f(&mut self.router, &mut cx);
        }

        fn down(&mut self, x: f64, y: f64) {
            self.run(|r, cx| r.pointer_down(cx, PointerInput::at(Point::new(x, y))));
        }

        fn moved(&mut self, x: f64, y: f64) {
            self.run(|r, cx| r.pointer_move(cx, PointerInput::at(Point::new(x, y))));
        }

        fn up(&mut self, x: f64, y: f64) {
            self.run(|r, cx| r.pointer_up(cx, PointerInput::at(Point::new(x, y))));
        }

        fn click(&mut self, x: f64, y: f64, button: PointerButton) {
            let input = PointerInput::at(Point::new(x, y)).with_button(button);
            self.run(|r, cx| r.click(cx, input));
        }

        fn touches(
            &mut self,
            phase: fn(&mut InteractionRouter, &mut InputContext<'_>, &[TouchInput]),
            points: &[(u64, f64, f64)],
        ) {
            let batch: Vec<TouchInput> = points
                .iter()
                .map(|&(id, x, y)| TouchInput::new(TouchId(id), Point::new(x, y)))
                .collect();
            self.run(|r, cx| phase(r, cx, &batch));
        }

        /// A root entity at `(x, y)` with the given size, listening to `kinds`.
        fn entity(&mut self, x: f64, y: f64, w: f64, h: f64, kinds: &[PointerEventKind]) -> EntityId {
            let id = self.graph.create_entity();
            self.graph.set_local_position(id, Point::new(x, y));
            self.graph.set_size(id, Size::new(w, h));
            for &kind in kinds {
                self.graph.listen(id, kind);
            }
            id
        }

        fn names(&self, target: EventTarget) -> Vec<&str> {
            self.events.names_for(target)
        }
    }

    const DRAG: &[PointerEventKind] = &[PointerEventKind::Drag];
    const CLICK: &[PointerEventKind] = &[PointerEventKind::Click];
    const HOVER: &[PointerEventKind] = &[PointerEventKind::Hover];

    #[test]
    fn pointer_drag_moves_root_by_grab_offset() {
        let mut h = Harness::new();
        let id = h.entity(0.0, 0.0, 100.0, 100.0, DRAG);

        h.down(10.0, 10.0);
        assert_eq!(h.router.pointer_drag().map(|s| s.offset), Some(Vec2::new(10.0, 10.0)));
        h.moved(50.0, 60.0);
        assert_eq!(h.graph.local_position(id), Point::new(40.0, 50.0));
        h.up(50.0, 60.0);
        assert!(h.router.pointer_drag().is_none());

        assert_eq!(h.names(EventTarget::Entity(id)), vec!["drag", "dragMove", "drop"]);
        assert_eq!(
            h.names(EventTarget::Scene),
            vec!["mousedown", "mousemove", "mouseup"]
        );
    }

    #[test]
    fn drag_acquisition_promotes_above_siblings() {
        let mut h = Harness::new();
        let a = h.entity(0.0, 0.0, 10.0, 10.0, DRAG);
        let b = h.entity(100.0, 0.0, 10.0, 10.0, DRAG);
        let c = h.entity(200.0, 0.0, 10.0, 10.0, DRAG);
        h.graph.set_z_index(b, 1);
        h.graph.set_z_index(c, 2);

        h.down(5.0, 5.0);
        assert_eq!(h.graph.z_index(a), 3);
        assert_eq!(h.graph.z_index(b), 0);
        assert_eq!(h.graph.z_index(c), 1);
        let zs = [a, b, c].map(|id| h.graph.z_index(id));
        assert!(zs[0] > zs[1] && zs[0] > zs[2]);
    }

    #[test]
    fn hover_and_click_do_not_promote() {
        let mut h = Harness::new();
        let id = h.entity(0.0, 0.0, 10.0, 10.0, &[
            PointerEventKind::Hover,
            PointerEventKind::Click,
        ]);
        let other = h.entity(50.0, 0.0, 10.0, 10.0, CLICK);
        h.graph.set_z_index(other, 4);

        h.moved(5.0, 5.0);
        h.click(5.0, 5.0, PointerButton::Primary);
        assert_eq!(h.graph.z_index(id), 0);
        assert_eq!(h.graph.z_index(other), 4);
    }

    #[test]
    fn constrained_child_is_clamped_inside_parent() {
        let mut h = Harness::new();
        let parent = h.entity(100.0, 100.0, 200.0, 200.0, &[]);
        let child = h.entity(10.0, 10.0, 50.0, 50.0, DRAG);
        h.graph.add_child(parent, child);
        h.graph.set_drag_constrained(child, true);

        h.down(115.0, 115.0);
        h.moved(1000.0, 1000.0);
        assert_eq!(h.graph.local_position(child), Point::new(150.0, 150.0));
        h.moved(0.0, 130.0);
        assert_eq!(h.graph.local_position(child), Point::new(0.0, 25.0));
    }

    #[test]
    fn constrained_child_larger_than_parent_pins_to_origin() {
        let mut h = Harness::new();
        let parent = h.entity(0.0, 0.0, 20.0, 20.0, &[]);
        let child = h.entity(0.0, 0.0, 50.0, 50.0, DRAG);
        h.graph.add_child(parent, child);
        h.graph.set_drag_constrained(child, true);
        h.graph.set_z_index(child, 1);

        h.down(40.0, 40.0);
        h.moved(45.0, 30.0);
        assert_eq!(h.graph.local_position(child), Point::ZERO);
    }

    #[test]
    fn unconstrained_child_follows_parent_relative_position() {
        let mut h = Harness::new();
        let parent = h.entity(100.0, 100.0, 200.0, 200.0, &[]);
        let child = h.entity(10.0, 10.0, 50.0, 50.0, DRAG);
        h.graph.add_child(parent, child);

        h.down(115.0, 115.0);
        h.moved(0.0, 0.0);
        assert_eq!(h.graph.local_position(child), Point::new(-105.0, -105.0));
        assert_eq!(h.graph.absolute_position(child), Point::new(-5.0, -5.0));
    }

    #[test]
    fn drag_uses_camera_world_coordinates() {
        let mut h = Harness::new();
        h.camera = ViewTransform::pan_zoom(Point::new(100.0, 100.0), 2.0);
        let id = h.entity(100.0, 100.0, 10.0, 10.0, DRAG);

        // Surface (4, 4) is world (102, 102).
        h.down(4.0, 4.0);
        assert_eq!(h.router.pointer_drag().map(|s| s.entity), Some(id));
        h.moved(24.0, 4.0);
        assert_eq!(h.graph.local_position(id), Point::new(110.0, 100.0));
        let payload = h.events.iter().next().and_then(|e| e.event.payload().copied());
        assert_eq!(payload.map(|p| p.world), Some(Point::new(102.0, 102.0)));
        assert_eq!(payload.map(|p| p.position), Some(Point::new(4.0, 4.0)));
    }

    #[test]
    fn secondary_button_does_not_drag() {
        let mut h = Harness::new();
        let id = h.entity(0.0, 0.0, 10.0, 10.0, DRAG);
        let input = PointerInput::at(Point::new(5.0, 5.0)).with_button(PointerButton::Secondary);
        h.run(|r, cx| r.pointer_down(cx, input));
        assert!(h.router.pointer_drag().is_none());
        assert!(h.names(EventTarget::Entity(id)).is_empty());
        assert_eq!(h.names(EventTarget::Scene), vec!["mousedown"]);
    }

    #[test]
    fn hover_transitions_emit_out_then_in() {
        let mut h = Harness::new();
        let a = h.entity(0.0, 0.0, 10.0, 10.0, HOVER);
        let b = h.entity(20.0, 0.0, 10.0, 10.0, &[PointerEventKind::HoverOut]);

        h.moved(5.0, 5.0);
        h.moved(6.0, 6.0);
        assert_eq!(h.router.hovered(), Some(a));
        h.moved(25.0, 5.0);
        assert_eq!(h.router.hovered(), Some(b));
        h.moved(100.0, 100.0);
        assert_eq!(h.router.hovered(), None);

        assert_eq!(h.names(EventTarget::Entity(a)), vec!["hover", "hoverOut"]);
        assert_eq!(h.names(EventTarget::Entity(b)), vec!["hover", "hoverOut"]);

        let entity_events: Vec<(EventTarget, &str)> = h
            .events
            .iter()
            .filter(|e| e.target != EventTarget::Scene)
            .map(|e| (e.target, e.event.name()))
            .collect();
        assert_eq!(
            entity_events[1..3],
            [
                (EventTarget::Entity(a), "hoverOut"),
                (EventTarget::Entity(b), "hover")
            ]
        );
    }

    #[test]
    fn no_hover_while_dragging() {
        let mut h = Harness::new();
        let dragged = h.entity(0.0, 0.0, 10.0, 10.0, DRAG);
        let hoverable = h.entity(50.0, 0.0, 10.0, 10.0, HOVER);

        h.down(5.0, 5.0);
        h.moved(55.0, 5.0);
        assert!(h.names(EventTarget::Entity(hoverable)).is_empty());
        assert_eq!(h.router.hovered(), None);
        assert_eq!(h.names(EventTarget::Entity(dragged)), vec!["drag", "dragMove"]);
    }

    #[test]
    fn click_reaches_entity_then_scene() {
        let mut h = Harness::new();
        let id = h.entity(0.0, 0.0, 10.0, 10.0, CLICK);

        h.click(5.0, 5.0, PointerButton::Primary);
        h.click(50.0, 50.0, PointerButton::Primary);

        let log: Vec<(EventTarget, &str)> =
            h.events.iter().map(|e| (e.target, e.event.name())).collect();
        assert_eq!(
            log,
            vec![
                (EventTarget::Entity(id), "click"),
                (EventTarget::Scene, "click"),
                (EventTarget::Scene, "click"),
            ]
        );
    }

    #[test]
    fn secondary_click_is_rightclick_and_other_buttons_are_ignored() {
        let mut h = Harness::new();
        let id = h.entity(0.0, 0.0, 10.0, 10.0, &[PointerEventKind::RightClick]);

        h.click(5.0, 5.0, PointerButton::Secondary);
        h.click(5.0, 5.0, PointerButton::Auxiliary);

        assert_eq!(h.names(EventTarget::Entity(id)), vec!["rightclick"]);
        assert_eq!(h.names(EventTarget::Scene), vec!["rightclick"]);
    }

    #[test]
    fn click_skips_front_entity_that_is_not_clickable() {
        let mut h = Harness::new();
        // Same z, same level: B resolves first but only A is clickable.
        let a = h.entity(0.0, 0.0, 100.0, 100.0, CLICK);
        let b = h.entity(0.0, 0.0, 100.0, 100.0, DRAG);
        assert_eq!(order::resolve(&h.graph), vec![b, a]);

        h.click(50.0, 50.0, PointerButton::Primary);
        assert!(h.names(EventTarget::Entity(b)).is_empty());
        assert_eq!(h.names(EventTarget::Entity(a)), vec!["click"]);
    }

    #[test]
    fn later_added_circle_takes_click_over_rectangle() {
        let mut h = Harness::new();
        let a = h.entity(0.0, 0.0, 50.0, 50.0, CLICK);
        let b = h.entity(0.0, 0.0, 50.0, 50.0, CLICK);
        h.graph.update_style(b, |s| s.shape = Shape::Circle);

        h.click(25.0, 25.0, PointerButton::Primary);
        assert!(h.names(EventTarget::Entity(a)).is_empty());
        assert_eq!(h.names(EventTarget::Entity(b)), vec!["click"]);

        // Outside the circle, inside the rectangle's corner.
        h.click(2.0, 2.0, PointerButton::Primary);
        assert_eq!(h.names(EventTarget::Entity(a)), vec!["click"]);
        assert_eq!(h.names(EventTarget::Entity(b)), vec!["click"]);
    }

    #[test]
    fn repeated_queries_pick_the_same_target() {
        let mut h = Harness::new();
        let kinds = &[PointerEventKind::Click, PointerEventKind::Hover];
        let back = h.entity(0.0, 0.0, 100.0, 100.0, kinds);
        let parent = h.entity(0.0, 0.0, 100.0, 100.0, kinds);
        let child = h.entity(10.0, 10.0, 50.0, 50.0, kinds);
        h.graph.add_child(parent, child);
        h.graph.set_z_index(back, 1);

        for _ in 0..3 {
            h.click(30.0, 30.0, PointerButton::Primary);
            h.moved(30.0, 30.0);
        }

        assert_eq!(h.names(EventTarget::Entity(back)), vec!["click", "hover", "click", "click"]);
        assert!(h.names(EventTarget::Entity(parent)).is_empty());
        assert!(h.names(EventTarget::Entity(child)).is_empty());
        assert_eq!(h.router.hovered(), Some(back));
    }

    #[test]
    fn second_press_drops_the_held_session() {
        let mut h = Harness::new();
        let a = h.entity(0.0, 0.0, 10.0, 10.0, DRAG);
        let b = h.entity(50.0, 0.0, 10.0, 10.0, DRAG);

        h.down(5.0, 5.0);
        // The release was never delivered.
        h.down(55.0, 5.0);
        assert_eq!(h.router.pointer_drag().map(|s| s.entity), Some(b));
        assert_eq!(h.names(EventTarget::Entity(a)), vec!["drag", "drop"]);
        assert_eq!(h.names(EventTarget::Entity(b)), vec!["drag"]);

        // A press on empty space still ends the held session.
        h.down(200.0, 200.0);
        assert!(h.router.pointer_drag().is_none());
        assert_eq!(h.names(EventTarget::Entity(b)), vec!["drag", "drop"]);
    }

    #[test]
    fn repeated_touch_start_drops_the_held_session() {
        let mut h = Harness::new();
        let a = h.entity(0.0, 0.0, 10.0, 10.0, DRAG);
        let b = h.entity(50.0, 0.0, 10.0, 10.0, DRAG);
        let c = h.entity(100.0, 0.0, 10.0, 10.0, DRAG);

        h.touches(InteractionRouter::touch_start, &[(1, 5.0, 5.0), (2, 105.0, 5.0)]);
        h.touches(InteractionRouter::touch_start, &[(1, 55.0, 5.0)]);

        assert_eq!(h.router.touch_drag(TouchId(1)).map(|s| s.entity), Some(b));
        assert_eq!(h.router.touch_drag(TouchId(2)).map(|s| s.entity), Some(c));
        assert_eq!(h.names(EventTarget::Entity(a)), vec!["drag", "drop"]);
        assert_eq!(h.names(EventTarget::Entity(c)), vec!["drag"]);
        let drop = h
            .events
            .iter()
            .find(|e| e.target == EventTarget::Entity(a) && e.event.name() == "drop");
        assert_eq!(
            drop.and_then(|e| e.event.payload()).and_then(|p| p.identifier),
            Some(TouchId(1))
        );
    }

    #[test]
    fn not_running_is_a_full_noop() {
        let mut h = Harness::new();
        let id = h.entity(0.0, 0.0, 10.0, 10.0, &[
            PointerEventKind::Drag,
            PointerEventKind::Click,
            PointerEventKind::Hover,
        ]);
        h.router.set_running(false);

        h.run(|r, cx| r.resize(cx, 800.0, 600.0));
        h.down(5.0, 5.0);
        h.moved(6.0, 6.0);
        h.up(6.0, 6.0);
        h.click(5.0, 5.0, PointerButton::Primary);
        h.touches(InteractionRouter::touch_start, &[(1, 5.0, 5.0)]);
        h.touches(InteractionRouter::touch_end, &[(1, 5.0, 5.0)]);
        h.run(|r, cx| r.key_down(cx, "a"));

        assert!(h.events.is_empty());
        assert!(h.router.pointer_drag().is_none());
        assert_eq!(h.router.touch_drag_count(), 0);
        assert_eq!(h.router.hovered(), None);
        assert!(h.router.pressed_keys().is_empty());
        assert_eq!(h.graph.z_index(id), 0);
        assert_eq!(h.graph.local_position(id), Point::ZERO);
    }

    #[test]
    fn physics_forwards_raw_events_only() {
        let mut h = Harness::new();
        let id = h.entity(0.0, 0.0, 10.0, 10.0, &[
            PointerEventKind::Drag,
            PointerEventKind::Hover,
        ]);
        h.graph.set_z_index(id, 0);
        h.router.set_physics_enabled(true);

        h.down(5.0, 5.0);
        h.moved(8.0, 8.0);
        h.up(8.0, 8.0);
        h.touches(InteractionRouter::touch_start, &[(3, 5.0, 5.0)]);

        assert!(h.router.pointer_drag().is_none());
        assert!(h.router.touch_drag(TouchId(3)).is_none());
        assert!(h.names(EventTarget::Entity(id)).is_empty());
        assert_eq!(
            h.names(EventTarget::Scene),
            vec!["mousedown", "mousemove", "mouseup", "touchstart"]
        );
        assert_eq!(h.graph.local_position(id), Point::ZERO);
    }

    #[test]
    fn multi_touch_sessions_are_isolated() {
        let mut h = Harness::new();
        let a = h.entity(0.0, 0.0, 50.0, 50.0, DRAG);
        let b = h.entity(200.0, 0.0, 50.0, 50.0, DRAG);

        h.touches(InteractionRouter::touch_start, &[(1, 10.0, 10.0), (2, 210.0, 10.0)]);
        assert_eq!(h.router.touch_drag_count(), 2);
        assert_eq!(h.router.touch_drag(TouchId(1)).map(|s| s.entity), Some(a));
        assert_eq!(h.router.touch_drag(TouchId(2)).map(|s| s.entity), Some(b));

        h.touches(InteractionRouter::touch_move, &[(1, 30.0, 30.0)]);
        assert_eq!(h.graph.local_position(a), Point::new(20.0, 20.0));
        assert_eq!(h.graph.local_position(b), Point::new(200.0, 0.0));

        h.touches(InteractionRouter::touch_move, &[(2, 260.0, 40.0)]);
        assert_eq!(h.graph.local_position(b), Point::new(250.0, 30.0));
        assert_eq!(h.graph.local_position(a), Point::new(20.0, 20.0));

        h.touches(InteractionRouter::touch_end, &[(1, 30.0, 30.0), (2, 260.0, 40.0)]);
        assert_eq!(h.router.touch_drag_count(), 0);
        assert_eq!(h.names(EventTarget::Entity(a)), vec!["drag", "dragMove", "drop"]);
        assert_eq!(h.names(EventTarget::Entity(b)), vec!["drag", "dragMove", "drop"]);
    }

    #[test]
    fn touch_events_carry_identifier() {
        let mut h = Harness::new();
        h.touches(InteractionRouter::touch_start, &[(7, 1.0, 2.0)]);
        let emission = h.events.iter().next();
        assert_eq!(emission.map(|e| e.event.name()), Some("touchstart"));
        assert_eq!(
            emission.and_then(|e| e.event.payload()).and_then(|p| p.identifier),
            Some(TouchId(7))
        );
    }

    #[test]
    fn tap_does_not_click_by_default() {
        let mut h = Harness::new();
        let id = h.entity(0.0, 0.0, 10.0, 10.0, CLICK);

        h.touches(InteractionRouter::touch_start, &[(1, 5.0, 5.0)]);
        h.touches(InteractionRouter::touch_end, &[(1, 6.0, 6.0)]);

        assert!(h.names(EventTarget::Entity(id)).is_empty());
        assert_eq!(h.names(EventTarget::Scene), vec!["touchstart", "touchend"]);
    }

    #[test]
    fn tap_clicks_when_enabled() {
        let mut h = Harness::with_config(RouterConfig { tap_to_click: true });
        let id = h.entity(0.0, 0.0, 100.0, 100.0, CLICK);

        h.touches(InteractionRouter::touch_start, &[(1, 5.0, 5.0)]);
        h.touches(InteractionRouter::touch_end, &[(1, 9.0, 1.0)]);
        assert_eq!(h.names(EventTarget::Entity(id)), vec!["click"]);

        // Exactly the threshold on one axis is a drag.
        h.touches(InteractionRouter::touch_start, &[(2, 5.0, 5.0)]);
        h.touches(InteractionRouter::touch_end, &[(2, 10.0, 5.0)]);
        assert_eq!(h.names(EventTarget::Entity(id)), vec!["click"]);
    }

    #[test]
    fn classify_uses_per_axis_threshold() {
        assert_eq!(TouchRelease::classify(Vec2::new(4.9, -4.9)), TouchRelease::Tap);
        assert_eq!(TouchRelease::classify(Vec2::new(0.0, 5.0)), TouchRelease::Drag);
        assert_eq!(TouchRelease::classify(Vec2::new(-6.0, 0.0)), TouchRelease::Drag);
    }

    #[test]
    fn cancel_cleans_up_like_end_without_tap() {
        let mut h = Harness::with_config(RouterConfig { tap_to_click: true });
        let id = h.entity(0.0, 0.0, 10.0, 10.0, &[
            PointerEventKind::Drag,
            PointerEventKind::Click,
        ]);

        h.touches(InteractionRouter::touch_start, &[(1, 5.0, 5.0)]);
        h.touches(InteractionRouter::touch_cancel, &[(1, 5.0, 5.0)]);

        assert!(h.router.touch_drag(TouchId(1)).is_none());
        assert_eq!(h.names(EventTarget::Entity(id)), vec!["drag", "drop"]);
        assert_eq!(h.names(EventTarget::Scene), vec!["touchstart", "touchend"]);
    }

    #[test]
    fn destroyed_drag_target_is_forgotten() {
        let mut h = Harness::new();
        let id = h.entity(0.0, 0.0, 10.0, 10.0, DRAG);

        h.down(5.0, 5.0);
        h.graph.destroy_entity(id);
        h.moved(20.0, 20.0);
        assert!(h.router.pointer_drag().is_none());
        h.up(20.0, 20.0);

        assert_eq!(h.names(EventTarget::Entity(id)), vec!["drag"]);
    }

    #[test]
    fn destroyed_hover_target_gets_no_hover_out() {
        let mut h = Harness::new();
        let a = h.entity(0.0, 0.0, 10.0, 10.0, HOVER);
        let b = h.entity(20.0, 0.0, 10.0, 10.0, HOVER);

        h.moved(5.0, 5.0);
        h.graph.destroy_entity(a);
        h.moved(25.0, 5.0);

        assert_eq!(h.names(EventTarget::Entity(a)), vec!["hover"]);
        assert_eq!(h.names(EventTarget::Entity(b)), vec!["hover"]);
        assert_eq!(h.router.hovered(), Some(b));
    }

    #[test]
    fn destroyed_touch_target_gets_no_drop() {
        let mut h = Harness::new();
        let id = h.entity(0.0, 0.0, 10.0, 10.0, DRAG);

        h.touches(InteractionRouter::touch_start, &[(1, 5.0, 5.0)]);
        h.graph.destroy_entity(id);
        h.touches(InteractionRouter::touch_end, &[(1, 5.0, 5.0)]);

        assert_eq!(h.names(EventTarget::Entity(id)), vec!["drag"]);
        assert_eq!(h.router.touch_drag_count(), 0);
    }

    #[test]
    fn key_events_carry_combo_and_token() {
        let mut h = Harness::new();
        h.run(|r, cx| {
            r.key_down(cx, "Control");
            r.key_down(cx, "s");
            r.key_up(cx, "S");
        });

        let events: Vec<InteractionEvent> = h.events.iter().map(|e| e.event.clone()).collect();
        assert_eq!(
            events,
            vec![
                InteractionEvent::KeyDown { combo: "ctrl".to_string() },
                InteractionEvent::Combo { combo: "ctrl".to_string() },
                InteractionEvent::KeyDown { combo: "ctrl+s".to_string() },
                InteractionEvent::Combo { combo: "ctrl+s".to_string() },
                InteractionEvent::KeyUp { token: "s".to_string() },
            ]
        );
        assert_eq!(h.names(EventTarget::Scene)[3], "ctrl+s");
        assert!(h.router.pressed_keys().is_pressed("ctrl"));
    }

    #[test]
    fn stuck_keys_stay_until_cleared() {
        let mut h = Harness::new();
        h.run(|r, cx| {
            r.key_down(cx, "Shift");
            r.key_down(cx, "a");
        });
        h.run(|r, cx| r.key_down(cx, "b"));
        assert_eq!(h.names(EventTarget::Scene).last(), Some(&"shift+a+b"));

        h.run(|r, cx| {
            r.clear_keys(cx);
            r.key_down(cx, "b");
        });
        assert_eq!(h.names(EventTarget::Scene).last(), Some(&"b"));
    }

    #[test]
    fn resize_reaches_scene() {
        let mut h = Harness::new();
        h.run(|r, cx| r.resize(cx, 1024.0, 768.0));
        assert_eq!(
            h.events.iter().next().map(|e| e.event.clone()),
            Some(InteractionEvent::Resize {
                width: 1024.0,
                height: 768.0
            })
        );
    }

    #[test]
    fn identity_camera_context() {
        let mut graph = SceneGraph::new();
        let mut events = EventQueue::new();
        let mut router = InteractionRouter::default();
        let mut cx = InputContext::new(&mut graph, &IdentityCamera, &mut events);
        router.pointer_move(&mut cx, PointerInput::at(Point::new(3.0, 4.0)).with_timestamp(9.0));
        let payload = events.iter().next().and_then(|e| e.event.payload().copied());
        assert_eq!(payload.map(|p| p.world), Some(Point::new(3.0, 4.0)));
        assert_eq!(payload.map(|p| p.timestamp), Some(9.0));
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_reports_promotion_and_drag_lifecycle() {
        use crate::trace::TraceSink;

        #[derive(Default)]
        struct Log {
            promoted: Vec<(i32, i32)>,
            begun: usize,
            ended: Vec<bool>,
            ignored: Vec<IgnoreReason>,
        }
        impl TraceSink for Log {
            fn on_z_promoted(&mut self, e: &ZPromotedEvent) {
                self.promoted.push((e.from, e.to));
            }
            fn on_drag_begin(&mut self, _: &DragBeginEvent) {
                self.begun += 1;
            }
            fn on_drag_end(&mut self, e: &DragEndEvent) {
                self.ended.push(e.stale);
            }
            fn on_input_ignored(&mut self, e: &InputIgnoredEvent) {
                self.ignored.push(e.reason);
            }
        }

        let mut graph = SceneGraph::new();
        let id = graph.create_entity();
        graph.set_size(id, Size::new(10.0, 10.0));
        graph.listen(id, PointerEventKind::Drag);
        let mut events = EventQueue::new();
        let mut log = Log::default();
        let mut router = InteractionRouter::default();
        {
            let mut cx = InputContext::new(&mut graph, &IdentityCamera, &mut events)
                .with_tracer(Tracer::new(&mut log));
            router.pointer_down(&mut cx, PointerInput::at(Point::new(5.0, 5.0)));
            router.pointer_up(&mut cx, PointerInput::at(Point::new(5.0, 5.0)));
            router.set_running(false);
            router.click(&mut cx, PointerInput::at(Point::new(5.0, 5.0)));
        }
        assert_eq!(log.promoted, vec![(0, 1)]);
        assert_eq!(log.begun, 1);
        assert_eq!(log.ended, vec![false]);
        assert_eq!(log.ignored, vec![IgnoreReason::NotRunning]);
    }
}
