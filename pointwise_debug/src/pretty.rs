// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use pointwise_core::entity::{EntityId, TouchId};
use pointwise_core::router::TouchRelease;
use pointwise_core::trace::{
    DragBeginEvent, DragEndEvent, HoverChangedEvent, IgnoreReason, InputEvent, InputIgnoredEvent,
    Query, TargetResolvedEvent, TouchReleasedEvent, TraceSink, ZPromotedEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn entity(id: Option<EntityId>) -> String {
    id.map_or_else(|| "-".to_owned(), |id| format!("{id:?}"))
}

fn source(identifier: Option<TouchId>) -> String {
    identifier.map_or_else(|| "pointer".to_owned(), |t| format!("touch#{}", t.0))
}

fn query_name(query: Query) -> &'static str {
    match query {
        Query::Drag => "drag",
        Query::Hover => "hover",
        Query::Click => "click",
    }
}

fn reason_name(reason: IgnoreReason) -> &'static str {
    match reason {
        IgnoreReason::NotRunning => "not-running",
        IgnoreReason::PhysicsEnabled => "physics",
        IgnoreReason::Button => "button",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_input(&mut self, e: &InputEvent) {
        let _ = match e.timestamp {
            Some(t) => writeln!(self.writer, "[input] {} at {t:.1}ms", e.kind.label()),
            None => writeln!(self.writer, "[input] {}", e.kind.label()),
        };
    }

    fn on_input_ignored(&mut self, e: &InputIgnoredEvent) {
        let _ = writeln!(
            self.writer,
            "[ignored] {} reason={}",
            e.kind.label(),
            reason_name(e.reason),
        );
    }

    fn on_target_resolved(&mut self, e: &TargetResolvedEvent) {
        let _ = writeln!(
            self.writer,
            "[hit:{}] world=({:.1}, {:.1}) target={}",
            query_name(e.query),
            e.world.x,
            e.world.y,
            entity(e.target),
        );
    }

    fn on_z_promoted(&mut self, e: &ZPromotedEvent) {
        let _ = writeln!(
            self.writer,
            "[z] {:?} {} -> {}",
            e.entity, e.from, e.to,
        );
    }

    fn on_drag_begin(&mut self, e: &DragBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[drag:begin] {:?} by {} offset=({:.1}, {:.1})",
            e.entity,
            source(e.identifier),
            e.offset.x,
            e.offset.y,
        );
    }

    fn on_drag_end(&mut self, e: &DragEndEvent) {
        let state = if e.stale { "STALE" } else { "ok" };
        let _ = writeln!(
            self.writer,
            "[drag:end] {:?} by {} entity={state}",
            e.entity,
            source(e.identifier),
        );
    }

    fn on_hover_changed(&mut self, e: &HoverChangedEvent) {
        let _ = writeln!(
            self.writer,
            "[hover] {} -> {}",
            entity(e.previous),
            entity(e.current),
        );
    }

    fn on_touch_released(&mut self, e: &TouchReleasedEvent) {
        let kind = match e.release {
            TouchRelease::Tap => "tap",
            TouchRelease::Drag => "drag",
        };
        let _ = writeln!(
            self.writer,
            "[touch:release] #{} {kind} delta=({:.1}, {:.1})",
            e.identifier.0, e.delta.x, e.delta.y,
        );
    }
}
