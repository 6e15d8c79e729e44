// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and appends every event, in
//! arrival order, to a list of [`Record`]s. Each record is stamped with the
//! timestamp of the most recent input that carried one, so events raised
//! while routing an input share that input's time.

use pointwise_core::trace::{
    DragBeginEvent, DragEndEvent, HoverChangedEvent, InputEvent, InputIgnoredEvent,
    TargetResolvedEvent, TouchReleasedEvent, TraceSink, ZPromotedEvent,
};

/// One recorded trace event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_input`].
    Input(InputEvent),
    /// See [`TraceSink::on_input_ignored`].
    InputIgnored(InputIgnoredEvent),
    /// See [`TraceSink::on_target_resolved`].
    TargetResolved(TargetResolvedEvent),
    /// See [`TraceSink::on_z_promoted`].
    ZPromoted(ZPromotedEvent),
    /// See [`TraceSink::on_drag_begin`].
    DragBegin(DragBeginEvent),
    /// See [`TraceSink::on_drag_end`].
    DragEnd(DragEndEvent),
    /// See [`TraceSink::on_hover_changed`].
    HoverChanged(HoverChangedEvent),
    /// See [`TraceSink::on_touch_released`].
    TouchReleased(TouchReleasedEvent),
}

/// A recorded event and its timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    /// Host time in milliseconds.
    pub at: f64,
    /// The event.
    pub event: RecordedEvent,
}

/// A [`TraceSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    records: Vec<Record>,
    clock: f64,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Discards everything recorded so far. The clock is kept.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn push(&mut self, event: RecordedEvent) {
        self.records.push(Record {
            at: self.clock,
            event,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_input(&mut self, e: &InputEvent) {
        if let Some(t) = e.timestamp
            && t.is_finite()
        {
            self.clock = t;
        }
        self.push(RecordedEvent::Input(*e));
    }

    fn on_input_ignored(&mut self, e: &InputIgnoredEvent) {
        self.push(RecordedEvent::InputIgnored(*e));
    }

    fn on_target_resolved(&mut self, e: &TargetResolvedEvent) {
        self.push(RecordedEvent::TargetResolved(*e));
    }

    fn on_z_promoted(&mut self, e: &ZPromotedEvent) {
        self.push(RecordedEvent::ZPromoted(*e));
    }

    fn on_drag_begin(&mut self, e: &DragBeginEvent) {
        self.push(RecordedEvent::DragBegin(*e));
    }

    fn on_drag_end(&mut self, e: &DragEndEvent) {
        self.push(RecordedEvent::DragEnd(*e));
    }

    fn on_hover_changed(&mut self, e: &HoverChangedEvent) {
        self.push(RecordedEvent::HoverChanged(*e));
    }

    fn on_touch_released(&mut self, e: &TouchReleasedEvent) {
        self.push(RecordedEvent::TouchReleased(*e));
    }
}
