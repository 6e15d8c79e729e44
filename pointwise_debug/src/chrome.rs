// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads records from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! Drag sessions become duration slices, one thread lane per input source
//! (lane 0 for the pointer, lane `n + 1` for touch `n`). Everything else is an
//! instant event.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use pointwise_core::entity::{EntityId, TouchId};
use pointwise_core::router::TouchRelease;

use crate::recorder::{Record, RecordedEvent};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Record timestamps are milliseconds; they are written as microseconds.
pub fn export(records: &[Record], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for record in records {
        let ts = record.at * 1000.0;
        match record.event {
            RecordedEvent::Input(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": e.kind.label(),
                    "cat": "Input",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                }));
            }
            RecordedEvent::InputIgnored(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Ignored",
                    "cat": "Input",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "input": e.kind.label(),
                        "reason": format!("{:?}", e.reason),
                    }
                }));
            }
            RecordedEvent::TargetResolved(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "TargetResolved",
                    "cat": "Hit",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "query": format!("{:?}", e.query),
                        "world": [e.world.x, e.world.y],
                        "target": e.target.map(entity_name),
                    }
                }));
            }
            RecordedEvent::ZPromoted(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "ZPromoted",
                    "cat": "Order",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "entity": entity_name(e.entity),
                        "from": e.from,
                        "to": e.to,
                    }
                }));
            }
            RecordedEvent::DragBegin(e) => {
                events.push(json!({
                    "ph": "B",
                    "name": "Drag",
                    "cat": "Drag",
                    "ts": ts,
                    "pid": 0,
                    "tid": lane(e.identifier),
                    "args": {
                        "entity": entity_name(e.entity),
                        "offset": [e.offset.x, e.offset.y],
                    }
                }));
            }
            RecordedEvent::DragEnd(e) => {
                events.push(json!({
                    "ph": "E",
                    "name": "Drag",
                    "cat": "Drag",
                    "ts": ts,
                    "pid": 0,
                    "tid": lane(e.identifier),
                    "args": {
                        "stale": e.stale,
                    }
                }));
            }
            RecordedEvent::HoverChanged(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "HoverChanged",
                    "cat": "Hover",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "previous": e.previous.map(entity_name),
                        "current": e.current.map(entity_name),
                    }
                }));
            }
            RecordedEvent::TouchReleased(e) => {
                let name = match e.release {
                    TouchRelease::Tap => "Tap",
                    TouchRelease::Drag => "Release",
                };
                events.push(json!({
                    "ph": "i",
                    "name": name,
                    "cat": "Touch",
                    "ts": ts,
                    "pid": 0,
                    "tid": lane(Some(e.identifier)),
                    "s": "t",
                    "args": {
                        "delta": [e.delta.x, e.delta.y],
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn lane(identifier: Option<TouchId>) -> u64 {
    identifier.map_or(0, |t| t.0.saturating_add(1))
}

fn entity_name(id: EntityId) -> String {
    format!("{id:?}")
}
