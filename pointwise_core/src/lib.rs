// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit-testing and interaction routing for trees of 2D entities.
//!
//! `pointwise_core` turns raw pointer, touch and keyboard input into
//! entity-level interaction events: drag, hover, click and key combos. It is
//! `no_std` compatible (with `alloc`) and stores the entity tree in
//! struct-of-arrays form with generational handles.
//!
//! # Architecture
//!
//! Every input is routed against the live tree; nothing about priority or
//! geometry is cached between events:
//!
//! ```text
//!   host input ──► InteractionRouter ──► Camera::screen_to_world()
//!                        │
//!                        ▼
//!           order::resolve() ──► hit::contains() ──► target entity
//!                        │
//!                        ▼
//!     SceneGraph mutation (z promotion, drag position)
//!                        │
//!                        ▼
//!     EventSink::emit(target, event) ──► host dispatchers
//! ```
//!
//! **[`entity`]**: Struct-of-arrays entity tree with generational handles.
//! Positions, sizes, styles, z-indices, collision polygons and listener sets
//! are set by the host; absolute positions and effective z-indices are
//! derived on demand.
//!
//! **[`dirty`]**: Multi-channel dirty tracking via `understory_dirty`, so a
//! renderer can pick up what changed through
//! [`SceneGraph::take_changes`](entity::SceneGraph::take_changes).
//!
//! **[`order`]**: Flattens the tree into hit-test priority order (effective
//! z-index, then depth, then traversal order).
//!
//! **[`hit`]**: Point-in-entity tests for rectangles, circles, triangles and
//! collision polygons, honoring rotation and scale.
//!
//! **[`router`]**: The [`InteractionRouter`](router::InteractionRouter)
//! state machine: drag sessions per pointer and per touch, hover tracking,
//! click dispatch and key combos.
//!
//! **[`keys`]**: Key-name normalization and canonical combo strings.
//!
//! **[`event`]**: Emitted event types and the [`EventSink`](event::EventSink)
//! trait hosts implement.
//!
//! **[`camera`]**: The [`Camera`](camera::Camera) trait mapping surface to
//! world coordinates.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! routing diagnostics, with zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod camera;
pub mod dirty;
pub mod entity;
pub mod event;
pub mod hit;
pub mod keys;
pub mod order;
pub mod router;
pub mod trace;
