// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! The scene graph uses multi-channel dirty tracking (via [`understory_dirty`])
//! so that a renderer can pick up exactly the entities the router (or the
//! host) touched since it last looked.
//!
//! # Propagation semantics
//!
//! - **Propagating**: [`POSITION`] and [`Z_INDEX`] use
//!   [`EagerPolicy`](understory_dirty::EagerPolicy) and have dependency edges
//!   from child to parent. Absolute positions and effective z-indices are
//!   inherited, so marking a parent marks every descendant.
//!
//! - **Local-only**: [`STYLE`] is marked with the default policy. Size,
//!   visibility, rotation, scale, shape and collision polygon are per-entity.
//!
//! - **Structural**: [`TOPOLOGY`] is marked on create/destroy/attach/detach.
//!   It does not propagate.
//!
//! # Consumption
//!
//! Callers never query dirty state directly.
//! [`SceneGraph::take_changes`](crate::entity::SceneGraph::take_changes)
//! drains all channels into a [`SceneChanges`](crate::entity::SceneChanges).

use understory_dirty::Channel;

/// Local position changed; absolute positions of descendants changed too.
pub const POSITION: Channel = Channel::new(0);

/// Z-index changed; effective z-indices of descendants changed too.
pub const Z_INDEX: Channel = Channel::new(1);

/// Style, size or collision polygon changed; no propagation needed.
pub const STYLE: Channel = Channel::new(2);

/// Tree topology changed.
pub const TOPOLOGY: Channel = Channel::new(3);
