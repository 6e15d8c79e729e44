// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity tree data model.
//!
//! An *entity* is a node in the scene tree. Each entity has:
//!
//! - An identity ([`EntityId`]): a generational handle that becomes stale when
//!   the entity is destroyed, so a router holding on to a hovered or dragged
//!   entity can detect teardown with [`SceneGraph::is_alive`].
//! - Topology: a non-owning parent link, and first-child and sibling links
//!   forming an ordered tree. Parentless entities live in the scene's ordered
//!   root collection.
//! - Properties: [`local_position`](SceneGraph::set_local_position),
//!   [`size`](SceneGraph::set_size), [`style`](SceneGraph::set_style),
//!   [`z_index`](SceneGraph::set_z_index),
//!   [`collision polygon`](SceneGraph::set_collision_polygon) and
//!   registered [`listeners`](SceneGraph::listen), from which
//!   [`Capabilities`] are derived.
//!
//! Derived properties (absolute position, effective z-index) are computed by
//! walking the ancestor chain on every call, so they never go stale between
//! two input events.

mod changes;
mod id;
mod listeners;
mod store;
mod style;
mod traverse;

pub use changes::SceneChanges;
pub use id::{EntityId, INVALID, TouchId};
pub use listeners::{Capabilities, Listeners};
pub use store::SceneGraph;
pub use style::{Shape, Style};
pub use traverse::Children;
