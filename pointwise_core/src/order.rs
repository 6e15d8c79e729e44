// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit-test priority order.
//!
//! The scene is flattened into a single sequence, front-most first. Priority
//! is decided by, in order:
//!
//! 1. effective z-index, descending (an entity's z-index is relative to its
//!    parent's effective z-index);
//! 2. tree depth, descending (deeper entities win ties);
//! 3. traversal order, descending (of two otherwise equal entities, the one
//!    added later is painted over the earlier one and wins).
//!
//! The order is recomputed from the live tree on every query and never
//! cached, since drags and promotions mutate the tree between queries.

use alloc::vec::Vec;

use kurbo::Point;

use crate::entity::{Capabilities, EntityId, INVALID, SceneGraph};
use crate::hit;

/// One entity's position in the priority order, built per query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InteractionRecord {
    /// The entity.
    pub entity: EntityId,
    /// Tree depth (0 for roots).
    pub level: u32,
    /// Own z-index plus the z-index of every ancestor.
    pub effective_z: i32,
    /// Depth-first pre-order position across all roots.
    pub add_order: u32,
}

/// Flattens the tree into records, sorted front-most first.
#[must_use]
pub fn records(graph: &SceneGraph) -> Vec<InteractionRecord> {
    let mut out = Vec::with_capacity(graph.len());
    let mut counter = 0_u32;
    for &root in &graph.roots {
        collect(graph, root, 0, 0, &mut counter, &mut out);
    }
    out.sort_by(|a, b| {
        b.effective_z
            .cmp(&a.effective_z)
            .then(b.level.cmp(&a.level))
            .then(b.add_order.cmp(&a.add_order))
    });
    out
}

/// Flattens the tree into entity handles, sorted front-most first.
#[must_use]
pub fn resolve(graph: &SceneGraph) -> Vec<EntityId> {
    records(graph).into_iter().map(|r| r.entity).collect()
}

/// Returns the front-most entity that contains `point` and whose
/// capabilities satisfy `filter`.
#[must_use]
pub fn first_match(
    graph: &SceneGraph,
    point: Point,
    filter: impl Fn(Capabilities) -> bool,
) -> Option<EntityId> {
    resolve(graph)
        .into_iter()
        .find(|&id| filter(graph.capabilities(id)) && hit::contains(graph, id, point))
}

/// Depth-first pre-order collection starting from `idx`.
fn collect(
    graph: &SceneGraph,
    idx: u32,
    level: u32,
    inherited_z: i32,
    counter: &mut u32,
    out: &mut Vec<InteractionRecord>,
) {
    let effective_z = inherited_z.saturating_add(graph.z_index[idx as usize]);
    out.push(InteractionRecord {
        entity: graph.handle(idx),
        level,
        effective_z,
        add_order: *counter,
    });
    *counter += 1;

    let mut child = graph.first_child[idx as usize];
    while child != INVALID {
        collect(graph, child, level + 1, effective_z, counter, out);
        child = graph.next_sibling[child as usize];
    }
}
