// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change reporting for renderers.
//!
//! Drags move entities and drag acquisition restacks them. A renderer that
//! mirrors the scene graph calls [`SceneGraph::take_changes`] once per frame
//! and applies only what changed. Each dirty channel is drained in turn:
//!
//! 1. **POSITION**: entities whose absolute position may have changed
//!    (the moved entity and all its descendants).
//! 2. **`Z_INDEX`**: entities whose effective z-index may have changed.
//! 3. **STYLE**: entities whose size, style or collision polygon changed.
//! 4. **TOPOLOGY**: drained; surfaced as a single flag.
//!
//! [`SceneChanges`] uses raw slot indices (`u32`). Indices of entities that
//! were destroyed before the drain may still appear in the propagating
//! channels; check them against [`SceneChanges::removed`].
//!
//! Pending lists are keyed by slot, so a host that never drains holds at most
//! one entry per slot. An entity created and destroyed between two drains
//! shows up in neither [`SceneChanges::added`] nor [`SceneChanges::removed`].

use alloc::vec::Vec;

use super::store::SceneGraph;
use crate::dirty;

/// The set of changes accumulated since the previous
/// [`SceneGraph::take_changes`] call.
#[derive(Clone, Debug, Default)]
pub struct SceneChanges {
    /// Entities whose absolute position changed.
    pub moved: Vec<u32>,
    /// Entities whose effective z-index changed.
    pub restacked: Vec<u32>,
    /// Entities whose size, style or collision polygon changed.
    pub restyled: Vec<u32>,
    /// Entities created since the last drain.
    pub added: Vec<u32>,
    /// Entities destroyed since the last drain.
    pub removed: Vec<u32>,
    /// Whether the tree topology changed.
    pub topology_changed: bool,
}

impl SceneChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.moved.clear();
        self.restacked.clear();
        self.restyled.clear();
        self.added.clear();
        self.removed.clear();
        self.topology_changed = false;
    }

    /// Whether nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moved.is_empty()
            && self.restacked.is_empty()
            && self.restyled.is_empty()
            && self.added.is_empty()
            && self.removed.is_empty()
            && !self.topology_changed
    }
}

impl SceneGraph {
    /// Drains all dirty channels and returns what changed.
    pub fn take_changes(&mut self) -> SceneChanges {
        let mut changes = SceneChanges::default();
        self.take_changes_into(&mut changes);
        changes
    }

    /// Like [`take_changes`](Self::take_changes), but reuses a
    /// caller-provided buffer to avoid allocation.
    pub fn take_changes_into(&mut self, changes: &mut SceneChanges) {
        changes.clear();

        changes.moved = self
            .dirty
            .drain(dirty::POSITION)
            .affected()
            .deterministic()
            .run()
            .collect();

        changes.restacked = self
            .dirty
            .drain(dirty::Z_INDEX)
            .affected()
            .deterministic()
            .run()
            .collect();

        changes.restyled = self
            .dirty
            .drain(dirty::STYLE)
            .deterministic()
            .run()
            .collect();

        let topology: Vec<u32> = self
            .dirty
            .drain(dirty::TOPOLOGY)
            .deterministic()
            .run()
            .collect();
        changes.topology_changed = !topology.is_empty();

        core::mem::swap(&mut self.pending_added, &mut changes.added);
        core::mem::swap(&mut self.pending_removed, &mut changes.removed);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::*;
    use crate::entity::Style;

    #[test]
    fn no_change_drain_is_empty() {
        let mut graph = SceneGraph::new();
        let _root = graph.create_entity();

        let first = graph.take_changes();
        assert!(first.topology_changed);
        assert_eq!(first.added.len(), 1);

        let second = graph.take_changes();
        assert!(second.is_empty(), "got {second:?}");
    }

    #[test]
    fn moving_a_parent_reports_descendants() {
        let mut graph = SceneGraph::new();
        let parent = graph.create_entity();
        let child = graph.create_entity();
        let grandchild = graph.create_entity();
        graph.add_child(parent, child);
        graph.add_child(child, grandchild);
        let _ = graph.take_changes();

        graph.set_local_position(parent, Point::new(5.0, 5.0));
        let changes = graph.take_changes();
        assert!(changes.moved.contains(&parent.idx));
        assert!(changes.moved.contains(&child.idx));
        assert!(changes.moved.contains(&grandchild.idx));
        assert!(changes.restacked.is_empty());
    }

    #[test]
    fn promotion_reports_restacked_siblings() {
        let mut graph = SceneGraph::new();
        let a = graph.create_entity();
        let b = graph.create_entity();
        graph.set_z_index(b, 1);
        let _ = graph.take_changes();

        graph.promote_z_index(a);
        let changes = graph.take_changes();
        assert!(changes.restacked.contains(&a.idx));
        assert!(changes.restacked.contains(&b.idx));
    }

    #[test]
    fn style_changes_are_local() {
        let mut graph = SceneGraph::new();
        let parent = graph.create_entity();
        let child = graph.create_entity();
        graph.add_child(parent, child);
        let _ = graph.take_changes();

        graph.set_style(parent, Style::DEFAULT.with_rotation(30.0));
        graph.set_size(parent, Size::new(10.0, 10.0));
        let changes = graph.take_changes();
        assert!(changes.restyled.contains(&parent.idx));
        assert!(!changes.restyled.contains(&child.idx), "style does not propagate");
        assert!(changes.moved.is_empty());
    }

    #[test]
    fn destroy_is_reported_as_removed() {
        let mut graph = SceneGraph::new();
        let id = graph.create_entity();
        let _ = graph.take_changes();

        graph.destroy_entity(id);
        let changes = graph.take_changes();
        assert!(changes.removed.contains(&id.idx));
        assert!(changes.added.is_empty());
        assert!(changes.topology_changed);
    }

    #[test]
    fn churn_without_draining_stays_bounded() {
        let mut graph = SceneGraph::new();
        let kept = graph.create_entity();
        let reported = graph.create_entity();
        let _ = graph.take_changes();

        graph.destroy_entity(reported);
        for _ in 0..1000 {
            let id = graph.create_entity();
            graph.set_local_position(id, Point::new(1.0, 1.0));
            graph.destroy_entity(id);
            assert!(graph.pending_added.is_empty());
            assert_eq!(graph.pending_removed.len(), 1);
        }

        let changes = graph.take_changes();
        assert!(changes.added.is_empty());
        assert_eq!(changes.removed, [reported.idx]);
        assert!(graph.is_alive(kept));
    }

    #[test]
    fn created_then_destroyed_before_drain_is_not_reported() {
        let mut graph = SceneGraph::new();
        let a = graph.create_entity();
        let b = graph.create_entity();
        graph.destroy_entity(a);

        let changes = graph.take_changes();
        assert_eq!(changes.added, [b.idx]);
        assert!(changes.removed.is_empty());
    }

    #[test]
    fn take_changes_into_reuses_buffer() {
        let mut graph = SceneGraph::new();
        let id = graph.create_entity();
        let mut changes = SceneChanges::default();
        graph.take_changes_into(&mut changes);
        assert!(!changes.added.is_empty());

        graph.set_z_index(id, 2);
        graph.take_changes_into(&mut changes);
        assert!(changes.added.is_empty());
        assert!(changes.restacked.contains(&id.idx));
    }
}
