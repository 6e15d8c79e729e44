// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays entity storage with allocation, topology, and property management.

use alloc::vec::Vec;

use kurbo::{Point, Size, Vec2};
use understory_dirty::{CycleHandling, DirtyTracker, EagerPolicy};

use super::id::{EntityId, INVALID};
use super::listeners::{Capabilities, Listeners};
use super::style::Style;
use super::traverse::Children;
use crate::dirty;
use crate::event::PointerEventKind;

/// Struct-of-arrays storage for all entities.
///
/// Entities are addressed by [`EntityId`] handles. Internally, each entity
/// occupies a slot in parallel arrays. Destroyed entities are recycled via a
/// free list, and generation counters prevent stale handle access.
///
/// A new entity starts as a root. Roots are kept in creation order (the
/// scene's root collection); children are kept in attach order.
#[derive(Debug)]
pub struct SceneGraph {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,
    pub(crate) prev_sibling: Vec<u32>,
    pub(crate) roots: Vec<u32>,

    // -- Properties --
    pub(crate) local_position: Vec<Point>,
    pub(crate) size: Vec<Size>,
    pub(crate) style: Vec<Style>,
    pub(crate) z_index: Vec<i32>,
    pub(crate) collision: Vec<Option<Vec<Point>>>,
    pub(crate) drag_constrained: Vec<bool>,
    pub(crate) listeners: Vec<Listeners>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,

    // -- Lifecycle tracking --
    // Each slot appears at most once in each list.
    pub(crate) pending_added: Vec<u32>,
    pub(crate) pending_removed: Vec<u32>,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// Creates an empty scene graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: Vec::new(),
            first_child: Vec::new(),
            next_sibling: Vec::new(),
            prev_sibling: Vec::new(),
            roots: Vec::new(),
            local_position: Vec::new(),
            size: Vec::new(),
            style: Vec::new(),
            z_index: Vec::new(),
            collision: Vec::new(),
            drag_constrained: Vec::new(),
            listeners: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pending_added: Vec::new(),
            pending_removed: Vec::new(),
        }
    }

    // -- Allocation API --

    /// Creates a new root entity and returns its handle.
    ///
    /// The entity starts at the origin with zero size, the default
    /// [`Style`], z-index 0, no collision polygon, and no listeners.
    pub fn create_entity(&mut self) -> EntityId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            let i = idx as usize;
            self.generation[i] += 1;
            self.parent[i] = INVALID;
            self.first_child[i] = INVALID;
            self.next_sibling[i] = INVALID;
            self.prev_sibling[i] = INVALID;
            self.local_position[i] = Point::ZERO;
            self.size[i] = Size::ZERO;
            self.style[i] = Style::DEFAULT;
            self.z_index[i] = 0;
            self.collision[i] = None;
            self.drag_constrained[i] = false;
            self.listeners[i] = Listeners::NONE;
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.parent.push(INVALID);
            self.first_child.push(INVALID);
            self.next_sibling.push(INVALID);
            self.prev_sibling.push(INVALID);
            self.local_position.push(Point::ZERO);
            self.size.push(Size::ZERO);
            self.style.push(Style::DEFAULT);
            self.z_index.push(0);
            self.collision.push(None);
            self.drag_constrained.push(false);
            self.listeners.push(Listeners::NONE);
            self.generation.push(0);
            idx
        };

        self.roots.push(idx);
        self.pending_added.push(idx);
        self.dirty.mark(idx, dirty::TOPOLOGY);

        EntityId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Destroys an entity, freeing its slot for reuse.
    ///
    /// # Panics
    ///
    /// Panics if the entity has children (remove them first) or if the handle
    /// is stale.
    pub fn destroy_entity(&mut self, id: EntityId) {
        self.validate(id);
        let idx = id.idx;
        assert!(
            self.first_child[idx as usize] == INVALID,
            "cannot destroy entity with children"
        );

        let p = self.parent[idx as usize];
        if p != INVALID {
            self.unlink_from_parent(idx);
            self.dirty.mark(p, dirty::TOPOLOGY);
        } else {
            self.roots.retain(|&r| r != idx);
        }

        self.dirty.remove_key(idx);

        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;
        self.collision[idx as usize] = None;

        self.free_list.push(idx);
        // An entity created and destroyed between two drains is never reported.
        if let Some(pos) = self.pending_added.iter().position(|&i| i == idx) {
            self.pending_added.remove(pos);
        } else {
            self.pending_removed.push(idx);
        }
        self.dirty.mark(idx, dirty::TOPOLOGY);
    }

    /// Returns whether the given handle refers to a live entity.
    ///
    /// Destroying an entity bumps its slot's generation, so no handle matches
    /// a freed slot.
    #[must_use]
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.generation
            .get(id.idx as usize)
            .is_some_and(|&g| g == id.generation)
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize - self.free_list.len()
    }

    /// Whether the graph holds no live entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // -- Topology API --

    /// Adds `child` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale, if `child` already has a parent, or
    /// if `child` is `parent` or one of its ancestors.
    pub fn add_child(&mut self, parent: EntityId, child: EntityId) {
        self.validate(parent);
        self.validate(child);
        assert!(
            self.parent[child.idx as usize] == INVALID,
            "child already has a parent"
        );
        self.assert_not_ancestor(child.idx, parent.idx);

        self.roots.retain(|&r| r != child.idx);
        self.link_last(parent.idx, child.idx);
    }

    /// Detaches `child` from its parent, making it the last root.
    ///
    /// The local position is left untouched, so the entity's absolute
    /// position changes to its former local position.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or the entity has no parent.
    pub fn remove_from_parent(&mut self, child: EntityId) {
        self.validate(child);
        let c = child.idx;
        assert!(self.parent[c as usize] != INVALID, "entity has no parent");

        let p = self.parent[c as usize];
        self.unlink_from_parent(c);
        self.dirty.remove_dependency(c, p, dirty::POSITION);
        self.dirty.remove_dependency(c, p, dirty::Z_INDEX);
        self.roots.push(c);

        self.mark_subtree_inherited_dirty(c);
        self.dirty.mark(p, dirty::TOPOLOGY);
    }

    /// Moves `child` to be the last child of `new_parent`.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale, or if `child` is `new_parent` or one
    /// of its ancestors.
    pub fn reparent(&mut self, child: EntityId, new_parent: EntityId) {
        self.validate(child);
        self.validate(new_parent);
        self.assert_not_ancestor(child.idx, new_parent.idx);

        let c = child.idx;
        if self.parent[c as usize] != INVALID {
            let old_p = self.parent[c as usize];
            self.unlink_from_parent(c);
            self.dirty.remove_dependency(c, old_p, dirty::POSITION);
            self.dirty.remove_dependency(c, old_p, dirty::Z_INDEX);
            self.dirty.mark(old_p, dirty::TOPOLOGY);
        } else {
            self.roots.retain(|&r| r != c);
        }

        self.link_last(new_parent.idx, c);
    }

    /// Inserts `child` before `sibling`, either in `sibling`'s parent's
    /// child list or, if `sibling` is a root, in the root collection.
    ///
    /// # Panics
    ///
    /// Panics if handles are stale, if `child` already has a parent, or if
    /// `child` would become its own ancestor.
    pub fn insert_before(&mut self, child: EntityId, sibling: EntityId) {
        self.validate(child);
        self.validate(sibling);
        let c = child.idx;
        let s = sibling.idx;
        assert!(
            self.parent[c as usize] == INVALID,
            "child already has a parent"
        );
        assert!(c != s, "cannot insert an entity before itself");

        let p = self.parent[s as usize];
        self.roots.retain(|&r| r != c);

        if p == INVALID {
            let at = self
                .roots
                .iter()
                .position(|&r| r == s)
                .unwrap_or(self.roots.len());
            self.roots.insert(at, c);
            self.dirty.mark(c, dirty::TOPOLOGY);
            return;
        }

        self.assert_not_ancestor(c, p);
        self.parent[c as usize] = p;
        self.next_sibling[c as usize] = s;
        self.prev_sibling[c as usize] = self.prev_sibling[s as usize];

        if self.prev_sibling[s as usize] != INVALID {
            self.next_sibling[self.prev_sibling[s as usize] as usize] = c;
        } else {
            // `sibling` was the first child.
            self.first_child[p as usize] = c;
        }
        self.prev_sibling[s as usize] = c;

        let _ = self.dirty.add_dependency(c, p, dirty::POSITION);
        let _ = self.dirty.add_dependency(c, p, dirty::Z_INDEX);

        self.mark_subtree_inherited_dirty(c);
        self.dirty.mark(p, dirty::TOPOLOGY);
    }

    /// Returns the parent of an entity, if any.
    #[must_use]
    pub fn parent(&self, id: EntityId) -> Option<EntityId> {
        self.validate(id);
        let p = self.parent[id.idx as usize];
        if p == INVALID {
            None
        } else {
            Some(self.handle(p))
        }
    }

    /// Returns an iterator over the direct children of an entity.
    #[must_use]
    pub fn children(&self, id: EntityId) -> Children<'_> {
        self.validate(id);
        Children::new(self, self.first_child[id.idx as usize])
    }

    /// Returns the root entities in root-collection order.
    #[must_use]
    pub fn roots(&self) -> Vec<EntityId> {
        self.roots.iter().map(|&idx| self.handle(idx)).collect()
    }

    /// Returns the entities sharing `id`'s parent (or the roots, if `id` is a
    /// root), `id` included, in order.
    #[must_use]
    pub fn siblings(&self, id: EntityId) -> Vec<EntityId> {
        match self.parent(id) {
            Some(parent) => self.children(parent).collect(),
            None => self.roots(),
        }
    }

    /// Returns the number of ancestors of an entity (0 for roots).
    #[must_use]
    pub fn depth(&self, id: EntityId) -> usize {
        self.validate(id);
        let mut depth = 0;
        let mut p = self.parent[id.idx as usize];
        while p != INVALID {
            depth += 1;
            p = self.parent[p as usize];
        }
        depth
    }

    // -- Property getters (read-only, no dirty marking) --

    /// Returns the position relative to the parent (or the world, for roots).
    #[must_use]
    pub fn local_position(&self, id: EntityId) -> Point {
        self.validate(id);
        self.local_position[id.idx as usize]
    }

    /// Returns the world position of the entity's top-left corner.
    ///
    /// Derived by walking the ancestor chain on every call.
    #[must_use]
    pub fn absolute_position(&self, id: EntityId) -> Point {
        self.validate(id);
        let mut pos = self.local_position[id.idx as usize];
        let mut p = self.parent[id.idx as usize];
        while p != INVALID {
            pos += self.local_position[p as usize].to_vec2();
            p = self.parent[p as usize];
        }
        pos
    }

    /// Returns the unscaled size.
    #[must_use]
    pub fn size(&self, id: EntityId) -> Size {
        self.validate(id);
        self.size[id.idx as usize]
    }

    /// Returns the style bag.
    #[must_use]
    pub fn style(&self, id: EntityId) -> Style {
        self.validate(id);
        self.style[id.idx as usize]
    }

    /// Returns the z-index relative to the parent's effective z-index.
    #[must_use]
    pub fn z_index(&self, id: EntityId) -> i32 {
        self.validate(id);
        self.z_index[id.idx as usize]
    }

    /// Returns the own z-index plus the z-index of every ancestor.
    #[must_use]
    pub fn effective_z_index(&self, id: EntityId) -> i32 {
        self.validate(id);
        let mut z = self.z_index[id.idx as usize];
        let mut p = self.parent[id.idx as usize];
        while p != INVALID {
            z = z.saturating_add(self.z_index[p as usize]);
            p = self.parent[p as usize];
        }
        z
    }

    /// Returns the collision polygon, if one is set.
    ///
    /// Vertices are in the entity's local, unrotated frame with the origin at
    /// the entity's center.
    #[must_use]
    pub fn collision_polygon(&self, id: EntityId) -> Option<&[Point]> {
        self.validate(id);
        self.collision[id.idx as usize].as_deref()
    }

    /// Returns whether drags of this entity are clamped inside its parent.
    #[must_use]
    pub fn drag_constrained(&self, id: EntityId) -> bool {
        self.validate(id);
        self.drag_constrained[id.idx as usize]
    }

    /// Returns the registered listener set.
    #[must_use]
    pub fn listeners(&self, id: EntityId) -> Listeners {
        self.validate(id);
        self.listeners[id.idx as usize]
    }

    /// Returns the capabilities derived from the registered listeners.
    #[must_use]
    pub fn capabilities(&self, id: EntityId) -> Capabilities {
        self.listeners(id).capabilities()
    }

    /// Whether the entity listens to any drag event.
    #[must_use]
    pub fn is_draggable(&self, id: EntityId) -> bool {
        self.capabilities(id).draggable
    }

    /// Whether the entity listens to any click event.
    #[must_use]
    pub fn is_clickable(&self, id: EntityId) -> bool {
        self.capabilities(id).clickable
    }

    /// Whether the entity listens to any hover event.
    #[must_use]
    pub fn is_hoverable(&self, id: EntityId) -> bool {
        self.capabilities(id).hoverable
    }

    // -- Mutation API (auto-marks dirty) --

    /// Sets the position relative to the parent.
    ///
    /// Marks the POSITION channel dirty with eager propagation to descendants.
    pub fn set_local_position(&mut self, id: EntityId, position: Point) {
        self.validate(id);
        self.local_position[id.idx as usize] = position;
        self.dirty.mark_with(id.idx, dirty::POSITION, &EagerPolicy);
    }

    /// Moves the entity by `delta`.
    pub fn translate(&mut self, id: EntityId, delta: Vec2) {
        let pos = self.local_position(id) + delta;
        self.set_local_position(id, pos);
    }

    /// Sets the unscaled size.
    pub fn set_size(&mut self, id: EntityId, size: Size) {
        self.validate(id);
        self.size[id.idx as usize] = size;
        self.dirty.mark(id.idx, dirty::STYLE);
    }

    /// Replaces the style bag.
    pub fn set_style(&mut self, id: EntityId, style: Style) {
        self.validate(id);
        self.style[id.idx as usize] = style;
        self.dirty.mark(id.idx, dirty::STYLE);
    }

    /// Applies `f` to the style bag in place.
    pub fn update_style(&mut self, id: EntityId, f: impl FnOnce(&mut Style)) {
        self.validate(id);
        f(&mut self.style[id.idx as usize]);
        self.dirty.mark(id.idx, dirty::STYLE);
    }

    /// Sets the z-index relative to the parent.
    ///
    /// Marks the `Z_INDEX` channel dirty with eager propagation to descendants.
    pub fn set_z_index(&mut self, id: EntityId, z_index: i32) {
        self.validate(id);
        self.z_index[id.idx as usize] = z_index;
        self.dirty.mark_with(id.idx, dirty::Z_INDEX, &EagerPolicy);
    }

    /// Sets or clears the collision polygon.
    ///
    /// Polygons with fewer than three vertices are stored but ignored by hit
    /// testing, which then falls back to the style's shape.
    pub fn set_collision_polygon(&mut self, id: EntityId, polygon: Option<Vec<Point>>) {
        self.validate(id);
        self.collision[id.idx as usize] = polygon;
        self.dirty.mark(id.idx, dirty::STYLE);
    }

    /// Sets whether drags of this entity are clamped inside its parent.
    pub fn set_drag_constrained(&mut self, id: EntityId, constrained: bool) {
        self.validate(id);
        self.drag_constrained[id.idx as usize] = constrained;
    }

    /// Registers a listener for `kind` on the entity.
    pub fn listen(&mut self, id: EntityId, kind: PointerEventKind) {
        self.validate(id);
        self.listeners[id.idx as usize].insert(kind);
    }

    /// Unregisters the listener for `kind` on the entity.
    pub fn unlisten(&mut self, id: EntityId, kind: PointerEventKind) {
        self.validate(id);
        self.listeners[id.idx as usize].remove(kind);
    }

    /// Raises `id` above its siblings.
    ///
    /// Every sibling whose z-index exceeds `id`'s is decremented by one, then
    /// `id` is set to one more than the largest sibling z-index observed
    /// before any change. Returns the new z-index.
    pub fn promote_z_index(&mut self, id: EntityId) -> i32 {
        self.validate(id);
        let own = self.z_index[id.idx as usize];

        // Collect first; the sibling list is not touched while mutating.
        let siblings = self.siblings(id);
        let max = siblings
            .iter()
            .map(|s| self.z_index[s.idx as usize])
            .max()
            .unwrap_or(own);
        let above: Vec<EntityId> = siblings
            .into_iter()
            .filter(|s| *s != id && self.z_index[s.idx as usize] > own)
            .collect();

        for sibling in above {
            let z = self.z_index[sibling.idx as usize];
            self.set_z_index(sibling, z - 1);
        }
        let promoted = max.saturating_add(1);
        self.set_z_index(id, promoted);
        promoted
    }

    // -- Internal helpers --

    /// Builds a handle for a live slot.
    pub(crate) fn handle(&self, idx: u32) -> EntityId {
        EntityId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Panics if the handle is stale.
    fn validate(&self, id: EntityId) {
        assert!(
            id.idx < self.len && self.generation[id.idx as usize] == id.generation,
            "stale EntityId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    /// Panics if `candidate` is `node` or one of `node`'s ancestors.
    fn assert_not_ancestor(&self, candidate: u32, node: u32) {
        let mut cur = node;
        while cur != INVALID {
            assert!(
                cur != candidate,
                "cannot attach an entity beneath itself"
            );
            cur = self.parent[cur as usize];
        }
    }

    /// Appends `c` to `p`'s child list and wires dirty dependencies.
    fn link_last(&mut self, p: u32, c: u32) {
        self.parent[c as usize] = p;
        self.prev_sibling[c as usize] = INVALID;
        self.next_sibling[c as usize] = INVALID;

        if self.first_child[p as usize] == INVALID {
            self.first_child[p as usize] = c;
        } else {
            // Walk to last child.
            let mut last = self.first_child[p as usize];
            while self.next_sibling[last as usize] != INVALID {
                last = self.next_sibling[last as usize];
            }
            self.next_sibling[last as usize] = c;
            self.prev_sibling[c as usize] = last;
        }

        // Child depends on parent for POSITION and Z_INDEX.
        let _ = self.dirty.add_dependency(c, p, dirty::POSITION);
        let _ = self.dirty.add_dependency(c, p, dirty::Z_INDEX);

        self.mark_subtree_inherited_dirty(c);
        self.dirty.mark(p, dirty::TOPOLOGY);
    }

    /// Removes `idx` from its parent's child list without touching dirty state.
    fn unlink_from_parent(&mut self, idx: u32) {
        let p = self.parent[idx as usize];
        let prev = self.prev_sibling[idx as usize];
        let next = self.next_sibling[idx as usize];

        if prev != INVALID {
            self.next_sibling[prev as usize] = next;
        } else {
            // Was first child.
            self.first_child[p as usize] = next;
        }

        if next != INVALID {
            self.prev_sibling[next as usize] = prev;
        }

        self.parent[idx as usize] = INVALID;
        self.prev_sibling[idx as usize] = INVALID;
        self.next_sibling[idx as usize] = INVALID;
    }

    /// Marks the subtree rooted at `idx` dirty for inherited channels.
    fn mark_subtree_inherited_dirty(&mut self, idx: u32) {
        self.dirty.mark_with(idx, dirty::POSITION, &EagerPolicy);
        self.dirty.mark_with(idx, dirty::Z_INDEX, &EagerPolicy);
    }
}
