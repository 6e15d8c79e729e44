// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity identity types.

use core::fmt;

/// Sentinel value indicating "no entity" in index fields.
pub const INVALID: u32 = u32::MAX;

/// A handle to an entity in a [`SceneGraph`](super::SceneGraph).
///
/// Contains both a slot index and a generation counter so that stale handles
/// can be detected after an entity is destroyed and the slot is reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId {
    /// Slot index into the graph's arrays.
    pub(crate) idx: u32,
    /// Generation counter; must match the graph's generation for this slot.
    pub(crate) generation: u32,
}

impl EntityId {
    /// Returns the raw slot index (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({}@gen{})", self.idx, self.generation)
    }
}

/// Identifies one touch point for the lifetime of a touch sequence.
///
/// Platforms hand out identifiers that are unique among the touches currently
/// on the surface; they may be reused once a touch ends.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TouchId(pub u64);

impl fmt::Debug for TouchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TouchId({})", self.0)
    }
}
