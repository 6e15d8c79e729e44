// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener registration and the capabilities derived from it.

use crate::event::PointerEventKind;

/// The set of pointer event kinds an entity has listeners for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Listeners(u16);

impl Listeners {
    /// No listeners.
    pub const NONE: Self = Self(0);

    /// Returns whether `kind` is registered.
    #[inline]
    #[must_use]
    pub const fn contains(self, kind: PointerEventKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Registers `kind`. Idempotent.
    #[inline]
    pub fn insert(&mut self, kind: PointerEventKind) {
        self.0 |= kind.bit();
    }

    /// Unregisters `kind`. Idempotent.
    #[inline]
    pub fn remove(&mut self, kind: PointerEventKind) {
        self.0 &= !kind.bit();
    }

    /// Capabilities implied by the registered listeners.
    #[must_use]
    pub const fn capabilities(self) -> Capabilities {
        Capabilities {
            draggable: self.contains(PointerEventKind::Drag)
                || self.contains(PointerEventKind::DragMove)
                || self.contains(PointerEventKind::Drop),
            clickable: self.contains(PointerEventKind::Click)
                || self.contains(PointerEventKind::RightClick),
            hoverable: self.contains(PointerEventKind::Hover)
                || self.contains(PointerEventKind::HoverOut),
        }
    }
}

/// What kinds of interaction an entity takes part in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Listens to any of `drag`, `dragMove`, `drop`.
    pub draggable: bool,
    /// Listens to `click` or `rightclick`.
    pub clickable: bool,
    /// Listens to `hover` or `hoverOut`.
    pub hoverable: bool,
}
