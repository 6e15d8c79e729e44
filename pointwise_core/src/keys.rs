// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard combo normalization.
//!
//! Raw key names, as reported by the platform (`"Control"`, `"ArrowUp"`,
//! `" "`), are normalized into lower-case tokens (`"ctrl"`, `"up"`,
//! `"space"`). The set of currently pressed tokens renders as a combo string
//! with modifiers first in a fixed order (`ctrl`, `shift`, `alt`, `meta`) and
//! every other key sorted alphabetically, joined with `+`:
//!
//! ```
//! use pointwise_core::keys::{PressedKeys, combo};
//!
//! let mut keys = PressedKeys::new();
//! keys.press("a");
//! keys.press("Shift");
//! keys.press("Control");
//! assert_eq!(combo(&keys), "ctrl+shift+a");
//! ```
//!
//! No token contains `+` (the `+` key itself becomes `plus`), so splitting a
//! combo on `+` always recovers its tokens.
//!
//! The pressed set only changes on explicit press/release. A key whose
//! release was never observed (for example because the window lost focus)
//! stays pressed until the host calls [`PressedKeys::clear`].

use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Modifier tokens, in combo order.
pub const MODIFIERS: [&str; 4] = ["ctrl", "shift", "alt", "meta"];

/// Raw (lower-cased) key names and the tokens they normalize to.
const ALIASES: &[(&str, &str)] = &[
    ("control", "ctrl"),
    (" ", "space"),
    ("spacebar", "space"),
    ("arrowup", "up"),
    ("arrowdown", "down"),
    ("arrowleft", "left"),
    ("arrowright", "right"),
    ("escape", "esc"),
    ("os", "meta"),
    ("command", "meta"),
    ("cmd", "meta"),
    ("super", "meta"),
    ("option", "alt"),
    ("return", "enter"),
    ("del", "delete"),
    ("+", "plus"),
];

/// Normalizes a raw key name into its canonical token.
///
/// Unknown names pass through lower-cased.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let lower = raw.to_lowercase();
    ALIASES
        .iter()
        .find(|(from, _)| *from == lower)
        .map_or(lower, |(_, to)| (*to).to_string())
}

/// Sort rank of a token: modifiers by their fixed priority, then everything
/// else.
fn rank(token: &str) -> usize {
    MODIFIERS
        .iter()
        .position(|m| *m == token)
        .unwrap_or(MODIFIERS.len())
}

/// Renders the pressed set as a canonical combo string.
///
/// Returns an empty string when nothing is pressed.
#[must_use]
pub fn combo(keys: &PressedKeys) -> String {
    let mut tokens: Vec<&str> = keys.iter().collect();
    tokens.sort_by(|a, b| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)));
    tokens.join("+")
}

/// The set of keys for which a press was observed without a matching
/// release.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PressedKeys {
    tokens: BTreeSet<String>,
}

impl PressedKeys {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a press of `raw`. Returns the normalized token.
    pub fn press(&mut self, raw: &str) -> String {
        let token = normalize(raw);
        self.tokens.insert(token.clone());
        token
    }

    /// Records a release of `raw`. Returns the normalized token.
    pub fn release(&mut self, raw: &str) -> String {
        let token = normalize(raw);
        self.tokens.remove(&token);
        token
    }

    /// Whether the key is currently pressed. Accepts raw names or tokens.
    #[must_use]
    pub fn is_pressed(&self, raw: &str) -> bool {
        self.tokens.contains(&normalize(raw))
    }

    /// Forgets every pressed key.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Number of pressed keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no key is pressed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates pressed tokens in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}
