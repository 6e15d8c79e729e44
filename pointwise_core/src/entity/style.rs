// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-entity style bag.

/// The geometric outline used for hit testing when no collision polygon is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Axis-aligned (before rotation) box covering the entity bounds.
    #[default]
    Rectangle,
    /// Circle inscribed in the bounds; the radius is half the shorter side.
    Circle,
    /// Isosceles triangle with its apex at the top-center of the bounds and
    /// its base along the bottom edge.
    Triangle,
}

/// Visual properties that influence hit testing.
///
/// Rotation is in degrees, clockwise in a y-down world, about the entity's
/// own center. The effective scale on each axis is `scale * scale_x` and
/// `scale * scale_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    /// Whether the entity is drawn. Invisible entities are never hit.
    pub visible: bool,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Horizontal scale factor, applied on top of [`scale`](Self::scale).
    pub scale_x: f64,
    /// Vertical scale factor, applied on top of [`scale`](Self::scale).
    pub scale_y: f64,
    /// Hit-test outline.
    pub shape: Shape,
}

impl Style {
    /// Visible, unrotated, unscaled rectangle.
    pub const DEFAULT: Self = Self {
        visible: true,
        rotation: 0.0,
        scale: 1.0,
        scale_x: 1.0,
        scale_y: 1.0,
        shape: Shape::Rectangle,
    };

    /// Returns this style with the given shape.
    #[must_use]
    pub const fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Returns this style with the given rotation in degrees.
    #[must_use]
    pub const fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Returns this style with the given uniform scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Returns this style with the given visibility.
    #[must_use]
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Effective horizontal and vertical scale factors.
    #[inline]
    #[must_use]
    pub fn effective_scale(&self) -> (f64, f64) {
        (self.scale * self.scale_x, self.scale * self.scale_y)
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::DEFAULT
    }
}
