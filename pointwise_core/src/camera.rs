// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device-to-world coordinate mapping.
//!
//! The camera itself (pan, zoom, follow) lives outside this crate. The router
//! only needs the pure mapping from surface coordinates to world coordinates,
//! which hosts provide through [`Camera`].

use kurbo::{Affine, Point};

/// Maps surface coordinates to world coordinates.
pub trait Camera {
    /// Converts a point on the rendering surface to a world-space point.
    fn screen_to_world(&self, point: Point) -> Point;
}

/// A camera where surface and world coordinates coincide.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityCamera;

impl Camera for IdentityCamera {
    #[inline]
    fn screen_to_world(&self, point: Point) -> Point {
        point
    }
}

/// A camera described by its world-to-surface transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    world_to_surface: Affine,
    surface_to_world: Affine,
}

impl ViewTransform {
    /// Creates a camera from the transform the renderer applies to draw
    /// world geometry onto the surface.
    ///
    /// A non-invertible transform collapses every surface point onto the
    /// world origin rather than producing non-finite coordinates.
    #[must_use]
    pub fn new(world_to_surface: Affine) -> Self {
        let surface_to_world = if world_to_surface.determinant() == 0.0 {
            Affine::scale(0.0)
        } else {
            world_to_surface.inverse()
        };
        Self {
            world_to_surface,
            surface_to_world,
        }
    }

    /// A camera that pans so `center` sits at the surface origin, then zooms.
    #[must_use]
    pub fn pan_zoom(center: Point, zoom: f64) -> Self {
        Self::new(Affine::scale(zoom) * Affine::translate(-center.to_vec2()))
    }

    /// The world-to-surface transform.
    #[must_use]
    pub fn world_to_surface(&self) -> Affine {
        self.world_to_surface
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(Affine::IDENTITY)
    }
}

impl Camera for ViewTransform {
    fn screen_to_world(&self, point: Point) -> Point {
        self.surface_to_world * point
    }
}

impl<C: Camera + ?Sized> Camera for &C {
    fn screen_to_world(&self, point: Point) -> Point {
        (**self).screen_to_world(point)
    }
}
