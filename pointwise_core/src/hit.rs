// Copyright 2026 the Pointwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-in-entity tests.
//!
//! The world point is moved into the entity's local frame (origin at the
//! entity's center, rotation undone) and then tested against either the
//! collision polygon or the style's [`Shape`] scaled by the effective scale.
//!
//! Collision polygons use the non-zero winding rule.
//!
//! Every test is total: invisible, degenerate, or non-finite entities simply
//! report a miss, so the router stays usable while a scene is being torn down
//! or half-initialized.

use kurbo::{Affine, BezPath, Point, Shape as _, Vec2};

use crate::entity::{EntityId, SceneGraph, Shape};

/// Returns whether the world-space `point` lies inside `id`.
///
/// # Panics
///
/// Panics if `id` is stale.
#[must_use]
pub fn contains(graph: &SceneGraph, id: EntityId, point: Point) -> bool {
    let style = graph.style(id);
    if !style.visible {
        return false;
    }

    let size = graph.size(id);
    if !(size.width.is_finite() && size.height.is_finite())
        || size.width <= 0.0
        || size.height <= 0.0
    {
        return false;
    }

    let origin = graph.absolute_position(id);
    if !(point.is_finite() && origin.is_finite() && style.rotation.is_finite()) {
        return false;
    }

    let center = origin + size.to_vec2() * 0.5;
    let local = to_local(point - center, style.rotation);

    if let Some(polygon) = graph.collision_polygon(id)
        && polygon.len() >= 3
    {
        return polygon_contains(polygon, local);
    }

    let (sx, sy) = style.effective_scale();
    let half_w = size.width * sx / 2.0;
    let half_h = size.height * sy / 2.0;
    if !(half_w.is_finite() && half_h.is_finite()) || half_w <= 0.0 || half_h <= 0.0 {
        return false;
    }

    match style.shape {
        Shape::Circle => {
            let radius = half_w.min(half_h);
            local.to_vec2().hypot2() <= radius * radius
        }
        Shape::Triangle => triangle_contains(
            Point::new(0.0, -half_h),
            Point::new(half_w, half_h),
            Point::new(-half_w, half_h),
            local,
        ),
        Shape::Rectangle => local.x.abs() <= half_w && local.y.abs() <= half_h,
    }
}

/// Undoes a rotation of `degrees` about the origin.
fn to_local(offset: Vec2, degrees: f64) -> Point {
    if degrees == 0.0 {
        return offset.to_point();
    }
    Affine::rotate(-degrees.to_radians()) * offset.to_point()
}

/// Non-zero winding test against a closed polygon.
///
/// Regions a self-intersecting polygon wraps more than once (the center of a
/// pentagram) are inside, unlike with the even-odd rule.
fn polygon_contains(vertices: &[Point], point: Point) -> bool {
    if vertices.iter().any(|v| !v.is_finite()) {
        return false;
    }
    let mut path = BezPath::new();
    path.move_to(vertices[0]);
    for &v in &vertices[1..] {
        path.line_to(v);
    }
    path.close_path();
    path.contains(point)
}

/// Inclusive edge-sign test; works for either winding direction.
fn triangle_contains(a: Point, b: Point, c: Point, p: Point) -> bool {
    let d1 = (b - a).cross(p - a);
    let d2 = (c - b).cross(p - b);
    let d3 = (a - c).cross(p - c);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}
