//! Per-shape membership predicates and bounds.
//!
//! Multi-ring shapes fold their rings outer to inner with an alternating
//! inclusion flag: the outermost ring always includes, the next excludes,
//! and so on. The alternation stays internal to one shape; the combiner
//! only ever sees the folded result.

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use super::polygon::{self, PolygonSide};
use crate::ast::{AnnulusShape, BoxShape, CircleShape, EllipseShape, PolygonShape, ShapeEnum};

/// Membership and bounds of one shape, dispatched over
/// [`ShapeEnum`](crate::ast::ShapeEnum).
#[enum_dispatch]
pub trait Geometry {
    /// Does `point` lie on the shape?
    fn contains(&self, point: DVec2) -> bool;

    /// Conservative axis-aligned bounds `(min, max)` in region coordinates.
    fn bounds(&self) -> (DVec2, DVec2);
}

impl Geometry for CircleShape {
    fn contains(&self, point: DVec2) -> bool {
        point.distance_squared(self.center) < self.radius * self.radius
    }

    fn bounds(&self) -> (DVec2, DVec2) {
        let r = DVec2::splat(self.radius);
        (self.center - r, self.center + r)
    }
}

impl Geometry for EllipseShape {
    fn contains(&self, point: DVec2) -> bool {
        let local = rotate_into(point - self.center, self.angle);
        fold_rings(self.rings.iter().map(|semi| ellipse_ring(local, *semi)))
    }

    fn bounds(&self) -> (DVec2, DVec2) {
        let r = DVec2::splat(outer_radius(self.rings.iter().map(|s| s.x.max(s.y))));
        (self.center - r, self.center + r)
    }
}

impl Geometry for BoxShape {
    fn contains(&self, point: DVec2) -> bool {
        let local = rotate_into(point - self.center, self.angle);
        fold_rings(self.rings.iter().map(|side| box_ring(local, *side)))
    }

    fn bounds(&self) -> (DVec2, DVec2) {
        // half the diagonal, rounded up, so no rotation escapes the bounds
        let r = DVec2::splat(outer_radius(
            self.rings.iter().map(|s| (s.length() / 2.0).ceil()),
        ));
        (self.center - r, self.center + r)
    }
}

impl Geometry for PolygonShape {
    fn contains(&self, point: DVec2) -> bool {
        // a boundary point counts as on the shape
        polygon::classify(point, &self.vertices) != PolygonSide::Outside
    }

    fn bounds(&self) -> (DVec2, DVec2) {
        let mut lo = DVec2::splat(f64::INFINITY);
        let mut hi = DVec2::splat(f64::NEG_INFINITY);
        for v in &self.vertices {
            lo = lo.min(*v);
            hi = hi.max(*v);
        }
        (lo, hi)
    }
}

impl Geometry for AnnulusShape {
    fn contains(&self, point: DVec2) -> bool {
        let d2 = point.distance_squared(self.center);
        fold_rings(self.radii.iter().map(|r| d2 < r * r))
    }

    fn bounds(&self) -> (DVec2, DVec2) {
        let r = DVec2::splat(outer_radius(self.radii.iter().copied()));
        (self.center - r, self.center + r)
    }
}

/// Rotate grid-relative coordinates into the shape's local frame.
fn rotate_into(delta: DVec2, angle_deg: f64) -> DVec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    DVec2::new(delta.x * cos + delta.y * sin, -delta.x * sin + delta.y * cos)
}

/// `x'^2 + (y' a/b)^2 < a^2` for semi-axes `(a, b)`.
fn ellipse_ring(local: DVec2, semi: DVec2) -> bool {
    if semi.y == 0.0 {
        return false;
    }
    let stretched = local.y * semi.x / semi.y;
    local.x * local.x + stretched * stretched < semi.x * semi.x
}

/// `|2x'| < w && |2y'| < h` for full side lengths `(w, h)`.
fn box_ring(local: DVec2, side: DVec2) -> bool {
    (2.0 * local.x).abs() < side.x && (2.0 * local.y).abs() < side.y
}

/// Outer-to-inner alternation: include, exclude, include, ...
fn fold_rings(ring_hits: impl Iterator<Item = bool>) -> bool {
    let mut inside = false;
    let mut include = true;
    for hit in ring_hits {
        if include {
            inside = inside || hit;
        } else {
            inside = inside && !hit;
        }
        include = !include;
    }
    inside
}

/// Largest entry; equals the first under the documented outer-to-inner
/// ordering, still total when input violates it.
fn outer_radius(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}
