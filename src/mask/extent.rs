//! Minimal working-grid estimation for a region list.

use glam::DVec2;

use super::grid::{GridExtent, Span};
use super::shapes::Geometry;
use crate::ast::Region;
use crate::errors::ExtractError;

/// Union of every region's conservative bounds, expanded to integer pixel
/// bounds via floor (lower) / ceil (upper).
///
/// Fails with [`ExtractError::NoValidRegions`] when the list is empty or no
/// shape contributed finite bounds.
pub fn estimate(regions: &[Region]) -> Result<GridExtent, ExtractError> {
    let mut lo = DVec2::splat(f64::INFINITY);
    let mut hi = DVec2::splat(f64::NEG_INFINITY);
    for region in regions {
        let (shape_lo, shape_hi) = region.shape.bounds();
        lo = lo.min(shape_lo);
        hi = hi.max(shape_hi);
    }
    if !lo.is_finite() || !hi.is_finite() || lo.x > hi.x || lo.y > hi.y {
        return Err(ExtractError::NoValidRegions);
    }
    Ok(GridExtent::new(
        Span::new(lo.x.floor() as i64, hi.x.ceil() as i64),
        Span::new(lo.y.floor() as i64, hi.y.ceil() as i64),
    ))
}
