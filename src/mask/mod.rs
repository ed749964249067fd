//! Mask rasterization: extent estimation, per-shape evaluation,
//! combination, and cropping.
//!
//! The pipeline is purely computational and owns no state across calls;
//! per-pixel evaluation order never affects the result.

pub mod extent;
pub mod grid;
pub mod polygon;
pub mod shapes;

use crate::ast::{Region, RegionList};
use crate::errors::ExtractError;
use crate::log::{debug, warn};
use grid::{GridExtent, Mask};
use shapes::Geometry;

/// Which grid an extraction rasterizes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskExtent {
    /// A caller-supplied frame, typically the full image.
    Frame(GridExtent),
    /// The minimal integer bounding box of the region list.
    FitRegions,
}

/// Extraction knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Suppress the aggregated unknown-shape warning.
    pub quiet: bool,
}

/// Rasterize a parsed region list into a cropped boolean mask.
pub fn extract(
    list: &RegionList,
    extent: MaskExtent,
    options: &ExtractOptions,
) -> Result<Mask, ExtractError> {
    if !options.quiet && !list.unknown_shapes.is_empty() {
        warn!("ignoring unknown region shapes: {:?}", list.unknown_shapes);
    }
    if list.regions.is_empty() {
        return Err(ExtractError::NoValidRegions);
    }
    let frame = match extent {
        MaskExtent::Frame(frame) => frame,
        MaskExtent::FitRegions => extent::estimate(&list.regions)?,
    };
    debug!(
        "rasterizing {} region(s) over x {}..={} y {}..={}",
        list.regions.len(),
        frame.x.lo,
        frame.x.hi,
        frame.y.lo,
        frame.y.hi
    );
    let mask = combine(&list.regions, frame).crop()?;
    debug!("cropped mask holds {} true pixel(s)", mask.area());
    Ok(mask)
}

/// Fold every region into the two accumulators and intersect them.
///
/// `union` starts all-false and ORs in each include shape; `keep` starts
/// all-true and is AND-ed with the complement of each exclusion shape. The
/// final mask is `union & keep`, so region order never changes the result;
/// only the ring order inside one shape is order-sensitive.
pub fn combine(regions: &[Region], frame: GridExtent) -> Mask {
    let mut union = Mask::filled(frame, false);
    let mut keep = Mask::filled(frame, true);
    for region in regions {
        let membership = Mask::from_fn(frame, |point| region.shape.contains(point));
        if region.include {
            union.or_assign(&membership);
        } else {
            keep.and_not_assign(&membership);
        }
    }
    union.and_assign(&keep);
    union
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_regions;
    use super::grid::Span;

    #[test]
    fn exclusion_punches_a_hole_in_the_union() {
        let regions = parse_regions("circle(0,0,4.5)\n-circle(0,0,2.5)").regions;
        let frame = GridExtent::new(Span::new(-5, 5), Span::new(-5, 5));
        let mask = combine(&regions, frame);
        assert!(mask.get(3, 0));
        assert!(!mask.get(0, 0));
        assert!(!mask.get(1, 1));
    }

    #[test]
    fn lone_exclusion_leaves_nothing() {
        let regions = parse_regions("-circle(0,0,3)").regions;
        let frame = GridExtent::new(Span::new(-4, 4), Span::new(-4, 4));
        assert_eq!(combine(&regions, frame).area(), 0);
    }

    #[test]
    fn unknown_only_list_is_no_valid_regions() {
        let list = parse_regions("point(1,2)\nvector(0,0,5,5)");
        let err = extract(&list, MaskExtent::FitRegions, &ExtractOptions { quiet: true });
        assert_eq!(err, Err(ExtractError::NoValidRegions));
    }
}
