//! regmask: region-descriptor parsing and boolean pixel-mask rasterization.
//!
//! Descriptor text (circles, ellipses, boxes, polygons, annuli, and their
//! `-shape` exclusion variants) becomes a boolean grid over an explicit
//! integer coordinate range: include shapes union together, exclusion
//! shapes subtract, multi-ring shapes alternate outer to inner, and the
//! result is cropped to the minimal rectangle containing any true pixel.

use pest_derive::Parser;

pub mod ast;
pub mod errors;
pub mod log;
pub mod mask;
pub mod parse;

pub use ast::{Properties, Region, RegionList, ShapeEnum, Value};
pub use errors::ExtractError;
pub use mask::grid::{GridExtent, Mask, Span};
pub use mask::{ExtractOptions, MaskExtent};
pub use parse::parse_regions;

#[derive(Parser)]
#[grammar = "region.pest"]
pub struct RegionParser;

/// Extract a cropped boolean mask from region descriptor text.
///
/// The returned [`Mask`] carries the integer coordinate range to hand to
/// the pixel-fetch collaborator.
pub fn extract(text: &str, extent: MaskExtent) -> Result<Mask, ExtractError> {
    extract_with(text, extent, &ExtractOptions::default())
}

/// [`extract`] with explicit options.
pub fn extract_with(
    text: &str,
    extent: MaskExtent,
    options: &ExtractOptions,
) -> Result<Mask, ExtractError> {
    let list = parse_regions(text);
    log::debug!(
        "parsed {} region(s), {} unknown keyword(s)",
        list.regions.len(),
        list.unknown_shapes.len()
    );
    mask::extract(&list, extent, options)
}
