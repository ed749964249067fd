//! Terminal failures of a mask extraction.
//!
//! Everything else the parser or rasterizer hits is recovered locally:
//! malformed lines are skipped, unknown shape keywords are collected for one
//! aggregated warning, and property values that fail numeric coercion fall
//! back to text. Only these two conditions abort the whole extraction.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// The descriptor text produced no region, or no region contributed
    /// finite bounds to the working grid.
    #[error("no valid regions")]
    #[diagnostic(
        code(regmask::extract::no_valid_regions),
        help("the descriptor text contained no recognized region line")
    )]
    NoValidRegions,

    /// Regions existed but the combined mask holds no true pixel.
    #[error("empty mask")]
    #[diagnostic(
        code(regmask::extract::empty_mask),
        help("the regions cancelled each other out or matched no pixel")
    )]
    EmptyMask,
}
