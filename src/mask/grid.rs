//! Boolean pixel grids addressed by explicit integer coordinate ranges.
//!
//! A mask is not zero-based: each axis carries an inclusive [`Span`] of
//! logical coordinates, and a pixel's logical coordinate is its grid index
//! plus the axis' first value. The extent is the contract handed to the
//! external pixel-fetch collaborator.

use std::fmt;

use glam::DVec2;

use crate::errors::ExtractError;

/// Inclusive integer coordinate range along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub lo: i64,
    pub hi: i64,
}

impl Span {
    pub fn new(lo: i64, hi: i64) -> Self {
        debug_assert!(lo <= hi, "span {lo}..={hi} is inverted");
        Self { lo, hi }
    }

    pub fn len(&self) -> usize {
        (self.hi - self.lo + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    pub fn contains(&self, v: i64) -> bool {
        self.lo <= v && v <= self.hi
    }
}

/// One [`Span`] per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridExtent {
    pub x: Span,
    pub y: Span,
}

impl GridExtent {
    pub fn new(x: Span, y: Span) -> Self {
        Self { x, y }
    }
}

/// Row-major boolean grid over a [`GridExtent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    extent: GridExtent,
    bits: Vec<bool>,
}

impl Mask {
    /// Uniform mask, used for the union (`false`) and keep (`true`)
    /// accumulators.
    pub fn filled(extent: GridExtent, value: bool) -> Self {
        Self {
            extent,
            bits: vec![value; extent.x.len() * extent.y.len()],
        }
    }

    /// Evaluate a membership predicate at every logical grid point.
    pub fn from_fn(extent: GridExtent, mut membership: impl FnMut(DVec2) -> bool) -> Self {
        let mut bits = Vec::with_capacity(extent.x.len() * extent.y.len());
        for y in extent.y.lo..=extent.y.hi {
            for x in extent.x.lo..=extent.x.hi {
                bits.push(membership(DVec2::new(x as f64, y as f64)));
            }
        }
        Self { extent, bits }
    }

    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    /// Pixel at a logical coordinate; anything outside the extent is false.
    pub fn get(&self, x: i64, y: i64) -> bool {
        self.index(x, y).map(|i| self.bits[i]).unwrap_or(false)
    }

    pub fn set(&mut self, x: i64, y: i64, value: bool) {
        if let Some(i) = self.index(x, y) {
            self.bits[i] = value;
        }
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if !self.extent.x.contains(x) || !self.extent.y.contains(y) {
            return None;
        }
        let width = self.extent.x.len();
        Some((y - self.extent.y.lo) as usize * width + (x - self.extent.x.lo) as usize)
    }

    /// `self |= other`, pointwise. Both masks must share one extent.
    pub fn or_assign(&mut self, other: &Mask) {
        debug_assert_eq!(self.extent, other.extent);
        for (dst, &src) in self.bits.iter_mut().zip(&other.bits) {
            *dst |= src;
        }
    }

    /// `self &= other`, pointwise.
    pub fn and_assign(&mut self, other: &Mask) {
        debug_assert_eq!(self.extent, other.extent);
        for (dst, &src) in self.bits.iter_mut().zip(&other.bits) {
            *dst &= src;
        }
    }

    /// `self &= !other`, pointwise. The exclusion step of the combiner.
    pub fn and_not_assign(&mut self, other: &Mask) {
        debug_assert_eq!(self.extent, other.extent);
        for (dst, &src) in self.bits.iter_mut().zip(&other.bits) {
            *dst &= !src;
        }
    }

    /// Number of true pixels.
    pub fn area(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Tight bounding box of the true pixels, from row and column occupancy
    /// scans. `None` when the mask is all-false.
    pub fn bounds(&self) -> Option<GridExtent> {
        if self.bits.is_empty() {
            return None;
        }
        let width = self.extent.x.len();
        let mut row_any = vec![false; self.extent.y.len()];
        let mut col_any = vec![false; width];
        for (i, &bit) in self.bits.iter().enumerate() {
            if bit {
                row_any[i / width] = true;
                col_any[i % width] = true;
            }
        }
        let y0 = row_any.iter().position(|&b| b)?;
        let y1 = row_any.iter().rposition(|&b| b)?;
        let x0 = col_any.iter().position(|&b| b)?;
        let x1 = col_any.iter().rposition(|&b| b)?;
        Some(GridExtent::new(
            Span::new(self.extent.x.lo + x0 as i64, self.extent.x.lo + x1 as i64),
            Span::new(self.extent.y.lo + y0 as i64, self.extent.y.lo + y1 as i64),
        ))
    }

    /// Re-express the mask over the minimal rectangle containing any true
    /// pixel, with the origin updated accordingly.
    ///
    /// An all-false mask is an explicit failure, never a zero-sized grid.
    pub fn crop(&self) -> Result<Mask, ExtractError> {
        let Some(tight) = self.bounds() else {
            return Err(ExtractError::EmptyMask);
        };
        Ok(Mask::from_fn(tight, |p| self.get(p.x as i64, p.y as i64)))
    }
}

impl fmt::Display for Mask {
    /// Rows of `#`/`.`, top row at the extent's low y.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in self.extent.y.lo..=self.extent.y.hi {
            if y > self.extent.y.lo {
                f.write_str("\n")?;
            }
            for x in self.extent.x.lo..=self.extent.x.hi {
                f.write_str(if self.get(x, y) { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}
