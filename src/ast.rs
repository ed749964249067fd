//! Typed region records parsed from descriptor text.
//!
//! A descriptor line becomes one [`Region`]: a shape payload, an inclusion
//! flag, and the merged property map.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::mask::shapes::Geometry;

/// A property value attached to a region.
///
/// Coercion tries integer first, then float, and keeps the raw text when
/// neither parses.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn coerce(raw: &str) -> Value {
        if let Ok(i) = raw.parse::<i64>() {
            return Value::Int(i);
        }
        if let Ok(x) = raw.parse::<f64>() {
            return Value::Float(x);
        }
        Value::Text(raw.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            // {:?} keeps a decimal point on whole floats, so a Float never
            // re-coerces as an Int
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Region properties: shared defaults merged with per-region overrides.
pub type Properties = BTreeMap<String, Value>;

/// `circle(x, y, r)`
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub center: DVec2,
    pub radius: f64,
}

/// `ellipse(x, y, a1, b1, angle, a2, b2, ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseShape {
    pub center: DVec2,
    /// Semi-axis pairs `(a, b)`, outermost first. Never empty.
    pub rings: Vec<DVec2>,
    /// Position angle in degrees.
    pub angle: f64,
}

/// `box(x, y, w1, h1, angle, w2, h2, ...)` -- full side lengths
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShape {
    pub center: DVec2,
    /// Side-length pairs `(w, h)`, outermost first. Never empty.
    pub rings: Vec<DVec2>,
    /// Position angle in degrees.
    pub angle: f64,
}

/// `polygon(x1, y1, x2, y2, ...)` -- at least three vertices, closed
/// implicitly from the last back to the first
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pub vertices: Vec<DVec2>,
}

/// `annulus(x, y, r1, r2, ...)` -- radii ordered outer to inner
#[derive(Debug, Clone, PartialEq)]
pub struct AnnulusShape {
    pub center: DVec2,
    pub radii: Vec<f64>,
}

/// Closed union over the supported shape kinds.
///
/// Rasterization dispatches over this enum via [`Geometry`], so every kind
/// is handled at compile time.
#[enum_dispatch(Geometry)]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeEnum {
    Circle(CircleShape),
    Ellipse(EllipseShape),
    Box(BoxShape),
    Polygon(PolygonShape),
    Annulus(AnnulusShape),
}

impl fmt::Display for ShapeEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeEnum::Circle(c) => {
                write!(f, "circle({},{},{})", c.center.x, c.center.y, c.radius)
            }
            ShapeEnum::Ellipse(e) => write_ring_shape(f, "ellipse", e.center, &e.rings, e.angle),
            ShapeEnum::Box(b) => write_ring_shape(f, "box", b.center, &b.rings, b.angle),
            ShapeEnum::Polygon(p) => {
                write!(f, "polygon(")?;
                for (i, v) in p.vertices.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{},{}", v.x, v.y)?;
                }
                write!(f, ")")
            }
            ShapeEnum::Annulus(a) => {
                write!(f, "annulus({},{}", a.center.x, a.center.y)?;
                for r in &a.radii {
                    write!(f, ",{r}")?;
                }
                write!(f, ")")
            }
        }
    }
}

fn write_ring_shape(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    center: DVec2,
    rings: &[DVec2],
    angle: f64,
) -> fmt::Result {
    write!(f, "{name}({},{}", center.x, center.y)?;
    if let Some((first, rest)) = rings.split_first() {
        write!(f, ",{},{},{}", first.x, first.y, angle)?;
        for r in rest {
            write!(f, ",{},{}", r.x, r.y)?;
        }
    }
    write!(f, ")")
}

/// One parsed region.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub shape: ShapeEnum,
    /// `true` contributes to the union; `false` is the `-shape` exclusion
    /// variant contributing to subtraction.
    pub include: bool,
    pub properties: Properties,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.include {
            write!(f, "-")?;
        }
        write!(f, "{}", self.shape)?;
        if !self.properties.is_empty() {
            write!(f, " #")?;
            for (key, value) in &self.properties {
                write!(f, " {key}={value}")?;
            }
        }
        Ok(())
    }
}

/// Ordered region sequence plus parse-level bookkeeping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionList {
    pub regions: Vec<Region>,
    /// Shape keywords outside the supported set, aggregated for one warning
    /// at the end of extraction.
    pub unknown_shapes: BTreeSet<String>,
    /// Coordinate-system selector line, recorded verbatim and handed back to
    /// the caller, never interpreted.
    pub coord_system: Option<String>,
}

impl fmt::Display for RegionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(system) = &self.coord_system {
            writeln!(f, "{system}")?;
        }
        for region in &self.regions {
            writeln!(f, "{region}")?;
        }
        Ok(())
    }
}
