//! Descriptor text -> typed [`RegionList`].
//!
//! Parsing is tolerant by design: lines that fail the grammar, and
//! recognized keywords with the wrong coordinate arity, are skipped
//! silently. Unrecognized shape keywords are collected so extraction can
//! surface one aggregated warning.

use glam::{DVec2, dvec2};
use pest::Parser;
use pest::iterators::Pair;

use crate::ast::{
    AnnulusShape, BoxShape, CircleShape, EllipseShape, PolygonShape, Properties, Region,
    RegionList, ShapeEnum, Value,
};
use crate::{RegionParser, Rule};

/// Shape keywords the rasterizer understands.
const SUPPORTED_SHAPES: [&str; 7] = [
    "circle", "ellipse", "box", "polygon", "annulus", "panda", "epanda",
];

/// Parse descriptor text into an ordered region list.
///
/// Input is split on newlines and semicolons (the viewer emits both
/// layouts); each candidate line is matched independently against the
/// grammar.
pub fn parse_regions(text: &str) -> RegionList {
    let mut list = RegionList::default();
    let mut defaults = Properties::new();
    for candidate in text.split(['\n', ';']) {
        let line = candidate.trim();
        if line.is_empty() {
            continue;
        }
        let Ok(pairs) = RegionParser::parse(Rule::line, line) else {
            continue;
        };
        for pair in pairs {
            if pair.as_rule() != Rule::line {
                continue;
            }
            for inner in pair.into_inner() {
                match inner.as_rule() {
                    Rule::global_line => collect_properties(inner, &mut defaults),
                    Rule::system_line => {
                        list.coord_system = Some(inner.as_str().to_ascii_lowercase());
                    }
                    Rule::region_line => build_region(inner, &defaults, &mut list),
                    _ => {}
                }
            }
        }
    }
    list
}

/// Merge `key=value` tokens from a global line or a region tail into a
/// property map. Stray tokens between pairs are ignored.
fn collect_properties(pair: Pair<'_, Rule>, into: &mut Properties) {
    for token in pair.into_inner() {
        if token.as_rule() != Rule::property {
            continue;
        }
        let mut parts = token.into_inner();
        let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        into.insert(key.as_str().to_string(), Value::coerce(value.as_str()));
    }
}

fn build_region(pair: Pair<'_, Rule>, defaults: &Properties, list: &mut RegionList) {
    let mut include = true;
    let mut keyword = String::new();
    let mut coords = Vec::new();
    let mut properties = defaults.clone();
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::exclude => include = false,
            Rule::keyword => keyword = inner.as_str().to_ascii_lowercase(),
            Rule::coordinates => {
                for number in inner.into_inner() {
                    let Ok(v) = number.as_str().parse::<f64>() else {
                        return;
                    };
                    coords.push(v);
                }
            }
            Rule::tail => collect_properties(inner, &mut properties),
            _ => {}
        }
    }
    if !SUPPORTED_SHAPES.contains(&keyword.as_str()) {
        list.unknown_shapes.insert(keyword);
        return;
    }
    let Some(shape) = build_shape(&keyword, &coords) else {
        // recognized keyword with the wrong arity: malformed, skipped
        return;
    };
    list.regions.push(Region {
        shape,
        include,
        properties,
    });
}

fn build_shape(keyword: &str, c: &[f64]) -> Option<ShapeEnum> {
    let shape: ShapeEnum = match keyword {
        "circle" if c.len() == 3 => CircleShape {
            center: dvec2(c[0], c[1]),
            radius: c[2],
        }
        .into(),
        "ellipse" if ring_arity(c.len()) => EllipseShape {
            center: dvec2(c[0], c[1]),
            rings: axis_rings(c),
            angle: c[4],
        }
        .into(),
        "box" if ring_arity(c.len()) => BoxShape {
            center: dvec2(c[0], c[1]),
            rings: axis_rings(c),
            angle: c[4],
        }
        .into(),
        "polygon" if c.len() >= 6 && c.len() % 2 == 0 => PolygonShape {
            vertices: c.chunks_exact(2).map(|v| dvec2(v[0], v[1])).collect(),
        }
        .into(),
        "annulus" if c.len() >= 4 => AnnulusShape {
            center: dvec2(c[0], c[1]),
            radii: c[2..].to_vec(),
        }
        .into(),
        // panda(x, y, ang1, ang2, nang, rin, rout, nrad): the angular
        // subdivisions are not honored, the mask covers the full radial band
        "panda" if c.len() == 8 => AnnulusShape {
            center: dvec2(c[0], c[1]),
            radii: vec![c[6], c[5]],
        }
        .into(),
        // epanda(x, y, ang1, ang2, nang, a1, b1, a2, b2, nrad[, angle])
        "epanda" if c.len() == 10 || c.len() == 11 => EllipseShape {
            center: dvec2(c[0], c[1]),
            rings: vec![dvec2(c[7], c[8]), dvec2(c[5], c[6])],
            angle: c.get(10).copied().unwrap_or(0.0),
        }
        .into(),
        _ => return None,
    };
    Some(shape)
}

/// ellipse/box take `x, y, a1, b1, angle` plus whole extra ring pairs.
fn ring_arity(len: usize) -> bool {
    len >= 5 && (len - 5) % 2 == 0
}

/// First ring at positions 2..4, further rings after the angle.
fn axis_rings(c: &[f64]) -> Vec<DVec2> {
    let mut rings = vec![dvec2(c[2], c[3])];
    rings.extend(c[5..].chunks_exact(2).map(|p| dvec2(p[0], p[1])));
    rings
}
