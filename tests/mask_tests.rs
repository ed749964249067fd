//! End-to-end properties of the extraction pipeline.

use glam::dvec2;
use regmask::mask::polygon::{PolygonSide, classify};
use regmask::mask::{combine, shapes::Geometry};
use regmask::{
    ExtractError, ExtractOptions, GridExtent, MaskExtent, Span, extract, extract_with,
    parse_regions,
};

fn frame(x0: i64, x1: i64, y0: i64, y1: i64) -> GridExtent {
    GridExtent::new(Span::new(x0, x1), Span::new(y0, y1))
}

#[test]
fn single_circle_matches_its_closed_form() {
    let mask = extract("circle(0,0,4.5)", MaskExtent::Frame(frame(-10, 10, -10, 10))).unwrap();
    for y in -10..=10 {
        for x in -10..=10 {
            let expected = ((x * x + y * y) as f64) < 4.5 * 4.5;
            assert_eq!(mask.get(x, y), expected, "pixel ({x},{y})");
        }
    }
}

#[test]
fn circle_mask_ascii_dump() {
    let mask = extract("circle(0,0,2.5)", MaskExtent::FitRegions).unwrap();
    assert_eq!(mask.extent(), frame(-2, 2, -2, 2));
    assert_eq!(mask.to_string(), ".###.\n#####\n#####\n#####\n.###.");
}

#[test]
fn annulus_mask_snapshot() {
    let mask = extract("annulus(0,0,4.5,2.5)", MaskExtent::FitRegions).unwrap();
    insta::assert_snapshot!(mask, @r"
    ..#####..
    .#######.
    ###...###
    ##.....##
    ##.....##
    ##.....##
    ###...###
    .#######.
    ..#####..
    ");
}

#[test]
fn identical_negative_shape_cancels_to_empty_mask() {
    let err = extract("circle(5,5,3)\n-circle(5,5,3)", MaskExtent::FitRegions).unwrap_err();
    assert_eq!(err, ExtractError::EmptyMask);
}

#[test]
fn point_on_polygon_edge_is_inside() {
    let square = [
        dvec2(0.0, 0.0),
        dvec2(10.0, 0.0),
        dvec2(10.0, 10.0),
        dvec2(0.0, 10.0),
    ];
    assert_eq!(classify(dvec2(5.0, 0.0), &square), PolygonSide::OnEdge);

    let mask = extract(
        "polygon(0,0,10,0,10,10,0,10)",
        MaskExtent::Frame(frame(-2, 12, -2, 12)),
    )
    .unwrap();
    assert!(mask.get(5, 0), "edge pixel belongs to the shape");
    assert!(mask.get(5, 5));
    assert!(!mask.get(11, 5));
}

#[test]
fn annulus_alternates_included_and_excluded_rings() {
    let mask = extract("annulus(0,0,10,6,3)", MaskExtent::FitRegions).unwrap();
    assert!(mask.get(8, 0), "r=8 sits in the outer included band");
    assert!(!mask.get(4, 0), "r=4 sits in the excluded ring");
    assert!(mask.get(1, 0), "r=1 sits in the innermost included disc");
}

#[test]
fn region_order_never_changes_the_mask() {
    let lines = ["circle(0,0,6)", "box(2,2,4,4,0)", "-circle(3,0,2)"];
    let forward = extract(&lines.join("\n"), MaskExtent::FitRegions).unwrap();
    let reversed = {
        let mut reordered = lines;
        reordered.reverse();
        extract(&reordered.join("\n"), MaskExtent::FitRegions).unwrap()
    };
    assert_eq!(forward, reversed);
}

#[test]
fn crop_leaves_no_blank_border_and_is_idempotent() {
    let regions = parse_regions("circle(0,0,2.5)").regions;
    let mask = combine(&regions, frame(-20, 20, -20, 20));
    let cropped = mask.crop().unwrap();

    let e = cropped.extent();
    assert!((e.x.lo..=e.x.hi).any(|x| cropped.get(x, e.y.lo)), "top row blank");
    assert!((e.x.lo..=e.x.hi).any(|x| cropped.get(x, e.y.hi)), "bottom row blank");
    assert!((e.y.lo..=e.y.hi).any(|y| cropped.get(e.x.lo, y)), "left column blank");
    assert!((e.y.lo..=e.y.hi).any(|y| cropped.get(e.x.hi, y)), "right column blank");

    assert_eq!(cropped.crop().unwrap(), cropped);
}

#[test]
fn unrotated_box_and_ellipse_match_their_axis_aligned_forms() {
    let list = parse_regions("box(0,0,8,6,0)\nellipse(0,0,4,3,0)");
    let (box_shape, ellipse_shape) = (&list.regions[0].shape, &list.regions[1].shape);
    for y in -6..=6 {
        for x in -6..=6 {
            let p = dvec2(x as f64, y as f64);
            let box_expected = (2.0 * p.x).abs() < 8.0 && (2.0 * p.y).abs() < 6.0;
            let ellipse_expected = p.x * p.x + (p.y * 4.0 / 3.0).powi(2) < 16.0;
            assert_eq!(box_shape.contains(p), box_expected, "box ({x},{y})");
            assert_eq!(ellipse_shape.contains(p), ellipse_expected, "ellipse ({x},{y})");
        }
    }
}

#[test]
fn empty_region_list_is_no_valid_regions() {
    let err = extract("", MaskExtent::FitRegions).unwrap_err();
    assert_eq!(err, ExtractError::NoValidRegions);

    let framed = extract("", MaskExtent::Frame(frame(0, 10, 0, 10))).unwrap_err();
    assert_eq!(framed, ExtractError::NoValidRegions);
}

#[test]
fn fully_cancelled_regions_are_empty_mask() {
    let err = extract(
        "box(0,0,6,6,0)\n-box(0,0,8,8,0)",
        MaskExtent::Frame(frame(-10, 10, -10, 10)),
    )
    .unwrap_err();
    assert_eq!(err, ExtractError::EmptyMask);
}

#[test]
fn unknown_shapes_are_ignored_but_extraction_proceeds() {
    let list = parse_regions("circle(0,0,3)\nvector(0,0,5,5)\npoint(1,1)");
    assert_eq!(list.regions.len(), 1);
    assert!(list.unknown_shapes.contains("vector"));
    assert!(list.unknown_shapes.contains("point"));

    let mask = extract_with(
        "circle(0,0,3)\nvector(0,0,5,5)",
        MaskExtent::FitRegions,
        &ExtractOptions { quiet: true },
    )
    .unwrap();
    assert!(mask.area() > 0);
}

#[test]
fn property_tokens_match_the_reference_pattern() {
    use pest::Parser;
    use regmask::{RegionParser, Rule};

    let pattern = regex_lite::Regex::new(r"^\w+=\w+(\.\w+)?$").unwrap();
    let tokens = [
        "color=green",
        "width=2",
        "r=1.5",
        "dashlist=8",
        "8",
        "=x",
        "a=b=c",
        "tag={foo}",
        "font=helvetica",
        "move=",
    ];
    for token in tokens {
        let grammar_accepts = RegionParser::parse(Rule::property, token)
            .map(|mut pairs| pairs.next().map(|p| p.as_str() == token).unwrap_or(false))
            .unwrap_or(false);
        assert_eq!(grammar_accepts, pattern.is_match(token), "token {token:?}");
    }
}
