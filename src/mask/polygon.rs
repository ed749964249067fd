//! Ray-casting point-in-polygon test with explicit boundary detection.

use glam::DVec2;

/// Where a point sits relative to a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonSide {
    Outside,
    Inside,
    OnEdge,
}

/// Classify `point` against the closed polygon `vertices` (edge i connects
/// vertex i to vertex i+1, wrapping).
///
/// A point collinear with an edge and within its x-range short-circuits to
/// [`PolygonSide::OnEdge`]; boundary takes precedence over crossing parity.
pub fn classify(point: DVec2, vertices: &[DVec2]) -> PolygonSide {
    if vertices.len() < 3 {
        return PolygonSide::Outside;
    }

    let mut lo = DVec2::splat(f64::INFINITY);
    let mut hi = DVec2::splat(f64::NEG_INFINITY);
    for v in vertices {
        lo = lo.min(*v);
        hi = hi.max(*v);
    }
    if point.x < lo.x || point.x > hi.x || point.y < lo.y || point.y > hi.y {
        return PolygonSide::Outside;
    }

    let mut crossings = 0u32;
    for i in 0..vertices.len() {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % vertices.len()];
        let edge = p2 - p1;

        if (point - p1).perp_dot(edge) == 0.0
            && point.x >= p1.x.min(p2.x)
            && point.x <= p1.x.max(p2.x)
        {
            return PolygonSide::OnEdge;
        }

        // standard crossing count: the edge straddles the point's y on
        // exactly one side and the point is left of the x-intercept
        if (p1.y > point.y) != (p2.y > point.y) {
            let x_intercept = p1.x + (point.y - p1.y) / (p2.y - p1.y) * edge.x;
            if point.x < x_intercept {
                crossings += 1;
            }
        }
    }

    if crossings % 2 == 1 {
        PolygonSide::Inside
    } else {
        PolygonSide::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn square() -> Vec<DVec2> {
        vec![
            dvec2(0.0, 0.0),
            dvec2(10.0, 0.0),
            dvec2(10.0, 10.0),
            dvec2(0.0, 10.0),
        ]
    }

    #[test]
    fn interior_and_exterior_points() {
        assert_eq!(classify(dvec2(5.0, 5.0), &square()), PolygonSide::Inside);
        assert_eq!(classify(dvec2(15.0, 5.0), &square()), PolygonSide::Outside);
    }

    #[test]
    fn bounding_box_reject_is_outside() {
        assert_eq!(classify(dvec2(-1.0, 5.0), &square()), PolygonSide::Outside);
        assert_eq!(classify(dvec2(5.0, 11.0), &square()), PolygonSide::Outside);
    }

    #[test]
    fn point_on_edge_wins_over_parity() {
        assert_eq!(classify(dvec2(5.0, 0.0), &square()), PolygonSide::OnEdge);
        assert_eq!(classify(dvec2(10.0, 5.0), &square()), PolygonSide::OnEdge);
    }

    #[test]
    fn vertex_is_on_edge() {
        assert_eq!(classify(dvec2(0.0, 0.0), &square()), PolygonSide::OnEdge);
    }

    #[test]
    fn concave_notch_is_outside() {
        let arrow = vec![
            dvec2(0.0, 0.0),
            dvec2(10.0, 0.0),
            dvec2(10.0, 10.0),
            dvec2(5.0, 5.0),
            dvec2(0.0, 10.0),
        ];
        assert_eq!(classify(dvec2(5.0, 8.0), &arrow), PolygonSide::Outside);
        assert_eq!(classify(dvec2(2.0, 3.0), &arrow), PolygonSide::Inside);
    }

    #[test]
    fn degenerate_vertex_list_is_outside() {
        let segment = vec![dvec2(0.0, 0.0), dvec2(5.0, 5.0)];
        assert_eq!(classify(dvec2(2.0, 2.0), &segment), PolygonSide::Outside);
    }
}
