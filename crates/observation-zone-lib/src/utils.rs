//! Geodesic helpers and planar intersection routines used by the zones

use crate::{Intersection, Result, ZoneError};
use geo::algorithm::line_intersection::{LineIntersection, line_intersection};
use geo::{Coord, Destination, Haversine, Line, LineString, Point, Polygon};
use smallvec::SmallVec;

/// Default number of vertices used to approximate a cylinder boundary
pub const DEFAULT_CIRCLE_STEPS: usize = 64;

/// Two intersections closer than this (in degrees) are the same point
const SAME_POINT_EPSILON: f64 = 1e-12;

/// Approximate a circle of `radius` meters around `center` as a closed polygon
///
/// Vertices are spherical (haversine) destinations from `center`, walked counter-clockwise
/// starting due north.
pub fn circle_polygon(center: Point<f64>, radius: f64, steps: usize) -> Result<Polygon<f64>> {
    if steps < 3 {
        return Err(ZoneError::InvalidZoneGeometry(format!(
            "a circle needs at least 3 vertices, got {steps}"
        )));
    }

    let mut coords: Vec<Coord<f64>> = (0..steps)
        .map(|i| {
            let bearing = (i as f64 * -360.0) / steps as f64;
            Haversine.destination(center, bearing, radius).0
        })
        .collect();
    coords.push(coords[0]);

    if coords.iter().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return Err(ZoneError::GeometryComputation(format!(
            "circle of radius {radius} m around ({}, {}) has non-finite vertices",
            center.x(),
            center.y()
        )));
    }

    Ok(Polygon::new(LineString::new(coords), vec![]))
}

/// Intersect the directed segment `c1 -> c2` with every edge of `boundary`
///
/// Intersections are computed in plain lon/lat space. Collinear overlaps are not
/// crossings and are skipped. The result is ordered by distance from `c1`, so the
/// first element is where the track first meets the boundary.
pub fn segment_intersections(
    boundary: &LineString<f64>,
    c1: Point<f64>,
    c2: Point<f64>,
) -> SmallVec<[Intersection; 2]> {
    let track = Line::new(c1.0, c2.0);
    let mut found: SmallVec<[Intersection; 2]> = SmallVec::new();

    for (edge_index, edge) in boundary.lines().enumerate() {
        let Some(LineIntersection::SinglePoint {
            intersection,
            is_proper,
        }) = line_intersection(edge, track)
        else {
            continue;
        };

        // Crossing exactly through a shared vertex reports the same point twice
        let duplicate = found.iter().any(|seen| {
            (seen.point.x() - intersection.x).abs() < SAME_POINT_EPSILON
                && (seen.point.y() - intersection.y).abs() < SAME_POINT_EPSILON
        });
        if !duplicate {
            found.push(Intersection {
                point: Point(intersection),
                is_proper,
                boundary_edge: edge_index,
            });
        }
    }

    found.sort_by(|a, b| squared_offset(c1, a.point).total_cmp(&squared_offset(c1, b.point)));
    found
}

/// Map any bearing difference onto [0, 360)
#[inline(always)]
pub fn bearing_to_angle(bearing: f64) -> f64 {
    let angle = bearing % 360.0;
    if angle < 0.0 { angle + 360.0 } else { angle }
}

/// Reject NaN and infinite coordinates before they reach the geometry code
#[inline]
pub fn ensure_finite(point: Point<f64>) -> Result<()> {
    if point.x().is_finite() && point.y().is_finite() {
        Ok(())
    } else {
        Err(ZoneError::GeometryComputation(format!(
            "non-finite coordinate ({}, {})",
            point.x(),
            point.y()
        )))
    }
}

#[inline(always)]
fn squared_offset(a: Point<f64>, b: Point<f64>) -> f64 {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Distance;

    #[test]
    fn test_circle_polygon_vertices_on_radius() {
        let center = Point::new(10.0, 50.0);
        let polygon = circle_polygon(center, 500.0, DEFAULT_CIRCLE_STEPS).unwrap();
        let ring = polygon.exterior();

        assert_eq!(ring.0.len(), DEFAULT_CIRCLE_STEPS + 1);
        assert_eq!(ring.0.first(), ring.0.last());
        // First vertex due north, second one step counter-clockwise from it
        assert!((ring.0[0].x - center.x()).abs() < 1e-9);
        assert!(ring.0[0].y > center.y());
        assert!(ring.0[1].x < center.x());
        for coord in ring.0.iter() {
            let d = Haversine.distance(center, Point(*coord));
            assert!((d - 500.0).abs() < 0.01, "vertex at {d} m");
        }
    }

    #[test]
    fn test_circle_polygon_rejects_too_few_steps() {
        let result = circle_polygon(Point::new(0.0, 0.0), 100.0, 2);
        assert!(matches!(result, Err(ZoneError::InvalidZoneGeometry(_))));
    }

    #[test]
    fn test_segment_intersections_ordered_from_start() {
        let square = LineString::from(vec![
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.0, 0.0),
        ]);
        let hits = segment_intersections(&square, Point::new(-1.0, 0.5), Point::new(2.0, 0.5));

        assert_eq!(hits.len(), 2);
        assert!((hits[0].point.x() - 0.0).abs() < 1e-12);
        assert!((hits[1].point.x() - 1.0).abs() < 1e-12);
        assert!(hits[0].is_proper);
        assert_eq!(hits[0].boundary_edge, 3);
        assert_eq!(hits[1].boundary_edge, 1);
    }

    #[test]
    fn test_segment_intersections_through_vertex_reported_once() {
        let square = LineString::from(vec![
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.0, 0.0),
        ]);
        let hits = segment_intersections(&square, Point::new(-1.0, -1.0), Point::new(0.5, 0.5));

        assert_eq!(hits.len(), 1);
        assert!(!hits[0].is_proper);
    }

    #[test]
    fn test_segment_intersections_collinear_is_not_a_crossing() {
        let gate = LineString::from(vec![(0.0, 0.0), (1.0, 0.0)]);
        let hits = segment_intersections(&gate, Point::new(0.2, 0.0), Point::new(0.8, 0.0));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_bearing_to_angle() {
        assert_eq!(bearing_to_angle(0.0), 0.0);
        assert_eq!(bearing_to_angle(-90.0), 270.0);
        assert_eq!(bearing_to_angle(450.0), 90.0);
        assert_eq!(bearing_to_angle(-540.0), 180.0);
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite(Point::new(1.0, 2.0)).is_ok());
        assert!(ensure_finite(Point::new(f64::NAN, 2.0)).is_err());
        assert!(ensure_finite(Point::new(1.0, f64::INFINITY)).is_err());
    }
}
