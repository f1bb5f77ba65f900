//! Planar algorithms over polygon rings: area, centroid and point containment.
//!
//! Coordinates are treated as planar `(lon, lat)` values, so areas are in square degrees.

use crate::contour::Contour;
use crate::error::GeoNavError;
use crate::geometry::Polygon;
use crate::position::Position;

/// Signed area and centroid of a single ring.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RingMass {
    /// Signed area. Positive for counter-clockwise rings, negative for clockwise ones, zero for degenerate rings.
    pub area: f64,
    /// Centroid of the ring. `(0, 0)` for degenerate rings.
    pub centroid: Position,
}

/// Area and centroid of a polygon with its holes subtracted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonMass {
    /// Area-weighted centroid.
    pub centroid: Position,
    /// Absolute area, always positive.
    pub area: f64,
}

/// Computes the signed area and the centroid of a ring with the shoelace formula.
///
/// Rings with less than 3 positions are degenerate and have zero area.
pub fn ring_area_centroid(ring: &[Position]) -> RingMass {
    let n = ring.len();
    if n < 3 {
        return RingMass::default();
    }

    let mut area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let p0 = ring[i];
        let p1 = ring[(i + 1) % n];
        let cross = p0.lon * p1.lat - p1.lon * p0.lat;
        area += cross;
        cx += (p0.lon + p1.lon) * cross;
        cy += (p0.lat + p1.lat) * cross;
    }

    area *= 0.5;
    if area == 0.0 {
        return RingMass::default();
    }

    RingMass {
        area,
        centroid: Position::new(cx / (6.0 * area), cy / (6.0 * area)),
    }
}

/// Computes the area and the centroid of a polygon given by its rings.
///
/// The absolute area of every hole is subtracted from the absolute area of the exterior ring, independent of the
/// holes' winding. Holes with zero area are ignored.
pub fn polygon_centroid_area(rings: &[Vec<Position>]) -> Result<PolygonMass, GeoNavError> {
    let Some(exterior) = rings.first() else {
        return Err(GeoNavError::EmptyGeometry("polygon has no rings".into()));
    };

    let outer = ring_area_centroid(exterior);
    if outer.area == 0.0 {
        return Err(GeoNavError::DegenerateGeometry(
            "polygon exterior ring has zero area".into(),
        ));
    }

    let outer_area = outer.area.abs();
    let mut area_sum = outer_area;
    let mut lon_sum = outer.centroid.lon * outer_area;
    let mut lat_sum = outer.centroid.lat * outer_area;

    for hole in &rings[1..] {
        let mass = ring_area_centroid(hole);
        if mass.area == 0.0 {
            continue;
        }

        let hole_area = mass.area.abs();
        area_sum -= hole_area;
        lon_sum -= mass.centroid.lon * hole_area;
        lat_sum -= mass.centroid.lat * hole_area;
    }

    if area_sum <= 0.0 {
        return Err(GeoNavError::DegenerateGeometry(
            "polygon holes cover its whole area".into(),
        ));
    }

    Ok(PolygonMass {
        centroid: Position::new(lon_sum / area_sum, lat_sum / area_sum),
        area: area_sum,
    })
}

/// Returns true if the position is inside the ring or on its boundary.
///
/// Rings with less than 3 positions contain nothing. Unclosed rings are treated as if they were closed.
pub fn point_in_ring(point: &Position, ring: &[Position]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    if ring
        .iter_segments_closing()
        .any(|segment| segment.contains_point(point))
    {
        return true;
    }

    ring.iter_segments_closing()
        .filter(|segment| segment.crossed_by_ray(point))
        .count()
        % 2
        == 1
}

/// Returns true if the position is inside the exterior ring of the polygon and outside all of its holes.
///
/// A position on a hole boundary belongs to the hole and so is outside the polygon.
pub fn point_in_polygon(point: &Position, rings: &[Vec<Position>]) -> bool {
    let Some((exterior, holes)) = rings.split_first() else {
        return false;
    };

    point_in_ring(point, exterior) && !holes.iter().any(|hole| point_in_ring(point, hole))
}

impl Polygon {
    /// Area and centroid of the polygon. See [`polygon_centroid_area`].
    pub fn centroid_area(&self) -> Result<PolygonMass, GeoNavError> {
        polygon_centroid_area(&self.coordinates)
    }

    /// Returns true if the position is inside the polygon. See [`point_in_polygon`].
    pub fn contains(&self, point: &Position) -> bool {
        point_in_polygon(point, &self.coordinates)
    }
}
