use log::trace;

use crate::contour::Contour;
use crate::error::GeoNavError;
use crate::geometry::{Geom, Point};
use crate::line::min_cross_track_km;
use crate::polygon::point_in_polygon;
use crate::position::Position;

/// Signed distance in kilometers from a point to the edges of a polygonal geometry.
///
/// The distance to every ring is the smallest cross-track distance to the great circles through its edges (see
/// [`line_point_distance`](crate::line::line_point_distance)); unclosed rings are treated as closed. The result is
/// negative if the point is inside the polygon. Holes are the exterior, so a point inside a hole gets a positive
/// distance.
///
/// Multi polygons and feature collections give the smallest absolute distance over their polygonal members,
/// negative if the point is inside any of them. Members for which the distance cannot be computed are skipped, as are
/// non-polygonal features of a collection. A feature without geometry fails with [`GeoNavError::UnsupportedVariant`],
/// also inside a collection.
pub fn polygon_point_distance(geom: &Geom, point: &Point) -> Result<f64, GeoNavError> {
    let position = &point.coordinates;
    match geom {
        Geom::Polygon(polygon) => polygon_distance(&polygon.coordinates, position),
        Geom::MultiPolygon(mp) => multi_polygon_distance(&mp.coordinates, position),
        Geom::Feature(feature) => polygon_point_distance(feature.try_geometry()?, point),
        Geom::FeatureCollection(fc) => {
            let mut nearest = NearestSigned::default();
            for feature in &fc.features {
                let distance = match feature.try_geometry()? {
                    Geom::Polygon(polygon) => polygon_distance(&polygon.coordinates, position),
                    Geom::MultiPolygon(mp) => multi_polygon_distance(&mp.coordinates, position),
                    _ => continue,
                };
                nearest.add(distance);
            }

            nearest.result("featurecollection contains no polygons")
        }
        other => Err(GeoNavError::UnsupportedVariant(format!(
            "cannot compute polygon distance for {}",
            other.type_name()
        ))),
    }
}

impl Geom {
    /// Signed distance from the point to the polygon edges. See [`polygon_point_distance`].
    pub fn signed_distance_km(&self, point: &Point) -> Result<f64, GeoNavError> {
        polygon_point_distance(self, point)
    }
}

fn ring_distance(ring: &[Position], point: &Position) -> Option<f64> {
    if ring.len() < 2 {
        return None;
    }

    Some(min_cross_track_km(ring.iter_segments_closing(), point))
}

fn polygon_distance(rings: &[Vec<Position>], point: &Position) -> Result<f64, GeoNavError> {
    if rings.is_empty() {
        return Err(GeoNavError::EmptyGeometry("polygon has no coordinates".into()));
    }

    let distance = rings
        .iter()
        .filter_map(|ring| ring_distance(ring, point))
        .reduce(f64::min)
        .ok_or_else(|| {
            GeoNavError::DegenerateGeometry("unable to compute distance to polygon edges".into())
        })?;

    if point_in_polygon(point, rings) {
        Ok(-distance)
    } else {
        Ok(distance)
    }
}

fn multi_polygon_distance(polygons: &[Vec<Vec<Position>>], point: &Position) -> Result<f64, GeoNavError> {
    let mut nearest = NearestSigned::default();
    for rings in polygons {
        nearest.add(polygon_distance(rings, point));
    }

    nearest.result("multipolygon has no valid rings")
}

/// Smallest absolute distance over several members, remembering if any of them contains the point.
#[derive(Debug, Default)]
struct NearestSigned {
    distance: Option<f64>,
    inside: bool,
}

impl NearestSigned {
    fn add(&mut self, distance: Result<f64, GeoNavError>) {
        match distance {
            Ok(distance) => {
                let abs = distance.abs();
                self.distance = Some(self.distance.map_or(abs, |current| current.min(abs)));
                self.inside |= distance < 0.0;
            }
            Err(err) => trace!("Skipping member in polygon distance: {err}"),
        }
    }

    fn result(&self, empty_message: &str) -> Result<f64, GeoNavError> {
        match self.distance {
            Some(distance) if self.inside => Ok(-distance),
            Some(distance) => Ok(distance),
            None => Err(GeoNavError::NoResult(empty_message.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{great_circle_distance, EARTH_RADIUS_KM};
    use crate::geometry::{Feature, FeatureCollection, LineString, MultiPolygon, Polygon};
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn ring(coords: &[(f64, f64)]) -> Vec<Position> {
        coords
            .iter()
            .map(|&(lon, lat)| Position::new(lon, lat))
            .collect()
    }

    fn square(min: f64, max: f64) -> Vec<Position> {
        ring(&[(min, min), (max, min), (max, max), (min, max), (min, min)])
    }

    #[test]
    fn inside_is_negative() {
        let polygon = Geom::from(Polygon::new(vec![square(0.0, 2.0)]));
        let distance = polygon_point_distance(&polygon, &Point::new(1.0, 1.0)).unwrap();
        assert!(distance < 0.0);
        assert_abs_diff_eq!(
            distance.abs(),
            great_circle_distance(1.0, 1.0, 0.0, 1.0),
            epsilon = 0.05
        );
    }

    #[test]
    fn outside_is_positive() {
        let polygon = Geom::from(Polygon::new(vec![square(0.0, 2.0)]));
        let distance = polygon.signed_distance_km(&Point::new(1.0, -1.0)).unwrap();
        assert_abs_diff_eq!(distance, EARTH_RADIUS_KM * 1f64.to_radians(), epsilon = 0.05);
    }

    #[test]
    fn unclosed_ring_is_closed() {
        let open = ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        let closed = Geom::from(Polygon::new(vec![square(0.0, 2.0)]));
        let open = Geom::from(Polygon::new(vec![open]));

        // Nearest edge of the point is the closing one.
        let point = Point::new(-0.5, 1.0);
        assert_abs_diff_eq!(
            polygon_point_distance(&open, &point).unwrap(),
            polygon_point_distance(&closed, &point).unwrap(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn hole_is_outside() {
        let polygon = Geom::from(Polygon::new(vec![square(0.0, 10.0), square(4.0, 6.0)]));
        let distance = polygon_point_distance(&polygon, &Point::new(5.0, 5.0)).unwrap();
        assert!(distance > 0.0);
        assert_abs_diff_eq!(distance, EARTH_RADIUS_KM * 1f64.to_radians(), epsilon = 1.0);
    }

    #[test]
    fn short_rings_are_skipped() {
        let polygon = Geom::from(Polygon::new(vec![square(0.0, 2.0), ring(&[(1.0, 1.0)])]));
        assert!(polygon_point_distance(&polygon, &Point::new(1.0, 1.0)).unwrap() < 0.0);

        let degenerate = Geom::from(Polygon::new(vec![ring(&[(1.0, 1.0)]), vec![]]));
        assert_matches!(
            polygon_point_distance(&degenerate, &Point::new(0.0, 0.0)),
            Err(GeoNavError::DegenerateGeometry(_))
        );

        assert_matches!(
            polygon_point_distance(&Polygon::default().into(), &Point::new(0.0, 0.0)),
            Err(GeoNavError::EmptyGeometry(_))
        );
    }

    #[test]
    fn multi_polygon_inside_any_member() {
        let mp = Geom::from(MultiPolygon::new(vec![
            vec![square(0.0, 2.0)],
            vec![square(10.0, 12.0)],
            vec![],
        ]));

        let inside = polygon_point_distance(&mp, &Point::new(11.0, 11.0)).unwrap();
        assert!(inside < 0.0);

        let outside = polygon_point_distance(&mp, &Point::new(3.0, 1.0)).unwrap();
        assert_abs_diff_eq!(outside, EARTH_RADIUS_KM * 1f64.to_radians(), epsilon = 0.5);

        assert_matches!(
            polygon_point_distance(&MultiPolygon::new(vec![vec![]]).into(), &Point::new(0.0, 0.0)),
            Err(GeoNavError::NoResult(_))
        );
    }

    #[test]
    fn collection_uses_polygonal_features() {
        let fc = Geom::from(FeatureCollection::new(vec![
            Feature::new(Point::new(1.0, 1.0)),
            Feature::new(Polygon::new(vec![square(0.0, 2.0)])),
            Feature::new(MultiPolygon::new(vec![vec![square(3.0, 4.0)]])),
        ]));

        let distance = polygon_point_distance(&fc, &Point::new(2.5, 1.0)).unwrap();
        assert_abs_diff_eq!(distance, EARTH_RADIUS_KM * 0.5f64.to_radians(), epsilon = 0.5);
        assert!(polygon_point_distance(&fc, &Point::new(3.5, 3.5)).unwrap() < 0.0);

        let no_polygons = Geom::from(FeatureCollection::new(vec![Feature::new(Point::new(
            1.0, 1.0,
        ))]));
        assert_matches!(
            polygon_point_distance(&no_polygons, &Point::new(0.0, 0.0)),
            Err(GeoNavError::NoResult(_))
        );
    }

    #[test]
    fn unsupported_inputs() {
        let line = Geom::from(LineString::new(square(0.0, 1.0)));
        assert_matches!(
            polygon_point_distance(&line, &Point::new(0.0, 0.0)),
            Err(GeoNavError::UnsupportedVariant(_))
        );

        let fc = Geom::from(FeatureCollection::new(vec![Feature::default()]));
        assert_matches!(
            polygon_point_distance(&fc, &Point::new(0.0, 0.0)),
            Err(GeoNavError::UnsupportedVariant(_))
        );
    }
}
