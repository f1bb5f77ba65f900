use log::trace;

use crate::error::GeoNavError;
use crate::geometry::{Geom, GeomVisitor, Point};
use crate::line::line_midpoint;
use crate::polygon::polygon_centroid_area;
use crate::position::Position;

/// Weighted sum of positions.
#[derive(Debug, Default, Clone, Copy)]
struct WeightedSum {
    weight: f64,
    lon: f64,
    lat: f64,
}

impl WeightedSum {
    fn add(&mut self, position: &Position, weight: f64) {
        self.weight += weight;
        self.lon += position.lon * weight;
        self.lat += position.lat * weight;
    }

    fn mean(&self) -> Option<Point> {
        (self.weight > 0.0).then(|| Point::new(self.lon / self.weight, self.lat / self.weight))
    }
}

#[derive(Debug, Default)]
struct MassAccumulator {
    areas: WeightedSum,
    lengths: WeightedSum,
    points: WeightedSum,
}

impl GeomVisitor for MassAccumulator {
    fn visit_point(&mut self, position: &Position) -> Result<(), GeoNavError> {
        self.points.add(position, 1.0);
        Ok(())
    }

    fn visit_line(&mut self, line: &[Position]) -> Result<(), GeoNavError> {
        match line_midpoint(line) {
            Ok(midpoint) if midpoint.length_km > 0.0 => {
                self.lengths.add(&midpoint.position, midpoint.length_km)
            }
            Ok(_) => trace!("Skipping zero length line in center of mass"),
            Err(err) => trace!("Skipping line in center of mass: {err}"),
        }

        Ok(())
    }

    fn visit_polygon(&mut self, rings: &[Vec<Position>]) -> Result<(), GeoNavError> {
        match polygon_centroid_area(rings) {
            Ok(mass) => self.areas.add(&mass.centroid, mass.area),
            Err(err) => trace!("Skipping polygon in center of mass: {err}"),
        }

        Ok(())
    }
}

/// Mass-weighted center of a geometry.
///
/// Polygons contribute their centroids weighted by area, lines their midpoints weighted by length and points count
/// once each. Only the highest-dimension contributions are used: if any polygon has non-zero area, lines and points
/// are ignored, and if any line has non-zero length, points are ignored.
///
/// Degenerate members are skipped. A feature without geometry fails the whole computation.
pub fn center_of_mass(geom: &Geom) -> Result<Point, GeoNavError> {
    let mut accumulator = MassAccumulator::default();
    geom.accept(&mut accumulator)?;

    accumulator
        .areas
        .mean()
        .or_else(|| accumulator.lengths.mean())
        .or_else(|| accumulator.points.mean())
        .ok_or_else(|| GeoNavError::NoResult("no coordinates found".into()))
}

impl Geom {
    /// Mass-weighted center of the geometry. See [`center_of_mass`].
    pub fn center_of_mass(&self) -> Result<Point, GeoNavError> {
        center_of_mass(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Feature, FeatureCollection, LineString, MultiPolygon, Polygon};
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn square(min: f64, max: f64) -> Vec<Position> {
        vec![
            Position::new(min, min),
            Position::new(max, min),
            Position::new(max, max),
            Position::new(min, max),
            Position::new(min, min),
        ]
    }

    #[test]
    fn polygon_centroid() {
        let polygon = Polygon::new(vec![square(0.0, 2.0)]);
        assert_eq!(
            center_of_mass(&polygon.into()).unwrap(),
            Point::new(1.0, 1.0)
        );
    }

    #[test]
    fn polygons_are_weighted_by_area() {
        let mp = MultiPolygon::new(vec![vec![square(0.0, 2.0)], vec![square(10.0, 11.0)]]);
        let center = center_of_mass(&mp.into()).unwrap();
        // (1 * 4 + 10.5 * 1) / 5
        assert_abs_diff_eq!(center.coordinates.lon, 2.9, epsilon = 1e-12);
        assert_abs_diff_eq!(center.coordinates.lat, 2.9, epsilon = 1e-12);
    }

    #[test]
    fn area_takes_priority_over_lines_and_points() {
        let fc = FeatureCollection::new(vec![
            Feature::new(Point::new(50.0, 50.0)),
            Feature::new(LineString::new(vec![
                Position::new(20.0, 0.0),
                Position::new(30.0, 0.0),
            ])),
            Feature::new(Polygon::new(vec![square(0.0, 2.0)])),
        ]);
        assert_eq!(center_of_mass(&fc.into()).unwrap(), Point::new(1.0, 1.0));
    }

    #[test]
    fn lines_take_priority_over_points() {
        let fc = FeatureCollection::new(vec![
            Feature::new(Point::new(50.0, 50.0)),
            Feature::new(LineString::new(vec![
                Position::new(0.0, 0.0),
                Position::new(10.0, 0.0),
            ])),
            // Zero length, skipped.
            Feature::new(LineString::new(vec![
                Position::new(40.0, 40.0),
                Position::new(40.0, 40.0),
            ])),
        ]);
        let center = center_of_mass(&fc.into()).unwrap();
        assert_abs_diff_eq!(center.coordinates.lon, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(center.coordinates.lat, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn points_are_averaged() {
        let fc = FeatureCollection::new(vec![
            Feature::new(Point::new(0.0, 0.0)),
            Feature::new(Point::new(4.0, 2.0)),
            // Degenerate polygon and line are skipped.
            Feature::new(Polygon::new(vec![vec![
                Position::new(0.0, 0.0),
                Position::new(1.0, 1.0),
            ]])),
            Feature::new(LineString::new(vec![Position::new(9.0, 9.0)])),
        ]);
        assert_eq!(center_of_mass(&fc.into()).unwrap(), Point::new(2.0, 1.0));
    }

    #[test]
    fn nothing_to_weigh() {
        assert_matches!(
            center_of_mass(&FeatureCollection::default().into()),
            Err(GeoNavError::NoResult(_))
        );
        assert_matches!(
            Geom::from(Polygon::default()).center_of_mass(),
            Err(GeoNavError::NoResult(_))
        );
    }

    #[test]
    fn missing_geometry_fails() {
        let fc = FeatureCollection::new(vec![
            Feature::new(Point::new(0.0, 0.0)),
            Feature::default(),
        ]);
        assert_matches!(
            center_of_mass(&fc.into()),
            Err(GeoNavError::UnsupportedVariant(_))
        );
    }
}
