use crate::error::GeoNavError;
use crate::geometry::{Geom, LineString, MultiLineString, MultiPolygon, Point, Polygon};
use crate::position::Position;

fn line_positions(line: &geo_types::LineString<f64>) -> Vec<Position> {
    line.0.iter().copied().map(Position::from).collect()
}

fn polygon_rings(polygon: &geo_types::Polygon<f64>) -> Vec<Vec<Position>> {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(line_positions)
        .collect()
}

impl From<&geo_types::LineString<f64>> for LineString {
    fn from(value: &geo_types::LineString<f64>) -> Self {
        LineString::new(line_positions(value))
    }
}

impl From<&geo_types::Polygon<f64>> for Polygon {
    fn from(value: &geo_types::Polygon<f64>) -> Self {
        Polygon::new(polygon_rings(value))
    }
}

impl From<&geo_types::MultiLineString<f64>> for MultiLineString {
    fn from(value: &geo_types::MultiLineString<f64>) -> Self {
        MultiLineString::new(value.0.iter().map(line_positions).collect())
    }
}

impl From<&geo_types::MultiPolygon<f64>> for MultiPolygon {
    fn from(value: &geo_types::MultiPolygon<f64>) -> Self {
        MultiPolygon::new(value.0.iter().map(polygon_rings).collect())
    }
}

impl TryFrom<&geo_types::Geometry<f64>> for Geom {
    type Error = GeoNavError;

    fn try_from(value: &geo_types::Geometry<f64>) -> Result<Self, Self::Error> {
        use geo_types::Geometry;

        Ok(match value {
            Geometry::Point(p) => Point::from(*p).into(),
            Geometry::Line(line) => {
                LineString::new(vec![line.start.into(), line.end.into()]).into()
            }
            Geometry::LineString(line) => LineString::from(line).into(),
            Geometry::Polygon(polygon) => Polygon::from(polygon).into(),
            Geometry::MultiLineString(ml) => MultiLineString::from(ml).into(),
            Geometry::MultiPolygon(mp) => MultiPolygon::from(mp).into(),
            Geometry::Rect(rect) => Polygon::from(&rect.to_polygon()).into(),
            Geometry::Triangle(triangle) => Polygon::from(&triangle.to_polygon()).into(),
            Geometry::MultiPoint(_) => {
                return Err(GeoNavError::UnsupportedVariant(
                    "multipoint geometries are not supported".into(),
                ))
            }
            Geometry::GeometryCollection(_) => {
                return Err(GeoNavError::UnsupportedVariant(
                    "geometry collections are not supported".into(),
                ))
            }
        })
    }
}

impl TryFrom<geo_types::Geometry<f64>> for Geom {
    type Error = GeoNavError;

    fn try_from(value: geo_types::Geometry<f64>) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}
