//! Conversion between the [`geojson`] crate types and [`Geom`].
//!
//! `MultiPoint` and `GeometryCollection` have no counterpart in [`Geom`] and fail with
//! [`GeoNavError::UnsupportedVariant`]. Foreign members, bounding boxes and feature ids are not preserved.

use geojson::{GeoJson, LineStringType, PolygonType, Value};

use crate::error::GeoNavError;
use crate::geometry::{
    Feature, FeatureCollection, Geom, LineString, MultiLineString, MultiPolygon, Point, Polygon,
};
use crate::position::Position;

fn convert_position(position: &geojson::Position) -> Result<Position, GeoNavError> {
    Position::try_from(position.as_slice())
}

fn convert_line(line: &LineStringType) -> Result<Vec<Position>, GeoNavError> {
    line.iter().map(convert_position).collect()
}

fn convert_polygon(polygon: &PolygonType) -> Result<Vec<Vec<Position>>, GeoNavError> {
    polygon.iter().map(convert_line).collect()
}

impl TryFrom<&geojson::Geometry> for Geom {
    type Error = GeoNavError;

    fn try_from(value: &geojson::Geometry) -> Result<Self, Self::Error> {
        Ok(match &value.value {
            Value::Point(p) => Point::from(convert_position(p)?).into(),
            Value::LineString(line) => LineString::new(convert_line(line)?).into(),
            Value::Polygon(polygon) => Polygon::new(convert_polygon(polygon)?).into(),
            Value::MultiLineString(lines) => MultiLineString::new(
                lines.iter().map(convert_line).collect::<Result<_, _>>()?,
            )
            .into(),
            Value::MultiPolygon(polygons) => MultiPolygon::new(
                polygons
                    .iter()
                    .map(convert_polygon)
                    .collect::<Result<_, _>>()?,
            )
            .into(),
            Value::MultiPoint(_) => {
                return Err(GeoNavError::UnsupportedVariant(
                    "multipoint geometries are not supported".into(),
                ))
            }
            Value::GeometryCollection(_) => {
                return Err(GeoNavError::UnsupportedVariant(
                    "geometry collections are not supported".into(),
                ))
            }
        })
    }
}

impl TryFrom<&geojson::Feature> for Feature {
    type Error = GeoNavError;

    fn try_from(value: &geojson::Feature) -> Result<Self, Self::Error> {
        let geometry = match &value.geometry {
            Some(geometry) => Some(Box::new(Geom::try_from(geometry)?)),
            None => None,
        };

        Ok(Feature {
            geometry,
            properties: value.properties.clone(),
        })
    }
}

impl TryFrom<&geojson::FeatureCollection> for FeatureCollection {
    type Error = GeoNavError;

    fn try_from(value: &geojson::FeatureCollection) -> Result<Self, Self::Error> {
        Ok(FeatureCollection::new(
            value
                .features
                .iter()
                .map(Feature::try_from)
                .collect::<Result<_, _>>()?,
        ))
    }
}

impl TryFrom<&GeoJson> for Geom {
    type Error = GeoNavError;

    fn try_from(value: &GeoJson) -> Result<Self, Self::Error> {
        match value {
            GeoJson::Geometry(geometry) => Geom::try_from(geometry),
            GeoJson::Feature(feature) => Ok(Feature::try_from(feature)?.into()),
            GeoJson::FeatureCollection(fc) => Ok(FeatureCollection::try_from(fc)?.into()),
        }
    }
}

impl TryFrom<GeoJson> for Geom {
    type Error = GeoNavError;

    fn try_from(value: GeoJson) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

fn position_value(position: &Position) -> geojson::Position {
    vec![position.lon, position.lat]
}

fn line_value(line: &[Position]) -> LineStringType {
    line.iter().map(position_value).collect()
}

fn polygon_value(rings: &[Vec<Position>]) -> PolygonType {
    rings.iter().map(|ring| line_value(ring)).collect()
}

impl TryFrom<&Geom> for geojson::Geometry {
    type Error = GeoNavError;

    /// Converts simple geometries. Features and feature collections cannot be represented as a GeoJSON geometry.
    fn try_from(value: &Geom) -> Result<Self, Self::Error> {
        let value = match value {
            Geom::Point(p) => Value::Point(position_value(&p.coordinates)),
            Geom::LineString(line) => Value::LineString(line_value(&line.coordinates)),
            Geom::Polygon(polygon) => Value::Polygon(polygon_value(&polygon.coordinates)),
            Geom::MultiLineString(ml) => Value::MultiLineString(
                ml.coordinates.iter().map(|line| line_value(line)).collect(),
            ),
            Geom::MultiPolygon(mp) => Value::MultiPolygon(
                mp.coordinates
                    .iter()
                    .map(|rings| polygon_value(rings))
                    .collect(),
            ),
            other => {
                return Err(GeoNavError::UnsupportedVariant(format!(
                    "{} is not a GeoJSON geometry",
                    other.type_name()
                )))
            }
        };

        Ok(geojson::Geometry::new(value))
    }
}

fn feature_value(feature: &Feature) -> Result<geojson::Feature, GeoNavError> {
    let geometry = match &feature.geometry {
        Some(geometry) => Some(geojson::Geometry::try_from(geometry.as_ref())?),
        None => None,
    };

    Ok(geojson::Feature {
        bbox: None,
        geometry,
        id: None,
        properties: feature.properties.clone(),
        foreign_members: None,
    })
}

impl TryFrom<&Geom> for GeoJson {
    type Error = GeoNavError;

    /// Fails if a feature contains another feature or a feature collection as its geometry.
    fn try_from(value: &Geom) -> Result<Self, Self::Error> {
        Ok(match value {
            Geom::Feature(feature) => GeoJson::Feature(feature_value(feature)?),
            Geom::FeatureCollection(fc) => GeoJson::FeatureCollection(geojson::FeatureCollection {
                bbox: None,
                features: fc
                    .features
                    .iter()
                    .map(feature_value)
                    .collect::<Result<_, _>>()?,
                foreign_members: None,
            }),
            geometry => GeoJson::Geometry(geojson::Geometry::try_from(geometry)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn feature_collection_from_geojson() {
        let geojson: GeoJson = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [2, 0], [2, 2], [0, 2], [0, 0]]]},
                    "properties": {"name": "square"}
                },
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [5, 5, 100]}, "properties": null}
            ]
        }"#
        .parse()
        .unwrap();

        let geom = Geom::try_from(&geojson).unwrap();
        assert_eq!(geom.center_of_mass().unwrap(), Point::new(1.0, 1.0));

        let Geom::FeatureCollection(fc) = geom else {
            panic!("expected a feature collection");
        };
        assert_eq!(fc.features[0].properties.as_ref().unwrap()["name"], "square");
        assert_eq!(
            fc.features[1].try_geometry().unwrap(),
            &Geom::Point(Point::new(5.0, 5.0))
        );
    }

    #[test]
    fn unsupported_geojson() {
        let multi_point = geojson::Geometry::new(Value::MultiPoint(vec![vec![0.0, 0.0]]));
        assert_matches!(
            Geom::try_from(&multi_point),
            Err(GeoNavError::UnsupportedVariant(_))
        );

        let short = geojson::Geometry::new(Value::Point(vec![1.0]));
        assert_matches!(Geom::try_from(&short), Err(GeoNavError::Conversion(_)));
    }

    #[test]
    fn geometry_to_geojson() {
        let polygon = Geom::from(Polygon::new(vec![vec![
            Position::new(0.0, 0.0),
            Position::new(1.0, 0.0),
            Position::new(1.0, 1.0),
            Position::new(0.0, 0.0),
        ]]));

        let geometry = geojson::Geometry::try_from(&polygon).unwrap();
        assert_eq!(
            geometry.value,
            Value::Polygon(vec![vec![
                vec![0.0, 0.0],
                vec![1.0, 0.0],
                vec![1.0, 1.0],
                vec![0.0, 0.0]
            ]])
        );
        assert_eq!(Geom::try_from(&geometry).unwrap(), polygon);
    }

    #[test]
    fn features_to_geojson() {
        let fc = Geom::from(FeatureCollection::new(vec![
            Feature::new(Point::new(1.0, 2.0)),
            Feature::default(),
        ]));
        let GeoJson::FeatureCollection(converted) = GeoJson::try_from(&fc).unwrap() else {
            panic!("expected a feature collection");
        };
        assert_eq!(converted.features.len(), 2);
        assert!(converted.features[1].geometry.is_none());

        let nested = Geom::from(Feature::new(Feature::new(Point::new(1.0, 2.0))));
        assert_matches!(
            GeoJson::try_from(&nested),
            Err(GeoNavError::UnsupportedVariant(_))
        );
    }
}
