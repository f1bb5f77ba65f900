//! GeoJSON-shaped geometry values and traversal over them.
//!
//! [`Geom`] is the closed set of supported variants. Algorithms either match on it exhaustively or fold over it with
//! a [`GeomVisitor`], which takes care of descending into features and feature collections.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::GeoNavError;
use crate::position::Position;

/// Feature properties. Opaque to the algorithms of this crate.
pub type Properties = Map<String, Value>;

/// Point geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct Point {
    /// Position of the point.
    pub coordinates: Position,
}

impl Point {
    /// Creates a new point.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            coordinates: Position::new(lon, lat),
        }
    }
}

impl From<Position> for Point {
    fn from(coordinates: Position) -> Self {
        Self { coordinates }
    }
}

/// Line string geometry: an ordered sequence of positions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LineString {
    /// Positions of the line.
    pub coordinates: Vec<Position>,
}

impl LineString {
    /// Creates a new line string.
    pub fn new(coordinates: Vec<Position>) -> Self {
        Self { coordinates }
    }
}

/// Polygon geometry. The first ring is the exterior, the rest are holes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polygon {
    /// Rings of the polygon.
    pub coordinates: Vec<Vec<Position>>,
}

impl Polygon {
    /// Creates a new polygon.
    pub fn new(coordinates: Vec<Vec<Position>>) -> Self {
        Self { coordinates }
    }
}

/// Collection of line strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiLineString {
    /// Coordinates of the member lines.
    pub coordinates: Vec<Vec<Position>>,
}

impl MultiLineString {
    /// Creates a new multi line string.
    pub fn new(coordinates: Vec<Vec<Position>>) -> Self {
        Self { coordinates }
    }
}

/// Collection of polygons.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPolygon {
    /// Coordinates of the member polygons.
    pub coordinates: Vec<Vec<Vec<Position>>>,
}

impl MultiPolygon {
    /// Creates a new multi polygon.
    pub fn new(coordinates: Vec<Vec<Vec<Position>>>) -> Self {
        Self { coordinates }
    }
}

/// Geometry with attached properties.
///
/// The geometry can be absent (`null` in GeoJSON). Algorithms report such features as
/// [`GeoNavError::UnsupportedVariant`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Feature {
    /// Geometry of the feature.
    pub geometry: Option<Box<Geom>>,
    /// Properties of the feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl Feature {
    /// Creates a feature without properties.
    pub fn new(geometry: impl Into<Geom>) -> Self {
        Self {
            geometry: Some(Box::new(geometry.into())),
            properties: None,
        }
    }

    /// Sets properties of the feature.
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Geometry of the feature, or an error if it is absent.
    pub fn try_geometry(&self) -> Result<&Geom, GeoNavError> {
        self.geometry
            .as_deref()
            .ok_or_else(|| GeoNavError::UnsupportedVariant("feature has no geometry".into()))
    }
}

/// Ordered collection of features.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FeatureCollection {
    /// Features of the collection.
    #[serde(with = "tagged_features")]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Creates a new feature collection.
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }
}

/// All supported geometry variants.
///
/// Serializes into a GeoJSON object with the `"type"` discriminator.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum Geom {
    /// Point.
    Point(Point),
    /// Line string.
    LineString(LineString),
    /// Polygon.
    Polygon(Polygon),
    /// Multi line string.
    MultiLineString(MultiLineString),
    /// Multi polygon.
    MultiPolygon(MultiPolygon),
    /// Feature.
    Feature(Feature),
    /// Feature collection.
    FeatureCollection(FeatureCollection),
}

impl Geom {
    /// Name of the variant as used in the GeoJSON `"type"` member.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geom::Point(_) => "Point",
            Geom::LineString(_) => "LineString",
            Geom::Polygon(_) => "Polygon",
            Geom::MultiLineString(_) => "MultiLineString",
            Geom::MultiPolygon(_) => "MultiPolygon",
            Geom::Feature(_) => "Feature",
            Geom::FeatureCollection(_) => "FeatureCollection",
        }
    }

    /// Walks the geometry with the given visitor.
    ///
    /// Features are replaced by their geometries and feature collections by their features, in document order. The
    /// first error (including a feature without geometry) aborts the traversal.
    pub fn accept<V: GeomVisitor + ?Sized>(&self, visitor: &mut V) -> Result<(), GeoNavError> {
        match self {
            Geom::Point(p) => visitor.visit_point(&p.coordinates),
            Geom::LineString(line) => visitor.visit_line(&line.coordinates),
            Geom::Polygon(polygon) => visitor.visit_polygon(&polygon.coordinates),
            Geom::MultiLineString(ml) => visitor.visit_multi_line(&ml.coordinates),
            Geom::MultiPolygon(mp) => visitor.visit_multi_polygon(&mp.coordinates),
            Geom::Feature(feature) => feature.try_geometry()?.accept(visitor),
            Geom::FeatureCollection(fc) => fc
                .features
                .iter()
                .try_for_each(|feature| feature.try_geometry()?.accept(visitor)),
        }
    }

    /// All positions of the geometry in document order.
    pub fn positions(&self) -> Result<Vec<Position>, GeoNavError> {
        let mut collector = PositionCollector::default();
        self.accept(&mut collector)?;
        Ok(collector.positions)
    }
}

/// Per-kind callbacks for [`Geom::accept`].
///
/// Multi geometries are split into their members by default.
pub trait GeomVisitor {
    /// Called for every point.
    fn visit_point(&mut self, position: &Position) -> Result<(), GeoNavError>;

    /// Called for every line string.
    fn visit_line(&mut self, line: &[Position]) -> Result<(), GeoNavError>;

    /// Called for every polygon with all its rings.
    fn visit_polygon(&mut self, rings: &[Vec<Position>]) -> Result<(), GeoNavError>;

    /// Called for every multi line string.
    fn visit_multi_line(&mut self, lines: &[Vec<Position>]) -> Result<(), GeoNavError> {
        lines.iter().try_for_each(|line| self.visit_line(line))
    }

    /// Called for every multi polygon.
    fn visit_multi_polygon(&mut self, polygons: &[Vec<Vec<Position>>]) -> Result<(), GeoNavError> {
        polygons
            .iter()
            .try_for_each(|rings| self.visit_polygon(rings))
    }
}

#[derive(Default)]
struct PositionCollector {
    positions: Vec<Position>,
}

impl GeomVisitor for PositionCollector {
    fn visit_point(&mut self, position: &Position) -> Result<(), GeoNavError> {
        self.positions.push(*position);
        Ok(())
    }

    fn visit_line(&mut self, line: &[Position]) -> Result<(), GeoNavError> {
        self.positions.extend_from_slice(line);
        Ok(())
    }

    fn visit_polygon(&mut self, rings: &[Vec<Position>]) -> Result<(), GeoNavError> {
        self.positions.extend(rings.iter().flatten());
        Ok(())
    }
}

impl From<Point> for Geom {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<LineString> for Geom {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<Polygon> for Geom {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiLineString> for Geom {
    fn from(value: MultiLineString) -> Self {
        Self::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geom {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}

impl From<Feature> for Geom {
    fn from(value: Feature) -> Self {
        Self::Feature(value)
    }
}

impl From<FeatureCollection> for Geom {
    fn from(value: FeatureCollection) -> Self {
        Self::FeatureCollection(value)
    }
}

/// Members of a GeoJSON feature collection carry their own `"type": "Feature"` tag.
mod tagged_features {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Feature;

    #[derive(Serialize)]
    #[serde(tag = "type")]
    enum TaggedRef<'a> {
        Feature(&'a Feature),
    }

    #[derive(Deserialize)]
    #[serde(tag = "type")]
    enum Tagged {
        Feature(Feature),
    }

    pub fn serialize<S: Serializer>(features: &[Feature], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(features.iter().map(TaggedRef::Feature))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Feature>, D::Error> {
        let tagged = Vec::<Tagged>::deserialize(deserializer)?;
        Ok(tagged
            .into_iter()
            .map(|Tagged::Feature(feature)| feature)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn square() -> Polygon {
        Polygon::new(vec![vec![
            Position::new(0.0, 0.0),
            Position::new(2.0, 0.0),
            Position::new(2.0, 2.0),
            Position::new(0.0, 2.0),
            Position::new(0.0, 0.0),
        ]])
    }

    #[test]
    fn positions_in_document_order() {
        let fc = FeatureCollection::new(vec![
            Feature::new(Point::new(1.0, 2.0)),
            Feature::new(LineString::new(vec![
                Position::new(3.0, 4.0),
                Position::new(5.0, 6.0),
            ])),
            Feature::new(MultiPolygon::new(vec![square().coordinates])),
        ]);

        let positions = Geom::from(fc).positions().unwrap();
        assert_eq!(positions.len(), 8);
        assert_eq!(positions[0], Position::new(1.0, 2.0));
        assert_eq!(positions[2], Position::new(5.0, 6.0));
        assert_eq!(positions[4], Position::new(2.0, 0.0));
    }

    #[test]
    fn nested_feature_delegates_to_geometry() {
        let nested = Feature::new(Feature::new(Point::new(7.0, 8.0)));
        assert_eq!(
            Geom::from(nested).positions().unwrap(),
            vec![Position::new(7.0, 8.0)]
        );
    }

    #[test]
    fn missing_geometry_aborts_traversal() {
        let fc = FeatureCollection::new(vec![
            Feature::new(Point::new(1.0, 2.0)),
            Feature::default(),
        ]);
        assert_matches!(
            Geom::from(fc).positions(),
            Err(GeoNavError::UnsupportedVariant(_))
        );
    }

    #[test]
    fn serializes_as_geojson() {
        let geom = Geom::from(Point::new(1.5, 2.5));
        assert_eq!(
            serde_json::to_value(&geom).unwrap(),
            json!({"type": "Point", "coordinates": [1.5, 2.5]})
        );

        let fc = Geom::from(FeatureCollection::new(vec![Feature::new(square())]));
        assert_eq!(
            serde_json::to_value(&fc).unwrap(),
            json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]]]
                    }
                }]
            })
        );
    }

    #[test]
    fn deserializes_geojson() {
        let value = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0, 10.0]]},
                    "properties": {"name": "route"}
                },
                {"type": "Feature", "geometry": null}
            ]
        });

        let Geom::FeatureCollection(fc) = serde_json::from_value::<Geom>(value).unwrap() else {
            panic!("expected a feature collection");
        };
        assert_eq!(fc.features.len(), 2);
        assert_eq!(
            fc.features[0].try_geometry().unwrap(),
            &Geom::LineString(LineString::new(vec![
                Position::new(0.0, 0.0),
                Position::new(1.0, 1.0)
            ]))
        );
        assert_eq!(
            fc.features[0].properties.as_ref().unwrap()["name"],
            json!("route")
        );
        assert!(fc.features[1].geometry.is_none());
    }

    #[test]
    fn rejects_unknown_variant() {
        let value = json!({"type": "MultiPoint", "coordinates": [[0.0, 0.0]]});
        assert!(serde_json::from_value::<Geom>(value).is_err());
    }
}
