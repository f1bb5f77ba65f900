use log::trace;

use crate::error::GeoNavError;
use crate::geometry::{FeatureCollection, Geom, Point};
use crate::line::{line_length_km, line_midpoint};
use crate::polygon::{point_in_polygon, polygon_centroid_area};
use crate::position::Position;

/// A point that lies on the geometry.
///
/// * Point: the point itself.
/// * Line string: the midpoint along its length, or the first position for zero length lines.
/// * Polygon: the centroid if it is inside the polygon, otherwise the first position of the exterior ring.
/// * Multi line string: the point of its longest member, or of the first member if none has non-zero length.
/// * Multi polygon: the point of its largest member, or of the first member if none has non-zero area.
/// * Feature: the point of its geometry.
/// * Feature collection: the point of its largest polygon, otherwise of its longest line string, otherwise its first
///   point. A multi line string member is used right away if no line string with non-zero length precedes it, the
///   same goes for a multi polygon member and polygons with non-zero area. Nested features and collections are not
///   considered.
///
/// A feature without geometry fails with [`GeoNavError::UnsupportedVariant`], also when it is a member of a
/// collection that has other usable members.
pub fn point_on_surface(geom: &Geom) -> Result<Point, GeoNavError> {
    match geom {
        Geom::Point(point) => Ok(*point),
        Geom::LineString(line) => line_point_on_surface(&line.coordinates),
        Geom::Polygon(polygon) => polygon_point_on_surface(&polygon.coordinates),
        Geom::MultiLineString(ml) => multi_line_point_on_surface(&ml.coordinates),
        Geom::MultiPolygon(mp) => multi_polygon_point_on_surface(&mp.coordinates),
        Geom::Feature(feature) => point_on_surface(feature.try_geometry()?),
        Geom::FeatureCollection(fc) => collection_point_on_surface(fc),
    }
}

impl Geom {
    /// A point that lies on the geometry. See [`point_on_surface`].
    pub fn point_on_surface(&self) -> Result<Point, GeoNavError> {
        point_on_surface(self)
    }
}

fn line_point_on_surface(line: &[Position]) -> Result<Point, GeoNavError> {
    Ok(line_midpoint(line)?.position.into())
}

fn polygon_point_on_surface(rings: &[Vec<Position>]) -> Result<Point, GeoNavError> {
    let Some(&first) = rings.first().and_then(|exterior| exterior.first()) else {
        return Err(GeoNavError::EmptyGeometry("polygon has no coordinates".into()));
    };

    match polygon_centroid_area(rings) {
        Ok(mass) if point_in_polygon(&mass.centroid, rings) => Ok(mass.centroid.into()),
        Ok(_) => {
            trace!("Polygon centroid is outside of the polygon, using its first vertex");
            Ok(first.into())
        }
        Err(err) => {
            trace!("Cannot use polygon centroid ({err}), using its first vertex");
            Ok(first.into())
        }
    }
}

fn positive_length(line: &[Position]) -> Option<f64> {
    line_length_km(line).ok().filter(|&length| length > 0.0)
}

fn positive_area(rings: &[Vec<Position>]) -> Option<f64> {
    polygon_centroid_area(rings).ok().map(|mass| mass.area)
}

/// Member with the largest positive measure, or the first member if there is none.
fn largest<'a, T>(members: &'a [T], measure: impl Fn(&T) -> Option<f64>) -> Option<&'a T> {
    let mut best: Option<(&T, f64)> = None;
    for member in members {
        if let Some(value) = measure(member) {
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((member, value));
            }
        }
    }

    best.map(|(member, _)| member).or_else(|| members.first())
}

fn multi_line_point_on_surface(lines: &[Vec<Position>]) -> Result<Point, GeoNavError> {
    match largest(lines, |line| positive_length(line)) {
        Some(line) if !line.is_empty() => line_point_on_surface(line),
        _ => Err(GeoNavError::EmptyGeometry(
            "multilinestring has no coordinates".into(),
        )),
    }
}

fn multi_polygon_point_on_surface(polygons: &[Vec<Vec<Position>>]) -> Result<Point, GeoNavError> {
    match largest(polygons, |rings| positive_area(rings)) {
        Some(rings) if !rings.is_empty() => polygon_point_on_surface(rings),
        _ => Err(GeoNavError::EmptyGeometry(
            "multipolygon has no coordinates".into(),
        )),
    }
}

fn collection_point_on_surface(fc: &FeatureCollection) -> Result<Point, GeoNavError> {
    let mut first_point: Option<Point> = None;
    let mut longest_line: Option<(&[Position], f64)> = None;
    let mut largest_polygon: Option<(&[Vec<Position>], f64)> = None;

    for feature in &fc.features {
        match feature.try_geometry()? {
            Geom::Point(point) => {
                first_point.get_or_insert(*point);
            }
            Geom::LineString(line) => {
                if let Some(length) = positive_length(&line.coordinates) {
                    if longest_line.map_or(true, |(_, best)| length > best) {
                        longest_line = Some((line.coordinates.as_slice(), length));
                    }
                }
            }
            Geom::Polygon(polygon) => {
                if let Some(area) = positive_area(&polygon.coordinates) {
                    if largest_polygon.map_or(true, |(_, best)| area > best) {
                        largest_polygon = Some((polygon.coordinates.as_slice(), area));
                    }
                }
            }
            Geom::MultiLineString(ml) => match multi_line_point_on_surface(&ml.coordinates) {
                Ok(point) if longest_line.is_none() => return Ok(point),
                Ok(_) => {}
                Err(err) => trace!("Skipping multilinestring in point on surface: {err}"),
            },
            Geom::MultiPolygon(mp) => match multi_polygon_point_on_surface(&mp.coordinates) {
                Ok(point) if largest_polygon.is_none() => return Ok(point),
                Ok(_) => {}
                Err(err) => trace!("Skipping multipolygon in point on surface: {err}"),
            },
            nested @ (Geom::Feature(_) | Geom::FeatureCollection(_)) => {
                trace!(
                    "Skipping nested {} in point on surface",
                    nested.type_name()
                );
            }
        }
    }

    if let Some((rings, _)) = largest_polygon {
        return polygon_point_on_surface(rings);
    }

    if let Some((line, _)) = longest_line {
        return line_point_on_surface(line);
    }

    first_point.ok_or_else(|| {
        GeoNavError::NoResult("featurecollection has no supported geometries".into())
    })
}
