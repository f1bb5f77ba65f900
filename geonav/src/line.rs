//! Great-circle algorithms over polylines.

use crate::contour::{Contour, ContourSegmentIterator};
use crate::error::GeoNavError;
use crate::geo::great_circle_intermediate_point;
use crate::geometry::LineString;
use crate::position::Position;
use crate::segment::Segment;

/// Nearest point of a line to some position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPoint {
    /// Nearest position on the line.
    pub position: Position,
    /// Distance from the queried position to [`NearestPoint::position`] in kilometers.
    pub distance_km: f64,
    /// Distance along the line from its start to [`NearestPoint::position`] in kilometers.
    pub along_line_km: f64,
}

/// Length of a line and the position halfway along it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMidpoint {
    /// Total length in kilometers.
    pub length_km: f64,
    /// Position at half of the length. For zero length lines, the first position.
    pub position: Position,
}

fn check_line(line: &[Position]) -> Result<(), GeoNavError> {
    if line.len() < 2 {
        Err(GeoNavError::DegenerateGeometry(
            "linestring must have at least 2 coordinates".into(),
        ))
    } else {
        Ok(())
    }
}

/// Great-circle length of a line in kilometers.
pub fn line_length_km(line: &[Position]) -> Result<f64, GeoNavError> {
    check_line(line)?;
    Ok(line.iter_segments().map(|segment| segment.length_km()).sum())
}

/// Position at the given distance (in kilometers) along the line.
///
/// Distances not greater than zero give the first position, distances beyond the line length give the last one.
pub fn point_at_distance(line: &[Position], distance_km: f64) -> Result<Position, GeoNavError> {
    check_line(line)?;
    if distance_km <= 0.0 {
        return Ok(line[0]);
    }

    let mut remaining = distance_km;
    for segment in line.iter_segments() {
        let length = segment.length_km();
        if remaining <= length {
            let Segment(start, end) = segment;
            return Ok(great_circle_intermediate_point(
                start.lat,
                start.lon,
                end.lat,
                end.lon,
                remaining / length,
            )
            .into());
        }

        remaining -= length;
    }

    Ok(line[line.len() - 1])
}

/// Length of the line and its midpoint along the length.
pub fn line_midpoint(line: &[Position]) -> Result<LineMidpoint, GeoNavError> {
    let length_km = line_length_km(line)?;
    let position = if length_km == 0.0 {
        line[0]
    } else {
        point_at_distance(line, length_km / 2.0)?
    };

    Ok(LineMidpoint {
        length_km,
        position,
    })
}

/// Distance in kilometers from a position to the line.
///
/// For every segment the perpendicular (cross-track) distance to the great circle through that segment is taken,
/// without clamping to the segment's endpoints, and the smallest one is returned. For a point lying beyond a short
/// segment this can be less than the distance to the segment itself; use [`nearest_point`] for the segment-clamped
/// distance.
pub fn line_point_distance(line: &[Position], point: &Position) -> Result<f64, GeoNavError> {
    check_line(line)?;
    Ok(min_cross_track_km(line.iter_segments(), point))
}

/// Smallest unclamped cross-track distance in kilometers from `point` to the given segments.
///
/// Infinity if there are no segments.
pub fn min_cross_track_km(segments: ContourSegmentIterator<'_>, point: &Position) -> f64 {
    segments
        .map(|segment| segment.project(point).cross_track_km.abs())
        .fold(f64::INFINITY, f64::min)
}

/// Nearest point of the line to the given position, with every segment clamped to its endpoints.
pub fn nearest_point(line: &[Position], point: &Position) -> Result<NearestPoint, GeoNavError> {
    check_line(line)?;

    let mut best: Option<NearestPoint> = None;
    let mut walked = 0.0;
    for segment in line.iter_segments() {
        let projection = segment.project_clamped(point);
        let distance_km = projection.cross_track_km.abs();
        if best.map_or(true, |b| distance_km < b.distance_km) {
            best = Some(NearestPoint {
                position: projection.point.into(),
                distance_km,
                along_line_km: walked + projection.along_track_km,
            });
        }

        walked += segment.length_km();
    }

    best.ok_or_else(|| GeoNavError::DegenerateGeometry("linestring has no segments".into()))
}

impl LineString {
    /// Great-circle length of the line in kilometers. See [`line_length_km`].
    pub fn length_km(&self) -> Result<f64, GeoNavError> {
        line_length_km(&self.coordinates)
    }

    /// Position at the given distance along the line. See [`point_at_distance`].
    pub fn point_at_distance(&self, distance_km: f64) -> Result<Position, GeoNavError> {
        point_at_distance(&self.coordinates, distance_km)
    }

    /// Unclamped cross-track distance to the line. See [`line_point_distance`].
    pub fn point_distance_km(&self, point: &Position) -> Result<f64, GeoNavError> {
        line_point_distance(&self.coordinates, point)
    }

    /// Segment-clamped nearest point of the line. See [`nearest_point`].
    pub fn nearest_point(&self, point: &Position) -> Result<NearestPoint, GeoNavError> {
        nearest_point(&self.coordinates, point)
    }
}
