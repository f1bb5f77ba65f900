//! Segment between two consecutive positions of a contour.

use crate::geo::{
    great_circle_distance, great_circle_project, great_circle_project_to_segment, TrackProjection,
};
use crate::position::Position;

/// Absolute tolerance (in degrees) used to decide that a position lies on a segment.
pub const ON_SEGMENT_TOLERANCE: f64 = 1e-12;

/// A segment between two positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a>(pub &'a Position, pub &'a Position);

impl<'a> Segment<'a> {
    /// Great-circle length of the segment in kilometers.
    pub fn length_km(&self) -> f64 {
        great_circle_distance(self.0.lat, self.0.lon, self.1.lat, self.1.lon)
    }

    /// Projects the position onto the infinite great circle through the segment. See [`great_circle_project`].
    pub fn project(&self, point: &Position) -> TrackProjection {
        great_circle_project(
            self.0.lat, self.0.lon, self.1.lat, self.1.lon, point.lat, point.lon,
        )
    }

    /// Projects the position onto the segment itself. See [`great_circle_project_to_segment`].
    pub fn project_clamped(&self, point: &Position) -> TrackProjection {
        great_circle_project_to_segment(
            self.0.lat, self.0.lon, self.1.lat, self.1.lon, point.lat, point.lon,
        )
    }

    /// Returns true if the position lies on the segment, treating coordinates as planar `(lon, lat)` values.
    ///
    /// The position must be collinear with the segment and lie within its bounds, both up to
    /// [`ON_SEGMENT_TOLERANCE`].
    pub fn contains_point(&self, point: &Position) -> bool {
        let (ax, ay) = (self.0.lon, self.0.lat);
        let (bx, by) = (self.1.lon, self.1.lat);
        let (px, py) = (point.lon, point.lat);

        let cross = (px - ax) * (by - ay) - (py - ay) * (bx - ax);
        if cross.abs() > ON_SEGMENT_TOLERANCE {
            return false;
        }

        let dot = (px - ax) * (bx - ax) + (py - ay) * (by - ay);
        if dot < -ON_SEGMENT_TOLERANCE {
            return false;
        }

        let len_sq = (bx - ax) * (bx - ax) + (by - ay) * (by - ay);
        dot - len_sq <= ON_SEGMENT_TOLERANCE
    }

    /// Returns true if a ray cast from the position towards positive longitude crosses the segment.
    ///
    /// Uses the half-open rule for the latitude span, so a ray passing exactly through a shared vertex is counted
    /// once.
    pub fn crossed_by_ray(&self, point: &Position) -> bool {
        let (xi, yi) = (self.1.lon, self.1.lat);
        let (xj, yj) = (self.0.lon, self.0.lat);
        let (x, y) = (point.lon, point.lat);

        ((yi > y) != (yj > y)) && x < (xj - xi) * (y - yi) / (yj - yi) + xi
    }
}
