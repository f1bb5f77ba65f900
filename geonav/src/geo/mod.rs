//! Navigation on the surface of a sphere: great-circle and rhumb-line distances, bearings, interpolation and
//! projection of points onto paths.
//!
//! All functions in this module take coordinates in degrees in `(latitude, longitude)` order, which is the reverse
//! of the [`Position`](crate::Position) order used by the geometry types. Every returned longitude is normalized
//! into `[-180, 180)`; latitude is never clamped.

mod angle;
pub mod great_circle;
pub mod impls;
pub mod rhumb;
mod traits;
mod units;

pub use angle::{angular_distance, normalize_bearing, normalize_lon};
pub use great_circle::{
    great_circle_destination, great_circle_distance, great_circle_intermediate_point,
    great_circle_project, great_circle_project_to_segment, initial_bearing, TrackProjection,
};
pub use impls::point::GeoPoint2d;
pub use rhumb::{
    rhumb_line_bearing, rhumb_line_destination, rhumb_line_distance, rhumb_line_distance_units,
};
pub use traits::point::{GeoPoint, NewGeoPoint, SphericalPoint};
pub use units::{
    DistanceUnit, EARTH_RADIUS_KM, EARTH_RADIUS_MILES, KM_PER_MILE, KM_PER_NAUTICAL_MILE,
    METERS_PER_KM,
};
