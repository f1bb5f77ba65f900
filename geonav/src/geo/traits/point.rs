use num_traits::Float;

use crate::geo::{great_circle, rhumb};

/// Point on the surface of a sphere, given by latitude and longitude in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;
}

/// Geographic point that can be constructed from coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude in degrees.
    fn latlon(lat: N, lon: N) -> Self;
}

/// Spherical navigation helpers available for every `f64` geographic point.
///
/// ```
/// use geonav::geo::{GeoPoint2d, NewGeoPoint, SphericalPoint};
///
/// let equator = GeoPoint2d::latlon(0.0, 0.0);
/// let north = GeoPoint2d::latlon(10.0, 0.0);
/// assert!(equator.bearing_to(&north).abs() < 1e-9);
/// ```
pub trait SphericalPoint: GeoPoint<Num = f64> {
    /// Great-circle distance to `other` in kilometers.
    fn distance_km(&self, other: &impl GeoPoint<Num = f64>) -> f64 {
        great_circle::great_circle_distance(self.lat(), self.lon(), other.lat(), other.lon())
    }

    /// Initial great-circle bearing towards `other`, in degrees in `[0, 360)`.
    fn bearing_to(&self, other: &impl GeoPoint<Num = f64>) -> f64 {
        great_circle::initial_bearing(self.lat(), self.lon(), other.lat(), other.lon())
    }

    /// Rhumb-line distance to `other` in kilometers.
    fn rhumb_distance_km(&self, other: &impl GeoPoint<Num = f64>) -> f64 {
        rhumb::rhumb_line_distance(self.lat(), self.lon(), other.lat(), other.lon())
    }

    /// Constant rhumb-line bearing towards `other`, in degrees in `[0, 360)`.
    fn rhumb_bearing_to(&self, other: &impl GeoPoint<Num = f64>) -> f64 {
        rhumb::rhumb_line_bearing(self.lat(), self.lon(), other.lat(), other.lon())
    }
}

impl<T: GeoPoint<Num = f64>> SphericalPoint for T {}
