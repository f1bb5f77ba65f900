use crate::geo::{
    great_circle_destination, rhumb_line_destination, rhumb_line_distance_units, DistanceUnit,
    GeoPoint, NewGeoPoint, SphericalPoint,
};
use crate::geometry::Point;
use crate::position::Position;

impl GeoPoint for Point {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.coordinates.lat
    }

    fn lon(&self) -> f64 {
        self.coordinates.lon
    }
}

impl NewGeoPoint for Point {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self::new(lon, lat)
    }
}

impl Point {
    /// Initial great-circle bearing towards `other`, in degrees in `[0, 360)`.
    pub fn bearing(&self, other: &Point) -> f64 {
        self.bearing_to(other)
    }

    /// Constant rhumb-line bearing towards `other`, in degrees in `[0, 360)`.
    pub fn rhumb_bearing(&self, other: &Point) -> f64 {
        self.rhumb_bearing_to(other)
    }

    /// Rhumb-line distance to `other` in the given unit.
    pub fn rhumb_distance(&self, other: &Point, unit: DistanceUnit) -> f64 {
        rhumb_line_distance_units(self.lat(), self.lon(), other.lat(), other.lon(), unit)
    }

    /// Point reached by travelling along the great circle with the given initial bearing.
    pub fn destination(&self, distance_km: f64, bearing_deg: f64) -> Point {
        let point = great_circle_destination(self.lat(), self.lon(), distance_km, bearing_deg);
        Position::from(point).into()
    }

    /// Point reached by travelling along the rhumb line with the given bearing.
    pub fn rhumb_destination(&self, distance_km: f64, bearing_deg: f64) -> Point {
        let point = rhumb_line_destination(self.lat(), self.lon(), distance_km, bearing_deg);
        Position::from(point).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{EARTH_RADIUS_KM, KM_PER_NAUTICAL_MILE};
    use approx::assert_abs_diff_eq;

    #[test]
    fn bearings_between_points() {
        let origin = Point::new(0.0, 0.0);
        assert_abs_diff_eq!(origin.bearing(&Point::new(0.0, 10.0)), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(origin.bearing(&Point::new(10.0, 0.0)), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(origin.rhumb_bearing(&Point::new(-10.0, 0.0)), 270.0, epsilon = 1e-9);
        assert_abs_diff_eq!(origin.rhumb_bearing(&Point::new(0.0, -10.0)), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn rhumb_distance_in_units() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let km = EARTH_RADIUS_KM * 1f64.to_radians();

        assert_abs_diff_eq!(a.rhumb_distance(&b, DistanceUnit::Kilometers), km, epsilon = 1e-9);
        assert_abs_diff_eq!(a.rhumb_distance(&b, DistanceUnit::Meters), km * 1000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(
            a.rhumb_distance(&b, DistanceUnit::NauticalMiles),
            km / KM_PER_NAUTICAL_MILE,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(a.distance_km(&b), km, epsilon = 1e-9);
    }

    #[test]
    fn destinations() {
        let origin = Point::new(0.0, 0.0);
        let km = EARTH_RADIUS_KM * 10f64.to_radians();

        let north = origin.destination(km, 0.0);
        assert_abs_diff_eq!(north.coordinates.lat, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(north.coordinates.lon, 0.0, epsilon = 1e-9);

        let east = origin.rhumb_destination(km, 90.0);
        assert_abs_diff_eq!(east.coordinates.lat, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(east.coordinates.lon, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn rhumb_destination_round_trip() {
        let start = Point::new(-5.0, 40.0);
        let end = Point::new(20.0, 55.0);
        let bearing = start.rhumb_bearing(&end);
        let distance = start.rhumb_distance(&end, DistanceUnit::Kilometers);

        let reached = start.rhumb_destination(distance, bearing);
        assert_abs_diff_eq!(reached.coordinates.lon, 20.0, epsilon = 1e-6);
        assert_abs_diff_eq!(reached.coordinates.lat, 55.0, epsilon = 1e-6);
    }
}
