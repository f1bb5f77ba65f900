use geo_types::{point, CoordNum};
use num_traits::Float;

use crate::geo::{GeoPoint, NewGeoPoint};
use crate::geometry::Point;
use crate::position::Position;

impl<T: CoordNum + Float> GeoPoint for geo_types::Point<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y()
    }

    fn lon(&self) -> Self::Num {
        self.x()
    }
}

impl<T: CoordNum + Float> NewGeoPoint<T> for geo_types::Point<T> {
    fn latlon(lat: T, lon: T) -> Self {
        point!(x: lon, y: lat)
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(value: geo_types::Point<f64>) -> Self {
        Point::from(Position::from(value.0))
    }
}

impl From<Point> for geo_types::Point<f64> {
    fn from(value: Point) -> Self {
        geo_types::Point(value.coordinates.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::SphericalPoint;
    use approx::assert_abs_diff_eq;

    #[test]
    fn point_conversion() {
        let p = point!(x: 30.0, y: 50.0);
        assert_eq!(p.lat(), 50.0);
        assert_eq!(Point::from(p), Point::new(30.0, 50.0));
        assert_eq!(geo_types::Point::from(Point::new(30.0, 50.0)), p);
    }

    #[test]
    fn rhumb_bearing_between_geo_types_points() {
        let a = geo_types::Point::<f64>::latlon(0.0, 0.0);
        let b = geo_types::Point::<f64>::latlon(0.0, -10.0);
        assert_abs_diff_eq!(a.rhumb_bearing_to(&b), 270.0, epsilon = 1e-9);
    }
}
