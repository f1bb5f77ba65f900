use geo_types::{coord, Coord, CoordNum};
use num_traits::Float;

use crate::geo::{GeoPoint, NewGeoPoint};
use crate::position::Position;

impl<T: CoordNum + Float> GeoPoint for Coord<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y
    }

    fn lon(&self) -> Self::Num {
        self.x
    }
}

impl<T: CoordNum + Float> NewGeoPoint<T> for Coord<T> {
    fn latlon(lat: T, lon: T) -> Self {
        coord!(x: lon, y: lat)
    }
}

impl From<Coord<f64>> for Position {
    fn from(value: Coord<f64>) -> Self {
        Position::new(value.x, value.y)
    }
}

impl From<Position> for Coord<f64> {
    fn from(value: Position) -> Self {
        coord!(x: value.lon, y: value.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::SphericalPoint;

    #[test]
    fn coord_is_lon_lat() {
        let c = coord!(x: 10.0, y: 20.0);
        assert_eq!(c.lat(), 20.0);
        assert_eq!(c.lon(), 10.0);
        assert_eq!(Position::from(c), Position::new(10.0, 20.0));
        assert_eq!(Coord::from(Position::new(10.0, 20.0)), c);
        assert_eq!(Coord::<f32>::latlon(1.0, 2.0), coord!(x: 2.0f32, y: 1.0));
    }

    #[test]
    fn spherical_helpers() {
        let a = coord!(x: 0.0, y: 0.0);
        let b = Position::new(0.0, 10.0);
        assert!((a.bearing_to(&b) - 0.0).abs() < 1e-9);
        assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-9);
    }
}
