use serde::{Deserialize, Serialize};

use crate::error::GeoNavError;
use crate::geo::{GeoPoint, GeoPoint2d, NewGeoPoint};

/// A coordinate pair in degrees. Longitude goes first, following the GeoJSON convention.
///
/// Serializes into a `[lon, lat]` array. Deserialization accepts arrays with at least two numbers and ignores any
/// additional dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Position {
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl Position {
    /// Creates a new position.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl GeoPoint for Position {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint for Position {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self::new(lon, lat)
    }
}

impl From<GeoPoint2d> for Position {
    fn from(value: GeoPoint2d) -> Self {
        Self::new(value.lon(), value.lat())
    }
}

impl From<[f64; 2]> for Position {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<Position> for [f64; 2] {
    fn from(value: Position) -> Self {
        [value.lon, value.lat]
    }
}

impl TryFrom<Vec<f64>> for Position {
    type Error = GeoNavError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl TryFrom<&[f64]> for Position {
    type Error = GeoNavError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        match value {
            [lon, lat, ..] => Ok(Self::new(*lon, *lat)),
            _ => Err(GeoNavError::Conversion(
                "position must contain at least 2 dimensions".to_string(),
            )),
        }
    }
}
