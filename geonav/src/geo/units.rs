use serde::{Deserialize, Serialize};

/// Mean radius of the Earth sphere in kilometers. All distances in the crate are computed on this sphere.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Mean radius of the Earth sphere in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;
/// Kilometers in one statute mile.
pub const KM_PER_MILE: f64 = 1.609344;
/// Kilometers in one nautical mile.
pub const KM_PER_NAUTICAL_MILE: f64 = 1.852;
/// Meters in one kilometer.
pub const METERS_PER_KM: f64 = 1000.0;

/// Unit used to report a distance.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum DistanceUnit {
    /// Kilometers. Native unit of all distance functions.
    #[default]
    Kilometers,
    /// Meters.
    Meters,
    /// Statute miles.
    Miles,
    /// Nautical miles.
    NauticalMiles,
}

impl DistanceUnit {
    /// Converts a distance in kilometers into this unit.
    pub fn from_km(&self, km: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => km,
            DistanceUnit::Meters => km * METERS_PER_KM,
            DistanceUnit::Miles => km / KM_PER_MILE,
            DistanceUnit::NauticalMiles => km / KM_PER_NAUTICAL_MILE,
        }
    }

    /// Converts a distance in this unit into kilometers.
    pub fn to_km(&self, value: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => value,
            DistanceUnit::Meters => value / METERS_PER_KM,
            DistanceUnit::Miles => value * KM_PER_MILE,
            DistanceUnit::NauticalMiles => value * KM_PER_NAUTICAL_MILE,
        }
    }
}
