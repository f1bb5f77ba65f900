//! Rhumb-line (loxodrome) navigation: paths of constant bearing on the Earth sphere.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::geo::angle::{normalize_bearing, normalize_lon};
use crate::geo::impls::point::GeoPoint2d;
use crate::geo::traits::point::NewGeoPoint;
use crate::geo::units::{DistanceUnit, EARTH_RADIUS_KM};

const EAST_WEST_TOLERANCE: f64 = 1e-12;

/// Wraps the longitude difference (radians) so that the shorter way around the sphere is taken.
fn shorter_lon_delta(d_lambda: f64) -> f64 {
    if d_lambda.abs() > PI {
        if d_lambda > 0.0 {
            -(2.0 * PI - d_lambda)
        } else {
            2.0 * PI + d_lambda
        }
    } else {
        d_lambda
    }
}

/// Difference of Mercator-projected latitudes.
fn projected_lat_delta(phi1: f64, phi2: f64) -> f64 {
    ((FRAC_PI_4 + phi2 / 2.0).tan() / (FRAC_PI_4 + phi1 / 2.0).tan()).ln()
}

/// Ratio between latitude change and projected latitude change. Falls back to `cos(phi1)` on east-west courses where
/// the ratio is undefined.
fn stretch(d_phi: f64, d_psi: f64, phi1: f64) -> f64 {
    if d_psi.abs() > EAST_WEST_TOLERANCE {
        d_phi / d_psi
    } else {
        phi1.cos()
    }
}

/// Rhumb-line distance between two points in kilometers.
pub fn rhumb_line_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = phi2 - phi1;
    let d_lambda = shorter_lon_delta((lon2 - lon1).to_radians());

    let q = stretch(d_phi, projected_lat_delta(phi1, phi2), phi1);
    let delta = (d_phi * d_phi + q * q * d_lambda * d_lambda).sqrt();

    delta * EARTH_RADIUS_KM
}

/// Rhumb-line distance between two points in the requested unit.
pub fn rhumb_line_distance_units(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    unit: DistanceUnit,
) -> f64 {
    unit.from_km(rhumb_line_distance(lat1, lon1, lat2, lon2))
}

/// Constant bearing of the rhumb line from the first point to the second one, in degrees in `[0, 360)`.
pub fn rhumb_line_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_lambda = shorter_lon_delta((lon2 - lon1).to_radians());
    let d_psi = projected_lat_delta(phi1, phi2);

    normalize_bearing(d_lambda.atan2(d_psi).to_degrees())
}

/// Point reached by travelling `distance_km` from the start along a rhumb line with the given bearing.
pub fn rhumb_line_destination(lat: f64, lon: f64, distance_km: f64, bearing_deg: f64) -> GeoPoint2d {
    let phi1 = lat.to_radians();
    let lambda1 = lon.to_radians();
    let theta = bearing_deg.to_radians();
    let delta = distance_km / EARTH_RADIUS_KM;

    let d_phi = delta * theta.cos();
    let mut phi2 = phi1 + d_phi;
    // Going over a pole continues on the other side of it.
    if phi2.abs() > FRAC_PI_2 {
        phi2 = if phi2 > 0.0 { PI - phi2 } else { -PI - phi2 };
    }

    let q = stretch(d_phi, projected_lat_delta(phi1, phi2), phi1);
    let lambda2 = lambda1 + delta * theta.sin() / q;

    GeoPoint2d::latlon(phi2.to_degrees(), normalize_lon(lambda2.to_degrees()))
}
