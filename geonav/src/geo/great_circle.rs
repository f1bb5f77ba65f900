//! Great-circle (orthodrome) navigation on the Earth sphere.

use nalgebra::Vector3;

use crate::geo::angle::{angular_distance, normalize_bearing, normalize_lon};
use crate::geo::impls::point::GeoPoint2d;
use crate::geo::traits::point::NewGeoPoint;
use crate::geo::units::EARTH_RADIUS_KM;

/// Result of projecting a point onto a great-circle path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackProjection {
    /// Foot of the projection on the path.
    pub point: GeoPoint2d,
    /// Distance from the point to the path in kilometers. Positive values are to the right of the path direction,
    /// negative values to the left.
    pub cross_track_km: f64,
    /// Signed distance in kilometers from the path start to [`TrackProjection::point`], measured in the path
    /// direction.
    pub along_track_km: f64,
}

/// Great-circle distance between two points in kilometers (haversine formula).
///
/// The signature matches `fn(f64, f64, f64, f64) -> f64`, so the function can be passed directly as an edge weight
/// to graph algorithms.
pub fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    EARTH_RADIUS_KM * angular_distance(lat1, lon1, lat2, lon2)
}

/// Initial bearing of the great-circle path from the first point to the second one, in degrees in `[0, 360)`.
pub fn initial_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();

    normalize_bearing(y.atan2(x).to_degrees())
}

/// Point reached by travelling `distance_km` from the start along the great circle with the given initial bearing.
///
/// Negative distances travel backwards.
pub fn great_circle_destination(lat: f64, lon: f64, distance_km: f64, bearing_deg: f64) -> GeoPoint2d {
    destination_rad(
        lat.to_radians(),
        lon.to_radians(),
        bearing_deg.to_radians(),
        distance_km / EARTH_RADIUS_KM,
    )
}

fn destination_rad(phi1: f64, lambda1: f64, theta: f64, delta: f64) -> GeoPoint2d {
    let sin_phi2 = phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos();
    let phi2 = sin_phi2.clamp(-1.0, 1.0).asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * sin_phi2);

    GeoPoint2d::latlon(phi2.to_degrees(), normalize_lon(lambda2.to_degrees()))
}

fn n_vector(lat: f64, lon: f64) -> Vector3<f64> {
    let phi = lat.to_radians();
    let lambda = lon.to_radians();
    Vector3::new(phi.cos() * lambda.cos(), phi.cos() * lambda.sin(), phi.sin())
}

fn from_n_vector(v: &Vector3<f64>) -> GeoPoint2d {
    let lat = v.z.atan2(v.x.hypot(v.y));
    let lon = v.y.atan2(v.x);
    GeoPoint2d::latlon(lat.to_degrees(), normalize_lon(lon.to_degrees()))
}

/// Point at `fraction` of the way along the great-circle arc between two points (spherical linear interpolation).
///
/// `0.0` returns the start point and `1.0` the end point. If the points coincide, the start point is returned.
pub fn great_circle_intermediate_point(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    fraction: f64,
) -> GeoPoint2d {
    let delta = angular_distance(lat1, lon1, lat2, lon2);
    if delta == 0.0 {
        return GeoPoint2d::latlon(lat1, normalize_lon(lon1));
    }

    let sin_delta = delta.sin();
    let a = ((1.0 - fraction) * delta).sin() / sin_delta;
    let b = (fraction * delta).sin() / sin_delta;

    from_n_vector(&(n_vector(lat1, lon1) * a + n_vector(lat2, lon2) * b))
}

/// Projects point `P` onto the infinite great circle running through the start and the end points.
///
/// The along-track distance is not limited to the segment between the two points: it is negative when the foot of
/// the projection lies behind the start and exceeds the path length when it lies past the end. Use
/// [`great_circle_project_to_segment`] to get the nearest point of the segment itself.
///
/// If the start and the end coincide, the start point is returned with zero along-track distance and the
/// cross-track distance equal to the distance between `P` and the start.
pub fn great_circle_project(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    lat_p: f64,
    lon_p: f64,
) -> TrackProjection {
    if angular_distance(lat1, lon1, lat2, lon2) == 0.0 {
        return TrackProjection {
            point: GeoPoint2d::latlon(lat1, normalize_lon(lon1)),
            cross_track_km: great_circle_distance(lat1, lon1, lat_p, lon_p),
            along_track_km: 0.0,
        };
    }

    let delta13 = angular_distance(lat1, lon1, lat_p, lon_p);
    let theta13 = initial_bearing(lat1, lon1, lat_p, lon_p).to_radians();
    let theta12 = initial_bearing(lat1, lon1, lat2, lon2).to_radians();

    let cross = (delta13.sin() * (theta13 - theta12).sin())
        .clamp(-1.0, 1.0)
        .asin();
    let along = (delta13.cos() / cross.cos()).clamp(-1.0, 1.0).acos()
        * (theta12 - theta13).cos().signum();

    TrackProjection {
        point: destination_rad(lat1.to_radians(), lon1.to_radians(), theta12, along),
        cross_track_km: cross * EARTH_RADIUS_KM,
        along_track_km: along * EARTH_RADIUS_KM,
    }
}

/// Projects point `P` onto the great-circle segment between the start and the end points.
///
/// Same as [`great_circle_project`] while the foot of the projection lies within the segment. Otherwise the nearer
/// endpoint is returned, the along-track distance is clamped to `[0, length]` and the cross-track distance is the
/// (unsigned) great-circle distance between `P` and that endpoint.
pub fn great_circle_project_to_segment(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    lat_p: f64,
    lon_p: f64,
) -> TrackProjection {
    let projection = great_circle_project(lat1, lon1, lat2, lon2, lat_p, lon_p);
    let total = great_circle_distance(lat1, lon1, lat2, lon2);
    if (0.0..=total).contains(&projection.along_track_km) {
        return projection;
    }

    // The foot of the projection can lie behind the start while the end is closer, on the far side of the sphere.
    let to_start = great_circle_distance(lat1, lon1, lat_p, lon_p);
    let to_end = great_circle_distance(lat2, lon2, lat_p, lon_p);
    if to_start <= to_end {
        TrackProjection {
            point: GeoPoint2d::latlon(lat1, normalize_lon(lon1)),
            cross_track_km: to_start,
            along_track_km: 0.0,
        }
    } else {
        TrackProjection {
            point: GeoPoint2d::latlon(lat2, normalize_lon(lon2)),
            cross_track_km: to_end,
            along_track_km: total,
        }
    }
}
