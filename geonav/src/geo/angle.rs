/// Normalizes a longitude in degrees into the `[-180, 180)` range.
pub fn normalize_lon(lon: f64) -> f64 {
    let shifted = (lon + 180.0).rem_euclid(360.0);
    // `rem_euclid` can round up to the modulus itself for tiny negative inputs.
    if shifted >= 360.0 {
        -180.0
    } else {
        shifted - 180.0
    }
}

/// Normalizes a bearing in degrees into the `[0, 360)` range.
pub fn normalize_bearing(bearing: f64) -> f64 {
    let normalized = bearing.rem_euclid(360.0);
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Central angle (in radians) between two points given in degrees, computed with the haversine formula.
pub fn angular_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normalize_lon_range() {
        assert_eq!(normalize_lon(0.0), 0.0);
        assert_eq!(normalize_lon(180.0), -180.0);
        assert_eq!(normalize_lon(-180.0), -180.0);
        assert_abs_diff_eq!(normalize_lon(190.0), -170.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_lon(-190.0), 170.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_lon(540.0), -180.0, epsilon = 1e-12);
        assert!(normalize_lon(-1e-300) < 180.0);
    }

    #[test]
    fn normalize_bearing_range() {
        assert_eq!(normalize_bearing(0.0), 0.0);
        assert_eq!(normalize_bearing(360.0), 0.0);
        assert_eq!(normalize_bearing(-90.0), 270.0);
        assert_eq!(normalize_bearing(-1e-300), 0.0);
        assert_abs_diff_eq!(normalize_bearing(725.0), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn angular_distance_quarter_circle() {
        assert_abs_diff_eq!(
            angular_distance(0.0, 0.0, 0.0, 90.0),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        );
        assert_eq!(angular_distance(10.0, 20.0, 10.0, 20.0), 0.0);
    }
}
