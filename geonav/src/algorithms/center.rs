use crate::error::GeoNavError;
use crate::geometry::{Geom, Point};

/// Center of the longitude/latitude bounding box of all positions of the geometry.
///
/// The result does not necessarily lie on the geometry. See [`point_on_surface`](super::point_on_surface) for that.
pub fn center(geom: &Geom) -> Result<Point, GeoNavError> {
    let positions = geom.positions()?;
    let Some(first) = positions.first() else {
        return Err(GeoNavError::NoResult("no coordinates found".into()));
    };

    let (mut min_lon, mut max_lon) = (first.lon, first.lon);
    let (mut min_lat, mut max_lat) = (first.lat, first.lat);
    for p in &positions[1..] {
        min_lon = min_lon.min(p.lon);
        max_lon = max_lon.max(p.lon);
        min_lat = min_lat.min(p.lat);
        max_lat = max_lat.max(p.lat);
    }

    Ok(Point::new((min_lon + max_lon) / 2.0, (min_lat + max_lat) / 2.0))
}

impl Geom {
    /// Center of the bounding box of the geometry. See [`center`].
    pub fn center(&self) -> Result<Point, GeoNavError> {
        center(self)
    }
}
