use log::debug;

use crate::error::GeoNavError;
use crate::geo::{great_circle_distance, great_circle_intermediate_point};
use crate::geometry::{Geom, LineString, MultiLineString, Point};
use crate::position::Position;

/// Longitude jump between consecutive route positions that is treated as crossing the antimeridian.
const ANTIMERIDIAN_JUMP: f64 = 180.0;

/// Largest number of positions [`great_circle_route_by_distance`] will generate.
pub const MAX_ROUTE_POINTS: usize = 1_000_000;

/// Great-circle route between two points with `npoints` evenly spaced positions (including both ends).
///
/// `npoints` of `0` is treated as `2`. If the route crosses the antimeridian, it is split there and a
/// [`Geom::MultiLineString`] is returned, otherwise a [`Geom::LineString`]. If the start and the end are the same,
/// the result is a line repeating the start `npoints` times.
pub fn great_circle_route(start: &Point, end: &Point, npoints: usize) -> Geom {
    let npoints = if npoints == 0 { 2 } else { npoints };
    let from = start.coordinates;
    let to = end.coordinates;

    if from == to {
        return LineString::new(vec![from; npoints]).into();
    }

    let last = (npoints - 1).max(1) as f64;
    let positions: Vec<Position> = (0..npoints)
        .map(|i| {
            great_circle_intermediate_point(from.lat, from.lon, to.lat, to.lon, i as f64 / last)
                .into()
        })
        .collect();

    let mut lines = split_at_antimeridian(positions);
    if lines.len() == 1 {
        LineString::new(lines.remove(0)).into()
    } else {
        debug!(
            "Great circle route from {from:?} to {to:?} is split at the antimeridian into {} parts",
            lines.len()
        );
        MultiLineString::new(lines).into()
    }
}

/// Great-circle route between two points with positions spaced roughly `spacing_km` apart.
///
/// The number of positions is `floor(total / spacing) + 1`, but not less than 2. See [`great_circle_route`] for the
/// shape of the result.
///
/// Fails with [`GeoNavError::DegenerateGeometry`] if the spacing is not a positive number or if it would produce
/// more than [`MAX_ROUTE_POINTS`] positions.
pub fn great_circle_route_by_distance(
    start: &Point,
    end: &Point,
    spacing_km: f64,
) -> Result<Geom, GeoNavError> {
    if !spacing_km.is_finite() || spacing_km <= 0.0 {
        return Err(GeoNavError::DegenerateGeometry(format!(
            "route spacing must be a positive number, got {spacing_km}"
        )));
    }

    let from = &start.coordinates;
    let to = &end.coordinates;
    let total = great_circle_distance(from.lat, from.lon, to.lat, to.lon);
    let count = (total / spacing_km).floor() + 1.0;
    if !count.is_finite() || count > MAX_ROUTE_POINTS as f64 {
        return Err(GeoNavError::DegenerateGeometry(format!(
            "route spacing of {spacing_km} km over {total} km exceeds {MAX_ROUTE_POINTS} points"
        )));
    }
    let npoints = (count as usize).max(2);

    Ok(great_circle_route(start, end, npoints))
}

fn split_at_antimeridian(positions: Vec<Position>) -> Vec<Vec<Position>> {
    let mut lines = vec![];
    let mut current: Vec<Position> = vec![];

    for position in positions {
        if let Some(prev) = current.last() {
            if (position.lon - prev.lon).abs() > ANTIMERIDIAN_JUMP {
                lines.push(std::mem::take(&mut current));
            }
        }

        current.push(position);
    }

    lines.push(current);
    lines
}
