//! Geonav is a spherical geometry and navigation library. It works with GeoJSON-shaped geometries in longitude/latitude
//! degrees and computes distances, bearings, routes and representative points on the Earth sphere
//! ([`EARTH_RADIUS_KM`](geo::EARTH_RADIUS_KM)).
//!
//! # Quick start
//!
//! ```
//! use geonav::{great_circle_route, Feature, FeatureCollection, Geom, Point, Polygon, Position};
//!
//! let square = Polygon::new(vec![vec![
//!     Position::new(0.0, 0.0),
//!     Position::new(2.0, 0.0),
//!     Position::new(2.0, 2.0),
//!     Position::new(0.0, 2.0),
//!     Position::new(0.0, 0.0),
//! ]]);
//! let collection = Geom::from(FeatureCollection::new(vec![Feature::new(square)]));
//!
//! assert_eq!(collection.center_of_mass().unwrap(), Point::new(1.0, 1.0));
//! assert!(collection.signed_distance_km(&Point::new(1.0, 1.0)).unwrap() < 0.0);
//!
//! let route = great_circle_route(&Point::new(179.0, 0.0), &Point::new(-179.0, 0.0), 5);
//! assert!(matches!(route, Geom::MultiLineString(_)));
//! ```
//!
//! # Modules
//!
//! * [`geo`] has the trigonometric primitives working on plain `(lat, lon)` values.
//! * [`geometry`] defines the [`Geom`] variants and their traversal.
//! * [`polygon`] and [`line`] contain ring and polyline algorithms.
//! * [`algorithms`] contains queries over whole geometries.
//!
//! # Features
//!
//! * `geo-types` (default): conversions from [`geo_types`](https://docs.rs/geo-types) geometries and
//!   [`geo::GeoPoint`] implementations for its points and coordinates.
//! * `geojson`: conversions from and to [`geojson`](https://docs.rs/geojson) types.

pub mod algorithms;
pub mod contour;
pub mod error;
pub mod geo;
pub mod geometry;
pub mod line;
pub mod polygon;
mod position;
pub mod segment;

#[cfg(feature = "geo-types")]
mod geo_types;
#[cfg(feature = "geojson")]
mod geojson;

pub use algorithms::{
    center, center_of_mass, great_circle_route, great_circle_route_by_distance,
    point_on_surface, polygon_point_distance,
};
pub use contour::Contour;
pub use error::GeoNavError;
pub use geometry::{
    Feature, FeatureCollection, Geom, GeomVisitor, LineString, MultiLineString, MultiPolygon,
    Point, Polygon, Properties,
};
pub use line::line_point_distance;
pub use position::Position;
pub use segment::Segment;
