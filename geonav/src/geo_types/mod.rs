//! Interoperability with the [`geo_types`] crate.
//!
//! `geo_types` coordinates are `(x, y)` pairs, which are read as `(lon, lat)` in degrees.

mod coord;
mod geometry;
mod point;
