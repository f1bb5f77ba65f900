//! Implementations of geographic point traits.

pub mod point;
