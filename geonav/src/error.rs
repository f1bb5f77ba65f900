//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoNavError {
    /// Geometry has too few coordinates or zero area to run the requested algorithm.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Geometry has no coordinates or members at all.
    #[error("empty geometry: {0}")]
    EmptyGeometry(String),

    /// Input is not one of the supported geometry variants, or the variant is absent.
    #[error("unsupported geometry variant: {0}")]
    UnsupportedVariant(String),

    /// A composite query found no qualifying sub-geometry.
    #[error("no result: {0}")]
    NoResult(String),

    /// Coordinate data could not be converted into a position.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
}
