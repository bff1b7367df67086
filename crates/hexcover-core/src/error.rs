//! Error types for hexcover

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HexcoverError {
    // Parameter errors
    #[error("resolution {value} is out of range, expected 0 to 15")]
    ResolutionOutOfRange { value: i32 },

    #[error("invalid ring_k {value}: must be a non-negative integer")]
    InvalidRingRadius { value: i64 },

    #[error("ring_k {value} is out of range, expected 0 to {max}")]
    RingRadiusTooLarge { value: i64, max: u32 },

    #[error("invalid coordinates: {reason}")]
    InvalidCoordinates { reason: String },

    // Geometry input errors
    #[error("at least one feature required")]
    EmptyFeatureCollection,

    #[error("only Polygon geometry is supported")]
    UnsupportedGeometry,

    #[error("malformed polygon coordinates: {reason}")]
    MalformedPolygon { reason: String },

    // Engine failures
    #[error("geometry processing failed: {reason}")]
    Geometry { reason: String },
}

impl HexcoverError {
    /// Whether the failure was caused by invalid caller input, as opposed to
    /// an internal geometry or indexing failure.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Geometry { .. })
    }
}

pub type Result<T> = std::result::Result<T, HexcoverError>;
