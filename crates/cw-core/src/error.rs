//! Drawing error taxonomy

/// Errors surfaced by the projection engine and the vector exporter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DrawingError {
    /// A cabinet or canvas dimension is non-positive, non-finite or inconsistent
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),
    /// A view kind outside of top, elevation and iso was requested
    #[error("Unsupported view: {0}")]
    UnsupportedView(String),
    /// Geometry contains NaN or infinity and cannot be serialized
    #[error("Serialization overflow: {0}")]
    SerializationOverflow(String),
}

/// Result type for drawing operations
pub type DrawingResult<T> = Result<T, DrawingError>;
