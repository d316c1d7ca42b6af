use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("grid dimensions {width}x{height} overflow the addressable cell count")]
    DimensionsOverflow { width: usize, height: usize },

    #[error("grid dimensions must be non-negative, got {width}x{height}")]
    NegativeDimension { width: i64, height: i64 },

    #[error("expected {expected} cells, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid pipeline config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
