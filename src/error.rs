use thiserror::Error;

/// Top-level error type for the fractus crate.
#[derive(Debug, Error)]
pub enum FractusError {
    #[error(transparent)]
    Subdivision(#[from] SubdivisionError),

    #[error(transparent)]
    Integration(#[from] IntegrationError),
}

/// Errors raised by the fractal subdividers and their depth control.
#[derive(Debug, Error, PartialEq)]
pub enum SubdivisionError {
    #[error("recursion depth must be non-negative, got {0}")]
    NegativeDepth(i64),

    #[error("recursion depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge { depth: i64, max: u32 },

    #[error("zoom step must be finite and positive, got {0}")]
    InvalidZoomStep(f64),
}

/// Errors related to ODE integration parameters.
#[derive(Debug, Error, PartialEq)]
pub enum IntegrationError {
    #[error("invalid integration parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`FractusError`].
pub type Result<T> = std::result::Result<T, FractusError>;
