use thiserror::Error;

/// Top-level error type for curve construction.
///
/// Queries on a constructed curve never fail; degenerate geometry is
/// absorbed by tolerance guards and returns finite values instead.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error(transparent)]
    InvalidInput(#[from] InputError),
}

/// Malformed input rejected at construction time.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("at least {min} points are required, got {count}")]
    TooFewPoints { count: usize, min: usize },

    #[error("{knots} knots but {values} values")]
    LengthMismatch { knots: usize, values: usize },

    #[error("coordinate {axis} of point {index} is not finite")]
    NonFinite { index: usize, axis: usize },

    #[error("knot {index} of a one-dimensional interpolant is not finite")]
    NonFiniteKnot { index: usize },

    #[error("sample {index} of a one-dimensional interpolant is not finite")]
    NonFiniteValue { index: usize },

    #[error("parameter nodes must be strictly increasing (node {index})")]
    NonIncreasingNodes { index: usize },

    #[error("derivative order {0} is not supported (expected 0..=3)")]
    InvalidDerivativeOrder(usize),

    #[error("arc-length table needs at least 2 samples, got {samples}")]
    InvalidResolution { samples: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`CurveError`].
pub type Result<T> = std::result::Result<T, CurveError>;
