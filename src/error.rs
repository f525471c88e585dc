use std::fmt;

/// Error types for smoother construction
#[derive(Debug, Clone, PartialEq)]
pub enum SmootherError {
    /// Polynomial order must be less than the window capacity `2m+1`
    InvalidPolynomialOrder(usize, usize),
    /// Evaluation point must lie inside `[-m, m]`
    InvalidEvalPoint(isize, usize),
    /// Sample period must be finite and strictly positive
    InvalidTimeStep(f64),
    /// Derivative estimates are not defined for rotation-valued signals
    DerivativeOnManifold(usize),
    /// Mathematical computation error (e.g., singular matrix)
    ComputationError(String),
}

impl fmt::Display for SmootherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmootherError::InvalidPolynomialOrder(poly_order, window_size) => {
                write!(
                    f,
                    "Invalid polynomial order: {}. Must be less than window size ({})",
                    poly_order, window_size
                )
            }
            SmootherError::InvalidEvalPoint(t, m) => {
                write!(
                    f,
                    "Invalid evaluation point: {}. Must lie within [-{}, {}]",
                    t, m, m
                )
            }
            SmootherError::InvalidTimeStep(dt) => {
                write!(f, "Invalid time step: {}. Must be finite and positive", dt)
            }
            SmootherError::DerivativeOnManifold(order) => {
                write!(
                    f,
                    "Derivative order {} requested for a rotation-valued signal; only smoothing (order 0) is supported",
                    order
                )
            }
            SmootherError::ComputationError(msg) => {
                write!(f, "Computation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SmootherError {}

/// Result type for smoother construction
pub type Result<T> = std::result::Result<T, SmootherError>;
