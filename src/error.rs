use std::fmt;

use thiserror::Error;

/// Coordinate axis, used to report which half of a point was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Real part.
    X,
    /// Imaginary part.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x (real)"),
            Axis::Y => write!(f, "y (imaginary)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FractalError {
    #[error("iteration budget must be non-negative, got {requested}")]
    NegativeIterations { requested: i64 },

    #[error("iteration budget {requested} exceeds the maximum of {max}", max = u32::MAX)]
    BudgetTooLarge { requested: i64 },

    #[error("{axis} coordinate must be finite, got {value}")]
    NonFiniteCoordinate { axis: Axis, value: f64 },
}

pub type Result<T> = std::result::Result<T, FractalError>;
