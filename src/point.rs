use num_complex::Complex64;

use crate::error::{Axis, FractalError, Result};

/// A coordinate in the sampled plane, read as c = x + iy.
///
/// Only [`Point::new`] builds one, so both parts are always finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() {
            return Err(FractalError::NonFiniteCoordinate {
                axis: Axis::X,
                value: x,
            });
        }
        if !y.is_finite() {
            return Err(FractalError::NonFiniteCoordinate {
                axis: Axis::Y,
                value: y,
            });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn as_complex(&self) -> Complex64 {
        Complex64::new(self.x, self.y)
    }
}
