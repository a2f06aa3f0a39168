//! Mandelbrot set sampler for `f_c(z) = z^2 + c`, iterated from z = 0.

use log::debug;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::budget::IterationBudget;
use crate::error::Result;
use crate::fractal::EscapeTimeFractal;
use crate::point::Point;

/// Once |z| exceeds this the orbit is guaranteed to diverge.
pub const ESCAPE_RADIUS: f64 = 2.0;
const ESCAPE_RADIUS_SQR: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mandelbrot {
    max_iterations: IterationBudget,
}

impl Mandelbrot {
    pub fn new(max_iterations: impl Into<IterationBudget>) -> Self {
        let max_iterations = max_iterations.into();
        debug!("Mandelbrot sampler with budget {max_iterations}");
        Self { max_iterations }
    }

    /// Builds a sampler from a signed budget, rejecting negative values.
    pub fn try_new(max_iterations: i64) -> Result<Self> {
        let budget = IterationBudget::try_from(max_iterations)
            .inspect_err(|e| debug!("Mandelbrot sampler not built: {e}"))?;
        Ok(Self::new(budget))
    }
}

impl EscapeTimeFractal for Mandelbrot {
    fn name(&self) -> &'static str {
        "Mandelbrot"
    }

    fn max_iterations(&self) -> IterationBudget {
        self.max_iterations
    }

    fn escape_count(&self, c: Point) -> u32 {
        mandelbrot_point(c.as_complex(), self.max_iterations.get())
    }
}

#[inline]
fn mandelbrot_point(c: Complex64, max_iter: u32) -> u32 {
    let mut z = Complex64::new(0.0, 0.0);
    let mut iter = 0;
    while iter < max_iter && z.norm_sqr() <= ESCAPE_RADIUS_SQR {
        z = z * z + c;
        iter += 1;
    }
    iter
}
