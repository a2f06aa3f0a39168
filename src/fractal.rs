use log::debug;

use crate::budget::IterationBudget;
use crate::error::Result;
use crate::mandelbrot::Mandelbrot;
use crate::point::Point;

/// An escape-time formula: iterate per point, count until divergence.
///
/// Implementors only provide the recurrence in [`escape_count`]; input
/// validation and the bound classification are shared so that `is_bound`
/// always agrees with `sample` for the same input.
///
/// [`escape_count`]: EscapeTimeFractal::escape_count
pub trait EscapeTimeFractal: Send + Sync {
    /// Name of the formula.
    fn name(&self) -> &'static str;

    fn max_iterations(&self) -> IterationBudget;

    /// Iterations run for `c` before escape, capped at the budget.
    fn escape_count(&self, c: Point) -> u32;

    /// Samples `(x, y)`. Non-finite coordinates are rejected.
    fn sample(&self, x: f64, y: f64) -> Result<u32> {
        match Point::new(x, y) {
            Ok(point) => Ok(self.sample_point(point)),
            Err(e) => {
                debug!("{}: rejected sample: {e}", self.name());
                Err(e)
            }
        }
    }

    /// Whether `(x, y)` stayed within the escape radius for the whole budget.
    fn is_bound(&self, x: f64, y: f64) -> Result<bool> {
        Ok(self.sample(x, y)? >= self.max_iterations().get())
    }

    fn sample_point(&self, point: Point) -> u32 {
        self.escape_count(point)
    }

    fn is_point_bound(&self, point: Point) -> bool {
        self.sample_point(point) >= self.max_iterations().get()
    }
}

/// Closed set of available formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalKind {
    Mandelbrot(Mandelbrot),
}

impl FractalKind {
    fn with_fractal<T>(&self, f: impl FnOnce(&dyn EscapeTimeFractal) -> T) -> T {
        match self {
            Self::Mandelbrot(m) => f(m),
        }
    }
}

impl From<Mandelbrot> for FractalKind {
    fn from(mandelbrot: Mandelbrot) -> Self {
        Self::Mandelbrot(mandelbrot)
    }
}

impl EscapeTimeFractal for FractalKind {
    fn name(&self) -> &'static str {
        self.with_fractal(|f| f.name())
    }
    fn max_iterations(&self) -> IterationBudget {
        self.with_fractal(|f| f.max_iterations())
    }
    fn escape_count(&self, c: Point) -> u32 {
        self.with_fractal(|f| f.escape_count(c))
    }
}
