//! Escape-time sampling for fractals in the complex plane.
//!
//! A sampler is built once with an iteration budget and then queried per
//! point. Each query returns how many iterations of the formula ran before
//! the orbit left the escape radius, or the budget if it never did.
//!
//! ```
//! use escape_time::{EscapeTimeFractal, Mandelbrot};
//!
//! let mandelbrot = Mandelbrot::new(1000);
//! assert_eq!(mandelbrot.sample(3.0, 0.0).unwrap(), 1);
//! assert!(mandelbrot.is_bound(-1.0, 0.0).unwrap());
//! ```
//!
//! Evaluation happens in native `f64` precision. Points extremely close to
//! the set boundary can be misclassified at deep zoom levels.

pub mod budget;
pub mod error;
pub mod fractal;
pub mod mandelbrot;
pub mod point;

pub use budget::IterationBudget;
pub use error::{Axis, FractalError, Result};
pub use fractal::{EscapeTimeFractal, FractalKind};
pub use mandelbrot::Mandelbrot;
pub use point::Point;
