//! costfn: scalar cost functions for gradient-based optimizers
//!
//! - `CostFunction`: value / gradient / combined evaluation, any one path
//!   synthesized from the others
//! - `FiniteDifference`: central-difference gradient on every cost function
//! - `ValueFn`, `ValueGradFn`: cost functions from closures
//! - `GradientCheck`: compare an analytic gradient with finite differences
//!
//! ```
//! use costfn::{CostFunction, FiniteDifference, Result};
//!
//! struct Paraboloid;
//!
//! impl CostFunction for Paraboloid {
//!     fn dim(&self) -> usize {
//!         2
//!     }
//!
//!     fn value(&self, x: &[f64]) -> Result<f64> {
//!         costfn::ensure_len("point", 2, x.len())?;
//!         Ok(x[0] * x[0] + 3.0 * x[1])
//!     }
//! }
//!
//! let g = Paraboloid.fd_gradient_with_step(&[2.0, 5.0], 1e-3)?;
//! assert!((g[0] - 4.0).abs() < 1e-6);
//! assert!((g[1] - 3.0).abs() < 1e-6);
//! # Ok::<(), costfn::CostError>(())
//! ```

pub mod diagnostics;
pub mod error;
pub mod numerics;
pub mod problems;

pub use diagnostics::{GradientCheck, GradientCheckRecord, GradientCheckReport};
pub use error::{ensure_len, CostError, Result};
pub use numerics::{FiniteDifference, ParallelFiniteDifference, Reentrant, DEFAULT_FD_STEP};
pub use problems::{CostFunction, Counting, EvalCounts, ValueFn, ValueGradFn};
