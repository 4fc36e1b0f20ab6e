//! Cost functions built from closures.

use crate::error::{ensure_len, Result};
use crate::numerics::finite_diff::{FiniteDifference, DEFAULT_FD_STEP};
use crate::problems::cost_function::CostFunction;

/// Value-only cost function. Its gradient is the central finite difference
/// at `step_size`.
#[derive(Clone, Debug)]
pub struct ValueFn<F> {
    dim: usize,
    value_fn: F,
    /// Finite-difference step used for the gradient.
    pub step_size: f64,
}

impl<F> ValueFn<F>
where
    F: Fn(&[f64]) -> f64,
{
    pub fn new(dim: usize, value_fn: F) -> Self {
        Self {
            dim,
            value_fn,
            step_size: DEFAULT_FD_STEP,
        }
    }

    pub fn with_step(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }
}

impl<F> CostFunction for ValueFn<F>
where
    F: Fn(&[f64]) -> f64,
{
    fn dim(&self) -> usize {
        self.dim
    }

    fn value(&self, x: &[f64]) -> Result<f64> {
        ensure_len("point", self.dim, x.len())?;
        Ok((self.value_fn)(x))
    }

    fn gradient_into(&self, x: &[f64], grad: &mut [f64]) -> Result<()> {
        self.fd_gradient_into(x, grad, self.step_size)
    }
}

/// Cost function from a value closure and an analytic gradient closure.
///
/// The gradient closure writes ∇f(x) into a buffer of length `dim`.
#[derive(Clone, Debug)]
pub struct ValueGradFn<F, G> {
    dim: usize,
    value_fn: F,
    grad_fn: G,
}

impl<F, G> ValueGradFn<F, G>
where
    F: Fn(&[f64]) -> f64,
    G: Fn(&[f64], &mut [f64]),
{
    pub fn new(dim: usize, value_fn: F, grad_fn: G) -> Self {
        Self {
            dim,
            value_fn,
            grad_fn,
        }
    }
}

impl<F, G> CostFunction for ValueGradFn<F, G>
where
    F: Fn(&[f64]) -> f64,
    G: Fn(&[f64], &mut [f64]),
{
    fn dim(&self) -> usize {
        self.dim
    }

    fn value(&self, x: &[f64]) -> Result<f64> {
        ensure_len("point", self.dim, x.len())?;
        Ok((self.value_fn)(x))
    }

    fn gradient_into(&self, x: &[f64], grad: &mut [f64]) -> Result<()> {
        ensure_len("point", self.dim, x.len())?;
        ensure_len("gradient", self.dim, grad.len())?;
        (self.grad_fn)(x, grad);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CostError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn value_fn_gradient_is_finite_difference() {
        let cost = ValueFn::new(2, |x: &[f64]| x[0] * x[0] + x[0] * x[1]).with_step(1e-6);
        let g = cost.gradient(&[1.0, 2.0]).unwrap();
        assert_abs_diff_eq!(g[0], 4.0, epsilon = 1e-6);
        assert_abs_diff_eq!(g[1], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn value_grad_fn_checks_lengths() {
        let cost = ValueGradFn::new(
            1,
            |x: &[f64]| x[0].exp(),
            |x: &[f64], g: &mut [f64]| g[0] = x[0].exp(),
        );
        assert!(matches!(
            cost.value(&[1.0, 2.0]),
            Err(CostError::DimensionMismatch { what: "point", .. })
        ));
        let mut short: [f64; 0] = [];
        assert!(matches!(
            cost.gradient_into(&[0.0], &mut short),
            Err(CostError::DimensionMismatch {
                what: "gradient",
                ..
            })
        ));
        assert_eq!(cost.gradient(&[0.0]).unwrap(), vec![1.0]);
    }
}
