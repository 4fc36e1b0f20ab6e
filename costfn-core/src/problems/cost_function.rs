use crate::error::Result;
use crate::problems::guard::{check_not_recursing, DelegationGuard};

/// Scalar cost function of `dim()` real parameters, to be minimized.
///
/// There are three evaluation paths:
/// - `value`: f(x)
/// - `gradient_into`: ∇f(x) written into a caller-owned buffer
/// - `compute`: both at once, for when they share intermediate work
///
/// Implement either `value` and `gradient_into`, or `compute` (or all
/// three). The paths left out are synthesized from the others. Implementing
/// none of them panics on first use instead of recursing forever.
///
/// A cost function that only knows its value can write `gradient_into` in
/// terms of [`FiniteDifference::fd_gradient_into`](crate::FiniteDifference::fd_gradient_into).
///
/// Implementations validate the length of `x` and the gradient buffer and
/// report mismatches as [`CostError::DimensionMismatch`](crate::CostError).
pub trait CostFunction {
    /// Number of free parameters. Fixed for the lifetime of the object.
    fn dim(&self) -> usize;

    /// Function value f(x) at x.
    fn value(&self, x: &[f64]) -> Result<f64> {
        check_not_recursing(self);
        let mut val = 0.0;
        self.compute(x, Some(&mut val), None)?;
        Ok(val)
    }

    /// Write the gradient ∇f(x) at x into grad.
    ///
    /// grad is pre-sized to `dim()`.
    fn gradient_into(&self, x: &[f64], grad: &mut [f64]) -> Result<()> {
        check_not_recursing(self);
        self.compute(x, None, Some(grad))
    }

    /// Fill whichever of `value` and `grad` are requested.
    ///
    /// The default evaluates `value` and `gradient_into` independently.
    fn compute(&self, x: &[f64], value: Option<&mut f64>, grad: Option<&mut [f64]>) -> Result<()> {
        let _guard = DelegationGuard::enter(self);
        if let Some(v) = value {
            *v = self.value(x)?;
        }
        if let Some(g) = grad {
            self.gradient_into(x, g)?;
        }
        Ok(())
    }

    // --- convenience wrappers (allocate) ---
    fn gradient(&self, x: &[f64]) -> Result<Vec<f64>> {
        let mut grad = vec![0.0; self.dim()];
        self.gradient_into(x, &mut grad)?;
        Ok(grad)
    }

    fn value_and_gradient(&self, x: &[f64]) -> Result<(f64, Vec<f64>)> {
        let mut val = 0.0;
        let mut grad = vec![0.0; self.dim()];
        self.compute(x, Some(&mut val), Some(&mut grad))?;
        Ok((val, grad))
    }
}

impl<C: CostFunction + ?Sized> CostFunction for &C {
    fn dim(&self) -> usize {
        (**self).dim()
    }

    fn value(&self, x: &[f64]) -> Result<f64> {
        (**self).value(x)
    }

    fn gradient_into(&self, x: &[f64], grad: &mut [f64]) -> Result<()> {
        (**self).gradient_into(x, grad)
    }

    fn compute(&self, x: &[f64], value: Option<&mut f64>, grad: Option<&mut [f64]>) -> Result<()> {
        (**self).compute(x, value, grad)
    }
}

impl<C: CostFunction + ?Sized> CostFunction for Box<C> {
    fn dim(&self) -> usize {
        (**self).dim()
    }

    fn value(&self, x: &[f64]) -> Result<f64> {
        (**self).value(x)
    }

    fn gradient_into(&self, x: &[f64], grad: &mut [f64]) -> Result<()> {
        (**self).gradient_into(x, grad)
    }

    fn compute(&self, x: &[f64], value: Option<&mut f64>, grad: Option<&mut [f64]>) -> Result<()> {
        (**self).compute(x, value, grad)
    }
}
