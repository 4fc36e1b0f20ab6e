//! Central finite-difference gradients.
//!
//! Every estimate costs `2 * dim()` calls of [`CostFunction::value`]. Use it
//! as a fallback for objectives without an analytic gradient, or to verify
//! one (see [`crate::diagnostics::gradient_check`]).

use rayon::prelude::*;

use crate::error::{ensure_len, CostError, Result};
use crate::problems::cost_function::CostFunction;

/// Default perturbation used by [`FiniteDifference::fd_gradient`].
pub const DEFAULT_FD_STEP: f64 = 1e-5;

fn validate(n: usize, x: &[f64], grad: &[f64], step_size: f64) -> Result<()> {
    ensure_len("point", n, x.len())?;
    ensure_len("gradient", n, grad.len())?;
    if !step_size.is_finite() || step_size == 0.0 {
        return Err(CostError::InvalidStepSize(step_size));
    }
    Ok(())
}

/// Central difference along coordinate `i` of `tx`, which must equal `x`.
///
/// The divisor is the spacing of the perturbed coordinates as actually
/// represented, not `2h`. `tx[i]` is restored before returning, also on error.
fn central_difference<C>(cost: &C, x: &[f64], tx: &mut [f64], i: usize, h: f64) -> Result<f64>
where
    C: CostFunction + ?Sized,
{
    let tplus = x[i] + h;
    tx[i] = tplus;
    let fplus = cost.value(tx);

    let tminus = x[i] - h;
    let diff = fplus.and_then(|fplus| {
        tx[i] = tminus;
        let fminus = cost.value(tx)?;
        Ok((fplus - fminus) / (tplus - tminus))
    });

    tx[i] = x[i];
    diff
}

/// Finite-difference gradients, available on every [`CostFunction`].
///
/// Blanket-implemented; cost functions cannot replace these methods.
pub trait FiniteDifference: CostFunction {
    /// Write the central-difference gradient at `x` with step `step_size`
    /// into `grad`. `x` is left untouched.
    fn fd_gradient_into(&self, x: &[f64], grad: &mut [f64], step_size: f64) -> Result<()> {
        validate(self.dim(), x, grad, step_size)?;

        let mut tx = x.to_vec();
        for (i, g) in grad.iter_mut().enumerate() {
            *g = central_difference(self, x, &mut tx, i, step_size)?;
            tracing::trace!(index = i, gradient = *g, "central difference");
        }
        Ok(())
    }

    fn fd_gradient_with_step(&self, x: &[f64], step_size: f64) -> Result<Vec<f64>> {
        let mut grad = vec![0.0; self.dim()];
        self.fd_gradient_into(x, &mut grad, step_size)?;
        Ok(grad)
    }

    fn fd_gradient(&self, x: &[f64]) -> Result<Vec<f64>> {
        self.fd_gradient_with_step(x, DEFAULT_FD_STEP)
    }
}

impl<C: CostFunction + ?Sized> FiniteDifference for C {}

/// Marker for cost functions whose `value` may run concurrently.
///
/// Implement only when `value` is reentrant and has no side effects. This
/// unlocks [`ParallelFiniteDifference`].
pub trait Reentrant: CostFunction + Sync {}

impl<C: Reentrant + ?Sized> Reentrant for &C {}

/// Finite-difference gradients with the `2n` evaluations spread over the
/// rayon pool. Results are identical to the serial form.
pub trait ParallelFiniteDifference: Reentrant {
    fn par_fd_gradient_into(&self, x: &[f64], grad: &mut [f64], step_size: f64) -> Result<()> {
        validate(self.dim(), x, grad, step_size)?;

        grad.par_iter_mut().enumerate().try_for_each_init(
            || x.to_vec(),
            |tx, (i, g)| {
                *g = central_difference(self, x, tx, i, step_size)?;
                tracing::trace!(index = i, gradient = *g, "central difference");
                Ok(())
            },
        )
    }

    fn par_fd_gradient(&self, x: &[f64], step_size: f64) -> Result<Vec<f64>> {
        let mut grad = vec![0.0; self.dim()];
        self.par_fd_gradient_into(x, &mut grad, step_size)?;
        Ok(grad)
    }
}

impl<C: Reentrant + ?Sized> ParallelFiniteDifference for C {}
