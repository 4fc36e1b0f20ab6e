//! Reference objectives with closed-form gradients: quadratic / Rosenbrock

use crate::error::{ensure_len, Result};
use crate::numerics::finite_diff::Reentrant;
use crate::problems::cost_function::CostFunction;

/// f(x) = sum_i x_i^2 on R^n, implemented through `compute` only.
#[derive(Clone, Copy, Debug)]
pub struct SumOfSquares {
    pub n: usize,
}

impl CostFunction for SumOfSquares {
    fn dim(&self) -> usize {
        self.n
    }

    fn compute(&self, x: &[f64], value: Option<&mut f64>, grad: Option<&mut [f64]>) -> Result<()> {
        ensure_len("point", self.n, x.len())?;
        if let Some(v) = value {
            *v = x.iter().map(|xi| xi * xi).sum();
        }
        if let Some(g) = grad {
            ensure_len("gradient", self.n, g.len())?;
            for (gi, xi) in g.iter_mut().zip(x) {
                *gi = 2.0 * xi;
            }
        }
        Ok(())
    }
}

impl Reentrant for SumOfSquares {}

/// 1D quadratic f(x) = 0.5 * a * x^2 - b * x, minimized at x* = b / a.
#[derive(Clone, Copy, Debug)]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
}

impl CostFunction for Quadratic {
    fn dim(&self) -> usize {
        1
    }

    fn value(&self, x: &[f64]) -> Result<f64> {
        ensure_len("point", 1, x.len())?;
        let x0 = x[0];
        Ok(0.5 * self.a * x0 * x0 - self.b * x0)
    }

    fn gradient_into(&self, x: &[f64], grad: &mut [f64]) -> Result<()> {
        ensure_len("point", 1, x.len())?;
        ensure_len("gradient", 1, grad.len())?;
        // df/dx = a * x - b
        grad[0] = self.a * x[0] - self.b;
        Ok(())
    }
}

impl Reentrant for Quadratic {}

/// 2D Rosenbrock function.
/// f(x, y) = (a - x)^2 + b (y - x^2)^2
#[derive(Clone, Copy, Debug)]
pub struct Rosenbrock {
    pub a: f64,
    pub b: f64,
}

impl Default for Rosenbrock {
    fn default() -> Self {
        Self { a: 1.0, b: 100.0 }
    }
}

impl CostFunction for Rosenbrock {
    fn dim(&self) -> usize {
        2
    }

    fn value(&self, x: &[f64]) -> Result<f64> {
        ensure_len("point", 2, x.len())?;
        let x0 = x[0];
        let x1 = x[1];
        Ok((self.a - x0).powi(2) + self.b * (x1 - x0 * x0).powi(2))
    }

    fn gradient_into(&self, x: &[f64], grad: &mut [f64]) -> Result<()> {
        ensure_len("point", 2, x.len())?;
        ensure_len("gradient", 2, grad.len())?;
        let x0 = x[0];
        let x1 = x[1];

        // df/dx = -2(a - x) - 4bx(y - x^2)
        grad[0] = -2.0 * (self.a - x0) - 4.0 * self.b * x0 * (x1 - x0 * x0);
        // df/dy = 2b(y - x^2)
        grad[1] = 2.0 * self.b * (x1 - x0 * x0);
        Ok(())
    }
}

impl Reentrant for Rosenbrock {}

/// f(x0, x1) = x0^2 + 3 * x1, value only.
///
/// Has no analytic gradient; use the finite-difference methods.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearQuadratic;

impl CostFunction for LinearQuadratic {
    fn dim(&self) -> usize {
        2
    }

    fn value(&self, x: &[f64]) -> Result<f64> {
        ensure_len("point", 2, x.len())?;
        Ok(x[0] * x[0] + 3.0 * x[1])
    }
}

impl Reentrant for LinearQuadratic {}
