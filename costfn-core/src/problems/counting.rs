use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::Result;
use crate::numerics::finite_diff::Reentrant;
use crate::problems::cost_function::CostFunction;

/// Number of calls seen by a [`Counting`] wrapper, per evaluation path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalCounts {
    pub value: usize,
    pub gradient: usize,
    pub compute: usize,
}

/// Wrapper that counts calls into the wrapped cost function.
///
/// Every path forwards to the inner implementation, so calls the inner
/// defaults make among themselves are not counted. Counts reflect calls made
/// from outside, e.g. the `2n` `value` calls of a finite-difference gradient.
#[derive(Debug, Default)]
pub struct Counting<C> {
    pub inner: C,
    value: AtomicUsize,
    gradient: AtomicUsize,
    compute: AtomicUsize,
}

impl<C> Counting<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            value: AtomicUsize::new(0),
            gradient: AtomicUsize::new(0),
            compute: AtomicUsize::new(0),
        }
    }

    pub fn counts(&self) -> EvalCounts {
        EvalCounts {
            value: self.value.load(Ordering::Relaxed),
            gradient: self.gradient.load(Ordering::Relaxed),
            compute: self.compute.load(Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        self.value.store(0, Ordering::Relaxed);
        self.gradient.store(0, Ordering::Relaxed);
        self.compute.store(0, Ordering::Relaxed);
    }
}

impl<C: CostFunction> CostFunction for Counting<C> {
    fn dim(&self) -> usize {
        self.inner.dim()
    }

    fn value(&self, x: &[f64]) -> Result<f64> {
        self.value.fetch_add(1, Ordering::Relaxed);
        self.inner.value(x)
    }

    fn gradient_into(&self, x: &[f64], grad: &mut [f64]) -> Result<()> {
        self.gradient.fetch_add(1, Ordering::Relaxed);
        self.inner.gradient_into(x, grad)
    }

    fn compute(&self, x: &[f64], value: Option<&mut f64>, grad: Option<&mut [f64]>) -> Result<()> {
        self.compute.fetch_add(1, Ordering::Relaxed);
        self.inner.compute(x, value, grad)
    }
}

impl<C: Reentrant> Reentrant for Counting<C> {}
