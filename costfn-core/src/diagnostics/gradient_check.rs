//! Compare an analytic gradient against the central finite difference.

use std::fmt::Write;

use crate::error::{CostError, Result};
use crate::numerics::finite_diff::{FiniteDifference, DEFAULT_FD_STEP};
use crate::problems::cost_function::CostFunction;

/// Comparison of one gradient component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientCheckRecord {
    pub index: usize,
    pub analytic: f64,
    pub numeric: f64,
    pub abs_error: f64,
    /// abs_error / max(|analytic|, |numeric|), 0 when both are 0.
    pub rel_error: f64,
    pub passed: bool,
}

impl GradientCheckRecord {
    fn new(index: usize, analytic: f64, numeric: f64, tolerance: f64) -> Self {
        let abs_error = (analytic - numeric).abs();
        let scale = analytic.abs().max(numeric.abs());
        let rel_error = if scale > 0.0 { abs_error / scale } else { 0.0 };
        Self {
            index,
            analytic,
            numeric,
            abs_error,
            rel_error,
            passed: abs_error <= tolerance || rel_error <= tolerance,
        }
    }

    pub fn format_line(&self) -> String {
        let mut line = format!("[gradcheck] index {:>6}", self.index);
        let _ = write!(line, " | analytic {:>13.6e}", self.analytic);
        let _ = write!(line, " | numeric {:>13.6e}", self.numeric);
        let _ = write!(line, " | abs {:>9.3e}", self.abs_error);
        let _ = write!(line, " | rel {:>9.3e}", self.rel_error);
        if !self.passed {
            let _ = write!(line, " | note mismatch");
        }
        line
    }
}

/// Outcome of [`GradientCheck::check`].
#[derive(Clone, Debug)]
pub struct GradientCheckReport {
    pub records: Vec<GradientCheckRecord>,
    pub max_abs_error: f64,
    pub max_rel_error: f64,
    pub passed: bool,
}

impl GradientCheckReport {
    /// Components that exceeded the tolerance.
    pub fn failures(&self) -> impl Iterator<Item = &GradientCheckRecord> {
        self.records.iter().filter(|r| !r.passed)
    }
}

/// Configuration for gradient checking.
#[derive(Clone, Copy, Debug)]
pub struct GradientCheck {
    /// Finite-difference step.
    pub step_size: f64,
    /// A component passes when its absolute or relative error is at most this.
    pub tolerance: f64,
    /// If true, logs every record at info level instead of debug.
    pub verbose: bool,
}

impl GradientCheck {
    pub fn new() -> Self {
        Self {
            step_size: DEFAULT_FD_STEP,
            tolerance: 1e-4,
            verbose: false,
        }
    }

    /// Evaluate `cost.gradient(x)` and `cost.fd_gradient_with_step(x, ..)`
    /// and compare them component-wise.
    pub fn check<C>(&self, cost: &C, x: &[f64]) -> Result<GradientCheckReport>
    where
        C: CostFunction + ?Sized,
    {
        let analytic = cost.gradient(x)?;
        let numeric = cost.fd_gradient_with_step(x, self.step_size)?;

        let mut records = Vec::with_capacity(analytic.len());
        for (index, (&a, &n)) in analytic.iter().zip(&numeric).enumerate() {
            if !a.is_finite() {
                return Err(CostError::NonFinite {
                    what: "analytic",
                    index,
                });
            }
            if !n.is_finite() {
                return Err(CostError::NonFinite {
                    what: "numeric",
                    index,
                });
            }
            let record = GradientCheckRecord::new(index, a, n, self.tolerance);
            if self.verbose {
                tracing::info!("{}", record.format_line());
            } else {
                tracing::debug!("{}", record.format_line());
            }
            records.push(record);
        }

        let max_abs_error = records.iter().map(|r| r.abs_error).fold(0.0, f64::max);
        let max_rel_error = records.iter().map(|r| r.rel_error).fold(0.0, f64::max);
        let passed = records.iter().all(|r| r.passed);
        if passed {
            tracing::debug!(max_abs_error, max_rel_error, "gradient check passed");
        } else {
            tracing::warn!(
                max_abs_error,
                max_rel_error,
                tolerance = self.tolerance,
                "gradient check failed"
            );
        }

        Ok(GradientCheckReport {
            records,
            max_abs_error,
            max_rel_error,
            passed,
        })
    }
}

impl Default for GradientCheck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_relative_error_for_zero_components() {
        let r = GradientCheckRecord::new(0, 0.0, 0.0, 1e-8);
        assert_eq!(r.rel_error, 0.0);
        assert!(r.passed);
    }

    #[test]
    fn record_passes_on_relative_error_for_large_components() {
        let r = GradientCheckRecord::new(3, 1.0e6, 1.0e6 + 1.0, 1e-4);
        assert!(r.abs_error > 1e-4);
        assert!(r.passed);
    }

    #[test]
    fn format_line_marks_mismatch() {
        let ok = GradientCheckRecord::new(1, 2.0, 2.0, 1e-6);
        let bad = GradientCheckRecord::new(2, 2.0, 5.0, 1e-6);
        assert!(ok.format_line().starts_with("[gradcheck] index      1"));
        assert!(!ok.format_line().contains("mismatch"));
        assert!(bad.format_line().ends_with("note mismatch"));
    }
}
