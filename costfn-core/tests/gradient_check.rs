use costfn::{
    ensure_len,
    problems::test_functions::{Quadratic, Rosenbrock},
    CostError, CostFunction, GradientCheck, Result, ValueGradFn,
};

#[test]
fn correct_gradients_pass() {
    let check = GradientCheck::default();

    let report = check.check(&Rosenbrock::default(), &[-1.2, 1.0]).unwrap();
    assert!(report.passed);
    assert_eq!(report.records.len(), 2);
    assert!(report.max_rel_error < 1e-6);
    assert_eq!(report.failures().count(), 0);

    let report = check.check(&Quadratic { a: 2.0, b: 4.0 }, &[0.5]).unwrap();
    assert!(report.passed);
}

#[test]
fn wrong_gradient_is_reported_per_component() {
    // Second component has the wrong sign.
    let cost = ValueGradFn::new(
        2,
        |x: &[f64]| x[0] * x[0] + x[1] * x[1],
        |x: &[f64], g: &mut [f64]| {
            g[0] = 2.0 * x[0];
            g[1] = -2.0 * x[1];
        },
    );
    let check = GradientCheck {
        step_size: 1e-6,
        tolerance: 1e-5,
        verbose: true,
    };
    let report = check.check(&cost, &[1.0, 3.0]).unwrap();

    assert!(!report.passed);
    let failures: Vec<_> = report.failures().map(|r| r.index).collect();
    assert_eq!(failures, vec![1]);
    assert!((report.max_abs_error - 12.0).abs() < 1e-4);
    assert!((report.records[1].rel_error - 2.0).abs() < 1e-4);
}

struct NanGradient;

impl CostFunction for NanGradient {
    fn dim(&self) -> usize {
        1
    }

    fn value(&self, x: &[f64]) -> Result<f64> {
        Ok(x[0])
    }

    fn gradient_into(&self, x: &[f64], grad: &mut [f64]) -> Result<()> {
        ensure_len("gradient", 1, grad.len())?;
        grad[0] = f64::NAN * x[0];
        Ok(())
    }
}

#[test]
fn non_finite_components_are_errors() {
    let err = GradientCheck::new().check(&NanGradient, &[1.0]).unwrap_err();
    assert_eq!(
        err,
        CostError::NonFinite {
            what: "analytic",
            index: 0,
        }
    );
}

#[test]
fn argument_errors_propagate() {
    let err = GradientCheck::new()
        .check(&Rosenbrock::default(), &[1.0])
        .unwrap_err();
    assert!(matches!(err, CostError::DimensionMismatch { .. }));
}
