use costfn::{problems::test_functions::Rosenbrock, GradientCheck};

fn main() -> costfn::Result<()> {
    let check = GradientCheck {
        verbose: true,
        ..GradientCheck::default()
    };

    let report = check.check(&Rosenbrock::default(), &[-1.2, 1.0])?;
    for record in &report.records {
        println!("{}", record.format_line());
    }
    println!(
        "passed={} max_abs={:.3e} max_rel={:.3e}",
        report.passed, report.max_abs_error, report.max_rel_error
    );
    Ok(())
}
