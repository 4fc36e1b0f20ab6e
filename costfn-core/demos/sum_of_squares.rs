use costfn::{problems::test_functions::SumOfSquares, CostFunction, FiniteDifference};

fn main() -> costfn::Result<()> {
    let cost = SumOfSquares { n: 3 };
    let x = vec![1.0, -2.0, 0.5];

    let (f, grad) = cost.value_and_gradient(&x)?;
    let fd = cost.fd_gradient_with_step(&x, 1e-4)?;

    println!("f(x)={f:.6}");
    for (i, (g, d)) in grad.iter().zip(&fd).enumerate() {
        println!("  [{i}] analytic={g:+.6} finite-diff={d:+.6}");
    }
    Ok(())
}
