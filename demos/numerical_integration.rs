//! Integrates sin(x) on [0, pi] with growing accuracy and compares the quadratures.
use RustedFunctionTree::Utils::logger::init_logger;
use RustedFunctionTree::symbolic::function_tree::MathFunction;
use simplelog::LevelFilter;
use std::f64::consts::PI;

fn main() {
    if let Err(e) = init_logger(LevelFilter::Info, true, None) {
        eprintln!("cannot set up logging: {}", e);
    }
    let f = MathFunction::sin(MathFunction::Var.boxed());
    println!("exact: 2");
    for accuracy in [10u32, 100, 1000, 10_000] {
        let trapezoid = f.integral(0.0, PI, accuracy).unwrap_or(f64::NAN);
        let simpson = f.simpson(0.0, PI, accuracy).unwrap_or(f64::NAN);
        println!(
            "n = {:>6}: trapezoid error {:e}, Simpson error {:e}",
            accuracy,
            (trapezoid - 2.0).abs(),
            (simpson - 2.0).abs()
        );
    }
    for degree in [2usize, 5, 10] {
        match f.quad_gauss_legendre(0.0, PI, degree) {
            Ok(val) => println!("Gauss-Legendre degree {}: error {:e}", degree, (val - 2.0).abs()),
            Err(e) => println!("Gauss-Legendre degree {}: {}", degree, e),
        }
    }
    // closed forms: accuracy is not used
    let x = MathFunction::Var;
    println!("int x dx on [0, 2] = {:?}", x.integral(0.0, 2.0, 1));
    println!("accuracy 0: {:?}", f.integral(0.0, 1.0, 0));
}
