// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::Utils::logger::save_table_to_csv;
use crate::symbolic::function_factory::FunctionFactory;
use crate::symbolic::function_tree::{FunctionKind, MathFunction};
use std::f64::consts::PI;
use strum::IntoEnumIterator;

/// A few named functions to run examples and tasks on.
pub fn demo_function(name: &str) -> Option<MathFunction> {
    let factory = FunctionFactory::new();
    let x = factory.x();
    let f = match name {
        "sin" => factory.sine(x),
        "cos" => factory.cosine(x),
        // 3x + sin(x) + 2
        "mixed" => factory.sum(vec![
            factory.product(vec![factory.constant(3.0), x.clone()]),
            factory.constant(1.0),
            factory.sine(x),
            factory.constant(1.0),
        ]),
        // x^2 * cos(x)
        "poly_cos" => factory.product(vec![x.clone(), x.clone(), factory.cosine(x)]),
        // sin(2x)
        "chain" => factory.sine(factory.product(vec![factory.constant(2.0), x])),
        _ => return None,
    };
    Some(f)
}

pub const DEMO_FUNCTIONS: [&str; 5] = ["sin", "cos", "mixed", "poly_cos", "chain"];

pub fn fn_examples(example: usize) {
    match example {
        0 => {
            // BUILDING FUNCTIONS
            let factory = FunctionFactory::new();
            let x = factory.x();
            // constants are folded into one trailing constant
            let f = factory.sum(vec![
                factory.product(vec![factory.constant(3.0), x.clone()]),
                factory.constant(1.0),
                factory.sine(x.clone()),
                factory.constant(1.0),
            ]);
            println!("f = {}", f);
            println!("f(0) = {}, f(pi/2) = {}", f.evaluate(0.0), f.evaluate(PI / 2.0));
            // no x anywhere: the factory hands out a constant
            let c = factory.product(vec![factory.constant(2.0), factory.cosine(factory.constant(0.0))]);
            println!("c = {}, constant = {}", c, c.is_constant());
            // a zero factor absorbs everything
            let zero = MathFunction::product(vec![x.clone(), factory.constant(0.0), factory.sine(x)]);
            println!("zero = {}", zero);
            // operators build the same normalized trees
            let g = MathFunction::Var * MathFunction::from(2.0) + MathFunction::Const(1.0);
            println!("g = {}", g);
        }
        1 => {
            // DERIVATIVES
            for name in DEMO_FUNCTIONS {
                let Some(f) = demo_function(name) else {
                    continue;
                };
                let df_dx = f.derivative();
                println!("f = {}\n df/dx = {}", f, df_dx);
                let d2f_dx2 = f.n_th_derivative(2);
                println!(" d2f/dx2 = {}", d2f_dx2);
                // compare numerical and analtical derivatives on a linspace
                match f.compare_num1D(0.0, 2.0 * PI, 100, 1e-5) {
                    Ok((norm, res)) => println!(" norm = {}, res = {}", norm, res),
                    Err(e) => println!(" comparison failed: {}", e),
                }
            }
        }
        2 => {
            // INTEGRALS
            let f = MathFunction::sin(MathFunction::Var.boxed());
            for accuracy in [10, 100, 1000] {
                let trapezoid = f.integral(0.0, PI, accuracy);
                let simpson = f.simpson(0.0, PI, accuracy);
                println!(
                    "accuracy {}: trapezoid {:?}, Simpson {:?}",
                    accuracy, trapezoid, simpson
                );
            }
            let gauss = f.quad_gauss_legendre(0.0, PI, 10);
            println!("Gauss-Legendre {:?}", gauss);
            // reversed bounds change the sign
            println!("reversed: {:?}", f.integral(PI, 0.0, 1000));
            // closed forms do not look at accuracy
            let x = MathFunction::Var;
            println!("int x on [0, 2] = {:?}", x.integral(0.0, 2.0, 1));
        }
        3 => {
            // CLOSURES AND SAMPLING
            let f = demo_function("poly_cos").unwrap_or(MathFunction::Var);
            let f_closure = f.lambdify1D();
            println!("f(1) = {}", f_closure(1.0));
            let values = f.evaluate_on_linspace(0.0, 1.0, 5);
            println!("values = {:?}", values);
            let par_values = f.par_evaluate_on_linspace(0.0, 1.0, 5);
            println!("par values = {:?}", par_values);
            match save_table_to_csv(&f, 0.0, 1.0, 11, "poly_cos.csv") {
                Ok(()) => println!("table saved to poly_cos.csv"),
                Err(e) => println!("could not save table: {}", e),
            }
        }
        4 => {
            // NODE KINDS
            let factory = FunctionFactory::new();
            for kind in FunctionKind::iter() {
                let args = match kind {
                    FunctionKind::Variable => vec![],
                    FunctionKind::Constant => vec![factory.constant(2.5)],
                    _ => vec![factory.x(), factory.constant(1.0)],
                };
                match factory.build(kind, args) {
                    Ok(f) => println!("{}: {}", kind, f),
                    Err(e) => println!("{}: {}", kind, e),
                }
            }
        }
        _ => {
            println!("example {} not found", example);
        }
    }
}
