//! # Function Tree Derivatives Module
//!
//! Symbolic differentiation of [`MathFunction`] trees and the numerical tools used to
//! check and consume the results.
//!
//! ## Key Methods
//!
//! ### Differentiation
//! - `derivative()` - exact derivative d/dx as a new, normalized tree
//! - `n_th_derivative(n)` - repeated differentiation
//!
//! ### Function evaluation
//! - `lambdify1D()` - turn the tree into a Rust closure `Fn(f64) -> f64`
//! - `evaluate_on_linspace()` / `par_evaluate_on_linspace()` - sample the function on a grid
//!
//! ### Numerical Analysis
//! - `compare_num1D()` - compare the symbolic derivative with a central difference
//!
//! ## Interesting Code Features
//!
//! 1. **Generalized product rule**: the derivative of `f0*f1*...*fn` is the sum of n+1
//!    products, each with exactly one factor replaced by its derivative
//! 2. **Folding for free**: every result is built with the normalizing constructors, so
//!    constant derivatives collapse as soon as they appear
//! 3. **Parallel sampling**: trees own their data, so they are `Sync` and can be sampled
//!    from several rayon workers at once

use crate::symbolic::function_errors::FunctionError;
use crate::symbolic::function_tree::MathFunction;
use crate::symbolic::utils::{linspace, norm, numerical_derivative};
use log::debug;
use rayon::prelude::*;

impl MathFunction {
    /// DIFFERENTIATION

    /// Computes the exact derivative with respect to `x`.
    ///
    /// Rules:
    /// - constant: 0, variable: 1
    /// - sum: sum of the derivatives, constant derivatives folded into one trailing term
    /// - product: Σ_i f0 * ... * fi' * ... * fn
    /// - chain rule: sin(g)' = cos(g) * g', cos(g)' = -1 * sin(g) * g'
    ///
    /// # Examples
    /// ```
    /// use RustedFunctionTree::symbolic::function_tree::MathFunction;
    /// let f = MathFunction::product(vec![MathFunction::Var, MathFunction::Var]);
    /// assert_eq!(f.derivative().evaluate(3.0), 6.0);
    /// ```
    pub fn derivative(&self) -> MathFunction {
        match self {
            MathFunction::Const(_) => MathFunction::Const(0.0),
            MathFunction::Var => MathFunction::Const(1.0),
            MathFunction::Sum(terms) => {
                let mut folded = 0.0;
                let mut derivatives = Vec::with_capacity(terms.len() + 1);
                for term in terms {
                    let d_term = term.derivative();
                    if d_term.is_constant() {
                        folded += d_term.evaluate(0.0);
                    } else {
                        derivatives.push(d_term);
                    }
                }
                derivatives.push(MathFunction::Const(folded));
                MathFunction::sum(derivatives)
            }
            MathFunction::Product(factors) => match factors.len() {
                0 => MathFunction::Const(0.0),
                1 => factors[0].derivative(),
                n => {
                    let terms = (0..n)
                        .map(|i| {
                            let term = factors
                                .iter()
                                .enumerate()
                                .map(|(j, factor)| {
                                    if i == j {
                                        factor.derivative()
                                    } else {
                                        factor.clone()
                                    }
                                })
                                .collect();
                            MathFunction::product(term)
                        })
                        .collect();
                    MathFunction::sum(terms)
                }
            },
            MathFunction::sin(arg) => {
                MathFunction::product(vec![MathFunction::cos(arg.clone()), arg.derivative()])
            }
            MathFunction::cos(arg) => MathFunction::product(vec![
                MathFunction::Const(-1.0),
                MathFunction::sin(arg.clone()),
                arg.derivative(),
            ]),
        }
    } // end of derivative

    /// Computes the nth derivative (n = 0 gives a copy of the function).
    pub fn n_th_derivative(&self, n: usize) -> MathFunction {
        let mut function = self.clone();
        for _ in 0..n {
            function = function.derivative();
        }
        function
    }

    /// FUNCTION EVALUATION

    /// Turns the tree into a Rust closure of one argument.
    ///
    /// The closure owns a copy of the tree, so it can outlive `self`.
    pub fn lambdify1D(&self) -> Box<dyn Fn(f64) -> f64 + Send + Sync> {
        let function = self.clone();
        Box::new(move |x| function.evaluate(x))
    }

    /// Values of the function at `num_values` evenly spaced points in `[start, end]`.
    pub fn evaluate_on_linspace(&self, start: f64, end: f64, num_values: usize) -> Vec<f64> {
        linspace(start, end, num_values)
            .into_iter()
            .map(|x| self.evaluate(x))
            .collect()
    }

    /// Same as `evaluate_on_linspace`, sampled on the rayon thread pool.
    pub fn par_evaluate_on_linspace(&self, start: f64, end: f64, num_values: usize) -> Vec<f64> {
        linspace(start, end, num_values)
            .into_par_iter()
            .map(|x| self.evaluate(x))
            .collect()
    }

    /// NUMERICAL ANALYSIS

    /// Compares the symbolic derivative with a central finite difference.
    ///
    /// Both derivatives are sampled on a linspace of `num_values` points; the step of the
    /// finite difference is 1e-4 of the grid spacing.
    ///
    /// # Returns
    /// `(norm, norm < max_norm)` where norm is the scaled euclidean distance of the samples.
    ///
    /// # Errors
    /// `InvalidArgument` if fewer than two grid points are requested.
    pub fn compare_num1D(
        &self,
        start: f64,
        end: f64,
        num_values: usize,
        max_norm: f64,
    ) -> Result<(f64, bool), FunctionError> {
        if num_values < 2 {
            return Err(FunctionError::InvalidArgument(format!(
                "at least 2 grid points are needed to compare derivatives, got {}",
                num_values
            )));
        }
        let analytical_derivative = self
            .derivative()
            .evaluate_on_linspace(start, end, num_values);
        let step = (1.0 / 1e4) * (end - start) / (num_values as f64 - 1.0);
        let domain = linspace(start, end, num_values);
        let numerical_derivative = numerical_derivative(|x| self.evaluate(x), domain, step);
        let norm_val = norm(&analytical_derivative, &numerical_derivative);
        debug!(
            "derivative of {} checked on [{}, {}]: norm {}",
            self, start, end, norm_val
        );
        Ok((norm_val, norm_val < max_norm))
    }
}
