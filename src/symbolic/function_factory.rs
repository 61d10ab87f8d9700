//! Construction surface for function trees.
//!
//! Many of these factory methods check whether what they have built is actually a constant,
//! a function with no reference to x. In that case the function is evaluated and the value
//! is returned as a `Const`.
//!
//! # Example
//! ```
//! use RustedFunctionTree::symbolic::function_factory::FunctionFactory;
//! let factory = FunctionFactory::new();
//! let f = factory.sine(factory.product(vec![factory.constant(2.0), factory.x()]));
//! assert_eq!(f.to_string(), "sin( ( x * 2.0 ) )");
//! assert_eq!(factory.sum(vec![factory.constant(2.0), factory.constant(3.0)]).to_string(), "5.0");
//! ```

use crate::symbolic::function_errors::FunctionError;
use crate::symbolic::function_tree::{FunctionKind, MathFunction};
use log::debug;

/// Hands out normalized functions; owns the one instance of the variable `x`.
#[derive(Clone, Debug)]
pub struct FunctionFactory {
    variable: MathFunction,
}

impl Default for FunctionFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionFactory {
    pub fn new() -> Self {
        FunctionFactory {
            variable: MathFunction::Var,
        }
    }

    pub fn constant(&self, value: f64) -> MathFunction {
        MathFunction::Const(value)
    }

    /// The independent variable of all functions.
    pub fn x(&self) -> MathFunction {
        self.variable.clone()
    }

    /// Sum of the given terms, or the constant it equals if no term depends on x.
    /// With no terms at all this is `Const(0.0)`.
    pub fn sum(&self, terms: Vec<MathFunction>) -> MathFunction {
        let sum = MathFunction::sum(terms);
        if sum.is_constant() {
            return MathFunction::Const(sum.evaluate(0.0));
        }
        sum
    }

    /// Product of the given factors, or the constant it equals if no factor depends on x.
    /// With no factors at all this is `Const(1.0)`.
    pub fn product(&self, factors: Vec<MathFunction>) -> MathFunction {
        let product = MathFunction::product(factors);
        if product.is_constant() {
            return MathFunction::Const(product.evaluate(0.0));
        }
        product
    }

    pub fn sine(&self, arg: MathFunction) -> MathFunction {
        MathFunction::sin(arg.boxed())
    }

    pub fn cosine(&self, arg: MathFunction) -> MathFunction {
        MathFunction::cos(arg.boxed())
    }

    /// Builds a node of the given kind from a list of argument functions.
    ///
    /// Meant for front ends that carry the node kind as data. Arity rules:
    /// - `Variable`: no arguments
    /// - `Constant`: one constant argument, folded to its value
    /// - `Sine`, `Cosine`: exactly one argument
    /// - `Sum`, `Product`: any number of arguments
    ///
    /// # Errors
    /// `InvalidArgument` when the arguments do not fit the kind.
    pub fn build(
        &self,
        kind: FunctionKind,
        args: Vec<MathFunction>,
    ) -> Result<MathFunction, FunctionError> {
        debug!("building {} from {} argument(s)", kind, args.len());
        match kind {
            FunctionKind::Sum => Ok(self.sum(args)),
            FunctionKind::Product => Ok(self.product(args)),
            FunctionKind::Variable if args.is_empty() => Ok(self.x()),
            FunctionKind::Variable => Err(FunctionError::InvalidArgument(format!(
                "{} takes no arguments, got {}",
                kind,
                args.len()
            ))),
            FunctionKind::Constant | FunctionKind::Sine | FunctionKind::Cosine => {
                let [arg] = <[MathFunction; 1]>::try_from(args).map_err(|args| {
                    FunctionError::InvalidArgument(format!(
                        "{} takes exactly one argument, got {}",
                        kind,
                        args.len()
                    ))
                })?;
                match kind {
                    FunctionKind::Sine => Ok(self.sine(arg)),
                    FunctionKind::Cosine => Ok(self.cosine(arg)),
                    _ if arg.is_constant() => Ok(self.constant(arg.evaluate(0.0))),
                    _ => Err(FunctionError::InvalidArgument(format!(
                        "{} argument depends on x: {}",
                        kind, arg
                    ))),
                }
            }
        }
    }
}
