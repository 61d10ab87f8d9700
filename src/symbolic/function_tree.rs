//! # Function Tree Module
//!
//! This module holds the core of the crate: real functions of one variable `x`
//! represented as a tree of nodes. Every node can be evaluated, differentiated,
//! integrated and rendered as text.
//!
//! ## Purpose
//!
//! The function tree allows users to:
//! - Build expressions bottom-up from constants, the variable `x`, sums, products,
//!   sines and cosines
//! - Keep every sum and product in a canonical form: constants are folded into a single
//!   trailing constant at construction time
//! - Evaluate the tree for any `x`, differentiate it symbolically and integrate it
//!   (see `function_tree_derivatives` and `function_tree_integration`)
//!
//! ## Main Structures and Methods
//!
//! ### `MathFunction` Enum
//! - **Leaves**: `Const(f64)` and `Var` (the independent variable)
//! - **n-ary nodes**: `Sum(SumTerms)`, `Product(ProductTerms)`
//! - **Unary nodes**: `sin(Box<MathFunction>)`, `cos(Box<MathFunction>)`
//!
//! ### `Terms`
//! Frozen child list of a sum or product. It can only be created by the normalizing
//! constructors `MathFunction::sum` and `MathFunction::product`, and its kind marker keeps
//! the terms of a sum from being rewrapped as a product (or the other way round), so a `Sum`
//! or `Product` value always satisfies the folding rules:
//! - at most one constant child, always the last one
//! - the constant is dropped when it equals 0 (sum) or 1 (product)
//! - a product whose constants multiply to 0 has exactly one child, `Const(0)`
//!
//! ## Interesting Code Features
//!
//! 1. **Construct-then-freeze**: constructors take the child vector by value, fold it and
//!    wrap it in `Terms`; nothing mutates a node afterwards
//! 2. **Single-child collapse**: a sum or product with one child prints as that child
//! 3. **Operator Overloading**: `+`, `-`, `*` and unary `-` go through the normalizing
//!    constructors, so `x * 2.0 * 3.0`-like chains still fold their constants

#![allow(non_camel_case_types)]

use itertools::Itertools;
use log::trace;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;
use strum_macros::{Display, EnumIter};

/// The six kinds of nodes a function tree is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum FunctionKind {
    Constant,
    Variable,
    Sum,
    Product,
    Sine,
    Cosine,
}

impl FunctionKind {
    /// true for kinds that take exactly one argument function
    pub fn is_unary(&self) -> bool {
        matches!(self, FunctionKind::Sine | FunctionKind::Cosine)
    }

    /// true for kinds with any number of children
    pub fn is_n_ary(&self) -> bool {
        matches!(self, FunctionKind::Sum | FunctionKind::Product)
    }
}

/// Marks the children of a `Sum`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Addends {}

/// Marks the children of a `Product`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Factors {}

/// Normalized children of a `Sum` (`Terms<Addends>`) or a `Product` (`Terms<Factors>`).
///
/// The marker makes the children of a sum a different type from the children of a product,
/// so the folded terms of one cannot be rewrapped as the other:
/// ```compile_fail
/// use RustedFunctionTree::symbolic::function_tree::MathFunction;
/// if let MathFunction::Sum(terms) = MathFunction::sum(vec![MathFunction::Var, MathFunction::Const(1.0)]) {
///     let _ = MathFunction::Product(terms);
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Terms<K> {
    children: Vec<MathFunction>,
    kind: PhantomData<K>,
}

pub type SumTerms = Terms<Addends>;
pub type ProductTerms = Terms<Factors>;

impl<K> Terms<K> {
    fn folded(children: Vec<MathFunction>) -> Self {
        Terms {
            children,
            kind: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// child number `c`, if there is one
    pub fn get(&self, c: usize) -> Option<&MathFunction> {
        self.children.get(c)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MathFunction> {
        self.children.iter()
    }

    pub fn as_slice(&self) -> &[MathFunction] {
        &self.children
    }

    /// Gives the children back, e.g. to build a new node from them.
    pub fn into_vec(self) -> Vec<MathFunction> {
        self.children
    }
}

impl<K> Index<usize> for Terms<K> {
    type Output = MathFunction;

    fn index(&self, c: usize) -> &MathFunction {
        &self.children[c]
    }
}

impl<'a, K> IntoIterator for &'a Terms<K> {
    type Item = &'a MathFunction;
    type IntoIter = std::slice::Iter<'a, MathFunction>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

/// A real function of the single variable `x`, stored as a tree.
///
/// Sums and products are created with [`MathFunction::sum`] and [`MathFunction::product`]
/// (or through [`crate::symbolic::function_factory::FunctionFactory`]), which fold constants.
///
/// # Examples
/// ```
/// use RustedFunctionTree::symbolic::function_tree::MathFunction;
/// let f = MathFunction::sum(vec![MathFunction::Var, MathFunction::Const(2.0), MathFunction::Const(3.0)]);
/// assert_eq!(f.to_string(), "( x + 5.0 )");
/// assert_eq!(f.evaluate(1.0), 6.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum MathFunction {
    /// Numerical constant value
    Const(f64),
    /// The independent variable x
    Var,
    /// n-ary addition
    Sum(SumTerms),
    /// n-ary multiplication
    Product(ProductTerms),
    /// Sine of the argument function: sin(g(x))
    sin(Box<MathFunction>),
    /// Cosine of the argument function: cos(g(x))
    cos(Box<MathFunction>),
}

impl MathFunction {
    /// NORMALIZING CONSTRUCTORS

    /// Builds a sum and folds its constant children.
    ///
    /// Constant children are added up into one value `c`; non-constant children keep their
    /// relative order and `Const(c)` is appended at the end unless `c == 0`.
    pub fn sum(children: Vec<MathFunction>) -> MathFunction {
        let (constants, mut terms): (Vec<MathFunction>, Vec<MathFunction>) =
            children.into_iter().partition(|term| term.is_constant());
        let folded: f64 = constants.iter().map(|term| term.evaluate(0.0)).sum();
        if folded != 0.0 {
            terms.push(MathFunction::Const(folded));
        }
        trace!(
            "sum normalized: {} constant(s) folded into {}, {} term(s) left",
            constants.len(),
            folded,
            terms.len()
        );
        MathFunction::Sum(Terms::folded(terms))
    }

    /// Builds a product and folds its constant factors.
    ///
    /// Constant factors are multiplied into one value `c`. If `c == 0`, or any constant
    /// factor is 0, the whole product is absorbed into the single factor `Const(0)`;
    /// otherwise `Const(c)` is appended after the non-constant factors unless `c == 1`.
    pub fn product(children: Vec<MathFunction>) -> MathFunction {
        let (constants, mut factors): (Vec<MathFunction>, Vec<MathFunction>) =
            children.into_iter().partition(|factor| factor.is_constant());
        let values: Vec<f64> = constants.iter().map(|factor| factor.evaluate(0.0)).collect();
        let folded: f64 = values.iter().product();
        // a zero factor absorbs even when another constant is infinite
        if folded == 0.0 || values.contains(&0.0) {
            trace!("product absorbed by zero, {} factor(s) dropped", factors.len());
            return MathFunction::Product(Terms::folded(vec![MathFunction::Const(0.0)]));
        }
        if folded != 1.0 {
            factors.push(MathFunction::Const(folded));
        }
        trace!(
            "product normalized: {} constant(s) folded into {}, {} factor(s) left",
            constants.len(),
            folded,
            factors.len()
        );
        MathFunction::Product(Terms::folded(factors))
    }

    /// BASIC FEATURES

    /// Value of the function at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            MathFunction::Const(val) => *val,
            MathFunction::Var => x,
            MathFunction::Sum(terms) => terms.iter().map(|term| term.evaluate(x)).sum(),
            MathFunction::Product(factors) => {
                factors.iter().map(|factor| factor.evaluate(x)).product()
            }
            MathFunction::sin(arg) => arg.evaluate(x).sin(),
            MathFunction::cos(arg) => arg.evaluate(x).cos(),
        }
    }

    /// Does the function evaluate to the same value for every `x`?
    ///
    /// A composite node is constant iff all of its children are.
    pub fn is_constant(&self) -> bool {
        match self {
            MathFunction::Const(_) => true,
            MathFunction::Var => false,
            MathFunction::Sum(terms) => terms.iter().all(|term| term.is_constant()),
            MathFunction::Product(factors) => factors.iter().all(|factor| factor.is_constant()),
            MathFunction::sin(arg) | MathFunction::cos(arg) => arg.is_constant(),
        }
    }

    pub fn kind(&self) -> FunctionKind {
        match self {
            MathFunction::Const(_) => FunctionKind::Constant,
            MathFunction::Var => FunctionKind::Variable,
            MathFunction::Sum(_) => FunctionKind::Sum,
            MathFunction::Product(_) => FunctionKind::Product,
            MathFunction::sin(_) => FunctionKind::Sine,
            MathFunction::cos(_) => FunctionKind::Cosine,
        }
    }

    /// Child functions of this node: none for leaves, one for sine and cosine.
    pub fn children(&self) -> &[MathFunction] {
        match self {
            MathFunction::Const(_) | MathFunction::Var => &[],
            MathFunction::Sum(terms) => terms.as_slice(),
            MathFunction::Product(factors) => factors.as_slice(),
            MathFunction::sin(arg) | MathFunction::cos(arg) => std::slice::from_ref(&**arg),
        }
    }

    pub fn num_children(&self) -> usize {
        self.children().len()
    }

    /// Checks if the function is exactly the constant 0.
    pub fn is_zero(&self) -> bool {
        matches!(self, MathFunction::Const(val) if *val == 0.0)
    }

    /// Convenience method to wrap the function in a Box, e.g. `MathFunction::sin(f.boxed())`.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }
}

/// Renders a sum or product: the identity when empty, the child alone when there is one,
/// `( t0 op t1 op ... )` otherwise.
fn fmt_terms<K>(f: &mut fmt::Formatter, terms: &Terms<K>, op: &str, identity: f64) -> fmt::Result {
    match terms.len() {
        0 => write!(f, "{}", MathFunction::Const(identity)),
        1 => write!(f, "{}", terms[0]),
        _ => write!(f, "( {} )", terms.iter().join(op)),
    }
}

/// Canonical infix rendering.
///
/// Constants use the round-trip float format (`5.0`, `0.25`, `-1.0`), sine and cosine of
/// a constant argument are printed as their computed value.
impl fmt::Display for MathFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MathFunction::Const(val) => write!(f, "{:?}", val),
            MathFunction::Var => write!(f, "x"),
            MathFunction::Sum(terms) => fmt_terms(f, terms, " + ", 0.0),
            MathFunction::Product(factors) => fmt_terms(f, factors, " * ", 1.0),
            MathFunction::sin(arg) if arg.is_constant() => {
                write!(f, "{}", MathFunction::Const(arg.evaluate(0.0).sin()))
            }
            MathFunction::sin(arg) => write!(f, "sin( {} )", arg),
            MathFunction::cos(arg) if arg.is_constant() => {
                write!(f, "{}", MathFunction::Const(arg.evaluate(0.0).cos()))
            }
            MathFunction::cos(arg) => write!(f, "cos( {} )", arg),
        }
    }
}

impl std::ops::Add for MathFunction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        MathFunction::sum(vec![self, rhs])
    }
}

impl std::ops::Sub for MathFunction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        MathFunction::sum(vec![self, -rhs])
    }
}

impl std::ops::Mul for MathFunction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        MathFunction::product(vec![self, rhs])
    }
}

impl std::ops::Neg for MathFunction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        MathFunction::product(vec![MathFunction::Const(-1.0), self])
    }
}

impl From<f64> for MathFunction {
    fn from(val: f64) -> Self {
        MathFunction::Const(val)
    }
}
