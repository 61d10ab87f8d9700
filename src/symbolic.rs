///____________________________________________________________________________________________________________________________
/// # Function tree
/// a module
/// 1) builds real functions of one variable x as trees of constants, x, sums, products, sines and cosines
/// 2) keeps every sum and product folded: one trailing constant at most, zero-absorbing products
/// 3) turns a function into a string for printing and control results
///# Example#
/// ```
/// use RustedFunctionTree::symbolic::function_tree::MathFunction;
/// let f = MathFunction::sum(vec![
///     MathFunction::product(vec![MathFunction::Const(3.0), MathFunction::Var]),
///     MathFunction::Const(1.0),
///     MathFunction::sin(MathFunction::Var.boxed()),
///     MathFunction::Const(1.0),
/// ]);
/// println!("f = {}", f);
/// assert_eq!(f.to_string(), "( ( x * 3.0 ) + sin( x ) + 2.0 )");
/// assert_eq!(f.evaluate(0.0), 2.0);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod function_tree;
///________________________________________________________________________________________________________________________________________________
/// derivatives, closures and numerical checks of the derivatives
/// Example#
/// ```
/// use RustedFunctionTree::symbolic::function_tree::MathFunction;
/// let f = MathFunction::cos(MathFunction::product(vec![MathFunction::Var, MathFunction::Var]).boxed());
/// let df_dx = f.derivative();
/// println!("df_dx = {}", df_dx);
/// // compare numerical and analytical derivatives on a linspace
/// let (norm, res) = f.compare_num1D(0.0, 2.0, 100, 1e-6).unwrap();
/// println!("norm = {}, res = {}", norm, res);
/// assert!(res);
/// ```
pub mod function_tree_derivatives;
///________________________________________________________________________________________________________________________________________________
/// definite integrals: closed forms for constants and x, trapezoidal rule otherwise, plus Simpson and Gauss-Legendre
/// Example#
/// ```
/// use RustedFunctionTree::symbolic::function_tree::MathFunction;
/// let f = MathFunction::sin(MathFunction::Var.boxed());
/// let area = f.integral(0.0, std::f64::consts::PI, 10000).unwrap();
/// assert!((area - 2.0).abs() < 1e-6);
/// assert!(f.integral(0.0, 1.0, 0).is_err());
/// ```
pub mod function_tree_integration;
/// the construction surface: constants, the shared x, folded sums and products, sine, cosine
pub mod function_factory;
/// error type of the crate
pub mod function_errors;
///______________________________________________________________________________________________________________________________________________
/// linspace, finite differences, norms
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;

mod function_tree_tests;
