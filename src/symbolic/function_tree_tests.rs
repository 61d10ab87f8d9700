//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use crate::symbolic::function_factory::FunctionFactory;
    use crate::symbolic::function_tree::{FunctionKind, MathFunction, ProductTerms, SumTerms};
    use std::any::TypeId;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn samples() -> Vec<f64> {
        vec![-3.0, -1.5, -0.2, 0.0, 0.4, 1.0, 2.0, 5.5]
    }

    //___________________________________NORMALIZATION____________________________________

    #[test]
    fn test_sum_folds_constants_into_trailing_term() {
        let f = MathFunction::sum(vec![
            MathFunction::Const(1.0),
            MathFunction::Var,
            MathFunction::Const(2.5),
            MathFunction::cos(MathFunction::Var.boxed()),
        ]);
        assert_eq!(f.num_children(), 3);
        assert_eq!(f.children()[2], MathFunction::Const(3.5));
        assert_eq!(f.to_string(), "( x + cos( x ) + 3.5 )");
    }

    #[test]
    fn test_sum_drops_zero_constant() {
        let f = MathFunction::sum(vec![
            MathFunction::Const(2.0),
            MathFunction::Var,
            MathFunction::Const(-2.0),
        ]);
        assert_eq!(f.num_children(), 1);
        assert_eq!(f.to_string(), "x");
    }

    #[test]
    fn test_product_folds_constants_into_trailing_factor() {
        let f = MathFunction::product(vec![
            MathFunction::Const(2.0),
            MathFunction::Var,
            MathFunction::Const(3.0),
        ]);
        assert_eq!(f.to_string(), "( x * 6.0 )");
        assert_eq!(f.evaluate(2.0), 12.0);
    }

    #[test]
    fn test_product_drops_unit_constant() {
        let f = MathFunction::product(vec![
            MathFunction::Const(0.5),
            MathFunction::Var,
            MathFunction::Const(2.0),
        ]);
        assert_eq!(f.children(), &[MathFunction::Var]);
        assert_eq!(f.to_string(), "x");
    }

    #[test]
    fn test_zero_absorption() {
        let factory = FunctionFactory::new();
        let f = MathFunction::product(vec![
            factory.constant(0.0),
            factory.x(),
            factory.sine(factory.x()),
        ]);
        assert_eq!(f.evaluate(5.0), 0.0);
        assert_eq!(f.children(), &[MathFunction::Const(0.0)]);
        assert!(f.is_constant());
        assert_eq!(f.to_string(), "0.0");

        let collapsed = factory.product(vec![factory.constant(0.0), factory.x(), factory.sine(factory.x())]);
        assert_eq!(collapsed, MathFunction::Const(0.0));
    }

    #[test]
    fn test_zero_from_constant_subtree_is_absorbed() {
        // sin(0) is a constant factor equal to 0
        let f = MathFunction::product(vec![
            MathFunction::Var,
            MathFunction::sin(MathFunction::Const(0.0).boxed()),
        ]);
        assert_eq!(f.children(), &[MathFunction::Const(0.0)]);
    }

    #[test]
    fn test_zero_factor_absorbs_infinite_constant() {
        let f = MathFunction::product(vec![
            MathFunction::Const(0.0),
            MathFunction::Var,
            MathFunction::Const(f64::INFINITY),
        ]);
        assert_eq!(f.children(), &[MathFunction::Const(0.0)]);
        assert_eq!(f.to_string(), "0.0");
        let factory = FunctionFactory::new();
        let g = factory.product(vec![factory.constant(f64::NAN), factory.x(), factory.constant(0.0)]);
        assert_eq!(g, MathFunction::Const(0.0));
    }

    #[test]
    fn test_terms_of_sum_and_product_are_distinct_types() {
        assert_ne!(TypeId::of::<SumTerms>(), TypeId::of::<ProductTerms>());

        // moving children across kinds goes through the constructors and is folded again
        let MathFunction::Sum(terms) = MathFunction::sum(vec![MathFunction::Var, MathFunction::Const(1.0)])
        else {
            panic!("expected a sum");
        };
        let product = MathFunction::product(terms.into_vec());
        assert_eq!(product.children(), &[MathFunction::Var]);
        assert_eq!(product.to_string(), "x");

        let MathFunction::Product(factors) =
            MathFunction::product(vec![MathFunction::Var, MathFunction::Const(0.0)])
        else {
            panic!("expected a product");
        };
        let sum = MathFunction::sum(factors.into_vec());
        assert_eq!(sum.num_children(), 0);
        assert_eq!(sum.to_string(), "0.0");
    }

    #[test]
    fn test_at_most_one_constant_child() {
        let f = MathFunction::sum(vec![
            MathFunction::Const(1.0),
            MathFunction::product(vec![MathFunction::Const(2.0), MathFunction::Const(3.0)]),
            MathFunction::Var,
            MathFunction::cos(MathFunction::Const(0.0).boxed()),
        ]);
        let constants = f.children().iter().filter(|c| c.is_constant()).count();
        assert_eq!(constants, 1);
        assert_eq!(f.children().last(), Some(&MathFunction::Const(8.0)));
    }

    #[test]
    fn test_single_child_collapse() {
        let sum = MathFunction::sum(vec![MathFunction::Var]);
        assert_eq!(sum.to_string(), "x");
        assert_eq!(sum.kind(), FunctionKind::Sum);
        let product = MathFunction::product(vec![MathFunction::sin(MathFunction::Var.boxed())]);
        assert_eq!(product.to_string(), "sin( x )");
        assert_eq!(product.kind(), FunctionKind::Product);
    }

    #[test]
    fn test_empty_nodes_render_identity() {
        let sum = MathFunction::sum(vec![MathFunction::Const(0.0)]);
        assert_eq!(sum.num_children(), 0);
        assert_eq!(sum.to_string(), "0.0");
        assert_eq!(sum.evaluate(3.0), 0.0);
        let product = MathFunction::product(vec![]);
        assert_eq!(product.to_string(), "1.0");
        assert_eq!(product.evaluate(3.0), 1.0);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let f = MathFunction::sum(vec![
            MathFunction::Const(4.0),
            MathFunction::product(vec![MathFunction::Var, MathFunction::Const(3.0)]),
            MathFunction::sin(MathFunction::Var.boxed()),
            MathFunction::Const(-1.0),
        ]);
        let MathFunction::Sum(terms) = f.clone() else {
            panic!("expected a sum, got {:?}", f);
        };
        let again = MathFunction::sum(terms.into_vec());
        assert_eq!(again, f);
        assert_eq!(again.to_string(), f.to_string());
        for x in samples() {
            assert_eq!(again.evaluate(x), f.evaluate(x));
        }

        let g = MathFunction::product(vec![MathFunction::Const(2.0), MathFunction::Var, MathFunction::Var]);
        let again = MathFunction::product(g.children().to_vec());
        assert_eq!(again, g);
    }

    //___________________________________CONSTANTS____________________________________

    #[test]
    fn test_constant_rendering() {
        assert_eq!(MathFunction::Const(5.0).to_string(), "5.0");
        assert_eq!(MathFunction::Const(-1.0).to_string(), "-1.0");
        assert_eq!(MathFunction::Const(0.25).to_string(), "0.25");
    }

    #[test]
    fn test_is_constant_classification() {
        assert!(MathFunction::Const(1.0).is_constant());
        assert!(!MathFunction::Var.is_constant());
        assert!(!MathFunction::sum(vec![MathFunction::Var, MathFunction::Const(1.0)]).is_constant());
        assert!(!MathFunction::cos(MathFunction::Var.boxed()).is_constant());
        assert!(MathFunction::cos(MathFunction::Const(1.0).boxed()).is_constant());
    }

    #[test]
    fn test_constant_only_tree_is_independent_of_x() {
        let factory = FunctionFactory::new();
        let f = MathFunction::sum(vec![
            factory.sine(factory.constant(1.0)),
            MathFunction::product(vec![
                factory.cosine(factory.constant(2.0)),
                factory.constant(3.0),
            ]),
            factory.constant(0.5),
        ]);
        assert!(f.is_constant());
        let value = f.evaluate(0.0);
        for x in samples() {
            assert_eq!(f.evaluate(x), value);
        }
        assert_relative_eq!(value, 1.0f64.sin() + 3.0 * 2.0f64.cos() + 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_trig_of_constant_renders_value() {
        let f = MathFunction::sin(MathFunction::Const(0.0).boxed());
        assert_eq!(f.to_string(), "0.0");
        let g = MathFunction::cos(MathFunction::Const(0.0).boxed());
        assert_eq!(g.to_string(), "1.0");
        let h = MathFunction::sin(MathFunction::Var.boxed());
        assert_eq!(h.to_string(), "sin( x )");
    }

    //___________________________________EVALUATION____________________________________

    #[test]
    fn test_sum_and_product_evaluate_pointwise() {
        let a = MathFunction::sin(MathFunction::Var.boxed());
        let b = MathFunction::sum(vec![MathFunction::Var, MathFunction::Const(2.0)]);
        let sum = MathFunction::sum(vec![a.clone(), b.clone()]);
        let product = MathFunction::product(vec![a.clone(), b.clone()]);
        for x in samples() {
            assert_relative_eq!(sum.evaluate(x), a.evaluate(x) + b.evaluate(x), epsilon = 1e-12);
            assert_relative_eq!(product.evaluate(x), a.evaluate(x) * b.evaluate(x), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_nested_rendering() {
        let factory = FunctionFactory::new();
        let f = factory.sum(vec![
            factory.product(vec![factory.x(), factory.cosine(factory.x())]),
            factory.sine(factory.sum(vec![factory.x(), factory.constant(1.0)])),
            factory.constant(-2.0),
        ]);
        assert_eq!(f.to_string(), "( ( x * cos( x ) ) + sin( ( x + 1.0 ) ) + -2.0 )");
    }

    #[test]
    fn test_operators_build_normalized_nodes() {
        let x = MathFunction::Var;
        let f = x.clone() * MathFunction::Const(2.0) + MathFunction::Const(1.0);
        assert_eq!(f.to_string(), "( ( x * 2.0 ) + 1.0 )");
        let g = -x.clone();
        assert_eq!(g.evaluate(3.0), -3.0);
        let h = x.clone() - MathFunction::from(4.0);
        assert_eq!(h.evaluate(1.0), -3.0);
        assert_eq!(h.to_string(), "( x + -4.0 )");
    }

    //___________________________________DERIVATIVES____________________________________

    #[test]
    fn test_chain_rule_sine_of_product() {
        let factory = FunctionFactory::new();
        let f = factory.sine(factory.product(vec![factory.constant(2.0), factory.x()]));
        let df = f.derivative();
        assert_relative_eq!(df.evaluate(1.0), 2.0 * 2.0f64.cos(), epsilon = 1e-4);
        assert_eq!(df.to_string(), "( cos( ( x * 2.0 ) ) * 2.0 )");
    }

    #[test]
    fn test_n_ary_product_rule() {
        let x = MathFunction::Var;
        let f = MathFunction::product(vec![x.clone(), x.clone(), x]);
        assert_relative_eq!(f.derivative().evaluate(2.0), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_derivatives_match_finite_differences() {
        let factory = FunctionFactory::new();
        let functions = vec![
            factory.cosine(factory.product(vec![factory.x(), factory.x()])),
            factory.product(vec![
                factory.sine(factory.x()),
                factory.cosine(factory.x()),
                factory.sum(vec![factory.x(), factory.constant(3.0)]),
            ]),
            factory.sine(factory.cosine(factory.sine(factory.x()))),
            factory.sum(vec![
                factory.product(vec![factory.constant(-0.5), factory.x(), factory.x()]),
                factory.cosine(factory.x()),
            ]),
        ];
        let h = 1e-6;
        for f in functions {
            let df = f.derivative();
            for x in samples() {
                let numeric = (f.evaluate(x + h) - f.evaluate(x - h)) / (2.0 * h);
                assert!(
                    (df.evaluate(x) - numeric).abs() < 1e-4,
                    "d/dx {} at {}: {} vs {}",
                    f,
                    x,
                    df.evaluate(x),
                    numeric
                );
            }
        }
    }

    #[test]
    fn test_derivative_leaves_input_untouched() {
        let f = MathFunction::product(vec![MathFunction::Var, MathFunction::sin(MathFunction::Var.boxed())]);
        let before = f.clone();
        let _ = f.derivative();
        assert_eq!(f, before);
    }

    #[test]
    fn test_derivative_of_constant_tree_is_zero() {
        let f = MathFunction::sin(MathFunction::Const(2.0).boxed());
        let df = f.derivative();
        assert!(df.is_constant());
        assert_eq!(df.evaluate(1.0), 0.0);
    }

    //___________________________________INTEGRALS____________________________________

    #[test]
    fn test_variable_integral() {
        assert_relative_eq!(MathFunction::Var.integral(0.0, 1.0, 1000).unwrap(), 0.5, epsilon = 1e-3);
    }

    #[test]
    fn test_integral_of_derivative_recovers_difference() {
        let f = MathFunction::product(vec![
            MathFunction::Var,
            MathFunction::sin(MathFunction::Var.boxed()),
        ]);
        let df = f.derivative();
        let integral = df.integral(0.0, 2.0, 20000).unwrap();
        assert_relative_eq!(integral, f.evaluate(2.0) - f.evaluate(0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_sine_integral_over_half_period() {
        let factory = FunctionFactory::new();
        let f = factory.sine(factory.x());
        assert_relative_eq!(f.integral(0.0, PI, 10000).unwrap(), 2.0, epsilon = 1e-6);
    }
}
