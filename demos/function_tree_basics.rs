//! Builds a few functions with the factory, prints them and their derivatives.
use RustedFunctionTree::Utils::logger::init_logger;
use RustedFunctionTree::symbolic::function_factory::FunctionFactory;
use simplelog::LevelFilter;

fn main() {
    if let Err(e) = init_logger(LevelFilter::Debug, true, None) {
        eprintln!("cannot set up logging: {}", e);
    }
    let factory = FunctionFactory::new();
    let x = factory.x();

    // 3x + 1 + sin(x) + 1
    let f = factory.sum(vec![
        factory.product(vec![factory.constant(3.0), x.clone()]),
        factory.constant(1.0),
        factory.sine(x.clone()),
        factory.constant(1.0),
    ]);
    println!("f = {}", f);
    println!("f(0) = {}", f.evaluate(0.0));
    println!("df/dx = {}", f.derivative());

    // sin(2x): the chain rule
    let g = factory.sine(factory.product(vec![factory.constant(2.0), x.clone()]));
    println!("g = {}, dg/dx = {}", g, g.derivative());

    // x^3: the product rule
    let h = factory.product(vec![x.clone(), x.clone(), x]);
    println!("h = {}, dh/dx = {}, dh/dx(2) = {}", h, h.derivative(), h.derivative().evaluate(2.0));

    // nothing depends on x
    let c = factory.sum(vec![factory.constant(2.0), factory.cosine(factory.constant(0.0))]);
    println!("c = {}, constant: {}", c, c.is_constant());
}
