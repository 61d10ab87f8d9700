use crate::symbolic::function_errors::FunctionError;
use crate::symbolic::function_tree::MathFunction;
use gauss_quad::GaussLegendre;
use log::{debug, warn};

impl MathFunction {
    /// Definite integral over `[lower, upper]`.
    ///
    /// Closed forms are used for constants (`value * (upper - lower)`) and for the variable
    /// (`(upper² - lower²) / 2`); a sum is integrated term by term and a single-factor
    /// product through its factor. Everything else falls back to the composite trapezoidal
    /// rule with `accuracy` subintervals.
    ///
    /// `upper < lower` is allowed and gives the negated integral over `[upper, lower]`.
    ///
    /// # Errors
    /// `InvalidArgument` when the quadrature fallback is reached with `accuracy == 0` or with
    /// non-finite bounds.
    pub fn integral(&self, lower: f64, upper: f64, accuracy: u32) -> Result<f64, FunctionError> {
        match self {
            MathFunction::Const(val) => Ok(val * (upper - lower)),
            MathFunction::Var => Ok((upper * upper - lower * lower) / 2.0),
            MathFunction::Sum(terms) => terms
                .iter()
                .map(|term| term.integral(lower, upper, accuracy))
                .sum(),
            MathFunction::Product(factors) if factors.len() == 1 => {
                factors[0].integral(lower, upper, accuracy)
            }
            MathFunction::Product(_) | MathFunction::sin(_) | MathFunction::cos(_) => {
                self.trapezoid(lower, upper, accuracy)
            }
        }
    }

    /// Composite trapezoidal rule: `h/2 * (f(x0) + 2 f(x1) + ... + 2 f(xn-1) + f(xn))`
    /// with `h = (upper - lower) / accuracy` and `xk = lower + k h`.
    pub fn trapezoid(&self, lower: f64, upper: f64, accuracy: u32) -> Result<f64, FunctionError> {
        check_quadrature_args(lower, upper, accuracy)?;
        let h = (upper - lower) / accuracy as f64;
        let interior: f64 = (1..accuracy)
            .map(|k| self.evaluate(lower + k as f64 * h))
            .sum();
        let total = self.evaluate(lower) + 2.0 * interior + self.evaluate(upper);
        debug!(
            "trapezoid rule for {} on [{}, {}] with {} subintervals",
            self, lower, upper, accuracy
        );
        Ok(total * h / 2.0)
    }

    /// Composite Simpson rule; `accuracy` must be even.
    pub fn simpson(&self, lower: f64, upper: f64, accuracy: u32) -> Result<f64, FunctionError> {
        check_quadrature_args(lower, upper, accuracy)?;
        if accuracy % 2 != 0 {
            warn!("Simpson rule called with odd number of subintervals {}", accuracy);
            return Err(FunctionError::InvalidArgument(format!(
                "Simpson rule needs an even number of subintervals, got {}",
                accuracy
            )));
        }
        let h = (upper - lower) / accuracy as f64;
        let mut sum = self.evaluate(lower) + self.evaluate(upper);
        for k in 1..accuracy {
            let x = lower + k as f64 * h;
            if k % 2 == 0 {
                sum += 2.0 * self.evaluate(x);
            } else {
                sum += 4.0 * self.evaluate(x);
            }
        }
        Ok(sum * h / 3.0)
    }

    /// Gauss-Legendre quadrature of the given degree on a finite interval.
    pub fn quad_gauss_legendre(
        &self,
        lower: f64,
        upper: f64,
        degree: usize,
    ) -> Result<f64, FunctionError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(FunctionError::InvalidArgument(
                "Gauss-Legendre quadrature is for finite intervals".to_string(),
            ));
        }
        let quad = GaussLegendre::new(degree).map_err(|e| {
            FunctionError::InvalidArgument(format!(
                "Failed to create Gauss-Legendre quadrature: {:?}",
                e
            ))
        })?;
        Ok(quad.integrate(lower, upper, |x| self.evaluate(x)))
    }
}

fn check_quadrature_args(lower: f64, upper: f64, accuracy: u32) -> Result<(), FunctionError> {
    if accuracy == 0 {
        warn!("quadrature requested with 0 subintervals");
        return Err(FunctionError::InvalidArgument(
            "number of subintervals must be at least 1".to_string(),
        ));
    }
    if !lower.is_finite() || !upper.is_finite() {
        warn!("quadrature requested on [{}, {}]", lower, upper);
        return Err(FunctionError::InvalidArgument(format!(
            "integration bounds must be finite, got [{}, {}]",
            lower, upper
        )));
    }
    Ok(())
}
