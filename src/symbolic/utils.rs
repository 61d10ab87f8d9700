// numerical helpers shared by the function tree: sampling grids, finite differences, norms

/// `num_values` evenly spaced points from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    match num_values {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num_values as f64 - 1.0);
            (0..num_values)
                .map(|i| {
                    if i == num_values - 1 {
                        end
                    } else {
                        start + (i as f64 * step)
                    }
                })
                .collect()
        }
    }
}

/*
    let x_values = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let h = 0.001;
    let derivatives = numerical_derivative(f, x_values, h);
*/
/// central difference (f(x+h) - f(x-h)) / 2h at every point
pub fn numerical_derivative<F>(f: F, x_values: Vec<f64>, h: f64) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    let mut derivatives = Vec::with_capacity(x_values.len());

    for &x in &x_values {
        let f_x_plus_h = f(x + h);
        let f_x_minus_h = f(x - h);
        let derivative = (f_x_plus_h - f_x_minus_h) / (2.0 * h);
        derivatives.push(derivative);
    }

    derivatives
}

/// Euclidean norm of the difference divided by the number of points; 0 for empty input.
pub fn norm(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len());
    if x.is_empty() {
        return 0.0;
    }
    (1.0 / x.len() as f64)
        * x.iter()
            .zip(y.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
}
