use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum QuadratureError {
    InvalidInterval,
    ZeroSubdivisions,
    OddSubdivisions(usize),
}

impl fmt::Display for QuadratureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuadratureError::InvalidInterval => write!(f, "Invalid integration interval"),
            QuadratureError::ZeroSubdivisions => {
                write!(f, "Subdivision count must be at least 1")
            }
            QuadratureError::OddSubdivisions(n) => {
                write!(f, "Simpson's rule requires an even subdivision count, got {}", n)
            }
        }
    }
}

impl Error for QuadratureError {}

pub type QuadratureResult<T> = std::result::Result<T, QuadratureError>;

/// Composite midpoint rule over n equal subdivisions of [a, b]
pub fn midpoint_rule<F>(func: F, a: f64, b: f64, n: usize) -> QuadratureResult<f64>
where
    F: Fn(f64) -> f64,
{
    if a >= b {
        return Err(QuadratureError::InvalidInterval);
    }
    if n == 0 {
        return Err(QuadratureError::ZeroSubdivisions);
    }

    let h = (b - a) / n as f64;
    let mut sum = 0.0;

    for i in 0..n {
        sum += func(a + (i as f64 + 0.5) * h);
    }

    Ok(h * sum)
}

/// Composite trapezium rule: endpoints weighted 1/2, interior points weighted 1
pub fn trapezium_rule<F>(func: F, a: f64, b: f64, n: usize) -> QuadratureResult<f64>
where
    F: Fn(f64) -> f64,
{
    if a >= b {
        return Err(QuadratureError::InvalidInterval);
    }
    if n == 0 {
        return Err(QuadratureError::ZeroSubdivisions);
    }

    let h = (b - a) / n as f64;
    let mut sum = 0.5 * (func(a) + func(b));

    for i in 1..n {
        sum += func(a + i as f64 * h);
    }

    Ok(h * sum)
}

/// Composite Simpson's 1/3 rule; n must be even
pub fn simpsons_rule<F>(func: F, a: f64, b: f64, n: usize) -> QuadratureResult<f64>
where
    F: Fn(f64) -> f64,
{
    if a >= b {
        return Err(QuadratureError::InvalidInterval);
    }
    if n == 0 {
        return Err(QuadratureError::ZeroSubdivisions);
    }
    if n % 2 != 0 {
        return Err(QuadratureError::OddSubdivisions(n));
    }

    let h = (b - a) / n as f64;
    let mut sum = func(a) + func(b);

    // Even-indexed interior points carry weight 2
    for i in (2..n).step_by(2) {
        sum += 2.0 * func(a + i as f64 * h);
    }

    // Odd-indexed interior points carry weight 4
    for i in (1..n).step_by(2) {
        sum += 4.0 * func(a + i as f64 * h);
    }

    Ok(h / 3.0 * sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // Test functions
    fn constant_fn(_x: f64) -> f64 {
        2.0
    }

    fn linear_fn(x: f64) -> f64 {
        x
    }

    fn quadratic_fn(x: f64) -> f64 {
        x * x
    }

    fn sine_fn(x: f64) -> f64 {
        x.sin()
    }

    #[test]
    fn test_midpoint_constant() {
        let result = midpoint_rule(constant_fn, 0.0, 1.0, 1).unwrap();
        assert_abs_diff_eq!(result, 2.0, epsilon = 1e-15);

        let result = midpoint_rule(constant_fn, 0.0, 1.0, 7).unwrap();
        assert_abs_diff_eq!(result, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezium_constant() {
        let result = trapezium_rule(constant_fn, -1.0, 3.0, 5).unwrap();
        assert_abs_diff_eq!(result, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpsons_constant() {
        let result = simpsons_rule(constant_fn, 0.0, 1.0, 2).unwrap();
        assert_abs_diff_eq!(result, 2.0, epsilon = 1e-15);

        let result = simpsons_rule(constant_fn, 0.0, 1.0, 8).unwrap();
        assert_abs_diff_eq!(result, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_midpoint_linear() {
        let result = midpoint_rule(linear_fn, 0.0, 1.0, 1).unwrap();
        assert_abs_diff_eq!(result, 0.5, epsilon = 1e-15);

        let result = midpoint_rule(linear_fn, -2.0, 5.0, 9).unwrap();
        assert_abs_diff_eq!(result, 10.5, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezium_linear() {
        let result = trapezium_rule(linear_fn, 0.0, 1.0, 1).unwrap();
        assert_abs_diff_eq!(result, 0.5, epsilon = 1e-15);

        let result = trapezium_rule(linear_fn, -2.0, 5.0, 9).unwrap();
        assert_abs_diff_eq!(result, 10.5, epsilon = 1e-12);
    }

    #[test]
    fn test_simpsons_linear() {
        let result = simpsons_rule(linear_fn, -2.0, 5.0, 10).unwrap();
        assert_abs_diff_eq!(result, 10.5, epsilon = 1e-12);
    }

    #[test]
    fn test_midpoint_quadratic_error_term() {
        // Midpoint on x^2 misses by exactly h^2/12 over [0, 1]
        let result = midpoint_rule(quadratic_fn, 0.0, 1.0, 2).unwrap();
        assert_abs_diff_eq!(result, 1.0 / 3.0 - 0.25 / 12.0, epsilon = 1e-15);
    }

    #[test]
    fn test_simpsons_quadratic_exact() {
        let result = simpsons_rule(quadratic_fn, 0.0, 1.0, 2).unwrap();
        assert_abs_diff_eq!(result, 1.0 / 3.0, epsilon = 1e-15);
    }

    #[test]
    fn test_simpsons_cubic_exact() {
        // Simpson's rule is exact for cubics as well
        let cubic_fn = |x: f64| x * x * x;
        let result = simpsons_rule(cubic_fn, 0.0, 1.0, 4).unwrap();
        assert_abs_diff_eq!(result, 0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_sine_convergence() {
        let exact = 2.0; // ∫sin(x) dx from 0 to π
        let pi = std::f64::consts::PI;

        let midpoint = midpoint_rule(sine_fn, 0.0, pi, 1000).unwrap();
        let trapezium = trapezium_rule(sine_fn, 0.0, pi, 1000).unwrap();
        let simpson = simpsons_rule(sine_fn, 0.0, pi, 1000).unwrap();

        assert_abs_diff_eq!(midpoint, exact, epsilon = 1e-5);
        assert_abs_diff_eq!(trapezium, exact, epsilon = 1e-5);
        assert_abs_diff_eq!(simpson, exact, epsilon = 1e-10);
    }

    #[test]
    fn test_simpsons_odd_subdivisions() {
        let result = simpsons_rule(sine_fn, 0.0, 1.0, 3);
        assert_eq!(result.unwrap_err(), QuadratureError::OddSubdivisions(3));

        let result = simpsons_rule(sine_fn, 0.0, 1.0, 1);
        assert_eq!(result.unwrap_err(), QuadratureError::OddSubdivisions(1));
    }

    #[test]
    fn test_zero_subdivisions() {
        assert_eq!(
            midpoint_rule(linear_fn, 0.0, 1.0, 0).unwrap_err(),
            QuadratureError::ZeroSubdivisions
        );
        assert_eq!(
            trapezium_rule(linear_fn, 0.0, 1.0, 0).unwrap_err(),
            QuadratureError::ZeroSubdivisions
        );
        assert_eq!(
            simpsons_rule(linear_fn, 0.0, 1.0, 0).unwrap_err(),
            QuadratureError::ZeroSubdivisions
        );
    }

    #[test]
    fn test_invalid_interval() {
        assert_eq!(
            midpoint_rule(linear_fn, 1.0, 0.0, 4).unwrap_err(),
            QuadratureError::InvalidInterval
        );
        assert_eq!(
            trapezium_rule(linear_fn, 2.0, 2.0, 4).unwrap_err(),
            QuadratureError::InvalidInterval
        );
        assert_eq!(
            simpsons_rule(linear_fn, 1.0, -1.0, 4).unwrap_err(),
            QuadratureError::InvalidInterval
        );
    }

    #[test]
    fn test_precision_ordering_on_sine() {
        // With the same n, Simpson's beats both second-order rules, and
        // midpoint carries roughly half the trapezium error constant
        let exact = 2.0;
        let pi = std::f64::consts::PI;
        let n = 64;

        let midpoint_error = (midpoint_rule(sine_fn, 0.0, pi, n).unwrap() - exact).abs();
        let trapezium_error = (trapezium_rule(sine_fn, 0.0, pi, n).unwrap() - exact).abs();
        let simpson_error = (simpsons_rule(sine_fn, 0.0, pi, n).unwrap() - exact).abs();

        assert!(simpson_error < midpoint_error);
        assert!(simpson_error < trapezium_error);
        assert!(midpoint_error < trapezium_error);
    }

    #[test]
    fn test_rapidly_oscillating_function() {
        let func = |x: f64| (10.0 * x).sin();
        let exact = (1.0 - (10.0_f64).cos()) / 10.0;

        let result = simpsons_rule(func, 0.0, 1.0, 1024).unwrap();
        assert_abs_diff_eq!(result, exact, epsilon = 1e-9);
    }
}
