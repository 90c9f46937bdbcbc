use rayon::prelude::*;

use crate::quadrature::{midpoint_rule, simpsons_rule, trapezium_rule, QuadratureResult};

/// Absolute-error series for the three rules, aligned to one shared n-sequence
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceSeries {
    pub n_values: Vec<usize>,
    pub midpoint: Vec<f64>,
    pub trapezium: Vec<f64>,
    pub simpson: Vec<f64>,
}

impl ConvergenceSeries {
    pub fn len(&self) -> usize {
        self.n_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_values.is_empty()
    }

    /// Largest error across all three rules, used to anchor chart scaling
    pub fn max_error(&self) -> f64 {
        self.midpoint
            .iter()
            .chain(&self.trapezium)
            .chain(&self.simpson)
            .fold(0.0, |acc, &e| acc.max(e))
    }

    /// Rows of (n, midpoint, trapezium, simpson) for tabular reporting
    pub fn rows(&self) -> impl Iterator<Item = (usize, f64, f64, f64)> + '_ {
        self.n_values
            .iter()
            .zip(self.midpoint.iter())
            .zip(self.trapezium.iter())
            .zip(self.simpson.iter())
            .map(|(((&n, &m), &t), &s)| (n, m, t, s))
    }
}

fn errors_at<F>(func: &F, a: f64, b: f64, reference: f64, n: usize) -> QuadratureResult<(f64, f64, f64)>
where
    F: Fn(f64) -> f64,
{
    let midpoint = (midpoint_rule(func, a, b, n)? - reference).abs();
    let trapezium = (trapezium_rule(func, a, b, n)? - reference).abs();
    let simpson = (simpsons_rule(func, a, b, n)? - reference).abs();
    Ok((midpoint, trapezium, simpson))
}

/// Runs all three rules across `n_values`, recording |approximation - reference|.
///
/// The reference value is ground truth supplied by the caller (an analytic
/// integral or an external high-precision integrator) and is not validated
/// here. Engine failures (odd n with Simpson's rule, degenerate interval)
/// propagate immediately.
pub fn convergence_series<F>(
    func: F,
    a: f64,
    b: f64,
    reference: f64,
    n_values: &[usize],
) -> QuadratureResult<ConvergenceSeries>
where
    F: Fn(f64) -> f64,
{
    let mut midpoint = Vec::with_capacity(n_values.len());
    let mut trapezium = Vec::with_capacity(n_values.len());
    let mut simpson = Vec::with_capacity(n_values.len());

    for &n in n_values {
        let (m, t, s) = errors_at(&func, a, b, reference, n)?;
        midpoint.push(m);
        trapezium.push(t);
        simpson.push(s);
    }

    Ok(ConvergenceSeries {
        n_values: n_values.to_vec(),
        midpoint,
        trapezium,
        simpson,
    })
}

/// Same sweep with the n-values fanned out across the rayon pool.
///
/// The n-values are independent, so the rows are computed in parallel and
/// collected back in order; the output is identical to the sequential form.
pub fn convergence_series_parallel<F>(
    func: F,
    a: f64,
    b: f64,
    reference: f64,
    n_values: &[usize],
) -> QuadratureResult<ConvergenceSeries>
where
    F: Fn(f64) -> f64 + Sync,
{
    let rows: Vec<(f64, f64, f64)> = n_values
        .par_iter()
        .map(|&n| errors_at(&func, a, b, reference, n))
        .collect::<QuadratureResult<Vec<_>>>()?;

    let mut midpoint = Vec::with_capacity(rows.len());
    let mut trapezium = Vec::with_capacity(rows.len());
    let mut simpson = Vec::with_capacity(rows.len());

    for (m, t, s) in rows {
        midpoint.push(m);
        trapezium.push(t);
        simpson.push(s);
    }

    Ok(ConvergenceSeries {
        n_values: n_values.to_vec(),
        midpoint,
        trapezium,
        simpson,
    })
}

/// The demo n-sequence: 2^lo through 2^hi inclusive
pub fn power_of_two_subdivisions(lo: u32, hi: u32) -> Vec<usize> {
    (lo..=hi).map(|p| 1usize << p).collect()
}
