use std::error::Error;

use plotters::prelude::*;

use quadlab::convergence::{
    convergence_series_parallel, power_of_two_subdivisions, ConvergenceSeries,
};

const A: f64 = 0.0;
const B: f64 = 1.0;
// ∫₀¹ x^(3/2) dx = 2/5, the known analytic reference
const REFERENCE: f64 = 0.4;
const MIN_POWER: u32 = 1;
const MAX_POWER: u32 = 24;
const OUT_FILE: &str = "integration_error.svg";
// Keeps roundoff-floor errors drawable on the log axis
const ERROR_FLOOR: f64 = 1e-18;

fn integrand(x: f64) -> f64 {
    x.powf(1.5)
}

fn main() -> Result<(), Box<dyn Error>> {
    let n_values = power_of_two_subdivisions(MIN_POWER, MAX_POWER);
    let series = convergence_series_parallel(integrand, A, B, REFERENCE, &n_values)?;

    print_error_table(&series);
    render_convergence_chart(&series, OUT_FILE)?;
    println!("\nSaved convergence chart to {}", OUT_FILE);
    Ok(())
}

fn print_error_table(series: &ConvergenceSeries) {
    println!(
        "{:>10}  {:>13}  {:>13}  {:>13}",
        "n", "midpoint", "trapezium", "simpson"
    );
    for (n, midpoint, trapezium, simpson) in series.rows() {
        println!(
            "{:>10}  {:>13.6e}  {:>13.6e}  {:>13.6e}",
            n, midpoint, trapezium, simpson
        );
    }
}

fn render_convergence_chart(series: &ConvergenceSeries, path: &str) -> Result<(), Box<dyn Error>> {
    let n_min = *series.n_values.first().ok_or("empty error series")? as f64;
    let n_max = *series.n_values.last().ok_or("empty error series")? as f64;
    let anchor = series.max_error().max(ERROR_FLOOR);

    let root = SVGBackend::new(path, (1280, 960)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Convergence of Numerical Integration Methods",
            ("sans-serif", 28),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(
            (n_min * 0.8..n_max * 1.25).log_scale(),
            (ERROR_FLOOR..anchor * 10.0).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_desc("Number of intervals (n)")
        .y_desc("Absolute error")
        .draw()?;

    // Reference slopes O(n^-1), O(n^-2), O(n^-4) anchored at the largest error
    for order in [1i32, 2, 4] {
        let guide: Vec<(f64, f64)> = [n_min, n_max]
            .iter()
            .map(|&n| (n, (anchor * (n / n_min).powi(-order)).max(ERROR_FLOOR)))
            .collect();
        chart
            .draw_series(std::iter::once(PathElement::new(guide, BLACK.mix(0.35))))?
            .label(format!("O(n^-{})", order))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.mix(0.35)));
    }

    for (name, errors, color) in [
        ("Midpoint rule", &series.midpoint, BLUE),
        ("Trapezium rule", &series.trapezium, RED),
        ("Simpson's rule", &series.simpson, GREEN),
    ] {
        let points: Vec<(f64, f64)> = series
            .n_values
            .iter()
            .zip(errors.iter())
            .map(|(&n, &error)| (n as f64, error.max(ERROR_FLOOR)))
            .collect();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart.draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
