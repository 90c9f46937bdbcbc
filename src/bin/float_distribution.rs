use std::error::Error;

use plotters::prelude::*;

use quadlab::float_scan::{count_representable_f32, octave_ranges, scan_octaves};

const OUT_FILE: &str = "float32_distribution.svg";

fn main() -> Result<(), Box<dyn Error>> {
    let scan = scan_octaves();

    print_breakdown(&scan)?;
    render_distribution_chart(&scan, OUT_FILE)?;
    println!("\nSaved distribution chart to {}", OUT_FILE);
    Ok(())
}

fn print_breakdown(scan: &[(String, usize)]) -> Result<(), Box<dyn Error>> {
    let total: usize = scan.iter().map(|(_, count)| count).sum();
    println!("Total samples analyzed: {}", group_digits(total));

    println!("\nDetailed breakdown:");
    for (range, (label, count)) in octave_ranges().iter().zip(scan) {
        let exact = count_representable_f32(range.start() as f32, range.end() as f32)?;
        println!(
            "Range {}: {} samples (step size: {:e}, distinct f32 values: {})",
            label,
            group_digits(*count),
            range.step(),
            group_digits(exact as usize)
        );
    }
    Ok(())
}

fn render_distribution_chart(scan: &[(String, usize)], path: &str) -> Result<(), Box<dyn Error>> {
    let y_max = scan
        .iter()
        .map(|&(_, count)| count as f64)
        .fold(1.0f64, f64::max)
        * 1.15;

    let root = SVGBackend::new(path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Distribution of Fixed-Step Samples Across Power-of-2 Intervals",
            ("sans-serif", 24),
        )
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(90)
        .build_cartesian_2d(0f64..scan.len() as f64, 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Interval")
        .y_desc("Samples")
        .x_labels(scan.len() + 1)
        .x_label_formatter(&|x| tick_label(scan, *x))
        .draw()?;

    for (i, (_, count)) in scan.iter().enumerate() {
        let x0 = i as f64 + 0.15;
        let x1 = i as f64 + 0.85;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x1, *count as f64)],
            BLUE.mix(0.6).filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            group_digits(*count),
            (i as f64 + 0.2, *count as f64 + y_max * 0.03),
            ("sans-serif", 15),
        )))?;
    }

    root.present()?;
    Ok(())
}

// Integer ticks land on the left edge of each bar slot
fn tick_label(scan: &[(String, usize)], x: f64) -> String {
    if x < 0.0 || (x - x.round()).abs() > 1e-9 {
        return String::new();
    }
    scan.get(x.round() as usize)
        .map(|(label, _)| label.clone())
        .unwrap_or_default()
}

fn group_digits(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
