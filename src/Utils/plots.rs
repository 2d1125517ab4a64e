//! Plot rendering for the single-equation modes: 400 evenly spaced samples
//! over [-10, 10], drawn as a labeled line plot with a mesh grid and
//! zero-axis reference lines, saved as a PNG via plotters.

use crate::solver::errors::SolverError;
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::linspace;
use log::info;
use plotters::prelude::*;

const PLOT_DOMAIN: (f64, f64) = (-10.0, 10.0);
const PLOT_SAMPLES: usize = 400;

/// Samples the expression over the fixed domain and renders a line plot to
/// `filename`. Fails with `PlotEvaluation` when the expression is not a
/// function of x alone or no sample evaluates to a finite number; non-finite
/// samples inside an otherwise valid curve are simply dropped.
pub fn plot_expression(expr: &Expr, filename: &str) -> Result<(), SolverError> {
    let variables = expr.free_variables();
    if !variables.iter().all(|name| name == "x") {
        return Err(SolverError::PlotEvaluation);
    }

    let function = expr.lambdify1D("x");
    let series: Vec<(f64, f64)> = linspace(PLOT_DOMAIN.0, PLOT_DOMAIN.1, PLOT_SAMPLES)
        .into_iter()
        .map(|x| (x, function(x)))
        .filter(|(_, y)| y.is_finite())
        .collect();
    if series.is_empty() {
        return Err(SolverError::PlotEvaluation);
    }

    let y_min = series.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = series
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::NEG_INFINITY, f64::max);
    // a constant function still needs a non-degenerate y-range
    let (y_min, y_max) = if y_max - y_min < 1e-12 {
        (y_min - 1.0, y_max + 1.0)
    } else {
        (y_min, y_max)
    };

    let label = expr.to_string();
    let render = |label: &str| -> Result<(), Box<dyn std::error::Error>> {
        let root_area = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
        root_area.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root_area)
            .caption(label, ("sans-serif", 30))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(PLOT_DOMAIN.0..PLOT_DOMAIN.1, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc("X-axis")
            .y_desc("Y-axis")
            .draw()?;

        // zero-axis reference lines
        chart.draw_series(LineSeries::new(
            vec![(PLOT_DOMAIN.0, 0.0), (PLOT_DOMAIN.1, 0.0)],
            &BLACK,
        ))?;
        if y_min < 0.0 && y_max > 0.0 {
            chart.draw_series(LineSeries::new(vec![(0.0, y_min), (0.0, y_max)], &BLACK))?;
        }

        chart
            .draw_series(LineSeries::new(series.clone(), &BLUE))?
            .label(label)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
        root_area.present()?;
        Ok(())
    };

    render(&label).map_err(|e| SolverError::Render(e.to_string()))?;
    info!("plot of {} saved to {}", label, filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_variable_expression_rejected() {
        let expr = Expr::parse_expression("x + y").unwrap();
        assert_eq!(
            plot_expression(&expr, "unused.png").unwrap_err(),
            SolverError::PlotEvaluation
        );
    }

    #[test]
    fn test_nowhere_finite_expression_rejected() {
        // ln of a strictly negative argument is NaN over the whole domain
        let expr = Expr::parse_expression("ln(-100 - x**2)").unwrap();
        assert_eq!(
            plot_expression(&expr, "unused.png").unwrap_err(),
            SolverError::PlotEvaluation
        );
    }
}
