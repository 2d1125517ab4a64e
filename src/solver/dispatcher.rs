//! # Equation Dispatcher
//!
//! The application core: receives (equation-type selector, raw equation
//! text), validates non-emptiness, routes to one of four handling branches
//! and returns a formatted result string plus an optional plot request.
//!
//! Each invocation fully completes (or fails) before control returns to the
//! caller; errors are tagged `SolverError` values terminal for the current
//! request only, never process faults. The plot request always carries the
//! *original* parsed expression, not the derivative or the integral - that
//! matches the observable behavior the tool has always had.

use crate::solver::errors::SolverError;
use crate::solver::linear_system::{assemble_system, solve_linear_system};
use crate::solver::roots::{format_root, solve_polynomial};
use crate::symbolic::symbolic_engine::Expr;
use log::info;
use strum_macros::{Display, EnumString};

// Five spaces between enumerated solution entries, matching the classic
// output format of the tool.
const SOLUTION_SEPARATOR: &str = "     ";

/// Equation mode selected in the UI dropdown. `FromStr` accepts both the
/// full dropdown labels and the bare variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum EquationType {
    #[strum(serialize = "Algebraic Equation", serialize = "Algebraic")]
    Algebraic,
    #[strum(serialize = "Differentiation")]
    Differentiation,
    #[strum(serialize = "Integration")]
    Integration,
    #[strum(serialize = "System of Equations", serialize = "System")]
    System,
}

/// One user submission: mode plus raw equation text. Created per request,
/// immutable, discarded after handling.
#[derive(Debug, Clone)]
pub struct EquationRequest {
    pub eq_type: EquationType,
    pub raw_text: String,
}

impl EquationRequest {
    pub fn new(eq_type: EquationType, raw_text: &str) -> Self {
        EquationRequest {
            eq_type,
            raw_text: raw_text.to_string(),
        }
    }
}

/// Dispatcher output: the text for the output area and, for the
/// single-equation modes, the expression the plot renderer should draw.
#[derive(Debug, Clone)]
pub struct SolutionResult {
    pub display_text: String,
    pub plot_expression: Option<Expr>,
}

/// Routes a request to its handling branch. The single symbolic variable of
/// the single-equation modes is "x"; the System mode infers its ordered
/// variable set from the parsed expressions instead.
pub fn handle(request: &EquationRequest) -> Result<SolutionResult, SolverError> {
    let text = request.raw_text.trim();
    if text.is_empty() {
        return Err(SolverError::EmptyInput);
    }
    info!("dispatching {} request: {}", request.eq_type, text);

    match request.eq_type {
        EquationType::Algebraic => {
            let expr = Expr::parse_expression(text).map_err(SolverError::Parse)?;
            let roots = solve_polynomial(&expr, "x").map_err(SolverError::Solve)?;
            let display_text = if roots.is_empty() {
                "No solution found.".to_string()
            } else {
                roots
                    .iter()
                    .enumerate()
                    .map(|(i, root)| format!("x{} = {}", i + 1, format_root(root)))
                    .collect::<Vec<_>>()
                    .join(SOLUTION_SEPARATOR)
            };
            Ok(SolutionResult {
                display_text,
                plot_expression: Some(expr),
            })
        }
        EquationType::Differentiation => {
            let expr = Expr::parse_expression(text).map_err(SolverError::Parse)?;
            let derivative = expr.diff("x").simplify();
            Ok(SolutionResult {
                display_text: format!("f'(x) = {}", derivative),
                plot_expression: Some(expr),
            })
        }
        EquationType::Integration => {
            let expr = Expr::parse_expression(text).map_err(SolverError::Parse)?;
            let integral = expr
                .integrate("x")
                .map_err(SolverError::Solve)?
                .simplify();
            Ok(SolutionResult {
                display_text: format!("∫f(x) dx = {} + C", integral),
                plot_expression: Some(expr),
            })
        }
        EquationType::System => {
            let system = assemble_system(text).map_err(SolverError::Parse)?;
            let display_text = match solve_linear_system(&system).map_err(SolverError::Solve)? {
                None => "No solution found.".to_string(),
                Some(solution) => system
                    .variables
                    .iter()
                    .zip(solution.iter())
                    .map(|(variable, value)| {
                        format!("{} = {:?}", variable, clean_value(*value))
                    })
                    .collect::<Vec<_>>()
                    .join(SOLUTION_SEPARATOR),
            };
            Ok(SolutionResult {
                display_text,
                plot_expression: None,
            })
        }
    }
}

// Snaps LU rounding noise to the nearest integer so the display reads
// "x = 3.0" rather than "x = 2.9999999999999996".
fn clean_value(value: f64) -> f64 {
    if (value - value.round()).abs() < 1e-9 {
        value.round() + 0.0
    } else {
        value
    }
}
