//! Tagged error type for the dispatch pipeline. Each variant maps to one of
//! the user-visible failure classes; `Display` is the exact text shown in the
//! output area, so callers can print an error without string inspection while
//! still being able to match on the class.

use thiserror::Error;

/// Failure classes of a single equation request. Terminal for that request
/// only; the shell stays usable afterwards.
#[derive(Debug, Error, PartialEq)]
pub enum SolverError {
    /// User submitted blank text; the engine is never invoked.
    #[error("Please enter an equation.")]
    EmptyInput,
    /// The engine rejected the input text.
    #[error("Error: {0}")]
    Parse(String),
    /// Parsing succeeded but solving/integration failed.
    #[error("Error: {0}")]
    Solve(String),
    /// The expression is not numerically evaluable over the sample domain.
    #[error("Error: Unable to plot the function. Please enter a valid equation.")]
    PlotEvaluation,
    /// The plotting backend failed to write the image.
    #[error("Error: failed to render plot: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_texts() {
        assert_eq!(
            SolverError::EmptyInput.to_string(),
            "Please enter an equation."
        );
        assert_eq!(
            SolverError::Parse("unexpected end of expression".to_string()).to_string(),
            "Error: unexpected end of expression"
        );
        assert!(
            SolverError::PlotEvaluation
                .to_string()
                .starts_with("Error: Unable to plot")
        );
    }
}
