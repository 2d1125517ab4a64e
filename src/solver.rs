//! # Solver subsystem
//!
//! The equation dispatcher and the two solve capabilities behind it:
//! polynomial root finding (Algebraic mode) and the linear-system solver
//! (System mode).
//!
//! ```
//! use RustedEqSolver::solver::dispatcher::{EquationRequest, EquationType, handle};
//! let request = EquationRequest::new(EquationType::Algebraic, "x**2 - 4");
//! let result = handle(&request).unwrap();
//! assert_eq!(result.display_text, "x1 = -2     x2 = 2");
//! ```

/// routing by equation type, result formatting, request/result types
pub mod dispatcher;
/// tagged error type of the dispatch pipeline
pub mod errors;
/// linear-system assembly and LU solve
pub mod linear_system;
/// polynomial coefficient extraction and root finding
pub mod roots;
