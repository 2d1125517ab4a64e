#![allow(non_snake_case)]
//! # RustedEqSolver
//!
//! Equation solver built around an in-crate symbolic engine: parse a string
//! equation, route it by mode to the matching capability and get back a
//! formatted result plus an optional plot.
//!
//! - **Algebraic Equation**: all roots of a polynomial set equal to zero
//! - **Differentiation**: analytical first derivative with respect to x
//! - **Integration**: indefinite integral with respect to x
//! - **System of Equations**: linear solve over the inferred variable set
//!
//! ```
//! use RustedEqSolver::solver::dispatcher::{EquationRequest, EquationType, handle};
//!
//! let request = EquationRequest::new(EquationType::Differentiation, "x**2");
//! let result = handle(&request).unwrap();
//! assert_eq!(result.display_text, "f'(x) = 2*x");
//! ```

pub mod Utils;
pub mod solver;
pub mod symbolic;
