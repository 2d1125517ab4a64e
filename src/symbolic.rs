//! # Symbolic subsystem
//!
//! The in-crate symbolic-algebra engine: expression trees, parsing,
//! differentiation, integration, simplification and numeric evaluation.
//!
//! ```
//! use RustedEqSolver::symbolic::symbolic_engine::Expr;
//! let parsed = Expr::parse_expression("x**2 - 4").unwrap();
//! let derivative = parsed.diff("x").simplify();
//! assert_eq!(derivative.to_string(), "2*x");
//! ```

/// a module turns a String expression into a symbolic expression
pub mod parse_expr;
/// the `Expr` tree, Display, operators, substitution and variable extraction
pub mod symbolic_engine;
/// analytical differentiation rules
pub mod symbolic_derivatives;
/// indefinite integration for the supported fragment
pub mod symbolic_integration;
/// converting symbolic expressions to executable closures and numeric values
pub mod symbolic_lambdify;
/// constant folding and identity rules, iterated to a fixed point
pub mod symbolic_simplify;
/// linspace and friends
pub mod utils;
