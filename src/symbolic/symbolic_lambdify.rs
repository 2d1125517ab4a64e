//! # Lambdification Module - Converting Symbolic Expressions to Executable Functions
//!
//! Turns an `Expr` tree into a nested closure for repeated numerical
//! evaluation (the plot renderer calls the result 400 times per request),
//! and provides direct map-based evaluation for one-off use by the
//! linear-system assembler.

use crate::symbolic::symbolic_engine::Expr;
use std::collections::HashMap;

impl Expr {
    /// Converts a single-variable symbolic expression into an executable Rust
    /// closure of that variable. Any other variable evaluates to NaN, which
    /// callers detect as a non-plottable sample; validating the free-variable
    /// set up front is the caller's job.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("x**2").unwrap().lambdify1D("x");
    /// assert_eq!(f(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self, var: &str) -> Box<dyn Fn(f64) -> f64> {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Box::new(|x| x)
                } else {
                    Box::new(|_| f64::NAN)
                }
            }
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_| val)
            }
            Expr::Add(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D(var);
                let rhs_fn = rhs.lambdify1D(var);
                Box::new(move |x| lhs_fn(x) + rhs_fn(x))
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D(var);
                let rhs_fn = rhs.lambdify1D(var);
                Box::new(move |x| lhs_fn(x) - rhs_fn(x))
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D(var);
                let rhs_fn = rhs.lambdify1D(var);
                Box::new(move |x| lhs_fn(x) * rhs_fn(x))
            }
            Expr::Div(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D(var);
                let rhs_fn = rhs.lambdify1D(var);
                Box::new(move |x| lhs_fn(x) / rhs_fn(x))
            }
            Expr::Pow(base, exp) => {
                let base_fn = base.lambdify1D(var);
                let exp_fn = exp.lambdify1D(var);
                Box::new(move |x| base_fn(x).powf(exp_fn(x)))
            }
            Expr::Exp(expr) => {
                let expr_fn = expr.lambdify1D(var);
                Box::new(move |x| expr_fn(x).exp())
            }
            Expr::Ln(expr) => {
                let expr_fn = expr.lambdify1D(var);
                Box::new(move |x| expr_fn(x).ln())
            }
            Expr::sin(expr) => {
                let expr_fn = expr.lambdify1D(var);
                Box::new(move |x| expr_fn(x).sin())
            }
            Expr::cos(expr) => {
                let expr_fn = expr.lambdify1D(var);
                Box::new(move |x| expr_fn(x).cos())
            }
            Expr::tg(expr) => {
                let expr_fn = expr.lambdify1D(var);
                Box::new(move |x| expr_fn(x).tan())
            }
        }
    }

    /// Evaluates the expression numerically with the given variable bindings.
    /// An unbound variable is an error, not a NaN.
    pub fn eval_expression(&self, bindings: &HashMap<String, f64>) -> Result<f64, String> {
        match self {
            Expr::Var(name) => bindings
                .get(name)
                .copied()
                .ok_or_else(|| format!("unbound variable '{}'", name)),
            Expr::Const(val) => Ok(*val),
            Expr::Add(lhs, rhs) => {
                Ok(lhs.eval_expression(bindings)? + rhs.eval_expression(bindings)?)
            }
            Expr::Sub(lhs, rhs) => {
                Ok(lhs.eval_expression(bindings)? - rhs.eval_expression(bindings)?)
            }
            Expr::Mul(lhs, rhs) => {
                Ok(lhs.eval_expression(bindings)? * rhs.eval_expression(bindings)?)
            }
            Expr::Div(lhs, rhs) => {
                Ok(lhs.eval_expression(bindings)? / rhs.eval_expression(bindings)?)
            }
            Expr::Pow(base, exp) => {
                Ok(base.eval_expression(bindings)?.powf(exp.eval_expression(bindings)?))
            }
            Expr::Exp(expr) => Ok(expr.eval_expression(bindings)?.exp()),
            Expr::Ln(expr) => Ok(expr.eval_expression(bindings)?.ln()),
            Expr::sin(expr) => Ok(expr.eval_expression(bindings)?.sin()),
            Expr::cos(expr) => Ok(expr.eval_expression(bindings)?.cos()),
            Expr::tg(expr) => Ok(expr.eval_expression(bindings)?.tan()),
        }
    }
}
