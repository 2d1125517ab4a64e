//! # Symbolic Derivatives Module
//!
//! Analytical differentiation for `Expr`. Implements the standard calculus
//! rules by structural recursion over the expression tree:
//! - Power rule: d/dx(x^n) = n*x^(n-1)
//! - Product rule: d/dx(f*g) = f'*g + f*g'
//! - Quotient rule: d/dx(f/g) = (f'*g - f*g')/g^2
//! - Chain rule for the function variants
//!
//! Raw derivatives carry plenty of structural noise (multiplications by one,
//! exponents like `2 - 1`); callers are expected to `simplify()` before
//! displaying.

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// Computes the analytical derivative of the expression with respect to a
    /// variable. For multivariable expressions this is the partial derivative.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("x**2").unwrap();
    /// assert_eq!(f.diff("x").simplify().to_string(), "2*x");
    /// ```
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                    Box::new(Expr::Mul(Box::new(rhs.diff(var)), lhs.clone())),
                )),
                Box::new(Expr::Mul(rhs.clone(), rhs.clone())),
            ),
            // constant-exponent power rule: n * base^(n-1) * base'
            Expr::Pow(base, exp) => Expr::Mul(
                Box::new(Expr::Mul(
                    exp.clone(),
                    Box::new(Expr::Pow(
                        base.clone(),
                        Box::new(Expr::Sub(exp.clone(), Box::new(Expr::Const(1.0)))),
                    )),
                )),
                Box::new(base.diff(var)),
            ),
            Expr::Exp(expr) => {
                Expr::Mul(Box::new(Expr::Exp(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::Ln(expr) => Expr::Div(Box::new(expr.diff(var)), expr.clone()),
            Expr::sin(expr) => {
                Expr::Mul(Box::new(Expr::cos(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::cos(expr) => Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::sin(expr.clone())),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::tg(expr) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(
                        Box::new(Expr::cos(expr.clone())),
                        Box::new(Expr::Const(2.0)),
                    )),
                )),
                Box::new(expr.diff(var)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_square() {
        let f = Expr::parse_expression("x**2").unwrap();
        assert_eq!(f.diff("x").simplify().to_string(), "2*x");
    }

    #[test]
    fn test_diff_constant() {
        let f = Expr::parse_expression("5").unwrap();
        assert_eq!(f.diff("x").simplify(), Expr::Const(0.0));
    }

    #[test]
    fn test_diff_other_variable() {
        let f = Expr::parse_expression("y").unwrap();
        assert_eq!(f.diff("x").simplify(), Expr::Const(0.0));
    }

    #[test]
    fn test_diff_polynomial() {
        let f = Expr::parse_expression("x**3 + 2*x").unwrap();
        assert_eq!(f.diff("x").simplify().to_string(), "3*x**2 + 2");
    }

    #[test]
    fn test_diff_sin() {
        let f = Expr::parse_expression("sin(x)").unwrap();
        assert_eq!(f.diff("x").simplify().to_string(), "cos(x)");
    }

    #[test]
    fn test_diff_exp_chain() {
        let f = Expr::parse_expression("exp(2*x)").unwrap();
        let df = f.diff("x").simplify();
        // exp(2*x) * 2 up to commutation
        let g = df.lambdify1D("x");
        let expected = |x: f64| 2.0 * (2.0 * x).exp();
        assert!((g(0.5) - expected(0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_diff_quotient_numeric() {
        let f = Expr::parse_expression("x / (x + 1)").unwrap();
        let df = f.diff("x").simplify().lambdify1D("x");
        // d/dx x/(x+1) = 1/(x+1)^2
        let expected = |x: f64| 1.0 / ((x + 1.0) * (x + 1.0));
        assert!((df(2.0) - expected(2.0)).abs() < 1e-12);
    }
}
