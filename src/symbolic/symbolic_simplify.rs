//! # Symbolic Expression Simplification Module
//!
//! Algebraic simplification for `Expr`. The strategy is a bottom-up rewrite
//! pass applying constant folding and identity rules, iterated to a fixed
//! point:
//!
//! 1. **Constant Folding**: arithmetic on two constants collapses to a constant
//! 2. **Algebraic Identities**: x + 0 = x, x * 1 = x, x * 0 = 0, x**1 = x, ...
//! 3. **Coefficient Collection**: constant factors migrate to the left of a
//!    product and merge across nested Mul/Div chains, so `2 * (x**2 / 2)`
//!    collapses to `x**2`
//!
//! The dispatcher runs every derivative and integral through `simplify()`
//! before formatting, which is what turns the raw rule output
//! `((2*x**(2 - 1)) * 1)` into the displayed `2*x`.

use crate::symbolic::symbolic_engine::Expr;

// Bounds the fixed-point iteration; each pass strictly shrinks or stabilizes
// the tree in practice, the cap is for pathological inputs.
const MAX_SIMPLIFY_PASSES: usize = 16;

impl Expr {
    /// Simplifies the expression by constant folding and identity rules,
    /// repeating the rewrite pass until the tree stops changing.
    pub fn simplify(&self) -> Expr {
        let mut current = self.clone();
        for _ in 0..MAX_SIMPLIFY_PASSES {
            let next = current.simplify_once();
            if next == current {
                return next;
            }
            current = next;
        }
        current
    }

    // One bottom-up rewrite pass: children first, then local rules.
    fn simplify_once(&self) -> Expr {
        match self {
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => {
                let lhs = lhs.simplify_once();
                let rhs = rhs.simplify_once();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b),
                    (Expr::Const(a), _) if *a == 0.0 => rhs,
                    (_, Expr::Const(b)) if *b == 0.0 => lhs,
                    _ => Expr::Add(lhs.boxed(), rhs.boxed()),
                }
            }
            Expr::Sub(lhs, rhs) => {
                let lhs = lhs.simplify_once();
                let rhs = rhs.simplify_once();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
                    (_, Expr::Const(b)) if *b == 0.0 => lhs,
                    (Expr::Const(a), _) if *a == 0.0 => {
                        Expr::Mul(Expr::Const(-1.0).boxed(), rhs.boxed())
                    }
                    _ => Expr::Sub(lhs.boxed(), rhs.boxed()),
                }
            }
            Expr::Mul(lhs, rhs) => {
                let lhs = lhs.simplify_once();
                let rhs = rhs.simplify_once();
                Self::simplify_mul(lhs, rhs)
            }
            Expr::Div(lhs, rhs) => {
                let lhs = lhs.simplify_once();
                let rhs = rhs.simplify_once();
                Self::simplify_div(lhs, rhs)
            }
            Expr::Pow(base, exp) => {
                let base = base.simplify_once();
                let exp = exp.simplify_once();
                match (&base, &exp) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a.powf(*b)),
                    (_, Expr::Const(b)) if *b == 1.0 => base,
                    (_, Expr::Const(b)) if *b == 0.0 => Expr::Const(1.0),
                    (Expr::Const(a), _) if *a == 1.0 => Expr::Const(1.0),
                    _ => Expr::Pow(base.boxed(), exp.boxed()),
                }
            }
            Expr::Exp(expr) => {
                let inner = expr.simplify_once();
                match &inner {
                    Expr::Const(val) if *val == 0.0 => Expr::Const(1.0),
                    _ => Expr::Exp(inner.boxed()),
                }
            }
            Expr::Ln(expr) => {
                let inner = expr.simplify_once();
                match &inner {
                    Expr::Const(val) if *val == 1.0 => Expr::Const(0.0),
                    _ => Expr::Ln(inner.boxed()),
                }
            }
            Expr::sin(expr) => Expr::sin(expr.simplify_once().boxed()),
            Expr::cos(expr) => Expr::cos(expr.simplify_once().boxed()),
            Expr::tg(expr) => Expr::tg(expr.simplify_once().boxed()),
        }
    }

    fn simplify_mul(lhs: Expr, rhs: Expr) -> Expr {
        match (&lhs, &rhs) {
            (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b),
            (Expr::Const(a), _) if *a == 0.0 => Expr::Const(0.0),
            (_, Expr::Const(b)) if *b == 0.0 => Expr::Const(0.0),
            (Expr::Const(a), _) if *a == 1.0 => rhs,
            (_, Expr::Const(b)) if *b == 1.0 => lhs,
            // normalize constants to the left of a product
            (_, Expr::Const(_)) => Expr::Mul(rhs.boxed(), lhs.boxed()),
            // merge constant coefficients across nested products and quotients
            (Expr::Const(a), Expr::Mul(inner_lhs, inner_rhs)) => {
                if let Expr::Const(b) = inner_lhs.as_ref() {
                    Expr::Mul(Expr::Const(a * b).boxed(), inner_rhs.clone())
                } else {
                    Expr::Mul(lhs.boxed(), rhs.boxed())
                }
            }
            (Expr::Const(a), Expr::Div(inner_lhs, inner_rhs)) => {
                if let Expr::Const(b) = inner_rhs.as_ref() {
                    if *b != 0.0 {
                        return Expr::Mul(Expr::Const(a / b).boxed(), inner_lhs.clone());
                    }
                }
                Expr::Mul(lhs.boxed(), rhs.boxed())
            }
            _ => Expr::Mul(lhs.boxed(), rhs.boxed()),
        }
    }

    fn simplify_div(lhs: Expr, rhs: Expr) -> Expr {
        match (&lhs, &rhs) {
            (Expr::Const(a), Expr::Const(b)) if *b != 0.0 => Expr::Const(a / b),
            (Expr::Const(a), _) if *a == 0.0 => Expr::Const(0.0),
            (_, Expr::Const(b)) if *b == 1.0 => lhs,
            // (c1 * e) / c2  ->  (c1/c2) * e
            (Expr::Mul(inner_lhs, inner_rhs), Expr::Const(b)) if *b != 0.0 => {
                if let Expr::Const(a) = inner_lhs.as_ref() {
                    Expr::Mul(Expr::Const(a / b).boxed(), inner_rhs.clone())
                } else {
                    Expr::Div(lhs.boxed(), rhs.boxed())
                }
            }
            // (e / c1) / c2  ->  e / (c1*c2)
            (Expr::Div(inner_lhs, inner_rhs), Expr::Const(b)) => {
                if let Expr::Const(a) = inner_rhs.as_ref() {
                    Expr::Div(inner_lhs.clone(), Expr::Const(a * b).boxed())
                } else {
                    Expr::Div(lhs.boxed(), rhs.boxed())
                }
            }
            _ => Expr::Div(lhs.boxed(), rhs.boxed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_folding() {
        let expr = Expr::parse_expression("2 + 3 * 4").unwrap();
        assert_eq!(expr.simplify(), Expr::Const(14.0));
    }

    #[test]
    fn test_additive_identities() {
        let x = Expr::Var("x".to_string());
        assert_eq!((x.clone() + Expr::Const(0.0)).simplify(), x.clone());
        assert_eq!((x.clone() - Expr::Const(0.0)).simplify(), x);
    }

    #[test]
    fn test_multiplicative_identities() {
        let x = Expr::Var("x".to_string());
        assert_eq!((x.clone() * Expr::Const(1.0)).simplify(), x.clone());
        assert_eq!(
            (x.clone() * Expr::Const(0.0)).simplify(),
            Expr::Const(0.0)
        );
        assert_eq!((x.clone() / Expr::Const(1.0)).simplify(), x);
    }

    #[test]
    fn test_power_identities() {
        let x = Expr::Var("x".to_string());
        assert_eq!(x.clone().pow(Expr::Const(1.0)).simplify(), x.clone());
        assert_eq!(x.pow(Expr::Const(0.0)).simplify(), Expr::Const(1.0));
    }

    #[test]
    fn test_coefficient_collection() {
        // 2 * (x**2 / 2) -> x**2
        let x = Expr::Var("x".to_string());
        let expr = Expr::Const(2.0) * (x.pow(Expr::Const(2.0)) / Expr::Const(2.0));
        assert_eq!(expr.simplify().to_string(), "x**2");
    }

    #[test]
    fn test_constant_moves_left() {
        let x = Expr::Var("x".to_string());
        let expr = x * Expr::Const(3.0);
        assert_eq!(expr.simplify().to_string(), "3*x");
    }

    #[test]
    fn test_raw_derivative_shape() {
        // the raw power-rule output ((2 * x**(2 - 1)) * 1) collapses to 2*x
        let x = Expr::Var("x".to_string());
        let raw = Expr::Mul(
            Box::new(Expr::Mul(
                Box::new(Expr::Const(2.0)),
                Box::new(Expr::Pow(
                    Box::new(x),
                    Box::new(Expr::Sub(
                        Box::new(Expr::Const(2.0)),
                        Box::new(Expr::Const(1.0)),
                    )),
                )),
            )),
            Box::new(Expr::Const(1.0)),
        );
        assert_eq!(raw.simplify().to_string(), "2*x");
    }

    #[test]
    fn test_division_by_zero_left_alone() {
        let expr = Expr::parse_expression("x / 0").unwrap();
        // no folding into inf; the expression survives for the evaluator to report
        assert_eq!(expr.simplify().to_string(), "x/0");
    }
}
