//! # Symbolic Integration Module
//!
//! Indefinite integration for the fragment of `Expr` the Integration mode
//! needs: polynomials, constant factors and divisors, exponentials and
//! trigonometric functions of linear arguments. Anything outside the
//! fragment comes back as an `Err` the dispatcher surfaces as
//! "Error: Cannot integrate ...". The constant of integration is not part
//! of the returned expression; the dispatcher appends " + C" when formatting.

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// Main integration method - integrates with respect to a variable.
    /// Returns the indefinite integral (without constant of integration).
    pub fn integrate(&self, var: &str) -> Result<Expr, String> {
        match self {
            // ∫ c dx = c*x
            Expr::Const(c) => Ok(Expr::Const(*c) * Expr::Var(var.to_string())),

            // ∫ x dx = x²/2, ∫ y dx = y*x (if y ≠ x)
            Expr::Var(name) => {
                if name == var {
                    Ok(Expr::Pow(
                        Box::new(Expr::Var(var.to_string())),
                        Box::new(Expr::Const(2.0)),
                    ) / Expr::Const(2.0))
                } else {
                    Ok(Expr::Var(name.clone()) * Expr::Var(var.to_string()))
                }
            }

            // ∫ (f + g) dx = ∫ f dx + ∫ g dx
            Expr::Add(lhs, rhs) => {
                let lhs_int = lhs.integrate(var)?;
                let rhs_int = rhs.integrate(var)?;
                Ok(lhs_int + rhs_int)
            }

            // ∫ (f - g) dx = ∫ f dx - ∫ g dx
            Expr::Sub(lhs, rhs) => {
                let lhs_int = lhs.integrate(var)?;
                let rhs_int = rhs.integrate(var)?;
                Ok(lhs_int - rhs_int)
            }

            Expr::Mul(lhs, rhs) => self.integrate_multiplication(lhs, rhs, var),

            Expr::Div(lhs, rhs) => self.integrate_division(lhs, rhs, var),

            Expr::Pow(base, exp) => self.integrate_power(base, exp, var),

            Expr::Exp(expr) => self.integrate_exponential(expr, var),

            Expr::Ln(expr) => self.integrate_logarithm(expr, var),

            // ∫ sin(f) dx
            Expr::sin(expr) => self.integrate_sin(expr, var),

            // ∫ cos(f) dx
            Expr::cos(expr) => self.integrate_cos(expr, var),

            // ∫ tg(x) dx = -ln(cos(x))
            Expr::tg(expr) => {
                if let Expr::Var(x) = expr.as_ref() {
                    if x == var {
                        return Ok(Expr::Mul(
                            Box::new(Expr::Const(-1.0)),
                            Box::new(Expr::Ln(Box::new(Expr::cos(expr.clone())))),
                        ));
                    }
                }
                if !expr.contains_variable(var) {
                    return Ok(self.clone() * Expr::Var(var.to_string()));
                }
                Err(format!("Cannot integrate tg({})", expr))
            }
        }
    }

    /// Constant factors move outside the integral; other products are outside
    /// the supported fragment.
    fn integrate_multiplication(&self, lhs: &Expr, rhs: &Expr, var: &str) -> Result<Expr, String> {
        if !lhs.contains_variable(var) {
            let rhs_int = rhs.integrate(var)?;
            return Ok(lhs.clone() * rhs_int);
        }

        if !rhs.contains_variable(var) {
            let lhs_int = lhs.integrate(var)?;
            return Ok(rhs.clone() * lhs_int);
        }

        Err(format!("Cannot integrate product: {} * {}", lhs, rhs))
    }

    fn integrate_division(&self, lhs: &Expr, rhs: &Expr, var: &str) -> Result<Expr, String> {
        // ∫ f(x)/c dx = (1/c) * ∫ f(x) dx
        if !rhs.contains_variable(var) {
            let lhs_int = lhs.integrate(var)?;
            return Ok(lhs_int / rhs.clone());
        }

        // ∫ 1/x dx = ln|x|
        if let (Expr::Const(c), Expr::Var(x)) = (lhs, rhs) {
            if *c == 1.0 && x == var {
                return Ok(Expr::Ln(Box::new(Expr::Var(var.to_string()))));
            }
        }

        Err(format!("Cannot integrate division: {} / {}", lhs, rhs))
    }

    fn integrate_power(&self, base: &Expr, exp: &Expr, var: &str) -> Result<Expr, String> {
        // ∫ x^n dx where n is constant
        if let (Expr::Var(x), Expr::Const(n)) = (base, exp) {
            if x == var {
                if (*n - (-1.0)).abs() < f64::EPSILON {
                    // ∫ x^(-1) dx = ln|x|
                    return Ok(Expr::Ln(Box::new(Expr::Var(var.to_string()))));
                } else {
                    // ∫ x^n dx = x^(n+1)/(n+1)
                    let new_exp = Expr::Const(n + 1.0);
                    let integrated = Expr::Pow(
                        Box::new(Expr::Var(var.to_string())),
                        Box::new(new_exp.clone()),
                    ) / new_exp;
                    return Ok(integrated);
                }
            }
        }

        // base free of the variable: the whole power is a constant
        if !base.contains_variable(var) && !exp.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }

        Err(format!("Cannot integrate power: ({})**({})", base, exp))
    }

    fn integrate_exponential(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        // ∫ e^x dx = e^x
        if let Expr::Var(x) = expr {
            if x == var {
                return Ok(Expr::Exp(Box::new(Expr::Var(var.to_string()))));
            }
        }

        // ∫ e^(a*x) dx = (1/a) * e^(a*x)
        if let Some(a) = linear_coefficient(expr, var) {
            return Ok(Expr::Exp(Box::new(expr.clone())) / Expr::Const(a));
        }

        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }

        Err(format!("Cannot integrate exponential: exp({})", expr))
    }

    /// ∫ ln(x) dx = x*ln(x) - x (integration by parts)
    fn integrate_logarithm(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        if let Expr::Var(x) = expr {
            if x == var {
                let x_var = Expr::Var(var.to_string());
                return Ok(x_var.clone() * Expr::Ln(Box::new(x_var.clone())) - x_var);
            }
        }

        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }

        Err(format!("Cannot integrate logarithm: ln({})", expr))
    }

    fn integrate_sin(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        // ∫ sin(x) dx = -cos(x)
        if let Expr::Var(x) = expr {
            if x == var {
                return Ok(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::cos(Box::new(Expr::Var(var.to_string())))),
                ));
            }
        }

        // ∫ sin(a*x) dx = -cos(a*x)/a
        if let Some(a) = linear_coefficient(expr, var) {
            return Ok(Expr::Mul(
                Box::new(Expr::Const(-1.0)),
                Box::new(Expr::cos(Box::new(expr.clone()))),
            ) / Expr::Const(a));
        }

        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }

        Err(format!("Cannot integrate sin({})", expr))
    }

    fn integrate_cos(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        // ∫ cos(x) dx = sin(x)
        if let Expr::Var(x) = expr {
            if x == var {
                return Ok(Expr::sin(Box::new(Expr::Var(var.to_string()))));
            }
        }

        // ∫ cos(a*x) dx = sin(a*x)/a
        if let Some(a) = linear_coefficient(expr, var) {
            return Ok(Expr::sin(Box::new(expr.clone())) / Expr::Const(a));
        }

        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }

        Err(format!("Cannot integrate cos({})", expr))
    }
}

// Recognizes a*x (either operand order) and returns a; None otherwise.
fn linear_coefficient(expr: &Expr, var: &str) -> Option<f64> {
    if let Expr::Mul(lhs, rhs) = expr {
        if let (Expr::Const(a), Expr::Var(x)) = (lhs.as_ref(), rhs.as_ref()) {
            if x == var && *a != 0.0 {
                return Some(*a);
            }
        }
        if let (Expr::Var(x), Expr::Const(a)) = (lhs.as_ref(), rhs.as_ref()) {
            if x == var && *a != 0.0 {
                return Some(*a);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_linear() {
        let f = Expr::parse_expression("2*x").unwrap();
        assert_eq!(f.integrate("x").unwrap().simplify().to_string(), "x**2");
    }

    #[test]
    fn test_integrate_constant() {
        let f = Expr::parse_expression("3").unwrap();
        assert_eq!(f.integrate("x").unwrap().simplify().to_string(), "3*x");
    }

    #[test]
    fn test_integrate_power() {
        let f = Expr::parse_expression("x**2").unwrap();
        assert_eq!(f.integrate("x").unwrap().simplify().to_string(), "x**3/3");
    }

    #[test]
    fn test_integrate_reciprocal() {
        let f = Expr::parse_expression("1/x").unwrap();
        assert_eq!(f.integrate("x").unwrap().simplify().to_string(), "ln(x)");
    }

    #[test]
    fn test_integrate_sum() {
        let f = Expr::parse_expression("2*x + 3").unwrap();
        assert_eq!(
            f.integrate("x").unwrap().simplify().to_string(),
            "x**2 + 3*x"
        );
    }

    #[test]
    fn test_integrate_cos() {
        let f = Expr::parse_expression("cos(x)").unwrap();
        assert_eq!(f.integrate("x").unwrap().simplify().to_string(), "sin(x)");
    }

    #[test]
    fn test_integrate_exp_linear_argument() {
        let f = Expr::parse_expression("exp(2*x)").unwrap();
        assert_eq!(
            f.integrate("x").unwrap().simplify().to_string(),
            "exp(2*x)/2"
        );
    }

    #[test]
    fn test_integrate_unsupported_product() {
        let f = Expr::parse_expression("x * sin(x)").unwrap();
        assert!(f.integrate("x").is_err());
    }
}
