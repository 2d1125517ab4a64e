//! # Polynomial root finding
//!
//! The "solve capability" behind the Algebraic mode: the input expression is
//! treated as a polynomial in one variable set equal to zero, and all roots
//! are returned.
//!
//! Coefficients are extracted by structural recursion over the expression
//! tree (sums, differences, products via convolution, constant divisors,
//! non-negative integer powers). Degrees 1 and 2 use the closed-form
//! formulas; higher degrees go through the companion matrix and nalgebra's
//! eigenvalue solver. Roots come back as complex numbers in a deterministic
//! (re, im) order.

use crate::symbolic::symbolic_engine::{Expr, format_const};
use log::info;
use nalgebra::DMatrix;
use num_complex::Complex64;

// Coefficients below this magnitude are treated as zero when trimming the
// leading terms; eigenvalue noise below EIGEN_CLEANUP snaps to the nearest
// integer.
const COEFF_EPS: f64 = 1e-12;
const EIGEN_CLEANUP: f64 = 1e-8;

/// Extracts the coefficients of `expr` as a polynomial in `var`, ascending
/// by degree. Non-polynomial structure or a foreign variable is an error.
pub fn poly_coefficients(expr: &Expr, var: &str) -> Result<Vec<f64>, String> {
    match expr {
        Expr::Const(c) => Ok(vec![*c]),
        Expr::Var(name) => {
            if name == var {
                Ok(vec![0.0, 1.0])
            } else {
                Err(format!(
                    "unexpected variable '{}': single-equation modes solve in '{}'",
                    name, var
                ))
            }
        }
        Expr::Add(lhs, rhs) => {
            let a = poly_coefficients(lhs, var)?;
            let b = poly_coefficients(rhs, var)?;
            Ok(add_coeffs(&a, &b, 1.0))
        }
        Expr::Sub(lhs, rhs) => {
            let a = poly_coefficients(lhs, var)?;
            let b = poly_coefficients(rhs, var)?;
            Ok(add_coeffs(&a, &b, -1.0))
        }
        Expr::Mul(lhs, rhs) => {
            let a = poly_coefficients(lhs, var)?;
            let b = poly_coefficients(rhs, var)?;
            Ok(convolve(&a, &b))
        }
        Expr::Div(lhs, rhs) => {
            let b = poly_coefficients(rhs, var)?;
            if b.len() == 1 && b[0] != 0.0 {
                let a = poly_coefficients(lhs, var)?;
                Ok(a.iter().map(|c| c / b[0]).collect())
            } else {
                Err(format!("non-constant divisor in polynomial: {}", rhs))
            }
        }
        Expr::Pow(base, exp) => {
            if let Expr::Const(n) = exp.as_ref() {
                if *n >= 0.0 && n.fract() == 0.0 {
                    let base_coeffs = poly_coefficients(base, var)?;
                    let mut result = vec![1.0];
                    for _ in 0..(*n as usize) {
                        result = convolve(&result, &base_coeffs);
                    }
                    return Ok(result);
                }
            }
            Err(format!(
                "exponent must be a non-negative integer, got {}",
                exp
            ))
        }
        Expr::Exp(_) | Expr::Ln(_) | Expr::sin(_) | Expr::cos(_) | Expr::tg(_) => Err(format!(
            "cannot solve non-polynomial equation: {} = 0",
            expr
        )),
    }
}

fn add_coeffs(a: &[f64], b: &[f64], sign: f64) -> Vec<f64> {
    let mut result = vec![0.0; a.len().max(b.len())];
    for (i, c) in a.iter().enumerate() {
        result[i] += c;
    }
    for (i, c) in b.iter().enumerate() {
        result[i] += sign * c;
    }
    result
}

fn convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut result = vec![0.0; a.len() + b.len() - 1];
    for (i, ca) in a.iter().enumerate() {
        for (j, cb) in b.iter().enumerate() {
            result[i + j] += ca * cb;
        }
    }
    result
}

/// Solves `expr = 0` for `var`, returning all roots (complex included) in
/// (re, im) order. A degree-zero equation has no roots and yields an empty
/// vector.
pub fn solve_polynomial(expr: &Expr, var: &str) -> Result<Vec<Complex64>, String> {
    let mut coeffs = poly_coefficients(expr, var)?;
    while coeffs.len() > 1 && coeffs.last().is_some_and(|c| c.abs() < COEFF_EPS) {
        coeffs.pop();
    }
    let degree = coeffs.len().saturating_sub(1);
    info!("solving polynomial of degree {} in '{}'", degree, var);

    let mut roots = match degree {
        0 => Vec::new(),
        1 => vec![Complex64::new(-coeffs[0] / coeffs[1], 0.0)],
        2 => quadratic_roots(coeffs[0], coeffs[1], coeffs[2]),
        _ => companion_roots(&coeffs),
    };
    roots.sort_by(|a, b| {
        a.re.partial_cmp(&b.re)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.im.partial_cmp(&b.im).unwrap_or(std::cmp::Ordering::Equal))
    });
    Ok(roots)
}

fn quadratic_roots(c0: f64, c1: f64, c2: f64) -> Vec<Complex64> {
    let discriminant = c1 * c1 - 4.0 * c2 * c0;
    if discriminant >= 0.0 {
        let sqrt_d = discriminant.sqrt();
        vec![
            Complex64::new((-c1 - sqrt_d) / (2.0 * c2), 0.0),
            Complex64::new((-c1 + sqrt_d) / (2.0 * c2), 0.0),
        ]
    } else {
        let re = -c1 / (2.0 * c2);
        let im = (-discriminant).sqrt() / (2.0 * c2);
        vec![Complex64::new(re, -im.abs()), Complex64::new(re, im.abs())]
    }
}

// Eigenvalues of the companion matrix of the monic polynomial.
fn companion_roots(coeffs: &[f64]) -> Vec<Complex64> {
    let degree = coeffs.len() - 1;
    let leading = coeffs[degree];
    let companion = DMatrix::from_fn(degree, degree, |i, j| {
        if j == degree - 1 {
            -coeffs[i] / leading
        } else if i == j + 1 {
            1.0
        } else {
            0.0
        }
    });
    companion
        .complex_eigenvalues()
        .iter()
        .map(|eigenvalue| {
            Complex64::new(cleanup(eigenvalue.re), cleanup(eigenvalue.im))
        })
        .collect()
}

fn cleanup(value: f64) -> f64 {
    if (value - value.round()).abs() < EIGEN_CLEANUP {
        // normalizes -0.0 as well
        value.round() + 0.0
    } else {
        value
    }
}

/// Formats a root for display: real roots print as plain numbers
/// (near-integers without a fractional part), complex roots as `a + b*i`.
pub fn format_root(root: &Complex64) -> String {
    if root.im.abs() < EIGEN_CLEANUP {
        format_real(root.re)
    } else if root.im > 0.0 {
        format!("{} + {}*i", format_real(root.re), format_real(root.im))
    } else {
        format!("{} - {}*i", format_real(root.re), format_real(-root.im))
    }
}

fn format_real(value: f64) -> String {
    if (value - value.round()).abs() < EIGEN_CLEANUP {
        format_const(value.round() + 0.0)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn parse(input: &str) -> Expr {
        Expr::parse_expression(input).unwrap()
    }

    #[test]
    fn test_coefficients_quadratic() {
        let coeffs = poly_coefficients(&parse("x**2 - 4"), "x").unwrap();
        assert_eq!(coeffs, vec![-4.0, 0.0, 1.0]);
    }

    #[test]
    fn test_coefficients_product() {
        // (x - 1)*(x + 2) = x**2 + x - 2
        let coeffs = poly_coefficients(&parse("(x - 1)*(x + 2)"), "x").unwrap();
        assert_eq!(coeffs, vec![-2.0, 1.0, 1.0]);
    }

    #[test]
    fn test_quadratic_real_roots() {
        let roots = solve_polynomial(&parse("x**2 - 4"), "x").unwrap();
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0].re, -2.0);
        assert_relative_eq!(roots[1].re, 2.0);
        assert_relative_eq!(roots[0].im, 0.0);
    }

    #[test]
    fn test_linear_root() {
        let roots = solve_polynomial(&parse("2*x - 6"), "x").unwrap();
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0].re, 3.0);
    }

    #[test]
    fn test_cubic_roots() {
        // (x-1)(x-2)(x-3) = x**3 - 6x**2 + 11x - 6
        let roots = solve_polynomial(&parse("x**3 - 6*x**2 + 11*x - 6"), "x").unwrap();
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0].re, 1.0, epsilon = 1e-6);
        assert_relative_eq!(roots[1].re, 2.0, epsilon = 1e-6);
        assert_relative_eq!(roots[2].re, 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_complex_roots() {
        let roots = solve_polynomial(&parse("x**2 + 1"), "x").unwrap();
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0].im, -1.0);
        assert_relative_eq!(roots[1].im, 1.0);
        assert_eq!(format_root(&roots[1]), "0 + 1*i");
    }

    #[test]
    fn test_degree_zero_has_no_roots() {
        assert!(solve_polynomial(&parse("5"), "x").unwrap().is_empty());
    }

    #[test]
    fn test_non_polynomial_rejected() {
        assert!(solve_polynomial(&parse("sin(x)"), "x").is_err());
    }

    #[test]
    fn test_foreign_variable_rejected() {
        assert!(solve_polynomial(&parse("x + y"), "x").is_err());
    }

    #[test]
    fn test_format_root_integers() {
        assert_eq!(format_root(&Complex64::new(-2.0, 0.0)), "-2");
        assert_eq!(format_root(&Complex64::new(2.0000000001, 0.0)), "2");
        assert_eq!(format_root(&Complex64::new(0.5, 0.0)), "0.5");
    }
}
