//! # Linear-system solve capability
//!
//! The System-of-equations mode: comma-separated equations are normalized to
//! "expression = 0" form, the free variables of all expressions are collected
//! in lexicographic order, and the coefficient matrix is assembled by
//! symbolic differentiation (the Jacobian of a linear system is its
//! coefficient matrix, and a non-constant partial derivative is the proof the
//! system is not linear). The square system is then solved with an LU
//! factorization; a singular or non-square system reports no solution.

use crate::symbolic::symbolic_engine::Expr;
use log::{info, warn};
use nalgebra::{DMatrix, DVector};
use std::collections::{BTreeSet, HashMap};

/// Parsed form of a system request: expressions normalized to `e_i = 0` plus
/// the ordered variable list they are solved for.
#[derive(Debug, Clone)]
pub struct LinearSystem {
    pub equations: Vec<Expr>,
    pub variables: Vec<String>,
}

/// Splits raw text on commas, rewrites `left = right` as `(left) - (right)`,
/// parses every chunk and collects the sorted union of free variables.
pub fn assemble_system(raw_text: &str) -> Result<LinearSystem, String> {
    let mut equations = Vec::new();
    let mut variables = BTreeSet::new();

    for chunk in raw_text.split(',') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            return Err("empty equation in system".to_string());
        }
        let normalized = if let Some((left, right)) = chunk.split_once('=') {
            format!("({}) - ({})", left.trim(), right.trim())
        } else {
            chunk.to_string()
        };
        let expr = Expr::parse_expression(&normalized)?;
        variables.extend(expr.free_variables());
        equations.push(expr);
    }

    Ok(LinearSystem {
        equations,
        variables: variables.into_iter().collect(),
    })
}

/// Solves the assembled system. `Ok(None)` means the system is consistent
/// machinery-wise but has no unique solution (singular or non-square);
/// `Err` means it is not linear at all.
pub fn solve_linear_system(system: &LinearSystem) -> Result<Option<DVector<f64>>, String> {
    let m = system.equations.len();
    let n = system.variables.len();
    if m != n {
        warn!("system has {} equations in {} unknowns, no unique solution", m, n);
        return Ok(None);
    }

    let zero_bindings: HashMap<String, f64> = system
        .variables
        .iter()
        .map(|name| (name.clone(), 0.0))
        .collect();

    let mut matrix = DMatrix::zeros(m, n);
    let mut rhs = DVector::zeros(m);
    for (i, equation) in system.equations.iter().enumerate() {
        for (j, variable) in system.variables.iter().enumerate() {
            let coefficient = equation.diff(variable).simplify();
            match coefficient {
                Expr::Const(value) => matrix[(i, j)] = value,
                other => {
                    return Err(format!(
                        "system is not linear: d({})/d{} = {}",
                        equation, variable, other
                    ));
                }
            }
        }
        // e_i(0, ..., 0) is the constant term of the linear form
        rhs[i] = -equation.eval_expression(&zero_bindings)?;
    }

    info!("solving {}x{} linear system for {:?}", m, n, system.variables);
    Ok(matrix.lu().solve(&rhs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_assemble_rewrites_equals() {
        let system = assemble_system("x + y = 5, x - y = 1").unwrap();
        assert_eq!(system.equations.len(), 2);
        assert_eq!(system.variables, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_assemble_variables_sorted() {
        let system = assemble_system("z + a = 1, b = 2").unwrap();
        assert_eq!(
            system.variables,
            vec!["a".to_string(), "b".to_string(), "z".to_string()]
        );
    }

    #[test]
    fn test_solve_two_by_two() {
        let system = assemble_system("x + y = 5, x - y = 1").unwrap();
        let solution = solve_linear_system(&system).unwrap().unwrap();
        assert_relative_eq!(solution[0], 3.0);
        assert_relative_eq!(solution[1], 2.0);
    }

    #[test]
    fn test_inconsistent_system() {
        let system = assemble_system("x + y = 1, x + y = 2").unwrap();
        assert!(solve_linear_system(&system).unwrap().is_none());
    }

    #[test]
    fn test_underdetermined_system() {
        let system = assemble_system("x + y = 1").unwrap();
        assert!(solve_linear_system(&system).unwrap().is_none());
    }

    #[test]
    fn test_nonlinear_system_rejected() {
        let system = assemble_system("x*y = 1, x - y = 0").unwrap();
        assert!(solve_linear_system(&system).is_err());
    }

    #[test]
    fn test_empty_chunk_rejected() {
        assert!(assemble_system("x + y = 1, , x - y = 0").is_err());
    }

    #[test]
    fn test_three_by_three() {
        let system = assemble_system("x + y + z = 6, x - y = -1, z = 3").unwrap();
        let solution = solve_linear_system(&system).unwrap().unwrap();
        assert_relative_eq!(solution[0], 1.0);
        assert_relative_eq!(solution[1], 2.0);
        assert_relative_eq!(solution[2], 3.0);
    }
}
