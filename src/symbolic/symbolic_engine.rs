//! # Symbolic Engine Module
//!
//! Core symbolic mathematics engine for creating and manipulating symbolic
//! expressions. Serves as the foundation the equation dispatcher builds on:
//! parsing produces `Expr` trees, differentiation/integration/solving consume
//! them, and the plot renderer evaluates them numerically.
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! The core symbolic expression type supporting:
//! - **Variables**: `Var(String)` - symbolic variables like "x", "y"
//! - **Constants**: `Const(f64)` - numerical constants
//! - **Operations**: `Add`, `Sub`, `Mul`, `Div`, `Pow` - basic arithmetic
//! - **Functions**: `Exp`, `Ln`, `sin`, `cos`, `tg` - mathematical functions
//!
//! ### Key Methods
//! - `parse_expression(input)` - string to symbolic expression (see parse_expr)
//! - `diff(var)` - analytical differentiation
//! - `integrate(var)` - indefinite integration
//! - `simplify()` - algebraic simplification
//! - `lambdify1D(var)` - convert to executable function
//! - `free_variables()` - sorted free-variable names
//!
//! `Display` renders the expression with `**` for powers and the minimal
//! parenthesization needed for precedence, so simplified results read the way
//! a user typed them in ("2*x", "x**2 + 1").

#![allow(non_camel_case_types)]

use std::fmt;

/// Core symbolic expression enum representing mathematical expressions as an
/// abstract syntax tree. Binary variants use Box<Expr> for recursive nesting.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable with a name (e.g., "x", "y")
    Var(String),
    /// Numerical constant value
    Const(f64),
    /// Addition operation: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction operation: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division operation: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Power operation: base ** exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Exponential function: e^x
    Exp(Box<Expr>),
    /// Natural logarithm: ln(x)
    Ln(Box<Expr>),
    /// Sine function: sin(x)
    sin(Box<Expr>),
    /// Cosine function: cos(x)
    cos(Box<Expr>),
    /// Tangent function: tan(x) - mathematical notation 'tg'
    tg(Box<Expr>),
}

// Operator precedence levels used by Display: additive = 1, multiplicative = 2,
// power = 3, atoms and function calls = 4.
const PREC_ADD: u8 = 1;
const PREC_MUL: u8 = 2;
const PREC_POW: u8 = 3;
const PREC_ATOM: u8 = 4;

/// Formats a constant: integer-valued constants print without a trailing ".0".
pub fn format_const(val: f64) -> String {
    if val == val.trunc() && val.abs() < 1e15 {
        format!("{}", val as i64)
    } else {
        format!("{}", val)
    }
}

impl Expr {
    fn precedence(&self) -> u8 {
        match self {
            Expr::Add(_, _) | Expr::Sub(_, _) => PREC_ADD,
            Expr::Mul(_, _) | Expr::Div(_, _) => PREC_MUL,
            Expr::Pow(_, _) => PREC_POW,
            Expr::Const(val) if *val < 0.0 => PREC_ADD,
            _ => PREC_ATOM,
        }
    }

    // Renders the subtree, parenthesizing when its precedence is below what
    // the surrounding context requires.
    fn fmt_prec(&self, f: &mut fmt::Formatter, min_prec: u8) -> fmt::Result {
        let needs_parens = self.precedence() < min_prec;
        if needs_parens {
            write!(f, "(")?;
        }
        match self {
            Expr::Var(name) => write!(f, "{}", name)?,
            Expr::Const(val) => write!(f, "{}", format_const(*val))?,
            Expr::Add(lhs, rhs) => {
                lhs.fmt_prec(f, PREC_ADD)?;
                write!(f, " + ")?;
                rhs.fmt_prec(f, PREC_ADD)?;
            }
            Expr::Sub(lhs, rhs) => {
                lhs.fmt_prec(f, PREC_ADD)?;
                write!(f, " - ")?;
                rhs.fmt_prec(f, PREC_MUL)?;
            }
            Expr::Mul(lhs, rhs) => {
                lhs.fmt_prec(f, PREC_MUL)?;
                write!(f, "*")?;
                rhs.fmt_prec(f, PREC_MUL)?;
            }
            Expr::Div(lhs, rhs) => {
                lhs.fmt_prec(f, PREC_MUL)?;
                write!(f, "/")?;
                rhs.fmt_prec(f, PREC_POW)?;
            }
            Expr::Pow(base, exp) => {
                base.fmt_prec(f, PREC_ATOM)?;
                write!(f, "**")?;
                exp.fmt_prec(f, PREC_POW)?;
            }
            Expr::Exp(expr) => {
                write!(f, "exp(")?;
                expr.fmt_prec(f, 0)?;
                write!(f, ")")?;
            }
            Expr::Ln(expr) => {
                write!(f, "ln(")?;
                expr.fmt_prec(f, 0)?;
                write!(f, ")")?;
            }
            Expr::sin(expr) => {
                write!(f, "sin(")?;
                expr.fmt_prec(f, 0)?;
                write!(f, ")")?;
            }
            Expr::cos(expr) => {
                write!(f, "cos(")?;
                expr.fmt_prec(f, 0)?;
                write!(f, ")")?;
            }
            Expr::tg(expr) => {
                write!(f, "tg(")?;
                expr.fmt_prec(f, 0)?;
                write!(f, ")")?;
            }
        }
        if needs_parens {
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_prec(f, 0)
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

impl Expr {
    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Creates power expression self**rhs.
    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    /// Checks if expression is exactly zero (constant 0.0).
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Const(val) if *val == 0.0)
    }

    /// Substitutes a variable with a constant value throughout the expression.
    pub fn set_variable(&self, var: &str, value: f64) -> Expr {
        match self {
            Expr::Var(name) if name == var => Expr::Const(value),
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => Expr::Add(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Sub(lhs, rhs) => Expr::Sub(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Mul(lhs, rhs) => Expr::Mul(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Pow(base, exp) => Expr::Pow(
                Box::new(base.set_variable(var, value)),
                Box::new(exp.set_variable(var, value)),
            ),
            Expr::Exp(expr) => Expr::Exp(Box::new(expr.set_variable(var, value))),
            Expr::Ln(expr) => Expr::Ln(Box::new(expr.set_variable(var, value))),
            Expr::sin(expr) => Expr::sin(Box::new(expr.set_variable(var, value))),
            Expr::cos(expr) => Expr::cos(Box::new(expr.set_variable(var, value))),
            Expr::tg(expr) => Expr::tg(Box::new(expr.set_variable(var, value))),
        }
    }

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Expr::Var(name) => name == var_name,
            Expr::Const(_) => false,
            Expr::Add(left, right)
            | Expr::Sub(left, right)
            | Expr::Mul(left, right)
            | Expr::Div(left, right)
            | Expr::Pow(left, right) => {
                left.contains_variable(var_name) || right.contains_variable(var_name)
            }
            Expr::Exp(expr) | Expr::Ln(expr) | Expr::sin(expr) | Expr::cos(expr)
            | Expr::tg(expr) => expr.contains_variable(var_name),
        }
    }

    /// Returns the free-variable names of the expression, lexicographically
    /// sorted and deduplicated. The System-of-equations mode relies on this
    /// ordering to line variables up with solution components.
    pub fn free_variables(&self) -> Vec<String> {
        let mut names = std::collections::BTreeSet::new();
        self.collect_variables(&mut names);
        names.into_iter().collect()
    }

    fn collect_variables(&self, names: &mut std::collections::BTreeSet<String>) {
        match self {
            Expr::Var(name) => {
                names.insert(name.clone());
            }
            Expr::Const(_) => {}
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs) => {
                lhs.collect_variables(names);
                rhs.collect_variables(names);
            }
            Expr::Exp(expr) | Expr::Ln(expr) | Expr::sin(expr) | Expr::cos(expr)
            | Expr::tg(expr) => expr.collect_variables(names),
        }
    }
}
