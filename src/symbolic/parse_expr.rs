//! a module turns a String expression into a symbolic expression
//!
//! Tokenizes the input and runs a recursive-descent parse over the usual
//! precedence ladder: `+ -` < `* /` < `** ^` (right-associative) < atoms.
//! Unary minus, parentheses, float literals, variables and the function set
//! of the engine (exp, ln/log, sin, cos, tg/tan) are supported. Malformed
//! input (unbalanced parentheses, dangling operators, unknown characters)
//! comes back as `Err`, never as a panic, so the dispatcher can surface it
//! as a user-visible message.
//!
//! # Example
//! ```
//! use RustedEqSolver::symbolic::symbolic_engine::Expr;
//! let parsed = Expr::parse_expression("x**2 - 4").unwrap();
//! assert_eq!(parsed.to_string(), "x**2 - 4");
//! ```

use crate::symbolic::symbolic_engine::Expr;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Num(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Power,
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<Token>, String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' => {
                i += 1;
            }
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    tokens.push(Token::Power);
                    i += 2;
                } else {
                    tokens.push(Token::Star);
                    i += 1;
                }
            }
            '^' => {
                tokens.push(Token::Power);
                i += 1;
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            _ if c.is_ascii_digit() || c == '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| format!("invalid number literal '{}'", literal))?;
                tokens.push(Token::Num(value));
            }
            _ if c.is_alphabetic() => {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push(Token::Ident(chars[start..i].iter().collect()));
            }
            _ => return Err(format!("unexpected character '{}'", c)),
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, token: Token) -> Result<(), String> {
        match self.advance() {
            Some(found) if found == token => Ok(()),
            Some(found) => Err(format!("expected {:?}, found {:?}", token, found)),
            None => Err(format!("expected {:?}, found end of input", token)),
        }
    }

    // expr := term (('+'|'-') term)*
    fn parse_expr(&mut self) -> Result<Expr, String> {
        let mut lhs = self.parse_term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.advance();
                    let rhs = self.parse_term()?;
                    lhs = Expr::Add(lhs.boxed(), rhs.boxed());
                }
                Some(Token::Minus) => {
                    self.advance();
                    let rhs = self.parse_term()?;
                    lhs = Expr::Sub(lhs.boxed(), rhs.boxed());
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    // term := unary (('*'|'/') unary)*
    fn parse_term(&mut self) -> Result<Expr, String> {
        let mut lhs = self.parse_unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.advance();
                    let rhs = self.parse_unary()?;
                    lhs = Expr::Mul(lhs.boxed(), rhs.boxed());
                }
                Some(Token::Slash) => {
                    self.advance();
                    let rhs = self.parse_unary()?;
                    lhs = Expr::Div(lhs.boxed(), rhs.boxed());
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    // unary := '-' unary | power
    fn parse_unary(&mut self) -> Result<Expr, String> {
        if self.peek() == Some(&Token::Minus) {
            self.advance();
            let inner = self.parse_unary()?;
            // fold a literal right away so "-2" is Const(-2), not -1 * 2
            return Ok(match inner {
                Expr::Const(val) => Expr::Const(-val),
                other => Expr::Mul(Expr::Const(-1.0).boxed(), other.boxed()),
            });
        }
        self.parse_power()
    }

    // power := atom ('**' unary)?   (right-associative, exponent may be signed)
    fn parse_power(&mut self) -> Result<Expr, String> {
        let base = self.parse_atom()?;
        if self.peek() == Some(&Token::Power) {
            self.advance();
            let exponent = self.parse_unary()?;
            return Ok(Expr::Pow(base.boxed(), exponent.boxed()));
        }
        Ok(base)
    }

    // atom := number | variable | function '(' expr ')' | '(' expr ')'
    fn parse_atom(&mut self) -> Result<Expr, String> {
        match self.advance() {
            Some(Token::Num(value)) => Ok(Expr::Const(value)),
            Some(Token::Ident(name)) => {
                if self.peek() == Some(&Token::LParen) {
                    self.advance();
                    let argument = self.parse_expr()?;
                    self.expect(Token::RParen)?;
                    let arg = argument.boxed();
                    match name.as_str() {
                        "exp" => Ok(Expr::Exp(arg)),
                        "ln" | "log" => Ok(Expr::Ln(arg)),
                        "sin" => Ok(Expr::sin(arg)),
                        "cos" => Ok(Expr::cos(arg)),
                        "tg" | "tan" => Ok(Expr::tg(arg)),
                        _ => Err(format!("unknown function '{}'", name)),
                    }
                } else {
                    Ok(Expr::Var(name))
                }
            }
            Some(Token::LParen) => {
                let inner = self.parse_expr()?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            Some(token) => Err(format!("unexpected token {:?}", token)),
            None => Err("unexpected end of expression".to_string()),
        }
    }
}

/// Parses a string into a symbolic expression.
pub fn parse_expression_str(input: &str) -> Result<Expr, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty expression".to_string());
    }
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_expr()?;
    match parser.peek() {
        None => Ok(expr),
        Some(token) => Err(format!("unexpected trailing token {:?}", token)),
    }
}

impl Expr {
    /// String to symbolic expression; entry point used by the dispatcher.
    pub fn parse_expression(input: &str) -> Result<Expr, String> {
        parse_expression_str(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_constant() {
        let expr = parse_expression_str("42").unwrap();
        assert_eq!(expr, Expr::Const(42.0));
    }

    #[test]
    fn test_parse_variable() {
        let expr = parse_expression_str("x").unwrap();
        assert_eq!(expr, Expr::Var("x".to_string()));
    }

    #[test]
    fn test_parse_addition() {
        let expr = parse_expression_str("x + 2").unwrap();
        assert_eq!(
            expr,
            Expr::Add(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_power_double_star() {
        let expr = parse_expression_str("x**2").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_power_caret() {
        assert_eq!(
            parse_expression_str("x^2").unwrap(),
            parse_expression_str("x**2").unwrap()
        );
    }

    #[test]
    fn test_parse_precedence() {
        let expr = parse_expression_str("2 + 3*x").unwrap();
        assert_eq!(
            expr,
            Expr::Add(
                Box::new(Expr::Const(2.0)),
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(3.0)),
                    Box::new(Expr::Var("x".to_string()))
                ))
            )
        );
    }

    #[test]
    fn test_parse_brackets() {
        let expr = parse_expression_str("(x + y) * z").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Add(
                    Box::new(Expr::Var("x".to_string())),
                    Box::new(Expr::Var("y".to_string()))
                )),
                Box::new(Expr::Var("z".to_string()))
            )
        );
    }

    #[test]
    fn test_parse_unary_minus() {
        let expr = parse_expression_str("-x").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Const(-1.0)),
                Box::new(Expr::Var("x".to_string()))
            )
        );
        assert_eq!(parse_expression_str("-2").unwrap(), Expr::Const(-2.0));
    }

    #[test]
    fn test_parse_unary_minus_binds_below_power() {
        // -x**2 must parse as -(x**2)
        let expr = parse_expression_str("-x**2").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Const(-1.0)),
                Box::new(Expr::Pow(
                    Box::new(Expr::Var("x".to_string())),
                    Box::new(Expr::Const(2.0))
                ))
            )
        );
    }

    #[test]
    fn test_parse_functions() {
        assert_eq!(
            parse_expression_str("sin(x)").unwrap(),
            Expr::sin(Box::new(Expr::Var("x".to_string())))
        );
        assert_eq!(
            parse_expression_str("exp(x)").unwrap(),
            Expr::Exp(Box::new(Expr::Var("x".to_string())))
        );
        assert_eq!(
            parse_expression_str("log(x)").unwrap(),
            Expr::Ln(Box::new(Expr::Var("x".to_string())))
        );
        assert_eq!(
            parse_expression_str("tan(x)").unwrap(),
            Expr::tg(Box::new(Expr::Var("x".to_string())))
        );
    }

    #[test]
    fn test_parse_nested_functions() {
        let expr = parse_expression_str("sin(cos(x))").unwrap();
        assert_eq!(
            expr,
            Expr::sin(Box::new(Expr::cos(Box::new(Expr::Var("x".to_string())))))
        );
    }

    #[test]
    fn test_parse_right_associative_power() {
        // 2**3**2 = 2**(3**2)
        let expr = parse_expression_str("2**3**2").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(
                Box::new(Expr::Const(2.0)),
                Box::new(Expr::Pow(
                    Box::new(Expr::Const(3.0)),
                    Box::new(Expr::Const(2.0))
                ))
            )
        );
    }

    #[test]
    fn test_unmatched_brackets() {
        assert!(parse_expression_str("(x + y").is_err());
        assert!(parse_expression_str("x + y)").is_err());
    }

    #[test]
    fn test_invalid_expression() {
        assert!(parse_expression_str("x +").is_err());
        assert!(parse_expression_str("* x").is_err());
        assert!(parse_expression_str("x $ y").is_err());
        assert!(parse_expression_str("").is_err());
    }

    #[test]
    fn test_unknown_function() {
        assert!(parse_expression_str("sinh(x)").is_err());
    }
}
