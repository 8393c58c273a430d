//! Safe evaluation of arithmetic expression strings
//!
//! Three stages, used in sequence by [`evaluate`]: a [tokenizer](tokenize)
//! turns the input string into a token stream, a [recursive-descent
//! parser](parse) builds an expression tree with standard precedence and
//! associativity, and an [evaluator](eval) folds the tree into an `f64`.
//! The grammar is fixed and closed; no part of the input is ever executed.
//!
//! Each call is a pure function of its input: the same string always
//! produces the same value or the same typed error, and nothing is shared
//! between calls.

pub mod error;
pub mod eval;
pub mod parse;
pub mod tokenize;

pub use error::Error;
pub use parse::ast::Expr;
pub use parse::Parser;
pub use tokenize::{Token, Tokenizer};

/// Evaluate an arithmetic expression to a single value
///
/// ```
/// assert_eq!(tally_expr::evaluate("2+3*4").unwrap(), 14.0);
/// assert!(tally_expr::evaluate("5/0").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<f64, Error> {
    let expr = parse(input)?;
    let value = eval::eval(&expr)?;

    Ok(value)
}

/// Tokenize an expression without parsing it
pub fn tokenize(input: &str) -> Result<Vec<Token>, tokenize::Error> {
    Tokenizer::new(input).collect()
}

/// Parse an expression into a syntax tree without evaluating it
pub fn parse(input: &str) -> Result<Expr, parse::Error> {
    Parser::new(Tokenizer::new(input)).parse()
}

#[cfg(test)]
mod tests {
    use tally_text::Span;

    use super::*;

    #[test]
    fn precedence() {
        assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
        assert_eq!(evaluate("2*3+4").unwrap(), 10.0);
    }

    #[test]
    fn left_associativity() {
        assert_eq!(evaluate("10-2-3").unwrap(), 5.0);
        assert_eq!(evaluate("8-3-2").unwrap(), 3.0);
        assert_eq!(evaluate("100/10/5").unwrap(), 2.0);
    }

    #[test]
    fn parentheses() {
        assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
        assert_eq!(evaluate("((1))").unwrap(), 1.0);
        assert_eq!(evaluate("2*(3+(4-1))").unwrap(), 12.0);
    }

    #[test]
    fn unary_minus() {
        assert_eq!(evaluate("-5+8").unwrap(), 3.0);
        assert_eq!(evaluate("2*-3").unwrap(), -6.0);
    }

    #[test]
    fn decimals() {
        assert_eq!(evaluate("1.5*4").unwrap(), 6.0);
        assert_eq!(evaluate("0.1+0.2").unwrap(), 0.1 + 0.2);
    }

    #[test]
    fn division_by_zero() {
        let Err(Error::EvalError(err)) = evaluate("5/0") else {
            panic!("expected an eval error");
        };
        assert!(matches!(
            err.kind,
            eval::ErrorKind::DivisionByZero { .. }
        ));
    }

    #[test]
    fn truncated_expression() {
        let Err(Error::ParseError(err)) = evaluate("2+") else {
            panic!("expected a parse error");
        };
        assert!(matches!(
            err.kind,
            parse::ErrorKind::UnexpectedEndOfInput(_)
        ));
    }

    #[test]
    fn unbalanced_parentheses() {
        let Err(Error::ParseError(err)) = evaluate("2+(3*4") else {
            panic!("expected a parse error");
        };
        assert_eq!(err.kind, parse::ErrorKind::UnbalancedParen);
    }

    #[test]
    fn empty_expression() {
        let Err(Error::ParseError(err)) = evaluate("") else {
            panic!("expected a parse error");
        };
        assert_eq!(err.kind, parse::ErrorKind::EmptyExpression);
    }

    #[test]
    fn invalid_character() {
        let Err(Error::ParseError(err)) = evaluate("2+3x") else {
            panic!("expected a parse error");
        };
        assert_eq!(
            err.kind,
            parse::ErrorKind::TokenizeError(tokenize::ErrorKind::InvalidCharacter('x'))
        );
        assert_eq!(err.span, Span::new(3, 4));
    }

    #[test]
    fn idempotence() {
        for input in ["2+3*4", "5/0", "2+", ""] {
            assert_eq!(evaluate(input), evaluate(input));
        }
    }

    #[test]
    fn tokenize_surface() {
        let tokens = tokenize("1+2").unwrap();
        assert_eq!(tokens.len(), 3);

        let err = tokenize("1+$").unwrap_err();
        assert_eq!(err.kind, tokenize::ErrorKind::InvalidCharacter('$'));
    }
}
