use std::convert::TryFrom;

use tally_text::Span;

use crate::parse::ast::*;
use crate::parse::error::*;
use crate::parse::input::Input;
use crate::tokenize::{self, Token, TokenKind};

/// Parse arithmetic expressions from a [token stream](tokenize::Tokenizer)
///
/// Uses a recursive-descent approach, with one method per rule; the
/// grammar is free of left-recursion, so every rule with repetition is a
/// loop that folds the operands left-to-right.
///
/// # Grammar:
///
/// ```grammar
/// expression ->
///     | term (('+' | '-') term)*
/// term ->
///     | factor (('*' | '/') factor)*
/// factor ->
///     | NUMBER
///     | '(' expression ')'
///     | '-' factor
/// ```
pub struct Parser<'a> {
    input: Input<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser from a token iterator
    ///
    /// Since [`Tokenizer`](tokenize::Tokenizer) implements Iterator, a
    /// parser can be built from it directly
    pub fn new<T>(input: T) -> Self
    where
        T: Iterator<Item = tokenize::Result<Token>> + 'a,
    {
        Parser {
            input: Input::new(input),
            depth: 0,
        }
    }

    /// Parse the token stream into a single [expression](Expr)
    ///
    /// The whole stream must be consumed: an empty stream is an
    /// `EmptyExpression` error, and tokens left over after one complete
    /// expression fail with `UnexpectedToken` (or `UnbalancedParen` for a
    /// stray `)`).
    pub fn parse(mut self) -> Result<Expr> {
        if self.input.peek().is_none() {
            return Err(self.input.error(ErrorKind::EmptyExpression));
        }

        let expr = self.parse_expression()?;

        match self.input.next() {
            None => Ok(expr),
            Some(res) => {
                let tok = res?;
                match tok.kind {
                    TokenKind::CloseParen => Err(Error {
                        span: tok.span,
                        kind: ErrorKind::UnbalancedParen,
                    }),
                    kind => Err(Error {
                        span: tok.span,
                        kind: ErrorKind::UnexpectedToken(kind),
                    }),
                }
            },
        }
    }

    /// Parse an expression, the weakest-binding rule
    ///
    /// ```grammar
    /// expression ->
    ///     | term (('+' | '-') term)*
    /// ```
    fn parse_expression(&mut self) -> Result<Expr> {
        let mut expr = self.parse_term()?;

        while let Some(op_tok) = self.match_operator(&[TokenKind::Plus, TokenKind::Minus]) {
            let op = BinaryOp::try_from(op_tok.kind).map_err(|err| self.input.error(err.into()))?;
            let right = self.parse_term()?;

            let span = Span::wrap(&expr.span, &right.span);
            expr = Expr {
                span,
                kind: ExprKind::Binary(BinaryExpr {
                    op,
                    left: Box::new(expr),
                    right: Box::new(right),
                }),
            };
        }

        Ok(expr)
    }

    /// ```grammar
    /// term ->
    ///     | factor (('*' | '/') factor)*
    /// ```
    fn parse_term(&mut self) -> Result<Expr> {
        let mut expr = self.parse_factor()?;

        while let Some(op_tok) = self.match_operator(&[TokenKind::Star, TokenKind::Slash]) {
            let op = BinaryOp::try_from(op_tok.kind).map_err(|err| self.input.error(err.into()))?;
            let right = self.parse_factor()?;

            let span = Span::wrap(&expr.span, &right.span);
            expr = Expr {
                span,
                kind: ExprKind::Binary(BinaryExpr {
                    op,
                    left: Box::new(expr),
                    right: Box::new(right),
                }),
            };
        }

        Ok(expr)
    }

    /// ```grammar
    /// factor ->
    ///     | NUMBER
    ///     | '(' expression ')'
    ///     | '-' factor
    /// ```
    fn parse_factor(&mut self) -> Result<Expr> {
        let Some(res) = self.input.next() else {
            let expected = "a number, `-`, or `(`".to_string();
            return Err(self
                .input
                .error_at_end(ErrorKind::UnexpectedEndOfInput(expected)));
        };

        let tok = res?;
        match tok.kind {
            TokenKind::Number(value) => Ok(Expr {
                span: tok.span,
                kind: ExprKind::Number(value),
            }),
            TokenKind::Minus => {
                let operand = self.parse_factor()?;
                let span = Span::wrap(&tok.span, &operand.span);

                Ok(Expr {
                    span,
                    kind: ExprKind::Unary(UnaryExpr {
                        op:      UnaryOp::Negate,
                        operand: Box::new(operand),
                    }),
                })
            },
            TokenKind::OpenParen => self.parse_group(tok.span),
            // a close with no open in sight; inside a group it falls
            // through as an ordinary unexpected token (e.g. `()`)
            TokenKind::CloseParen if self.depth == 0 => Err(Error {
                span: tok.span,
                kind: ErrorKind::UnbalancedParen,
            }),
            kind => Err(Error {
                span: tok.span,
                kind: ErrorKind::UnexpectedToken(kind),
            }),
        }
    }

    /// Parse the remainder of a parenthesized group; the `(` has already
    /// been consumed. A stream that runs out before the `)` is an
    /// unbalanced-parentheses error at the end of the input.
    fn parse_group(&mut self, open_span: Span) -> Result<Expr> {
        self.depth += 1;
        let expr = self.parse_expression()?;
        self.depth -= 1;

        let Some(res) = self.input.next() else {
            return Err(self.input.error_at_end(ErrorKind::UnbalancedParen));
        };

        let tok = res?;
        match tok.kind {
            TokenKind::CloseParen => Ok(Expr {
                span: Span::wrap(&open_span, &tok.span),
                kind: ExprKind::Group(Group {
                    expr: Box::new(expr),
                }),
            }),
            kind => Err(Error {
                span: tok.span,
                kind: ErrorKind::UnexpectedToken(kind),
            }),
        }
    }

    /// Consume and return the next token if it is one of `kinds`
    fn match_operator(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        let matched = matches!(self.input.peek(), Some(Ok(tok)) if kinds.contains(&tok.kind));
        if !matched {
            return None;
        }

        let tok = self
            .input
            .next()
            .expect("next token")
            .expect("successful token");

        Some(tok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::Tokenizer;

    fn parse(input: &str) -> Result<Expr> {
        Parser::new(Tokenizer::new(input)).parse()
    }

    fn binary(expr: &Expr) -> &BinaryExpr {
        match &expr.kind {
            ExprKind::Binary(binary) => binary,
            kind => panic!("expected a binary expression, got {:?}", kind),
        }
    }

    #[test]
    fn single_number() {
        let expr = parse("42").unwrap();
        assert_eq!(expr.span, Span::new(0, 2));
        assert_eq!(expr.kind, ExprKind::Number(42.0));
    }

    #[test]
    fn precedence() {
        // 2+3*4 parses as 2+(3*4)
        let expr = parse("2+3*4").unwrap();
        let add = binary(&expr);
        assert_eq!(add.op, BinaryOp::Add);
        assert_eq!(add.left.kind, ExprKind::Number(2.0));

        let mul = binary(&add.right);
        assert_eq!(mul.op, BinaryOp::Multiply);
        assert_eq!(mul.left.kind, ExprKind::Number(3.0));
        assert_eq!(mul.right.kind, ExprKind::Number(4.0));
    }

    #[test]
    fn left_associativity() {
        // 10-2-3 parses as (10-2)-3
        let expr = parse("10-2-3").unwrap();
        let outer = binary(&expr);
        assert_eq!(outer.op, BinaryOp::Subtract);
        assert_eq!(outer.right.kind, ExprKind::Number(3.0));

        let inner = binary(&outer.left);
        assert_eq!(inner.op, BinaryOp::Subtract);
        assert_eq!(inner.left.kind, ExprKind::Number(10.0));
        assert_eq!(inner.right.kind, ExprKind::Number(2.0));
    }

    #[test]
    fn group_binds_tightest() {
        // (2+3)*4: the group is the left operand of the multiplication
        let expr = parse("(2+3)*4").unwrap();
        let mul = binary(&expr);
        assert_eq!(mul.op, BinaryOp::Multiply);
        assert_eq!(mul.right.kind, ExprKind::Number(4.0));

        let ExprKind::Group(group) = &mul.left.kind else {
            panic!("expected a group, got {:?}", mul.left.kind);
        };
        assert_eq!(mul.left.span, Span::new(0, 5));
        assert_eq!(binary(&group.expr).op, BinaryOp::Add);
    }

    #[test]
    fn unary_minus() {
        let expr = parse("-3").unwrap();
        assert_eq!(expr.span, Span::new(0, 2));
        let ExprKind::Unary(unary) = &expr.kind else {
            panic!("expected a unary expression, got {:?}", expr.kind);
        };
        assert_eq!(unary.op, UnaryOp::Negate);
        assert_eq!(unary.operand.kind, ExprKind::Number(3.0));
    }

    #[test]
    fn unary_minus_binds_tighter_than_binary() {
        // -3*4 parses as (-3)*4
        let expr = parse("-3*4").unwrap();
        let mul = binary(&expr);
        assert_eq!(mul.op, BinaryOp::Multiply);
        assert!(matches!(mul.left.kind, ExprKind::Unary(_)));
    }

    #[test]
    fn binary_spans_cover_operands() {
        let expr = parse("2+3*4").unwrap();
        assert_eq!(expr.span, Span::new(0, 5));
        assert_eq!(binary(&expr).right.span, Span::new(2, 5));
    }

    #[test]
    fn empty_input() {
        let err = parse("").unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyExpression);

        let err = parse("   ").unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyExpression);
    }

    #[test]
    fn truncated_input() {
        let err = parse("2+").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnexpectedEndOfInput(_)));
        assert_eq!(err.span, Span::new(2, 2));
    }

    #[test]
    fn missing_close_paren() {
        let err = parse("2+(3*4").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnbalancedParen);
        assert_eq!(err.span, Span::new(6, 6));
    }

    #[test]
    fn stray_close_paren() {
        let err = parse(")").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnbalancedParen);
        assert_eq!(err.span, Span::new(0, 1));

        let err = parse("2+3)").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnbalancedParen);
        assert_eq!(err.span, Span::new(3, 4));
    }

    #[test]
    fn leftover_tokens() {
        let err = parse("1 2").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken(TokenKind::Number(2.0)));
        assert_eq!(err.span, Span::new(2, 3));
    }

    #[test]
    fn empty_group() {
        let err = parse("()").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken(TokenKind::CloseParen));
    }

    #[test]
    fn doubled_operator() {
        let err = parse("2*/3").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken(TokenKind::Slash));
        assert_eq!(err.span, Span::new(2, 3));
    }

    #[test]
    fn tokenize_error_propagates() {
        let err = parse("2+3x").unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::TokenizeError(tokenize::ErrorKind::InvalidCharacter('x'))
        );
        assert_eq!(err.span, Span::new(3, 4));
    }
}
