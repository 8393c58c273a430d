use std::convert::TryFrom;
use std::fmt;

use tally_text::Span;

use crate::parse::error::TokenConvertError;
use crate::tokenize::TokenKind;

#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub span: Span,
    pub kind: ExprKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Number(f64),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Group(Group),
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnaryExpr {
    pub op:      UnaryOp,
    pub operand: Box<Expr>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpr {
    pub op:    BinaryOp,
    pub left:  Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl TryFrom<TokenKind> for BinaryOp {
    type Error = TokenConvertError;

    fn try_from(value: TokenKind) -> Result<Self, Self::Error> {
        match value {
            TokenKind::Plus => Ok(Self::Add),
            TokenKind::Minus => Ok(Self::Subtract),
            TokenKind::Star => Ok(Self::Multiply),
            TokenKind::Slash => Ok(Self::Divide),
            _ => Err(TokenConvertError::InvalidTokenForBinaryOp(value)),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Add => write!(f, "+"),
            BinaryOp::Subtract => write!(f, "-"),
            BinaryOp::Multiply => write!(f, "*"),
            BinaryOp::Divide => write!(f, "/"),
        }
    }
}

/// A parenthesized subexpression
///
/// Kept as its own node so the tree records the parens' span; evaluation
/// passes straight through to the inner expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub expr: Box<Expr>,
}
