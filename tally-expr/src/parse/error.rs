use std::result;

use tally_text::Span;

use crate::tokenize::{self, TokenKind};

pub type Result<T> = result::Result<T, Error>;

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("({span}) {kind}")]
pub struct Error {
    pub span: Span,
    pub kind: ErrorKind,
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum ErrorKind {
    #[error("tokenize error: {0}")]
    TokenizeError(tokenize::ErrorKind),

    #[error("empty expression")]
    EmptyExpression,

    #[error("unexpected token `{0}`")]
    UnexpectedToken(TokenKind),

    #[error("unexpected end of input, expected {0}")]
    UnexpectedEndOfInput(String),

    #[error("unbalanced parentheses")]
    UnbalancedParen,

    #[error("token convert error: {0}")]
    TokenConvertError(#[from] TokenConvertError),
}

impl From<tokenize::Error> for Error {
    fn from(value: tokenize::Error) -> Self {
        Error {
            span: value.span,
            kind: ErrorKind::TokenizeError(value.kind),
        }
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum TokenConvertError {
    #[error("token `{0}` is not a binary operator")]
    InvalidTokenForBinaryOp(TokenKind),
}
