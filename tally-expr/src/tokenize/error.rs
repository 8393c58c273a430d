use std::result;

use tally_text::Span;

pub type Result<T> = result::Result<T, Error>;

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("({span}) {kind}")]
pub struct Error {
    pub span: Span,
    pub kind: ErrorKind,
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("invalid character `{0}`")]
    InvalidCharacter(char),
}
