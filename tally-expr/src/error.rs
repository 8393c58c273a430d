use crate::{eval, parse, tokenize};

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum Error {
    #[error("tokenize error: {0}")]
    TokenizeError(#[from] tokenize::Error),

    #[error("parse error: {0}")]
    ParseError(#[from] parse::Error),

    #[error("eval error: {0}")]
    EvalError(#[from] eval::Error),
}
