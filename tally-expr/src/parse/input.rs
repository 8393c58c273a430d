use std::iter::Peekable;

use tally_text::Span;

use crate::parse::error::*;
use crate::tokenize::{self, Token};

/// Peekable wrapper over the token stream
///
/// Converts tokenizer failures into parse errors as they surface, and
/// tracks the span of the last consumed token so errors raised after the
/// stream runs out still carry a position.
pub(crate) struct Input<'a> {
    data: Peekable<Box<dyn Iterator<Item = tokenize::Result<Token>> + 'a>>,
    span: Span,
}

impl<'a> Input<'a> {
    pub fn new<T>(data: T) -> Self
    where
        T: Iterator<Item = tokenize::Result<Token>> + 'a,
    {
        let data = Box::new(data) as Box<dyn Iterator<Item = tokenize::Result<Token>> + 'a>;
        Self {
            data: data.peekable(),
            span: Span::default(),
        }
    }

    pub fn peek(&mut self) -> Option<Result<&Token>> {
        match self.data.peek() {
            None => None,
            Some(Ok(tok)) => Some(Ok(tok)),
            Some(Err(err)) => Some(Err(Error::from(err.clone()))),
        }
    }

    pub fn next(&mut self) -> Option<Result<Token>> {
        let item = self.data.next().map(|res| res.map_err(Error::from));

        if let Some(Ok(tok)) = &item {
            self.span = tok.span;
        }

        item
    }

    /// An error at the span of the last consumed token
    pub fn error(&self, kind: ErrorKind) -> Error {
        Error {
            span: self.span,
            kind,
        }
    }

    /// An error at the end of the consumed input, for failures caused by
    /// the stream running out
    pub fn error_at_end(&self, kind: ErrorKind) -> Error {
        Error {
            span: Span::new(self.span.end, self.span.end),
            kind,
        }
    }
}
