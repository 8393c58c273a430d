use tally_text::Cursor;

use crate::tokenize::error::*;
use crate::tokenize::token::*;

/// Scans an expression string into a stream of [tokens](Token)
///
/// The tokenizer is an iterator over `Result<Token>`: scanning stops at
/// the first invalid character, which is reported with its span. All
/// whitespace between tokens is skipped.
pub struct Tokenizer<'a> {
    input: Cursor<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new<T: Into<&'a str>>(input: T) -> Self {
        Tokenizer {
            input: Cursor::new(input),
        }
    }

    fn next_token(&mut self) -> Option<Result<Token>> {
        self.skip_whitespace();

        let res = match self.input.next()? {
            '+' => Ok(self.token(TokenKind::Plus)),
            '-' => Ok(self.token(TokenKind::Minus)),
            '*' => Ok(self.token(TokenKind::Star)),
            '/' => Ok(self.token(TokenKind::Slash)),
            '(' => Ok(self.token(TokenKind::OpenParen)),
            ')' => Ok(self.token(TokenKind::CloseParen)),
            c if c.is_ascii_digit() => Ok(self.scan_number()),
            c => Err(self.error(ErrorKind::InvalidCharacter(c))),
        };

        Some(res)
    }

    /// Scan the remainder of a number: a maximal digit run with at most
    /// one decimal point
    fn scan_number(&mut self) -> Token {
        self.scan_digits();
        if self.input.matches('.') {
            self.scan_digits();
        }

        let (span, text) = self.input.take_text();
        let value = text
            .parse::<f64>()
            .unwrap_or_else(|_| panic!("accepted invalid number: {}", text));

        Token {
            span,
            kind: TokenKind::Number(value),
        }
    }

    fn scan_digits(&mut self) {
        while matches!(self.input.first(), Some(c) if c.is_ascii_digit()) {
            self.input.bump();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.input.first(), Some(c) if c.is_whitespace()) {
            self.input.bump();
        }

        self.input.reset();
    }

    fn token(&mut self, kind: TokenKind) -> Token {
        Token {
            span: self.input.take_span(),
            kind,
        }
    }

    fn error(&mut self, kind: ErrorKind) -> Error {
        Error {
            span: self.input.take_span(),
            kind,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use tally_text::Span;

    use super::*;
    use crate::tokenize::{assert_next_err, assert_next_none, assert_next_tok, assert_tokens};

    #[test]
    fn symbols() {
        let tr = Tokenizer::new("+-*/()");
        assert_tokens(tr, vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
        ]);
    }

    #[test]
    fn numbers() {
        let tr = Tokenizer::new("12 3.5 0 12.");
        assert_tokens(tr, vec![
            TokenKind::Number(12.0),
            TokenKind::Number(3.5),
            TokenKind::Number(0.0),
            TokenKind::Number(12.0),
        ]);
    }

    #[test]
    fn number_spans() {
        let mut tr = Tokenizer::new("12+3.5");

        let tok = tr.next().unwrap().unwrap();
        assert_eq!(tok.span, Span::new(0, 2));
        assert_eq!(tok.kind, TokenKind::Number(12.0));

        let tok = tr.next().unwrap().unwrap();
        assert_eq!(tok.span, Span::new(2, 3));

        let tok = tr.next().unwrap().unwrap();
        assert_eq!(tok.span, Span::new(3, 6));
        assert_eq!(tok.kind, TokenKind::Number(3.5));

        assert_next_none!(tr);
    }

    #[test]
    fn whitespace_skipped() {
        let tr = Tokenizer::new("  1 +\t2  ");
        assert_tokens(tr, vec![
            TokenKind::Number(1.0),
            TokenKind::Plus,
            TokenKind::Number(2.0),
        ]);
    }

    #[test]
    fn whitespace_excluded_from_spans() {
        let mut tr = Tokenizer::new("  7");
        let tok = tr.next().unwrap().unwrap();
        assert_eq!(tok.span, Span::new(2, 3));
    }

    #[test]
    fn invalid_character() {
        let mut tr = Tokenizer::new("2+3x");
        assert_next_tok!(tr, TokenKind::Number(_));
        assert_next_tok!(tr, TokenKind::Plus);
        assert_next_tok!(tr, TokenKind::Number(_));

        let err = tr.next().unwrap().unwrap_err();
        assert_eq!(err.span, Span::new(3, 4));
        assert_eq!(err.kind, ErrorKind::InvalidCharacter('x'));
    }

    #[test]
    fn second_decimal_point_ends_number() {
        let mut tr = Tokenizer::new("1.2.3");
        assert_next_tok!(tr, TokenKind::Number(_));
        assert_next_err!(tr, ErrorKind::InvalidCharacter('.'));
    }

    #[test]
    fn lone_decimal_point_is_invalid() {
        let mut tr = Tokenizer::new(".5");
        assert_next_err!(tr, ErrorKind::InvalidCharacter('.'));
    }

    #[test]
    fn empty_input() {
        let mut tr = Tokenizer::new("");
        assert_next_none!(tr);

        let mut tr = Tokenizer::new("   ");
        assert_next_none!(tr);
    }
}
