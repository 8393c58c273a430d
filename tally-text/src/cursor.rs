use std::str::Chars;

use crate::Span;

/// A character reader that tracks the span and text of the token
/// currently being scanned
///
/// `next` and `bump` advance the read offset; the characters consumed
/// since the last `take_span`/`take_text` belong to the pending token.
pub struct Cursor<'a> {
    src:     Chars<'a>,
    pending: String,
    n:       usize,
    t:       usize,
}

impl<'a> Cursor<'a> {
    pub fn new<T: Into<&'a str>>(src: T) -> Self {
        Cursor {
            src:     src.into().chars(),
            pending: String::new(),
            n:       0,
            t:       0,
        }
    }

    /// Peek at the next character without consuming it
    pub fn first(&self) -> Option<char> {
        self.src.clone().next()
    }

    /// Peek one character past `first`
    pub fn second(&self) -> Option<char> {
        let mut chars = self.src.clone();
        chars.next();
        chars.next()
    }

    pub fn next(&mut self) -> Option<char> {
        match self.src.next() {
            Some(c) => {
                self.n += 1;
                self.pending.push(c);
                Some(c)
            },
            None => None,
        }
    }

    /// Consume the next character, discarding it
    pub fn bump(&mut self) {
        self.next();
    }

    /// Consume the next character if it matches `c`
    pub fn matches(&mut self, c: char) -> bool {
        match self.first() {
            Some(found) if found == c => {
                self.bump();
                true
            },
            _ => false,
        }
    }

    /// The offset of the next unread character
    pub fn position(&self) -> usize {
        self.n
    }

    /// The span of the pending token
    pub fn span(&self) -> Span {
        Span::new(self.t, self.n)
    }

    /// Take the span of the pending token and start a new one
    pub fn take_span(&mut self) -> Span {
        let span = self.span();
        self.t = self.n;
        self.pending.clear();

        span
    }

    /// Take the text and span of the pending token and start a new one
    pub fn take_text(&mut self) -> (Span, String) {
        let span = self.span();
        self.t = self.n;

        (span, std::mem::take(&mut self.pending))
    }

    /// Discard the pending token (e.g. skipped whitespace)
    pub fn reset(&mut self) {
        self.t = self.n;
        self.pending.clear();
    }
}

impl<'a, T: Into<&'a str>> From<T> for Cursor<'a> {
    fn from(value: T) -> Self {
        Cursor::new(value)
    }
}
