use std::fmt::{self, Write};
use std::mem;

use tally_text::Span;

use crate::AstPrinter;
use crate::Pretty;
use crate::Result;
use crate::TokenPrinter;

/// One rendered line of output, with the span of the structure that
/// started it
pub(crate) struct Line {
    pub(crate) span: Option<Span>,
    pub(crate) text: String,
}

/// Writer for pretty-printing parser structures
///
/// The writer keeps track of the indentation of nested structures, and
/// records the span that should be reported alongside each line of the
/// main output.
pub struct Writer<'a> {
    lines:                &'a mut Vec<Line>,
    current:              String,
    current_span:         Option<Span>,
    indent:               String,
    pub(crate) level:     u32,
    pub(crate) use_color: bool,
}

impl<'a> Writer<'a> {
    pub(crate) fn new(lines: &'a mut Vec<Line>, indent: &str, use_color: bool) -> Self {
        Self {
            lines,
            current: String::new(),
            current_span: None,
            indent: indent.to_string(),
            level: 0,
            use_color,
        }
    }

    /// Create a printer for a nested abstract syntax tree structure
    ///
    /// # Arguments
    ///
    /// * `name` - the display name of the AST node
    /// * `span` - the text span of the node's origin in the input
    /// * `color` - the color to print the node's name in
    pub fn print_ast<'b>(
        &'b mut self,
        name: &str,
        span: Option<Span>,
        color: Option<colored::Color>,
    ) -> AstPrinter<'b, 'a> {
        AstPrinter::new(self, name, span, color)
    }

    /// Create a printer for one token in a token stream
    ///
    /// # Arguments
    ///
    /// * `name` - the display name of the token
    /// * `span` - the text span of the token's origin in the input
    /// * `color` - the color to print the token's name in
    pub fn print_token<'b>(
        &'b mut self,
        name: &str,
        span: Option<Span>,
        color: Option<colored::Color>,
    ) -> TokenPrinter<'b, 'a> {
        TokenPrinter::new(self, name, span, color)
    }

    /// Pretty-print a structure
    pub fn print(&mut self, item: &impl Pretty) -> Result {
        item.print(self)
    }

    /// Attach a span to the line currently being written
    ///
    /// The first span attached to a line wins; a parent closing its
    /// bracket on a child's line doesn't replace the child's span.
    pub fn add_span(&mut self, span: Option<Span>) {
        if self.current_span.is_none() {
            self.current_span = span;
        }
    }

    fn flush_line(&mut self) {
        self.lines.push(Line {
            span: self.current_span.take(),
            text: mem::take(&mut self.current),
        });
    }

    pub(crate) fn finish(mut self) {
        if !self.current.is_empty() {
            self.flush_line();
        }
    }
}

impl Write for Writer<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if c == '\n' {
                self.flush_line();
                continue;
            }

            if self.current.is_empty() {
                for _ in 0..self.level {
                    self.current.push_str(self.indent.as_str());
                }
            }

            self.current.push(c);
        }

        Ok(())
    }
}
