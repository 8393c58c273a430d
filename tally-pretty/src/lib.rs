mod ast_printer;
mod error;
mod token_printer;
mod writer;

use colored::control::ShouldColorize;
use colored::Colorize;

pub use ast_printer::AstPrinter;
pub use error::{Error, Result};
pub use token_printer::TokenPrinter;
pub use writer::Writer;

use writer::Line;

/// A structure that can be rendered by a [`Writer`]
pub trait Pretty {
    fn print(&self, w: &mut Writer<'_>) -> Result;
}

/// When colored output should be produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorWhen {
    #[default]
    Auto,
    Always,
    Never,
}

/// Settings for a [`PrettyPrinter`]
#[derive(Debug, Clone)]
pub struct PrettyPrintSettings {
    indent:        String,
    color_when:    ColorWhen,
    align:         bool,
    include_spans: bool,
}

impl PrettyPrintSettings {
    /// Set the indentation style
    ///
    /// The provided string will be repeated by the number of indents
    /// for any indented lines in the output
    pub fn indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    pub fn color_when(mut self, color_when: ColorWhen) -> Self {
        self.color_when = color_when;
        self
    }

    /// Align the span column instead of separating it by a single space
    pub fn align(mut self, align: bool) -> Self {
        self.align = align;
        self
    }

    /// Report the span of each line's token or AST node in a trailing
    /// column
    pub fn include_spans(mut self, include_spans: bool) -> Self {
        self.include_spans = include_spans;
        self
    }

    fn use_color(&self) -> bool {
        match self.color_when {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => ShouldColorize::from_env().should_colorize(),
        }
    }
}

impl Default for PrettyPrintSettings {
    fn default() -> Self {
        Self {
            indent:        "    ".to_string(),
            color_when:    ColorWhen::default(),
            align:         true,
            include_spans: false,
        }
    }
}

/// Renders [`Pretty`] structures into a string
///
/// Items accumulate across `print` calls; `finish` takes the rendered
/// output, aligning the span column if one was requested.
pub struct PrettyPrinter {
    settings: PrettyPrintSettings,
    lines:    Vec<Line>,
}

impl PrettyPrinter {
    pub fn new(settings: PrettyPrintSettings) -> Self {
        Self {
            settings,
            lines: Vec::new(),
        }
    }

    pub fn print(&mut self, item: &impl Pretty) -> std::result::Result<&mut Self, Error> {
        let mut writer = Writer::new(
            &mut self.lines,
            self.settings.indent.as_str(),
            self.settings.use_color(),
        );
        item.print(&mut writer)?;
        writer.finish();

        Ok(self)
    }

    pub fn finish(&mut self) -> std::result::Result<String, Error> {
        let lines = std::mem::take(&mut self.lines);

        if !self.settings.include_spans {
            let out = lines
                .into_iter()
                .map(|line| line.text)
                .collect::<Vec<_>>()
                .join("\n");
            return Ok(out);
        }

        let width = lines
            .iter()
            .map(|line| visible_width(&line.text))
            .max()
            .unwrap_or(0);
        let use_color = self.settings.use_color();

        let out = lines
            .into_iter()
            .map(|line| {
                let Some(span) = line.span else {
                    return line.text;
                };

                let pad = if self.settings.align {
                    width.saturating_sub(visible_width(&line.text)) + 2
                } else {
                    1
                };

                let span_text = format!("{:?}", span);
                let span_text = if use_color {
                    span_text.bright_black().to_string()
                } else {
                    span_text
                };

                format!("{}{}{}", line.text, " ".repeat(pad), span_text)
            })
            .collect::<Vec<_>>()
            .join("\n");

        Ok(out)
    }
}

/// The column width of `text`, not counting ANSI escape sequences
fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;

    for c in text.chars() {
        if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            width += 1;
        }
    }

    width
}

#[cfg(test)]
mod tests {
    use tally_text::Span;

    use super::*;

    struct Expr {
        kind: ExprKind,
    }

    impl Pretty for Expr {
        fn print(&self, w: &mut Writer<'_>) -> Result {
            w.print(&self.kind)
        }
    }

    enum ExprKind {
        Add(Add),
        Number(Number),
    }

    impl Pretty for ExprKind {
        fn print(&self, w: &mut Writer<'_>) -> Result {
            match self {
                Self::Add(add) => w.print(add),
                Self::Number(number) => w.print(number),
            }
        }
    }

    struct Add {
        left:  Box<Expr>,
        right: Box<Expr>,
    }

    impl Pretty for Add {
        fn print(&self, w: &mut Writer<'_>) -> Result {
            w.print_ast("Add", None, None)
                .child(None, &*self.left)
                .child(None, &*self.right)
                .finish()
        }
    }

    struct Number {
        span:  Span,
        value: i32,
    }

    impl Pretty for Number {
        fn print(&self, w: &mut Writer<'_>) -> Result {
            w.print_ast("Number", Some(self.span), None)
                .property(Some("value"), &self.value, None)
                .finish()
        }
    }

    fn sample() -> Expr {
        Expr {
            kind: ExprKind::Add(Add {
                left:  Box::new(Expr {
                    kind: ExprKind::Number(Number {
                        span:  Span::new(0, 2),
                        value: 10,
                    }),
                }),
                right: Box::new(Expr {
                    kind: ExprKind::Number(Number {
                        span:  Span::new(3, 4),
                        value: 6,
                    }),
                }),
            }),
        }
    }

    #[test]
    fn print_ast() {
        let settings = PrettyPrintSettings::default()
            .indent("  ")
            .color_when(ColorWhen::Never);
        let mut printer = PrettyPrinter::new(settings);

        let out = printer.print(&sample()).unwrap().finish().unwrap();
        assert_eq!(out, "(Add\n  (Number value=10)\n  (Number value=6))");
    }

    #[test]
    fn print_ast_with_spans() {
        let settings = PrettyPrintSettings::default()
            .indent("  ")
            .color_when(ColorWhen::Never)
            .include_spans(true);
        let mut printer = PrettyPrinter::new(settings);

        let out = printer.print(&sample()).unwrap().finish().unwrap();
        let expected = "\
(Add
  (Number value=10)  0-2
  (Number value=6))  3-4";
        assert_eq!(out, expected);
    }

    #[test]
    fn width_ignores_escape_sequences() {
        assert_eq!(visible_width("plain"), 5);
        assert_eq!(visible_width("\x1b[31mred\x1b[0m"), 3);
    }
}
