use std::fmt::{self, Write};

use colored::{Color, Colorize};
use tally_text::Span;

use crate::Pretty;
use crate::Result;
use crate::Writer;

pub struct AstPrinter<'a, 'b: 'a> {
    writer: &'a mut Writer<'b>,
    result: Result,
}

impl<'a, 'b: 'a> AstPrinter<'a, 'b> {
    pub fn new(
        writer: &'a mut Writer<'b>,
        name: &str,
        span: Option<Span>,
        color: Option<Color>,
    ) -> Self {
        writer.add_span(span);

        let result = Ok(()).and_then(|_| {
            if let (Some(color), true) = (color, writer.use_color) {
                write!(writer, "({}", name.color(color))?;
            } else {
                write!(writer, "({}", name)?;
            }
            Ok(())
        });

        AstPrinter { writer, result }
    }

    pub fn property(
        &mut self,
        name: Option<&str>,
        value: &impl fmt::Debug,
        color: Option<Color>,
    ) -> &mut Self {
        self.result = self.result.and_then(|_| {
            let name_text = if let Some(name) = name {
                format!("{}=", name)
            } else {
                String::new()
            };

            if let (Some(color), true) = (color, self.writer.use_color) {
                write!(
                    self.writer,
                    " {}{}",
                    name_text.bright_black(),
                    format!("{:?}", value).color(color)
                )?;
            } else {
                write!(self.writer, " {}{:?}", name_text, value)?;
            }
            Ok(())
        });

        self
    }

    pub fn child(&mut self, name: Option<&str>, item: &impl Pretty) -> &mut Self {
        self.result = self.result.and_then(|_| {
            write!(self.writer, "\n")?;

            self.writer.level += 1;
            if let Some(name) = name {
                write!(self.writer, "{}: ", name)?;
            }

            item.print(self.writer)?;
            self.writer.level -= 1;

            Ok(())
        });

        self
    }

    pub fn finish(&mut self) -> Result {
        self.result.and_then(|_| {
            write!(self.writer, ")")?;
            Ok(())
        })
    }
}
