use colored::Color;
use tally_pretty::{Pretty, Result, Writer};

use crate::tokenize::error::Error;
use crate::tokenize::token::*;

const COLOR_NUMBER: Option<Color> = Some(Color::Green);
const COLOR_OPERATOR: Option<Color> = Some(Color::Cyan);
const COLOR_PAREN: Option<Color> = Some(Color::BrightYellow);
const COLOR_ERROR: Option<Color> = Some(Color::Red);

impl Pretty for Token {
    fn print(&self, w: &mut Writer<'_>) -> Result {
        match &self.kind {
            TokenKind::Number(value) => w
                .print_token("Number", Some(self.span), COLOR_NUMBER)
                .property(None, value, None)
                .finish(),
            TokenKind::Plus => w
                .print_token("Plus", Some(self.span), COLOR_OPERATOR)
                .finish(),
            TokenKind::Minus => w
                .print_token("Minus", Some(self.span), COLOR_OPERATOR)
                .finish(),
            TokenKind::Star => w
                .print_token("Star", Some(self.span), COLOR_OPERATOR)
                .finish(),
            TokenKind::Slash => w
                .print_token("Slash", Some(self.span), COLOR_OPERATOR)
                .finish(),
            TokenKind::OpenParen => w
                .print_token("OpenParen", Some(self.span), COLOR_PAREN)
                .finish(),
            TokenKind::CloseParen => w
                .print_token("CloseParen", Some(self.span), COLOR_PAREN)
                .finish(),
        }
    }
}

impl Pretty for Error {
    fn print(&self, w: &mut Writer<'_>) -> Result {
        w.print_token("Error", Some(self.span), COLOR_ERROR)
            .property(None, &self.kind, COLOR_ERROR)
            .finish()
    }
}
