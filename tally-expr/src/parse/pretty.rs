use colored::Color;
use tally_pretty::{Pretty, Result, Writer};

use crate::parse::ast::*;
use crate::parse::error::Error;

const COLOR_NUMBER: Option<Color> = Some(Color::Green);
const COLOR_OPERATOR: Option<Color> = Some(Color::Cyan);
const COLOR_GROUP: Option<Color> = Some(Color::BrightYellow);
const COLOR_ERROR: Option<Color> = Some(Color::Red);

impl Pretty for Expr {
    fn print(&self, w: &mut Writer<'_>) -> Result {
        match &self.kind {
            ExprKind::Number(value) => w
                .print_ast("Number", Some(self.span), COLOR_NUMBER)
                .property(None, value, None)
                .finish(),
            ExprKind::Unary(unary) => w
                .print_ast("Unary", Some(self.span), COLOR_OPERATOR)
                .property(Some("op"), &unary.op, None)
                .child(None, &*unary.operand)
                .finish(),
            ExprKind::Binary(binary) => w
                .print_ast("Binary", Some(self.span), COLOR_OPERATOR)
                .property(Some("op"), &binary.op, None)
                .child(None, &*binary.left)
                .child(None, &*binary.right)
                .finish(),
            ExprKind::Group(group) => w
                .print_ast("Group", Some(self.span), COLOR_GROUP)
                .child(None, &*group.expr)
                .finish(),
        }
    }
}

impl Pretty for Error {
    fn print(&self, w: &mut Writer<'_>) -> Result {
        w.print_ast("Error", Some(self.span), COLOR_ERROR)
            .property(None, &self.kind, COLOR_ERROR)
            .finish()
    }
}
