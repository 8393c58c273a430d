use crate::eval::error::*;
use crate::parse::ast::{BinaryExpr, BinaryOp, Expr, ExprKind, UnaryOp};

/// Fold an expression tree into a single value
///
/// Evaluation is a pure function of the tree: no state survives the
/// call, and the only failure is a division whose divisor is exactly
/// zero, reported with the spans of both operands. Overflow follows
/// IEEE-754 (an operation may produce an infinity, never a panic).
pub fn eval(expr: &Expr) -> Result<f64> {
    match &expr.kind {
        ExprKind::Number(value) => Ok(*value),
        ExprKind::Group(group) => eval(&group.expr),
        ExprKind::Unary(unary) => match unary.op {
            UnaryOp::Negate => Ok(-eval(&unary.operand)?),
        },
        ExprKind::Binary(binary) => eval_binary(expr, binary),
    }
}

fn eval_binary(expr: &Expr, binary: &BinaryExpr) -> Result<f64> {
    let left = eval(&binary.left)?;
    let right = eval(&binary.right)?;

    match binary.op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Subtract => Ok(left - right),
        BinaryOp::Multiply => Ok(left * right),
        BinaryOp::Divide if right == 0.0 => Err(Error {
            span: expr.span,
            kind: ErrorKind::DivisionByZero {
                dividend: binary.left.span,
                divisor:  binary.right.span,
            },
        }),
        BinaryOp::Divide => Ok(left / right),
    }
}
