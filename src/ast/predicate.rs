use serde::Serialize;

use super::expr::{Expr, FunctionCall};

/// Comparison operator in a WHERE predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompareOp {
    Eq,
    /// `<>` or `!=`
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

impl CompareOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::NotEq => "<>",
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
            CompareOp::LtEq => "<=",
            CompareOp::GtEq => ">=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn keyword(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}

/// Root of a WHERE clause.
///
/// `AND`/`OR` chains fold left to right with equal binding, so the right
/// side of a `Logical` node is never itself `Logical`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Predicate {
    /// `WHERE f(x)`
    Function(FunctionCall),
    /// A bare operand: `WHERE Active`
    Operand(Expr),
    Compare {
        left: Expr,
        op: CompareOp,
        right: Expr,
    },
    Logical {
        left: Box<Predicate>,
        op: LogicalOp,
        right: Box<Predicate>,
    },
    /// Leading `NOT`, wrapping the whole folded chain.
    Not(Box<Predicate>),
    /// `~expr`
    BitwiseNot(Expr),
}

impl Predicate {
    pub fn compare(left: Expr, op: CompareOp, right: Expr) -> Self {
        Predicate::Compare { left, op, right }
    }

    pub fn logical(left: Predicate, op: LogicalOp, right: Predicate) -> Self {
        Predicate::Logical {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}
