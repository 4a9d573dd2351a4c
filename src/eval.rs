//! Expression evaluation.
//!
//! A pure fold over the expression tree. Arithmetic reads operands with
//! [`SqlValue::to_number`], so non-numeric operands count as zero.

use rust_decimal::Decimal;

use crate::ast::{BinaryOp, Expr, SelectList, SelectStatement};
use crate::error::{SqlError, SqlResult};
use crate::transpiler::ToSql;
use crate::value::SqlValue;

impl Expr {
    /// Evaluate to a value. Column references and function calls have no
    /// value outside a query and fail with [`SqlError::NotEvaluable`].
    pub fn evaluate(&self) -> SqlResult<SqlValue> {
        match self {
            Expr::Literal(lit) => Ok(lit.to_value()),
            Expr::Qualified { .. } | Expr::Function(_) => {
                Err(SqlError::NotEvaluable(self.to_sql()))
            }
            Expr::Negate(inner) => {
                let n = inner.evaluate()?.to_number();
                Ok(SqlValue::Number(-n))
            }
            Expr::Binary { left, op, right } => {
                let l = left.evaluate()?.to_number();
                let r = right.evaluate()?.to_number();
                apply(*op, l, r).map(SqlValue::Number)
            }
        }
    }
}

fn apply(op: BinaryOp, l: Decimal, r: Decimal) -> SqlResult<Decimal> {
    let result = match op {
        BinaryOp::Add => l.checked_add(r),
        BinaryOp::Sub => l.checked_sub(r),
        BinaryOp::Mul => l.checked_mul(r),
        BinaryOp::Div | BinaryOp::Rem if r.is_zero() => return Err(SqlError::DivisionByZero),
        BinaryOp::Div => l.checked_div(r),
        BinaryOp::Rem => l.checked_rem(r),
    };
    result.ok_or_else(|| SqlError::Overflow(format!("{} {} {}", l, op.symbol(), r)))
}

impl SelectStatement {
    /// Values of a table-less projection such as `SELECT 1 + 3, 'x'`.
    pub fn evaluate_items(&self) -> SqlResult<Vec<SqlValue>> {
        match &self.list {
            SelectList::Wildcard => Err(SqlError::NotEvaluable("*".to_string())),
            SelectList::Items(items) => items.iter().map(|item| item.expr.evaluate()).collect(),
        }
    }
}
