use rust_decimal::Decimal;
use serde::Serialize;

use crate::value::SqlValue;

/// A terminal: the lowest alternative of the expression grammar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Literal {
    Number(Decimal),
    Boolean(bool),
    /// Quoted text; `quote` is `'` or `"`.
    String { value: String, quote: char },
    /// A bare name. Used as a value it stands for its own text.
    Identifier(String),
}

impl Literal {
    /// Coerce the terminal into the value model. Identifiers surface as text.
    pub fn to_value(&self) -> SqlValue {
        match self {
            Literal::Number(n) => SqlValue::Number(*n),
            Literal::Boolean(b) => SqlValue::Boolean(*b),
            Literal::String { value, .. } => SqlValue::String(value.clone()),
            Literal::Identifier(name) => SqlValue::String(name.clone()),
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Literal::String {
            value: value.into(),
            quote: '\'',
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Literal::Identifier(name.into())
    }
}

/// Arithmetic operators, in two precedence tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 2,
        }
    }
}

/// Arguments of a function call: `f(*)` or `f(a, b.c, 1 + 2)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FunctionArgs {
    Star,
    List(Vec<Expr>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionCall {
    pub name: String,
    pub args: FunctionArgs,
}

/// An expression.
///
/// The arithmetic grammar only yields `Literal`, `Negate` and `Binary`.
/// `Qualified` and `Function` appear where a clause admits them directly
/// (select lists, function parameters, WHERE operands).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Literal(Literal),
    /// `table.column`
    Qualified { table: String, column: String },
    Function(FunctionCall),
    Negate(Box<Expr>),
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn number(n: impl Into<Decimal>) -> Self {
        Expr::Literal(Literal::Number(n.into()))
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Literal(Literal::Identifier(name.into()))
    }

    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
        Expr::Qualified {
            table: table.into(),
            column: column.into(),
        }
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn negate(inner: Expr) -> Self {
        Expr::Negate(Box::new(inner))
    }

    /// Binding strength of the node's root, used when rendering text.
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Expr::Binary { op, .. } => op.precedence(),
            _ => 3,
        }
    }
}
