//! Runtime values produced by evaluating expressions and by reading
//! INSERT/UPDATE payloads.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::SqlError;

/// A value in the SQL value model.
///
/// Accessors are lossy: asking a `String` for its number yields zero,
/// asking a `Number` for its text yields the empty string.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum SqlValue {
    Number(Decimal),
    String(String),
    Boolean(bool),
}

impl SqlValue {
    /// The numeric payload, or zero for other variants.
    pub fn to_number(&self) -> Decimal {
        match self {
            SqlValue::Number(n) => *n,
            SqlValue::String(_) | SqlValue::Boolean(_) => Decimal::ZERO,
        }
    }

    /// The text payload, or the empty string for other variants.
    pub fn to_text(&self) -> String {
        match self {
            SqlValue::String(s) => s.clone(),
            SqlValue::Number(_) | SqlValue::Boolean(_) => String::new(),
        }
    }

    /// The boolean payload, or `false` for other variants.
    pub fn to_boolean(&self) -> bool {
        match self {
            SqlValue::Boolean(b) => *b,
            SqlValue::Number(_) | SqlValue::String(_) => false,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Number(_) => "number",
            SqlValue::String(_) => "string",
            SqlValue::Boolean(_) => "boolean",
        }
    }
}

/// Equality is typed: values of different variants are never equal,
/// numbers compare numerically (`2.50 == 2.5`).
impl PartialEq for SqlValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SqlValue::Number(a), SqlValue::Number(b)) => a == b,
            (SqlValue::String(a), SqlValue::String(b)) => a == b,
            (SqlValue::Boolean(a), SqlValue::Boolean(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for SqlValue {}

impl std::fmt::Display for SqlValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlValue::Number(n) => write!(f, "{}", n),
            SqlValue::String(s) => write!(f, "'{}'", s),
            SqlValue::Boolean(true) => write!(f, "TRUE"),
            SqlValue::Boolean(false) => write!(f, "FALSE"),
        }
    }
}

impl From<Decimal> for SqlValue {
    fn from(n: Decimal) -> Self {
        SqlValue::Number(n)
    }
}

impl From<i32> for SqlValue {
    fn from(n: i32) -> Self {
        SqlValue::Number(Decimal::from(n))
    }
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        SqlValue::Number(Decimal::from(n))
    }
}

impl TryFrom<f64> for SqlValue {
    type Error = SqlError;

    fn try_from(n: f64) -> Result<Self, Self::Error> {
        Decimal::try_from(n)
            .map(SqlValue::Number)
            .map_err(|_| SqlError::NotRepresentable(n.to_string()))
    }
}

impl TryFrom<f32> for SqlValue {
    type Error = SqlError;

    fn try_from(n: f32) -> Result<Self, Self::Error> {
        Decimal::try_from(n)
            .map(SqlValue::Number)
            .map_err(|_| SqlError::NotRepresentable(n.to_string()))
    }
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        SqlValue::Boolean(b)
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::String(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::String(s)
    }
}
