//! Error types for sqltree.

use thiserror::Error;

/// The main error type for sqltree operations.
#[derive(Debug, Error)]
pub enum SqlError {
    /// The input did not match the grammar.
    #[error("Parse error at position {position}: {message}")]
    Parse { position: usize, message: String },

    /// Division or modulo with a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,

    /// Decimal arithmetic left the representable range.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// The expression has no value outside a query context.
    #[error("Expression cannot be evaluated: {0}")]
    NotEvaluable(String),

    /// A float with no decimal equivalent (NaN, infinite, out of range).
    #[error("Not representable as a decimal: {0}")]
    NotRepresentable(String),

    /// Input exceeds the configured length limit.
    #[error("Input too large: {len} bytes (limit {max})")]
    InputTooLarge { len: usize, max: usize },

    /// Input nests deeper than the configured limit.
    #[error("Input nests too deeply: depth {depth} (limit {max})")]
    NestingTooDeep { depth: usize, max: usize },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SqlError {
    /// Create a parse error at the given byte offset.
    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }

    /// Whether this error came from evaluating an expression.
    pub fn is_evaluation_fault(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero | Self::Overflow(_) | Self::NotEvaluable(_)
        )
    }
}

/// Result type alias for sqltree operations.
pub type SqlResult<T> = Result<T, SqlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SqlError::parse(5, "unexpected character");
        assert_eq!(
            err.to_string(),
            "Parse error at position 5: unexpected character"
        );
    }

    #[test]
    fn test_evaluation_fault_classification() {
        assert!(SqlError::DivisionByZero.is_evaluation_fault());
        assert!(!SqlError::parse(0, "x").is_evaluation_fault());
        assert!(!SqlError::InputTooLarge { len: 10, max: 5 }.is_evaluation_fault());
    }
}
