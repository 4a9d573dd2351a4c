//! # sqltree
//!
//! A parser for a narrow, literal-oriented SQL dialect. Command text
//! becomes typed statements, a generic clause tree, flat metadata and,
//! for arithmetic, evaluated values.
//!
//! ## Quick Example
//!
//! ```rust
//! use sqltree::prelude::*;
//!
//! let stmts = sqltree::parse("SELECT p.FirstName AS Name FROM People AS p; UPDATE People SET Age=32")?;
//! assert_eq!(stmts.len(), 2);
//!
//! let select = stmts[0].as_select().unwrap();
//! assert_eq!(select.column_names(), vec!["Name"]);
//! assert_eq!(select.table_names(), vec!["p"]);
//!
//! assert_eq!(stmts[1].values(), vec![SqlValue::from(32)]);
//! assert_eq!(stmts[1].to_sql(), "UPDATE People SET Age = 32");
//! # Ok::<(), sqltree::SqlError>(())
//! ```
//!
//! ## Statements
//!
//! | Kind     | Shape                                                              |
//! |----------|--------------------------------------------------------------------|
//! | SELECT   | `[DISTINCT] [TOP(n)] cols FROM tables [WHERE ..] [ORDER BY ..]`    |
//! | SELECT   | `values [WHERE ..] [ORDER BY ..]` (no FROM)                        |
//! | INSERT   | `INTO table [(cols)] VALUES (vals)`                                |
//! | DELETE   | `FROM table`                                                       |
//! | UPDATE   | `table SET col = val, ..`                                          |

pub mod ast;
pub mod config;
pub mod error;
pub mod eval;
pub mod parser;
pub mod projection;
pub mod syntax;
pub mod transpiler;
pub mod value;

pub use error::{SqlError, SqlResult};

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::config::ParserConfig;
    pub use crate::error::*;
    pub use crate::parser::{Parser, parse};
    pub use crate::syntax::{SyntaxKind, SyntaxNode, SyntaxToken, TokenValue};
    pub use crate::transpiler::ToSql;
    pub use crate::value::SqlValue;
}

/// Parse a `;`-separated command list with default limits.
///
/// Malformed statements are skipped.
///
/// # Example
///
/// ```
/// let stmts = sqltree::parse("SELECT FROM People; DELETE FROM Customers").unwrap();
/// assert_eq!(stmts.len(), 1);
/// assert_eq!(stmts[0].table_name(), "Customers");
/// ```
pub fn parse(input: &str) -> SqlResult<Vec<ast::Statement>> {
    parser::parse(input)
}

/// Parse exactly one statement, reporting where it stopped matching.
pub fn parse_statement(input: &str) -> SqlResult<ast::Statement> {
    parser::Parser::new().parse_statement(input)
}

/// Parse and evaluate an arithmetic expression.
///
/// ```
/// use sqltree::value::SqlValue;
///
/// assert_eq!(sqltree::evaluate("5+2*3").unwrap(), SqlValue::from(11));
/// ```
pub fn evaluate(expression: &str) -> SqlResult<value::SqlValue> {
    parser::Parser::new().parse_expression(expression)?.evaluate()
}
