//! SQL parser using nom.
//!
//! Parses command text like:
//! ```text
//! SELECT p.FirstName AS Name FROM People AS p WHERE p.Age >= 18;
//! UPDATE People SET Age = 32
//! ```
//!
//! A command list is split on top-level `;`. Each segment is matched
//! against the statement grammars in the order DELETE, SELECT, INSERT,
//! UPDATE; a segment that matches none is skipped rather than failing
//! the whole list.

pub mod conditions;
pub mod dml;
pub mod expressions;
pub mod scan;
pub mod select;
pub mod tokens;

use nom::{
    IResult,
    branch::alt,
    character::complete::{char, multispace0},
    combinator::{eof, map, peek, value},
};

use crate::ast::*;
use crate::config::ParserConfig;
use crate::error::{SqlError, SqlResult};

/// Reusable parser; holds only read-only limits.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a `;`-separated command list.
    ///
    /// Malformed segments yield no statement. Only the resource limits
    /// produce an error.
    pub fn parse(&self, input: &str) -> SqlResult<Vec<Statement>> {
        self.config.check(input)?;

        let mut statements = Vec::new();
        let mut rest = input;

        loop {
            rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ';');
            if rest.is_empty() {
                break;
            }

            match statement(rest) {
                Ok((after, stmt)) => {
                    tracing::debug!(
                        kind = %stmt.kind(),
                        table = stmt.table_name(),
                        "accepted statement"
                    );
                    statements.push(stmt);
                    rest = after;
                }
                Err(_) => {
                    let end = scan::segment_len(rest);
                    tracing::debug!(
                        offset = input.len() - rest.len(),
                        segment = &rest[..end],
                        "skipped malformed statement"
                    );
                    rest = &rest[end..];
                }
            }
        }

        Ok(statements)
    }

    /// Parse exactly one statement; an optional trailing `;` is allowed.
    pub fn parse_statement(&self, input: &str) -> SqlResult<Statement> {
        self.config.check(input)?;

        let mut furthest = 0;
        let mut reason = String::from("expected SELECT, INSERT, DELETE or UPDATE");

        for (name, parse_kind) in STATEMENT_ORDER {
            match parse_kind(input) {
                Ok((remaining, stmt)) => {
                    let remaining = remaining.trim_start();
                    let remaining = remaining.strip_prefix(';').unwrap_or(remaining);
                    if remaining.trim().is_empty() {
                        return Ok(stmt);
                    }
                    let position = input.len() - remaining.len();
                    if position >= furthest {
                        furthest = position;
                        reason = format!("Unexpected trailing content: '{}'", remaining.trim());
                    }
                }
                Err(e) => {
                    let position = error_position(input, &e);
                    if position > furthest {
                        furthest = position;
                        reason = format!("{name} statement does not match");
                    }
                }
            }
        }

        Err(SqlError::parse(furthest, reason))
    }

    /// Parse a standalone arithmetic expression.
    pub fn parse_expression(&self, input: &str) -> SqlResult<Expr> {
        self.config.check(input)?;

        match expressions::expression(input) {
            Ok((remaining, expr)) if remaining.trim().is_empty() => Ok(expr),
            Ok((remaining, _)) => Err(SqlError::parse(
                input.len() - remaining.len(),
                format!("Unexpected trailing content: '{}'", remaining.trim()),
            )),
            Err(e) => Err(SqlError::parse(
                error_position(input, &e),
                "expected an expression",
            )),
        }
    }
}

type StatementFn = fn(&str) -> IResult<&str, Statement>;

const STATEMENT_ORDER: [(&str, StatementFn); 4] = [
    ("DELETE", delete_stmt),
    ("SELECT", select_stmt),
    ("INSERT", insert_stmt),
    ("UPDATE", update_stmt),
];

fn delete_stmt(input: &str) -> IResult<&str, Statement> {
    map(dml::parse_delete, Statement::Delete)(input)
}

fn select_stmt(input: &str) -> IResult<&str, Statement> {
    map(select::parse_select, Statement::Select)(input)
}

fn insert_stmt(input: &str) -> IResult<&str, Statement> {
    map(dml::parse_insert, Statement::Insert)(input)
}

fn update_stmt(input: &str) -> IResult<&str, Statement> {
    map(dml::parse_update, Statement::Update)(input)
}

/// One statement that must end at `;` or end of input.
fn statement(input: &str) -> IResult<&str, Statement> {
    let (input, stmt) = alt((delete_stmt, select_stmt, insert_stmt, update_stmt))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = alt((value((), peek(char(';'))), value((), eof)))(input)?;
    Ok((input, stmt))
}

fn error_position(input: &str, err: &nom::Err<nom::error::Error<&str>>) -> usize {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => input.len() - e.input.len(),
        nom::Err::Incomplete(_) => input.len(),
    }
}

/// Parse a command list with default limits.
pub fn parse(input: &str) -> SqlResult<Vec<Statement>> {
    Parser::new().parse(input)
}
