//! INSERT, DELETE and UPDATE grammars.
//!
//! Values in these statements are single literals; arithmetic is not
//! accepted on the right-hand side.

use nom::{
    IResult,
    combinator::{map, opt},
    multi::separated_list1,
    sequence::{delimited, separated_pair, tuple},
};

use super::tokens::{identifier, keyword, literal, name, symbol};
use crate::ast::*;

/// Parse: INSERT INTO table [(col, ...)] VALUES (val, ...)
pub fn parse_insert(input: &str) -> IResult<&str, InsertStatement> {
    let (input, _) = tuple((keyword("INSERT"), keyword("INTO")))(input)?;
    let (input, table) = identifier(input)?;
    let (input, columns) = opt(delimited(
        symbol("("),
        separated_list1(symbol(","), name),
        symbol(")"),
    ))(input)?;
    let (input, _) = keyword("VALUES")(input)?;
    let (input, values) = delimited(
        symbol("("),
        separated_list1(symbol(","), literal),
        symbol(")"),
    )(input)?;

    Ok((
        input,
        InsertStatement {
            table: table.to_string(),
            columns: columns
                .unwrap_or_default()
                .into_iter()
                .map(str::to_string)
                .collect(),
            values,
        },
    ))
}

/// Parse: DELETE FROM table
pub fn parse_delete(input: &str) -> IResult<&str, DeleteStatement> {
    let (input, _) = tuple((keyword("DELETE"), keyword("FROM")))(input)?;
    let (input, table) = identifier(input)?;

    Ok((
        input,
        DeleteStatement {
            table: table.to_string(),
        },
    ))
}

/// Parse: UPDATE table SET col = val [, col = val]*
pub fn parse_update(input: &str) -> IResult<&str, UpdateStatement> {
    let (input, _) = keyword("UPDATE")(input)?;
    let (input, table) = identifier(input)?;
    let (input, _) = keyword("SET")(input)?;
    let (input, assignments) = separated_list1(symbol(","), assignment)(input)?;

    Ok((
        input,
        UpdateStatement {
            table: table.to_string(),
            assignments,
        },
    ))
}

fn assignment(input: &str) -> IResult<&str, Assignment> {
    map(
        separated_pair(name, symbol("="), literal),
        |(column, value)| Assignment {
            column: column.to_string(),
            value,
        },
    )(input)
}
