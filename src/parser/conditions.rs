//! WHERE and ORDER BY grammars (SELECT only).
//!
//! ```text
//! whereClause   := WHERE ( functionCall | logicalExpr | bitwiseExpr )
//! bitwiseExpr   := '~' expr
//! logicalExpr   := [NOT] comparison ( (AND|OR) comparison )*
//! comparison    := columnOrValue compareOp columnOrValue | columnOrValue
//! columnOrValue := identifier '.' identifier | expr
//! orderBy       := ORDER BY orderColumn (',' orderColumn)* [ASC|DESC]
//! ```

use nom::{
    IResult,
    branch::alt,
    combinator::{map, opt, value},
    multi::{many0, separated_list1},
    sequence::{pair, preceded},
};

use super::expressions::{column_ref, expression, function_call, qualified_name};
use super::tokens::{keyword, symbol};
use crate::ast::*;

/// Parse: WHERE predicate
pub fn where_clause(input: &str) -> IResult<&str, Predicate> {
    preceded(
        keyword("WHERE"),
        alt((
            map(function_call, Predicate::Function),
            logical_expression,
            bitwise_expression,
        )),
    )(input)
}

/// `~expr`
fn bitwise_expression(input: &str) -> IResult<&str, Predicate> {
    map(preceded(symbol("~"), expression), Predicate::BitwiseNot)(input)
}

/// `[NOT] comparison ((AND|OR) comparison)*`, folded left to right.
pub fn logical_expression(input: &str) -> IResult<&str, Predicate> {
    let (input, negated) = opt(keyword("NOT"))(input)?;
    let (input, first) = comparison(input)?;
    let (input, rest) = many0(pair(logical_op, comparison))(input)?;

    let chain = rest
        .into_iter()
        .fold(first, |left, (op, right)| Predicate::logical(left, op, right));

    let predicate = match negated {
        Some(_) => Predicate::Not(Box::new(chain)),
        None => chain,
    };
    Ok((input, predicate))
}

fn logical_op(input: &str) -> IResult<&str, LogicalOp> {
    alt((
        value(LogicalOp::And, keyword("AND")),
        value(LogicalOp::Or, keyword("OR")),
    ))(input)
}

/// `operand [compareOp operand]`
fn comparison(input: &str) -> IResult<&str, Predicate> {
    let (input, left) = operand(input)?;
    let (input, rhs) = opt(pair(compare_op, operand))(input)?;

    let predicate = match rhs {
        Some((op, right)) => Predicate::compare(left, op, right),
        None => Predicate::Operand(left),
    };
    Ok((input, predicate))
}

fn operand(input: &str) -> IResult<&str, Expr> {
    alt((qualified_name, expression))(input)
}

/// Two-character operators before their one-character prefixes.
fn compare_op(input: &str) -> IResult<&str, CompareOp> {
    alt((
        value(CompareOp::LtEq, symbol("<=")),
        value(CompareOp::GtEq, symbol(">=")),
        value(CompareOp::NotEq, symbol("<>")),
        value(CompareOp::NotEq, symbol("!=")),
        value(CompareOp::Eq, symbol("=")),
        value(CompareOp::Lt, symbol("<")),
        value(CompareOp::Gt, symbol(">")),
    ))(input)
}

/// Parse: ORDER BY col [, col]* [ASC|DESC]
pub fn order_by_clause(input: &str) -> IResult<&str, OrderBy> {
    let (input, _) = pair(keyword("ORDER"), keyword("BY"))(input)?;
    let (input, columns) = separated_list1(symbol(","), column_ref)(input)?;
    let (input, direction) = opt(alt((
        value(SortDirection::Asc, keyword("ASC")),
        value(SortDirection::Desc, keyword("DESC")),
    )))(input)?;

    Ok((input, OrderBy { columns, direction }))
}
