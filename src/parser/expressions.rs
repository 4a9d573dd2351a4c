//! Expression grammar (precedence climbing).
//!
//! ```text
//! expr     := factor ( ('+'|'-') factor )*
//! factor   := unary ( ('*'|'/'|'%') unary )*
//! unary    := '-' unary | terminal
//! terminal := number | boolean | string | identifier | '(' expr ')'
//! ```
//!
//! Function calls and qualified names are not part of `expr`; the clause
//! grammars that admit them try them first.

use nom::{
    IResult,
    branch::alt,
    combinator::{map, opt, value},
    multi::separated_list1,
    sequence::{delimited, preceded, tuple},
};

use super::tokens::{column_identifier, identifier, literal, name, symbol};
use crate::ast::*;

/// Parse a full arithmetic expression.
pub fn expression(input: &str) -> IResult<&str, Expr> {
    let (input, left) = factor(input)?;
    parse_binary_chain(
        input,
        left,
        factor,
        &[("+", BinaryOp::Add), ("-", BinaryOp::Sub)],
    )
}

/// Parse multiplicative: unary * unary, unary / unary, unary % unary
pub fn factor(input: &str) -> IResult<&str, Expr> {
    let (input, left) = unary(input)?;
    parse_binary_chain(
        input,
        left,
        unary,
        &[("*", BinaryOp::Mul), ("/", BinaryOp::Div), ("%", BinaryOp::Rem)],
    )
}

/// Prefix minus, right-recursive; binds tighter than any binary operator.
pub fn unary(input: &str) -> IResult<&str, Expr> {
    alt((
        map(preceded(symbol("-"), unary), Expr::negate),
        terminal,
    ))(input)
}

fn terminal(input: &str) -> IResult<&str, Expr> {
    alt((
        map(literal, Expr::Literal),
        delimited(symbol("("), expression, symbol(")")),
    ))(input)
}

/// Left-associative binary chain.
///
/// An operator whose right operand fails to parse is left unconsumed.
fn parse_binary_chain<'a, F>(
    mut input: &'a str,
    mut left: Expr,
    parse_operand: F,
    operators: &[(&'static str, BinaryOp)],
) -> IResult<&'a str, Expr>
where
    F: Fn(&'a str) -> IResult<&'a str, Expr>,
{
    'chain: loop {
        for &(text, op) in operators {
            if let Ok((after_op, _)) = symbol(text)(input) {
                if let Ok((after_right, right)) = parse_operand(after_op) {
                    left = Expr::binary(left, op, right);
                    input = after_right;
                    continue 'chain;
                }
            }
        }
        break;
    }

    Ok((input, left))
}

/// `table.column`, strictly qualified.
pub fn qualified_name(input: &str) -> IResult<&str, Expr> {
    map(
        tuple((identifier, symbol("."), name)),
        |(table, _, column)| Expr::qualified(table, column),
    )(input)
}

/// `[table '.'] column` as a reference.
pub fn column_ref(input: &str) -> IResult<&str, ColumnRef> {
    qualified_or_bare(input, identifier)
}

fn qualified_or_bare<'a>(
    input: &'a str,
    head: fn(&'a str) -> IResult<&'a str, &'a str>,
) -> IResult<&'a str, ColumnRef> {
    let (input, first) = head(input)?;
    let (input, second) = opt(preceded(symbol("."), name))(input)?;
    let column = match second {
        Some(column) => ColumnRef::qualified(first, column),
        None => ColumnRef::new(first),
    };
    Ok((input, column))
}

fn select_column_ref(input: &str) -> IResult<&str, ColumnRef> {
    qualified_or_bare(input, column_identifier)
}

/// `[table '.'] column` as a select-list expression.
pub fn column_expr(input: &str) -> IResult<&str, Expr> {
    map(select_column_ref, |c| match c.table {
        Some(table) => Expr::Qualified {
            table,
            column: c.column,
        },
        None => Expr::Literal(Literal::Identifier(c.column)),
    })(input)
}

/// A parameter: qualified name or full expression.
fn parameter(input: &str) -> IResult<&str, Expr> {
    alt((qualified_name, expression))(input)
}

/// `name '(' ('*' | parameter (',' parameter)*) ')'`
pub fn function_call(input: &str) -> IResult<&str, FunctionCall> {
    let (input, name) = identifier(input)?;
    let (input, _) = symbol("(")(input)?;
    let (input, args) = alt((
        value(FunctionArgs::Star, symbol("*")),
        map(separated_list1(symbol(","), parameter), FunctionArgs::List),
    ))(input)?;
    let (input, _) = symbol(")")(input)?;

    Ok((
        input,
        FunctionCall {
            name: name.to_string(),
            args,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn parse_all(input: &str) -> Expr {
        let (rest, expr) = expression(input).unwrap();
        assert!(rest.trim().is_empty(), "unparsed tail: {rest:?}");
        expr
    }

    #[test]
    fn test_group_yields_inner_node() {
        assert_eq!(parse_all("(120)"), Expr::number(120));
        assert_eq!(
            parse_all("(12.3)"),
            Expr::Literal(Literal::Number(Decimal::new(123, 1)))
        );
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        assert_eq!(
            parse_all("5+2*3"),
            Expr::binary(
                Expr::number(5),
                BinaryOp::Add,
                Expr::binary(Expr::number(2), BinaryOp::Mul, Expr::number(3)),
            )
        );
    }

    #[test]
    fn test_left_associative_fold() {
        assert_eq!(
            parse_all("a - b + c"),
            Expr::binary(
                Expr::binary(Expr::ident("a"), BinaryOp::Sub, Expr::ident("b")),
                BinaryOp::Add,
                Expr::ident("c"),
            )
        );
    }

    #[test]
    fn test_unary_minus_binds_tighter_than_times() {
        assert_eq!(
            parse_all("-5*2"),
            Expr::binary(
                Expr::negate(Expr::number(5)),
                BinaryOp::Mul,
                Expr::number(2),
            )
        );
    }

    #[test]
    fn test_dangling_operator_is_not_consumed() {
        let (rest, expr) = expression("1 + ").unwrap();
        assert_eq!(expr, Expr::number(1));
        assert_eq!(rest, " + ");
    }

    #[test]
    fn test_function_call() {
        let (_, call) = function_call("COUNT(*)").unwrap();
        assert_eq!(call.name, "COUNT");
        assert_eq!(call.args, FunctionArgs::Star);

        let (_, call) = function_call("Concat(p.First, ' ', Last)").unwrap();
        assert_eq!(
            call.args,
            FunctionArgs::List(vec![
                Expr::qualified("p", "First"),
                Expr::Literal(Literal::string(" ")),
                Expr::ident("Last"),
            ])
        );

        assert!(function_call("NOW()").is_err());
    }

    #[test]
    fn test_column_ref() {
        assert_eq!(
            column_ref("People.Name").unwrap().1,
            ColumnRef::qualified("People", "Name")
        );
        assert_eq!(column_ref("Name").unwrap().1, ColumnRef::new("Name"));
        assert_eq!(
            column_ref("o.Desc").unwrap().1,
            ColumnRef::qualified("o", "Desc")
        );
        assert!(column_ref("Desc").is_err());
    }

    #[test]
    fn test_select_column_may_be_a_keyword() {
        assert_eq!(column_expr("Order FROM t").unwrap(), (" FROM t", Expr::ident("Order")));
        assert!(column_expr("FROM t").is_err());
    }
}
