//! SELECT grammar.
//!
//! Two shapes share the SELECT keyword:
//!
//! ```text
//! SELECT [DISTINCT] [TOP '(' number ')'] columnList FROM tableList [WHERE ..] [ORDER BY ..]
//! SELECT valueList [WHERE ..] [ORDER BY ..]
//! ```
//!
//! Which one applies is decided up front by looking for a top-level `FROM`
//! before the statement ends, so the column list is parsed exactly once.

use nom::{
    IResult,
    branch::alt,
    combinator::{map, opt, value},
    multi::separated_list1,
    sequence::{delimited, pair, preceded},
};
use rust_decimal::Decimal;

use super::conditions::{order_by_clause, where_clause};
use super::expressions::{column_expr, expression, function_call};
use super::scan::has_from_keyword;
use super::tokens::{identifier, keyword, number, opt_alias, symbol};
use crate::ast::*;

/// Parse a SELECT statement of either shape.
pub fn parse_select(input: &str) -> IResult<&str, SelectStatement> {
    let (rest, _) = keyword("SELECT")(input)?;

    if has_from_keyword(rest) {
        tracing::trace!("SELECT shape: FROM-bearing");
        select_from(rest)
    } else {
        tracing::trace!("SELECT shape: table-less");
        select_values(rest)
    }
}

/// `[DISTINCT] [TOP(n)] columns FROM tables [WHERE] [ORDER BY]`
fn select_from(input: &str) -> IResult<&str, SelectStatement> {
    let (input, distinct) = opt(keyword("DISTINCT"))(input)?;
    let (input, top) = opt(top_clause)(input)?;
    let (input, list) = column_list(input)?;
    let (input, _) = keyword("FROM")(input)?;
    let (input, from) = separated_list1(symbol(","), table)(input)?;
    let (input, selection) = opt(where_clause)(input)?;
    let (input, order_by) = opt(order_by_clause)(input)?;

    Ok((
        input,
        SelectStatement {
            distinct: distinct.is_some(),
            top,
            list,
            from,
            selection,
            order_by,
        },
    ))
}

/// `values [WHERE] [ORDER BY]`, no FROM.
fn select_values(input: &str) -> IResult<&str, SelectStatement> {
    let (input, items) = separated_list1(symbol(","), value_item)(input)?;
    let (input, selection) = opt(where_clause)(input)?;
    let (input, order_by) = opt(order_by_clause)(input)?;

    Ok((
        input,
        SelectStatement {
            distinct: false,
            top: None,
            list: SelectList::Items(items),
            from: Vec::new(),
            selection,
            order_by,
        },
    ))
}

/// `TOP '(' number ')'`
fn top_clause(input: &str) -> IResult<&str, Decimal> {
    preceded(
        keyword("TOP"),
        delimited(symbol("("), number, symbol(")")),
    )(input)
}

/// `'*' | column (',' column)*`
fn column_list(input: &str) -> IResult<&str, SelectList> {
    alt((
        value(SelectList::Wildcard, symbol("*")),
        map(separated_list1(symbol(","), column_item), SelectList::Items),
    ))(input)
}

/// `(functionCall | [table '.'] column) [AS alias]`
fn column_item(input: &str) -> IResult<&str, SelectItem> {
    map(
        pair(alt((map(function_call, Expr::Function), column_expr)), opt_alias),
        |(expr, alias)| SelectItem { expr, alias },
    )(input)
}

/// `(functionCall | expr) [AS alias]`
fn value_item(input: &str) -> IResult<&str, SelectItem> {
    map(
        pair(alt((map(function_call, Expr::Function), expression)), opt_alias),
        |(expr, alias)| SelectItem { expr, alias },
    )(input)
}

/// `identifier [AS alias]`
fn table(input: &str) -> IResult<&str, TableRef> {
    map(pair(identifier, opt_alias), |(name, alias)| TableRef {
        name: name.to_string(),
        alias,
    })(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn select(input: &str) -> SelectStatement {
        let (rest, stmt) = parse_select(input).unwrap();
        assert!(rest.trim().is_empty(), "unparsed tail: {rest:?}");
        stmt
    }

    #[test]
    fn test_select_star() {
        let stmt = select("SELECT * FROM People");
        assert_eq!(stmt.list, SelectList::Wildcard);
        assert_eq!(stmt.from, vec![TableRef::new("People")]);
        assert!(!stmt.distinct);
        assert_eq!(stmt.top, None);
    }

    #[test]
    fn test_distinct_top() {
        let stmt = select("SELECT DISTINCT TOP(10) FirstName FROM People");
        assert!(stmt.distinct);
        assert_eq!(stmt.top, Some(Decimal::from(10)));
        assert_eq!(
            stmt.list,
            SelectList::Items(vec![SelectItem::new(Expr::ident("FirstName"))])
        );
    }

    #[test]
    fn test_aliased_qualified_column_and_table() {
        let stmt = select("SELECT p.FirstName AS Name, COUNT(*) AS 'Total' FROM People AS p");
        assert_eq!(
            stmt.list,
            SelectList::Items(vec![
                SelectItem::aliased(Expr::qualified("p", "FirstName"), Alias::ident("Name")),
                SelectItem::aliased(
                    Expr::Function(FunctionCall {
                        name: "COUNT".into(),
                        args: FunctionArgs::Star,
                    }),
                    Alias::quoted("Total", '\''),
                ),
            ])
        );
        assert_eq!(
            stmt.from,
            vec![TableRef::aliased("People", Alias::ident("p"))]
        );
    }

    #[test]
    fn test_multiple_tables_where_order() {
        let stmt = select(
            "SELECT p.Name, o.Total FROM People AS p, Orders AS o \
             WHERE p.Id = o.PersonId ORDER BY o.Total DESC",
        );
        assert_eq!(stmt.from.len(), 2);
        assert!(stmt.selection.is_some());
        assert_eq!(
            stmt.order_by.map(|o| o.direction),
            Some(Some(SortDirection::Desc))
        );
    }

    #[test]
    fn test_table_less_values() {
        let stmt = select("SELECT 1 + 3, 'x' AS Letter");
        assert!(stmt.is_table_less());
        assert_eq!(
            stmt.list,
            SelectList::Items(vec![
                SelectItem::new(Expr::binary(
                    Expr::number(1),
                    BinaryOp::Add,
                    Expr::number(3)
                )),
                SelectItem::aliased(
                    Expr::Literal(Literal::string("x")),
                    Alias::ident("Letter")
                ),
            ])
        );
    }

    #[test]
    fn test_keyword_named_columns_and_tables() {
        let stmt = select("SELECT Order, Where FROM Orders");
        assert_eq!(
            stmt.list,
            SelectList::Items(vec![
                SelectItem::new(Expr::ident("Order")),
                SelectItem::new(Expr::ident("Where")),
            ])
        );

        let stmt = select("SELECT Top FROM t");
        assert_eq!(stmt.top, None);
        assert_eq!(
            stmt.list,
            SelectList::Items(vec![SelectItem::new(Expr::ident("Top"))])
        );

        let stmt = select("SELECT * FROM Values");
        assert_eq!(stmt.from, vec![TableRef::new("Values")]);
    }

    #[test]
    fn test_missing_column_list_is_rejected() {
        assert!(parse_select("SELECT FROM People").is_err());
    }

    #[test]
    fn test_expression_column_requires_table_less_shape() {
        // Arithmetic is only a value, never a FROM-bearing column.
        assert!(parse_select("SELECT 1 + 2 FROM People").is_err());
    }
}
