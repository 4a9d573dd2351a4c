//! Literal grammar: numbers, booleans, strings, identifiers, plus the
//! keyword and punctuation terms every other rule is built from.
//!
//! Every term skips leading whitespace, so rules compose without
//! threading `multispace0` through each step.

use std::str::FromStr;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while},
    character::complete::{char, digit1, multispace0, one_of, satisfy},
    combinator::{map, map_res, not, opt, recognize, value, verify},
    sequence::{delimited, pair, preceded, terminated, tuple},
};
use rust_decimal::Decimal;

use crate::ast::{Alias, Literal};

/// Words that can follow an operand inside a rule, so never parse as
/// identifiers there.
pub const RESERVED: &[&str] = &["FROM", "AS", "WHERE", "ORDER", "AND", "OR", "ASC", "DESC"];

/// A select-list column only ever runs into `AS` or `FROM`.
const COLUMN_RESERVED: &[&str] = &["FROM", "AS"];

pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Skip insignificant whitespace, then run `inner`.
pub fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    preceded(multispace0, inner)
}

/// Case-insensitive keyword matching a whole word only.
pub fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    ws(terminated(tag_no_case(word), not(satisfy(is_ident_char))))
}

/// Punctuation or operator text.
pub fn symbol<'a>(text: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    ws(tag(text))
}

/// `[+|-] digits [. digits]`
pub fn number(input: &str) -> IResult<&str, Decimal> {
    ws(map_res(
        recognize(tuple((
            opt(one_of("+-")),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| Decimal::from_str(s.strip_prefix('+').unwrap_or(s)),
    ))(input)
}

/// `True` / `False`, any case.
pub fn boolean(input: &str) -> IResult<&str, bool> {
    alt((value(true, keyword("TRUE")), value(false, keyword("FALSE"))))(input)
}

fn quoted<'a>(quote: char) -> impl FnMut(&'a str) -> IResult<&'a str, (String, char)> {
    map(
        delimited(char(quote), take_while(move |c| c != quote), char(quote)),
        move |s: &str| (s.to_string(), quote),
    )
}

/// Single- or double-quoted text; the payload excludes the quotes.
pub fn string_literal(input: &str) -> IResult<&str, (String, char)> {
    ws(alt((quoted('\''), quoted('"'))))(input)
}

/// Letter or underscore, then letters, digits, underscores; none of `reserved`.
fn word_except<'a>(
    reserved: &'static [&'static str],
) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    ws(verify(
        recognize(pair(satisfy(is_ident_start), take_while(is_ident_char))),
        move |s: &str| !reserved.iter().any(|k| k.eq_ignore_ascii_case(s)),
    ))
}

/// Identifier in a position an operand-following keyword could take.
pub fn identifier(input: &str) -> IResult<&str, &str> {
    word_except(RESERVED)(input)
}

/// Column name in a FROM-bearing select list.
pub fn column_identifier(input: &str) -> IResult<&str, &str> {
    word_except(COLUMN_RESERVED)(input)
}

/// Any word. For names followed by fixed punctuation (`.` `=` `,` `)`).
pub fn name(input: &str) -> IResult<&str, &str> {
    word_except(&[])(input)
}

/// Terminal alternatives in order: number, boolean, string, identifier.
pub fn literal(input: &str) -> IResult<&str, Literal> {
    alt((
        map(number, Literal::Number),
        map(boolean, Literal::Boolean),
        map(string_literal, |(value, quote)| Literal::String { value, quote }),
        map(identifier, |s| Literal::Identifier(s.to_string())),
    ))(input)
}

/// `AS` target: identifier or string.
pub fn alias(input: &str) -> IResult<&str, Alias> {
    alt((
        map(identifier, Alias::ident),
        map(string_literal, |(name, quote)| Alias::quoted(name, quote)),
    ))(input)
}

/// Optional `AS alias` suffix.
pub fn opt_alias(input: &str) -> IResult<&str, Option<Alias>> {
    opt(preceded(keyword("AS"), alias))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number() {
        assert_eq!(number("12"), Ok(("", Decimal::from(12))));
        assert_eq!(number(" 12.5 rest"), Ok((" rest", Decimal::new(125, 1))));
        assert_eq!(number("-7"), Ok(("", Decimal::from(-7))));
        assert_eq!(number("+7"), Ok(("", Decimal::from(7))));
        assert!(number("abc").is_err());
    }

    #[test]
    fn test_boolean_any_case() {
        assert_eq!(boolean("TRUE"), Ok(("", true)));
        assert_eq!(boolean("trUE"), Ok(("", true)));
        assert_eq!(boolean("False"), Ok(("", false)));
        assert!(boolean("Truest").is_err());
    }

    #[test]
    fn test_string_literal_both_quotes() {
        assert_eq!(
            string_literal("\"Hisham\""),
            Ok(("", ("Hisham".to_string(), '"')))
        );
        assert_eq!(
            string_literal("'Hisham'"),
            Ok(("", ("Hisham".to_string(), '\'')))
        );
        assert!(string_literal("'unterminated").is_err());
        assert!(string_literal("'mixed\"").is_err());
    }

    #[test]
    fn test_identifier() {
        for name in ["Name", "Name123", "_Name", "First_Name"] {
            assert_eq!(identifier(name), Ok(("", name)));
        }
        assert!(identifier("1abc").is_err());
        assert!(identifier("FROM").is_err());
        assert!(identifier("order").is_err());
        assert_eq!(identifier("select"), Ok(("", "select")));
        assert_eq!(identifier("Values"), Ok(("", "Values")));
    }

    #[test]
    fn test_looser_name_terms() {
        assert_eq!(column_identifier(" Order"), Ok(("", "Order")));
        assert_eq!(column_identifier("Desc"), Ok(("", "Desc")));
        assert!(column_identifier("from").is_err());
        assert!(column_identifier("AS").is_err());
        assert_eq!(name("Where"), Ok(("", "Where")));
        assert_eq!(name("FROM"), Ok(("", "FROM")));
        assert!(name("9lives").is_err());
    }

    #[test]
    fn test_keyword_needs_word_boundary() {
        assert!(keyword("OR")("ORDER BY x").is_err());
        assert_eq!(keyword("OR")(" or x"), Ok((" x", "or")));
    }

    #[test]
    fn test_literal_order_prefers_boolean_over_identifier() {
        assert_eq!(literal("True"), Ok(("", Literal::Boolean(true))));
        assert_eq!(
            literal("Truth"),
            Ok(("", Literal::Identifier("Truth".to_string())))
        );
        assert_eq!(literal("42"), Ok(("", Literal::Number(Decimal::from(42)))));
    }

    #[test]
    fn test_alias() {
        assert_eq!(opt_alias(" AS Name"), Ok(("", Some(Alias::ident("Name")))));
        assert_eq!(
            opt_alias(" as 'Sure Name'"),
            Ok(("", Some(Alias::quoted("Sure Name", '\''))))
        );
        assert_eq!(opt_alias(" FROM t"), Ok((" FROM t", None)));
    }
}
