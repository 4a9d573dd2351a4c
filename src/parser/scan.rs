//! Quote-aware scanning over raw command text.
//!
//! These helpers look ahead without parsing: where a statement segment
//! ends, whether it carries a FROM clause, and how deeply it nests.

use super::tokens::is_ident_char;

/// Byte length of the segment before the first `;` outside quotes.
pub fn segment_len(input: &str) -> usize {
    let mut quote: Option<char> = None;
    for (i, c) in input.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == ';' => return i,
            None => {}
        }
    }
    input.len()
}

/// Whole words outside quotes, in source order.
fn top_level_words(input: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut quote: Option<char> = None;
    let mut start: Option<usize> = None;

    for (i, c) in input.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        if is_ident_char(c) {
            start.get_or_insert(i);
            continue;
        }
        if let Some(s) = start.take() {
            words.push(&input[s..i]);
        }
        if c == '\'' || c == '"' {
            quote = Some(c);
        }
    }
    if let Some(s) = start {
        words.push(&input[s..]);
    }

    words
}

/// Whether a `FROM` keyword is reachable before the segment ends.
pub fn has_from_keyword(input: &str) -> bool {
    top_level_words(&input[..segment_len(input)])
        .iter()
        .any(|w| w.eq_ignore_ascii_case("FROM"))
}

/// Deepest nesting of parentheses plus runs of prefix minus signs.
///
/// Both drive recursion in the expression grammar.
pub fn nesting_depth(input: &str) -> usize {
    let mut quote: Option<char> = None;
    let mut parens = 0usize;
    let mut minus_run = 0usize;
    let mut deepest = 0usize;

    for c in input.chars() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => {
                quote = Some(c);
                minus_run = 0;
            }
            '(' => {
                parens += 1;
                minus_run = 0;
            }
            ')' => {
                parens = parens.saturating_sub(1);
                minus_run = 0;
            }
            '-' => minus_run += 1,
            c if c.is_whitespace() => {}
            _ => minus_run = 0,
        }
        deepest = deepest.max(parens + minus_run);
    }

    deepest
}
