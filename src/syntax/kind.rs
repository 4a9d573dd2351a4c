use serde::Serialize;

/// Every token and clause marker a syntax node can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SyntaxKind {
    // Literals
    NumberToken,
    StringToken,
    BooleanToken,
    IdentifierToken,

    // Operators and punctuation
    PlusToken,
    MinusToken,
    AsteriskToken,
    SlashToken,
    PercentToken,
    EqualsToken,
    NotEqualsToken,
    LessThanToken,
    GreaterThanToken,
    LessThanOrEqualsToken,
    GreaterThanOrEqualsToken,
    TildeToken,
    OpenParenthesisToken,
    CloseParenthesisToken,
    CommaToken,
    DotToken,

    // Keywords
    SelectKeyword,
    FromKeyword,
    WhereKeyword,
    InsertKeyword,
    IntoKeyword,
    ValuesKeyword,
    DeleteKeyword,
    UpdateKeyword,
    SetKeyword,
    AsKeyword,
    DistinctKeyword,
    TopKeyword,
    OrderByKeyword,
    AscKeyword,
    DescKeyword,
    AndKeyword,
    OrKeyword,
    NotKeyword,

    // Clauses
    SelectClause,
    FromClause,
    WhereClause,
    OrderByClause,
    InsertIntoClause,
    ValuesClause,
    DeleteClause,
    UpdateClause,
    SetClause,

    None,
}

impl SyntaxKind {
    /// Source text of a keyword or punctuation kind.
    pub fn text(&self) -> Option<&'static str> {
        use SyntaxKind::*;
        let text = match self {
            PlusToken => "+",
            MinusToken => "-",
            AsteriskToken => "*",
            SlashToken => "/",
            PercentToken => "%",
            EqualsToken => "=",
            NotEqualsToken => "<>",
            LessThanToken => "<",
            GreaterThanToken => ">",
            LessThanOrEqualsToken => "<=",
            GreaterThanOrEqualsToken => ">=",
            TildeToken => "~",
            OpenParenthesisToken => "(",
            CloseParenthesisToken => ")",
            CommaToken => ",",
            DotToken => ".",
            SelectKeyword => "SELECT",
            FromKeyword => "FROM",
            WhereKeyword => "WHERE",
            InsertKeyword => "INSERT",
            IntoKeyword => "INTO",
            ValuesKeyword => "VALUES",
            DeleteKeyword => "DELETE",
            UpdateKeyword => "UPDATE",
            SetKeyword => "SET",
            AsKeyword => "AS",
            DistinctKeyword => "DISTINCT",
            TopKeyword => "TOP",
            OrderByKeyword => "ORDER BY",
            AscKeyword => "ASC",
            DescKeyword => "DESC",
            AndKeyword => "AND",
            OrKeyword => "OR",
            NotKeyword => "NOT",
            _ => return Option::None,
        };
        Some(text)
    }

    pub fn is_keyword(&self) -> bool {
        self.text().is_some_and(|t| t.starts_with(|c: char| c.is_ascii_alphabetic()))
    }

    pub fn is_clause(&self) -> bool {
        use SyntaxKind::*;
        matches!(
            self,
            SelectClause
                | FromClause
                | WhereClause
                | OrderByClause
                | InsertIntoClause
                | ValuesClause
                | DeleteClause
                | UpdateClause
                | SetClause
        )
    }

    pub fn is_literal(&self) -> bool {
        use SyntaxKind::*;
        matches!(self, NumberToken | StringToken | BooleanToken | IdentifierToken)
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
