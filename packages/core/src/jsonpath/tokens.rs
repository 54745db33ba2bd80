//! Token definitions for path expression lexing

/// Lexical tokens of the path language
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `$`
    Root,
    /// `@`
    At,
    /// `.`
    Dot,
    /// `..`
    DoubleDot,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `?`
    Question,
    /// `*`
    Star,

    /// Quoted string literal, escapes already resolved
    String(String),
    Integer(i64),
    Number(f64),
    True,
    False,
    Null,

    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,

    /// Bare member name or function name
    Identifier(String),

    EOF,
}

impl Token {
    #[inline]
    #[must_use]
    pub fn is_comparison_operator(&self) -> bool {
        matches!(
            self,
            Token::Equal
                | Token::NotEqual
                | Token::Less
                | Token::LessEq
                | Token::Greater
                | Token::GreaterEq
        )
    }

    /// Tokens that may continue a relative path inside a filter (`@.a[0]..b`)
    #[inline]
    #[must_use]
    pub fn continues_path(&self) -> bool {
        matches!(self, Token::Dot | Token::DoubleDot | Token::LeftBracket)
    }
}
