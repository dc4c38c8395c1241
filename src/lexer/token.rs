use std::fmt;

/// A quantifier expression token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// An unsigned decimal integer.
    Number(usize),
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
}

impl Token {
    /// Returns a short description of the token kind, used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Token::Number(_) => "number",
            Token::LBrace => "'{'",
            Token::RBrace => "'}'",
            Token::Comma => "','",
            Token::LBracket => "'['",
            Token::RBracket => "']'",
        }
    }

    /// Returns `true` if both tokens are of the same kind, ignoring any value.
    #[must_use]
    pub const fn same_kind(self, other: Token) -> bool {
        matches!(
            (self, other),
            (Token::Number(_), Token::Number(_))
                | (Token::LBrace, Token::LBrace)
                | (Token::RBrace, Token::RBrace)
                | (Token::Comma, Token::Comma)
                | (Token::LBracket, Token::LBracket)
                | (Token::RBracket, Token::RBracket)
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "number {n}"),
            token => f.write_str(token.name()),
        }
    }
}

/// A [`Token`] with associated position information.
#[derive(Clone, Copy, Debug, Eq)]
pub struct PosToken {
    /// The start position of the token in the expression.
    pub pos: usize,
    /// The token.
    pub token: Token,
}

impl core::ops::Deref for PosToken {
    type Target = Token;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

impl PartialEq for PosToken {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}
