use super::{Error, Result};

pub mod token;

pub use token::{PosToken, Token};

/// Splits a quantifier expression into [`Token`]s with one token of lookahead.
pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    peeked: Option<PosToken>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given `input`.
    ///
    /// # Errors
    ///
    /// If the first byte sequence in the input is not a valid token, an
    /// [`Error`] is returned.
    pub fn new(input: &'a str) -> Result<Self> {
        let mut lexer = Lexer {
            input: input.as_bytes(),
            pos: 0,
            peeked: None,
        };
        lexer.peeked = lexer.scan_token()?;
        Ok(lexer)
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<PosToken> {
        self.peeked
    }

    /// Returns the position of the next unread token, or the input length if
    /// the input is exhausted.
    #[must_use]
    pub fn tell(&self) -> usize {
        self.peeked.map_or(self.pos, |t| t.pos)
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Result<Option<PosToken>> {
        let current = self.peeked.take();
        if current.is_some() {
            self.peeked = self.scan_token()?;
        }
        Ok(current)
    }

    /// Consumes the next token if it is of the same kind as `token`.
    pub fn consume(&mut self, token: Token) -> Result<bool> {
        match self.peeked {
            Some(next) if next.same_kind(token) => {
                self.next_token()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Consumes the next token, which must be of the same kind as `token`.
    pub fn expect(&mut self, token: Token) -> Result<PosToken> {
        match self.next_token()? {
            Some(next) if next.same_kind(token) => Ok(next),
            Some(PosToken { pos, token: actual }) => Err(Error::UnexpectedToken {
                pos,
                expected: token.name(),
                actual,
            }),
            None => Err(Error::UnexpectedEnd { pos: self.tell() }),
        }
    }

    fn scan_token(&mut self) -> Result<Option<PosToken>> {
        let start = self.pos;
        let Some(&byte) = self.input.get(start) else {
            return Ok(None);
        };
        self.pos += 1;

        let token = match byte {
            b'{' => Token::LBrace,
            b'}' => Token::RBrace,
            b',' => Token::Comma,
            b'[' => Token::LBracket,
            b']' => Token::RBracket,
            b'0'..=b'9' => Token::Number(self.scan_number(start)?),
            lit => return Err(Error::UnexpectedByte { pos: start, lit }),
        };

        Ok(Some(PosToken { pos: start, token }))
    }

    fn scan_number(&mut self, start: usize) -> Result<usize> {
        while self.input.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }

        self.input[start..self.pos]
            .iter()
            .try_fold(0usize, |acc, d| {
                acc.checked_mul(10)?.checked_add(usize::from(d - b'0'))
            })
            .ok_or(Error::NumberOverflow { pos: start })
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Some(PosToken { token, .. })) => Some(Ok(token)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
