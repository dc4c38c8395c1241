use super::{
    Error, Result,
    lexer::{Lexer, PosToken, Token},
    quantifier::Quantifier,
};

/// Parses a quantifier expression such as `{1,}`, `{0,3}[1]` or `[0]`.
///
/// # Errors
///
/// If the expression cannot be parsed, an [`Error`] is returned.
pub fn parse_quantifier(expression: &str) -> Result<Quantifier> {
    Parser::new(expression)?.parse()
}

/// Converts a quantifier expression into a [`Quantifier`].
struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    fn new(expression: &'a str) -> Result<Self> {
        Ok(Parser {
            lexer: Lexer::new(expression)?,
        })
    }

    fn parse(mut self) -> Result<Quantifier> {
        let mut quantifier = Quantifier::default();

        let has_count = self.lexer.consume(Token::LBrace)?;
        if has_count {
            self.parse_count(&mut quantifier)?;
        }

        if self.lexer.consume(Token::LBracket)? {
            quantifier.index = Some(self.parse_index()?);
        } else if !has_count {
            return Err(self.unexpected("'{' or '['"));
        }

        if let Some(PosToken { pos, token }) = self.lexer.peek() {
            return Err(Error::UnexpectedToken {
                pos,
                expected: "end of expression",
                actual: token,
            });
        }

        Ok(quantifier)
    }

    // {n} {n,} {,m} {n,m}
    fn parse_count(&mut self, quantifier: &mut Quantifier) -> Result<()> {
        quantifier.min = self.number()?;
        quantifier.max = if self.lexer.consume(Token::Comma)? {
            self.number()?
        } else {
            quantifier.min
        };

        self.lexer.expect(Token::RBrace)?;
        Ok(())
    }

    fn parse_index(&mut self) -> Result<usize> {
        let Some(index) = self.number()? else {
            return Err(self.unexpected(Token::Number(0).name()));
        };
        self.lexer.expect(Token::RBracket)?;
        Ok(index)
    }

    fn number(&mut self) -> Result<Option<usize>> {
        if let Some(PosToken {
            token: Token::Number(n),
            ..
        }) = self.lexer.peek()
        {
            self.lexer.next_token()?;
            Ok(Some(n))
        } else {
            Ok(None)
        }
    }

    fn unexpected(&self, expected: &'static str) -> Error {
        match self.lexer.peek() {
            Some(PosToken { pos, token }) => Error::UnexpectedToken {
                pos,
                expected,
                actual: token,
            },
            None => Error::UnexpectedEnd {
                pos: self.lexer.tell(),
            },
        }
    }
}
