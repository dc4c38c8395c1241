use nodesel::{
    Error, Result,
    lexer::{Lexer, token::Token},
};

fn lex_all(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input)?.collect()
}

#[test]
fn test_basic_tokens_lexer() -> Result<()> {
    assert_eq!(lex_all("")?, vec![]);
    assert_eq!(
        lex_all("{,}[]")?,
        vec![
            Token::LBrace,
            Token::Comma,
            Token::RBrace,
            Token::LBracket,
            Token::RBracket
        ]
    );
    Ok(())
}

#[test]
fn test_number_tokens_lexer() -> Result<()> {
    assert_eq!(
        lex_all("{0,12}")?,
        vec![
            Token::LBrace,
            Token::Number(0),
            Token::Comma,
            Token::Number(12),
            Token::RBrace
        ]
    );
    assert_eq!(lex_all("007")?, vec![Token::Number(7)]);
    assert_eq!(
        lex_all("[3]")?,
        vec![Token::LBracket, Token::Number(3), Token::RBracket]
    );
    Ok(())
}

#[test]
fn test_invalid_bytes_lexer() {
    assert_eq!(
        lex_all("{1, 2}"),
        Err(Error::UnexpectedByte { pos: 3, lit: b' ' })
    );
    assert_eq!(lex_all("a"), Err(Error::UnexpectedByte { pos: 0, lit: b'a' }));
    assert_eq!(lex_all("{-1}"), Err(Error::UnexpectedByte { pos: 1, lit: b'-' }));
}

#[test]
fn test_number_overflow_lexer() {
    assert_eq!(
        lex_all("{99999999999999999999999999}"),
        Err(Error::NumberOverflow { pos: 1 })
    );
}

#[test]
fn test_peek_and_tell() -> Result<()> {
    let mut lexer = Lexer::new("{10}")?;
    assert_eq!(lexer.tell(), 0);
    assert_eq!(lexer.peek().map(|t| t.token), Some(Token::LBrace));

    assert!(lexer.consume(Token::LBrace)?);
    assert!(!lexer.consume(Token::Comma)?);
    assert_eq!(lexer.tell(), 1);

    let number = lexer.expect(Token::Number(0))?;
    assert_eq!((number.pos, number.token), (1, Token::Number(10)));

    assert_eq!(
        lexer.expect(Token::Comma),
        Err(Error::UnexpectedToken {
            pos: 3,
            expected: "','",
            actual: Token::RBrace
        })
    );
    assert_eq!(lexer.tell(), 4);
    assert_eq!(lexer.expect(Token::RBrace), Err(Error::UnexpectedEnd { pos: 4 }));
    assert_eq!(lexer.next_token()?, None);
    Ok(())
}

#[test]
fn test_iterator_and_lookahead_mix() -> Result<()> {
    let mut lexer = Lexer::new("{1,2}[0]")?;
    assert_eq!(lexer.next().transpose()?, Some(Token::LBrace));
    assert_eq!(lexer.next_token()?.map(|t| t.token), Some(Token::Number(1)));
    assert_eq!(lexer.peek().map(|t| t.pos), Some(2));

    let rest = lexer.by_ref().take(2).collect::<Result<Vec<_>>>()?;
    assert_eq!(rest, vec![Token::Comma, Token::Number(2)]);
    assert_eq!(lexer.tell(), 4);
    assert_eq!(
        lexer.collect::<Result<Vec<_>>>()?,
        vec![
            Token::RBrace,
            Token::LBracket,
            Token::Number(0),
            Token::RBracket
        ]
    );
    Ok(())
}
