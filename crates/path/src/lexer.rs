//! A `nom`-based tokenizer for path strings.
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::is_not,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, opt, recognize, value},
    multi::many0,
    sequence::pair,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    LeftBracket,
    RightBracket,
    Dot,
    /// A maximal run of characters other than `[`, `]` and `.`.
    Text(&'a str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LeftBracket => f.write_str("'['"),
            Token::RightBracket => f.write_str("']'"),
            Token::Dot => f.write_str("'.'"),
            Token::Text(text) => write!(f, "'{text}'"),
        }
    }
}

fn token(input: &str) -> IResult<&str, Token<'_>> {
    alt((
        value(Token::LeftBracket, char('[')),
        value(Token::RightBracket, char(']')),
        value(Token::Dot, char('.')),
        map(is_not("[]."), Token::Text),
    ))
    .parse(input)
}

/// Splits a path string into tokens. Every character belongs to exactly one
/// alternative of [`token`], so the whole input is always consumed.
pub(crate) fn lex(input: &str) -> Vec<Token<'_>> {
    match many0(token).parse(input) {
        Ok((_, tokens)) => tokens,
        Err(_) => Vec::new(),
    }
}

/// Parses an optionally negative decimal integer literal (`-?[0-9]+`).
pub(crate) fn integer(text: &str) -> Option<i64> {
    let parsed: IResult<&str, &str> =
        all_consuming(recognize(pair(opt(char('-')), digit1))).parse(text);
    parsed.ok().and_then(|(_, literal)| literal.parse().ok())
}
