//! Recursive-descent parser for the path grammar.
//!
//! ```text
//! name     -> id nameTail
//! nameTail -> "[" integer "]" nameTail
//!           | "." name
//!           | end
//! ```
//!
//! An `id` following a `.` that is itself an integer literal (`list.0`,
//! `list.-1`) is read as an array index. The leading `id` is always a
//! property name.
use crate::ast::{Path, PathSegment};
use crate::error::PathSyntaxError;
use crate::lexer::{Token, integer, lex};

// --- Main Public Parser ---

/// Parses a path expression such as `a.b[2].c` or `items.-1`.
///
/// A numeric segment after a dot is an array index, never a property name.
/// Writing through `a.0` therefore turns whatever object is stored at `a`
/// into an array, dropping its existing properties: `{"a": {"x": 2}}` set at
/// `a.0` becomes `{"a": [5]}`. Objects with numeric property names can only
/// be addressed by their leading segment.
pub fn parse_path(input: &str) -> Result<Path, PathSyntaxError> {
    if input.is_empty() {
        return Err(PathSyntaxError::Empty);
    }
    let mut parser = Parser {
        source: input,
        tokens: lex(input),
        position: 0,
        segments: Vec::new(),
    };
    parser.name(true)?;
    Ok(Path::from(parser.segments))
}

struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    position: usize,
    segments: Vec<PathSegment>,
}

impl<'a> Parser<'a> {
    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.position).copied();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn name(&mut self, leading: bool) -> Result<(), PathSyntaxError> {
        let at = self.position;
        match self.next() {
            Some(Token::Text(id)) => {
                let segment = match integer(id) {
                    Some(index) if !leading => PathSegment::Index(index),
                    _ => PathSegment::Key(id.to_string()),
                };
                self.segments.push(segment);
                self.name_tail()
            }
            found => Err(self.unexpected(at, "a property name", found)),
        }
    }

    fn name_tail(&mut self) -> Result<(), PathSyntaxError> {
        let at = self.position;
        match self.next() {
            Some(Token::LeftBracket) => {
                let index = self.index()?;
                let at = self.position;
                match self.next() {
                    Some(Token::RightBracket) => {}
                    found => return Err(self.unexpected(at, "']'", found)),
                }
                self.segments.push(PathSegment::Index(index));
                self.name_tail()
            }
            Some(Token::Dot) => self.name(false),
            None => Ok(()),
            found => Err(self.unexpected(at, "'[', '.' or end of path", found)),
        }
    }

    fn index(&mut self) -> Result<i64, PathSyntaxError> {
        let at = self.position;
        match self.next() {
            Some(Token::Text(literal)) => integer(literal).ok_or_else(|| PathSyntaxError::InvalidIndex {
                path: self.source.to_string(),
                literal: literal.to_string(),
            }),
            found => Err(self.unexpected(at, "an integer index", found)),
        }
    }

    fn unexpected(&self, position: usize, expected: &'static str, found: Option<Token<'_>>) -> PathSyntaxError {
        PathSyntaxError::UnexpectedToken {
            path: self.source.to_string(),
            position,
            expected,
            found: found.map_or_else(|| "end of path".to_string(), |t| t.to_string()),
        }
    }
}
