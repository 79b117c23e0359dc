use cursor::{Cursor, Line};
use errors::{LoxError, LoxErrors, Location};
use log::trace;

pub mod token;
pub use token::{Literal, Token, TokenType};
use TokenType::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScanErrorType {
    #[error("Unexpected character.")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("[line {line}] Error: {error}")]
pub struct ScanError {
    pub error: ScanErrorType,
    pub line: Line,
}

impl From<ScanError> for LoxError {
    fn from(e: ScanError) -> Self {
        LoxError::new(e.line, Location::None, e.error)
    }
}

/// Lazily scans a source string. Yields every token, then a single `Eof` token, then `None`.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    cursor: Cursor<'a>,
    emitted_eof: bool,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source), emitted_eof: false }
    }

    /// Scans all of `source`, collecting every scan error instead of stopping at the first one.
    pub fn scan_all(source: &'a str) -> Result<Vec<Token<'a>>, LoxErrors> {
        let mut tokens = Vec::new();
        let mut errors = LoxErrors::default();
        for token in TokenStream::new(source) {
            match token {
                Ok(token) => tokens.push(token),
                Err(e) => errors.push(e.into()),
            }
        }

        if errors.is_empty() {
            Ok(tokens)
        } else {
            Err(errors)
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.peek() {
                Some(' ' | '\r' | '\t' | '\n') => {
                    self.cursor.next();
                }
                Some('/') if self.cursor.peek_next() == Some('/') => {
                    self.cursor.advance_while(|c| c != '\n');
                }
                _ => return,
            }
        }
    }

    fn scan_token(&mut self) -> Option<Result<Token<'a>, ScanError>> {
        self.skip_whitespace_and_comments();

        let start = self.cursor.clone();
        let c = self.cursor.next()?;

        let ty = match c {
            '(' => LeftParen,
            ')' => RightParen,
            '{' => LeftBrace,
            '}' => RightBrace,
            ',' => Comma,
            '.' => Dot,
            '-' => Minus,
            '+' => Plus,
            ';' => Semicolon,
            '/' => Slash,
            '*' => Star,

            '!' => self.one_or_two('=', BangEqual, Bang),
            '=' => self.one_or_two('=', EqualEqual, Equal),
            '<' => self.one_or_two('=', LessEqual, Less),
            '>' => self.one_or_two('=', GreaterEqual, Greater),

            '"' => return Some(self.string(start)),
            d if d.is_ascii_digit() => return Some(Ok(self.number(start))),
            c if is_identifier_start(c) => return Some(Ok(self.identifier(start))),

            c => {
                return Some(Err(ScanError {
                    error: ScanErrorType::UnexpectedCharacter(c),
                    line: start.line(),
                }))
            }
        };

        Some(Ok(self.make_token(ty, &start, None)))
    }

    fn one_or_two(&mut self, second: char, two: TokenType, one: TokenType) -> TokenType {
        if self.cursor.next_if_eq(second) {
            two
        } else {
            one
        }
    }

    fn make_token(
        &self,
        ty: TokenType,
        start: &Cursor<'a>,
        literal: Option<Literal<'a>>,
    ) -> Token<'a> {
        let token = Token::new(ty, start.slice_until(&self.cursor), literal, start.line());
        trace!("Scanned {} {:?}", token.ty(), token.lexeme());
        token
    }

    fn string(&mut self, start: Cursor<'a>) -> Result<Token<'a>, ScanError> {
        let contents_start = self.cursor.clone();
        self.cursor.advance_while(|c| c != '"');
        let contents = contents_start.slice_until(&self.cursor);

        if !self.cursor.next_if_eq('"') {
            return Err(ScanError {
                error: ScanErrorType::UnterminatedString,
                line: self.cursor.line(),
            });
        }

        Ok(self.make_token(Str, &start, Some(Literal::Str(contents))))
    }

    fn number(&mut self, start: Cursor<'a>) -> Token<'a> {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        let has_fraction = self.cursor.peek() == Some('.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit());
        if has_fraction {
            self.cursor.next();
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }

        let lexeme = start.slice_until(&self.cursor);
        // Only ascii digits with at most one inner '.' get here, which always parses.
        let value = lexeme.parse().unwrap_or_default();
        self.make_token(Number, &start, Some(Literal::Number(value)))
    }

    fn identifier(&mut self, start: Cursor<'a>) -> Token<'a> {
        self.cursor.advance_while(is_identifier_char);
        let ty = TokenType::keyword(start.slice_until(&self.cursor)).unwrap_or(Identifier);
        self.make_token(ty, &start, None)
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Result<Token<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted_eof {
            return None;
        }

        match self.scan_token() {
            Some(token) => Some(token),
            None => {
                self.emitted_eof = true;
                Some(Ok(Token::eof(self.cursor.line())))
            }
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
