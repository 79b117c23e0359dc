use std::fmt::Display;

use cursor::Line;
use errors::Location;

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    ty: TokenType,
    lexeme: &'a str,
    literal: Option<Literal<'a>>,
    line: Line,
}

impl<'a> Token<'a> {
    pub fn new(ty: TokenType, lexeme: &'a str, literal: Option<Literal<'a>>, line: Line) -> Self {
        Self { ty, lexeme, literal, line }
    }

    pub fn eof(line: Line) -> Self {
        Self::new(TokenType::Eof, "", None, line)
    }

    pub fn ty(&self) -> TokenType {
        self.ty
    }

    pub fn lexeme(&self) -> &'a str {
        self.lexeme
    }

    pub fn literal(&self) -> Option<Literal<'a>> {
        self.literal
    }

    pub fn line(&self) -> Line {
        self.line
    }

    /// How diagnostics refer to this token.
    pub fn location(&self) -> Location {
        match self.ty {
            TokenType::Eof => Location::End,
            _ => Location::Lexeme(self.lexeme.to_string()),
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

/// Value carried by number and string tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a> {
    Number(f64),
    /// String contents without the surrounding quotes.
    Str(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    #[strum(serialize = "STRING")]
    Str,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,
    Eof,
}

impl TokenType {
    pub fn keyword(identifier: &str) -> Option<Self> {
        use TokenType::*;
        Some(match identifier {
            "and" => And,
            "class" => Class,
            "else" => Else,
            "false" => False,
            "fun" => Fun,
            "for" => For,
            "if" => If,
            "nil" => Nil,
            "or" => Or,
            "print" => Print,
            "return" => Return,
            "super" => Super,
            "this" => This,
            "true" => True,
            "var" => Var,
            "while" => While,
            _ => return None,
        })
    }
}
