mod expr;
use cursor::Line;
use errors::{LoxError, LoxErrors, Result};
use log::trace;

pub use expr::{Expr, LiteralValue};
use scanner::{Literal, Token, TokenStream, TokenType};

use TokenType::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParserErrorType {
    #[error("Expect expression.")]
    ExpectedExpression,
    #[error("Expect ')' after expression")]
    ExpectedRightParen,
    #[error("Expect end of expression.")]
    ExpectedEof,
}

impl ParserErrorType {
    fn at(self, token: &Token) -> LoxError {
        LoxError::new(token.line(), token.location(), self)
    }
}

/// Scans and parses a single expression.
///
/// Tokens that fail to scan are skipped and parsing still runs, so scan errors are
/// followed by any syntax error in the same source.
pub fn parse_source(source: &str) -> std::result::Result<Expr<'_>, LoxErrors> {
    let mut tokens = Vec::new();
    let mut errors = LoxErrors::default();
    for token in TokenStream::new(source) {
        match token {
            Ok(token) => tokens.push(token),
            Err(e) => errors.push(e.into()),
        }
    }

    match Parser::new(tokens).parse() {
        Ok(expr) if errors.is_empty() => Ok(expr),
        Ok(_) => Err(errors),
        Err(e) => {
            errors.push(e);
            Err(errors)
        }
    }
}

/// Recursive descent parser over an already scanned token sequence.
#[derive(Debug)]
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    current: usize,
}

impl<'a> Parser<'a> {
    pub fn new(mut tokens: Vec<Token<'a>>) -> Self {
        if tokens.last().map(Token::ty) != Some(Eof) {
            let line = tokens.last().map(Token::line).unwrap_or(Line(1));
            tokens.push(Token::eof(line));
        }
        Self { tokens, current: 0 }
    }

    /// Parses exactly one expression spanning the whole token sequence.
    ///
    /// On error the parser synchronizes, leaving the cursor at the next point where
    /// parsing could resume.
    pub fn parse(&mut self) -> Result<Expr<'a>> {
        let result = self.expression().and_then(|expr| {
            if self.is_at_end() {
                Ok(expr)
            } else {
                Err(ParserErrorType::ExpectedEof.at(self.peek()))
            }
        });

        if let Err(e) = &result {
            trace!("Hit error: {:?}, syncing...", e);
            self.synchronize();
        }
        result
    }

    fn expression(&mut self) -> Result<Expr<'a>> {
        self.equality()
    }

    fn equality(&mut self) -> Result<Expr<'a>> {
        trace!("equality at {:?}", self.peek().lexeme());
        let mut expr = self.comparison()?;

        while let Some(operator) = self.consume_any(&[BangEqual, EqualEqual]) {
            let right = Box::new(self.comparison()?);
            expr = Expr::Binary { left: Box::new(expr), operator, right }
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr<'a>> {
        trace!("comparison at {:?}", self.peek().lexeme());
        let mut expr = self.term()?;

        while let Some(operator) = self.consume_any(&[Greater, GreaterEqual, Less, LessEqual]) {
            let right = Box::new(self.term()?);
            expr = Expr::Binary { left: Box::new(expr), operator, right }
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr<'a>> {
        trace!("term at {:?}", self.peek().lexeme());
        let mut expr = self.factor()?;

        while let Some(operator) = self.consume_any(&[Plus, Minus]) {
            let right = Box::new(self.factor()?);
            expr = Expr::Binary { left: Box::new(expr), operator, right }
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr<'a>> {
        trace!("factor at {:?}", self.peek().lexeme());
        let mut expr = self.unary()?;

        while let Some(operator) = self.consume_any(&[Star, Slash]) {
            let right = Box::new(self.unary()?);
            expr = Expr::Binary { left: Box::new(expr), operator, right }
        }
        Ok(expr)
    }

    // The operand of a prefix operator is a whole `term`, so `-1 + 2` is `-(1 + 2)`.
    fn unary(&mut self) -> Result<Expr<'a>> {
        if let Some(operator) = self.consume_any(&[Bang, Minus]) {
            let right = Box::new(self.term()?);
            return Ok(Expr::Unary { operator, right });
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr<'a>> {
        trace!("primary at {:?}", self.peek().lexeme());
        let token = self.peek().clone();
        let expr = match (token.ty(), token.literal()) {
            (False, _) => Expr::Literal(LiteralValue::Boolean(false)),
            (True, _) => Expr::Literal(LiteralValue::Boolean(true)),
            (Nil, _) => Expr::Literal(LiteralValue::Nil),
            (Number, Some(Literal::Number(n))) => Expr::Literal(LiteralValue::Number(n)),
            (Str, Some(Literal::Str(s))) => Expr::Literal(LiteralValue::Str(s)),
            (LeftParen, _) => {
                self.advance();
                let expr = self.expression()?;
                self.consume_or_error(RightParen, ParserErrorType::ExpectedRightParen)?;
                return Ok(Expr::Grouping(Box::new(expr)));
            }
            _ => return Err(ParserErrorType::ExpectedExpression.at(&token)),
        };

        self.advance();
        Ok(expr)
    }

    fn consume_or_error(&mut self, ty: TokenType, error: ParserErrorType) -> Result<Token<'a>> {
        self.consume_any(&[ty]).ok_or_else(|| error.at(self.peek()))
    }

    /// Skips tokens until just after a `;` or just before a token that starts a statement.
    fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().ty() == Semicolon {
                return;
            }

            match self.peek().ty() {
                Class | Fun | Var | For | If | While | Print | Return => return,
                _ => {
                    self.advance();
                }
            }
        }
    }
}

// Helpers
impl<'a> Parser<'a> {
    fn consume_any(&mut self, types: &[TokenType]) -> Option<Token<'a>> {
        if types.contains(&self.peek().ty()) && !self.is_at_end() {
            Some(self.advance())
        } else {
            None
        }
    }

    fn peek(&self) -> &Token<'a> {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token<'a> {
        &self.tokens[self.current.saturating_sub(1)]
    }

    /// Returns the current token and moves past it, except at `Eof` which is never passed.
    fn advance(&mut self) -> Token<'a> {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    fn is_at_end(&self) -> bool {
        self.peek().ty() == Eof
    }
}
