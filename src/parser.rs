//! Recursive-descent grammar validator.
//!
//! Consumes the finished token sequence from [`crate::lexer`] in a single
//! lookahead-1 pass over the grammar:
//!
//! ```text
//! document := object end-of-input
//! object   := '{' [ pair (',' pair)* ] '}'
//! pair     := string ':' value
//! value    := string | number | 'true' | 'false' | 'null' | object | array
//! array    := '[' [ value (',' value)* ] ']'
//! ```
//!
//! The document rule is `object`, not `value`: this validator targets JSON
//! object documents, so a bare array or scalar at the top level is rejected.
//! Nothing is materialized — every rule procedure returns `VetResult<()>`,
//! and the first violation anywhere in the descent fails the whole run.

use crate::error::{SyntaxError, VetResult};
use crate::lexer::Lexer;
use crate::limits::Limits;
use crate::token::{Token, TokenKind};

/// Grammar validator over a completed token sequence.
///
/// Holds a cursor into the sequence; the cursor only moves forward and never
/// passes the terminating [`TokenKind::Eof`] token.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: u64,
    limits: Limits,
}

impl Parser {
    /// Create a validator for the given token sequence.
    pub fn new(tokens: Vec<Token>, limits: Limits) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
            limits,
        }
    }

    /// Validate the document rule: a single object followed by end of input.
    pub fn parse_document(&mut self) -> VetResult<()> {
        self.parse_object()?;

        match self.peek() {
            TokenKind::Eof => Ok(()),
            found => Err(SyntaxError::TrailingContent { found }),
        }
    }

    /// Inspect the kind at the cursor without consuming.
    fn peek(&self) -> TokenKind {
        self.tokens
            .get(self.current)
            .map_or(TokenKind::Eof, Token::kind)
    }

    /// Consume and return the kind at the cursor.
    ///
    /// The cursor stops at the `Eof` token rather than passing it.
    fn advance(&mut self) -> TokenKind {
        let kind = self.peek();
        if kind != TokenKind::Eof {
            self.current += 1;
        }
        kind
    }

    /// Report whether the kind at the cursor matches, without consuming.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek() == kind
    }

    /// Consume the token if its kind matches; report whether it did.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the token if its kind matches; otherwise a grammar violation.
    fn expect(&mut self, expected: TokenKind) -> VetResult<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(SyntaxError::UnexpectedToken {
                expected,
                found: self.peek(),
            })
        }
    }

    /// object := '{' [ pair (',' pair)* ] '}'
    fn parse_object(&mut self) -> VetResult<()> {
        self.enter()?;
        self.expect(TokenKind::LeftBrace)?;

        if self.check(TokenKind::String) {
            self.parse_pair()?;
            while self.eat(TokenKind::Comma) {
                self.parse_pair()?;
            }
        }

        self.expect(TokenKind::RightBrace)?;
        self.leave();
        Ok(())
    }

    /// pair := string ':' value
    fn parse_pair(&mut self) -> VetResult<()> {
        self.expect(TokenKind::String)?;
        self.expect(TokenKind::Colon)?;
        self.parse_value()
    }

    /// value := string | number | literal | object | array
    ///
    /// Non-recursive kinds are matched first; structural kinds dispatch into
    /// their rules. The match is exhaustive over [`TokenKind`].
    fn parse_value(&mut self) -> VetResult<()> {
        match self.peek() {
            TokenKind::String
            | TokenKind::Number
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null => {
                self.advance();
                Ok(())
            }
            TokenKind::LeftBrace => self.parse_object(),
            TokenKind::LeftBracket => self.parse_array(),
            found @ (TokenKind::RightBrace
            | TokenKind::RightBracket
            | TokenKind::Colon
            | TokenKind::Comma
            | TokenKind::Eof) => Err(SyntaxError::ExpectedValue { found }),
        }
    }

    /// array := '[' [ value (',' value)* ] ']'
    fn parse_array(&mut self) -> VetResult<()> {
        self.enter()?;
        self.expect(TokenKind::LeftBracket)?;

        if !self.check(TokenKind::RightBracket) {
            self.parse_value()?;
            while self.eat(TokenKind::Comma) {
                self.parse_value()?;
            }
        }

        self.expect(TokenKind::RightBracket)?;
        self.leave();
        Ok(())
    }

    /// Enter a nested object/array, enforcing the depth limit.
    fn enter(&mut self) -> VetResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(SyntaxError::NestingTooDeep {
                limit: self.limits.max_nesting_depth,
            });
        }
        Ok(())
    }

    /// Leave a nested object/array.
    fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// Run both stages over the input, surfacing the first failure.
pub fn check(input: &str) -> VetResult<()> {
    check_with_limits(input, Limits::default())
}

/// Run both stages over the input with custom limits.
pub fn check_with_limits(input: &str, limits: Limits) -> VetResult<()> {
    let tokens = Lexer::new(input, limits)?.tokenize()?;
    Parser::new(tokens, limits).parse_document()
}

/// Validate the input, collapsing any failure into `false`.
pub fn validate(input: &str) -> bool {
    check(input).is_ok()
}

/// Validate the input with custom limits, collapsing any failure into `false`.
pub fn validate_with_limits(input: &str, limits: Limits) -> bool {
    check_with_limits(input, limits).is_ok()
}
