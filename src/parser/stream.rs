//! Cursor over a finished token sequence.
//!
//! The parser never re-scans: backtracking is done by saving the cursor
//! with [`TokenStream::get_position`] and restoring it with
//! [`TokenStream::set_position`].

use tracing::warn;

use crate::lexer::tokens::{Token, TokenKind};

#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream { tokens, pos: 0 }
    }

    /// Returns the token under the cursor, or `None` at end of stream.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Whether the token under the cursor has the given kind.
    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind == kind)
    }

    /// Returns the token under the cursor and advances past it.
    pub fn read(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Steps the cursor back by one; a no-op at the start of the stream.
    pub fn unread(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    pub fn get_position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor to `pos`, clamped to the length of the stream.
    pub fn set_position(&mut self, pos: usize) {
        if pos > self.tokens.len() {
            warn!(pos, len = self.tokens.len(), "cursor position out of range, clamping");
        }
        self.pos = pos.min(self.tokens.len());
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}
