use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::tokens::{Token, TokenKind, SINGLE_CHAR_LOOKUP};

/// States of the scanning automaton.
///
/// `IdInt1..IdInt3` track the prefixes `i`, `in` and `int` of the only
/// keyword; any other identifier character sends them back to `Identifier`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DfaState {
    Initial,
    Identifier,
    IdInt1,
    IdInt2,
    IdInt3,
    GT,
    GE,
    IntLiteral,
    SingleChar,
}

fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

fn continues_identifier(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

#[derive(Debug, Default)]
pub struct Lexer {
    tokens: Vec<Token>,
    token_text: String,
    token_kind: Option<TokenKind>,
    unrecognised: Option<char>,
}

impl Lexer {
    pub fn new() -> Lexer {
        Lexer::default()
    }

    /// Runs the automaton over `source` and returns the final state.
    pub fn scan(&mut self, source: &str) -> DfaState {
        let mut state = DfaState::Initial;

        for ch in source.chars() {
            state = self.step(state, ch);
        }

        if state == DfaState::IdInt3 {
            self.token_kind = Some(TokenKind::Int);
        }
        self.finish_token();

        state
    }

    /// First character the automaton could not classify, if any.
    pub fn unrecognised(&self) -> Option<char> {
        self.unrecognised
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    fn step(&mut self, state: DfaState, ch: char) -> DfaState {
        match state {
            DfaState::Initial => self.init_token(ch),
            DfaState::Identifier => {
                if continues_identifier(ch) {
                    self.token_text.push(ch);
                    DfaState::Identifier
                } else {
                    self.init_token(ch)
                }
            }
            DfaState::IdInt1 => self.keyword_step(ch, 'n', DfaState::IdInt2),
            DfaState::IdInt2 => self.keyword_step(ch, 't', DfaState::IdInt3),
            DfaState::IdInt3 => {
                if continues_identifier(ch) {
                    self.token_text.push(ch);
                    DfaState::Identifier
                } else {
                    self.token_kind = Some(TokenKind::Int);
                    self.init_token(ch)
                }
            }
            DfaState::GT => {
                if ch == '=' {
                    self.token_kind = Some(TokenKind::GE);
                    self.token_text.push(ch);
                    DfaState::GE
                } else {
                    self.init_token(ch)
                }
            }
            DfaState::IntLiteral => {
                if ch.is_ascii_digit() {
                    self.token_text.push(ch);
                    DfaState::IntLiteral
                } else {
                    self.init_token(ch)
                }
            }
            DfaState::GE | DfaState::SingleChar => self.init_token(ch),
        }
    }

    fn keyword_step(&mut self, ch: char, expected: char, next: DfaState) -> DfaState {
        if ch == expected {
            self.token_text.push(ch);
            next
        } else if continues_identifier(ch) {
            self.token_text.push(ch);
            DfaState::Identifier
        } else {
            self.init_token(ch)
        }
    }

    /// Finalizes the pending token, then decides which state `ch` starts.
    fn init_token(&mut self, ch: char) -> DfaState {
        self.finish_token();

        let (state, kind) = if ch.is_ascii_alphabetic() {
            let state = if ch == 'i' {
                DfaState::IdInt1
            } else {
                DfaState::Identifier
            };
            (state, TokenKind::Identifier)
        } else if ch.is_ascii_digit() {
            (DfaState::IntLiteral, TokenKind::IntLiteral)
        } else if ch == '>' {
            (DfaState::GT, TokenKind::GT)
        } else if let Some(kind) = SINGLE_CHAR_LOOKUP.get(&ch) {
            (DfaState::SingleChar, *kind)
        } else {
            if !is_blank(ch) {
                trace!(character = ?ch, "dropped unrecognised character");
                self.unrecognised.get_or_insert(ch);
            }
            return DfaState::Initial;
        };

        self.token_kind = Some(kind);
        self.token_text.push(ch);
        state
    }

    fn finish_token(&mut self) {
        if self.token_text.is_empty() {
            return;
        }

        let text = std::mem::take(&mut self.token_text);
        if let Some(kind) = self.token_kind.take() {
            trace!(%kind, text = %text, "emitted token");
            self.tokens.push(MK_TOKEN!(kind, text));
        }
    }
}

/// Scans `source` into tokens, silently dropping characters outside the
/// language.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new();
    lex.scan(source);

    let tokens = lex.into_tokens();
    debug!(count = tokens.len(), "tokenized source");
    tokens
}

/// Scans `source` into tokens, failing on the first character outside the
/// language.
pub fn tokenize_strict(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new();
    lex.scan(source);

    if let Some(character) = lex.unrecognised() {
        return Err(Error::new(
            ErrorImpl::UnrecognisedCharacter { character },
            Some(character.to_string()),
        ));
    }

    let tokens = lex.into_tokens();
    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}
