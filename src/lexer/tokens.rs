use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Operators and punctuation that form a complete token on their own.
    pub static ref SINGLE_CHAR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('*', TokenKind::Star);
        map.insert('/', TokenKind::Slash);
        map.insert(';', TokenKind::SemiColon);
        map.insert('(', TokenKind::LeftParen);
        map.insert(')', TokenKind::RightParen);
        map.insert('=', TokenKind::Assignment);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Plus,
    Minus,
    Star,
    Slash,

    GT, // >
    GE, // >=

    SemiColon,
    LeftParen,
    RightParen,

    Assignment, // =

    // Reserved
    Int,

    Identifier,
    IntLiteral,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
