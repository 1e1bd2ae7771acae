//! Utility macros for the front end.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_NODE!` - Creates a detached AST node
//!
//! These macros reduce boilerplate in the lexer and parser implementations.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's raw text
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLiteral, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            text: $text,
        }
    };
}

/// Creates a detached `Rc<Node>` with no children.
///
/// The text may be anything convertible into a `String`; it defaults to
/// the empty string when omitted.
///
/// # Example
///
/// ```ignore
/// let node = MK_NODE!(NodeKind::Additive, token.text.clone());
/// let program = MK_NODE!(NodeKind::Program);
/// ```
#[macro_export]
macro_rules! MK_NODE {
    ($kind:expr) => {
        $crate::ast::ast::Node::new($kind, String::new())
    };
    ($kind:expr, $text:expr) => {
        $crate::ast::ast::Node::new($kind, $text)
    };
}
