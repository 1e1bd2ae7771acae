//! Entry points turning tokens (or source text) into a `Program` tree.
//!
//! This is the single boundary that observes a parse failure: every
//! grammar rule propagates a fatal error straight up to here, and no
//! partial tree ever escapes.

use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::Error,
    lexer::{
        lexer::{tokenize, tokenize_strict},
        tokens::Token,
    },
    MK_NODE,
};

use super::{stmt::parse_stmt, stream::TokenStream};

/// Parses a token sequence into a `Program` node.
///
/// # Arguments
///
/// * `tokens` - Tokens produced by the lexer
///
/// # Returns
///
/// The root `Program` node, or the first fatal error encountered.
pub fn parse(tokens: Vec<Token>) -> Result<Rc<Node>, Error> {
    let mut stream = TokenStream::new(tokens);
    parse_program(&mut stream)
}

/// `Program := Statement*`, consuming the stream to its end.
pub fn parse_program(stream: &mut TokenStream) -> Result<Rc<Node>, Error> {
    let program = MK_NODE!(NodeKind::Program);

    while !stream.at_end() {
        program.add_child(parse_stmt(stream)?)?;
    }

    debug!(statements = program.child_count(), "parsed program");
    Ok(program)
}

/// Scans leniently and parses.
pub fn parse_source(source: &str) -> Result<Rc<Node>, Error> {
    parse(tokenize(source))
}

/// Scans strictly, rejecting unknown characters, and parses.
pub fn parse_source_strict(source: &str) -> Result<Rc<Node>, Error> {
    parse(tokenize_strict(source)?)
}
