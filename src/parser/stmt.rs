use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    MK_NODE,
};

use super::{expr::parse_additive, lookups::STATEMENT_RULES, stream::TokenStream};

/// Tries each statement rule in turn; if none matches the parse is over.
pub fn parse_stmt(stream: &mut TokenStream) -> Result<Rc<Node>, Error> {
    for (kind, rule) in STATEMENT_RULES.iter() {
        trace!(rule = %kind, pos = stream.get_position(), "trying statement rule");

        if let Some(stmt) = rule(stream)? {
            debug!(statement = %kind, "parsed statement");
            return Ok(stmt);
        }
    }

    let token = stream
        .peek()
        .map(|token| token.text.clone())
        .unwrap_or_default();
    Err(Error::at(
        ErrorImpl::UnknownStatement { token },
        stream.peek(),
    ))
}

/// `'int' Identifier ('=' Additive)? ';'`
pub fn parse_int_declaration(stream: &mut TokenStream) -> Result<Option<Rc<Node>>, Error> {
    if !stream.peek_is(TokenKind::Int) {
        return Ok(None);
    }
    stream.read();

    let variable_name = match stream.peek() {
        Some(token) if token.kind == TokenKind::Identifier => token.text.clone(),
        other => return Err(Error::at(ErrorImpl::MissingVariableName, other)),
    };
    stream.read();

    let node = MK_NODE!(NodeKind::IntDeclaration, variable_name);

    if stream.peek_is(TokenKind::Assignment) {
        stream.read();
        node.add_child(expect_value(stream)?)?;
    }

    expect_semicolon(stream)?;

    Ok(Some(node))
}

/// `Additive ';'`, undone entirely when the semicolon is missing so the
/// same tokens can be retried as an assignment.
pub fn parse_expression_stmt(stream: &mut TokenStream) -> Result<Option<Rc<Node>>, Error> {
    let pos = stream.get_position();

    let Some(expr) = parse_additive(stream)? else {
        return Ok(None);
    };

    if !stream.peek_is(TokenKind::SemiColon) {
        debug!(pos, "expression without semicolon, restoring cursor");
        stream.set_position(pos);
        return Ok(None);
    }
    stream.read();

    let node = MK_NODE!(NodeKind::ExpressionStatement);
    node.add_child(expr)?;

    Ok(Some(node))
}

/// `Identifier '=' Additive ';'`
pub fn parse_assignment_stmt(stream: &mut TokenStream) -> Result<Option<Rc<Node>>, Error> {
    let variable_name = match stream.peek() {
        Some(token) if token.kind == TokenKind::Identifier => token.text.clone(),
        _ => return Ok(None),
    };
    stream.read();

    if !stream.peek_is(TokenKind::Assignment) {
        trace!(variable = %variable_name, "no assignment operator, pushing identifier back");
        stream.unread();
        return Ok(None);
    }
    stream.read();

    let node = MK_NODE!(NodeKind::AssignmentStatement, variable_name);
    node.add_child(expect_value(stream)?)?;

    expect_semicolon(stream)?;

    Ok(Some(node))
}

/// The expression after a consumed `=`.
fn expect_value(stream: &mut TokenStream) -> Result<Rc<Node>, Error> {
    parse_additive(stream)?.ok_or_else(|| {
        Error::at(
            ErrorImpl::MissingExpression {
                after: String::from("="),
            },
            stream.peek(),
        )
    })
}

fn expect_semicolon(stream: &mut TokenStream) -> Result<(), Error> {
    if !stream.peek_is(TokenKind::SemiColon) {
        return Err(Error::at(ErrorImpl::MissingSemicolon, stream.peek()));
    }
    stream.read();
    Ok(())
}
