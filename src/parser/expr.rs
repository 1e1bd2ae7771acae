use std::rc::Rc;

use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    MK_NODE,
};

use super::{
    lookups::{BinaryLevel, ADDITIVE, MULTIPLICATIVE},
    stream::TokenStream,
};

pub fn parse_additive(stream: &mut TokenStream) -> Result<Option<Rc<Node>>, Error> {
    parse_binary_expr(stream, &ADDITIVE)
}

pub fn parse_multiplicative(stream: &mut TokenStream) -> Result<Option<Rc<Node>>, Error> {
    parse_binary_expr(stream, &MULTIPLICATIVE)
}

/// Folds `operand (op operand)*` to the left, so `a-b-c` is `(a-b)-c`.
///
/// Once an operator is consumed its right operand is mandatory.
pub fn parse_binary_expr(
    stream: &mut TokenStream,
    level: &BinaryLevel,
) -> Result<Option<Rc<Node>>, Error> {
    let Some(mut left) = (level.operand)(stream)? else {
        return Ok(None);
    };

    while let Some(operator) = stream
        .peek()
        .filter(|token| token.is_one_of_many(level.operators))
        .cloned()
    {
        stream.read();

        let Some(right) = (level.operand)(stream)? else {
            return Err(Error::at(
                ErrorImpl::MissingOperand {
                    operator: operator.text,
                },
                stream.peek(),
            ));
        };

        let node = MK_NODE!(level.kind, operator.text);
        node.add_child(left)?;
        node.add_child(right)?;
        left = node;
    }

    Ok(Some(left))
}

pub fn parse_primary(stream: &mut TokenStream) -> Result<Option<Rc<Node>>, Error> {
    let Some(token) = stream.peek() else {
        return Ok(None);
    };

    let token_kind = token.kind;
    let kind = match token_kind {
        TokenKind::IntLiteral => NodeKind::IntLiteral,
        TokenKind::Identifier => NodeKind::Identifier,
        TokenKind::LeftParen => return parse_grouping_expr(stream),
        _ => return Ok(None),
    };

    let text = token.text.clone();
    stream.read();
    Ok(Some(MK_NODE!(kind, text)))
}

/// `'(' Additive ')'`; the opening parenthesis commits to the rest.
pub fn parse_grouping_expr(stream: &mut TokenStream) -> Result<Option<Rc<Node>>, Error> {
    stream.read();

    let Some(expr) = parse_additive(stream)? else {
        return Err(Error::at(
            ErrorImpl::MissingExpression {
                after: String::from("("),
            },
            stream.peek(),
        ));
    };

    if !stream.peek_is(TokenKind::RightParen) {
        return Err(Error::at(ErrorImpl::UnmatchedParenthesis, stream.peek()));
    }
    stream.read();

    Ok(Some(expr))
}
