use std::rc::Rc;

use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_multiplicative, parse_primary},
    stmt::{parse_assignment_stmt, parse_expression_stmt, parse_int_declaration},
    stream::TokenStream,
};

/// A grammar rule: `Ok(None)` is a silent "no match", `Err` aborts the parse.
pub type RuleHandler = fn(&mut TokenStream) -> Result<Option<Rc<Node>>, Error>;

/// Statement rules in the order they are tried at a statement boundary.
pub const STATEMENT_RULES: [(NodeKind, RuleHandler); 3] = [
    (NodeKind::IntDeclaration, parse_int_declaration as RuleHandler),
    (NodeKind::ExpressionStatement, parse_expression_stmt as RuleHandler),
    (NodeKind::AssignmentStatement, parse_assignment_stmt as RuleHandler),
];

/// One left-associative precedence level of binary operators.
pub struct BinaryLevel {
    pub kind: NodeKind,
    pub operators: &'static [TokenKind],
    pub operand: RuleHandler,
}

pub const ADDITIVE: BinaryLevel = BinaryLevel {
    kind: NodeKind::Additive,
    operators: &[TokenKind::Plus, TokenKind::Minus],
    operand: parse_multiplicative,
};

pub const MULTIPLICATIVE: BinaryLevel = BinaryLevel {
    kind: NodeKind::Multiplicative,
    operators: &[TokenKind::Star, TokenKind::Slash],
    operand: parse_primary,
};
