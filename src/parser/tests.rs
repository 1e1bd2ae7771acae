//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs including:
//! - Integer declarations with and without initializers
//! - Expression statements and assignments
//! - Precedence and associativity of `+ - * /`
//! - Statement selection and cursor restoring
//! - Fatal errors

use std::rc::Rc;

use super::{
    expr::{parse_additive, parse_primary},
    parser::{parse, parse_source, parse_source_strict},
    stmt::{parse_assignment_stmt, parse_expression_stmt, parse_int_declaration},
    stream::TokenStream,
};
use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::ErrorImpl,
    lexer::{lexer::tokenize, tokens::TokenKind},
};

fn stream_of(source: &str) -> TokenStream {
    TokenStream::new(tokenize(source))
}

/// The expression under the first (expression) statement.
fn first_expression(source: &str) -> Rc<Node> {
    let program = parse_source(source).unwrap();
    let statement = program.child(0).unwrap();
    assert_eq!(statement.kind(), NodeKind::ExpressionStatement);
    statement.child(0).unwrap()
}

fn assert_leaf(node: &Node, kind: NodeKind, text: &str) {
    assert_eq!(node.kind(), kind);
    assert_eq!(node.text(), text);
    assert!(node.is_leaf());
}

#[test]
fn test_stream_peek_read_unread() {
    let mut stream = stream_of("a = 1;");

    assert_eq!(stream.len(), 4);
    assert_eq!(stream.peek().unwrap().text, "a");
    assert_eq!(stream.read().unwrap().text, "a");
    assert_eq!(stream.peek().unwrap().kind, TokenKind::Assignment);

    stream.unread();
    assert_eq!(stream.get_position(), 0);
    assert_eq!(stream.peek().unwrap().text, "a");
}

#[test]
fn test_stream_end_sentinel() {
    let mut stream = stream_of("x");

    assert!(stream.read().is_some());
    assert!(stream.at_end());
    assert!(stream.peek().is_none());
    assert!(stream.read().is_none());
    assert_eq!(stream.get_position(), 1);
}

#[test]
fn test_stream_unread_clamps_at_start() {
    let mut stream = stream_of("x y");

    stream.unread();
    stream.unread();
    assert_eq!(stream.get_position(), 0);

    stream.read();
    stream.unread();
    stream.unread();
    assert_eq!(stream.get_position(), 0);
}

#[test]
fn test_stream_set_position() {
    let mut stream = stream_of("1 + 2 ;");

    stream.set_position(2);
    assert_eq!(stream.peek().unwrap().text, "2");

    stream.set_position(4);
    assert!(stream.at_end());

    stream.set_position(99);
    assert_eq!(stream.get_position(), 4);

    stream.set_position(0);
    assert_eq!(stream.peek().unwrap().text, "1");
}

#[test]
fn test_stream_empty() {
    let stream = TokenStream::new(vec![]);

    assert!(stream.is_empty());
    assert!(stream.at_end());
    assert!(stream.peek().is_none());
}

#[test]
fn test_parse_left_associative_addition() {
    let expr = first_expression("2+3+4;");

    assert_eq!(expr.kind(), NodeKind::Additive);
    assert_eq!(expr.text(), "+");

    let left = expr.child(0).unwrap();
    assert_eq!(left.kind(), NodeKind::Additive);
    assert_leaf(&left.child(0).unwrap(), NodeKind::IntLiteral, "2");
    assert_leaf(&left.child(1).unwrap(), NodeKind::IntLiteral, "3");

    assert_leaf(&expr.child(1).unwrap(), NodeKind::IntLiteral, "4");
}

#[test]
fn test_parse_left_associative_subtraction_and_division() {
    let expr = first_expression("8-4-2;");
    assert_eq!(expr.text(), "-");
    assert_eq!(expr.child(0).unwrap().text(), "-");
    assert_leaf(&expr.child(1).unwrap(), NodeKind::IntLiteral, "2");

    let expr = first_expression("8/4/2;");
    assert_eq!(expr.kind(), NodeKind::Multiplicative);
    assert_eq!(expr.child(0).unwrap().kind(), NodeKind::Multiplicative);
    assert_leaf(&expr.child(1).unwrap(), NodeKind::IntLiteral, "2");
}

#[test]
fn test_parse_precedence() {
    let expr = first_expression("2+3*4;");

    assert_eq!(expr.kind(), NodeKind::Additive);
    assert_leaf(&expr.child(0).unwrap(), NodeKind::IntLiteral, "2");

    let right = expr.child(1).unwrap();
    assert_eq!(right.kind(), NodeKind::Multiplicative);
    assert_eq!(right.text(), "*");
    assert_leaf(&right.child(0).unwrap(), NodeKind::IntLiteral, "3");
    assert_leaf(&right.child(1).unwrap(), NodeKind::IntLiteral, "4");
}

#[test]
fn test_parse_parentheses_override_precedence() {
    let expr = first_expression("(2+3)*4;");

    assert_eq!(expr.kind(), NodeKind::Multiplicative);
    let left = expr.child(0).unwrap();
    assert_eq!(left.kind(), NodeKind::Additive);
    assert_leaf(&expr.child(1).unwrap(), NodeKind::IntLiteral, "4");
}

#[test]
fn test_parse_nested_parentheses() {
    let expr = first_expression("((x));");

    assert_leaf(&expr, NodeKind::Identifier, "x");
}

#[test]
fn test_parse_declaration_with_initializer() {
    let program = parse_source("int age = 45*2+2;").unwrap();
    let declaration = program.child(0).unwrap();

    assert_eq!(declaration.kind(), NodeKind::IntDeclaration);
    assert_eq!(declaration.text(), "age");
    assert_eq!(declaration.child_count(), 1);

    let value = declaration.child(0).unwrap();
    assert_eq!(value.kind(), NodeKind::Additive);

    let product = value.child(0).unwrap();
    assert_eq!(product.kind(), NodeKind::Multiplicative);
    assert_leaf(&product.child(0).unwrap(), NodeKind::IntLiteral, "45");
    assert_leaf(&product.child(1).unwrap(), NodeKind::IntLiteral, "2");

    assert_leaf(&value.child(1).unwrap(), NodeKind::IntLiteral, "2");
}

#[test]
fn test_parse_declaration_without_initializer() {
    let program = parse_source("int b;").unwrap();
    let declaration = program.child(0).unwrap();

    assert_eq!(declaration.kind(), NodeKind::IntDeclaration);
    assert_eq!(declaration.text(), "b");
    assert!(declaration.is_leaf());
}

#[test]
fn test_parse_assignment() {
    let program = parse_source("age = 10;").unwrap();

    assert_eq!(program.child_count(), 1);
    let assignment = program.child(0).unwrap();
    assert_eq!(assignment.kind(), NodeKind::AssignmentStatement);
    assert_eq!(assignment.text(), "age");
    assert_leaf(&assignment.child(0).unwrap(), NodeKind::IntLiteral, "10");
}

#[test]
fn test_parse_identifier_expression_statement() {
    let program = parse_source("age;").unwrap();
    let statement = program.child(0).unwrap();

    assert_eq!(statement.kind(), NodeKind::ExpressionStatement);
    assert_leaf(&statement.child(0).unwrap(), NodeKind::Identifier, "age");
}

#[test]
fn test_parse_multiple_statements() {
    let program = parse_source("int a = 1; int b; b = a * 2; a + b;").unwrap();

    let kinds: Vec<NodeKind> = program.children().iter().map(|child| child.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::IntDeclaration,
            NodeKind::IntDeclaration,
            NodeKind::AssignmentStatement,
            NodeKind::ExpressionStatement,
        ]
    );
    for child in program.children().iter() {
        assert!(Rc::ptr_eq(&child.parent().unwrap(), &program));
    }
}

#[test]
fn test_parse_empty_program() {
    let program = parse(vec![]).unwrap();

    assert_eq!(program.kind(), NodeKind::Program);
    assert!(program.is_leaf());
    assert!(program.parent().is_none());
}

#[test]
fn test_expression_stmt_restores_cursor() {
    let mut stream = stream_of("age = 10;");
    let start = stream.get_position();

    assert!(parse_expression_stmt(&mut stream).unwrap().is_none());
    assert_eq!(stream.get_position(), start);

    let mut cold = stream_of("age = 10;");
    let warm = parse_assignment_stmt(&mut stream).unwrap().unwrap();
    let fresh = parse_assignment_stmt(&mut cold).unwrap().unwrap();

    assert_eq!(warm.to_string(), fresh.to_string());
    assert_eq!(stream.get_position(), cold.get_position());
}

#[test]
fn test_expression_stmt_restores_cursor_after_long_expression() {
    let mut stream = stream_of("1 + 2 * (3 - 4) 5;");

    assert!(parse_expression_stmt(&mut stream).unwrap().is_none());
    assert_eq!(stream.get_position(), 0);
}

#[test]
fn test_assignment_stmt_pushes_identifier_back() {
    let mut stream = stream_of("age + 1;");

    assert!(parse_assignment_stmt(&mut stream).unwrap().is_none());
    assert_eq!(stream.get_position(), 0);
}

#[test]
fn test_rules_report_no_match_without_consuming() {
    let mut stream = stream_of("; x");

    assert!(parse_int_declaration(&mut stream).unwrap().is_none());
    assert!(parse_expression_stmt(&mut stream).unwrap().is_none());
    assert!(parse_assignment_stmt(&mut stream).unwrap().is_none());
    assert!(parse_primary(&mut stream).unwrap().is_none());
    assert!(parse_additive(&mut stream).unwrap().is_none());
    assert_eq!(stream.get_position(), 0);
}

#[test]
fn test_parse_missing_variable_name() {
    let error = parse_source("int = 5;").unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::MissingVariableName);
    assert_eq!(error.get_token(), Some("="));

    let error = parse_source("int").unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::MissingVariableName);
    assert_eq!(error.get_token(), None);
}

#[test]
fn test_parse_missing_operand() {
    let error = parse_source("2+;").unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorImpl::MissingOperand {
            operator: "+".to_string()
        }
    );

    let error = parse_source("x = 3 * ;").unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorImpl::MissingOperand {
            operator: "*".to_string()
        }
    );
}

#[test]
fn test_parse_unmatched_parenthesis() {
    let error = parse_source("(2+3;").unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::UnmatchedParenthesis);
    assert_eq!(error.get_token(), Some(";"));

    let error = parse_source("(2").unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::UnmatchedParenthesis);
}

#[test]
fn test_parse_empty_parentheses() {
    let error = parse_source("();").unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::MissingExpression {
            after: "(".to_string()
        }
    );
}

#[test]
fn test_parse_missing_semicolon() {
    let error = parse_source("int a = 1").unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::MissingSemicolon);

    let error = parse_source("int a b;").unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::MissingSemicolon);
    assert_eq!(error.get_token(), Some("b"));

    let error = parse_source("a = 1 2;").unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::MissingSemicolon);
}

#[test]
fn test_parse_missing_initializer() {
    let error = parse_source("int a = ;").unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorImpl::MissingExpression {
            after: "=".to_string()
        }
    );

    let error = parse_source("a = ;").unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorImpl::MissingExpression {
            after: "=".to_string()
        }
    );
}

#[test]
fn test_parse_unknown_statement() {
    let error = parse_source("a b;").unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorImpl::UnknownStatement {
            token: "a".to_string()
        }
    );

    let error = parse_source(";").unwrap_err();
    assert_eq!(error.get_error_name(), "UnknownStatement");

    let error = parse_source("a >= 1;").unwrap_err();
    assert_eq!(error.get_error_name(), "UnknownStatement");
}

#[test]
fn test_parse_error_aborts_whole_program() {
    // The valid leading statement is not returned on its own.
    let result = parse_source("int a = 1; a = ;");

    assert!(result.is_err());
}

#[test]
fn test_parse_multiplicative_needs_first_operand() {
    let error = parse_source("*3;").unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::UnknownStatement {
            token: "*".to_string()
        }
    );
}

#[test]
fn test_parse_source_strict() {
    assert!(parse_source_strict("int a = 1;").is_ok());

    let error = parse_source_strict("int a = 1 # 2;").unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::UnrecognisedCharacter { character: '#' });

    // Lenient mode drops the character and sees `1 2`.
    let error = parse_source("int a = 1 # 2;").unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::MissingSemicolon);
}

#[test]
fn test_parent_links() {
    let program = parse_source("x = (1 + 2) * y;").unwrap();
    let assignment = program.child(0).unwrap();
    let product = assignment.child(0).unwrap();
    let sum = product.child(0).unwrap();
    let one = sum.child(0).unwrap();

    assert!(Rc::ptr_eq(&one.parent().unwrap(), &sum));
    assert!(Rc::ptr_eq(&sum.parent().unwrap(), &product));
    assert!(Rc::ptr_eq(&product.parent().unwrap(), &assignment));
    assert!(Rc::ptr_eq(&assignment.parent().unwrap(), &program));
}

#[test]
fn test_committed_equals_versus_operator_errors() {
    let error = parse_source("x = ;").unwrap_err();
    assert_eq!(error.get_error_name(), "MissingExpression");

    let error = parse_source("x = 1 - ;").unwrap_err();
    assert_eq!(error.get_error_name(), "MissingOperand");
}
