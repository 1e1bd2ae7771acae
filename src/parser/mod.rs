//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an Abstract Syntax Tree. It handles:
//!
//! - Statement parsing (declarations, expression statements, assignments)
//! - Expression parsing with left-associative `+ - * /` and parentheses
//! - Speculative statement selection with cursor snapshots
//!
//! Every rule reports either a node, a silent "no match", or a fatal
//! error that aborts the whole parse.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod stream;

#[cfg(test)]
mod tests;
