//! Lexical analysis module for the front end.
//!
//! This module contains the scanner that converts source text into a
//! sequence of tokens for parsing. It handles:
//!
//! - Tokenization with a single-pass finite-state automaton (maximal munch)
//! - Disambiguation of the `int` keyword from identifiers
//! - Lenient (skip) and strict (fail) treatment of unknown characters

pub mod lexer;
pub mod tokens;
