//! Error types and error handling for the front end.
//!
//! This module defines the error types shared by the scanner, the parser
//! and the tree builder:
//!
//! - A single `Error` structure carrying the offending token text
//! - Specific error variants for strict scanning, parsing and tree building
//! - Error names and suggestions for reporting

pub mod errors;
