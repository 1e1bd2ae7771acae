#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Renders an error for humans.
///
/// ```text
/// Error: MissingSemicolon (Did you miss a semicolon?)
/// -> near `b`
/// ```
pub fn format_error(error: &Error) -> String {
    let mut output = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    match error.get_token() {
        Some(token) => output.push_str(&format!("\n-> near `{}`", token)),
        None => output.push_str("\n-> at end of input"),
    }
    output.push_str(&format!("\n   {}", error));

    output
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::{Error, ErrorImpl};

    #[test]
    fn test_format_error() {
        let error = Error::new(ErrorImpl::MissingSemicolon, Some(String::from("b")));

        assert_eq!(
            super::format_error(&error),
            "Error: MissingSemicolon (Did you miss a semicolon?)\n-> near `b`\n   invalid statement, expecting semicolon"
        );
    }

    #[test]
    fn test_format_error_without_tip() {
        let error = Error::new(
            ErrorImpl::UnknownStatement {
                token: String::from(";"),
            },
            None,
        );

        assert_eq!(
            super::format_error(&error),
            "Error: UnknownStatement\n-> at end of input\n   unknown statement starting at \";\""
        );
    }
}
