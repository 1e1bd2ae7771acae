use std::fmt::Display;

use thiserror::Error;

use crate::{ast::ast::NodeKind, lexer::tokens::Token};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    token: Option<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, token: Option<String>) -> Self {
        Error {
            internal_error: error_impl,
            token,
        }
    }

    /// Builds an error detected while looking at `token` (`None` at end of input).
    pub fn at(error_impl: ErrorImpl, token: Option<&Token>) -> Self {
        Error::new(error_impl, token.map(|token| token.text.clone()))
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Text of the token the failure was detected at.
    pub fn get_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::MissingOperand { .. } => "MissingOperand",
            ErrorImpl::MissingExpression { .. } => "MissingExpression",
            ErrorImpl::MissingSemicolon => "MissingSemicolon",
            ErrorImpl::UnmatchedParenthesis => "UnmatchedParenthesis",
            ErrorImpl::MissingVariableName => "MissingVariableName",
            ErrorImpl::UnknownStatement { .. } => "UnknownStatement",
            ErrorImpl::NodeAlreadyAttached { .. } => "NodeAlreadyAttached",
            ErrorImpl::CyclicAttachment => "CyclicAttachment",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "Character `{}` is not part of the language",
                character
            )),
            ErrorImpl::MissingOperand { operator } => ErrorTip::Suggestion(format!(
                "Expected an operand after `{}`",
                operator
            )),
            ErrorImpl::MissingExpression { after } => {
                ErrorTip::Suggestion(format!("Expected an expression after `{}`", after))
            }
            ErrorImpl::MissingSemicolon => {
                ErrorTip::Suggestion(String::from("Did you miss a semicolon?"))
            }
            ErrorImpl::UnmatchedParenthesis => {
                ErrorTip::Suggestion(String::from("Expected a closing `)`"))
            }
            ErrorImpl::MissingVariableName => {
                ErrorTip::Suggestion(String::from("Expected a variable name after `int`"))
            }
            ErrorImpl::UnknownStatement { .. } => ErrorTip::None,
            ErrorImpl::NodeAlreadyAttached { .. } => ErrorTip::None,
            ErrorImpl::CyclicAttachment => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("invalid expression, expecting the right part of {operator:?}")]
    MissingOperand { operator: String },
    /// A committed `=` (declaration or assignment) or `(` with no
    /// expression after it. A binary operator missing its right side is
    /// `MissingOperand` instead.
    #[error("expecting an expression after {after:?}")]
    MissingExpression { after: String },
    #[error("invalid statement, expecting semicolon")]
    MissingSemicolon,
    #[error("expecting right parenthesis")]
    UnmatchedParenthesis,
    #[error("variable name expected")]
    MissingVariableName,
    #[error("unknown statement starting at {token:?}")]
    UnknownStatement { token: String },
    #[error("{kind} node is already attached to a parent")]
    NodeAlreadyAttached { kind: NodeKind },
    #[error("node cannot be attached beneath itself")]
    CyclicAttachment,
}
