use crate::operation::Action;
use thiserror::Error;

/// A fatal error, tagged with the 1-based source line it was raised on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PyscalError {
    #[error("Empty operand for '{operator}'")]
    EmptyOperand { line: usize, operator: &'static str },

    #[error("Assignment must appear once, at the start of a line")]
    MultipleAssignment { line: usize },

    #[error("Cannot {action} {left} and {right}")]
    InvalidOperands {
        line: usize,
        action: Action,
        left: &'static str,
        right: &'static str,
    },

    #[error("Integer overflow in {action}")]
    IntegerOverflow { line: usize, action: Action },

    #[error("Unbound variable '{name}'")]
    UnboundVariable { line: usize, name: String },

    #[error("Invalid literal '{token}'")]
    InvalidLiteral { line: usize, token: String },
}

impl PyscalError {
    /// The source line the error was raised on.
    pub fn line(&self) -> usize {
        match self {
            PyscalError::EmptyOperand { line, .. }
            | PyscalError::MultipleAssignment { line }
            | PyscalError::InvalidOperands { line, .. }
            | PyscalError::IntegerOverflow { line, .. }
            | PyscalError::UnboundVariable { line, .. }
            | PyscalError::InvalidLiteral { line, .. } => *line,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PyscalError::EmptyOperand { .. } => "empty-operand",
            PyscalError::MultipleAssignment { .. } => "multiple-assignment",
            PyscalError::InvalidOperands { .. } => "invalid-operands",
            PyscalError::IntegerOverflow { .. } => "integer-overflow",
            PyscalError::UnboundVariable { .. } => "unbound-variable",
            PyscalError::InvalidLiteral { .. } => "invalid-literal",
        }
    }

    /// True for errors raised while building trees, before anything ran.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            PyscalError::EmptyOperand { .. } | PyscalError::MultipleAssignment { .. }
        )
    }
}
