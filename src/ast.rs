/// Intermediate representation produced by the parser, one tree per line.
use crate::operation::Action;

/// An operand of an action: either source text still waiting to be coerced,
/// or a sub-expression that was split further.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Unparsed leaf text, coerced only when the interpreter consumes it.
    Raw(String),
    Nested(ActionNode),
}

/// An operator applied to its operands in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionNode {
    pub action: Action,
    pub operands: Vec<Operand>,
}

/// A parsed line (the IR between the parser and interpreter).
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// 1-based source line
    pub line: usize,
    pub text: String,
    /// `Raw` when the line contains no operator at all.
    pub body: Operand,
}

impl Operand {
    pub fn raw(text: &str) -> Self {
        Operand::Raw(text.to_string())
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Operand::Raw(_))
    }

    /// Get the inner node, if this operand was split further.
    pub fn as_node(&self) -> Option<&ActionNode> {
        match self {
            Operand::Nested(n) => Some(n),
            Operand::Raw(_) => None,
        }
    }
}

impl From<ActionNode> for Operand {
    fn from(node: ActionNode) -> Self {
        Operand::Nested(node)
    }
}
