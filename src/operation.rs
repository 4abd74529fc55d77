/// How many operands an operator's line split is expected to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Splits into exactly a target and a value (`:=`).
    Unary,
    /// Splits into any number of operands (`+`, `-`).
    Binary,
}

/// The closed set of things a node can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Assign,
    Add,
    Subtract,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::Assign => "assign",
            Action::Add => "add",
            Action::Subtract => "subtract",
        }
    }
}

/// A registered operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub symbol: &'static str,
    pub arity: Arity,
    pub action: Action,
}

/// Every operator the language knows, in priority order. The first entry
/// whose symbol occurs anywhere in a line decides how that line is split.
pub const OPERATIONS: [Operation; 3] = [
    Operation {
        symbol: ":=",
        arity: Arity::Unary,
        action: Action::Assign,
    },
    Operation {
        symbol: "+",
        arity: Arity::Binary,
        action: Action::Add,
    },
    Operation {
        symbol: "-",
        arity: Arity::Binary,
        action: Action::Subtract,
    },
];

/// Find the highest-priority operator whose symbol occurs in `text`.
pub fn find_operation(text: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| text.contains(op.symbol))
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
