use crate::json::JsonStyle;

/// What to do with a token that matches none of the literal forms and
/// does not name a bound variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedPolicy {
    /// Keep the token's raw text as a `Text` value.
    #[default]
    PassThrough,
    /// Fail with `UnboundVariable` or `InvalidLiteral`.
    Reject,
}

/// Interpreter options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub unresolved: UnresolvedPolicy,
    pub style: JsonStyle,
}

impl Config {
    pub fn strict() -> Self {
        Config {
            unresolved: UnresolvedPolicy::Reject,
            ..Config::default()
        }
    }
}
