use crate::config::UnresolvedPolicy;
use crate::env::Environment;
use crate::error::PyscalError;
use crate::value::Value;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{trace, warn};

struct Patterns {
    integer: Regex,
    text: Regex,
    float: Regex,
    identifier: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        integer: compile(r"^[0-9]+$"),
        text: compile(r#"^"[^"\n]*"$"#),
        float: compile(r"^(?:[0-9]+\.[0-9]*|\.[0-9]+)$"),
        identifier: compile(r"^[A-Za-z_][A-Za-z0-9_]*$"),
    })
}

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("invalid built-in pattern {pattern:?}: {e}"),
    }
}

fn reserved(token: &str) -> Option<Value> {
    match token {
        "true" => Some(Value::Bool(true)),
        "false" => Some(Value::Bool(false)),
        "none" => Some(Value::Null),
        _ => None,
    }
}

/// Turn a raw token into a value.
///
/// Literal forms are tried in a fixed order: integer, quoted text, float,
/// reserved word, then bound variable. A token that matches none of them
/// is handled according to `policy`.
pub fn coerce(
    token: &str,
    env: &Environment,
    policy: UnresolvedPolicy,
    line: usize,
) -> Result<Value, PyscalError> {
    let p = patterns();

    if p.integer.is_match(token) {
        if let Ok(i) = token.parse::<i64>() {
            return Ok(Value::Integer(i));
        }
    }
    if p.text.is_match(token) {
        return Ok(Value::Text(token[1..token.len() - 1].to_string()));
    }
    if p.float.is_match(token) {
        if let Ok(f) = token.parse::<f64>() {
            return Ok(Value::Float(f));
        }
    }
    if let Some(value) = reserved(token) {
        return Ok(value);
    }

    let is_identifier = p.identifier.is_match(token);
    if is_identifier {
        if let Some(value) = env.get(token) {
            trace!(line, name = token, ?value, "resolved variable");
            return Ok(value.clone());
        }
    }

    match policy {
        UnresolvedPolicy::PassThrough => {
            warn!(line, token, "unresolved token passed through as text");
            Ok(Value::Text(token.to_string()))
        }
        UnresolvedPolicy::Reject if is_identifier => Err(PyscalError::UnboundVariable {
            line,
            name: token.to_string(),
        }),
        UnresolvedPolicy::Reject => Err(PyscalError::InvalidLiteral {
            line,
            token: token.to_string(),
        }),
    }
}
