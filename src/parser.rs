use crate::ast::*;
use crate::error::PyscalError;
use crate::lines::{split_lines, SourceLine};
use crate::operation::{find_operation, Arity, Operation};
use tracing::{debug, trace};

/// Parse source text into one statement per non-blank line.
///
/// Every line is parsed before anything runs, so the first parse error
/// anywhere in the source aborts the whole program.
pub fn parse(source: &str) -> Result<Vec<Statement>, PyscalError> {
    split_lines(source).into_iter().map(parse_line).collect()
}

/// Parse a single numbered line.
pub fn parse_line(line: SourceLine<'_>) -> Result<Statement, PyscalError> {
    let body = build(line.text, 0, line.number)?;
    debug!(line = line.number, tree = ?body, "parsed line");
    Ok(Statement {
        line: line.number,
        text: line.text.to_string(),
        body,
    })
}

/// Build the tree for `text` at nesting depth `level`.
///
/// The registry is scanned in priority order and the first operator whose
/// symbol occurs anywhere in `text` splits it on every occurrence. Each
/// segment is then scanned again one level deeper, so a line holding both
/// `+` and `-` is split on `+` first. A leading `-` therefore leaves an
/// empty operand and `-5` is rejected rather than read as a negative number.
pub fn build(text: &str, level: usize, line: usize) -> Result<Operand, PyscalError> {
    let text = text.trim();
    let op = match find_operation(text) {
        Some(op) => op,
        None => return Ok(Operand::raw(text)),
    };
    trace!(line, level, symbol = op.symbol, "splitting");

    let segments = split_segments(text, op, line)?;
    match op.arity {
        Arity::Unary => {
            if segments.len() > 2 || level > 0 {
                return Err(PyscalError::MultipleAssignment { line });
            }
            let target = Operand::raw(segments[0]);
            let value = build(segments[1], level + 1, line)?;
            Ok(Operand::from(ActionNode {
                action: op.action,
                operands: vec![target, value],
            }))
        }
        Arity::Binary => {
            let operands = segments
                .into_iter()
                .map(|segment| build(segment, level + 1, line))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Operand::from(ActionNode {
                action: op.action,
                operands,
            }))
        }
    }
}

/// Split on every occurrence of the operator, rejecting empty operands.
fn split_segments<'a>(
    text: &'a str,
    op: &Operation,
    line: usize,
) -> Result<Vec<&'a str>, PyscalError> {
    let segments: Vec<&str> = text.split(op.symbol).map(str::trim).collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(PyscalError::EmptyOperand {
            line,
            operator: op.symbol,
        });
    }
    Ok(segments)
}
