use crate::error::PyscalError;
use crate::operation::Action;

/// A runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl Value {
    /// Name of the value's type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Bool(_) => "bool",
            Value::Null => "none",
        }
    }

    /// `self + rhs`. Integers stay integers (checked), any float operand
    /// makes the result a float, and two texts concatenate.
    pub fn add(self, rhs: Value, line: usize) -> Result<Value, PyscalError> {
        match (self, rhs) {
            (Value::Integer(a), Value::Integer(b)) => a
                .checked_add(b)
                .map(Value::Integer)
                .ok_or(PyscalError::IntegerOverflow {
                    line,
                    action: Action::Add,
                }),
            (Value::Text(mut a), Value::Text(b)) => {
                a.push_str(&b);
                Ok(Value::Text(a))
            }
            (a, b) => float_op(a, b, Action::Add, line, |x, y| x + y),
        }
    }

    /// `self - rhs`. Same numeric promotion as `add`; text does not subtract.
    pub fn subtract(self, rhs: Value, line: usize) -> Result<Value, PyscalError> {
        match (self, rhs) {
            (Value::Integer(a), Value::Integer(b)) => a
                .checked_sub(b)
                .map(Value::Integer)
                .ok_or(PyscalError::IntegerOverflow {
                    line,
                    action: Action::Subtract,
                }),
            (a, b) => float_op(a, b, Action::Subtract, line, |x, y| x - y),
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

fn float_op(
    a: Value,
    b: Value,
    action: Action,
    line: usize,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Value, PyscalError> {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => Ok(Value::Float(f(x, y))),
        _ => Err(PyscalError::InvalidOperands {
            line,
            action,
            left: a.type_name(),
            right: b.type_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_stay_integers() {
        assert_eq!(
            Value::Integer(2).add(Value::Integer(3), 1),
            Ok(Value::Integer(5))
        );
        assert_eq!(
            Value::Integer(2).subtract(Value::Integer(5), 1),
            Ok(Value::Integer(-3))
        );
    }

    #[test]
    fn mixed_numbers_promote_to_float() {
        assert_eq!(
            Value::Integer(1).add(Value::Float(0.5), 1),
            Ok(Value::Float(1.5))
        );
        assert_eq!(
            Value::Float(2.5).subtract(Value::Integer(1), 1),
            Ok(Value::Float(1.5))
        );
    }

    #[test]
    fn texts_concatenate() {
        assert_eq!(
            Value::Text("ab".to_string()).add(Value::Text("cd".to_string()), 1),
            Ok(Value::Text("abcd".to_string()))
        );
    }

    #[test]
    fn text_does_not_subtract() {
        let err = Value::Text("ab".to_string())
            .subtract(Value::Text("b".to_string()), 7)
            .unwrap_err();
        assert_eq!(err.code(), "invalid-operands");
        assert_eq!(err.line(), 7);
    }

    #[test]
    fn bool_and_none_are_not_numbers() {
        let err = Value::Bool(true).add(Value::Integer(1), 3).unwrap_err();
        assert_eq!(
            err,
            PyscalError::InvalidOperands {
                line: 3,
                action: Action::Add,
                left: "bool",
                right: "integer",
            }
        );
        assert!(Value::Null.add(Value::Null, 3).is_err());
    }

    #[test]
    fn integer_overflow_is_reported() {
        let err = Value::Integer(i64::MAX).add(Value::Integer(1), 2).unwrap_err();
        assert_eq!(err.code(), "integer-overflow");
        let err = Value::Integer(i64::MIN)
            .subtract(Value::Integer(1), 2)
            .unwrap_err();
        assert_eq!(err.code(), "integer-overflow");
    }
}
