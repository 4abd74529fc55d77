use crate::env::Environment;
use crate::value::Value;
use std::fmt::Write;

/// JSON formatting style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Compact: no whitespace between tokens.
    Compact,
    /// Pretty: 2-space indented, one entry per line.
    #[default]
    Pretty,
}

struct JsonWriter {
    buf: String,
    style: JsonStyle,
    depth: usize,
}

impl JsonWriter {
    fn new(style: JsonStyle) -> Self {
        JsonWriter {
            buf: String::new(),
            style,
            depth: 0,
        }
    }

    fn is_pretty(&self) -> bool {
        matches!(self.style, JsonStyle::Pretty)
    }

    fn newline(&mut self) {
        if self.is_pretty() {
            self.buf.push('\n');
            for _ in 0..self.depth {
                self.buf.push_str("  ");
            }
        }
    }

    fn space(&mut self) {
        if self.is_pretty() {
            self.buf.push(' ');
        }
    }

    fn write_environment(&mut self, env: &Environment) {
        self.buf.push('{');
        if env.is_empty() {
            self.buf.push('}');
            return;
        }
        self.depth += 1;

        let mut first = true;
        for (name, value) in env.iter() {
            self.entry_sep(&mut first);
            self.write_key(name);
            self.write_value(value);
        }

        self.depth -= 1;
        self.newline();
        self.buf.push('}');
    }

    fn write_value(&mut self, value: &Value) {
        match value {
            Value::Integer(i) => {
                let _ = write!(&mut self.buf, "{}", i);
            }
            Value::Float(f) => self.write_float(*f),
            Value::Text(s) => self.write_string_value(s),
            Value::Bool(b) => self.buf.push_str(if *b { "true" } else { "false" }),
            Value::Null => self.buf.push_str("null"),
        }
    }

    /// Floats always keep a fractional part so they read back as floats.
    /// JSON has no infinities or NaN; those become `null`.
    fn write_float(&mut self, f: f64) {
        if !f.is_finite() {
            self.buf.push_str("null");
            return;
        }
        let s = format!("{:?}", f);
        self.buf.push_str(&s);
    }

    fn entry_sep(&mut self, first: &mut bool) {
        if *first {
            *first = false;
        } else {
            self.buf.push(',');
        }
        self.newline();
    }

    fn write_key(&mut self, key: &str) {
        self.write_string_value(key);
        self.buf.push(':');
        self.space();
    }

    fn write_string_value(&mut self, s: &str) {
        self.buf.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.buf.push_str("\\\""),
                '\\' => self.buf.push_str("\\\\"),
                '\n' => self.buf.push_str("\\n"),
                '\r' => self.buf.push_str("\\r"),
                '\t' => self.buf.push_str("\\t"),
                '\u{0008}' => self.buf.push_str("\\b"),
                '\u{000C}' => self.buf.push_str("\\f"),
                c if c < '\u{0020}' => {
                    let _ = write!(&mut self.buf, "\\u{:04x}", c as u32);
                }
                c => self.buf.push(c),
            }
        }
        self.buf.push('"');
    }
}

/// Serialize an environment's variables in the given style.
pub fn render(env: &Environment, style: JsonStyle) -> String {
    let mut w = JsonWriter::new(style);
    w.write_environment(env);
    w.buf
}

/// Serialize an environment to a compact JSON string (no whitespace).
pub fn to_json(env: &Environment) -> String {
    render(env, JsonStyle::Compact)
}

/// Serialize an environment to a pretty-printed JSON string (2-space indent).
pub fn to_json_pretty(env: &Environment) -> String {
    render(env, JsonStyle::Pretty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Environment {
        let mut env = Environment::new();
        env.set("b", Value::Integer(2));
        env.set("a", Value::Float(2.0));
        env.set("s", Value::Text("say \"hi\"\n".to_string()));
        env.set("t", Value::Bool(true));
        env.set("n", Value::Null);
        env
    }

    #[test]
    fn compact_keeps_insertion_order() {
        assert_eq!(
            to_json(&sample()),
            r#"{"b":2,"a":2.0,"s":"say \"hi\"\n","t":true,"n":null}"#
        );
    }

    #[test]
    fn pretty_indents_two_spaces() {
        let mut env = Environment::new();
        env.set("x", Value::Integer(1));
        env.set("y", Value::Float(-0.5));
        assert_eq!(to_json_pretty(&env), "{\n  \"x\": 1,\n  \"y\": -0.5\n}");
    }

    #[test]
    fn empty_environment() {
        assert_eq!(to_json(&Environment::new()), "{}");
        assert_eq!(to_json_pretty(&Environment::new()), "{}");
    }

    #[test]
    fn non_finite_floats_are_null() {
        let mut env = Environment::new();
        env.set("inf", Value::Float(f64::INFINITY));
        assert_eq!(to_json(&env), r#"{"inf":null}"#);
    }

    #[test]
    fn accumulator_is_not_rendered() {
        let mut env = Environment::new();
        env.set_accumulator(Value::Integer(9));
        assert_eq!(to_json(&env), "{}");
    }

    #[test]
    fn output_is_valid_json() {
        let v: serde_json::Value = serde_json::from_str(&to_json_pretty(&sample())).unwrap();
        assert_eq!(v["b"], 2);
        assert!(v["a"].is_f64());
        assert_eq!(v["s"], "say \"hi\"\n");
        assert!(v["n"].is_null());
    }
}
