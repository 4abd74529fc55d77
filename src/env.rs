use crate::value::Value;
use std::collections::HashMap;

/// The variables of one program run, in the order they were first assigned.
///
/// Also holds the accumulator: the pending result of the most recent
/// `+`/`-` sub-expression. It is not a variable and is never rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    entries: Vec<(String, Value)>,
    index: HashMap<String, usize>,
    accumulator: Option<Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    /// Bind `name`. A rebound name keeps its original position.
    pub fn set(&mut self, name: &str, value: Value) {
        match self.index.get(name) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), value));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Variables in first-assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn accumulator(&self) -> Option<&Value> {
        self.accumulator.as_ref()
    }

    pub(crate) fn set_accumulator(&mut self, value: Value) {
        self.accumulator = Some(value);
    }

    pub(crate) fn take_accumulator(&mut self) -> Option<Value> {
        self.accumulator.take()
    }

    /// Serialize the variables to compact JSON.
    pub fn to_json(&self) -> String {
        crate::json::to_json(self)
    }

    /// Serialize the variables to pretty-printed JSON (2-space indent).
    pub fn to_json_pretty(&self) -> String {
        crate::json::to_json_pretty(self)
    }
}
