use crate::ast::*;
use crate::coerce::coerce;
use crate::config::Config;
use crate::env::Environment;
use crate::error::PyscalError;
use crate::operation::Action;
use crate::value::Value;
use tracing::{debug, trace};

/// Execute parsed statements in order against a fresh environment,
/// returning the final environment or the first runtime error.
pub fn execute(statements: &[Statement], config: Config) -> Result<Environment, PyscalError> {
    let mut interpreter = Interpreter::new(config);
    for stmt in statements {
        interpreter.execute_statement(stmt)?;
    }
    Ok(interpreter.into_environment())
}

/// Tree-walking executor. All evaluation state lives in the environment:
/// the variables plus the accumulator that carries each `+`/`-` result up
/// to the node that consumes it.
pub struct Interpreter {
    env: Environment,
    config: Config,
}

impl Interpreter {
    pub fn new(config: Config) -> Self {
        Interpreter {
            env: Environment::new(),
            config,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn into_environment(self) -> Environment {
        self.env
    }

    pub fn execute_statement(&mut self, stmt: &Statement) -> Result<(), PyscalError> {
        debug!(line = stmt.line, text = %stmt.text, "executing");
        match &stmt.body {
            // A bare value: nothing to do once it has been checked.
            Operand::Raw(token) => self.coerce(token, stmt.line).map(drop),
            Operand::Nested(node) => self.execute_node(node, None, stmt.line),
        }
    }

    /// Run `node`'s nested operands, then the node itself. Raw operands are
    /// moved ahead of nested ones (keeping their relative order) so that each
    /// sub-expression's result is in the accumulator when its parent runs.
    /// Children are told which action encloses them.
    fn execute_node(
        &mut self,
        node: &ActionNode,
        enclosing: Option<Action>,
        line: usize,
    ) -> Result<(), PyscalError> {
        let mut operands: Vec<&Operand> = node.operands.iter().collect();
        operands.sort_by_key(|operand| !operand.is_raw());

        for child in operands.iter().filter_map(|operand| operand.as_node()) {
            self.execute_node(child, Some(node.action), line)?;
        }

        match node.action {
            Action::Assign => self.assign(&operands, line),
            Action::Add => self.add(&operands, line),
            Action::Subtract => self.subtract(&operands, enclosing, line),
        }
    }

    /// `name := value`. A nested value has already left its result in the
    /// accumulator. The accumulator is cleared either way.
    fn assign(&mut self, operands: &[&Operand], line: usize) -> Result<(), PyscalError> {
        let [Operand::Raw(name), value] = operands else {
            unreachable!("assignment is always built as [target, value]");
        };
        let value = match value {
            Operand::Nested(_) => self.env.take_accumulator().unwrap_or(Value::Null),
            Operand::Raw(token) => self.coerce(token, line)?,
        };
        debug!(line, %name, ?value, "assign");
        self.env.set(name, value);
        self.env.take_accumulator();
        Ok(())
    }

    /// Sum the leading raw operands, then fold in whatever the accumulator
    /// holds, and leave the total in the accumulator.
    fn add(&mut self, operands: &[&Operand], line: usize) -> Result<(), PyscalError> {
        let mut sum: Option<Value> = None;
        for operand in operands {
            let Operand::Raw(token) = operand else {
                break;
            };
            let value = self.coerce(token, line)?;
            sum = Some(match sum {
                Some(total) => total.add(value, line)?,
                None => value,
            });
        }

        if let Some(pending) = self.env.take_accumulator() {
            sum = Some(match sum {
                Some(total) => total.add(pending, line)?,
                None => pending,
            });
        }

        if let Some(total) = sum {
            trace!(line, ?total, "accumulator <- add");
            self.env.set_accumulator(total);
        }
        Ok(())
    }

    /// Subtract every later operand from the first. Inside an addition the
    /// difference is added to the accumulator; anywhere else it replaces it.
    fn subtract(
        &mut self,
        operands: &[&Operand],
        enclosing: Option<Action>,
        line: usize,
    ) -> Result<(), PyscalError> {
        let mut difference: Option<Value> = None;
        for operand in operands {
            let value = self.operand_value(operand, line)?;
            difference = Some(match difference {
                Some(total) => total.subtract(value, line)?,
                None => value,
            });
        }
        let Some(difference) = difference else {
            return Ok(());
        };

        let result = match (enclosing, self.env.take_accumulator()) {
            (Some(Action::Add), Some(pending)) => pending.add(difference, line)?,
            _ => difference,
        };
        trace!(line, ?result, ?enclosing, "accumulator <- subtract");
        self.env.set_accumulator(result);
        Ok(())
    }

    fn operand_value(&self, operand: &Operand, line: usize) -> Result<Value, PyscalError> {
        match operand {
            Operand::Raw(token) => self.coerce(token, line),
            Operand::Nested(_) => Ok(self.env.accumulator().cloned().unwrap_or(Value::Null)),
        }
    }

    fn coerce(&self, token: &str, line: usize) -> Result<Value, PyscalError> {
        coerce(token, &self.env, self.config.unresolved, line)
    }
}
