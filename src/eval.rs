//! Evaluator for seedexpr - left-to-right pipe execution
//!
//! The evaluator walks the stages of an expression in order:
//! - Literal stages set the running value and run nothing
//! - Call stages resolve their handler through the registry and run it
//! - From the second stage on, the running value (as text) is appended
//!   as the last argument of the call
//!
//! The first error stops evaluation and no partial value is returned.

use std::sync::Arc;

use thiserror::Error;

use crate::ast::{Expression, Stage, Value};
use crate::functions::FunctionError;
use crate::parser::{parse, ParseError};
use crate::registry::Registry;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("unsupported function: {0}")]
    UnsupportedFunction(String),
    #[error("function {name} error: {source}")]
    Function {
        name: String,
        #[source]
        source: FunctionError,
    },
}

/// Evaluates expressions against a shared function registry
///
/// Evaluation only needs `&self`, so one evaluator can serve many threads.
#[derive(Debug, Clone)]
pub struct Evaluator {
    registry: Arc<Registry>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Arc::new(Registry::with_builtins()))
    }
}

impl Evaluator {
    pub fn new(registry: Arc<Registry>) -> Self {
        Evaluator { registry }
    }

    /// The registry used to resolve function names
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Parse and evaluate a cell value
    pub fn eval(&self, input: &str) -> Result<Value, EvalError> {
        let expression = parse(input)?;
        self.eval_expression(&expression)
    }

    /// Evaluate an already parsed expression
    #[tracing::instrument(level = "trace", skip_all, fields(stages = expression.len()))]
    pub fn eval_expression(&self, expression: &Expression) -> Result<Value, EvalError> {
        let mut running: Option<Value> = None;

        for (index, stage) in expression.stages.iter().enumerate() {
            let value = match stage {
                Stage::Literal(text) => Value::Text(text.clone()),
                Stage::Call { name, args } => {
                    let mut args = args.clone();
                    if let Some(previous) = running.as_ref().filter(|_| index > 0) {
                        args.push(previous.as_arg());
                    }
                    self.call(name, &args)?
                }
            };

            tracing::trace!(stage = index, value = %value, "stage evaluated");
            running = Some(value);
        }

        // The parser never produces an expression without stages
        Ok(running.unwrap_or(Value::Null))
    }

    /// Resolve and invoke a single function
    fn call(&self, name: &str, args: &[String]) -> Result<Value, EvalError> {
        let handler = self
            .registry
            .lookup(name)
            .ok_or_else(|| EvalError::UnsupportedFunction(name.to_string()))?;

        handler(args).map_err(|source| {
            tracing::debug!(function = %name, error = %source, "function failed");
            EvalError::Function {
                name: name.to_string(),
                source,
            }
        })
    }
}
