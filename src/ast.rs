//! AST for seedexpr - pipe-delimited stages
//!
//! An expression is an ordered list of stages separated by `|`.
//! Each stage is either a quoted literal or a function call:
//!
//! ```text
//! 'secret'            # Literal
//! hash secret         # Call: hash("secret")
//! 'secret' | bcrypt   # Call: bcrypt("secret") - the running value is appended
//! ```

use serde::Serialize;
use std::fmt;

/// A parsed expression, ready to be evaluated any number of times
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub stages: Vec<Stage>,
}

impl Expression {
    pub fn new(stages: Vec<Stage>) -> Self {
        Expression { stages }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

/// One pipe-delimited segment of an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    /// Quoted text, stored without its quotes
    Literal(String),
    /// Function name followed by its explicit arguments
    Call { name: String, args: Vec<String> },
}

impl Stage {
    /// Function name for call stages
    pub fn function_name(&self) -> Option<&str> {
        match self {
            Stage::Call { name, .. } => Some(name),
            Stage::Literal(_) => None,
        }
    }
}

/// Result of a function handler or of a whole evaluation
///
/// Pipe continuation always uses the textual form (`Display`), so a richer
/// variant only survives when it is produced by the last stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl Value {
    /// Borrow the text of a `Text` value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Textual form used when the value becomes the next stage's argument
    pub fn as_arg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => Ok(()),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
