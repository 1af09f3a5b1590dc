//! seedexpr - cell value expressions for database seeding
//!
//! # Overview
//!
//! A seed loader reads rows from YAML and binds each scalar cell into an
//! INSERT statement. Before binding, the cell text goes through [`eval`]
//! (or [`Evaluator::eval`]), which turns it into the value to insert.
//!
//! # Syntax
//!
//! ```text
//! # Quoted literals evaluate to their contents
//! 'admin@example.com'      -> admin@example.com
//! "a | b"                  -> a | b
//!
//! # Calls: function name, then whitespace-separated arguments
//! hash secret              -> sha256("secret") as hex
//! bcrypt secret 12         -> bcrypt hash with cost 12
//! now                      -> 2024-05-01T12:00:00Z
//! uuid                     -> random v4 UUID
//! uuid alice               -> stable UUID derived from "alice"
//!
//! # Pipes: the previous value becomes the last argument
//! 'secret' | bcrypt        -> bcrypt("secret")
//! hash test | hash         -> sha256(sha256("test"))
//! 'alice' | uuid           -> uuid("alice")
//! ```
//!
//! Unquoted text is always a call, so a bare word that is not a registered
//! function is an error.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use seedexpr::{Evaluator, Registry, Value};
//!
//! let registry = Arc::new(Registry::with_builtins());
//! registry.register("double", |args: &[String]| {
//!     Ok(Value::from(format!("{0}{0}", args[0])))
//! });
//!
//! let eval = Evaluator::new(Arc::clone(&registry));
//! assert_eq!(eval.eval("double test").unwrap(), "testtest");
//! assert_eq!(eval.eval("'ab' | double").unwrap(), "abab");
//!
//! registry.unregister("double");
//! assert!(eval.eval("double test").is_err());
//! ```

pub mod ast;
pub mod config;
pub mod eval;
pub mod functions;
pub mod lexer;
pub mod parser;
pub mod registry;

// Re-export commonly used items
pub use ast::{Expression, Stage, Value};
pub use config::{Config, ConfigError};
pub use eval::{EvalError, Evaluator};
pub use functions::FunctionError;
pub use lexer::LexError;
pub use parser::{parse, ParseError};
pub use registry::{Handler, Registry};

/// Convenience function to evaluate a cell value with the built-in functions
pub fn eval(input: &str) -> Result<Value, EvalError> {
    Evaluator::default().eval(input)
}
