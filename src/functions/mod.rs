//! Function handlers
//!
//! Built-ins (`hash`, `bcrypt`, `now`, `uuid`) are registered on every
//! registry created with `Registry::with_builtins`. Loader functions
//! (`upper`, `future`) are opt-in via `register_loader_functions`.
//!
//! Every handler validates its own arguments; the registry and evaluator
//! never check arity.

mod crypto;
mod ident;
mod text;
mod time;

use crate::registry::Registry;
use thiserror::Error;

pub use crypto::{bcrypt, hash, BCRYPT_DEFAULT_COST, BCRYPT_MAX_COST, BCRYPT_MIN_COST};
pub use ident::uuid;
pub use text::upper;
pub use time::{future, now, parse_duration};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunctionError {
    #[error("{function} function requires {expected} argument(s), got {got}")]
    Arity {
        function: &'static str,
        expected: &'static str,
        got: usize,
    },
    #[error("{function}: {message}")]
    InvalidArgument {
        function: &'static str,
        message: String,
    },
    #[error("{function} error: {message}")]
    Failed {
        function: &'static str,
        message: String,
    },
    #[error("{0}")]
    Custom(String),
}

impl FunctionError {
    /// Error for caller-supplied handlers
    pub fn custom(message: impl Into<String>) -> Self {
        FunctionError::Custom(message.into())
    }
}

/// Check that `args` holds between `min` and `max` arguments
pub(crate) fn check_arity(
    function: &'static str,
    args: &[String],
    min: usize,
    max: usize,
    expected: &'static str,
) -> Result<(), FunctionError> {
    if args.len() < min || args.len() > max {
        return Err(FunctionError::Arity {
            function,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// Register the built-in functions
pub fn register_builtins(registry: &Registry) {
    registry.register("hash", hash);
    registry.register("bcrypt", bcrypt);
    registry.register("now", now);
    registry.register("uuid", uuid);
}

/// Register the functions the seed loader adds on top of the built-ins
pub fn register_loader_functions(registry: &Registry) {
    registry.register("upper", upper);
    registry.register("future", future);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_message() {
        let err = check_arity("hash", &[], 1, 1, "exactly 1").unwrap_err();
        assert_eq!(err.to_string(), "hash function requires exactly 1 argument(s), got 0");
    }

    #[test]
    fn arity_in_range() {
        let args = vec!["a".to_string()];
        assert!(check_arity("bcrypt", &args, 1, 2, "1 or 2").is_ok());
    }

    #[test]
    fn loader_functions_are_opt_in() {
        let registry = Registry::with_builtins();
        assert!(!registry.contains("upper"));

        register_loader_functions(&registry);
        assert!(registry.contains("upper"));
        assert!(registry.contains("future"));
    }
}
