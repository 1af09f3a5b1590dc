use super::{check_arity, FunctionError};
use crate::ast::Value;

/// Uppercase: upper abc -> "ABC"
pub fn upper(args: &[String]) -> Result<Value, FunctionError> {
    check_arity("upper", args, 1, 1, "exactly 1")?;
    Ok(Value::Text(args[0].to_uppercase()))
}
