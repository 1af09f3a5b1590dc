use super::{check_arity, FunctionError};
use crate::ast::Value;
use ::uuid::Uuid;

/// Random or seeded UUID: uuid -> v4, uuid seed -> v5 of the seed
///
/// Seeded UUIDs are name-based (v5, OID namespace), so the same seed always
/// produces the same value. This lets a pipe like `hash x|uuid` derive a
/// stable id from another column's value.
pub fn uuid(args: &[String]) -> Result<Value, FunctionError> {
    check_arity("uuid", args, 0, 1, "0 or 1 (seed)")?;

    let id = match args.first() {
        Some(seed) => Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes()),
        None => Uuid::new_v4(),
    };

    Ok(Value::Text(id.to_string()))
}
