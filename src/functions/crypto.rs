use super::{check_arity, FunctionError};
use crate::ast::Value;

/// Cost used when `bcrypt` gets no explicit cost
pub const BCRYPT_DEFAULT_COST: u32 = 10;
pub const BCRYPT_MIN_COST: u32 = 4;
pub const BCRYPT_MAX_COST: u32 = 31;

// ========================================
// Hash functions
// ========================================

/// SHA-256 as lowercase hex: hash text -> "9f86d0..."
pub fn hash(args: &[String]) -> Result<Value, FunctionError> {
    use sha2::{Digest, Sha256};

    check_arity("hash", args, 1, 1, "exactly 1")?;

    let mut hasher = Sha256::new();
    hasher.update(args[0].as_bytes());
    let digest = hasher.finalize();

    Ok(Value::Text(hex::encode(digest)))
}

/// Password hash: bcrypt password [cost] -> "$2b$10$..."
pub fn bcrypt(args: &[String]) -> Result<Value, FunctionError> {
    check_arity("bcrypt", args, 1, 2, "1 or 2 (password, [cost])")?;

    let cost = match args.get(1) {
        Some(raw) => parse_cost(raw)?,
        None => BCRYPT_DEFAULT_COST,
    };

    let hashed = ::bcrypt::hash(&args[0], cost).map_err(|e| FunctionError::Failed {
        function: "bcrypt",
        message: e.to_string(),
    })?;

    Ok(Value::Text(hashed))
}

fn parse_cost(raw: &str) -> Result<u32, FunctionError> {
    let cost: u32 = raw.trim().parse().map_err(|_| FunctionError::InvalidArgument {
        function: "bcrypt",
        message: format!("cost must be a number, got '{}'", raw),
    })?;

    if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&cost) {
        return Err(FunctionError::InvalidArgument {
            function: "bcrypt",
            message: format!(
                "cost must be between {} and {}, got {}",
                BCRYPT_MIN_COST, BCRYPT_MAX_COST, cost
            ),
        });
    }

    Ok(cost)
}
