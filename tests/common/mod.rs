//! Common test utilities for seedexpr integration tests

pub use seedexpr::{EvalError, Evaluator, Registry, Value};
use std::sync::Arc;

/// SHA-256 of "test"
#[allow(dead_code)]
pub const TEST_HASH: &str = "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08";

/// Helper to evaluate input with a fresh built-ins registry and return its text
#[allow(dead_code)]
pub fn eval(input: &str) -> Result<String, String> {
    seedexpr::eval(input)
        .map(|value| value.to_string())
        .map_err(|e| e.to_string())
}

/// Helper to build an evaluator over a fresh registry the test can modify
#[allow(dead_code)]
pub fn evaluator() -> (Arc<Registry>, Evaluator) {
    let registry = Arc::new(Registry::with_builtins());
    let evaluator = Evaluator::new(Arc::clone(&registry));
    (registry, evaluator)
}

/// Check the canonical lowercase 8-4-4-4-12 UUID layout
#[allow(dead_code)]
pub fn is_uuid(s: &str) -> bool {
    let groups: Vec<&str> = s.split('-').collect();
    groups.len() == 5
        && groups.iter().map(|g| g.len()).eq([8, 4, 4, 4, 12])
        && groups
            .iter()
            .all(|g| g.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)))
}
