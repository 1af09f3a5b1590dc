//! Function registry with runtime registration
//!
//! Maps function names to handlers. The evaluator resolves every call stage
//! through a registry, so callers can extend or shrink the set of available
//! functions at any time, including while other threads are evaluating.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::ast::Value;
use crate::functions::{self, FunctionError};

/// A registered function: ordered string arguments in, value out
pub type Handler = Arc<dyn Fn(&[String]) -> Result<Value, FunctionError> + Send + Sync>;

/// Name -> handler table guarded by a reader/writer lock
///
/// Lookups share the lock; registration and removal take it exclusively.
/// Handlers are cloned out of the table before they run, so a slow handler
/// never holds the lock.
pub struct Registry {
    handlers: RwLock<HashMap<String, Handler>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("functions", &self.names())
            .finish()
    }
}

impl Registry {
    /// Create a registry with no functions at all
    pub fn new() -> Self {
        Registry {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry with `hash`, `bcrypt`, `now` and `uuid` registered
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        functions::register_builtins(&registry);
        registry
    }

    /// Register `handler` under `name`, replacing any previous handler
    ///
    /// Returns true if an existing handler was replaced.
    pub fn register<F>(&self, name: impl Into<String>, handler: F) -> bool
    where
        F: Fn(&[String]) -> Result<Value, FunctionError> + Send + Sync + 'static,
    {
        self.register_handler(name, Arc::new(handler))
    }

    /// Register an already shared handler
    pub fn register_handler(&self, name: impl Into<String>, handler: Handler) -> bool {
        let name = name.into();
        let replaced = self.handlers.write().insert(name.clone(), handler).is_some();
        tracing::debug!(function = %name, replaced, "registered function");
        replaced
    }

    /// Remove the handler for `name`; removing an unknown name is a no-op
    ///
    /// Returns true if a handler was removed.
    pub fn unregister(&self, name: &str) -> bool {
        let removed = self.handlers.write().remove(name).is_some();
        if removed {
            tracing::debug!(function = %name, "unregistered function");
        }
        removed
    }

    /// Look up a handler by name
    pub fn lookup(&self, name: &str) -> Option<Handler> {
        self.handlers.read().get(name).cloned()
    }

    /// Check if a function is registered
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.read().contains_key(name)
    }

    /// All registered function names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }
}
