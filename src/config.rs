//! Configuration file (seedexpr.toml)
//!
//! ```toml
//! [log]
//! filter = "debug"
//!
//! [functions]
//! loader = true        # register upper/future
//!
//! [constants]
//! tenant = "acme"      # `tenant` evaluates to "acme"
//! ```
//!
//! Every section is optional.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ast::Value;
use crate::functions::{self, FunctionError};
use crate::registry::Registry;

/// File name looked up in the home directory
pub const CONFIG_FILE_NAME: &str = ".seedexpr.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub functions: FunctionsConfig,

    /// Zero-argument functions returning fixed text
    #[serde(default)]
    pub constants: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// tracing filter directive, e.g. "warn" or "seedexpr=trace"
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: default_log_filter(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionsConfig {
    /// Register the seed loader's extra functions
    #[serde(default = "default_true")]
    pub loader: bool,
}

impl Default for FunctionsConfig {
    fn default() -> Self {
        FunctionsConfig { loader: true }
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a configuration file; a missing file is an error
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `~/.seedexpr.toml` if it exists, defaults otherwise
    pub fn discover() -> Result<Self, ConfigError> {
        match default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Build a registry with the built-ins plus everything this config enables
    pub fn build_registry(&self) -> Registry {
        let registry = Registry::with_builtins();
        if self.functions.loader {
            functions::register_loader_functions(&registry);
        }
        for (name, text) in &self.constants {
            registry.register(name.clone(), constant_function(name, text));
        }
        registry
    }
}

/// Get the default config path (~/.seedexpr.toml)
pub fn default_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
}

fn constant_function(
    name: &str,
    text: &str,
) -> impl Fn(&[String]) -> Result<Value, FunctionError> + Send + Sync + 'static {
    let name = name.to_string();
    let text = text.to_string();
    move |args: &[String]| {
        if !args.is_empty() {
            return Err(FunctionError::custom(format!(
                "{} function requires no arguments, got {}",
                name,
                args.len()
            )));
        }
        Ok(Value::Text(text.clone()))
    }
}
