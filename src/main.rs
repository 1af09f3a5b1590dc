//! seedexpr - evaluate seed cell expressions from the command line
//!
//! Usage:
//!   seedexpr -c "expr"    Evaluate a single expression
//!   seedexpr file.txt     Evaluate one expression per line
//!   seedexpr              Read expressions from stdin

mod cli;

use seedexpr::{Config, Evaluator};
use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::cli::{parse_args, print_help, print_version, run};

/// Environment variable holding a tracing filter; overrides the config file
const LOG_ENV: &str = "SEEDEXPR_LOG";

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&config.log.filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("Try 'seedexpr --help' for usage.");
            return ExitCode::from(2);
        }
    };

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::discover(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: config: {}", e);
            return ExitCode::from(2);
        }
    };

    init_logging(&config);

    let registry = Arc::new(config.build_registry());
    tracing::debug!(functions = ?registry.names(), "registry ready");
    let evaluator = Evaluator::new(registry);

    match run(&evaluator, &cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
