pub mod ast;
pub mod coerce;
pub mod config;
pub mod env;
pub mod error;
pub mod interpreter;
pub mod json;
pub mod lines;
pub mod operation;
pub mod parser;
pub mod value;

pub use config::{Config, UnresolvedPolicy};
pub use env::Environment;
pub use error::PyscalError;
pub use interpreter::execute;
pub use json::JsonStyle;
pub use parser::parse;
pub use value::Value;

use std::sync::Once;

// ── Core API ───────────────────────────────────────────────────────

/// Parse and run a program with the default configuration.
pub fn run(source: &str) -> Result<Environment, PyscalError> {
    run_with_config(source, Config::default())
}

/// Parse every line of `source`, then execute them in order.
///
/// Nothing runs unless the whole program parses, so a parse error on any
/// line means no environment is produced.
pub fn run_with_config(source: &str, config: Config) -> Result<Environment, PyscalError> {
    let statements = parse(source)?;
    tracing::debug!(statements = statements.len(), "parsed program");
    execute(&statements, config)
}

// ── Diagnostics ────────────────────────────────────────────────────

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber for `tracing` events.
///
/// Only takes effect when `RUST_LOG` is set (e.g. `RUST_LOG=pyscal_rust=trace`).
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
