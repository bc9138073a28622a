// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the IssueLens CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only
//! cargo run -- analyze 42
//!
//! # Debug output for troubleshooting
//! RUST_LOG=issuelens=debug cargo run -- analyze 42
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// The `-v` flag raises the default filter to debug level for this crate
/// and the core library; `RUST_LOG` takes precedence when set.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = if verbose {
        "issuelens=debug,issuelens_core=debug,octocrab=warn,reqwest=warn"
    } else {
        "issuelens=warn,issuelens_core=warn,octocrab=error,reqwest=error"
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
