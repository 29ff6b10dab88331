//! Tracing subscriber setup.
//!
//! The message macros only emit through `tracing` in debug mode, so the
//! subscriber is installed only then. `RUST_LOG` controls the filter; the
//! default is `info`, or `debug` when `--debug` is passed.

use crate::libs::messages::macros::{enable_debug_mode, is_debug_mode};
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub fn init_tracing(debug: bool) -> Result<()> {
    if debug {
        enable_debug_mode();
    }
    if !is_debug_mode() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "info" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
