//! Tracing subscriber installation for hosts.
//!
//! The crate itself only emits `tracing` events. Hosts call [`init`] once at
//! startup; in the browser output goes to the devtools console, natively to
//! stderr.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};

use crate::error::CanvasError;

/// Filter used when the host has no preference.
pub const DEFAULT_FILTER: &str = "info";

/// Install a global subscriber filtered by `filter` (an `EnvFilter` directive
/// string such as `"infinite_canvas=debug"`).
///
/// # Errors
///
/// Returns [`CanvasError::Logging`] if the directive is malformed or a global
/// subscriber is already installed.
pub fn init(filter: &str) -> Result<(), CanvasError> {
    let filter = EnvFilter::try_new(filter).map_err(|e| CanvasError::Logging(e.to_string()))?;

    let fmt_layer = tracing_subscriber::fmt::layer().with_ansi(false).without_time();
    #[cfg(target_arch = "wasm32")]
    let fmt_layer = fmt_layer.with_writer(tracing_web::MakeWebConsoleWriter::new());
    #[cfg(not(target_arch = "wasm32"))]
    let fmt_layer = fmt_layer.with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .try_init()
        .map_err(|e| CanvasError::Logging(e.to_string()))
}
