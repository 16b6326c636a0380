/// Errors produced by the canvas crate.
///
/// The core has no I/O; these cover programmer errors at construction time and
/// failures at the browser and configuration boundaries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CanvasError {
    /// A value was constructed from arguments that violate its invariants.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration value could not be parsed or is out of range.
    #[error("config invalid: {0}")]
    Config(String),

    /// A browser DOM call failed.
    #[error("dom call failed: {0}")]
    Dom(String),

    /// The tracing subscriber could not be installed.
    #[error("logging init failed: {0}")]
    Logging(String),
}

impl From<wasm_bindgen::JsValue> for CanvasError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
