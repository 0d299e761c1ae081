//! Errors raised by the browser layer.
//!
//! The graph engine itself has no failure modes: a selection miss creates a
//! vertex, a duplicate edge is ignored, and a stale load completion is
//! reported as [`crate::loader::LoadOutcome::Stale`]. Only the platform
//! surface and configuration parsing can fail.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for EngineError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
