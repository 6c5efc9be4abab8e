use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures surfaced by the engine and its browser adapters.
///
/// A missing DOM target is deliberately absent here: an effect whose
/// selectors match nothing is inert, not failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FxError {
    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("email relay rejected the message: {0}")]
    Relay(String),

    #[error("browser call failed: {0}")]
    Js(String),
}

impl FxError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Wrap a thrown JS value, keeping its debug rendering.
    pub fn from_js(value: &JsValue) -> Self {
        match value.as_string() {
            Some(s) => Self::Js(s),
            None => Self::Js(format!("{value:?}")),
        }
    }
}

impl From<FxError> for JsValue {
    fn from(err: FxError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
