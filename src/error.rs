//! Crate error type
//!
//! Missing page elements are not errors: mount functions return `Ok(None)`
//! for those and the feature stays inert.

#[derive(Debug, thiserror::Error)]
pub enum FxError {
    #[error("no global window")]
    NoWindow,

    #[error("2d canvas context unavailable")]
    NoContext,

    #[error("javascript error: {0}")]
    Js(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        FxError::Js(format!("{:?}", value))
    }
}

pub type Result<T> = std::result::Result<T, FxError>;
