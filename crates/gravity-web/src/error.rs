use thiserror::Error;
use wasm_bindgen::JsValue;

/// Fatal initialization failures. The engine cannot run without a canvas and
/// a 2D context, so these surface immediately from the constructor.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing canvas #{0}")]
    MissingCanvas(String),
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),
    #[error("2d context unavailable")]
    ContextUnavailable,
}

impl From<InitError> for JsValue {
    fn from(err: InitError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
