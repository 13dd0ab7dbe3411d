use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Errors surfaced while attaching the gallery or building the overlay.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("no window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("no element matches container selector `{0}`")]
    ContainerNotFound(String),

    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl GalleryError {
    /// Wrap a thrown `JsValue` from a failed DOM call.
    pub(crate) fn from_js(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }
}
