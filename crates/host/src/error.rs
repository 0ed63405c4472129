use wasm_bindgen::JsValue;

use crate::gpu::GpuError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,

    #[error("no document")]
    NoDocument,

    #[error("no canvas element with id '{0}'")]
    CanvasNotFound(String),

    #[error("element '{0}' is not a canvas")]
    NotACanvas(String),

    #[error("invalid options: {0}")]
    Options(String),

    #[error(transparent)]
    Gpu(#[from] GpuError),

    #[error("requestAnimationFrame failed: {0}")]
    AnimationFrame(String),

    #[error("demo is already mounted")]
    AlreadyMounted,
}

impl From<HostError> for JsValue {
    fn from(err: HostError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
