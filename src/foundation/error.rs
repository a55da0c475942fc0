/// Convenience result type used across slidefx.
pub type SlideFxResult<T> = Result<T, SlideFxError>;

/// Errors raised by the fallible surfaces around the per-pixel core.
///
/// Pixel evaluation itself is total and never fails; these cover resolution
/// construction, configuration, asset loading and frame rendering.
#[derive(thiserror::Error, Debug)]
pub enum SlideFxError {
    /// Invalid user-provided data (sizes, effect names, thread counts).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while producing a frame buffer.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlideFxError {
    /// Build a [`SlideFxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SlideFxError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SlideFxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
