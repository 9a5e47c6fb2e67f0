/// Convenience result type used across ringloader.
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Top-level error taxonomy used by library APIs.
///
/// The animation math itself is total; errors only come from malformed host input (a
/// non-finite timestamp, a degenerate gradient) or from the output side (rasterizers, sinks).
#[derive(thiserror::Error, Debug)]
pub enum LoaderError {
    /// Invalid user-provided configuration or construction data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The host clock produced a timestamp the driver cannot use.
    #[error("clock error: {0}")]
    Clock(String),

    /// Errors while rasterizing or encoding frames.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LoaderError {
    /// Build a [`LoaderError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LoaderError::Clock`] value.
    pub fn clock(msg: impl Into<String>) -> Self {
        Self::Clock(msg.into())
    }

    /// Build a [`LoaderError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LoaderError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
