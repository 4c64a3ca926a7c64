/// Result alias used across the crate.
pub type SwatchResult<T> = Result<T, SwatchError>;

/// Errors surfaced by the swatch pipeline.
///
/// Malformed colors, empty strand sets and degenerate yarn geometry are recovered locally and
/// never reach callers as errors; the corresponding variants exist for the strict helpers that
/// the soft paths are built on.
#[derive(thiserror::Error, Debug)]
pub enum SwatchError {
    /// Invalid caller-supplied value.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed or inconsistent weight catalog.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// A combination was requested for zero strands.
    #[error("empty input: at least one strand category is required")]
    EmptyInput,

    /// A strand referenced a weight category id that is not in the catalog.
    #[error("unknown weight category id {0}")]
    UnknownCategory(u32),

    /// A color string could not be parsed as `#RRGGBB`.
    #[error("malformed color: {0}")]
    MalformedColor(String),

    /// Raster or mesh construction failed.
    #[error("render error: {0}")]
    Render(String),

    /// The session was destroyed and no longer accepts render commands.
    #[error("session destroyed")]
    Destroyed,

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SwatchError {
    /// Build a [`SwatchError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SwatchError::Catalog`].
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build a [`SwatchError::MalformedColor`].
    pub fn malformed_color(msg: impl Into<String>) -> Self {
        Self::MalformedColor(msg.into())
    }

    /// Build a [`SwatchError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SwatchError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
