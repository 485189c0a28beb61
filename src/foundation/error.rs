/// Convenience result type used across the aquarium crate.
pub type AquariumResult<T> = Result<T, AquariumError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum AquariumError {
    /// A color string was not a well-formed `#RRGGBB` hex value.
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),

    /// A shape or pattern name is not registered.
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    /// Building a shape or pattern failed.
    #[error("generation failure: {0}")]
    Generation(String),

    /// Catalog data could not be loaded or resolved.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Key-value persistence failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AquariumError {
    /// Build an [`AquariumError::InvalidColorFormat`] value.
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColorFormat(msg.into())
    }

    /// Build an [`AquariumError::UnknownTemplate`] value.
    pub fn unknown_template(msg: impl Into<String>) -> Self {
        Self::UnknownTemplate(msg.into())
    }

    /// Build an [`AquariumError::Generation`] value.
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Build an [`AquariumError::Catalog`] value.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build an [`AquariumError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AquariumError::Storage`] value.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Build an [`AquariumError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
