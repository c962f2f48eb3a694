//! Scene loading error types.

use std::path::PathBuf;

/// Errors that can occur while loading or validating a scene description.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The manifest is not valid JSON or does not match the schema.
    #[error("failed to parse scene manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// Failed to serialize a manifest or a recorded frame.
    #[error("failed to serialize: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Failed to read a manifest file from disk.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A body names a parent that is not an earlier body in the list.
    #[error("body '{body}' orbits '{parent}', which is not declared before it")]
    UnknownParent { body: String, parent: String },

    /// Two bodies share a tag.
    #[error("duplicate body tag '{0}'")]
    DuplicateTag(String),

    /// A radius or orbit distance below zero, or NaN.
    #[error("body '{body}' has invalid {field}: {value} (must be zero or more)")]
    NegativeDimension {
        body: String,
        field: &'static str,
        value: f32,
    },
}
