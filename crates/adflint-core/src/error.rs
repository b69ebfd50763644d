//! Error taxonomy for resource loading.
//!
//! Every variant is a per-file structural failure. The loader catches them
//! at file scope, logs them, and skips the file; nothing here ever aborts
//! a scan, and semantic findings are [`crate::Issue`] values, not errors.

/// Why a single resource file was rejected during a directory scan.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The file carries a `type` tag that does not match the directory's
    /// expected discriminant. Skipped with a warning, never indexed.
    #[error("unexpected resource type: {found}")]
    UnexpectedType { found: String },

    /// The file parsed as JSON but is missing `name`/`properties` or its
    /// properties do not have the shape the resource kind requires.
    #[error("malformed resource: {0}")]
    Malformed(String),
}

/// Result type for per-file loading operations.
pub type Result<T> = std::result::Result<T, ResourceError>;
