//! Error types for the diff crate.

/// Errors that can occur during diff operations.
///
/// Comparing two well-formed manifests never fails; errors only arise when
/// converting results.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// Serialization of a diff result failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
