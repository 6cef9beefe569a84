//! The closed error model shared across every layer (§7).

use std::path::PathBuf;

/// The five error kinds named in §7. The scanner aggregates at most one
/// `IoRead` per run (first observed wins); the rewriter aborts on the
/// first `IoWrite` it hits, leaving prior mutations in place (no
/// rollback, by design — see Non-goals in §1).
#[derive(Debug, thiserror::Error)]
pub enum SwapcaseError {
    #[error("failed to read {path}: {source}")]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to enumerate files under {root}: {source}")]
    EnumerationError {
        root: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("prompt failed: {source}")]
    PromptError {
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    UsageError(String),
}

pub type Result<T> = std::result::Result<T, SwapcaseError>;
