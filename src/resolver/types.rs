use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a resolution call
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    /// The file that could not be resolved
    pub fn path(&self) -> &Path {
        match self {
            ResolveError::Read { path, .. } => path,
        }
    }
}

/// An import whose target could not be read; the directive was kept verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFailure {
    /// File containing the directive
    pub importer: PathBuf,
    /// Path exactly as written inside the quotes
    pub import_path: String,
    /// Path the import resolved to
    pub target: PathBuf,
    pub message: String,
}

/// Outcome of resolving an entry stylesheet
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Fully expanded text
    pub content: String,
    /// Files read and expanded, in depth-first visit order
    pub included: Vec<PathBuf>,
    pub failures: Vec<ImportFailure>,
}
