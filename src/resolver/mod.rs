//! Recursive `@import` resolution
//!
//! Expands an entry stylesheet by replacing every directive line with the
//! expanded content of the file it names. Each file is expanded at most once
//! per top-level call: a file that was already entered anywhere in the same
//! call expands to empty text, which both breaks cycles and keeps shared
//! dependencies from being duplicated.

pub mod directive;
pub mod paths;
pub mod types;

pub use directive::match_import;
pub use paths::{normalize, resolve_import_path};
pub use types::{ImportFailure, Resolution, ResolveError};

use crate::fs::FileSystemOperations;
use std::collections::HashSet;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tracing::{debug, warn};

type ResolveFuture<'s> = Pin<Box<dyn Future<Output = Result<String, ResolveError>> + Send + 's>>;

/// Expand `path` using a caller-owned visited set.
///
/// Failures to read imported files are reported and leave the directive in
/// place; only a failure to read `path` itself is returned as an error.
pub async fn resolve_imports(
    fs: &dyn FileSystemOperations,
    path: &Path,
    visited: &mut HashSet<PathBuf>,
) -> Result<String, ResolveError> {
    let mut resolver = ImportResolver::new(fs);
    let content = resolver.resolve(path.to_path_buf(), visited).await?;
    Ok(content)
}

/// Resolver that also records which files were included and which imports failed
pub struct ImportResolver<'a> {
    fs: &'a dyn FileSystemOperations,
    included: Vec<PathBuf>,
    failures: Vec<ImportFailure>,
}

impl<'a> ImportResolver<'a> {
    pub fn new(fs: &'a dyn FileSystemOperations) -> Self {
        Self {
            fs,
            included: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Expand an entry file with a fresh visited set
    pub async fn resolve_entry(mut self, entry: &Path) -> Result<Resolution, ResolveError> {
        let mut visited = HashSet::new();
        let content = self.resolve(entry.to_path_buf(), &mut visited).await?;

        Ok(Resolution {
            content,
            included: self.included,
            failures: self.failures,
        })
    }

    fn resolve<'s>(&'s mut self, path: PathBuf, visited: &'s mut HashSet<PathBuf>) -> ResolveFuture<'s> {
        Box::pin(async move {
            // Every visited key is normalized, so `./a.css` and `a.css` are one file
            let path = normalize(&path);

            // Marked before reading, so a target that fails to read is not retried
            if !visited.insert(path.clone()) {
                debug!(path = %path.display(), "Already included, expanding to nothing");
                return Ok(String::new());
            }

            let content = self
                .fs
                .read_to_string(&path)
                .await
                .map_err(|source| ResolveError::Read {
                    path: path.clone(),
                    source,
                })?;
            debug!(path = %path.display(), bytes = content.len(), "Resolving imports");
            self.included.push(path.clone());

            let mut resolved_lines = Vec::new();
            for line in content.split('\n') {
                let Some(import_path) = match_import(line) else {
                    resolved_lines.push(line.to_string());
                    continue;
                };

                let target = resolve_import_path(&path, import_path);
                let outcome = self.resolve(target.clone(), visited).await;
                match outcome {
                    // The whole line is replaced, including anything after the directive
                    Ok(imported) => resolved_lines.push(imported),
                    Err(err) => {
                        warn!(
                            importer = %path.display(),
                            import = import_path,
                            "Error importing {}: {}",
                            import_path,
                            err
                        );
                        self.failures.push(ImportFailure {
                            importer: path.clone(),
                            import_path: import_path.to_string(),
                            target,
                            message: err.to_string(),
                        });
                        resolved_lines.push(line.to_string());
                    }
                }
            }

            Ok(resolved_lines.join("\n"))
        })
    }
}
