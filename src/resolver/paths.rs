//! Import target path computation.

use std::path::{Component, Path, PathBuf};

/// Compute the file an import refers to.
///
/// The import is joined onto the directory of `importer` and normalized
/// lexically. An absolute import replaces the directory entirely. Symlinks
/// are not followed, so two spellings of the same file only collapse when
/// they normalize to the same text.
pub fn resolve_import_path(importer: &Path, import: &str) -> PathBuf {
    let dir = importer.parent().unwrap_or_else(|| Path::new(""));
    normalize(&dir.join(import))
}

/// Remove `.` segments and fold `..` into the preceding segment.
///
/// Leading `..` segments of a relative path are kept; `..` at the root is
/// dropped. An empty result becomes `.`.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
