/// File system operations abstraction for testing
///
/// This module provides a trait-based abstraction over the file system calls
/// the bundler makes, so the resolver can be exercised against the `mockall`
/// generated mock instead of real files.
///
/// # Examples
///
/// ```rust,no_run
/// use modest_bundle::fs::{FileSystemOperations, StandardFileSystem};
/// use std::path::Path;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> std::io::Result<()> {
///     let fs_ops: Arc<dyn FileSystemOperations> = Arc::new(StandardFileSystem);
///
///     fs_ops.create_dir_all(Path::new("dist")).await?;
///     let css = fs_ops.read_to_string(Path::new("index.css")).await?;
///     fs_ops.write(Path::new("dist/copy.css"), css.as_bytes()).await?;
///
///     Ok(())
/// }
/// ```
///
/// # Testing with Mocks
///
/// ```rust,ignore
/// use crate::fs::MockFileSystemOperations;
/// use std::path::Path;
///
/// let mut mock_fs = MockFileSystemOperations::new();
/// mock_fs
///     .expect_read_to_string()
///     .withf(|path| path == Path::new("index.css"))
///     .times(1)
///     .returning(|_| Ok("body{}\n".to_string()));
/// ```
use std::io;
use std::path::Path;

#[cfg(any(test, feature = "testing"))]
use mockall::automock;

/// Trait for file system operations that can be mocked in tests
///
/// Errors are plain `std::io::Error` values so callers can tell a missing
/// file from a permission problem and report the OS message verbatim.
#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait::async_trait]
pub trait FileSystemOperations: Send + Sync {
    /// Read the full UTF-8 content of a file
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create a directory and all its parent directories
    ///
    /// Succeeds when the directory already exists.
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write data to a file, creating it or truncating existing content
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Standard implementation backed by `tokio::fs`
///
/// This is the production implementation of `FileSystemOperations`. Use it in
/// the binary and switch to `MockFileSystemOperations` in unit tests.
pub struct StandardFileSystem;

#[async_trait::async_trait]
impl FileSystemOperations for StandardFileSystem {
    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}
