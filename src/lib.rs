// modest-bundle library - @import resolution and CSS bundle building
// This exposes the core components for testing and integration

pub mod cli;
pub mod config;
pub mod fs;
pub mod resolver;
pub mod telemetry;

// Re-export key types for easy access
pub use cli::commands::build::{BuildCommand, BuildError, BuildReport, bundle_header};
pub use config::{BundlerConfig, ObservabilityConfig, PathsConfig};
pub use fs::{FileSystemOperations, StandardFileSystem};
pub use resolver::{resolve_imports, ImportFailure, ImportResolver, Resolution, ResolveError};
pub use telemetry::init_telemetry;
