use super::Command;
use crate::cli::BuildArgs;
use crate::config::PathsConfig;
use crate::fs::{FileSystemOperations, StandardFileSystem};
use crate::resolver::{ImportResolver, Resolution, ResolveError};
use crate::telemetry::create_build_span;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, Instrument};

/// Comment placed at the top of every generated bundle, naming the entry file
pub fn bundle_header(entry: &Path) -> String {
    let entry_name = entry
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|| entry.to_string_lossy());
    format!(
        "/* modest-components - Bundled CSS
 * Generated from {entry_name} and all component styles
 * This file contains all styles in a single file for easy distribution
 */

"
    )
}

/// Failures that stop a build
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to create output directory {}: {}", .path.display(), .source)]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write bundle {}: {}", .path.display(), .source)]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// What a finished build produced
#[derive(Debug)]
pub struct BuildReport {
    pub output: PathBuf,
    /// Header plus resolved content
    pub bundle: String,
    /// False for dry runs
    pub written: bool,
    pub resolution: Resolution,
}

impl BuildReport {
    /// Size of the bundle in KiB, counted in UTF-8 bytes rather than characters
    pub fn size_kb(&self) -> f64 {
        self.bundle.len() as f64 / 1024.0
    }
}

pub struct BuildCommand {
    pub entry: PathBuf,
    pub out_dir: PathBuf,
    pub bundle_name: String,
    pub dry_run: bool,
    pub verbose: bool,
    fs: Arc<dyn FileSystemOperations>,
}

impl BuildCommand {
    pub fn new(paths: &PathsConfig) -> Self {
        Self {
            entry: paths.entry.clone(),
            out_dir: paths.out_dir.clone(),
            bundle_name: paths.bundle_name.clone(),
            dry_run: false,
            verbose: false,
            fs: Arc::new(StandardFileSystem),
        }
    }

    /// Configuration values overridden by whatever was passed on the command line
    pub fn from_args(paths: &PathsConfig, args: BuildArgs) -> Self {
        let mut command = Self::new(paths)
            .with_dry_run(args.dry_run)
            .with_verbose(args.verbose);
        if let Some(entry) = args.entry {
            command.entry = entry;
        }
        if let Some(out_dir) = args.out_dir {
            command.out_dir = out_dir;
        }
        if let Some(bundle_name) = args.bundle_name {
            command.bundle_name = bundle_name;
        }
        command
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_file_system(mut self, fs: Arc<dyn FileSystemOperations>) -> Self {
        self.fs = fs;
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(&self.bundle_name)
    }

    /// Create the output directory, resolve the entry and write the bundle
    pub async fn bundle(&self) -> Result<BuildReport, BuildError> {
        let output = self.output_path();

        if !self.dry_run {
            self.fs
                .create_dir_all(&self.out_dir)
                .await
                .map_err(|source| BuildError::CreateOutputDir {
                    path: self.out_dir.clone(),
                    source,
                })?;
        }

        let resolution = ImportResolver::new(self.fs.as_ref())
            .resolve_entry(&self.entry)
            .await?;
        info!(
            files = resolution.included.len(),
            failed_imports = resolution.failures.len(),
            "Resolved imports"
        );

        let bundle = format!("{}{}", bundle_header(&self.entry), resolution.content);

        if !self.dry_run {
            self.fs
                .write(&output, bundle.as_bytes())
                .await
                .map_err(|source| BuildError::WriteOutput {
                    path: output.clone(),
                    source,
                })?;
            info!(output = %output.display(), bytes = bundle.len(), "Bundle written");
        }

        Ok(BuildReport {
            output,
            bundle,
            written: !self.dry_run,
            resolution,
        })
    }

    fn print_details(&self, report: &BuildReport) {
        println!();
        println!("  Included files ({}):", report.resolution.included.len());
        for path in &report.resolution.included {
            println!("    • {}", path.display());
        }
        if !report.resolution.failures.is_empty() {
            println!("  Failed imports ({}):", report.resolution.failures.len());
            for failure in &report.resolution.failures {
                println!(
                    "    • {} (in {}): {}",
                    failure.import_path,
                    failure.importer.display(),
                    failure.message
                );
            }
        }
    }
}

impl Command for BuildCommand {
    async fn execute(&self) -> Result<()> {
        if self.dry_run {
            println!("Building CSS bundle... (DRY RUN)");
        } else {
            println!("Building CSS bundle...");
        }

        let entry = self.entry.display().to_string();
        let output = self.output_path().display().to_string();
        let report = self
            .bundle()
            .instrument(create_build_span(&entry, &output, self.dry_run))
            .await?;

        if report.written {
            println!("✓ Bundle created: {}", report.output.display());
        } else {
            println!("✓ Bundle resolved (not written): {}", report.output.display());
        }
        println!("  Size: {:.2} KB", report.size_kb());

        // Printed regardless of the log filter
        for failure in &report.resolution.failures {
            eprintln!("Error importing {}: {}", failure.import_path, failure.message);
        }

        if self.verbose {
            self.print_details(&report);
        }

        Ok(())
    }
}
