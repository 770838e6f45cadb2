use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "modest-bundle.toml";

/// Prefix for environment overrides, e.g. `MODEST_BUNDLE__PATHS__ENTRY`
pub const ENV_PREFIX: &str = "MODEST_BUNDLE";

/// Main configuration structure for modest-bundle
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BundlerConfig {
    /// Input and output locations
    pub paths: PathsConfig,
    /// Logging settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PathsConfig {
    /// Stylesheet the bundle starts from
    pub entry: PathBuf,
    /// Directory the bundle is written to (created if missing)
    pub out_dir: PathBuf,
    /// File name of the bundle inside `out_dir`
    pub bundle_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ObservabilityConfig {
    /// Filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub json: bool,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                entry: PathBuf::from("index.css"),
                out_dir: PathBuf::from("dist"),
                bundle_name: "modest-components.css".to_string(),
            },
            observability: ObservabilityConfig {
                log_level: "error".to_string(),
                json: false,
            },
        }
    }
}

impl PathsConfig {
    /// Full path of the bundle file
    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(&self.bundle_name)
    }
}

impl BundlerConfig {
    /// Load configuration relative to the current directory
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. `modest-bundle.toml` in `dir`
    /// 3. Environment variables (prefixed with MODEST_BUNDLE__)
    pub fn load_from(dir: &Path) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        let file = dir.join(CONFIG_FILE_NAME);
        if file.exists() {
            tracing::debug!(path = %file.display(), "Using configuration file");
            builder = builder.add_source(File::from(file));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    /// Serializes tests that load configuration, since loading reads the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_defaults_match_fixed_layout() {
        let config = BundlerConfig::default();
        assert_eq!(config.paths.entry, PathBuf::from("index.css"));
        assert_eq!(
            config.paths.output_path(),
            PathBuf::from("dist/modest-components.css")
        );
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let _guard = env_guard();
        let dir = TempDir::new().unwrap();
        let config = BundlerConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.paths, BundlerConfig::default().paths);
    }

    #[test]
    fn test_partial_file_overrides_only_given_keys() {
        let _guard = env_guard();
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[paths]\nentry = \"styles/main.css\"\n",
        )
        .unwrap();

        let config = BundlerConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.paths.entry, PathBuf::from("styles/main.css"));
        assert_eq!(config.paths.out_dir, PathBuf::from("dist"));
        assert_eq!(config.paths.bundle_name, "modest-components.css");
    }

    #[test]
    fn test_saved_file_loads_back() {
        let _guard = env_guard();
        let dir = TempDir::new().unwrap();
        let mut config = BundlerConfig::default();
        config.paths.bundle_name = "all.css".to_string();
        config.observability.json = true;

        config.save_to_file(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        let loaded = BundlerConfig::load_from(dir.path()).unwrap();

        assert_eq!(loaded.paths.bundle_name, "all.css");
        assert!(loaded.observability.json);
    }

    #[test]
    fn test_environment_overrides_log_level() {
        let _guard = env_guard();
        let dir = TempDir::new().unwrap();
        std::env::set_var("MODEST_BUNDLE__OBSERVABILITY__LOG_LEVEL", "debug");
        let config = BundlerConfig::load_from(dir.path());
        std::env::remove_var("MODEST_BUNDLE__OBSERVABILITY__LOG_LEVEL");

        assert_eq!(config.unwrap().observability.log_level, "debug");
        assert_eq!(
            BundlerConfig::load_from(dir.path()).unwrap().observability.log_level,
            "error"
        );
    }
}
