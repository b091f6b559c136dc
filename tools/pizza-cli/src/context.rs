//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use pizza_commerce::Session;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["pizza.toml", ".pizza.toml", "pizza.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the config came from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(Path::new(path))?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            tracing::debug!(path = %path.display(), "loaded config");
        }

        let output = output.with_currency(config.shop.currency_symbol.clone());

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(&config_path) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => {
                            tracing::warn!(path = %config_path.display(), error = %e, "skipping unreadable config")
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Start a new ordering session from the configured menu and policy.
    pub fn session(&self) -> Result<Session> {
        let catalog = self
            .config
            .catalog()
            .context("Menu in config file is invalid")?;
        Ok(Session::with_policy(catalog, self.config.policy()))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_find_config_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let expected = write(root, "pizza.toml", "[shop]\nname = \"Upstairs\"\n");
        let nested = root.join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let (config, path) = Context::find_config(&nested).unwrap();

        assert_eq!(path, expected);
        assert_eq!(config.shop.name, "Upstairs");
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "pizza.toml", "[shop]\nname = \"Outer\"\n");
        let inner = root.join("a");
        write(&inner, ".pizza.toml", "[shop]\nname = \"Inner\"\n");

        let (config, path) = Context::find_config(&inner.join("b")).unwrap();

        assert_eq!(path, inner.join(".pizza.toml"));
        assert_eq!(config.shop.name, "Inner");
    }

    #[test]
    fn test_find_config_skips_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let expected = write(root, "pizza.json", r#"{"shop": {"name": "Fallback"}}"#);
        write(&root.join("a"), "pizza.toml", "[shop");

        let (config, path) = Context::find_config(&root.join("a")).unwrap();

        assert_eq!(path, expected);
        assert_eq!(config.shop.name, "Fallback");
    }

    #[test]
    fn test_load_applies_currency_symbol() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            temp_dir.path(),
            "pizza.toml",
            "[shop]\ncurrency_symbol = \"$\"\n",
        );

        let ctx = Context::load(path.to_str(), Output::new(false, false)).unwrap();

        assert_eq!(ctx.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(ctx.output.price(pizza_commerce::Amount::new(200)), "$200");
    }

    #[test]
    fn test_load_reports_bad_explicit_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(temp_dir.path(), "pizza.toml", "[shop");

        let err = Context::load(path.to_str(), Output::new(false, true))
            .err()
            .unwrap();

        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }
}
