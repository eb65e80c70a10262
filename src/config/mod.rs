//! Configuration management for `sitenav.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[base]`    | Site metadata (title)                          |
//! | `[nav]`     | Navigation data file                           |
//! | `[render]`  | Doc mode, minification, default viewport width |
//! | `[links]`   | Extra paths for the link inventory             |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "DD Poker"
//!
//! [nav]
//! path = "nav.json"
//!
//! [render]
//! minify = true
//!
//! [links]
//! extra = ["/privacy"]
//! ```

mod base;
pub mod defaults;
mod error;
mod links;
mod nav;
mod render;

pub use error::ConfigError;

use base::BaseConfig;
use links::LinksConfig;
use nav::NavDataConfig;
use render::RenderConfig;

use crate::cli::Cli;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing sitenav.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory (set after loading)
    #[serde(skip)]
    pub root: Option<PathBuf>,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Navigation data location
    #[serde(default)]
    pub nav: NavDataConfig,

    /// Rendering settings
    #[serde(default)]
    pub render: RenderConfig,

    /// Link inventory settings
    #[serde(default)]
    pub links: LinksConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = Self::normalize_path(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        Self::update_option(&mut self.nav.path, cli.nav.as_ref());
        self.nav.path = Self::resolve_nav_path(&root, &self.nav.path);
        self.root = Some(root);

        if let Some(location) = cli.location() {
            Self::update_option(&mut self.render.width, location.width.as_ref());
            Self::update_option(&mut self.render.doc_mode, location.doc_mode.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Expand `~` and anchor relative paths at the root.
    fn resolve_nav_path(root: &Path, path: &Path) -> PathBuf {
        let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
        if expanded.is_relative() {
            Self::normalize_path(&root.join(expanded))
        } else {
            Self::normalize_path(&expanded)
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.nav.path.exists() {
            bail!(ConfigError::Validation(format!(
                "[nav.path] `{}` not found",
                self.nav.path.display()
            )));
        }

        if self.render.width == 0 {
            bail!(ConfigError::Validation(
                "[render.width] must be greater than 0".into()
            ));
        }

        if let Some(link) = self.links.extra.iter().find(|link| !link.starts_with('/')) {
            bail!(ConfigError::Validation(format!(
                "[links.extra] entry `{link}` must start with `/`"
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse_cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sitenav").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_from_str() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            title = "DD Poker"

            [nav]
            path = "nav.json"

            [links]
            extra = ["/privacy"]
        "#,
        )
        .unwrap();

        assert_eq!(config.base.title, "DD Poker");
        assert_eq!(config.nav.path, PathBuf::from("nav.json"));
        assert_eq!(config.links.extra, ["/privacy"]);
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[base\ntitle = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let result = SiteConfig::from_str(
            r#"
            [unknown_section]
            field = "value"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.get_root(), Path::new("./"));
        assert_eq!(config.nav.path, PathBuf::from("nav.toml"));
        assert_eq!(config.render.width, 1024);
        assert!(!config.render.doc_mode);
        assert!(config.links.extra.is_empty());
    }

    #[test]
    fn test_from_path_missing() {
        let result = SiteConfig::from_path(Path::new("/no/such/sitenav.toml"));
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_update_with_cli_paths() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = parse_cli(&["--root", root, "--nav", "data/nav.json", "links"]);

        let mut config = SiteConfig::default();
        config.update_with_cli(&cli);

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.get_root(), root.as_path());
        assert_eq!(config.config_path, root.join("sitenav.toml"));
        assert_eq!(config.nav.path, root.join("data/nav.json"));
    }

    #[test]
    fn test_update_with_cli_location_overrides() {
        let mut config = SiteConfig::default();
        config.render.doc_mode = true;

        let cli = parse_cli(&["render", "--path", "/about", "--width", "375", "--doc-mode", "false"]);
        config.update_with_cli(&cli);
        assert_eq!(config.render.width, 375);
        assert!(!config.render.doc_mode);

        // Omitted flags keep config values.
        let mut config = SiteConfig::default();
        config.render.width = 640;
        let cli = parse_cli(&["resolve", "--path", "/about"]);
        config.update_with_cli(&cli);
        assert_eq!(config.render.width, 640);
    }

    #[test]
    fn test_validate() {
        let dir = tempfile::tempdir().unwrap();
        let nav = dir.path().join("nav.toml");
        fs::write(&nav, "").unwrap();

        let mut config = SiteConfig::default();
        config.nav.path = nav;
        assert!(config.validate().is_ok());

        config.links.extra = vec!["privacy".into()];
        assert!(config.validate().is_err());
        config.links.extra.clear();

        config.render.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_missing_nav_file() {
        let mut config = SiteConfig::default();
        config.nav.path = PathBuf::from("/no/such/nav.toml");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("nav.path"));
    }
}
