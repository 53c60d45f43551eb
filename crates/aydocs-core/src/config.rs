//! Site configuration management.

#[cfg(feature = "fs")]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for AY docs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Section navigation settings.
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// Static server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Base URL for the site (e.g., "https://ay.example.com").
    pub base_url: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,
}

/// Navigation controller tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Viewport width (CSS px) at and above which the layout is wide.
    #[serde(default = "default_breakpoint_px")]
    pub breakpoint_px: u32,

    /// Distance from the viewport top at which a section becomes active.
    #[serde(default = "default_scroll_offset_px")]
    pub scroll_offset_px: f64,

    /// Derive the active section from scroll position.
    #[serde(default = "default_true")]
    pub scroll_spy: bool,

    /// How long scroll-spy defers to an explicit jump (ms).
    #[serde(default = "default_settle_ms")]
    pub settle_ms: f64,

    /// Honor an inbound `#section` fragment on page load.
    #[serde(default = "default_true")]
    pub honor_fragment: bool,

    /// How long the clipboard feedback message stays visible (ms).
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
}

/// Static server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory the compiled site is written to.
    #[serde(default = "default_site_root")]
    pub site_root: String,

    /// Sub-directory of `site_root` holding the JS, WASM, and CSS bundle.
    #[serde(default = "default_pkg_dir")]
    pub pkg_dir: String,
}

// Default value functions
fn default_breakpoint_px() -> u32 {
    1024 // matches the `lg:` layout switch in the stylesheet
}

fn default_scroll_offset_px() -> f64 {
    96.0
}

fn default_true() -> bool {
    true
}

fn default_settle_ms() -> f64 {
    900.0
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_site_root() -> String {
    "target/site".to_string()
}

fn default_pkg_dir() -> String {
    "pkg".to_string()
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: default_breakpoint_px(),
            scroll_offset_px: default_scroll_offset_px(),
            scroll_spy: true,
            settle_ms: default_settle_ms(),
            honor_fragment: true,
            copy_feedback_ms: default_copy_feedback_ms(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            site_root: default_site_root(),
            pkg_dir: default_pkg_dir(),
        }
    }
}

impl Config {
    /// Parse and validate configuration from TOML text.
    ///
    /// The browser build embeds `aydocs.toml` with `include_str!` and goes
    /// through here.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| CoreError::parse("configuration", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    #[cfg(feature = "fs")]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CoreError::parse(path.display().to_string(), e))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, with `AYDOCS__` environment overrides.
    #[cfg(feature = "fs")]
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("AYDOCS").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::invalid("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::invalid("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        let nav = &self.navigation;
        if nav.breakpoint_px == 0 {
            return Err(CoreError::invalid("navigation.breakpoint_px must be positive"));
        }

        if !(nav.scroll_offset_px.is_finite() && nav.scroll_offset_px >= 0.0) {
            return Err(CoreError::invalid(
                "navigation.scroll_offset_px must be a non-negative number",
            ));
        }

        if !(nav.settle_ms.is_finite() && nav.settle_ms >= 0.0) {
            return Err(CoreError::invalid(
                "navigation.settle_ms must be a non-negative number",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
title = "AY Docs"
base_url = "https://ay.example.com"
description = "The AY scripting language"

[navigation]
breakpoint_px = 768
scroll_offset_px = 64.0
scroll_spy = false
settle_ms = 500.0
honor_fragment = false
copy_feedback_ms = 1500

[server]
port = 8080
site_root = "dist"
"#
        .to_string()
    }

    #[test]
    fn test_from_toml_str() {
        let config = Config::from_toml_str(&create_test_config()).expect("parse config");

        assert_eq!(config.site.title, "AY Docs");
        assert_eq!(config.site.base_url, "https://ay.example.com");
        assert_eq!(config.navigation.breakpoint_px, 768);
        assert_eq!(config.navigation.scroll_offset_px, 64.0);
        assert!(!config.navigation.scroll_spy);
        assert_eq!(config.navigation.settle_ms, 500.0);
        assert!(!config.navigation.honor_fragment);
        assert_eq!(config.navigation.copy_feedback_ms, 1500);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.site_root, "dist");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.pkg_dir, "pkg");
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml_str(
            r#"
[site]
title = "Minimal"
base_url = "https://example.com"
"#,
        )
        .expect("parse config");

        assert_eq!(config.navigation, NavigationConfig::default());
        assert_eq!(config.navigation.breakpoint_px, 1024);
        assert!(config.navigation.scroll_spy);
        assert!(config.navigation.honor_fragment);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.site_root, "target/site");
    }

    #[test]
    fn test_config_validation_empty_title() {
        let result = Config::from_toml_str(
            r#"
[site]
title = ""
base_url = "https://example.com"
"#,
        );
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_zero_breakpoint() {
        let result = Config::from_toml_str(
            r#"
[site]
title = "Test"
base_url = "https://example.com"

[navigation]
breakpoint_px = 0
"#,
        );
        assert!(result.unwrap_err().to_string().contains("breakpoint_px"));
    }

    #[test]
    fn test_config_validation_negative_offset() {
        let result = Config::from_toml_str(
            r#"
[site]
title = "Test"
base_url = "https://example.com"

[navigation]
scroll_offset_px = -10.0
"#,
        );
        assert!(result.unwrap_err().to_string().contains("scroll_offset_px"));
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml_str("[site\ntitle = ");
        assert!(matches!(result, Err(CoreError::Parse { .. })));
    }

    #[cfg(feature = "fs")]
    #[test]
    fn test_load_config() {
        use std::io::Write;

        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("aydocs.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");
        assert_eq!(config.site.title, "AY Docs");
        assert_eq!(config.navigation.breakpoint_px, 768);
    }

    #[cfg(feature = "fs")]
    #[test]
    fn test_load_with_env() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("aydocs.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        let config = Config::load_with_env(&config_path).expect("load config");
        assert_eq!(config.site.title, "AY Docs");
        assert_eq!(config.server.port, 8080);
    }

    #[cfg(feature = "fs")]
    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/aydocs.toml"));
        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }
}
