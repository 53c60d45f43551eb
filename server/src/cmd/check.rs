//! Check command - validate configuration and page section lists

use std::path::Path;

use aydocs_core::{Config, catalog};
use color_eyre::eyre::{Result, bail};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration and every page's section list.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and pages");

    let result = validate(config_path);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Collect every problem without printing or failing.
pub fn validate(config_path: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    match Config::load_with_env(config_path) {
        Ok(config) => {
            println!("  ✓ Configuration valid");
            check_config_values(&config, &mut result);
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
        }
    }

    println!("\nChecking page sections...");
    check_pages(&mut result);

    result
}

/// Check configuration values for common issues.
fn check_config_values(config: &Config, result: &mut ValidationResult) {
    if !config.site.base_url.starts_with("http") {
        result.add_warning("site.base_url should start with http:// or https://");
    }

    if config.navigation.breakpoint_px < 320 {
        result.add_warning(format!(
            "navigation.breakpoint_px = {} treats almost every screen as wide",
            config.navigation.breakpoint_px
        ));
    }

    if config.server.pkg_dir.trim_matches('/').is_empty() {
        result.add_error("server.pkg_dir cannot be empty");
    }

    let site_root = Path::new(&config.server.site_root);
    if !site_root.is_dir() {
        result.add_warning(format!(
            "Site root {} does not exist yet; build the frontend first",
            site_root.display()
        ));
    }
}

/// Check that every page's registry is valid and its links resolve.
fn check_pages(result: &mut ValidationResult) {
    let pages = catalog::pages();
    let known: Vec<&str> = pages.iter().map(|(path, _)| *path).collect();

    for (path, registry) in &pages {
        match registry {
            Ok(registry) => {
                println!("  ✓ {path}: {} sections", registry.len());
                for link in registry.external_links() {
                    let internal = link.href.starts_with('/');
                    if internal && link.href != "/" && !known.contains(&link.href.as_str()) {
                        result.add_warning(format!(
                            "{path}: link \"{}\" points to unknown page {}",
                            link.label, link.href
                        ));
                    }
                }
            }
            Err(e) => {
                result.add_error(format!("{path}: {e}"));
                println!("  ✗ {path}: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("aydocs.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_validate_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            &format!(
                r#"
[site]
title = "AY"
base_url = "https://ay.example.com"

[server]
site_root = "{}"
"#,
                dir.path().display()
            ),
        );

        let result = validate(&path);
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert!(!result.has_warnings(), "{:?}", result.warnings);
    }

    #[test]
    fn test_validate_missing_config() {
        let dir = TempDir::new().unwrap();
        let result = validate(&dir.path().join("missing.toml"));
        assert!(result.has_errors());
    }

    #[test]
    fn test_validate_warns_on_odd_values() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[site]
title = "AY"
base_url = "ay.example.com"

[navigation]
breakpoint_px = 100

[server]
site_root = "/definitely/not/here"
"#,
        );

        let result = validate(&path);
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert_eq!(result.warnings.len(), 3, "{:?}", result.warnings);
    }

    #[test]
    fn test_run_strict_fails_on_warnings() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[site]\ntitle = \"AY\"\nbase_url = \"ay.example.com\"\n",
        );

        assert!(run(&path, false).is_ok());
        assert!(run(&path, true).is_err());
    }
}
