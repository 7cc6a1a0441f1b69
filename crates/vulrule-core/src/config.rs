//! Generator configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    locale::Locale,
};

/// Main configuration structure for VulRule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Project settings shown on the introduction page.
    #[serde(default)]
    pub site: SiteConfig,

    /// Input and output locations.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,
}

/// Project-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Project repository URL (e.g., "https://github.com/org/repo").
    #[serde(default = "default_project_url")]
    pub project_url: String,

    /// Contact address.
    #[serde(default = "default_email")]
    pub email: String,
}

/// Input and output locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Rule dataset (JSON array of rules).
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Root of the documentation site; locale roots are resolved under it.
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,

    /// Statistics file, relative to the site root.
    #[serde(default = "default_stats_path")]
    pub stats_path: PathBuf,
}

/// Build configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Locale to generate.
    #[serde(default)]
    pub locale: Locale,

    /// Reject datasets where several rules produce the same page.
    #[serde(default)]
    pub strict: bool,
}

// Default value functions
fn default_project_url() -> String {
    "https://github.com/kaichenorg/vulrule".to_string()
}

fn default_email() -> String {
    "kaichenorg@gmail.com".to_string()
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/data.json")
}

fn default_site_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_stats_path() -> PathBuf {
    PathBuf::from("src/components/Homepage/statsData.json")
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            project_url: default_project_url(),
            email: default_email(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            site_root: default_site_root(),
            stats_path: default_stats_path(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration layering an optional file and `VULRULE__*` environment variables.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("VULRULE").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.project_url.is_empty() {
            return Err(CoreError::config("site.project_url cannot be empty"));
        }

        if self.site.email.is_empty() {
            return Err(CoreError::config("site.email cannot be empty"));
        }

        if self.site.project_url.ends_with('/') {
            tracing::warn!("site.project_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Documentation root for the configured locale.
    #[must_use]
    pub fn docs_root(&self) -> PathBuf {
        self.build.locale.docs_root(&self.paths.site_root)
    }

    /// Location of the statistics file.
    #[must_use]
    pub fn stats_file(&self) -> PathBuf {
        self.paths.site_root.join(&self.paths.stats_path)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
project_url = "https://example.com/rules"
email = "team@example.com"

[paths]
data_path = "rules.json"
site_root = "website"
stats_path = "static/stats.json"

[build]
locale = "zh"
strict = true
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("vulrule.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.project_url, "https://example.com/rules");
        assert_eq!(config.site.email, "team@example.com");
        assert_eq!(config.paths.data_path, PathBuf::from("rules.json"));
        assert_eq!(config.build.locale, Locale::Zh);
        assert!(config.build.strict);
        assert_eq!(
            config.stats_file(),
            PathBuf::from("website/static/stats.json")
        );
        assert_eq!(
            config.docs_root(),
            PathBuf::from("website/i18n/zh/docusaurus-plugin-content-docs/current")
        );
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("vulrule.toml");
        std::fs::write(&config_path, "").expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config, Config::default());
        assert_eq!(config.build.locale, Locale::En);
        assert_eq!(config.paths.data_path, PathBuf::from("data/data.json"));
        assert_eq!(config.docs_root(), PathBuf::from("./docs"));
        assert!(!config.build.strict);
    }

    #[test]
    fn test_missing_file_with_env_uses_defaults() {
        let config = Config::load_with_env(Path::new("/nonexistent/vulrule.toml"))
            .expect("load defaults");
        assert_eq!(config.site.email, "kaichenorg@gmail.com");
    }

    #[test]
    fn test_unsupported_locale_rejected() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("vulrule.toml");
        std::fs::write(&config_path, "[build]\nlocale = \"fr\"\n").expect("write");

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn test_config_validation_empty_email() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("vulrule.toml");
        std::fs::write(&config_path, "[site]\nemail = \"\"\n").expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("email cannot be empty")
        );
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/vulrule.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
