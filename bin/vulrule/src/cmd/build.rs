//! Build command - generates the documentation tree for one locale

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use color_eyre::eyre::{Result, WrapErr};
use vulrule_core::{Config, Locale};
use vulrule_generator::Builder;

/// Command-line overrides applied on top of the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Rule dataset path.
    pub data_path: Option<PathBuf>,
    /// Locale to generate.
    pub locale: Option<Locale>,
    /// Project URL shown on the introduction page.
    pub project_url: Option<String>,
    /// Contact address shown on the introduction page.
    pub email: Option<String>,
    /// Documentation site root.
    pub site_root: Option<PathBuf>,
    /// Reject datasets with page collisions.
    pub strict: bool,
}

impl BuildOptions {
    /// Apply the overrides to `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref data_path) = self.data_path {
            config.paths.data_path = data_path.clone();
        }
        if let Some(locale) = self.locale {
            config.build.locale = locale;
        }
        if let Some(ref url) = self.project_url {
            tracing::info!(project_url = %url, "Overriding project URL from CLI");
            config.site.project_url = url.clone();
        }
        if let Some(ref email) = self.email {
            config.site.email = email.clone();
        }
        if let Some(ref site_root) = self.site_root {
            config.paths.site_root = site_root.clone();
        }
        if self.strict {
            config.build.strict = true;
        }
    }
}

/// Load configuration and apply CLI overrides.
pub fn resolve_config(config_path: &Path, options: &BuildOptions) -> Result<Config> {
    let mut config =
        Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    options.apply(&mut config);
    config
        .validate()
        .wrap_err("Invalid configuration after applying command-line options")?;
    Ok(config)
}

/// Run the build command.
///
/// Writes the introduction page, one page per rule, the tool, label and
/// library indices, and the homepage statistics.
pub fn run(config_path: &Path, options: &BuildOptions) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?options, "Starting build");

    let config = resolve_config(config_path, options)?;
    tracing::debug!(?config, "Loaded configuration");

    let stats = Builder::new(config).build().wrap_err("Build failed")?;

    let duration = start.elapsed();

    // Print build statistics
    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Rule pages: {}", stats.pages);
    println!("  Tools:      {}", stats.indices.tools);
    println!("  Labels:     {}", stats.indices.labels);
    println!("  Libraries:  {}", stats.indices.libraries);
    if stats.collisions > 0 {
        println!("  Collisions: {} (see warnings)", stats.collisions);
    }
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", stats.docs_root.display());
    println!("  Stats:      {}", stats.stats_file.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}
