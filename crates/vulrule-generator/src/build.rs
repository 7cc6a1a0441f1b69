//! Build orchestration.
//!
//! Coordinates the full documentation build for one locale.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use thiserror::Error;
use tracing::{debug, info, warn};
use vulrule_core::{Config, CoreError, Dataset, PageCollision};

use crate::{
    index::{IndexCounts, IndexError, IndexGenerator},
    output::write_file,
    pages::{PageError, PageGenerator},
    stats::{StatsError, StatsRecord},
    template::{TemplateContext, TemplateError, TemplateKind, TemplateRegistry},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or dataset error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Rule page generation error.
    #[error("page error: {0}")]
    Page(#[from] PageError),

    /// Index generation error.
    #[error("index error: {0}")]
    Index(#[from] IndexError),

    /// Statistics generation error.
    #[error("stats error: {0}")]
    Stats(#[from] StatsError),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of rule pages written.
    pub pages: usize,

    /// Index pages written per kind.
    pub indices: IndexCounts,

    /// Pages produced by more than one rule.
    pub collisions: usize,

    /// Documentation root that was written.
    pub docs_root: PathBuf,

    /// Statistics file that was written.
    pub stats_file: PathBuf,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Documentation builder that orchestrates the build process.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    templates: TemplateRegistry,
}

impl Builder {
    /// Create a new builder for the configured locale.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let templates = TemplateRegistry::new(config.build.locale);
        Self { config, templates }
    }

    /// Execute the full build process.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();
        let docs_root = self.config.docs_root();
        let stats_file = self.config.stats_file();

        info!(
            locale = %self.config.build.locale,
            data = %self.config.paths.data_path.display(),
            output = %docs_root.display(),
            "starting build"
        );

        // 1. Dataset
        let dataset = Dataset::load(&self.config.paths.data_path)?;
        let collisions = self.check_collisions(&dataset)?;

        // 2. Documentation root
        fs::create_dir_all(&docs_root)?;

        // 3. Introduction page
        self.generate_intro(&docs_root)?;

        // 4. Rule pages
        let groupings = PageGenerator::new(&self.templates, &docs_root).generate(&dataset)?;

        // 5. Indices
        let indices = IndexGenerator::new(&self.templates, &docs_root).generate(&groupings)?;

        // 6. Statistics
        StatsRecord::compute(&groupings).write(&stats_file)?;

        let stats = BuildStats {
            pages: dataset.len(),
            indices,
            collisions,
            docs_root,
            stats_file,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            pages = stats.pages,
            tools = stats.indices.tools,
            labels = stats.indices.labels,
            libraries = stats.indices.libraries,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Render and write `intro.md`.
    fn generate_intro(&self, docs_root: &Path) -> Result<()> {
        let ctx = TemplateContext::new()
            .with_var("project_url", &self.config.site.project_url)
            .with_var("email", &self.config.site.email);
        let content = self.templates.render(TemplateKind::Intro, &ctx)?;
        write_file(&docs_root.join("intro.md"), &content)?;
        debug!("wrote introduction page");
        Ok(())
    }

    /// Report pages produced by several rules; reject them in strict mode.
    fn check_collisions(&self, dataset: &Dataset) -> Result<usize> {
        let collisions = dataset.collisions();
        for PageCollision { path, rules } in &collisions {
            if self.config.build.strict {
                return Err(CoreError::Collision {
                    path: path.clone(),
                    count: rules.len(),
                }
                .into());
            }
            warn!(path = %path, rules = ?rules, "several rules produce the same page; the last one wins");
        }
        Ok(collisions.len())
    }
}
