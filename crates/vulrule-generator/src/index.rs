//! Tool, label and library index generation.

use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::info;

use crate::{
    category::IndexKind,
    grouping::{CategoryGroups, Groupings, LibraryGroups, RuleEntry, rule_count},
    output::{to_json, write_file},
    template::{TemplateContext, TemplateError, TemplateKind, TemplateRegistry},
};

/// Index generation errors.
#[derive(Debug, Error)]
pub enum IndexError {
    /// IO error.
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Manifest encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for index operations.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Number of index pages written per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexCounts {
    pub tools: usize,
    pub labels: usize,
    pub libraries: usize,
}

/// Render a flat Markdown link list.
#[must_use]
pub fn flat_listing(entries: &[RuleEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "- [{}]({})", entry.slug, entry.path);
    }
    out
}

/// Render a link list with one sub-heading per library.
#[must_use]
pub fn nested_listing(libraries: &LibraryGroups) -> String {
    let mut out = String::new();
    for (lib, entries) in libraries.iter() {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "## {lib}\n");
        out.push_str(&flat_listing(entries));
    }
    out
}

/// Writes index pages and category manifests.
#[derive(Debug)]
pub struct IndexGenerator<'a> {
    templates: &'a TemplateRegistry,
    docs_root: &'a Path,
}

impl<'a> IndexGenerator<'a> {
    /// Create a new index generator writing below `docs_root`.
    #[must_use]
    pub fn new(templates: &'a TemplateRegistry, docs_root: &'a Path) -> Self {
        Self {
            templates,
            docs_root,
        }
    }

    /// Write all indices and manifests.
    pub fn generate(&self, groupings: &Groupings) -> Result<IndexCounts> {
        let counts = IndexCounts {
            tools: self.generate_categories(
                &groupings.by_tool,
                TemplateKind::Tool,
                "tool_name",
                IndexKind::Tools,
            )?,
            labels: self.generate_categories(
                &groupings.by_label,
                TemplateKind::Type,
                "type_name",
                IndexKind::Labels,
            )?,
            libraries: self.generate_libraries(&groupings.by_library)?,
        };

        info!(
            tools = counts.tools,
            labels = counts.labels,
            libraries = counts.libraries,
            "generated indices"
        );
        Ok(counts)
    }

    /// Write one nested index per tool or label.
    fn generate_categories(
        &self,
        groups: &CategoryGroups,
        template: TemplateKind,
        name_var: &str,
        kind: IndexKind,
    ) -> Result<usize> {
        let dir = self.docs_root.join(kind.dir_name());

        for (name, libraries) in groups.iter() {
            let ctx = TemplateContext::new()
                .with_var(name_var, name)
                .with_var("rule_count", rule_count(libraries).to_string())
                .with_var("listing", nested_listing(libraries));
            let content = self.templates.render(template, &ctx)?;
            self.write(&dir.join(format!("{name}.md")), &content)?;
        }

        self.write_manifest(kind)?;
        Ok(groups.len())
    }

    /// Write one flat index per library.
    fn generate_libraries(&self, libraries: &LibraryGroups) -> Result<usize> {
        let dir = self.docs_root.join(IndexKind::Projects.dir_name());

        for (lib, entries) in libraries.iter() {
            let ctx = TemplateContext::new()
                .with_var("lib_name", lib)
                .with_var("rule_count", entries.len().to_string())
                .with_var("listing", flat_listing(entries));
            let content = self.templates.render(TemplateKind::Project, &ctx)?;
            self.write(&dir.join(lib).join("index.md"), &content)?;
        }

        self.write_manifest(IndexKind::Projects)?;
        Ok(libraries.len())
    }

    fn write_manifest(&self, kind: IndexKind) -> Result<()> {
        let manifest = kind.manifest(self.templates.locale());
        let path = self
            .docs_root
            .join(kind.dir_name())
            .join("_category_.json");
        self.write(&path, &to_json(manifest, 4)?)
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        write_file(path, content).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
