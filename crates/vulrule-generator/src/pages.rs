//! Per-rule page generation.

use std::path::{Path, PathBuf};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;
use tracing::{debug, info};
use vulrule_core::{CoreError, Dataset, Rule};

use crate::{
    grouping::{Groupings, RuleEntry},
    output::write_file,
    template::{TemplateContext, TemplateError, TemplateKind, TemplateRegistry},
};

/// Page generation errors.
#[derive(Debug, Error)]
pub enum PageError {
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

    /// Rule is missing a required field.
    #[error(transparent)]
    Rule(#[from] CoreError),
}

/// Result type for page operations.
pub type Result<T> = std::result::Result<T, PageError>;

/// Characters left unescaped in link paths besides ASCII alphanumerics.
const LINK_PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Escape `<` and `>` so rule text is not parsed as markup.
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    text.replace('>', "\\>").replace('<', "\\<")
}

/// Percent-encode a relative page path for use as a link target.
#[must_use]
pub fn encode_link(path: &str) -> String {
    utf8_percent_encode(path, LINK_PATH).to_string()
}

/// A rendered rule page.
#[derive(Debug, Clone)]
pub struct RulePage {
    /// Normalized library name.
    pub lib_slug: String,

    /// Link entry for indices.
    pub entry: RuleEntry,

    /// File location relative to the documentation root.
    pub relative_path: PathBuf,

    /// Rendered Markdown.
    pub content: String,
}

/// Renders and writes one page per rule.
#[derive(Debug)]
pub struct PageGenerator<'a> {
    templates: &'a TemplateRegistry,
    docs_root: &'a Path,
}

impl<'a> PageGenerator<'a> {
    /// Create a new page generator writing below `docs_root`.
    #[must_use]
    pub fn new(templates: &'a TemplateRegistry, docs_root: &'a Path) -> Self {
        Self {
            templates,
            docs_root,
        }
    }

    /// Render the rule at `index` without writing it.
    pub fn render(&self, index: usize, rule: &Rule) -> Result<RulePage> {
        let fields = rule.fields(index)?;
        let ctx = TemplateContext::new()
            .with_var("tool_name", &rule.tool_name)
            .with_var("lib_name", &rule.lib_name)
            .with_var("api_name", &rule.api_name)
            .with_var("description", escape_markdown(&rule.rule.description))
            .with_var("label", fields.label)
            .with_var("param_index", rule.parameter_index())
            .with_var("cwe_type", fields.cwe_type)
            .with_var("code", fields.code);
        let content = self.templates.render(TemplateKind::Api, &ctx)?;

        let lib_slug = rule.lib_slug();
        let api_slug = rule.api_slug();
        let relative_path = PathBuf::from("projects")
            .join(&lib_slug)
            .join(format!("api_{api_slug}.md"));
        let entry = RuleEntry::new(api_slug, encode_link(&rule.page_path()));

        Ok(RulePage {
            lib_slug,
            entry,
            relative_path,
            content,
        })
    }

    /// Write every rule page in dataset order and return the accumulated groupings.
    pub fn generate(&self, dataset: &Dataset) -> Result<Groupings> {
        info!(count = dataset.len(), "generating rule pages");

        let mut groupings = Groupings::default();
        for (index, rule) in dataset.rules().iter().enumerate() {
            let page = self.render(index, rule)?;
            let path = self.docs_root.join(&page.relative_path);
            write_file(&path, &page.content).map_err(|source| PageError::Io {
                path: path.clone(),
                source,
            })?;
            debug!(api = %rule.api_name, path = %path.display(), "wrote rule page");

            let label = rule.fields(index)?.label;
            groupings.record(&rule.tool_name, label, &page.lib_slug, page.entry);
        }

        Ok(groupings)
    }
}
