//! Markdown template system for page generation.
//!
//! Templates are plain Markdown with `{{ variable }}` placeholders. Lists are
//! pre-rendered by the caller and passed in as a single variable.

use std::collections::HashMap;

use thiserror::Error;
use vulrule_core::Locale;

use crate::locales;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Missing required variable.
    #[error("template '{template}' is missing required variable: {variable}")]
    MissingVariable { template: String, variable: String },

    /// Template not found.
    #[error("template not found: {0}")]
    NotFound(String),

    /// Invalid template syntax.
    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// The documents a locale provides templates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Introduction page.
    Intro,
    /// Per-API rule page.
    Api,
    /// Per-tool index.
    Tool,
    /// Per-label index.
    Type,
    /// Per-library index.
    Project,
}

impl TemplateKind {
    /// Template name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Api => "api",
            Self::Tool => "tool",
            Self::Type => "type",
            Self::Project => "project",
        }
    }
}

/// Template context with variables for interpolation.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable into the context.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Create context with initial variables.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

/// A simple template that supports variable interpolation.
///
/// Variables are specified as `{{ variable_name }}` in the template string;
/// `{{ variable_name? }}` renders as empty when the variable is absent.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    /// Create a new template with the given name and content.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Render the template with the given context.
    ///
    /// Substituted values are never rescanned, so rule text containing `{{`
    /// is emitted verbatim.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut result = self.content.clone();
        let mut pos = 0;

        while let Some(start) = result[pos..].find("{{") {
            let start = pos + start;
            let end = result[start..]
                .find("}}")
                .ok_or_else(|| TemplateError::InvalidSyntax("unclosed {{ delimiter".to_string()))?;
            let end = start + end + 2;

            let var_name = result[start + 2..end - 2].trim();

            let (var_name, optional) = if let Some(stripped) = var_name.strip_suffix('?') {
                (stripped, true)
            } else {
                (var_name, false)
            };

            let value = match context.get(var_name) {
                Some(v) => v.to_string(),
                None if optional => String::new(),
                None => {
                    return Err(TemplateError::MissingVariable {
                        template: self.name.clone(),
                        variable: var_name.to_string(),
                    });
                }
            };

            result.replace_range(start..end, &value);
            pos = start + value.len();
        }

        Ok(result)
    }
}

/// Registry of templates for one locale.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    locale: Locale,
    templates: HashMap<TemplateKind, Template>,
}

impl TemplateRegistry {
    /// Create a registry holding the built-in templates of `locale`.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        let templates = locales::templates(locale)
            .iter()
            .map(|(kind, source)| (*kind, Template::new(kind.name(), *source)))
            .collect();
        Self { locale, templates }
    }

    /// Locale of the registered templates.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Get a template by kind.
    #[must_use]
    pub fn get(&self, kind: TemplateKind) -> Option<&Template> {
        self.templates.get(&kind)
    }

    /// Render a template with the given context.
    pub fn render(&self, kind: TemplateKind, context: &TemplateContext) -> Result<String> {
        let template = self
            .get(kind)
            .ok_or_else(|| TemplateError::NotFound(kind.name().to_string()))?;
        template.render(context)
    }
}
