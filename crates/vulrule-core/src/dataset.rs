//! Dataset loading and validation.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    error::{CoreError, Result},
    rule::Rule,
    slug::segment_problem,
};

/// A validated, non-empty rule collection.
#[derive(Debug, Clone)]
pub struct Dataset {
    rules: Vec<Rule>,
}

/// Several rules that render to the same page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCollision {
    /// Page path relative to the documentation root.
    pub path: String,

    /// Rule indices in input order; the last one wins on disk.
    pub rules: Vec<usize>,
}

impl Dataset {
    /// Load and validate a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "loading dataset");

        let content = fs::read_to_string(path)
            .map_err(|e| CoreError::dataset(path, format!("cannot read file: {e}")))?;
        let rules: Vec<Rule> = serde_json::from_str(&content)
            .map_err(|e| CoreError::dataset(path, e.to_string()))?;

        let dataset = Self::from_rules(path, rules)?;
        info!(rules = dataset.rules.len(), "dataset loaded");
        Ok(dataset)
    }

    /// Build a dataset from already decoded rules.
    pub fn from_rules(path: impl Into<PathBuf>, rules: Vec<Rule>) -> Result<Self> {
        if rules.is_empty() {
            return Err(CoreError::EmptyDataset(path.into()));
        }

        for (index, rule) in rules.iter().enumerate() {
            validate_rule(index, rule)?;
        }

        Ok(Self { rules })
    }

    /// Rules in input order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false; an empty dataset cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find pages produced by more than one rule, in first-seen order.
    #[must_use]
    pub fn collisions(&self) -> Vec<PageCollision> {
        let mut order: Vec<String> = Vec::new();
        let mut by_path: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, rule) in self.rules.iter().enumerate() {
            let path = rule.page_path();
            let entry = by_path.entry(path.clone()).or_default();
            if entry.is_empty() {
                order.push(path);
            }
            entry.push(index);
        }

        order
            .into_iter()
            .filter_map(|path| {
                let rules = by_path.remove(&path)?;
                (rules.len() > 1).then_some(PageCollision { path, rules })
            })
            .collect()
    }
}

/// Check every field the generator dereferences.
fn validate_rule(index: usize, rule: &Rule) -> Result<()> {
    let label = rule.fields(index)?.label;

    let segments = [
        ("tool", rule.tool_name.clone()),
        ("label", label.to_string()),
        ("library", rule.lib_slug()),
        ("API", rule.api_slug()),
    ];
    for (kind, name) in segments {
        if let Some(reason) = segment_problem(&name) {
            return Err(CoreError::UnsafeName {
                index,
                kind,
                name,
                reason,
            });
        }
    }

    debug!(index, api = %rule.api_name, "rule validated");
    Ok(())
}
