//! Homepage statistics.
//!
//! Counts are serialized as strings; the homepage widget expects that format.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use vulrule_core::normalize;

use crate::{
    grouping::{Groupings, rule_count},
    output::{to_json, write_file},
};

/// Statistics generation errors.
#[derive(Debug, Error)]
pub enum StatsError {
    /// IO error.
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Number of libraries listed individually.
pub const TOP_LIBRARIES: usize = 5;

/// Name of the bucket aggregating the remaining libraries.
pub const OTHERS: &str = "others";

const DEFAULT_ICON: &str = "📝";
const DEFAULT_COLOR: &str = "#34A853";

/// Normalized label, icon, color.
const LABEL_STYLES: &[(&str, &str, &str)] = &[
    ("initialization", "🚀", "#FBBC05"),
    ("parameter check", "🔍", "#8F44AD"),
    ("return value check", "✅", "#F39C12"),
    ("api pair", "🔄", "#4285F4"),
];

/// Label entry with display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelStat {
    pub name: String,
    pub count: String,
    pub icon: String,
    pub color: String,
}

/// Plain name/count entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountStat {
    pub name: String,
    pub count: String,
}

impl CountStat {
    fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count: count.to_string(),
        }
    }
}

/// Summary consumed by the homepage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRecord {
    pub rule_categories: Vec<LabelStat>,
    pub library_categories: Vec<CountStat>,
    pub tool_categories: Vec<CountStat>,
}

/// Icon and color of a label, falling back to defaults.
#[must_use]
pub fn label_style(label: &str) -> (&'static str, &'static str) {
    let key = normalize(label.trim());
    LABEL_STYLES
        .iter()
        .find(|(name, _, _)| *name == key)
        .map_or((DEFAULT_ICON, DEFAULT_COLOR), |&(_, icon, color)| {
            (icon, color)
        })
}

impl StatsRecord {
    /// Compute statistics from the completed groupings.
    #[must_use]
    pub fn compute(groupings: &Groupings) -> Self {
        let tool_categories = groupings
            .by_tool
            .iter()
            .map(|(tool, libraries)| CountStat::new(tool, rule_count(libraries)))
            .collect();

        let rule_categories = groupings
            .by_label
            .iter()
            .map(|(label, libraries)| {
                let (icon, color) = label_style(label);
                LabelStat {
                    name: label.to_string(),
                    count: rule_count(libraries).to_string(),
                    icon: icon.to_string(),
                    color: color.to_string(),
                }
            })
            .collect();

        let mut libraries: Vec<(&str, usize)> = groupings
            .by_library
            .iter()
            .map(|(lib, entries)| (lib, entries.len()))
            .collect();
        // Stable sort: ties keep first-seen order.
        libraries.sort_by(|a, b| b.1.cmp(&a.1));

        let split = libraries.len().min(TOP_LIBRARIES);
        let (top, rest) = libraries.split_at(split);
        let mut library_categories: Vec<CountStat> = top
            .iter()
            .map(|&(lib, count)| CountStat::new(lib, count))
            .collect();
        let others: usize = rest.iter().map(|&(_, count)| count).sum();
        if others > 0 {
            library_categories.push(CountStat::new(OTHERS, others));
        }

        Self {
            rule_categories,
            library_categories,
            tool_categories,
        }
    }

    /// Write the record as JSON, replacing any previous file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = to_json(self, 2)?;
        write_file(path, &json).map_err(|source| StatsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "wrote statistics");
        Ok(())
    }
}
