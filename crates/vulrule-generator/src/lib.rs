//! VulRule Generator Library
//!
//! Markdown documentation generation engine for VulRule.
//!
//! # Modules
//!
//! - [`template`] - Markdown template system with variable interpolation
//! - [`pages`] - Per-rule page generation
//! - [`grouping`] - Rule grouping by tool, label and library
//! - [`index`] - Tool, label and library index generation
//! - [`category`] - Sidebar category manifests
//! - [`stats`] - Homepage statistics
//! - [`build`] - Build orchestration

pub mod build;
pub mod category;
pub mod grouping;
pub mod index;
mod locales;
pub mod output;
pub mod pages;
pub mod stats;
pub mod template;

pub use build::{BuildError, BuildStats, Builder};
pub use category::{CategoryManifest, IndexKind};
pub use grouping::{Groupings, RuleEntry};
pub use index::{IndexCounts, IndexGenerator};
pub use pages::PageGenerator;
pub use stats::StatsRecord;
pub use template::{Template, TemplateContext, TemplateKind, TemplateRegistry};
