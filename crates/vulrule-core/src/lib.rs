//! VulRule Core Library
//!
//! Rule data model, dataset loading, name normalization, configuration and
//! error handling for the VulRule documentation generator.

pub mod config;
pub mod dataset;
pub mod error;
pub mod locale;
pub mod rule;
pub mod slug;

pub use config::Config;
pub use dataset::{Dataset, PageCollision};
pub use error::{CoreError, Result};
pub use locale::Locale;
pub use rule::{CweEntry, Rule, RuleBody, RuleFields};
pub use slug::normalize;
