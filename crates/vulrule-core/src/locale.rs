//! Supported documentation locales.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A documentation locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the default locale.
    #[default]
    En,
    /// Simplified Chinese.
    Zh,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// Locale code as used on the command line and in configuration.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Documentation root relative to the site root.
    ///
    /// The default locale owns `docs/`; translations live under the
    /// per-locale content plugin directory.
    #[must_use]
    pub fn docs_subdir(self) -> &'static str {
        match self {
            Self::En => "docs",
            Self::Zh => "i18n/zh/docusaurus-plugin-content-docs/current",
        }
    }

    /// Resolve the documentation root for this locale under `site_root`.
    #[must_use]
    pub fn docs_root(self, site_root: &Path) -> PathBuf {
        site_root.join(self.docs_subdir())
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnsupportedLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
