//! Sidebar category manifests (`_category_.json`).

use serde::Serialize;
use vulrule_core::Locale;

use crate::locales;

/// The three index directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    /// Per-library indices under `projects/`.
    Projects,
    /// Per-tool indices under `tools/`.
    Tools,
    /// Per-label indices under `labels/`.
    Labels,
}

impl IndexKind {
    /// Directory name below the documentation root.
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Tools => "tools",
            Self::Labels => "labels",
        }
    }

    /// Static manifest for this index kind in `locale`.
    #[must_use]
    pub fn manifest(self, locale: Locale) -> &'static CategoryManifest {
        locales::category(locale, self)
    }
}

/// Directory-level sidebar metadata.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryManifest {
    pub position: u32,
    pub label: &'static str,
    pub link: CategoryLink,
}

/// Generated-index link of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLink {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl CategoryManifest {
    pub(crate) const fn generated_index(
        position: u32,
        label: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            position,
            label,
            link: CategoryLink {
                kind: "generated-index",
                title: label,
                description,
            },
        }
    }
}
