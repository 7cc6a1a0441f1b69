//! Per-locale template text and category manifests.
//!
//! Each locale module exposes the same two tables; adding a locale means
//! adding a module and a match arm here.

mod en;
mod zh;

use vulrule_core::Locale;

use crate::{
    category::{CategoryManifest, IndexKind},
    template::TemplateKind,
};

/// Template sources of `locale`.
pub(crate) fn templates(locale: Locale) -> &'static [(TemplateKind, &'static str)] {
    match locale {
        Locale::En => en::TEMPLATES,
        Locale::Zh => zh::TEMPLATES,
    }
}

/// Category manifest of `kind` in `locale`.
pub(crate) fn category(locale: Locale, kind: IndexKind) -> &'static CategoryManifest {
    let manifests = match locale {
        Locale::En => &en::CATEGORIES,
        Locale::Zh => &zh::CATEGORIES,
    };
    match kind {
        IndexKind::Projects => &manifests[0],
        IndexKind::Tools => &manifests[1],
        IndexKind::Labels => &manifests[2],
    }
}
