//! Rule grouping by tool, label and library.
//!
//! Every grouping preserves first-seen order, so index listings and
//! statistics tie-breaks follow the dataset order.

use std::collections::HashMap;

/// A link to one rule page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    /// Normalized API name, used as link text.
    pub slug: String,

    /// Percent-encoded page path relative to the documentation root.
    pub path: String,
}

impl RuleEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(slug: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            path: path.into(),
        }
    }
}

/// An insertion-ordered string-keyed map.
#[derive(Debug, Clone)]
pub struct OrderedGroups<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for OrderedGroups<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> OrderedGroups<V> {
    /// Get the value of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Default> OrderedGroups<V> {
    /// Get the value of `key`, inserting a default at the end if absent.
    pub fn entry(&mut self, key: &str) -> &mut V {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.entries.push((key.to_string(), V::default()));
                self.index.insert(key.to_string(), i);
                i
            }
        };
        &mut self.entries[i].1
    }
}

/// Library slug to rule entries.
pub type LibraryGroups = OrderedGroups<Vec<RuleEntry>>;

/// Category (tool or label) to library groups.
pub type CategoryGroups = OrderedGroups<LibraryGroups>;

/// Number of rules across all libraries of a category.
#[must_use]
pub fn rule_count(libraries: &LibraryGroups) -> usize {
    libraries.iter().map(|(_, entries)| entries.len()).sum()
}

/// The three groupings accumulated while rule pages are generated.
#[derive(Debug, Clone, Default)]
pub struct Groupings {
    /// Tool name, then library slug.
    pub by_tool: CategoryGroups,

    /// First label, then library slug.
    pub by_label: CategoryGroups,

    /// Library slug.
    pub by_library: LibraryGroups,
}

impl Groupings {
    /// Record one rule in all three groupings.
    pub fn record(&mut self, tool: &str, label: &str, lib_slug: &str, entry: RuleEntry) {
        self.by_tool
            .entry(tool)
            .entry(lib_slug)
            .push(entry.clone());
        self.by_label
            .entry(label)
            .entry(lib_slug)
            .push(entry.clone());
        self.by_library.entry(lib_slug).push(entry);
    }

    /// Total number of recorded rules.
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_library.iter().map(|(_, entries)| entries.len()).sum()
    }
}
