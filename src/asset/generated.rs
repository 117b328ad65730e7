//! Manifest of files written during one generation run.

use std::collections::BTreeSet;

/// Output-relative filenames written during a run.
///
/// Only grows; inserting a name twice is a no-op. Iteration is sorted so
/// manifests are reproducible. Reserved names belong to files copied later
/// in the run: they are not listed, but staged names must avoid them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFiles {
    written: BTreeSet<String>,
    reserved: BTreeSet<String>,
}

impl GeneratedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file. Returns `false` if it was already recorded.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.written.insert(name.into())
    }

    /// Hold `name` for a file that is written after staging.
    pub fn reserve(&mut self, name: impl Into<String>) {
        self.reserved.insert(name.into());
    }

    /// Whether `name` has been written.
    pub fn contains(&self, name: &str) -> bool {
        self.written.contains(name)
    }

    /// Whether `name` has been written or reserved.
    pub fn is_taken(&self, name: &str) -> bool {
        self.contains(name) || self.reserved.contains(name)
    }

    pub fn len(&self) -> usize {
        self.written.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.written.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a GeneratedFiles {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.written.iter()
    }
}
