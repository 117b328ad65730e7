//! Collision-safe output names for staged assets.
//!
//! Labels are normalized into filesystem- and URL-safe slugs. Each
//! normalized base name is counted, so repeated labels get a numeric suffix:
//!
//! ```text
//! "image foo"  →  image-foo
//! "image foo"  →  image-foo-1
//! "image/foo"  →  image-foo-2
//! ```

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap;

/// Runs of characters that are not safe in an output filename.
static UNSAFE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    // Static pattern, always valid
    Regex::new(r"[^0-9a-zA-Z._]+").unwrap()
});

/// Normalize a label: every maximal unsafe run becomes a single `-`.
#[inline]
pub fn normalize(label: &str) -> String {
    UNSAFE_RUN.replace_all(label, "-").into_owned()
}

/// Issues unique slugs, tracking how often each base name was handed out.
#[derive(Debug, Default)]
pub struct SlugAllocator {
    counts: FxHashMap<String, usize>,
}

impl SlugAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a slug for `label`.
    ///
    /// The first allocation of a base name returns it unchanged; the Nth
    /// (N ≥ 2) appends `-(N-1)`.
    pub fn allocate(&mut self, label: &str) -> String {
        let base = normalize(label);
        let count = self.counts.entry(base.clone()).or_insert(0);
        let issued = *count;
        *count += 1;

        if issued == 0 {
            base
        } else {
            format!("{base}-{issued}")
        }
    }

    /// Number of times `label` (after normalization) has been allocated.
    #[cfg(test)]
    pub fn issued(&self, label: &str) -> usize {
        self.counts.get(&normalize(label)).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_normalize_collapses_runs() {
        assert_eq!(normalize("image foo"), "image-foo");
        assert_eq!(normalize("a  //  b"), "a-b");
        assert_eq!(normalize("keep_this.name"), "keep_this.name");
        assert_eq!(normalize("  edge  "), "-edge-");
    }

    #[test]
    fn test_normalize_non_ascii() {
        // Non-ASCII letters are outside the safe set
        assert_eq!(normalize("café olé"), "caf-ol-");
    }

    #[test]
    fn test_repeated_label() {
        let mut slugs = SlugAllocator::new();
        assert_eq!(slugs.allocate("foo bar"), "foo-bar");
        assert_eq!(slugs.allocate("foo bar"), "foo-bar-1");
        assert_eq!(slugs.allocate("foo bar"), "foo-bar-2");
        assert_eq!(slugs.issued("foo bar"), 3);
    }

    #[test]
    fn test_labels_sharing_normalized_base() {
        let mut slugs = SlugAllocator::new();
        assert_eq!(slugs.allocate("image foo"), "image-foo");
        assert_eq!(slugs.allocate("image/foo"), "image-foo-1");
        assert_eq!(slugs.allocate("image   foo"), "image-foo-2");
    }

    #[test]
    fn test_independent_bases() {
        let mut slugs = SlugAllocator::new();
        assert_eq!(slugs.allocate("image a"), "image-a");
        assert_eq!(slugs.allocate("image b"), "image-b");
        assert_eq!(slugs.allocate("image a"), "image-a-1");
        assert_eq!(slugs.issued("image c"), 0);
    }

    #[test]
    fn test_all_distinct() {
        let mut slugs = SlugAllocator::new();
        let labels = ["x", "x", "x y", "x-y", "x y", "x", "x.y", "x_y"];
        let issued: Vec<_> = labels.iter().map(|l| slugs.allocate(l)).collect();
        let unique: FxHashSet<_> = issued.iter().collect();
        assert_eq!(unique.len(), issued.len(), "duplicates in {issued:?}");
    }
}
