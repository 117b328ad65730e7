//! Resolve asset references found inside rendered text.
//!
//! Remote URLs are left alone. Local references are located through the
//! caller's [`FileLookup`], copied into the output directory under a
//! slug-allocated name, and memoized so that later references to the same
//! URL reuse the staged copy.

use std::fs;
use std::io;
use std::path::PathBuf;

use percent_encoding::percent_decode_str;
use rustc_hash::FxHashMap;

use super::{AssetError, GeneratedFiles, SlugAllocator};
use crate::debug;

/// Locates the source file for a relative asset path.
pub trait FileLookup {
    /// Map `path` (as written in the text) to an openable source path.
    fn lookup(&self, path: &str) -> io::Result<PathBuf>;
}

impl<F> FileLookup for F
where
    F: Fn(&str) -> io::Result<PathBuf>,
{
    fn lookup(&self, path: &str) -> io::Result<PathBuf> {
        self(path)
    }
}

/// Whether `url` carries a scheme (or is protocol-relative) and thus needs
/// no staging.
pub fn is_remote(url: &str) -> bool {
    url.starts_with("//") || url::Url::parse(url).is_ok()
}

/// Path component of a relative reference: query and fragment stripped,
/// percent-decoded.
fn local_path(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    percent_decode_str(path)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Stages local assets into the output directory.
pub struct AssetResolver<'a> {
    output_dir: PathBuf,
    lookup: Option<&'a dyn FileLookup>,
    generated: &'a mut GeneratedFiles,
    slugs: SlugAllocator,
    memo: FxHashMap<String, String>,
}

impl<'a> AssetResolver<'a> {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        lookup: Option<&'a dyn FileLookup>,
        generated: &'a mut GeneratedFiles,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            lookup,
            generated,
            slugs: SlugAllocator::new(),
            memo: FxHashMap::default(),
        }
    }

    /// Files recorded so far in this run.
    pub fn generated(&self) -> &GeneratedFiles {
        &*self.generated
    }

    /// Resolve `url` to the reference that should appear in the output.
    pub fn resolve(&mut self, url: &str) -> Result<String, AssetError> {
        if let Some(name) = self.memo.get(url) {
            return Ok(name.clone());
        }

        if is_remote(url) {
            return Ok(url.to_string());
        }

        let path = local_path(url);
        if path.is_empty() {
            // Bare fragment or query, nothing to stage
            return Ok(url.to_string());
        }

        let lookup = self
            .lookup
            .ok_or_else(|| AssetError::NoFileLookup(url.to_string()))?;
        let source = lookup.lookup(&path)?;

        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = source
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let name = self.allocate_name(&stem, &ext);

        let dest = self.output_dir.join(&name);
        fs::copy(&source, &dest).map_err(|source_err| AssetError::Copy {
            from: source.clone(),
            to: dest.clone(),
            source: source_err,
        })?;
        debug!("asset"; "{} -> {}", url, name);

        self.generated.insert(name.clone());
        self.memo.insert(url.to_string(), name.clone());
        Ok(name)
    }

    /// Allocate `image-<stem><ext>`, skipping names already written or
    /// reserved this run.
    ///
    /// A literal stem such as `foo 1` normalizes to the same text as the
    /// second allocation of `foo`, so the manifest is checked as well.
    fn allocate_name(&mut self, stem: &str, ext: &str) -> String {
        let label = format!("image {stem}");
        loop {
            let name = format!("{}{ext}", self.slugs.allocate(&label));
            if !self.generated.is_taken(&name) {
                return name;
            }
        }
    }
}
