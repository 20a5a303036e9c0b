use crate::app::ignore_rules::IgnoreResolver;
use crate::app::paths::relative_path;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Enumerates regular files under a root, skipping hidden entries.
///
/// Directories are descended into whether or not they match an ignore
/// pattern; ignore rules are applied to the files themselves by the caller.
/// `with_pruning` opts into cutting ignored directories off instead.
pub struct Scanner {
    root: PathBuf,
    prune: Option<Arc<IgnoreResolver>>,
}

impl Scanner {
    pub fn new(root: PathBuf) -> Self {
        Self { root, prune: None }
    }

    pub fn with_pruning(mut self, resolver: Arc<IgnoreResolver>) -> Self {
        self.prune = Some(resolver);
        self
    }

    /// Absolute paths of regular files, sorted by name within each directory.
    /// Entries the walker could not read come through as errors.
    pub fn files(&self) -> impl Iterator<Item = Result<PathBuf, ignore::Error>> {
        let mut builder = WalkBuilder::new(&self.root);
        // Only the hidden-entry filter; .gitignore and friends are not consulted.
        builder
            .standard_filters(false)
            .hidden(true)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        if let Some(resolver) = &self.prune {
            let resolver = Arc::clone(resolver);
            let root = self.root.clone();
            builder.filter_entry(move |entry| !is_ignored_dir(entry, &root, &resolver));
        }

        builder.build().filter_map(|result| match result {
            Ok(entry) if entry.file_type().is_some_and(|t| t.is_file()) => {
                Some(Ok(entry.into_path()))
            }
            Ok(_) => None,
            Err(err) => {
                log::warn!("Error walking entry: {}", err);
                Some(Err(err))
            }
        })
    }
}

fn is_ignored_dir(entry: &DirEntry, root: &Path, resolver: &IgnoreResolver) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_some_and(|t| t.is_dir()) {
        return false;
    }
    let relative = relative_path(entry.path(), root);
    if resolver.is_ignored(&relative) {
        log::debug!("Pruned ignored directory: {}", relative);
        return true;
    }
    false
}
