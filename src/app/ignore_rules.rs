use crate::app::error::{DigestError, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::Path;

/// Name of the per-project ignore file, read from the input root only.
pub const IGNORE_FILE_NAME: &str = ".aidigestignore";

/// Version control, dependency caches, build output, OS metadata and env files.
pub const DEFAULT_IGNORES: &[&str] = &[
    "node_modules",
    ".git",
    "build",
    "dist",
    ".DS_Store",
    "Thumbs.db",
    ".env",
];

/// Decides whether a relative path is excluded from the digest.
///
/// Every pattern is tried twice: as a plain substring of the path, and as a
/// glob anchored over the whole path where `*` matches any run of characters
/// (including `/`). Either hit excludes the path.
#[derive(Debug)]
pub struct IgnoreResolver {
    patterns: Vec<String>,
    globs: GlobSet,
}

impl IgnoreResolver {
    /// Builds the pattern list: defaults, then custom patterns, then the ignore file.
    pub fn new(root: &Path, use_default_ignores: bool, custom_patterns: &[String]) -> Result<Self> {
        let mut patterns: Vec<String> = Vec::new();

        if use_default_ignores {
            patterns.extend(DEFAULT_IGNORES.iter().map(|p| p.to_string()));
        }

        for pat in custom_patterns {
            if pat.is_empty() {
                log::warn!("Skipping empty ignore pattern");
                continue;
            }
            patterns.push(pat.clone());
        }

        patterns.extend(read_ignore_file(root)?);

        Ok(Self::from_patterns(patterns))
    }

    pub fn from_patterns(patterns: Vec<String>) -> Self {
        let globs = build_globset(&patterns);
        Self { patterns, globs }
    }

    pub fn is_ignored(&self, relative_path: &str) -> bool {
        self.patterns
            .iter()
            .any(|pat| relative_path.contains(pat.as_str()))
            || self.globs.is_match(relative_path)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Reads `.aidigestignore` from the top of `root`. A missing file yields no patterns.
pub fn read_ignore_file(root: &Path) -> Result<Vec<String>> {
    let path = root.join(IGNORE_FILE_NAME);
    if !path.is_file() {
        return Ok(Vec::new());
    }

    let bytes = fs::read(&path).map_err(|e| {
        DigestError::config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let content = String::from_utf8(bytes).map_err(|_| {
        DigestError::config(format!("{} is not valid UTF-8 text", path.display()))
    })?;

    Ok(parse_ignore_lines(&content))
}

fn parse_ignore_lines(content: &str) -> Vec<String> {
    content
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Compiles every pattern once. Patterns that are not valid globs only take
/// part in substring matching.
fn build_globset(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        match compile_glob(pat) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(err) => log::warn!("{}", err),
        }
    }

    builder.build().unwrap_or_else(|e| {
        log::warn!("Failed to build glob set, falling back to substring matching: {}", e);
        GlobSet::empty()
    })
}

fn compile_glob(pattern: &str) -> Result<globset::Glob> {
    GlobBuilder::new(pattern)
        .literal_separator(false)
        .build()
        .map_err(|source| DigestError::Pattern {
            pattern: pattern.to_string(),
            source,
        })
}
