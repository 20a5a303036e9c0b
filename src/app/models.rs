use std::path::PathBuf;

/// Settings for a single aggregation run, after merging presets and CLI args.
#[derive(Debug, Clone)]
pub struct AggregationConfig {
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
    pub use_default_ignores: bool,
    pub remove_whitespace: bool,
    pub report_included_files: bool,
    pub custom_ignore_patterns: Vec<String>,
    /// Skip descending into directories whose relative path is ignored.
    pub prune_ignored_dirs: bool,
}

impl AggregationConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_file: output_file.into(),
            use_default_ignores: true,
            remove_whitespace: false,
            report_included_files: false,
            custom_ignore_patterns: Vec::new(),
            prune_ignored_dirs: false,
        }
    }
}

/// A file that made it into the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub relative_path: String,
    pub is_text: bool, // False when the content could not be decoded and a placeholder was written
}

/// Result of a completed run, entries in discovery order.
#[derive(Debug, Default)]
pub struct AggregationSummary {
    pub entries: Vec<FileEntry>,
}

impl AggregationSummary {
    pub fn included_paths(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|e| e.relative_path.as_str())
            .collect()
    }

    pub fn text_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_text).count()
    }

    pub fn binary_count(&self) -> usize {
        self.entries.len() - self.text_count()
    }
}
