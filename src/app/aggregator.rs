use crate::app::error::{DigestError, Result};
use crate::app::formatter::{is_whitespace_sensitive, normalize_whitespace, DigestDocument};
use crate::app::ignore_rules::IgnoreResolver;
use crate::app::models::{AggregationConfig, AggregationSummary, FileEntry};
use crate::app::paths::{extension_of, relative_path};
use crate::app::scanner::Scanner;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Runs one aggregation: walk, filter, format, then write the document.
///
/// Progress lines go to `on_log` as they happen. Ignored, processed and
/// binary files are reported there only; the error channel carries nothing
/// but fatal configuration and I/O failures.
pub fn aggregate<F>(config: &AggregationConfig, mut on_log: F) -> Result<AggregationSummary>
where
    F: FnMut(&str),
{
    let root = resolve_root(&config.input_dir)?;
    let resolver = Arc::new(IgnoreResolver::new(
        &root,
        config.use_default_ignores,
        &config.custom_ignore_patterns,
    )?);

    on_log("Starting file aggregation...");
    on_log(&format!("Input directory: {}", root.display()));
    on_log(&format!("Output file: {}", config.output_file.display()));
    on_log(&format!("Using {} ignore patterns", resolver.len()));

    let mut scanner = Scanner::new(root.clone());
    if config.prune_ignored_dirs {
        scanner = scanner.with_pruning(Arc::clone(&resolver));
    }

    // A digest written inside the input tree must not feed the next run.
    let output_abs = absolute_output(&config.output_file);

    let mut document = DigestDocument::new();
    let mut summary = AggregationSummary::default();

    for item in scanner.files() {
        let path = item?;
        let relative = relative_path(&path, &root);

        if output_abs.as_deref() == Some(path.as_path()) || resolver.is_ignored(&relative) {
            on_log(&format!("Ignored: {}", relative));
            continue;
        }

        let bytes = fs::read(&path).map_err(|e| DigestError::io(&path, e))?;
        match String::from_utf8(bytes) {
            Ok(content) => {
                let extension = extension_of(&path);
                let body = if config.remove_whitespace && !is_whitespace_sensitive(&extension) {
                    normalize_whitespace(&content)
                } else {
                    content
                };
                document.push_text_section(&relative, &extension, &body);
                on_log(&format!("Processed: {}", relative));
                summary.entries.push(FileEntry {
                    relative_path: relative,
                    is_text: true,
                });
            }
            Err(_) => {
                document.push_binary_section(&relative);
                on_log(&format!("Included binary file: {}", relative));
                summary.entries.push(FileEntry {
                    relative_path: relative,
                    is_text: false,
                });
            }
        }
    }

    write_atomically(&config.output_file, document.as_str())?;

    on_log("Files aggregated successfully.");
    on_log(&format!("Total files included: {}", summary.entries.len()));

    if config.report_included_files {
        on_log("Included files:");
        for entry in &summary.entries {
            on_log(&format!("- {}", entry.relative_path));
        }
    }

    log::debug!(
        "Digest written: {} text, {} binary",
        summary.text_count(),
        summary.binary_count()
    );

    Ok(summary)
}

fn resolve_root(input_dir: &Path) -> Result<PathBuf> {
    let root = fs::canonicalize(input_dir).map_err(|e| {
        DigestError::config(format!(
            "Input directory {} cannot be resolved: {}",
            input_dir.display(),
            e
        ))
    })?;

    if !root.is_dir() {
        return Err(DigestError::config(format!(
            "Input path {} is not a directory",
            root.display()
        )));
    }
    Ok(root)
}

fn output_dir(output: &Path) -> &Path {
    match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

fn absolute_output(output: &Path) -> Option<PathBuf> {
    let name = output.file_name()?;
    fs::canonicalize(output_dir(output))
        .ok()
        .map(|dir| dir.join(name))
}

/// Writes through a temp file in the target's directory and renames it into
/// place, so a failed run never leaves a truncated document behind.
///
/// An existing target keeps its permissions; a new one gets the umask default.
fn write_atomically(output: &Path, content: &str) -> Result<()> {
    let parent = output_dir(output);

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder
        .tempfile_in(parent)
        .map_err(|e| DigestError::io(parent, e))?;
    if let Ok(existing) = fs::metadata(output) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| DigestError::io(tmp.path(), e))?;
    }
    tmp.write_all(content.as_bytes())
        .map_err(|e| DigestError::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| DigestError::io(tmp.path(), e))?;
    tmp.persist(output)
        .map_err(|e| DigestError::io(output, e.error))?;
    Ok(())
}
