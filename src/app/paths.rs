use std::path::{Component, Path};

/// Slash-joined path of `entry` relative to `root`.
///
/// Walks both component lists in lock-step while they agree and joins whatever
/// remains of `entry`. An entry outside `root` keeps its non-shared tail.
pub fn relative_path(entry: &Path, root: &Path) -> String {
    let entry_parts: Vec<Component> = entry.components().collect();
    let root_parts: Vec<Component> = root.components().collect();

    let shared = entry_parts
        .iter()
        .zip(root_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    entry_parts[shared..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// File extension without the dot, empty when there is none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}
