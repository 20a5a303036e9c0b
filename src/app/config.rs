use crate::app::cli::Cli;
use crate::app::models::AggregationConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_FILE: &str = "code_context.md";

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PresetConfig {
    pub ignore: Option<Vec<String>>,
    pub output: Option<PathBuf>,
    pub use_default_ignores: Option<bool>,
    pub remove_whitespace: Option<bool>,
    pub show_output_files: Option<bool>,
    pub prune_ignored_dirs: Option<bool>,
}

fn presets_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home
        .join(".config")
        .join("code_digest")
        .join("presets.toml"))
}

fn load_presets_file() -> Result<HashMap<String, PresetConfig>> {
    let config_path = presets_path()?;

    if !config_path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(&config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    parse_presets(&content)
}

pub fn parse_presets(content: &str) -> Result<HashMap<String, PresetConfig>> {
    let parsed: PresetsFile = toml::from_str(content).context("Failed to parse presets.toml")?;
    Ok(parsed.presets)
}

fn merge_vecs(preset_vec: Option<Vec<String>>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = preset_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    // Deduplicate while keeping order
    let mut seen = std::collections::HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

pub fn resolve_config(cli: Cli) -> Result<AggregationConfig> {
    let presets = load_presets_file()?;
    Ok(merge_config(cli, &presets))
}

/// Preset selection: `--preset` flag, else the input folder's name, else none.
/// Explicit CLI flags win over preset values.
pub fn merge_config(cli: Cli, presets: &HashMap<String, PresetConfig>) -> AggregationConfig {
    let folder_name = fs::canonicalize(&cli.input_dir)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()));
    let preset_key = cli.preset.clone().or(folder_name);
    let preset = preset_key
        .as_deref()
        .and_then(|k| presets.get(k))
        .cloned()
        .unwrap_or_default();

    let output_file = cli
        .output
        .or(preset.output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

    AggregationConfig {
        input_dir: cli.input_dir,
        output_file,
        use_default_ignores: !cli.no_default_ignores && preset.use_default_ignores.unwrap_or(true),
        remove_whitespace: cli.remove_whitespace || preset.remove_whitespace.unwrap_or(false),
        report_included_files: cli.show_output_files
            || preset.show_output_files.unwrap_or(false),
        custom_ignore_patterns: merge_vecs(preset.ignore, cli.ignore),
        prune_ignored_dirs: cli.prune_ignored_dirs || preset.prune_ignored_dirs.unwrap_or(false),
    }
}
