use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Aggregate a codebase into a single Markdown digest for LLMs"
)]
pub struct Cli {
    /// Directory to aggregate
    #[arg(default_value = ".")]
    pub input_dir: PathBuf,

    /// Where to write the digest (defaults to code_context.md)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Use a predefined set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,

    /// Do not apply the built-in ignore list (node_modules, .git, build, ...)
    #[arg(long)]
    pub no_default_ignores: bool,

    /// Strip trailing whitespace from files that are not whitespace-sensitive
    #[arg(long, short = 'w')]
    pub remove_whitespace: bool,

    /// List every included file once the digest is written
    #[arg(long, short = 's')]
    pub show_output_files: bool,

    /// Extra ignore patterns, matched as substrings or `*` globs
    #[arg(long, short = 'i', num_args = 1..)]
    pub ignore: Option<Vec<String>>,

    /// Do not descend into directories that match an ignore pattern
    #[arg(long)]
    pub prune_ignored_dirs: bool,
}
