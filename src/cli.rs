use std::path::PathBuf;

use clap::Parser;

use crate::config::Algorithm;

/// Interactive fuzzy picker for creating and deleting directories.
#[derive(Debug, Parser)]
#[command(name = "dirpick", version, about)]
pub struct Cli {
    /// Manifest file (default: ./dirpick_manifest, then beside the executable)
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Scoring config file (YAML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ranking algorithm, overriding the config file
    #[arg(long, value_enum)]
    pub algorithm: Option<Algorithm>,

    /// Compare characters case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Append structured logs to this file (also honored via DIRPICK_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
