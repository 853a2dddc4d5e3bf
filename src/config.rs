//! Scoring configuration: algorithm choice, case mode and weights.
//!
//! Everything has a sensible default, so the config file is optional and a
//! partial file only overrides what it mentions.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::rank::ScorerSpec;
use crate::core::score::{AlignWeights, CaseMode, EditCosts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Weighted edit distance, smallest distance first.
    Edit,
    /// Alignment score with streak bonuses, highest score first.
    #[default]
    Align,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parsing {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ScoringConfig {
    pub algorithm: Algorithm,
    pub case: CaseMode,
    pub edit: EditCosts,
    pub align: AlignWeights,
}

impl ScoringConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn scorer_spec(&self) -> ScorerSpec {
        match self.algorithm {
            Algorithm::Edit => ScorerSpec::EditDistance(self.edit),
            Algorithm::Align => ScorerSpec::Alignment(self.align),
        }
    }

    pub fn case_mode(&self) -> CaseMode {
        self.case
    }
}
