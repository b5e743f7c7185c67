use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Run parameters. Defaults match the puzzle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// Step count to extrapolate to.
    pub target_steps: u64,
    /// Early step whose frontier size is reported directly.
    pub diagnostic_step: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            target_steps: 26_501_365,
            diagnostic_step: 64,
        }
    }
}

/// Partial parameter file; absent fields keep their current value.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamsFile {
    pub target_steps: Option<u64>,
    pub diagnostic_step: Option<u64>,
}

impl ParamsFile {
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json)
    }
}

impl Params {
    pub fn merged(self, file: ParamsFile) -> Self {
        Self {
            target_steps: file.target_steps.unwrap_or(self.target_steps),
            diagnostic_step: file.diagnostic_step.unwrap_or(self.diagnostic_step),
        }
    }
}
