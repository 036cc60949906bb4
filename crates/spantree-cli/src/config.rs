//! `spantree.toml` configuration file.
//!
//! ```toml
//! [input]
//! path = "network.txt"
//!
//! [output]
//! format = "json"
//!
//! [validation]
//! require_connected = true
//! check_symmetry = true
//! ```
//!
//! Every key is optional. Command-line flags take precedence.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CliResult;

/// Parsed configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub input: InputSection,
    pub output: OutputSection,
    pub validation: ValidationSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputSection {
    /// Matrix file, or `-` for stdin.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    /// `text` or `json`.
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationSection {
    pub require_connected: Option<bool>,
    pub check_symmetry: Option<bool>,
}

impl FileConfig {
    /// Load a configuration file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> CliResult<Self> {
        Ok(toml::from_str(content)?)
    }
}
