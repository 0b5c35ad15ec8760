// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use log::debug;
use serde::Deserialize;

use crate::annotator::{CommandAnnotator, StderrFilter, DEFAULT_IGNORED_STDERR};
use crate::errors::AnnotError;
use crate::vep::headers::HeaderTable;

pub const CONFIG_FILENAME: &str = ".vepjsonconfig";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VepJsonConfig {
    pub tools: ToolsConfig,
    /// JSON file replacing the built-in header descriptions.
    pub header_table: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Program and arguments; variants are written to its stdin.
    pub vep_command: Vec<String>,
    /// Regexes for stderr lines that do not indicate failure.
    pub ignored_stderr_patterns: Vec<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        ToolsConfig {
            vep_command: vec![String::from("bash"), String::from("run_vep.sh")],
            ignored_stderr_patterns: DEFAULT_IGNORED_STDERR
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl VepJsonConfig {
    pub fn from_file(path: &Path) -> Result<Self, AnnotError> {
        let file = File::open(path)?;
        let config: VepJsonConfig = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| AnnotError::Config(format!("{}: {}", path.display(), e)))?;
        debug!("Read config from {}", path.display());
        Ok(config)
    }

    pub fn command_annotator(&self) -> Result<CommandAnnotator, AnnotError> {
        let filter = StderrFilter::new(&self.tools.ignored_stderr_patterns)?;
        CommandAnnotator::new(self.tools.vep_command.clone(), filter)
    }

    pub fn header_table(&self) -> Result<HeaderTable, AnnotError> {
        match &self.header_table {
            Some(path) => HeaderTable::from_json_file(path),
            None => Ok(HeaderTable::builtin()),
        }
    }
}

/// Looks for the config file in $HOME, then in the current directory.
pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILENAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILENAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}
