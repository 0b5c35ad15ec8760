// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    process::{Command, Stdio},
    thread,
};

use log::{debug, info, warn};
use regex::Regex;

use crate::errors::AnnotError;

/// Perl warning VEP prints on some installs; it does not mean the run failed.
pub const DEFAULT_IGNORED_STDERR: &[&str] = &["^Possible precedence"];

/// Raw text an annotation tool wrote to its two output streams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

pub trait Annotator {
    /// Annotates `variants` (VCF data lines) and returns the tool's output.
    fn annotate(&self, variants: &str) -> Result<ToolOutput, AnnotError>;
}

// Drops stderr lines that match any of a set of patterns.
#[derive(Debug, Clone)]
pub struct StderrFilter {
    patterns: Vec<Regex>,
}

impl StderrFilter {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, AnnotError> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(StderrFilter { patterns })
    }

    pub fn apply(&self, stderr: &str) -> String {
        stderr
            .split_inclusive('\n')
            .filter(|line| {
                let text = line.trim_end_matches(['\r', '\n']);
                let ignored = self.patterns.iter().any(|re| re.is_match(text));
                if ignored {
                    debug!("Ignoring annotator warning: {}", text);
                }
                !ignored
            })
            .collect()
    }
}

impl Default for StderrFilter {
    fn default() -> Self {
        StderrFilter::new(DEFAULT_IGNORED_STDERR).unwrap_or(StderrFilter {
            patterns: Vec::new(),
        })
    }
}

/// Runs an external program (e.g. `bash run_vep.sh`) with the variants on its stdin.
pub struct CommandAnnotator {
    command: Vec<String>,
    stderr_filter: StderrFilter,
}

impl CommandAnnotator {
    pub fn new(command: Vec<String>, stderr_filter: StderrFilter) -> Result<Self, AnnotError> {
        if command.is_empty() {
            return Err(AnnotError::Config(String::from(
                "annotator command must not be empty",
            )));
        }
        Ok(CommandAnnotator {
            command,
            stderr_filter,
        })
    }
}

impl Annotator for CommandAnnotator {
    fn annotate(&self, variants: &str) -> Result<ToolOutput, AnnotError> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| AnnotError::Config(String::from("annotator command is empty")))?;
        info!("Running {} {}", program, args.join(" "));

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| AnnotError::Annotator(format!("Failed to run {}: {}", program, e)))?;

        // Feed stdin from another thread so a tool that writes before it has read everything
        // cannot block on a full stdout pipe.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| AnnotError::Annotator(format!("No stdin for {}", program)))?;
        let input = variants.to_owned();
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output()?;
        match writer.join() {
            Ok(Ok(())) => {}
            // The tool quit without reading all of its input; its stderr says why.
            Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {
                warn!("{} closed its input early", program);
            }
            Ok(Err(e)) => return Err(AnnotError::Io(e)),
            Err(_) => {
                return Err(AnnotError::Annotator(format!(
                    "stdin writer for {} panicked",
                    program
                )))
            }
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let mut stderr = self
            .stderr_filter
            .apply(&String::from_utf8_lossy(&output.stderr));
        if !output.status.success() && stderr.is_empty() {
            stderr = format!("{} exited with {}", program, output.status);
        }
        debug!(
            "{} wrote {} bytes to stdout, {} bytes to stderr",
            program,
            stdout.len(),
            stderr.len()
        );
        Ok(ToolOutput { stdout, stderr })
    }
}

/// Serves a VEP output file produced earlier, whatever the variants.
pub struct FileAnnotator {
    path: PathBuf,
}

impl FileAnnotator {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileAnnotator {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Annotator for FileAnnotator {
    fn annotate(&self, _variants: &str) -> Result<ToolOutput, AnnotError> {
        info!("Reading annotator output from {}", self.path.display());
        Ok(ToolOutput {
            stdout: fs::read_to_string(&self.path)?,
            stderr: String::new(),
        })
    }
}
