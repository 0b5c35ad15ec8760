// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Splits VEP's tab-delimited output (`--tab`) into the column names and the annotation rows. See
// http://useast.ensembl.org/info/docs/tools/vep/vep_formats.html#tab for the format.

use crate::errors::AnnotError;

pub const HEADER_MARKER: char = '#';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutput<'a> {
    /// Column names, marker removed (e.g. `["Uploaded_variation", "Location", ...]`).
    pub header_names: Vec<String>,
    /// Every line from the first non-marker line after the header onwards, in order.
    pub annotation_lines: Vec<&'a str>,
}

/// Separates the header line from the annotation lines.
///
/// Lines before the first `#` line are discarded. Consecutive `#` lines replace one another, so
/// VEP's `##` commentary is dropped and the last marker line, which names the columns, is kept.
/// The first line without the marker starts the annotation run; scanning stops there, which means
/// a `#` line further down is returned as data.
pub fn split_output(raw: &str) -> Result<SplitOutput<'_>, AnnotError> {
    let mut lines: Vec<&str> = raw.split('\n').collect();
    if raw.ends_with('\n') {
        // remove trailing empty line
        lines.pop();
    }

    let first_marker = lines
        .iter()
        .position(|l| l.starts_with(HEADER_MARKER))
        .ok_or_else(|| {
            AnnotError::MalformedOutput(format!(
                "no '{}' header line in {} line(s) of output",
                HEADER_MARKER,
                lines.len()
            ))
        })?;

    let mut header_line = lines[first_marker];
    let mut rest = &lines[first_marker + 1..];
    while let Some((&line, tail)) = rest.split_first() {
        if !line.starts_with(HEADER_MARKER) {
            break;
        }
        header_line = line;
        rest = tail;
    }

    let header_names = header_line
        .strip_prefix(HEADER_MARKER)
        .unwrap_or(header_line)
        .split('\t')
        .map(String::from)
        .collect();

    Ok(SplitOutput {
        header_names,
        annotation_lines: rest.to_vec(),
    })
}
