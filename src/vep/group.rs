// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use itertools::Itertools;
use log::info;

use crate::vep::record::VariantRecord;

/// VEP sometimes reports this instead of the uploaded variant's id.
pub const PLACEHOLDER_ID: &str = ".";

// Splits an annotation line into its variant id and the remaining values. A placeholder id is
// replaced by the first value (the Location column in default VEP output).
fn parse_annotation_line(line: &str) -> (String, Vec<String>) {
    let mut fields = line.split('\t').map(String::from);
    // split() always yields at least one item
    let raw_id = fields.next().unwrap_or_default();
    let values: Vec<String> = fields.collect();
    let variant_id = if raw_id == PLACEHOLDER_ID {
        values.first().cloned().unwrap_or(raw_id)
    } else {
        raw_id
    };
    (variant_id, values)
}

/// Folds consecutive annotation lines with the same variant id into one record.
///
/// Grouping is by runs: an id that shows up again after a different one starts a new record
/// rather than being merged into the earlier one.
pub fn group_by_variant(lines: &[&str]) -> Vec<VariantRecord> {
    let runs = lines
        .iter()
        .map(|line| parse_annotation_line(line))
        .chunk_by(|(variant_id, _)| variant_id.clone());

    let mut records: Vec<VariantRecord> = Vec::new();
    for (variant_id, rows) in &runs {
        records.push(VariantRecord {
            variant_id,
            data: rows.map(|(_, values)| values).collect(),
        });
    }

    info!(
        "{} annotations have been processed for {} variants.",
        lines.len(),
        records.len()
    );
    records
}
