// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::collections::BTreeSet;

use log::{debug, warn};

use crate::vep::record::VariantRecord;

// Reported when the number of grouped records differs from the number of variants sent to the
// annotator. VEP splits multi-allelic sites and sometimes reports '.' ids, so this happens with
// real data; it is logged, never treated as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMismatch {
    pub grouped: usize,
    pub expected: usize,
    pub variant_ids: BTreeSet<String>,
}

/// Compares the number of records with the number of input variants, warning on a difference.
///
/// The returned value is informational only; the response is the same either way.
pub fn check_one_to_one(records: &[VariantRecord], expected_count: usize) -> Option<CountMismatch> {
    let grouped = records.len();
    if grouped == expected_count {
        debug!("{} records for {} variants", grouped, expected_count);
        return None;
    }

    let variant_ids: BTreeSet<String> = records.iter().map(|r| r.variant_id.clone()).collect();
    warn!(
        "{} != {}. New names are {:?}.",
        grouped, expected_count, variant_ids
    );
    Some(CountMismatch {
        grouped,
        expected: expected_count,
        variant_ids,
    })
}
