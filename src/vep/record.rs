// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use serde::{Deserialize, Serialize};

// All annotation rows VEP produced for one run of identical variant ids. Each row is the tab-split
// line minus its id column.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRecord {
    pub variant_id: String,
    pub data: Vec<Vec<String>>,
}

/// What a caller gets back for one batch of variants.
///
/// A non-empty `stderr` means the annotation step failed, in which case `stdout` and
/// `header_names` are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationResponse {
    pub stdout: Vec<VariantRecord>,
    pub stderr: String,
    pub header_names: Vec<String>,
}

impl AnnotationResponse {
    pub fn failed(stderr: String) -> Self {
        AnnotationResponse {
            stdout: Vec::new(),
            stderr,
            header_names: Vec::new(),
        }
    }

    pub fn is_failure(&self) -> bool {
        !self.stderr.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_keys() {
        let resp = AnnotationResponse {
            stdout: vec![VariantRecord {
                variant_id: String::from("chr1:751"),
                data: vec![vec![String::from("anno"), String::from("tation")]],
            }],
            stderr: String::new(),
            header_names: vec![String::from("Uploaded_variation")],
        };
        let value = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(
            value,
            json!({
                "stdout": [{"variant_id": "chr1:751", "data": [["anno", "tation"]]}],
                "stderr": "",
                "header_names": ["Uploaded_variation"],
            })
        );
    }

    #[test]
    fn test_failed_response() {
        let resp = AnnotationResponse::failed(String::from("boom"));
        assert!(resp.is_failure());
        assert!(resp.stdout.is_empty());
        assert!(resp.header_names.is_empty());
    }
}
