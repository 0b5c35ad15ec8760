// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use vep_json::{
    annotate::{annotate_output, count_variant_lines},
    annotator::{Annotator, FileAnnotator},
    vep::record::AnnotationResponse,
};

// Runs a stored VEP output through the pipeline, the expected count coming from a VCF file.
#[allow(dead_code)]
pub fn annotate_files(tool_output: &str, vcf: &str) -> AnnotationResponse {
    let variants = std::fs::read_to_string(vcf).expect("VCF test file not found");
    let output = FileAnnotator::new(tool_output)
        .annotate(&variants)
        .expect("Tool output file not found");
    annotate_output(&output, count_variant_lines(&variants)).expect("well-formed tool output")
}

#[allow(dead_code)]
pub fn variant_ids(response: &AnnotationResponse) -> Vec<&str> {
    response
        .stdout
        .iter()
        .map(|r| r.variant_id.as_str())
        .collect()
}
