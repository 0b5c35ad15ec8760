// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::{debug, info};

use crate::annotator::ToolOutput;
use crate::errors::AnnotError;
use crate::vep::{
    check::check_one_to_one, group::group_by_variant, record::AnnotationResponse,
    tabular::split_output,
};

/// Number of variant records in a VCF fragment: non-empty lines that are not `#` headers.
pub fn count_variant_lines(variants: &str) -> usize {
    variants
        .lines()
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .count()
}

/// Turns the annotator's raw output into a response.
///
/// If the annotator wrote anything to stderr the output is not parsed and the stderr is passed
/// on. Otherwise the output must have a header line (see `split_output()`); the annotation lines
/// are grouped per variant and the number of groups is compared with `expected_count`, which
/// only produces a log message.
pub fn annotate_output(
    output: &ToolOutput,
    expected_count: usize,
) -> Result<AnnotationResponse, AnnotError> {
    if !output.stderr.is_empty() {
        info!("Annotator reported errors; output not parsed");
        return Ok(AnnotationResponse::failed(output.stderr.clone()));
    }

    let split = split_output(&output.stdout)?;
    debug!(
        "{} header names, {} annotation lines",
        split.header_names.len(),
        split.annotation_lines.len()
    );
    let records = group_by_variant(&split.annotation_lines);
    check_one_to_one(&records, expected_count);

    Ok(AnnotationResponse {
        stdout: records,
        stderr: String::new(),
        header_names: split.header_names,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "#ID\tGENE\tIMPACT\nV1\tBRCA1\tHIGH\nV1\tBRCA1\tMODERATE\nV2\tTP53\tHIGH\n";

    fn tool_output(stdout: &str, stderr: &str) -> ToolOutput {
        ToolOutput {
            stdout: String::from(stdout),
            stderr: String::from(stderr),
        }
    }

    #[test]
    fn test_count_variant_lines() {
        assert_eq!(count_variant_lines(""), 0);
        assert_eq!(count_variant_lines("chr1\t100\t.\tA\tT\n"), 1);
        assert_eq!(
            count_variant_lines("##fileformat=VCFv4.2\n#CHROM\tPOS\nchr1\t1\nchr1\t2\n\n"),
            2
        );
        assert_eq!(count_variant_lines("chr1\t1\nchr1\t2"), 2);
    }

    #[test]
    fn test_annotate_output() {
        let resp = annotate_output(&tool_output(RAW, ""), 2).expect("well-formed output");
        assert_eq!(resp.header_names, vec!["ID", "GENE", "IMPACT"]);
        assert_eq!(resp.stdout.len(), 2);
        assert_eq!(resp.stdout[0].variant_id, "V1");
        assert_eq!(
            resp.stdout[0].data,
            vec![vec!["BRCA1", "HIGH"], vec!["BRCA1", "MODERATE"]]
        );
        assert_eq!(resp.stdout[1].variant_id, "V2");
        assert_eq!(resp.stdout[1].data, vec![vec!["TP53", "HIGH"]]);
        assert!(resp.stderr.is_empty());
    }

    #[test]
    fn test_annotate_output_count_mismatch_keeps_response() {
        let matching = annotate_output(&tool_output(RAW, ""), 2).expect("well-formed output");
        let mismatching = annotate_output(&tool_output(RAW, ""), 3).expect("well-formed output");
        assert_eq!(matching, mismatching);
    }

    #[test]
    fn test_annotate_output_is_repeatable() {
        let out = tool_output(RAW, "");
        let first = annotate_output(&out, 2).expect("well-formed output");
        let second = annotate_output(&out, 2).expect("well-formed output");
        assert_eq!(first, second);
    }

    #[test]
    fn test_annotate_output_stderr() {
        // stdout would be malformed, but it is never looked at
        let resp = annotate_output(&tool_output("garbage", "ERROR: bad input\n"), 1)
            .expect("stderr is not an error");
        assert!(resp.is_failure());
        assert_eq!(resp.stderr, "ERROR: bad input\n");
        assert!(resp.stdout.is_empty());
        assert!(resp.header_names.is_empty());
    }

    #[test]
    fn test_annotate_output_malformed() {
        let res = annotate_output(&tool_output("V1\tX\n", ""), 1);
        assert!(matches!(res, Err(AnnotError::MalformedOutput(_))));
    }

    #[test]
    fn test_annotate_output_header_only() {
        let resp = annotate_output(&tool_output("#ID\tGENE\n", ""), 0).expect("header present");
        assert!(resp.stdout.is_empty());
        assert_eq!(resp.header_names, vec!["ID", "GENE"]);
    }
}
