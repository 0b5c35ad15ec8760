// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use crate::common::utils;

use vep_json::{
    annotate::annotate_output,
    annotator::ToolOutput,
    vep::check::check_one_to_one,
};

#[test]
fn end_to_end_response() {
    let resp = utils::annotate_files("tests/data/example.tab", "tests/data/example.vcf");
    assert!(check_one_to_one(&resp.stdout, 2).is_none());
    insta::assert_json_snapshot!(resp, @r###"
    {
      "stdout": [
        {
          "variant_id": "V1",
          "data": [
            [
              "BRCA1",
              "HIGH"
            ],
            [
              "BRCA1",
              "MODERATE"
            ]
          ]
        },
        {
          "variant_id": "V2",
          "data": [
            [
              "TP53",
              "HIGH"
            ]
          ]
        }
      ],
      "stderr": "",
      "header_names": [
        "ID",
        "GENE",
        "IMPACT"
      ]
    }
    "###);
}

#[test]
fn mismatch_does_not_change_response() {
    let raw = std::fs::read_to_string("tests/data/example.tab").expect("Test file not found");
    let output = ToolOutput {
        stdout: raw,
        stderr: String::new(),
    };
    let resp = annotate_output(&output, 3).expect("well-formed tool output");

    let mismatch = check_one_to_one(&resp.stdout, 3).expect("2 records for 3 variants");
    let ids: Vec<&str> = mismatch.variant_ids.iter().map(String::as_str).collect();
    assert_eq!(ids, vec!["V1", "V2"]);
    assert_eq!(
        resp,
        utils::annotate_files("tests/data/example.tab", "tests/data/example.vcf")
    );
}

#[test]
fn failed_annotation_response() {
    let output = ToolOutput {
        stdout: String::new(),
        stderr: String::from("-------------------- EXCEPTION --------------------\nMSG: ERROR: Cache directory not found\n"),
    };
    let resp = annotate_output(&output, 1).expect("stderr is reported, not raised");
    insta::assert_json_snapshot!(resp, @r###"
    {
      "stdout": [],
      "stderr": "-------------------- EXCEPTION --------------------\nMSG: ERROR: Cache directory not found\n",
      "header_names": []
    }
    "###);
}
