// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs,
    io::{stdin, stdout, IsTerminal, Read, Write},
    path::PathBuf,
};

use clap::Parser;
use log::info;
use serde::Serialize;

use crate::annotate::{annotate_output, count_variant_lines};
use crate::annotator::{Annotator, FileAnnotator};
use crate::config::{find_config, VepJsonConfig};
use crate::errors::AnnotError;
use crate::vep::headers::{describe_headers, SAMPLE_VARIANT};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// VCF file with the variants to annotate (default: stdin)
    variants: Option<String>,

    /// Parse this VEP output (tab format) instead of running VEP
    #[arg(short = 't', long = "tool-output")]
    tool_output: Option<String>,

    /// Print the annotation header schema and exit
    #[arg(short = 'H', long = "headers")]
    headers: bool,

    /// Expected number of variants (default: counted from the input)
    #[arg(short = 'n', long = "expected-count")]
    expected_count: Option<usize>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Config file (default: ~/.vepjsonconfig, then ./.vepjsonconfig)
    #[arg(short, long)]
    config: Option<String>,
}

fn load_config(explicit: Option<&str>) -> Result<VepJsonConfig, AnnotError> {
    match explicit.map(PathBuf::from).or_else(find_config) {
        Some(path) => VepJsonConfig::from_file(&path),
        None => Ok(VepJsonConfig::default()),
    }
}

// Reads the variants from a file or stdin. With a ready-made tool output the variants only serve
// to count, so an interactive stdin is not waited on.
fn read_variants(path: Option<&str>, optional: bool) -> Result<String, AnnotError> {
    if let Some(path) = path {
        return Ok(fs::read_to_string(path)?);
    }
    let mut input = stdin();
    if optional && input.is_terminal() {
        return Ok(String::new());
    }
    let mut variants = String::new();
    input.read_to_string(&mut variants)?;
    Ok(variants)
}

fn write_json<T: Serialize, W: Write>(
    out: &mut W,
    value: &T,
    pretty: bool,
) -> Result<(), AnnotError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn run_with<W: Write>(cli: Cli, out: &mut W) -> Result<(), AnnotError> {
    let config = load_config(cli.config.as_deref())?;
    let annotator: Box<dyn Annotator> = match &cli.tool_output {
        Some(path) => Box::new(FileAnnotator::new(path)),
        None => Box::new(config.command_annotator()?),
    };

    if cli.headers {
        let output = annotator.annotate(SAMPLE_VARIANT)?;
        if !output.stderr.is_empty() {
            return Err(AnnotError::Annotator(output.stderr));
        }
        let table = config.header_table()?;
        let headers = describe_headers(&output.stdout, &table)?;
        return write_json(out, &headers, cli.pretty);
    }

    let variants = read_variants(cli.variants.as_deref(), cli.tool_output.is_some())?;
    let expected_count = cli
        .expected_count
        .unwrap_or_else(|| count_variant_lines(&variants));
    info!("Processing {} variants", expected_count);

    let output = annotator.annotate(&variants)?;
    let response = annotate_output(&output, expected_count)?;
    write_json(out, &response, cli.pretty)
}

pub fn run() -> Result<(), AnnotError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let stdout = stdout();
    let mut handle = stdout.lock();
    run_with(cli, &mut handle)
}
