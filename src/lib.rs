// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod annotate;
pub mod annotator;
pub mod config;
pub mod errors;
mod runner;
pub mod vep;

use crate::errors::AnnotError;

pub fn run() -> Result<(), AnnotError> {
    runner::run()
}
