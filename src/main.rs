// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use vep_json::errors::AnnotError;

fn main() -> Result<(), AnnotError> {
    vep_json::run()
}
