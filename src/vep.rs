// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod check;
pub mod group;
pub mod headers;
pub mod record;
pub mod tabular;
