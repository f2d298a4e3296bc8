// Copyright 2025 StrongDM Inc
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("filter of type {0} is not supported")]
    UnsupportedOperator(String),
    #[error("operator {0} requires a fieldName")]
    MissingField(String),
    #[error("invalid filter: {0}")]
    InvalidFilter(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
