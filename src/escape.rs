// Copyright 2025 StrongDM Inc
// SPDX-License-Identifier: Apache-2.0

//! SQL-literal escaping boundary.
//!
//! Every scalar the translator interpolates into a clause goes through
//! [`escape`]; no other module builds quoting. The rendering is Postgres
//! style: single-quoted strings with embedded quotes doubled, bare numbers,
//! `TRUE`/`FALSE`, quoted UTC timestamps, and `NULL`.

use crate::value::Scalar;
use chrono::{DateTime, Utc};

/// Renders a scalar as a SQL literal.
pub fn escape(value: &Scalar) -> String {
    match value {
        Scalar::Null => "NULL".to_string(),
        Scalar::Bool(true) => "TRUE".to_string(),
        Scalar::Bool(false) => "FALSE".to_string(),
        Scalar::Number(number) => number.to_string(),
        Scalar::String(text) => quote(text),
        Scalar::Date(instant) => quote(&format_timestamp(instant)),
        Scalar::Wrapped(wrapped) => quote(&format_timestamp(&wrapped.date)),
    }
}

/// Timestamp rendering used for SQL literals: `YYYY-MM-DD HH:MM:SS.mmm` UTC.
pub(crate) fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

fn quote(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('\'');
    for ch in text.chars() {
        if ch == '\'' {
            literal.push('\'');
        }
        literal.push(ch);
    }
    literal.push('\'');
    literal
}
