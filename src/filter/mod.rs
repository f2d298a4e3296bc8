// Copyright 2025 StrongDM Inc
// SPDX-License-Identifier: Apache-2.0

//! Filter translation module.
//!
//! Converts the recursive JSON filter the Wix data API sends into a SQL
//! `WHERE` clause. Field names are inserted verbatim (trusted identifiers);
//! every literal value passes through [`crate::escape::escape`].
//!
//! # Operators
//!
//! | Operator | Meaning | Output |
//! |----------|---------|--------|
//! | `$and`, `$or` | Conjunction/disjunction over child filters | `(a AND b)` |
//! | `$not` | Negation of a single child filter | `NOT (a)` |
//! | `$eq` | Equality, null-aware | `x = 'a'` or `x IS NULL` |
//! | `$ne` | Not equal | `x <> 'a'` |
//! | `$lt`, `$lte`, `$gt`, `$gte` | Range | `x < 5` |
//! | `$contains` | Substring match | `x LIKE '%a%'` |
//! | `$startsWith`, `$endsWith` | Prefix/suffix match | `x LIKE 'a%'` |
//! | `$hasSome` | List membership | `x IN ('a', 'b')` |
//! | `$urlized` | Slug match on lower-cased terms | `LOWER(x) RLIKE 'a[- ]b'` |
//!
//! A node with no operator matches everything. Any other operator string is an
//! [`AdapterError::UnsupportedOperator`](crate::error::AdapterError).

pub mod ast;
pub mod translate;

pub use ast::{Filter, FilterValue};
pub use translate::{parse_filter, translate_filter};
