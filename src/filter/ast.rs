// Copyright 2025 StrongDM Inc
// SPDX-License-Identifier: Apache-2.0

//! Filter tree types, mirroring the data API's JSON wire shape.

use serde::Deserialize;

use crate::value::Scalar;

/// One node of the filter tree.
///
/// The operator is kept as the raw wire string so an unknown operator can be
/// reported to the caller as a bad request instead of failing deserialization.
/// An absent operator is a valid match-everything leaf, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Filter {
    pub operator: Option<String>,
    #[serde(rename = "fieldName")]
    pub field_name: Option<String>,
    pub value: FilterValue,
}

/// The `value` slot of a filter node: a scalar for comparison operators, a
/// scalar list for `$hasSome`/`$urlized`, or child filters for `$and`/`$or`/
/// `$not`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    #[default]
    Absent,
    Scalar(Scalar),
    Scalars(Vec<Scalar>),
    Filters(Vec<Filter>),
}

impl FilterValue {
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            FilterValue::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_scalars(&self) -> &[Scalar] {
        match self {
            FilterValue::Scalars(scalars) => scalars,
            _ => &[],
        }
    }

    pub fn as_filters(&self) -> &[Filter] {
        match self {
            FilterValue::Filters(filters) => filters,
            _ => &[],
        }
    }
}
