// Copyright 2025 StrongDM Inc
// SPDX-License-Identifier: Apache-2.0

//! Date shape adapter.
//!
//! Records cross the boundary in two directions: rows leaving for the data
//! API get their native timestamps wrapped as `{ "$date": ... }`, and records
//! arriving from the API get wrapped dates unwrapped before storage. Both
//! mutate the record in place and return the same reference.

use crate::value::{Record, Scalar, WrappedDate};

/// Wraps every native date field in the document-API `$date` form. Non-date
/// fields are untouched.
pub fn wrap_dates(record: &mut Record) -> &mut Record {
    for value in record.values_mut() {
        if let Scalar::Date(date) = value {
            *value = Scalar::Wrapped(WrappedDate { date: *date });
        }
    }
    record
}

/// Replaces every wrapped date field with its native timestamp. Fields that
/// are not wrapped dates, including null, are untouched.
pub fn unwrap_dates(record: &mut Record) -> &mut Record {
    for value in record.values_mut() {
        if let Scalar::Wrapped(wrapped) = value {
            *value = Scalar::Date(wrapped.date);
        }
    }
    record
}
