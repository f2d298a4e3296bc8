// Copyright 2025 StrongDM Inc
// SPDX-License-Identifier: Apache-2.0

//! Scalar value model shared by the filter translator and the date adapter.
//!
//! These types mirror the JSON the data API exchanges with the adapter. Dates
//! exist in two shapes: the document-API wrapped form `{ "$date": <ISO> }` and
//! the native timestamp used internally before values reach the store.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A flat record exchanged with the data API: field name to scalar value.
pub type Record = BTreeMap<String, Scalar>;

/// A single field value as it appears on the wire.
///
/// Deserialization order matters: `Date` sits last so ISO-looking strings stay
/// `String` until [`Scalar::coerce`] is asked to normalize them, matching the
/// lenient pass-through policy for values that cannot be coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(f64),
    Wrapped(WrappedDate),
    String(String),
    Date(DateTime<Utc>),
}

/// The document-API wrapped date form, `{ "$date": <ISO-8601 string> }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WrappedDate {
    #[serde(rename = "$date", with = "iso_instant")]
    pub date: DateTime<Utc>,
}

impl Scalar {
    /// Normalizes a wire value before it is escaped into SQL: wrapped dates
    /// and ISO-8601 strings become native timestamps, everything else is
    /// returned unchanged.
    pub fn coerce(self) -> Scalar {
        match self {
            Scalar::Wrapped(wrapped) => Scalar::Date(wrapped.date),
            Scalar::String(raw) => match parse_iso_instant(&raw) {
                Some(instant) => Scalar::Date(instant),
                None => Scalar::String(raw),
            },
            other => other,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
}

/// Parses `YYYY-MM-DDTHH:MM:SS(.fraction)?(Z|±HH:MM)?`. Timestamps without a
/// zone suffix are taken as UTC.
pub fn parse_iso_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

mod iso_instant {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_iso_instant(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid $date value: {raw}")))
    }
}
