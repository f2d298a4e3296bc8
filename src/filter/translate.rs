// Copyright 2025 StrongDM Inc
// SPDX-License-Identifier: Apache-2.0

//! Recursive translation of a filter tree into a SQL clause.

use super::ast::Filter;
use crate::error::{AdapterError, Result};
use crate::escape::{escape, format_timestamp};
use crate::value::Scalar;

/// Translates a filter into a `WHERE ...` string, or the empty string when
/// there is nothing to filter on (absent filter, no operator, or a body that
/// translates to nothing, such as an empty `$hasSome` list).
pub fn translate_filter(filter: Option<&Filter>) -> Result<String> {
    let Some(filter) = filter else {
        return Ok(String::new());
    };
    if filter.operator.is_none() {
        return Ok(String::new());
    }
    let clause = translate(filter)?;
    if clause.is_empty() {
        return Ok(clause);
    }
    let sql = format!("WHERE {clause}");
    tracing::debug!(%sql, "Translated filter");
    Ok(sql)
}

/// Deserializes the raw filter JSON the connector hands over. Empty input and
/// JSON `null` mean "no filter".
pub fn parse_filter(json: &str) -> Result<Option<Filter>> {
    let trimmed = json.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }
    let filter: Filter = serde_json::from_str(trimmed)?;
    Ok(Some(filter))
}

fn translate(filter: &Filter) -> Result<String> {
    let Some(operator) = filter.operator.as_deref() else {
        // Match-everything leaf.
        return Ok("TRUE = TRUE".to_string());
    };

    match operator {
        "$and" => join_children(filter, " AND "),
        "$or" => join_children(filter, " OR "),
        "$not" => {
            let inner = match filter.value.as_filters().first() {
                Some(child) => translate(child)?,
                None => String::new(),
            };
            Ok(if inner.is_empty() {
                inner
            } else {
                format!("NOT ({inner})")
            })
        }
        "$eq" => {
            let field = field_name(filter, operator)?;
            let value = coerced_value(filter);
            Ok(if value.is_null() {
                format!("{field} IS NULL")
            } else {
                format!("{field} = {}", escape(&value))
            })
        }
        // Null is not special-cased here: `$ne` against null renders as the
        // comparison `x <> NULL`, matching the upstream behavior.
        "$ne" | "$lt" | "$lte" | "$gt" | "$gte" => {
            let field = field_name(filter, operator)?;
            let comparator = comparator(operator);
            Ok(format!(
                "{field} {comparator} {}",
                escape(&coerced_value(filter))
            ))
        }
        "$contains" => like_clause(filter, operator, "%", "%", true),
        "$startsWith" => like_clause(filter, operator, "", "%", false),
        "$endsWith" => like_clause(filter, operator, "%", "", false),
        "$hasSome" => {
            let field = field_name(filter, operator)?;
            let literals: Vec<String> = filter
                .value
                .as_scalars()
                .iter()
                .map(|scalar| escape(&scalar.clone().coerce()))
                .collect();
            Ok(if literals.is_empty() {
                String::new()
            } else {
                format!("{field} IN ({})", literals.join(", "))
            })
        }
        "$urlized" => {
            let field = field_name(filter, operator)?;
            let pattern = filter
                .value
                .as_scalars()
                .iter()
                .filter_map(raw_text)
                .map(|term| term.to_lowercase())
                .collect::<Vec<_>>()
                .join("[- ]");
            // The pattern is interpolated raw, not escaped. Callers must keep
            // $urlized terms validated upstream; see the module docs.
            Ok(if pattern.is_empty() {
                String::new()
            } else {
                format!("LOWER({field}) RLIKE '{pattern}'")
            })
        }
        other => Err(AdapterError::UnsupportedOperator(other.to_string())),
    }
}

fn join_children(filter: &Filter, separator: &str) -> Result<String> {
    let mut clauses = Vec::new();
    for child in filter.value.as_filters() {
        let clause = translate(child)?;
        if !clause.is_empty() {
            clauses.push(clause);
        }
    }
    let joined = clauses.join(separator);
    Ok(if joined.is_empty() {
        joined
    } else {
        format!("({joined})")
    })
}

fn like_clause(
    filter: &Filter,
    operator: &str,
    before: &str,
    after: &str,
    skip_empty: bool,
) -> Result<String> {
    let field = field_name(filter, operator)?;
    let text = filter
        .value
        .as_scalar()
        .and_then(raw_text)
        .unwrap_or_default();
    if skip_empty && text.is_empty() {
        return Ok(String::new());
    }
    let pattern = Scalar::String(format!("{before}{text}{after}"));
    Ok(format!("{field} LIKE {}", escape(&pattern)))
}

fn field_name<'a>(filter: &'a Filter, operator: &str) -> Result<&'a str> {
    filter
        .field_name
        .as_deref()
        .ok_or_else(|| AdapterError::MissingField(operator.to_string()))
}

fn comparator(operator: &str) -> &'static str {
    match operator {
        "$ne" => "<>",
        "$lt" => "<",
        "$lte" => "<=",
        "$gt" => ">",
        "$gte" => ">=",
        _ => unreachable!("comparator called for {operator}"),
    }
}

/// The comparison operand, coerced; an absent value compares as null.
fn coerced_value(filter: &Filter) -> Scalar {
    filter
        .value
        .as_scalar()
        .cloned()
        .unwrap_or(Scalar::Null)
        .coerce()
}

/// Unquoted text of a scalar, used to build LIKE/RLIKE patterns.
fn raw_text(scalar: &Scalar) -> Option<String> {
    match scalar {
        Scalar::Null => None,
        Scalar::String(text) => Some(text.clone()),
        Scalar::Number(number) => Some(number.to_string()),
        Scalar::Bool(flag) => Some(flag.to_string()),
        Scalar::Date(instant) => Some(format_timestamp(instant)),
        Scalar::Wrapped(wrapped) => Some(format_timestamp(&wrapped.date)),
    }
}
