// Copyright 2025 StrongDM Inc
// SPDX-License-Identifier: Apache-2.0

//! Library crate for the Wix external-database SQL adapter core.
//!
//! Two independent pieces: [`filter`] turns the data API's JSON filter tree
//! into a SQL `WHERE` clause, and [`dates`] converts record fields between the
//! document-API wrapped-date form (`{ "$date": ... }`) and native timestamps.
//! The surrounding webhook/connector layer is not part of this crate.

pub mod dates;
pub mod error;
pub mod escape;
pub mod filter;
pub mod value;
