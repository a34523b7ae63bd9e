// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Statement construction for the Gridgate gateway.
//!
//! Untrusted identifiers are validated against an allow-list and quoted
//! into statement text; untrusted values never enter the text and always
//! travel as positional placeholders. Every builder is a pure function of
//! its input.

pub mod builder;
pub mod error;
pub mod ident;
pub mod statement;

pub use builder::{RowSet, TableSpec, create_table, insert, select};
pub use error::SqlError;
pub use statement::Statement;
