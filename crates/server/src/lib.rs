// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! HTTP gateway for the Gridgate tabular store.
//!
//! The crate wires four stages around an Axum router:
//!
//! - a transport/credential guard that runs before any routing outcome
//! - path-segment dispatch between schema (DDL) and data (DML) operations
//! - statement construction via `gridgate-sql`, execution via
//!   `gridgate-store`
//! - translation of every outcome, panics included, into an HTTP response
//!
//! # Endpoints
//!
//! - `POST <base>/DDL/table` - batch table creation
//! - `GET <base>/DML/{table}[/{columns...}]` - row query
//! - `POST <base>/DML/{table}` - batch insert
//! - `GET <base>/sch`, `GET <base>/cnf` - optional configured documents
//!
//! `<base>` is the configured mount prefix (default `/v1`); the segment it
//! occupies is reserved for the outer deployment, and dispatch keys off
//! the first segment after it.

pub mod boundary;
pub mod config;
pub mod error;
pub mod execute;
pub mod guard;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{Capabilities, GatewayConfig};
pub use error::GatewayError;
pub use routes::router;
pub use server::GatewayServer;
pub use state::AppState;
