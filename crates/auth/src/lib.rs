// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Request authentication for the Gridgate gateway.
//!
//! Everything here is a pure check over values already extracted from a
//! request: no I/O, no shared state, nothing retained past the request.
//! The HTTP layer decides how each failure maps onto a response.

pub mod credential;
pub mod error;
pub mod preshared;
pub mod transport;

pub use credential::{Credential, parse_basic, verify};
pub use error::AuthError;
pub use transport::Protocol;
