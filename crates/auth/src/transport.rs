// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Transport guard.

use std::{fmt, str::FromStr};

use crate::error::AuthError;

/// Protocol a listener terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
	Http,
	Https,
}

impl fmt::Display for Protocol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Protocol::Http => write!(f, "http"),
			Protocol::Https => write!(f, "https"),
		}
	}
}

impl FromStr for Protocol {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"http" => Ok(Protocol::Http),
			"https" => Ok(Protocol::Https),
			other => Err(format!("unknown protocol: {other}")),
		}
	}
}

/// Require an encrypted channel end to end.
///
/// Both the local listener protocol and the `x-forwarded-proto` value set
/// by the edge must say https. This runs before any credential material is
/// read, so secrets never travel a plaintext hop.
pub fn require_secure(protocol: Protocol, forwarded_proto: Option<&str>) -> Result<(), AuthError> {
	if protocol == Protocol::Https && forwarded_proto == Some("https") {
		Ok(())
	} else {
		Err(AuthError::InsecureTransport)
	}
}
