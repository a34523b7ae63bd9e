// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Gateway configuration.

use gridgate_auth::Protocol;
use serde_json::Value;

/// Static gateway configuration; read-only once the process is up.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
	/// Address the listener binds to.
	pub bind_addr: String,
	/// Path prefix the API is mounted under. The segment it occupies is
	/// reserved for the outer deployment (API versioning); dispatch keys
	/// off the first segment after it. Empty mounts at the root.
	pub base_path: String,
	/// Protocol the local listener terminates.
	pub listener_protocol: Protocol,
	/// Expected Basic credential.
	pub basic_user: String,
	pub basic_pass: String,
	/// Name of the pre-shared key header.
	pub preshared_header: String,
	/// Expected pre-shared key value.
	pub preshared_value: String,
	pub capabilities: Capabilities,
	/// Document served at `GET /sch` when present.
	pub schema_doc: Option<Value>,
	/// Document served at `GET /cnf` when present.
	pub config_doc: Option<Value>,
}

impl Default for GatewayConfig {
	fn default() -> Self {
		Self {
			bind_addr: "127.0.0.1:8090".to_string(),
			base_path: "/v1".to_string(),
			listener_protocol: Protocol::Https,
			basic_user: String::new(),
			basic_pass: String::new(),
			preshared_header: "x-gridgate-key".to_string(),
			preshared_value: String::new(),
			capabilities: Capabilities::default(),
			schema_doc: None,
			config_doc: None,
		}
	}
}

/// Independently togglable gates and sub-routers.
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
	/// Require and verify a Basic credential.
	pub basic_auth: bool,
	/// Require the pre-shared key header.
	pub preshared_key: bool,
	/// Expose `POST /DDL/table`.
	pub ddl_create: bool,
}

impl Default for Capabilities {
	fn default() -> Self {
		Self {
			basic_auth: true,
			preshared_key: true,
			ddl_create: true,
		}
	}
}
