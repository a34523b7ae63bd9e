// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Gridgate server binary.
//!
//! Parses flags (with environment fallbacks), initializes tracing, opens
//! the SQLite store and serves until ctrl-c.

use std::{path::PathBuf, process::ExitCode, sync::Arc};

use clap::Parser;
use gridgate_auth::Protocol;
use gridgate_server::{AppState, Capabilities, GatewayConfig, GatewayServer};
use gridgate_store::SqliteStore;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gridgate", about = "Authenticated HTTP gateway over a tabular store")]
struct Args {
	/// Address to bind.
	#[arg(long, env = "GRIDGATE_BIND", default_value = "127.0.0.1:8090")]
	bind: String,

	/// SQLite database path.
	#[arg(long, env = "GRIDGATE_DB", default_value = "gridgate.db")]
	db: PathBuf,

	/// Path prefix the API is mounted under; empty mounts at the root.
	#[arg(long, env = "GRIDGATE_BASE_PATH", default_value = "/v1")]
	base_path: String,

	/// Protocol the listener terminates (http or https).
	#[arg(long, env = "GRIDGATE_LISTENER_PROTOCOL", default_value = "https")]
	listener_protocol: Protocol,

	/// Basic credential user.
	#[arg(long, env = "GRIDGATE_BASIC_USER", default_value = "")]
	basic_user: String,

	/// Basic credential password.
	#[arg(long, env = "GRIDGATE_BASIC_PASS", default_value = "", hide_env_values = true)]
	basic_pass: String,

	/// Name of the pre-shared key header.
	#[arg(long, env = "GRIDGATE_PRESHARED_HEADER", default_value = "x-gridgate-key")]
	preshared_header: String,

	/// Expected pre-shared key value.
	#[arg(long, env = "GRIDGATE_PRESHARED_VALUE", default_value = "", hide_env_values = true)]
	preshared_value: String,

	/// Disable the Basic credential gate.
	#[arg(long, env = "GRIDGATE_NO_BASIC_AUTH")]
	no_basic_auth: bool,

	/// Disable the pre-shared key gate.
	#[arg(long, env = "GRIDGATE_NO_PRESHARED_KEY")]
	no_preshared_key: bool,

	/// Disable table creation.
	#[arg(long, env = "GRIDGATE_NO_DDL_CREATE")]
	no_ddl_create: bool,

	/// JSON document served at GET /sch.
	#[arg(long, env = "GRIDGATE_SCHEMA_DOC")]
	schema_doc: Option<PathBuf>,

	/// JSON document served at GET /cnf.
	#[arg(long, env = "GRIDGATE_CONFIG_DOC")]
	config_doc: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	match run(args).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			tracing::error!("{}", e);
			ExitCode::FAILURE
		}
	}
}

async fn run(args: Args) -> Result<(), String> {
	let schema_doc = args.schema_doc.as_ref().map(|p| load_doc(p)).transpose()?;
	let config_doc = args.config_doc.as_ref().map(|p| load_doc(p)).transpose()?;

	let store = SqliteStore::open(&args.db).map_err(|e| e.to_string())?;

	let config = GatewayConfig {
		bind_addr: args.bind,
		base_path: args.base_path,
		listener_protocol: args.listener_protocol,
		basic_user: args.basic_user,
		basic_pass: args.basic_pass,
		preshared_header: args.preshared_header,
		preshared_value: args.preshared_value,
		capabilities: Capabilities {
			basic_auth: !args.no_basic_auth,
			preshared_key: !args.no_preshared_key,
			ddl_create: !args.no_ddl_create,
		},
		schema_doc,
		config_doc,
	};

	let state = AppState::new(config, Arc::new(store));

	GatewayServer::new(state)
		.serve(async {
			let _ = tokio::signal::ctrl_c().await;
		})
		.await
		.map_err(|e| format!("server error: {e}"))
}

fn load_doc(path: &PathBuf) -> Result<Value, String> {
	let raw = std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
	serde_json::from_str(&raw).map_err(|e| format!("invalid JSON in {}: {e}", path.display()))
}
