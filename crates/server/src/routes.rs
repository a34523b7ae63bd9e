// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Router assembly.

use axum::{
	Router, middleware,
	routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{boundary, guard, handlers, state::AppState};

/// Build the gateway router.
///
/// The API is nested under the configured base path. Unmatched methods on
/// known paths fall back to the same empty 404 as unmatched paths. The
/// guard and the fault boundary wrap the whole tree, fallback included,
/// so authentication runs before any routing outcome is visible.
pub fn router(state: AppState) -> Router {
	let api = Router::new()
		.route("/DDL/table", post(handlers::create_tables).fallback(handlers::not_found))
		.route(
			"/DML/{table}",
			get(handlers::select_all).post(handlers::insert_rows).fallback(handlers::not_found),
		)
		.route("/DML/{table}/{*columns}", get(handlers::select_columns).fallback(handlers::not_found))
		.route("/sch", get(handlers::schema_doc).fallback(handlers::not_found))
		.route("/cnf", get(handlers::config_doc).fallback(handlers::not_found));

	let base_path = state.config().base_path.clone();
	let app = if base_path.is_empty() {
		api
	} else {
		Router::new().nest(&base_path, api)
	};

	app.fallback(handlers::not_found)
		.layer(middleware::from_fn_with_state(state.clone(), guard::authenticate))
		.layer(middleware::from_fn(boundary::catch_faults))
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}
