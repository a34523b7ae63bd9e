// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! End-to-end tests for path dispatch, statement execution and response
//! translation.

mod common;

use axum::body::Body;
use axum::http::{Method, StatusCode};
use common::*;
use serde_json::json;

#[tokio::test]
async fn create_tables_returns_no_content() {
	let store = RecordingStore::new();
	let app = app_with(test_config(), store.clone());

	let body = json!([{"name": "users", "columns": ["id INTEGER", "name TEXT"]}]);
	let response = send(&app, json_request(Method::POST, "/v1/DDL/table", &body)).await;

	assert_eq!(response.status(), StatusCode::NO_CONTENT);
	assert_eq!(store.calls(), vec!["CREATE TABLE IF NOT EXISTS \"users\"(id INTEGER, name TEXT)".to_string()]);
}

#[tokio::test]
async fn create_insert_select_round_trip() {
	let app = sqlite_app();

	let specs = json!([{"name": "users", "columns": ["id INTEGER", "name TEXT"]}]);
	let response = send(&app, json_request(Method::POST, "/v1/DDL/table", &specs)).await;
	assert_eq!(response.status(), StatusCode::NO_CONTENT);

	let rows = json!({
		"columns": ["id", "name"],
		"rows": [{"id": 1, "name": "alice"}, {"id": 2, "name": "bob"}],
	});
	let response = send(&app, json_request(Method::POST, "/v1/DML/users", &rows)).await;
	assert_eq!(response.status(), StatusCode::NO_CONTENT);

	let response = send(&app, authed(Method::GET, "/v1/DML/users").body(Body::empty()).unwrap()).await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(
		body_json(response).await,
		json!([{"id": 1, "name": "alice"}, {"id": 2, "name": "bob"}])
	);

	let response = send(&app, authed(Method::GET, "/v1/DML/users/name").body(Body::empty()).unwrap()).await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_json(response).await, json!([{"name": "alice"}, {"name": "bob"}]));
}

#[tokio::test]
async fn select_from_empty_table_returns_empty_array() {
	let app = sqlite_app();

	let specs = json!([{"name": "empty_table", "columns": ["id INTEGER"]}]);
	send(&app, json_request(Method::POST, "/v1/DDL/table", &specs)).await;

	let response = send(&app, authed(Method::GET, "/v1/DML/empty_table").body(Body::empty()).unwrap()).await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn ddl_batch_short_circuits_on_first_failure() {
	let store = RecordingStore::failing_on(2);
	let app = app_with(test_config(), store.clone());

	let body = json!([
		{"name": "one", "columns": ["id INTEGER"]},
		{"name": "two", "columns": ["id INTEGER"]},
		{"name": "three", "columns": ["id INTEGER"]},
	]);
	let response = send(&app, json_request(Method::POST, "/v1/DDL/table", &body)).await;

	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	assert!(body_text(response).await.starts_with("Internal Error:\t"));
	assert_eq!(store.call_count(), 2);
}

#[tokio::test]
async fn ddl_view_and_index_are_not_found() {
	let app = sqlite_app();

	for path in ["/v1/DDL/view", "/v1/DDL/index"] {
		let response = send(&app, json_request(Method::POST, path, &json!([]))).await;
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
		assert_eq!(body_text(response).await, "");
	}
}

#[tokio::test]
async fn disabled_ddl_capability_is_not_found() {
	let mut config = test_config();
	config.capabilities.ddl_create = false;
	let store = RecordingStore::new();
	let app = app_with(config, store.clone());

	let body = json!([{"name": "users", "columns": ["id INTEGER"]}]);
	let response = send(&app, json_request(Method::POST, "/v1/DDL/table", &body)).await;

	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn unmatched_route_is_empty_not_found() {
	let app = sqlite_app();

	let response = send(&app, authed(Method::GET, "/x/UNKNOWN").body(Body::empty()).unwrap()).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert_eq!(body_text(response).await, "");
}

#[tokio::test]
async fn unmatched_method_is_empty_not_found() {
	let app = sqlite_app();

	let response = send(&app, authed(Method::DELETE, "/v1/DML/users").body(Body::empty()).unwrap()).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert_eq!(body_text(response).await, "");

	let response = send(&app, authed(Method::GET, "/v1/DDL/table").body(Body::empty()).unwrap()).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_base_segment_is_not_found() {
	let app = sqlite_app();

	let response = send(&app, authed(Method::GET, "/v2/DML/users").body(Body::empty()).unwrap()).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_base_path_mounts_at_root() {
	let mut config = test_config();
	config.base_path = String::new();
	let app = app_with(config, RecordingStore::new());

	let response = send(&app, authed(Method::GET, "/DML/users").body(Body::empty()).unwrap()).await;
	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn invalid_identifier_is_bad_request() {
	let store = RecordingStore::new();
	let app = app_with(test_config(), store.clone());

	let response = send(&app, authed(Method::GET, "/v1/DML/users/na;me").body(Body::empty()).unwrap()).await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn insert_missing_column_value_binds_null() {
	let app = sqlite_app();

	let specs = json!([{"name": "users", "columns": ["id INTEGER", "name TEXT"]}]);
	send(&app, json_request(Method::POST, "/v1/DDL/table", &specs)).await;

	let rows = json!({"columns": ["id", "name"], "rows": [{"id": 7}]});
	let response = send(&app, json_request(Method::POST, "/v1/DML/users", &rows)).await;
	assert_eq!(response.status(), StatusCode::NO_CONTENT);

	let response = send(&app, authed(Method::GET, "/v1/DML/users").body(Body::empty()).unwrap()).await;
	assert_eq!(body_json(response).await, json!([{"id": 7, "name": null}]));
}

#[tokio::test]
async fn insert_into_missing_table_is_internal_error() {
	let app = sqlite_app();

	let rows = json!({"columns": ["id"], "rows": [{"id": 1}]});
	let response = send(&app, json_request(Method::POST, "/v1/DML/missing", &rows)).await;

	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	assert!(body_text(response).await.starts_with("Internal Error:\t"));
}

#[tokio::test]
async fn schema_document_is_served_when_configured() {
	let doc = json!({"tables": ["users"]});
	let mut config = test_config();
	config.schema_doc = Some(doc.clone());
	let app = app_with(config, RecordingStore::new());

	let response = send(&app, authed(Method::GET, "/v1/sch").body(Body::empty()).unwrap()).await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_json(response).await, doc);
}

#[tokio::test]
async fn schema_document_is_not_found_when_absent() {
	let app = sqlite_app();

	let response = send(&app, authed(Method::GET, "/v1/sch").body(Body::empty()).unwrap()).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	let response = send(&app, authed(Method::GET, "/v1/cnf").body(Body::empty()).unwrap()).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn panicking_store_is_translated_to_internal_error() {
	let app = app_with(test_config(), std::sync::Arc::new(PanickingStore));

	let response = send(&app, authed(Method::GET, "/v1/DML/users").body(Body::empty()).unwrap()).await;
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	assert!(body_text(response).await.starts_with("Internal Error:\t"));
}
