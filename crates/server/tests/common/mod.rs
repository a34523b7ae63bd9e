// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Shared helpers for the gateway integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use gridgate_server::{AppState, GatewayConfig, router};
use gridgate_sql::Statement;
use gridgate_store::{DataStore, Row, SqliteStore, StoreError};
use serde_json::Value;
use tower::util::ServiceExt;

pub const USER: &str = "admin";
pub const PASS: &str = "swordfish";
pub const PSK_HEADER: &str = "x-gridgate-key";
pub const PSK: &str = "hunter2";

pub fn test_config() -> GatewayConfig {
	GatewayConfig {
		basic_user: USER.to_string(),
		basic_pass: PASS.to_string(),
		preshared_value: PSK.to_string(),
		..GatewayConfig::default()
	}
}

pub fn app_with(config: GatewayConfig, store: Arc<dyn DataStore>) -> Router {
	router(AppState::new(config, store))
}

/// A gateway over a fresh in-memory SQLite database.
pub fn sqlite_app() -> Router {
	app_with(test_config(), Arc::new(SqliteStore::open_in_memory().unwrap()))
}

pub fn basic_header(user: &str, pass: &str) -> String {
	format!("Basic {}", STANDARD.encode(format!("{user}:{pass}")))
}

/// A request builder carrying every credential the default config wants.
pub fn authed(method: Method, uri: &str) -> axum::http::request::Builder {
	Request::builder()
		.method(method)
		.uri(uri)
		.header("x-forwarded-proto", "https")
		.header(header::AUTHORIZATION, basic_header(USER, PASS))
		.header(PSK_HEADER, PSK)
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
	authed(method, uri)
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(body.to_string()))
		.unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<axum::body::Body> {
	app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<axum::body::Body>) -> String {
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
	String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<axum::body::Body>) -> Value {
	serde_json::from_str(&body_text(response).await).unwrap()
}

/// Fake store that records statement texts and optionally fails the n-th
/// call (1-based), counting `run` and `all` together.
pub struct RecordingStore {
	calls: Mutex<Vec<String>>,
	fail_on: Option<usize>,
}

impl RecordingStore {
	pub fn new() -> Arc<Self> {
		Arc::new(Self {
			calls: Mutex::new(Vec::new()),
			fail_on: None,
		})
	}

	pub fn failing_on(call: usize) -> Arc<Self> {
		Arc::new(Self {
			calls: Mutex::new(Vec::new()),
			fail_on: Some(call),
		})
	}

	pub fn call_count(&self) -> usize {
		self.calls.lock().unwrap().len()
	}

	pub fn calls(&self) -> Vec<String> {
		self.calls.lock().unwrap().clone()
	}

	fn record(&self, statement: &Statement) -> Result<(), StoreError> {
		let mut calls = self.calls.lock().unwrap();
		calls.push(statement.text.clone());
		if Some(calls.len()) == self.fail_on {
			return Err(StoreError::Execute("simulated failure".to_string()));
		}
		Ok(())
	}
}

impl DataStore for RecordingStore {
	fn run(&self, statement: &Statement) -> Result<(), StoreError> {
		self.record(statement)
	}

	fn all(&self, statement: &Statement) -> Result<Vec<Row>, StoreError> {
		self.record(statement)?;
		Ok(Vec::new())
	}
}

/// Fake store whose every call panics.
pub struct PanickingStore;

impl DataStore for PanickingStore {
	fn run(&self, _statement: &Statement) -> Result<(), StoreError> {
		panic!("store exploded")
	}

	fn all(&self, _statement: &Statement) -> Result<Vec<Row>, StoreError> {
		panic!("store exploded")
	}
}
