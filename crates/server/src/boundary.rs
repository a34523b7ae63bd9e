// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Top-level fault boundary.

use std::panic::AssertUnwindSafe;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use futures_util::FutureExt;

use crate::error;

/// Convert any panic below into the generic internal-error response.
///
/// This adapter is the single safety net between the dispatcher and the
/// transport layer; it must never fail itself, so it only builds a
/// preformatted plain-text 500.
pub async fn catch_faults(request: Request, next: Next) -> Response {
	match AssertUnwindSafe(next.run(request)).catch_unwind().await {
		Ok(response) => response,
		Err(panic) => {
			let message = panic_message(panic.as_ref());
			tracing::error!("request handler panicked: {}", message);
			error::internal_error(&message, "panic caught at request boundary")
		}
	}
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
	if let Some(s) = panic.downcast_ref::<&str>() {
		(*s).to_string()
	} else if let Some(s) = panic.downcast_ref::<String>() {
		s.clone()
	} else {
		"unknown panic".to_string()
	}
}
