// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! The ordered authentication gate in front of the router.
//!
//! Order is significant and fixed: transport first (credential material
//! must never be read over plaintext), then the Basic credential gate,
//! then the pre-shared key. The guard wraps the whole router, fallback
//! included, so unmatched routes are authenticated before they 404.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use gridgate_auth::{AuthError, credential, preshared, transport};

use crate::{error::GatewayError, state::AppState};

pub async fn authenticate(
	State(state): State<AppState>,
	request: Request,
	next: Next,
) -> Result<Response, GatewayError> {
	let config = state.config();
	let headers = request.headers();

	let forwarded = headers.get("x-forwarded-proto").and_then(|v| v.to_str().ok());
	transport::require_secure(config.listener_protocol, forwarded)?;

	if config.capabilities.basic_auth {
		let header = headers
			.get(header::AUTHORIZATION)
			.ok_or(AuthError::MissingHeader)?
			.to_str()
			.map_err(|_| AuthError::MalformedHeader)?;

		let parsed = credential::parse_basic(header)?;
		credential::verify(&parsed, &config.basic_user, &config.basic_pass)?;
	}

	if config.capabilities.preshared_key {
		let presented = headers.get(config.preshared_header.as_str()).and_then(|v| v.to_str().ok());
		preshared::verify(presented, &config.preshared_value)?;
	}

	Ok(next.run(request).await)
}
