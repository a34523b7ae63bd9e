// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! HTTP error handling and response formatting.
//!
//! Every failure a request can end in converts to a response here, so the
//! status/body mapping lives in exactly one place.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use gridgate_auth::AuthError;
use gridgate_sql::SqlError;
use gridgate_store::StoreError;

/// Challenge sent with the 401 when no authorization header arrived.
const CHALLENGE: &str = "Basic realm=\"gridgate\", charset=\"UTF-8\"";

/// Everything a request can fail with, mapped onto HTTP.
#[derive(Debug)]
pub enum GatewayError {
	/// Transport or credential check failed.
	Auth(AuthError),
	/// Statement construction rejected the request input.
	Sql(SqlError),
	/// The data store failed to execute a statement.
	Store(StoreError),
	/// No route, method or enabled capability matched the request.
	NotFound,
	/// An uncaught fault reached the boundary.
	Internal(String),
}

impl From<AuthError> for GatewayError {
	fn from(e: AuthError) -> Self {
		GatewayError::Auth(e)
	}
}

impl From<SqlError> for GatewayError {
	fn from(e: SqlError) -> Self {
		GatewayError::Sql(e)
	}
}

impl From<StoreError> for GatewayError {
	fn from(e: StoreError) -> Self {
		GatewayError::Store(e)
	}
}

impl std::fmt::Display for GatewayError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GatewayError::Auth(e) => write!(f, "authentication error: {}", e),
			GatewayError::Sql(e) => write!(f, "statement construction error: {}", e),
			GatewayError::Store(e) => write!(f, "store error: {}", e),
			GatewayError::NotFound => write!(f, "not found"),
			GatewayError::Internal(msg) => write!(f, "internal error: {}", msg),
		}
	}
}

impl std::error::Error for GatewayError {}

impl IntoResponse for GatewayError {
	fn into_response(self) -> Response {
		match self {
			GatewayError::Auth(AuthError::InsecureTransport) => {
				(StatusCode::UNAUTHORIZED, "Please use a HTTPS connection.").into_response()
			}
			GatewayError::Auth(AuthError::MissingHeader) => (
				StatusCode::UNAUTHORIZED,
				[(header::WWW_AUTHENTICATE, CHALLENGE)],
				"You need to login.",
			)
				.into_response(),
			GatewayError::Auth(AuthError::MalformedHeader) => {
				(StatusCode::BAD_REQUEST, "Malformed authorization header.").into_response()
			}
			GatewayError::Auth(AuthError::InvalidEncoding) => {
				(StatusCode::BAD_REQUEST, "Invalid authorization value.").into_response()
			}
			GatewayError::Auth(AuthError::InvalidCredentials) => {
				(StatusCode::UNAUTHORIZED, "Invalid credentials.").into_response()
			}
			GatewayError::Auth(AuthError::Forbidden) => {
				(StatusCode::FORBIDDEN, "Sorry, you have supplied an invalid key.").into_response()
			}
			GatewayError::Sql(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
			GatewayError::NotFound => StatusCode::NOT_FOUND.into_response(),
			GatewayError::Store(e) => {
				tracing::error!("statement execution failed: {}", e);
				internal_error(&e.to_string(), &format!("{:?}", e))
			}
			GatewayError::Internal(msg) => {
				tracing::error!("internal error: {}", msg);
				internal_error(&msg, "uncaught fault at request boundary")
			}
		}
	}
}

/// The one 500 shape every uncaught fault collapses into.
///
/// Infallible: plain status plus preformatted text, nothing here can
/// itself fail to build.
pub fn internal_error(message: &str, detail: &str) -> Response {
	(StatusCode::INTERNAL_SERVER_ERROR, format!("Internal Error:\t{message} --- {detail}")).into_response()
}
