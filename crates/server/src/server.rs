// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Server lifecycle: bind, serve, graceful shutdown.

use std::{future::Future, io};

use tokio::net::TcpListener;

use crate::{routes::router, state::AppState};

/// The gateway's listening server.
///
/// Binds the configured address and serves the router until the supplied
/// shutdown future resolves; in-flight requests drain before `serve`
/// returns.
pub struct GatewayServer {
	state: AppState,
}

impl GatewayServer {
	pub fn new(state: AppState) -> Self {
		Self { state }
	}

	pub async fn serve<F>(self, shutdown: F) -> io::Result<()>
	where
		F: Future<Output = ()> + Send + 'static,
	{
		let bind_addr = self.state.config().bind_addr.clone();
		let listener = TcpListener::bind(&bind_addr).await?;
		let local_addr = listener.local_addr()?;
		tracing::info!("gateway bound to {}", local_addr);

		let app = router(self.state);
		axum::serve(listener, app)
			.with_graceful_shutdown(async move {
				shutdown.await;
				tracing::info!("gateway received shutdown signal");
			})
			.await?;

		tracing::info!("gateway stopped");
		Ok(())
	}
}
