// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use std::sync::Arc;

use gridgate_store::DataStore;

use crate::config::GatewayConfig;

/// Shared application state available to middleware and handlers.
///
/// Nothing in here is mutable; requests only ever read it.
#[derive(Clone)]
pub struct AppState {
	config: Arc<GatewayConfig>,
	store: Arc<dyn DataStore>,
}

impl AppState {
	pub fn new(config: GatewayConfig, store: Arc<dyn DataStore>) -> Self {
		Self {
			config: Arc::new(config),
			store,
		}
	}

	pub fn config(&self) -> &GatewayConfig {
		&self.config
	}

	pub fn store(&self) -> Arc<dyn DataStore> {
		self.store.clone()
	}
}
