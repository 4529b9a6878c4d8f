use crate::dataset::DatasetProvider;
use axum::extract::FromRef;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedProvider = Arc<DatasetProvider>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub provider: GuardedProvider,
}

impl ServerState {
    pub fn new(config: ServerConfig, provider: GuardedProvider) -> Self {
        ServerState {
            config,
            start_time: Instant::now(),
            provider,
        }
    }
}

impl FromRef<ServerState> for GuardedProvider {
    fn from_ref(input: &ServerState) -> Self {
        input.provider.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
