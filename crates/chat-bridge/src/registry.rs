//! Connection registry

use crate::connection::{ChatConnection, ConnectionProvider};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Registry of live connections keyed by channel key
///
/// The in-process `ConnectionProvider` implementation: the runtime
/// registers a connection when a server attaches and deregisters it on
/// disconnect.
#[derive(Default)]
pub struct ConnectionRegistry {
    connections: RwLock<HashMap<String, Arc<dyn ChatConnection>>>,
}

impl ConnectionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connection, replacing any previous one for the key
    pub async fn register(&self, channel_key: impl Into<String>, connection: Arc<dyn ChatConnection>) {
        let channel_key = channel_key.into();
        info!("Registering connection for {}", channel_key);
        self.connections.write().await.insert(channel_key, connection);
    }

    /// Remove a connection; returns whether one was registered
    pub async fn deregister(&self, channel_key: &str) -> bool {
        let removed = self.connections.write().await.remove(channel_key).is_some();
        if removed {
            info!("Deregistered connection for {}", channel_key);
        } else {
            warn!("Deregister for unknown channel: {}", channel_key);
        }
        removed
    }

    /// Number of registered connections
    pub async fn count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Channel keys with a live connection
    pub async fn channel_keys(&self) -> Vec<String> {
        self.connections.read().await.keys().cloned().collect()
    }
}

#[async_trait]
impl ConnectionProvider for ConnectionRegistry {
    async fn get_connection(&self, channel_key: &str) -> Option<Arc<dyn ChatConnection>> {
        self.connections.read().await.get(channel_key).cloned()
    }
}
