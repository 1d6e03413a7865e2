// In-process component-value store
use crate::application::value_store::{ComponentValue, ComponentValueStore, StoredValue};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryValueStore {
    values: RwLock<HashMap<String, StoredValue>>,
}

impl MemoryValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ComponentValueStore for MemoryValueStore {
    async fn put(&self, key: &str, value: ComponentValue) -> anyhow::Result<()> {
        let stored = StoredValue {
            value,
            received_at: Utc::now(),
        };
        self.values.write().await.insert(key.to_string(), stored);
        Ok(())
    }

    async fn get(&self, key: &str) -> anyhow::Result<Option<StoredValue>> {
        Ok(self.values.read().await.get(key).cloned())
    }
}
