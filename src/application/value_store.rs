// Component-value return channel
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Whatever the rendering surface reports back. Stored and returned verbatim,
/// never interpreted here.
pub type ComponentValue = serde_json::Value;

#[derive(Debug, Clone)]
pub struct StoredValue {
    pub value: ComponentValue,
    pub received_at: DateTime<Utc>,
}

/// Keyed storage for reported component values. One latest value per card
/// key; readers see nothing until the surface has produced something.
#[async_trait]
pub trait ComponentValueStore: Send + Sync {
    async fn put(&self, key: &str, value: ComponentValue) -> anyhow::Result<()>;

    async fn get(&self, key: &str) -> anyhow::Result<Option<StoredValue>>;
}
