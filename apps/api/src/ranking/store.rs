//! Persistence of each user's chosen `MatchWeights`.
//!
//! Carried in `AppState` as `Arc<dyn WeightStore>`. Redis backs it when
//! `REDIS_URL` is configured; otherwise the process-local map is used.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::ranking::weights::MatchWeights;

const KEY_PREFIX: &str = "match_weights";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredWeights {
    pub weights: MatchWeights,
    pub updated_at: DateTime<Utc>,
}

impl StoredWeights {
    pub fn now(weights: MatchWeights) -> Self {
        Self {
            weights,
            updated_at: Utc::now(),
        }
    }
}

#[async_trait]
pub trait WeightStore: Send + Sync {
    async fn load(&self, user_id: Uuid) -> Result<Option<StoredWeights>, AppError>;

    async fn save(&self, user_id: Uuid, weights: MatchWeights) -> Result<StoredWeights, AppError>;

    /// Stored weights, or the centroid split for users who never chose any.
    async fn load_or_default(&self, user_id: Uuid) -> Result<MatchWeights, AppError> {
        Ok(self
            .load(user_id)
            .await?
            .map(|stored| stored.weights)
            .unwrap_or_default())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Redis
// ────────────────────────────────────────────────────────────────────────────

pub struct RedisWeightStore {
    client: redis::Client,
}

impl RedisWeightStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }

    fn key(user_id: Uuid) -> String {
        format!("{KEY_PREFIX}:{user_id}")
    }
}

#[async_trait]
impl WeightStore for RedisWeightStore {
    async fn load(&self, user_id: Uuid) -> Result<Option<StoredWeights>, AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(Self::key(user_id)).await?;

        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, user_id: Uuid, weights: MatchWeights) -> Result<StoredWeights, AppError> {
        let stored = StoredWeights::now(weights);
        let json = serde_json::to_string(&stored)?;

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(Self::key(user_id), json).await?;

        debug!(%user_id, "weights saved to redis");
        Ok(stored)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-process
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryWeightStore {
    entries: RwLock<HashMap<Uuid, StoredWeights>>,
}

impl MemoryWeightStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WeightStore for MemoryWeightStore {
    async fn load(&self, user_id: Uuid) -> Result<Option<StoredWeights>, AppError> {
        Ok(self.entries.read().await.get(&user_id).cloned())
    }

    async fn save(&self, user_id: Uuid, weights: MatchWeights) -> Result<StoredWeights, AppError> {
        let stored = StoredWeights::now(weights);
        self.entries.write().await.insert(user_id, stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redis_key_format() {
        let id = Uuid::nil();
        assert_eq!(
            RedisWeightStore::key(id),
            "match_weights:00000000-0000-0000-0000-000000000000"
        );
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryWeightStore::new();
        let user = Uuid::new_v4();

        assert!(store.load(user).await.unwrap().is_none());
        assert_eq!(
            store.load_or_default(user).await.unwrap(),
            MatchWeights::default()
        );

        let weights = MatchWeights::new(60.0, 20.0, 20.0);
        let saved = store.save(user, weights).await.unwrap();
        let loaded = store.load(user).await.unwrap().unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(store.load_or_default(user).await.unwrap(), weights);
    }

    #[test]
    fn test_stored_weights_json_shape() {
        let stored = StoredWeights::now(MatchWeights::new(50.0, 25.0, 25.0));
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["weights"]["skills"], 50.0);
        assert!(value["updated_at"].is_string());
    }
}
