//! Chats opted into the daily broadcast. In-memory only; the set is empty after a restart.

use std::collections::HashSet;

use tokio::sync::RwLock;
use tracing::info;

#[derive(Debug, Default)]
pub struct SubscriberSet {
    chats: RwLock<HashSet<i64>>,
}

impl SubscriberSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the chat was not subscribed before.
    pub async fn subscribe(&self, chat_id: i64) -> bool {
        let added = self.chats.write().await.insert(chat_id);
        if added {
            info!(chat_id = chat_id, "Chat subscribed to daily verse");
        }
        added
    }

    /// Returns `true` if the chat was subscribed.
    pub async fn unsubscribe(&self, chat_id: i64) -> bool {
        let removed = self.chats.write().await.remove(&chat_id);
        if removed {
            info!(chat_id = chat_id, "Chat unsubscribed from daily verse");
        }
        removed
    }

    pub async fn contains(&self, chat_id: i64) -> bool {
        self.chats.read().await.contains(&chat_id)
    }

    /// Current subscribers, sorted.
    pub async fn snapshot(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.chats.read().await.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub async fn len(&self) -> usize {
        self.chats.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.chats.read().await.is_empty()
    }
}
