//! Append-only translation history
//!
//! Records are never updated or deleted. The store assigns ids and
//! timestamps; ids start at 1 and increase by one per append, so they also
//! give the recency order.

use crate::error::TranslateResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// History size used when the caller does not ask for one
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// A translation about to be stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTranslation {
    pub banjara_text: String,
    pub telugu_text: String,
    pub english_text: String,
}

/// A stored translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub id: u64,
    pub banjara_text: String,
    pub telugu_text: String,
    pub english_text: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Storage backend for translation history
#[async_trait]
pub trait TranslationStore: Send + Sync {
    /// Store a translation, assigning its id and creation time
    async fn append(&self, translation: NewTranslation) -> TranslateResult<TranslationRecord>;

    /// Up to `limit` records, most recent first
    async fn list_recent(&self, limit: usize) -> TranslateResult<Vec<TranslationRecord>>;
}

/// In-process store; history is lost on restart
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<TranslationRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl TranslationStore for MemoryStore {
    async fn append(&self, translation: NewTranslation) -> TranslateResult<TranslationRecord> {
        let mut records = self.records.write().await;
        // Assigned under the write lock so concurrent appends never share an id
        let record = TranslationRecord {
            id: records.len() as u64 + 1,
            banjara_text: translation.banjara_text,
            telugu_text: translation.telugu_text,
            english_text: translation.english_text,
            created_at: Utc::now(),
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn list_recent(&self, limit: usize) -> TranslateResult<Vec<TranslationRecord>> {
        let records = self.records.read().await;
        Ok(records.iter().rev().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_translation(text: &str) -> NewTranslation {
        NewTranslation {
            banjara_text: text.to_string(),
            telugu_text: format!("te:{}", text),
            english_text: format!("en:{}", text),
        }
    }

    #[tokio::test]
    async fn test_append_assigns_ids_and_timestamps() {
        let store = MemoryStore::new();
        let before = Utc::now();
        let first = store.append(new_translation("pani")).await.unwrap();
        let second = store.append(new_translation("roti")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.created_at >= before);
        assert!(second.created_at >= first.created_at);
        assert_eq!(second.english_text, "en:roti");
    }

    #[tokio::test]
    async fn test_latest_append_is_listed_first() {
        let store = MemoryStore::new();
        store.append(new_translation("pani")).await.unwrap();
        let latest = store.append(new_translation("khaldo")).await.unwrap();

        let recent = store.list_recent(1).await.unwrap();
        assert_eq!(recent, vec![latest]);
    }

    #[tokio::test]
    async fn test_list_recent_order_and_limit() {
        let store = MemoryStore::new();
        for text in ["a", "b", "c", "d"] {
            store.append(new_translation(text)).await.unwrap();
        }

        let recent = store.list_recent(3).await.unwrap();
        let texts: Vec<&str> = recent.iter().map(|r| r.banjara_text.as_str()).collect();
        assert_eq!(texts, vec!["d", "c", "b"]);

        assert_eq!(store.list_recent(100).await.unwrap().len(), 4);
        assert!(store.list_recent(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty().await);
        assert!(store.list_recent(DEFAULT_HISTORY_LIMIT).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_appends_get_unique_ids() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for i in 0..20 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.append(new_translation(&i.to_string())).await.unwrap().id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
        assert_eq!(store.len().await, 20);
    }

    #[test]
    fn test_record_serializes_like_the_client_expects() {
        let record = TranslationRecord {
            id: 7,
            banjara_text: "pani".to_string(),
            telugu_text: "నీళ్ళు".to_string(),
            english_text: "water".to_string(),
            created_at: DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["banjaraText"], "pani");
        assert_eq!(json["englishText"], "water");
        assert_eq!(json["timestamp"], "2024-05-01T10:00:00Z");
    }
}
