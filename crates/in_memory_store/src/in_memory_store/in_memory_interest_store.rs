use std::{collections::BTreeMap, sync::Arc};

use command_use_case::port::{interest_repository::Error, CreatedInterest, InterestRepository};
use tokio::sync::Mutex;
use write_model::{
    aggregate::{Interest, InterestRecord},
    value_object::{InterestId, SourceMetadata},
};

#[derive(Debug, thiserror::Error)]
#[error("interest already exists (id = {0})")]
struct AlreadyExists(InterestId);

/// Offline repository. Keeps every record in process memory.
///
/// Records are never evicted, so the map grows for the life of the process.
/// Meant for local development and offline runs only.
#[derive(Clone, Default)]
pub struct InMemoryInterestStore {
    records: Arc<Mutex<BTreeMap<InterestId, InterestRecord>>>,
}

impl InMemoryInterestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stored records, ordered by id.
    pub async fn records(&self) -> Vec<InterestRecord> {
        self.records.lock().await.values().cloned().collect()
    }
}

#[async_trait::async_trait]
impl InterestRepository for InMemoryInterestStore {
    async fn create(
        &self,
        interest: Interest,
        metadata: SourceMetadata,
    ) -> Result<CreatedInterest, Error> {
        let record = InterestRecord::new(interest, metadata);
        let mut records = self.records.lock().await;
        if records.contains_key(&record.id()) {
            return Err(Error::from(
                Box::new(AlreadyExists(record.id())) as Box<dyn std::error::Error + Send + Sync>
            ));
        }
        tracing::info!(
            id = %record.id(),
            created_at = %record.created_at(),
            "offline mode: interest kept in memory"
        );
        let created = CreatedInterest {
            id: record.id(),
            created_at: record.created_at(),
        };
        records.insert(record.id(), record);
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use write_model::{validate, RawSubmission, SchemaVariant};

    use super::*;

    fn build_interest(email: &str) -> anyhow::Result<Interest> {
        Ok(validate(
            &RawSubmission::from(serde_json::json!({
                "persona": "nomade",
                "email": email,
                "consent": true,
            })),
            SchemaVariant::Minimal,
        )?)
    }

    #[tokio::test]
    async fn test_create() -> anyhow::Result<()> {
        let store = InMemoryInterestStore::new();
        assert!(store.records().await.is_empty());

        let created1 = store
            .create(build_interest("a@b.com")?, SourceMetadata::default())
            .await?;
        let created2 = store
            .create(
                build_interest("c@d.com")?,
                SourceMetadata {
                    ip_address: Some("203.0.113.7".to_owned()),
                    user_agent: Some("curl/8.0".to_owned()),
                },
            )
            .await?;
        assert_ne!(created1.id, created2.id);

        let records = store.records().await;
        assert_eq!(records.len(), 2);
        let record2 = records
            .iter()
            .find(|record| record.id() == created2.id)
            .ok_or_else(|| anyhow::anyhow!("record not found"))?;
        assert_eq!(record2.created_at(), created2.created_at);
        assert_eq!(record2.interest().email().as_str(), "c@d.com");
        assert_eq!(
            record2.metadata().ip_address.as_deref(),
            Some("203.0.113.7")
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_clones_share_records() -> anyhow::Result<()> {
        let store = InMemoryInterestStore::new();
        let cloned = store.clone();
        cloned
            .create(build_interest("a@b.com")?, SourceMetadata::default())
            .await?;
        assert_eq!(store.records().await.len(), 1);
        Ok(())
    }
}
