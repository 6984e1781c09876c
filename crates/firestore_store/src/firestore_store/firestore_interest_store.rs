use command_use_case::port::{interest_repository::Error, CreatedInterest, InterestRepository};
use firestore_client::FirestoreClient;
use write_model::{
    aggregate::{Interest, InterestRecord},
    value_object::SourceMetadata,
};

use crate::{converter, path};

/// Document-store repository. One document per interest, keyed by its id.
pub struct FirestoreInterestStore {
    client: FirestoreClient,
    collection: Option<String>,
}

impl FirestoreInterestStore {
    /// `collection` is checked on every `create`, so a bad value fails the write, not start-up.
    pub async fn new(
        collection: Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Self {
            client: FirestoreClient::new().await?,
            collection,
        })
    }

    async fn create_impl(
        &self,
        interest: Interest,
        metadata: SourceMetadata,
    ) -> Result<CreatedInterest, Box<dyn std::error::Error + Send + Sync>> {
        let collection = path::interest_collection(self.collection.as_deref())?;
        let record = InterestRecord::new(interest, metadata);
        let document_path = path::interest_document(&collection, record.id())?;
        self.client
            .create_document(
                &document_path,
                &converter::document_data_from_record(&record),
            )
            .await?;
        tracing::debug!(document = %document_path, "interest document created");
        Ok(CreatedInterest {
            id: record.id(),
            created_at: record.created_at(),
        })
    }
}

#[async_trait::async_trait]
impl InterestRepository for FirestoreInterestStore {
    async fn create(
        &self,
        interest: Interest,
        metadata: SourceMetadata,
    ) -> Result<CreatedInterest, Error> {
        self.create_impl(interest, metadata)
            .await
            .map_err(Error::from)
    }
}
