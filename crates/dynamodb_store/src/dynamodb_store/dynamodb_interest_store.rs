use command_use_case::port::{interest_repository::Error, CreatedInterest, InterestRepository};
use write_model::{
    aggregate::{Interest, InterestRecord},
    value_object::SourceMetadata,
};

use crate::converter;

#[derive(Debug, thiserror::Error)]
enum ConfigError {
    #[error("table name is not configured")]
    MissingTable,
}

/// Key-value repository. One item per interest, partition key `id`.
pub struct DynamoDbInterestStore {
    client: aws_sdk_dynamodb::Client,
    table: Option<String>,
}

impl DynamoDbInterestStore {
    /// `table` is checked on every `create`, so a bad value fails the write, not start-up.
    pub fn new(sdk_config: &aws_config::SdkConfig, table: Option<String>) -> Self {
        Self {
            client: aws_sdk_dynamodb::Client::new(sdk_config),
            table,
        }
    }

    async fn create_impl(
        &self,
        interest: Interest,
        metadata: SourceMetadata,
    ) -> Result<CreatedInterest, Box<dyn std::error::Error + Send + Sync>> {
        let table = self
            .table
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingTable)?;
        let record = InterestRecord::new(interest, metadata);
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(converter::item_from_record(&record)))
            .condition_expression("attribute_not_exists(id)")
            .send()
            .await?;
        tracing::debug!(table, id = %record.id(), "interest item put");
        Ok(CreatedInterest {
            id: record.id(),
            created_at: record.created_at(),
        })
    }
}

#[async_trait::async_trait]
impl InterestRepository for DynamoDbInterestStore {
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
