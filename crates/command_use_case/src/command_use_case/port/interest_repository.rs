use std::sync::Arc;

use write_model::{
    aggregate::Interest,
    value_object::{DateTime, InterestId, SourceMetadata},
};

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] Box<dyn std::error::Error + Send + Sync>);

pub type PersistenceError = Error;

/// Identity and timestamp assigned to a stored interest.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CreatedInterest {
    pub id: InterestId,
    pub created_at: DateTime,
}

/// Persists validated interests. One `create` is one atomic insert.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait InterestRepository {
    async fn create(
        &self,
        interest: Interest,
        metadata: SourceMetadata,
    ) -> Result<CreatedInterest, Error>;
}

pub trait HasInterestRepository {
    fn interest_repository(&self) -> Arc<dyn InterestRepository + Send + Sync>;
}
