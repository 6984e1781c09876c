use std::sync::Arc;

use write_model::{
    validate,
    value_object::{DateTime, InterestId, SourceMetadata},
    RawSubmission, SchemaVariant, ValidationError,
};

#[cfg(any(test, feature = "test-util"))]
use crate::port::{InterestRepository, SubmissionObserver};
use crate::port::{
    HasInterestRepository, HasSubmissionObserver, PersistenceError, SubmissionEvent,
};

#[derive(Debug)]
pub struct Input {
    pub payload: serde_json::Value,
    pub metadata: SourceMetadata,
}

#[derive(Debug)]
pub struct Output {
    pub id: InterestId,
    pub created_at: DateTime,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation")]
    Validation(#[source] ValidationError),
    #[error("persistence")]
    Persistence(#[source] PersistenceError),
}

pub trait HasSchemaVariant {
    fn schema_variant(&self) -> SchemaVariant;
}

#[async_trait::async_trait]
pub trait CreateInterest: HasInterestRepository + HasSchemaVariant + HasSubmissionObserver {
    #[tracing::instrument(level = tracing::Level::INFO, skip_all)]
    async fn execute(&self, Input { payload, metadata }: Input) -> Result<Output, Error> {
        let observer = self.submission_observer();
        let schema_variant = self.schema_variant();
        observer.notify(SubmissionEvent::Received { schema_variant });

        let interest = match validate(&RawSubmission::from(payload), schema_variant) {
            Ok(interest) => interest,
            Err(e) => {
                observer.notify(SubmissionEvent::ValidationFailed {
                    reason: e.reason(),
                    field: e.field(),
                });
                return Err(Error::Validation(e));
            }
        };

        match self.interest_repository().create(interest, metadata).await {
            Ok(created) => {
                observer.notify(SubmissionEvent::Persisted {
                    id: created.id,
                    created_at: created.created_at,
                });
                Ok(Output {
                    id: created.id,
                    created_at: created.created_at,
                })
            }
            Err(e) => {
                observer.notify(SubmissionEvent::PersistenceFailed {
                    message: e.to_string(),
                });
                Err(Error::Persistence(e))
            }
        }
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub CreateInterest {}

    impl HasInterestRepository for CreateInterest {
        fn interest_repository(&self) -> Arc<dyn InterestRepository + Send + Sync>;
    }

    impl HasSchemaVariant for CreateInterest {
        fn schema_variant(&self) -> SchemaVariant;
    }

    impl HasSubmissionObserver for CreateInterest {
        fn submission_observer(&self) -> Arc<dyn SubmissionObserver + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl CreateInterest for CreateInterest {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasCreateInterest {
    fn create_interest(&self) -> Arc<dyn CreateInterest + Send + Sync>;
}
