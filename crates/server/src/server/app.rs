use std::sync::Arc;

use command_use_case::{
    create_interest::{CreateInterest, HasCreateInterest, HasSchemaVariant},
    port::{HasInterestRepository, HasSubmissionObserver, InterestRepository, SubmissionObserver},
};
use write_model::SchemaVariant;

#[derive(Clone)]
pub struct App {
    interest_repository: Arc<dyn InterestRepository + Send + Sync>,
    schema_variant: SchemaVariant,
    submission_observer: Arc<dyn SubmissionObserver + Send + Sync>,
}

impl App {
    pub fn new(
        interest_repository: Arc<dyn InterestRepository + Send + Sync>,
        schema_variant: SchemaVariant,
        submission_observer: Arc<dyn SubmissionObserver + Send + Sync>,
    ) -> Self {
        Self {
            interest_repository,
            schema_variant,
            submission_observer,
        }
    }
}

impl CreateInterest for App {}

impl HasCreateInterest for App {
    fn create_interest(&self) -> Arc<dyn CreateInterest + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl HasInterestRepository for App {
    fn interest_repository(&self) -> Arc<dyn InterestRepository + Send + Sync> {
        self.interest_repository.clone()
    }
}

impl HasSchemaVariant for App {
    fn schema_variant(&self) -> SchemaVariant {
        self.schema_variant
    }
}

impl HasSubmissionObserver for App {
    fn submission_observer(&self) -> Arc<dyn SubmissionObserver + Send + Sync> {
        self.submission_observer.clone()
    }
}
