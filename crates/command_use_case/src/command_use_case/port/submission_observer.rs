use std::sync::Arc;

use write_model::{
    value_object::{DateTime, InterestId},
    SchemaVariant,
};

/// Lifecycle points of a single submission. Carries no personal fields.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmissionEvent {
    Received {
        schema_variant: SchemaVariant,
    },
    ValidationFailed {
        reason: &'static str,
        field: &'static str,
    },
    Persisted {
        id: InterestId,
        created_at: DateTime,
    },
    PersistenceFailed {
        message: String,
    },
}

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
pub trait SubmissionObserver {
    fn notify(&self, event: SubmissionEvent);
}

pub trait HasSubmissionObserver {
    fn submission_observer(&self) -> Arc<dyn SubmissionObserver + Send + Sync>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSubmissionObserver;

impl SubmissionObserver for TracingSubmissionObserver {
    fn notify(&self, event: SubmissionEvent) {
        match event {
            SubmissionEvent::Received { schema_variant } => {
                tracing::info!(%schema_variant, "interest submission received");
            }
            SubmissionEvent::ValidationFailed { reason, field } => {
                tracing::warn!(reason, field, "interest submission rejected");
            }
            SubmissionEvent::Persisted { id, created_at } => {
                tracing::info!(%id, %created_at, "interest persisted");
            }
            SubmissionEvent::PersistenceFailed { message } => {
                tracing::error!(%message, "interest persistence failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_observer_accepts_every_event() {
        let observer = TracingSubmissionObserver;
        observer.notify(SubmissionEvent::Received {
            schema_variant: SchemaVariant::Minimal,
        });
        observer.notify(SubmissionEvent::ValidationFailed {
            reason: "invalid_email",
            field: "email",
        });
        observer.notify(SubmissionEvent::Persisted {
            id: InterestId::generate(),
            created_at: DateTime::now(),
        });
        observer.notify(SubmissionEvent::PersistenceFailed {
            message: "unreachable".to_owned(),
        });
    }
}
