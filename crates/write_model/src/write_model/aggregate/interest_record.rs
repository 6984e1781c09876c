use serde_json::Value;

use crate::{
    aggregate::Interest,
    value_object::{DateTime, InterestId, SourceMetadata},
};

/// What a repository stores: the normalized interest plus the identity and
/// timestamp assigned at persistence time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InterestRecord {
    created_at: DateTime,
    id: InterestId,
    interest: Interest,
    metadata: SourceMetadata,
}

impl InterestRecord {
    pub const SOURCE: &'static str = "web_form";

    /// Assigns a fresh random id and the current time.
    pub fn new(interest: Interest, metadata: SourceMetadata) -> Self {
        Self {
            created_at: DateTime::now(),
            id: InterestId::generate(),
            interest,
            metadata,
        }
    }

    pub fn created_at(&self) -> DateTime {
        self.created_at
    }

    pub fn id(&self) -> InterestId {
        self.id
    }

    pub fn interest(&self) -> &Interest {
        &self.interest
    }

    pub fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    /// The stored document: the normalized interest plus
    /// `id`, `createdAt`, `source`, `version` and whatever metadata is known.
    pub fn to_json_value(&self) -> Value {
        let mut map = self.interest.to_json_map();
        map.insert("id".to_owned(), Value::String(self.id.to_string()));
        map.insert(
            "createdAt".to_owned(),
            Value::String(self.created_at.to_string()),
        );
        map.insert("source".to_owned(), Value::String(Self::SOURCE.to_owned()));
        map.insert(
            "version".to_owned(),
            Value::String(self.interest.schema_variant().version_tag().to_owned()),
        );
        if let Some(user_agent) = &self.metadata.user_agent {
            map.insert("userAgent".to_owned(), Value::String(user_agent.clone()));
        }
        if let Some(ip_address) = &self.metadata.ip_address {
            map.insert("ipAddress".to_owned(), Value::String(ip_address.clone()));
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use crate::{validate, RawSubmission, SchemaVariant};

    use super::*;

    fn build_interest() -> anyhow::Result<Interest> {
        Ok(validate(
            &RawSubmission::from(serde_json::json!({
                "persona": "nomade",
                "email": "a@b.com",
                "consent": true,
            })),
            SchemaVariant::Minimal,
        )?)
    }

    #[test]
    fn test_new() -> anyhow::Result<()> {
        let record1 = InterestRecord::new(build_interest()?, SourceMetadata::default());
        let record2 = InterestRecord::new(build_interest()?, SourceMetadata::default());
        assert_ne!(record1.id(), record2.id());
        assert_eq!(record1.interest(), record2.interest());
        Ok(())
    }

    #[test]
    fn test_to_json_value() -> anyhow::Result<()> {
        let record = InterestRecord::new(
            build_interest()?,
            SourceMetadata {
                ip_address: Some("203.0.113.7".to_owned()),
                user_agent: Some("curl/8.0".to_owned()),
            },
        );
        assert_eq!(
            record.to_json_value(),
            serde_json::json!({
                "id": record.id().to_string(),
                "createdAt": record.created_at().to_string(),
                "persona": "nomade",
                "email": "a@b.com",
                "consent": true,
                "source": "web_form",
                "version": "v1_minimal",
                "userAgent": "curl/8.0",
                "ipAddress": "203.0.113.7",
            })
        );
        Ok(())
    }

    #[test]
    fn test_to_json_value_without_metadata() -> anyhow::Result<()> {
        let record = InterestRecord::new(build_interest()?, SourceMetadata::default());
        let value = record.to_json_value();
        assert!(value.get("userAgent").is_none());
        assert!(value.get("ipAddress").is_none());
        Ok(())
    }
}
