use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::Value;
use write_model::aggregate::InterestRecord;

pub(crate) fn item_from_record(record: &InterestRecord) -> HashMap<String, AttributeValue> {
    match attribute_value_from_json(record.to_json_value()) {
        AttributeValue::M(item) => item,
        _ => HashMap::new(),
    }
}

fn attribute_value_from_json(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(values) => {
            AttributeValue::L(values.into_iter().map(attribute_value_from_json).collect())
        }
        Value::Object(map) => AttributeValue::M(
            map.into_iter()
                .map(|(key, value)| (key, attribute_value_from_json(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use write_model::{validate, value_object::SourceMetadata, RawSubmission, SchemaVariant};

    use super::*;

    #[test]
    fn test_attribute_value_from_json() {
        assert_eq!(
            attribute_value_from_json(serde_json::json!(null)),
            AttributeValue::Null(true)
        );
        assert_eq!(
            attribute_value_from_json(serde_json::json!(12)),
            AttributeValue::N("12".to_owned())
        );
        assert_eq!(
            attribute_value_from_json(serde_json::json!(["a", true])),
            AttributeValue::L(vec![
                AttributeValue::S("a".to_owned()),
                AttributeValue::Bool(true)
            ])
        );
    }

    #[test]
    fn test_item_from_record() -> anyhow::Result<()> {
        let interest = validate(
            &RawSubmission::from(serde_json::json!({
                "persona": "nomade",
                "email": "a@b.com",
                "consent": true,
                "needs": ["other:vegan"],
            })),
            SchemaVariant::Minimal,
        )?;
        let record = InterestRecord::new(interest, SourceMetadata::default());
        let item = item_from_record(&record);
        assert_eq!(item.get("id"), Some(&AttributeValue::S(record.id().to_string())));
        assert_eq!(
            item.get("createdAt"),
            Some(&AttributeValue::S(record.created_at().to_string()))
        );
        assert_eq!(item.get("consent"), Some(&AttributeValue::Bool(true)));
        assert_eq!(
            item.get("needs"),
            Some(&AttributeValue::L(vec![AttributeValue::S(
                "other:vegan".to_owned()
            )]))
        );
        assert_eq!(
            item.get("version"),
            Some(&AttributeValue::S("v1_minimal".to_owned()))
        );
        assert!(!item.contains_key("userAgent"));
        Ok(())
    }
}
