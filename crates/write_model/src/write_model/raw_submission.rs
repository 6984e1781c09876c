/// Untrusted submission payload as received from the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct RawSubmission(serde_json::Value);

impl RawSubmission {
    /// Looks up a top-level key. `null` counts as absent; non-object payloads have no fields.
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }
}

impl From<serde_json::Value> for RawSubmission {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}
