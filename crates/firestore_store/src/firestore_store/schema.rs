/// Stored shape of an interest document. Absent optional fields are not written.
#[derive(Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InterestDocumentData {
    pub(crate) id: String,
    pub(crate) created_at: String,
    pub(crate) source: String,
    pub(crate) version: String,
    pub(crate) persona: String,
    pub(crate) email: String,
    pub(crate) consent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) countries: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) needs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) accommodation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) nostr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) property_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) property_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) property_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) ip_address: Option<String>,
}
