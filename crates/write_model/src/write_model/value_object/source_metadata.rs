/// Transport details captured alongside a submission. Never validated.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SourceMetadata {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}
