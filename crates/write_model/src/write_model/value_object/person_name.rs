use super::free_text;

#[derive(Debug, thiserror::Error)]
#[error("invalid person name")]
pub struct Error;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PersonName(String);

impl PersonName {
    pub const MIN_CHARS: usize = 2;
    pub const MAX_CHARS: usize = 100;
    pub const TRUNCATE_CHARS: usize = 120;

    /// Lenient form: cuts the name instead of rejecting it. Empty names are dropped.
    pub fn truncated(s: &str) -> Option<Self> {
        let truncated = free_text::truncate(s, Self::TRUNCATE_CHARS);
        (!truncated.is_empty()).then(|| Self(truncated.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::str::FromStr for PersonName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let len = trimmed.chars().count();
        if !(Self::MIN_CHARS..=Self::MAX_CHARS).contains(&len) {
            return Err(Error);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
