#[derive(Debug, thiserror::Error)]
#[error("invalid email")]
pub struct Error;

/// Trimmed, lowercased e-mail address of the `local@domain.tld` shape
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Email(String);

impl Email {
    pub const MAX_LEN: usize = 254;

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::str::FromStr for Email {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized.chars().count() > Self::MAX_LEN
            || normalized.chars().any(char::is_whitespace)
        {
            return Err(Error);
        }
        let (local, domain) = normalized.split_once('@').ok_or(Error)?;
        if local.is_empty() || domain.contains('@') {
            return Err(Error);
        }
        // at least one dot with something on both sides
        if !domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
        {
            return Err(Error);
        }
        Ok(Self(normalized))
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
