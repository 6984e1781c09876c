#[derive(Debug, thiserror::Error)]
#[error("invalid nostr public key")]
pub struct Error;

/// Bech32-looking `npub1...` key. Only the shape is checked, not the checksum.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NostrPublicKey(String);

impl NostrPublicKey {
    const PREFIX: &'static str = "npub1";
    const MIN_LEN: usize = 59;
    const MAX_LEN: usize = 64;

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::str::FromStr for NostrPublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.is_ascii() || !(Self::MIN_LEN..=Self::MAX_LEN).contains(&trimmed.len()) {
            return Err(Error);
        }
        let (prefix, data) = trimmed.split_at(Self::PREFIX.len());
        if !prefix.eq_ignore_ascii_case(Self::PREFIX)
            || !data.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(Error);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl std::fmt::Display for NostrPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
