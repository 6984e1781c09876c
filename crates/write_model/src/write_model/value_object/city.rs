#[derive(Debug, thiserror::Error)]
#[error("invalid city")]
pub struct Error;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct City(String);

impl City {
    pub const MAX_CHARS: usize = 100;

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::str::FromStr for City {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.chars().count() > Self::MAX_CHARS {
            return Err(Error);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn test_string_conversion() -> anyhow::Result<()> {
        assert_eq!(City::from_str(" Lisbon ")?.to_string(), "Lisbon");
        assert_eq!(City::from_str("São Paulo")?.to_string(), "São Paulo");
        assert!(City::from_str("").is_err());
        assert!(City::from_str(" \t ").is_err());
        assert!(City::from_str(&"x".repeat(101)).is_err());
        Ok(())
    }
}
