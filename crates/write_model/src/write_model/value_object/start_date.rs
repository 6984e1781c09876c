#[derive(Debug, thiserror::Error)]
#[error("invalid start date")]
pub struct Error;

/// Calendar date (`YYYY-MM-DD`)
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StartDate(chrono::NaiveDate);

impl std::str::FromStr for StartDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 10 {
            return Err(Error);
        }
        chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| Error)
    }
}

impl std::fmt::Display for StartDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.format("%Y-%m-%d").to_string().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn test_string_conversion() -> anyhow::Result<()> {
        assert_eq!(StartDate::from_str("2025-03-01")?.to_string(), "2025-03-01");
        assert_eq!(StartDate::from_str(" 2024-02-29 ")?.to_string(), "2024-02-29");
        assert!(StartDate::from_str("2025-02-29").is_err());
        assert!(StartDate::from_str("2025-3-1").is_err());
        assert!(StartDate::from_str("01/03/2025").is_err());
        assert!(StartDate::from_str("soon").is_err());
        Ok(())
    }
}
