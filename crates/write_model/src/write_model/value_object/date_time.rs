use chrono::SubsecRound;

#[derive(Debug, thiserror::Error)]
#[error("error {0}")]
pub struct Error(String);

/// Wall-clock UTC instant with millisecond precision
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateTime(chrono::DateTime<chrono::Utc>);

impl DateTime {
    pub fn now() -> Self {
        Self(SubsecRound::trunc_subsecs(chrono::Utc::now(), 3))
    }
}

impl std::str::FromStr for DateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        chrono::DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.to_utc())
            .map_err(|e| Error(e.to_string()))
            .and_then(|dt| {
                if dt == SubsecRound::trunc_subsecs(dt, 3) {
                    Ok(dt)
                } else {
                    Err(Error("invalid subsec".to_string()))
                }
            })
            .map(Self)
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
            .fmt(f)
    }
}
