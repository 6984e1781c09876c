#[derive(Debug, thiserror::Error)]
#[error("invalid duration")]
pub struct Error;

/// Intended length of stay
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Duration {
    OneMonth,
    TwoToThreeMonths,
    ThreeToSixMonths,
    SixToTwelveMonths,
    OneYearPlus,
    Flexible,
}

impl Duration {
    pub const ALL: [Self; 6] = [
        Self::OneMonth,
        Self::TwoToThreeMonths,
        Self::ThreeToSixMonths,
        Self::SixToTwelveMonths,
        Self::OneYearPlus,
        Self::Flexible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMonth => "1-month",
            Self::TwoToThreeMonths => "2-3-months",
            Self::ThreeToSixMonths => "3-6-months",
            Self::SixToTwelveMonths => "6-12-months",
            Self::OneYearPlus => "1-year-plus",
            Self::Flexible => "flexible",
        }
    }
}

impl std::str::FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|it| it.as_str() == s)
            .ok_or(Error)
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}
