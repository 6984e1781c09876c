#[derive(Debug, thiserror::Error)]
#[error("invalid budget")]
pub struct Error;

/// Monthly budget range
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Budget {
    Under500,
    From500To1000,
    From1000To1500,
    From1500To2000,
    From2000To3000,
    Over3000,
}

impl Budget {
    pub const ALL: [Self; 6] = [
        Self::Under500,
        Self::From500To1000,
        Self::From1000To1500,
        Self::From1500To2000,
        Self::From2000To3000,
        Self::Over3000,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Under500 => "under_500",
            Self::From500To1000 => "500-1000",
            Self::From1000To1500 => "1000-1500",
            Self::From1500To2000 => "1500-2000",
            Self::From2000To3000 => "2000-3000",
            Self::Over3000 => "over_3000",
        }
    }
}

impl std::str::FromStr for Budget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|it| it.as_str() == s)
            .ok_or(Error)
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}
