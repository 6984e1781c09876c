#[derive(Debug, thiserror::Error)]
#[error("invalid need")]
pub struct Error;

/// A member of the closed needs taxonomy, or an `other:<text>` escape.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Need {
    WifiFast,
    Workspace,
    Community,
    Quiet,
    Gym,
    Kitchen,
    Laundry,
    Pets,
    /// Text after the escape prefix, kept verbatim.
    Other(String),
}

impl Need {
    pub const ESCAPE_PREFIX: &'static str = "other:";
    pub const MAX_ESCAPE_CHARS: usize = 100;

    const KNOWN: [Self; 8] = [
        Self::WifiFast,
        Self::Workspace,
        Self::Community,
        Self::Quiet,
        Self::Gym,
        Self::Kitchen,
        Self::Laundry,
        Self::Pets,
    ];

    fn known_str(&self) -> Option<&'static str> {
        Some(match self {
            Self::WifiFast => "wifi_fast",
            Self::Workspace => "workspace",
            Self::Community => "community",
            Self::Quiet => "quiet",
            Self::Gym => "gym",
            Self::Kitchen => "kitchen",
            Self::Laundry => "laundry",
            Self::Pets => "pets",
            Self::Other(_) => return None,
        })
    }
}

impl std::str::FromStr for Need {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(text) = s.strip_prefix(Self::ESCAPE_PREFIX) {
            if text.trim().is_empty() || text.chars().count() > Self::MAX_ESCAPE_CHARS {
                return Err(Error);
            }
            return Ok(Self::Other(text.to_owned()));
        }
        Self::KNOWN
            .into_iter()
            .find(|it| it.known_str() == Some(s))
            .ok_or(Error)
    }
}

impl std::fmt::Display for Need {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Other(text) => write!(f, "{}{}", Self::ESCAPE_PREFIX, text),
            known => known.known_str().unwrap_or_default().fmt(f),
        }
    }
}
