#[derive(Debug, thiserror::Error)]
#[error("invalid persona")]
pub struct Error;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Persona {
    Nomade,
}

impl Persona {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nomade => "nomade",
        }
    }
}

impl std::str::FromStr for Persona {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nomade" => Ok(Self::Nomade),
            _ => Err(Error),
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}
