use crate::value_object::Persona;

#[derive(Debug, thiserror::Error)]
#[error("unknown schema variant (expected strict-nomad or minimal)")]
pub struct Error;

/// Which rule set the validator applies. Chosen by configuration, never by payload shape.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SchemaVariant {
    /// Multi-step nomad form: name, cities, accommodation, budget, duration and languages are required.
    StrictNomad,
    /// Short form: only persona, email and consent are required.
    Minimal,
}

impl SchemaVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StrictNomad => "strict-nomad",
            Self::Minimal => "minimal",
        }
    }

    pub fn persona(&self) -> Persona {
        match self {
            Self::StrictNomad | Self::Minimal => Persona::Nomade,
        }
    }

    /// Value of the `version` attribute on stored records.
    pub fn version_tag(&self) -> &'static str {
        match self {
            Self::StrictNomad => "v2_nomad_multistep",
            Self::Minimal => "v1_minimal",
        }
    }
}

impl std::str::FromStr for SchemaVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict-nomad" => Ok(Self::StrictNomad),
            "minimal" => Ok(Self::Minimal),
            _ => Err(Error),
        }
    }
}

impl std::fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn test_string_conversion() -> anyhow::Result<()> {
        for s in ["strict-nomad", "minimal"] {
            assert_eq!(SchemaVariant::from_str(s)?.to_string(), s);
        }
        assert!(SchemaVariant::from_str("strict").is_err());
        Ok(())
    }

    #[test]
    fn test_version_tag() {
        assert_eq!(
            SchemaVariant::StrictNomad.version_tag(),
            "v2_nomad_multistep"
        );
        assert_eq!(SchemaVariant::Minimal.version_tag(), "v1_minimal");
    }
}
