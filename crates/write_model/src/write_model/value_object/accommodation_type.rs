#[derive(Debug, thiserror::Error)]
#[error("invalid accommodation type")]
pub struct Error;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AccommodationType {
    PrivateRoom,
    ApartmentStudio,
    Apartment1To2Bedrooms,
    House,
    Coliving,
}

impl AccommodationType {
    pub const ALL: [Self; 5] = [
        Self::PrivateRoom,
        Self::ApartmentStudio,
        Self::Apartment1To2Bedrooms,
        Self::House,
        Self::Coliving,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrivateRoom => "private_room",
            Self::ApartmentStudio => "apartment_studio",
            Self::Apartment1To2Bedrooms => "apartment_1_2br",
            Self::House => "house",
            Self::Coliving => "coliving",
        }
    }
}

impl std::str::FromStr for AccommodationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|it| it.as_str() == s)
            .ok_or(Error)
    }
}

impl std::fmt::Display for AccommodationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}
