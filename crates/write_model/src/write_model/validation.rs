use std::str::FromStr;

use serde_json::Value;

use crate::{
    aggregate::Interest,
    value_object::{
        AccommodationType, Budget, City, Duration, Email, FreeText, Language, Need,
        NostrPublicKey, PersonName, Persona, StartDate,
    },
    RawSubmission, SchemaVariant,
};

const MAX_CITIES: usize = 5;
const MAX_BIO_CHARS: usize = 280;
const MAX_LENIENT_BIO_CHARS: usize = 1000;
const MAX_COUNTRIES_CHARS: usize = 200;
const MAX_PROPERTY_TITLE_CHARS: usize = 120;
const MAX_PROPERTY_LOCATION_CHARS: usize = 200;
const MAX_PROPERTY_SUMMARY_CHARS: usize = 1000;

/// The first rule a submission broke.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Only nomade persona is accepted")]
    InvalidPersona,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Name is required (2-100 characters)")]
    InvalidName,
    #[error("Cities must contain 1-5 items")]
    InvalidCities,
    #[error("All cities must be non-empty strings")]
    InvalidCity { index: usize },
    #[error("Countries must be a string")]
    InvalidCountries,
    #[error("Needs must be an array")]
    InvalidNeeds,
    #[error("Invalid needs value")]
    InvalidNeed { index: usize },
    #[error("Invalid accommodationType")]
    InvalidAccommodationType,
    #[error("Invalid budget")]
    InvalidBudget,
    #[error("Invalid duration")]
    InvalidDuration,
    #[error("At least one language is required")]
    MissingLanguages,
    #[error("At least one language is required")]
    EmptyLanguages,
    #[error("Invalid language value")]
    InvalidLanguage { index: usize },
    #[error("Consent is required")]
    ConsentRequired,
    #[error("Invalid Nostr public key format (expected npub1...)")]
    InvalidNostr,
    #[error("Bio must be max 280 characters")]
    InvalidBio,
    #[error("Invalid startDate (expected YYYY-MM-DD)")]
    InvalidStartDate,
    #[error("{field} must be a string")]
    InvalidFreeText { field: &'static str },
}

impl ValidationError {
    /// Stable machine-readable code.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidPersona => "invalid_persona",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidName => "invalid_name",
            Self::InvalidCities => "invalid_cities",
            Self::InvalidCity { .. } => "invalid_city",
            Self::InvalidCountries => "invalid_countries",
            Self::InvalidNeeds => "invalid_needs",
            Self::InvalidNeed { .. } => "invalid_need",
            Self::InvalidAccommodationType => "invalid_accommodation_type",
            Self::InvalidBudget => "invalid_budget",
            Self::InvalidDuration => "invalid_duration",
            Self::MissingLanguages => "languages_required",
            Self::EmptyLanguages => "languages_empty",
            Self::InvalidLanguage { .. } => "invalid_language",
            Self::ConsentRequired => "consent_required",
            Self::InvalidNostr => "invalid_nostr",
            Self::InvalidBio => "invalid_bio",
            Self::InvalidStartDate => "invalid_start_date",
            Self::InvalidFreeText { .. } => "invalid_free_text",
        }
    }

    /// Submission key the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidPersona => "persona",
            Self::InvalidEmail => "email",
            Self::InvalidName => "name",
            Self::InvalidCities | Self::InvalidCity { .. } => "cities",
            Self::InvalidCountries => "countries",
            Self::InvalidNeeds | Self::InvalidNeed { .. } => "needs",
            Self::InvalidAccommodationType => "accommodationType",
            Self::InvalidBudget => "budget",
            Self::InvalidDuration => "duration",
            Self::MissingLanguages | Self::EmptyLanguages | Self::InvalidLanguage { .. } => {
                "languages"
            }
            Self::ConsentRequired => "consent",
            Self::InvalidNostr => "nostr",
            Self::InvalidBio => "bio",
            Self::InvalidStartDate => "startDate",
            Self::InvalidFreeText { field } => field,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Self::InvalidCity { index }
            | Self::InvalidNeed { index }
            | Self::InvalidLanguage { index } => Some(*index),
            _ => None,
        }
    }

    /// `{"field": ..}` plus `"index"` for list element errors.
    pub fn details(&self) -> Value {
        let mut details = serde_json::Map::new();
        details.insert("field".to_owned(), Value::from(self.field()));
        if let Some(index) = self.index() {
            details.insert("index".to_owned(), Value::from(index));
        }
        Value::Object(details)
    }
}

/// Validates and normalizes `raw` under `schema_variant`.
///
/// Rules are checked in a fixed order and the first violation is returned:
/// persona, email, name, cities/countries, needs, accommodationType, budget,
/// duration, languages, consent, nostr, bio, then the variant-specific
/// startDate and property fields. Unknown keys are ignored and `null` is the
/// same as absent.
pub fn validate(
    raw: &RawSubmission,
    schema_variant: SchemaVariant,
) -> Result<Interest, ValidationError> {
    use ValidationError as E;

    let strict = schema_variant == SchemaVariant::StrictNomad;

    let persona = required_str(raw, "persona", E::InvalidPersona)
        .and_then(|s| Persona::from_str(s).map_err(|_| E::InvalidPersona))
        .and_then(|persona| {
            if persona == schema_variant.persona() {
                Ok(persona)
            } else {
                Err(E::InvalidPersona)
            }
        })?;

    let email = required_str(raw, "email", E::InvalidEmail)
        .and_then(|s| Email::from_str(s).map_err(|_| E::InvalidEmail))?;

    let name = if strict {
        let s = required_str(raw, "name", E::InvalidName)?;
        Some(PersonName::from_str(s).map_err(|_| E::InvalidName)?)
    } else {
        optional_str(raw, "name", E::InvalidName)?.and_then(PersonName::truncated)
    };

    let cities = cities(raw, strict)?;
    let countries = if strict {
        None
    } else {
        optional_str(raw, "countries", E::InvalidCountries)?
            .and_then(|s| FreeText::truncated(s, MAX_COUNTRIES_CHARS))
    };

    let needs = needs(raw)?;

    let accommodation_type = enumerated::<AccommodationType>(
        raw,
        "accommodationType",
        strict,
        E::InvalidAccommodationType,
    )?;
    let budget = enumerated::<Budget>(raw, "budget", strict, E::InvalidBudget)?;
    let duration = enumerated::<Duration>(raw, "duration", strict, E::InvalidDuration)?;

    let languages = languages(raw, strict)?;

    if raw.field("consent") != Some(&Value::Bool(true)) {
        return Err(E::ConsentRequired);
    }

    let nostr = optional_str(raw, "nostr", E::InvalidNostr)?
        .filter(|s| !s.trim().is_empty())
        .map(|s| NostrPublicKey::from_str(s).map_err(|_| E::InvalidNostr))
        .transpose()?;

    let bio = match optional_str(raw, "bio", E::InvalidBio)? {
        None => None,
        Some(s) if strict => FreeText::bounded(s, MAX_BIO_CHARS).map_err(|_| E::InvalidBio)?,
        Some(s) => FreeText::truncated(s, MAX_LENIENT_BIO_CHARS),
    };

    let start_date = if strict {
        optional_str(raw, "startDate", E::InvalidStartDate)?
            .filter(|s| !s.trim().is_empty())
            .map(|s| StartDate::from_str(s).map_err(|_| E::InvalidStartDate))
            .transpose()?
    } else {
        None
    };

    let (property_title, property_location, property_summary) = if strict {
        (None, None, None)
    } else {
        (
            lenient_text(raw, "propertyTitle", MAX_PROPERTY_TITLE_CHARS)?,
            lenient_text(raw, "propertyLocation", MAX_PROPERTY_LOCATION_CHARS)?,
            lenient_text(raw, "propertySummary", MAX_PROPERTY_SUMMARY_CHARS)?,
        )
    };

    Ok(Interest {
        schema_variant,
        persona,
        email,
        name,
        cities,
        countries,
        needs,
        accommodation_type,
        budget,
        duration,
        languages,
        nostr,
        bio,
        start_date,
        property_title,
        property_location,
        property_summary,
    })
}

fn required_str<'a>(
    raw: &'a RawSubmission,
    key: &str,
    error: ValidationError,
) -> Result<&'a str, ValidationError> {
    raw.field(key).and_then(Value::as_str).ok_or(error)
}

fn optional_str<'a>(
    raw: &'a RawSubmission,
    key: &str,
    error: ValidationError,
) -> Result<Option<&'a str>, ValidationError> {
    match raw.field(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(error),
    }
}

fn lenient_text(
    raw: &RawSubmission,
    field: &'static str,
    max_chars: usize,
) -> Result<Option<FreeText>, ValidationError> {
    Ok(
        optional_str(raw, field, ValidationError::InvalidFreeText { field })?
            .and_then(|s| FreeText::truncated(s, max_chars)),
    )
}

fn enumerated<T: FromStr>(
    raw: &RawSubmission,
    key: &str,
    required: bool,
    error: ValidationError,
) -> Result<Option<T>, ValidationError> {
    match raw.field(key) {
        None if required => Err(error),
        None => Ok(None),
        Some(value) => value
            .as_str()
            .and_then(|s| T::from_str(s).ok())
            .map(Some)
            .ok_or(error),
    }
}

fn cities(raw: &RawSubmission, required: bool) -> Result<Option<Vec<City>>, ValidationError> {
    let items = match raw.field("cities") {
        None if required => return Err(ValidationError::InvalidCities),
        None => return Ok(None),
        Some(value) => value.as_array().ok_or(ValidationError::InvalidCities)?,
    };
    if items.is_empty() || items.len() > MAX_CITIES {
        return Err(ValidationError::InvalidCities);
    }
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str()
                .and_then(|s| City::from_str(s).ok())
                .ok_or(ValidationError::InvalidCity { index })
        })
        .collect::<Result<Vec<City>, ValidationError>>()
        .map(Some)
}

fn needs(raw: &RawSubmission) -> Result<Option<Vec<Need>>, ValidationError> {
    let Some(value) = raw.field("needs") else {
        return Ok(None);
    };
    let items = value.as_array().ok_or(ValidationError::InvalidNeeds)?;
    let mut needs = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let need = item
            .as_str()
            .and_then(|s| Need::from_str(s).ok())
            .ok_or(ValidationError::InvalidNeed { index })?;
        if !needs.contains(&need) {
            needs.push(need);
        }
    }
    Ok(Some(needs))
}

fn languages(
    raw: &RawSubmission,
    required: bool,
) -> Result<Option<Vec<Language>>, ValidationError> {
    let items = match raw.field("languages") {
        None if required => return Err(ValidationError::MissingLanguages),
        None => return Ok(None),
        Some(value) => value.as_array().ok_or(ValidationError::MissingLanguages)?,
    };
    if items.is_empty() {
        return Err(ValidationError::EmptyLanguages);
    }
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str()
                .and_then(|s| Language::from_str(s).ok())
                .ok_or(ValidationError::InvalidLanguage { index })
        })
        .collect::<Result<Vec<Language>, ValidationError>>()
        .map(Some)
}
