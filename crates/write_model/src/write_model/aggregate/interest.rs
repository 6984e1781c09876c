use serde_json::{Map, Value};

use crate::{
    value_object::{
        AccommodationType, Budget, City, Duration, Email, FreeText, Language, Need,
        NostrPublicKey, PersonName, Persona, StartDate,
    },
    SchemaVariant,
};

/// A validated, normalized interest submission.
///
/// Only [`crate::validate`] builds this; consent is implied (a submission
/// without consent never becomes an `Interest`). Fields the input did not
/// carry stay `None` and are left out of [`Interest::to_json_value`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Interest {
    pub(crate) schema_variant: SchemaVariant,
    pub(crate) persona: Persona,
    pub(crate) email: Email,
    pub(crate) name: Option<PersonName>,
    pub(crate) cities: Option<Vec<City>>,
    pub(crate) countries: Option<FreeText>,
    pub(crate) needs: Option<Vec<Need>>,
    pub(crate) accommodation_type: Option<AccommodationType>,
    pub(crate) budget: Option<Budget>,
    pub(crate) duration: Option<Duration>,
    pub(crate) languages: Option<Vec<Language>>,
    pub(crate) nostr: Option<NostrPublicKey>,
    pub(crate) bio: Option<FreeText>,
    pub(crate) start_date: Option<StartDate>,
    pub(crate) property_title: Option<FreeText>,
    pub(crate) property_location: Option<FreeText>,
    pub(crate) property_summary: Option<FreeText>,
}

impl Interest {
    pub fn schema_variant(&self) -> SchemaVariant {
        self.schema_variant
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> Option<&PersonName> {
        self.name.as_ref()
    }

    pub fn cities(&self) -> Option<&[City]> {
        self.cities.as_deref()
    }

    pub fn countries(&self) -> Option<&FreeText> {
        self.countries.as_ref()
    }

    pub fn needs(&self) -> Option<&[Need]> {
        self.needs.as_deref()
    }

    pub fn accommodation_type(&self) -> Option<AccommodationType> {
        self.accommodation_type
    }

    pub fn budget(&self) -> Option<Budget> {
        self.budget
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    pub fn languages(&self) -> Option<&[Language]> {
        self.languages.as_deref()
    }

    pub fn nostr(&self) -> Option<&NostrPublicKey> {
        self.nostr.as_ref()
    }

    pub fn bio(&self) -> Option<&FreeText> {
        self.bio.as_ref()
    }

    pub fn start_date(&self) -> Option<StartDate> {
        self.start_date
    }

    pub fn property_title(&self) -> Option<&FreeText> {
        self.property_title.as_ref()
    }

    pub fn property_location(&self) -> Option<&FreeText> {
        self.property_location.as_ref()
    }

    pub fn property_summary(&self) -> Option<&FreeText> {
        self.property_summary.as_ref()
    }

    /// Normalized JSON object using the submission's camelCase keys.
    pub fn to_json_value(&self) -> Value {
        Value::Object(self.to_json_map())
    }

    pub(crate) fn to_json_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        insert(&mut map, "persona", Some(&self.persona));
        insert(&mut map, "email", Some(&self.email));
        insert(&mut map, "name", self.name.as_ref());
        insert_list(&mut map, "cities", self.cities.as_deref());
        insert(&mut map, "countries", self.countries.as_ref());
        insert_list(&mut map, "needs", self.needs.as_deref());
        insert(
            &mut map,
            "accommodationType",
            self.accommodation_type.as_ref(),
        );
        insert(&mut map, "budget", self.budget.as_ref());
        insert(&mut map, "duration", self.duration.as_ref());
        insert_list(&mut map, "languages", self.languages.as_deref());
        map.insert("consent".to_owned(), Value::Bool(true));
        insert(&mut map, "nostr", self.nostr.as_ref());
        insert(&mut map, "bio", self.bio.as_ref());
        insert(&mut map, "startDate", self.start_date.as_ref());
        insert(&mut map, "propertyTitle", self.property_title.as_ref());
        insert(&mut map, "propertyLocation", self.property_location.as_ref());
        insert(&mut map, "propertySummary", self.property_summary.as_ref());
        map
    }
}

fn insert<T: std::fmt::Display>(map: &mut Map<String, Value>, key: &str, value: Option<&T>) {
    if let Some(value) = value {
        map.insert(key.to_owned(), Value::String(value.to_string()));
    }
}

fn insert_list<T: std::fmt::Display>(map: &mut Map<String, Value>, key: &str, values: Option<&[T]>) {
    if let Some(values) = values {
        map.insert(
            key.to_owned(),
            Value::Array(
                values
                    .iter()
                    .map(|value| Value::String(value.to_string()))
                    .collect(),
            ),
        );
    }
}
