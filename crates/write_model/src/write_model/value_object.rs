pub mod accommodation_type;
pub mod budget;
pub mod city;
pub mod date_time;
pub mod duration;
pub mod email;
pub mod free_text;
pub mod interest_id;
pub mod language;
pub mod need;
pub mod nostr_public_key;
pub mod person_name;
pub mod persona;
pub mod source_metadata;
pub mod start_date;

pub use self::accommodation_type::AccommodationType;
pub use self::budget::Budget;
pub use self::city::City;
pub use self::date_time::DateTime;
pub use self::duration::Duration;
pub use self::email::Email;
pub use self::free_text::FreeText;
pub use self::interest_id::InterestId;
pub use self::language::Language;
pub use self::need::Need;
pub use self::nostr_public_key::NostrPublicKey;
pub use self::person_name::PersonName;
pub use self::persona::Persona;
pub use self::source_metadata::SourceMetadata;
pub use self::start_date::StartDate;
