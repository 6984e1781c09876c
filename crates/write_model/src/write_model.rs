pub mod aggregate;
pub mod raw_submission;
pub mod schema_variant;
pub mod validation;
pub mod value_object;

pub use self::raw_submission::RawSubmission;
pub use self::schema_variant::SchemaVariant;
pub use self::validation::{validate, ValidationError};
