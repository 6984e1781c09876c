pub(crate) mod converter;
mod dynamodb_interest_store;

pub use self::dynamodb_interest_store::*;
