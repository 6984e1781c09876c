pub(crate) mod converter;
mod firestore_interest_store;
pub(crate) mod path;
pub(crate) mod schema;

pub use self::firestore_interest_store::*;
