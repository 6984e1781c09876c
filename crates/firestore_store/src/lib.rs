mod firestore_store;

pub use self::firestore_store::*;
