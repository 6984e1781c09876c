mod firestore_client;

pub use self::firestore_client::*;
