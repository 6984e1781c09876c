mod dynamodb_store;

pub use self::dynamodb_store::*;
