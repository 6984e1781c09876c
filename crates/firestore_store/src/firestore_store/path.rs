use std::str::FromStr as _;

use firestore_client::{path::DocumentId, CollectionPath, DocumentPath};
use write_model::value_object::InterestId;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("collection name is not configured")]
    MissingCollection,
    #[error("invalid collection name")]
    InvalidCollection(#[source] firestore_client::path::Error),
    #[error("invalid document id")]
    InvalidDocument(#[source] firestore_client::path::Error),
}

/// Accepts nested paths such as `tenants/t1/interests`.
pub(crate) fn interest_collection(collection: Option<&str>) -> Result<CollectionPath, Error> {
    let collection = collection
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(Error::MissingCollection)?;
    CollectionPath::from_str(collection).map_err(Error::InvalidCollection)
}

pub(crate) fn interest_document(
    collection: &CollectionPath,
    id: InterestId,
) -> Result<DocumentPath, Error> {
    let document_id = DocumentId::from_str(&id.to_string()).map_err(Error::InvalidDocument)?;
    collection.doc(document_id).map_err(Error::InvalidDocument)
}
