use std::str::FromStr;
use std::sync::Arc;

pub use firestore_path as path;
use firestore_path::DatabaseName;

pub use firestore_path::CollectionPath;
pub use firestore_path::DocumentName;
pub use firestore_path::DocumentPath;
pub use serde_firestore_value::Timestamp;

use google_api_proto::google::firestore::v1 as proto;

#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Document<T> {
    pub name: DocumentName,
    pub fields: T,
    pub create_time: Timestamp,
    pub update_time: Timestamp,
}

fn document_from_proto<T>(
    proto::Document {
        name,
        fields,
        create_time,
        update_time,
    }: proto::Document,
) -> Result<Document<T>, Error>
where
    T: serde::de::DeserializeOwned,
{
    Ok(Document::<T> {
        name: DocumentName::from_str(&name).map_err(InnerError::DocumentName)?,
        fields: serde_firestore_value::from_value::<T>(&proto::Value {
            value_type: Some(proto::value::ValueType::MapValue(proto::MapValue {
                fields,
            })),
        })
        .map_err(InnerError::Deserialize)?,
        create_time: Timestamp::from(create_time.ok_or(InnerError::MissingTimestamp)?),
        update_time: Timestamp::from(update_time.ok_or(InnerError::MissingTimestamp)?),
    })
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] InnerError);

impl Error {
    /// The gRPC status code, if the server answered.
    pub fn code(&self) -> Option<tonic::Code> {
        match &self.0 {
            InnerError::Status(status) => Some(status.code()),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum InnerError {
    #[error("deserialize")]
    Deserialize(#[source] serde_firestore_value::Error),
    #[error("document name")]
    DocumentName(#[source] firestore_path::Error),
    #[error("header value")]
    HeaderValue(#[source] tonic::metadata::errors::InvalidMetadataValue),
    #[error("missing timestamp")]
    MissingTimestamp,
    #[error("fields must serialize to a map")]
    NotAMap,
    #[error("project_id")]
    ProjectId(#[source] firestore_path::Error),
    #[error("serialize")]
    Serialize(#[source] serde_firestore_value::Error),
    #[error("status")]
    Status(#[source] tonic::Status),
    #[error("token")]
    Token(#[source] Box<dyn std::error::Error + Send + Sync>),
}

type MyInterceptor =
    Box<dyn FnMut(tonic::Request<()>) -> Result<tonic::Request<()>, tonic::Status> + Send + Sync>;
type Client = proto::firestore_client::FirestoreClient<
    tonic::service::interceptor::InterceptedService<tonic::transport::Channel, MyInterceptor>,
>;

#[derive(Clone)]
pub struct FirestoreClient {
    channel: tonic::transport::Channel,
    database_name: firestore_path::DatabaseName,
    token_source: Arc<dyn google_cloud_token::TokenSource>,
}

impl FirestoreClient {
    /// Connects with Application Default Credentials.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let default_token_source_provider =
            google_cloud_auth::token::DefaultTokenSourceProvider::new(
                google_cloud_auth::project::Config {
                    scopes: Some(&[
                        "https://www.googleapis.com/auth/cloud-platform",
                        "https://www.googleapis.com/auth/datastore",
                    ]),
                    ..Default::default()
                },
            )
            .await?;
        let token_source =
            google_cloud_token::TokenSourceProvider::token_source(&default_token_source_provider);
        let project_id = default_token_source_provider
            .project_id
            .ok_or("project_id not found")?;
        let channel = tonic::transport::Channel::from_static("https://firestore.googleapis.com")
            .tls_config(
                tonic::transport::ClientTlsConfig::new().domain_name("firestore.googleapis.com"),
            )?
            .connect()
            .await?;
        let database_name =
            DatabaseName::from_project_id(project_id).map_err(InnerError::ProjectId)?;
        Ok(Self {
            channel,
            database_name,
            token_source,
        })
    }

    /// Inserts a new document. Fails with `ALREADY_EXISTS` instead of overwriting.
    pub async fn create_document<T>(
        &self,
        document_path: &DocumentPath,
        fields: &T,
    ) -> Result<Document<()>, Error>
    where
        T: serde::Serialize,
    {
        let fields = match serde_firestore_value::to_value(fields)
            .map_err(InnerError::Serialize)?
            .value_type
        {
            Some(proto::value::ValueType::MapValue(proto::MapValue { fields })) => fields,
            _ => return Err(Error::from(InnerError::NotAMap)),
        };
        let collection_path = document_path.parent();
        let mut client = self.client().await?;
        let document = client
            .create_document(proto::CreateDocumentRequest {
                parent: self.parent_name(collection_path)?,
                collection_id: collection_path.collection_id().to_string(),
                document_id: document_path.document_id().to_string(),
                document: Some(proto::Document {
                    name: String::default(),
                    fields,
                    create_time: None,
                    update_time: None,
                }),
                mask: None,
            })
            .await
            .map_err(InnerError::Status)?
            .into_inner();
        Ok(Document {
            name: DocumentName::from_str(&document.name).map_err(InnerError::DocumentName)?,
            fields: (),
            create_time: Timestamp::from(
                document.create_time.ok_or(InnerError::MissingTimestamp)?,
            ),
            update_time: Timestamp::from(
                document.update_time.ok_or(InnerError::MissingTimestamp)?,
            ),
        })
    }

    pub async fn delete_document(&self, document_path: &DocumentPath) -> Result<(), Error> {
        let mut client = self.client().await?;
        client
            .delete_document(proto::DeleteDocumentRequest {
                name: self.document_name(document_path)?.to_string(),
                current_document: None,
            })
            .await
            .map_err(InnerError::Status)?;
        Ok(())
    }

    /// Returns `None` when the document does not exist.
    pub async fn get_document<T>(
        &self,
        document_path: &DocumentPath,
    ) -> Result<Option<Document<T>>, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut client = self.client().await?;
        match client
            .get_document(proto::GetDocumentRequest {
                name: self.document_name(document_path)?.to_string(),
                mask: None,
                consistency_selector: None,
            })
            .await
        {
            Ok(response) => document_from_proto::<T>(response.into_inner()).map(Some),
            Err(status) if status.code() == tonic::Code::NotFound => Ok(None),
            Err(status) => Err(Error::from(InnerError::Status(status))),
        }
    }

    async fn client(&self) -> Result<Client, Error> {
        let inner = self.channel.clone();
        let token = self.token_source.token().await.map_err(InnerError::Token)?;
        let mut metadata_value =
            tonic::metadata::AsciiMetadataValue::try_from(format!("Bearer {}", token))
                .map_err(InnerError::HeaderValue)?;
        metadata_value.set_sensitive(true);
        let interceptor: MyInterceptor = Box::new(
            move |mut request: tonic::Request<()>| -> Result<tonic::Request<()>, tonic::Status> {
                request
                    .metadata_mut()
                    .insert("authorization", metadata_value.clone());
                Ok(request)
            },
        );
        let client = proto::firestore_client::FirestoreClient::with_interceptor(inner, interceptor);
        Ok(client)
    }

    fn document_name(&self, document_path: &DocumentPath) -> Result<DocumentName, Error> {
        Ok(self
            .database_name
            .doc(document_path.clone())
            .map_err(InnerError::DocumentName)?)
    }

    fn parent_name(&self, collection_path: &CollectionPath) -> Result<String, Error> {
        Ok(match collection_path.parent() {
            Some(document_path) => self.document_name(document_path)?.to_string(),
            None => format!("{}/documents", self.database_name),
        })
    }
}
