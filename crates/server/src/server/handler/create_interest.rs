use std::net::SocketAddr;

use axum::{
    body::Bytes,
    extract::{ConnectInfo, State},
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::json;

use command_use_case::create_interest::{self, HasCreateInterest, HasSchemaVariant};
use write_model::{value_object::SourceMetadata, SchemaVariant};

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ResponseBody {
    id: String,
    created_at: String,
}

impl From<create_interest::Output> for ResponseBody {
    fn from(create_interest::Output { id, created_at }: create_interest::Output) -> Self {
        Self {
            id: id.to_string(),
            created_at: created_at.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("invalid json")]
    InvalidJson(#[source] serde_json::Error),
    #[error("create interest")]
    CreateInterest(#[source] create_interest::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Error::InvalidJson(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "invalid_json", "message": "Invalid JSON format" }),
            ),
            Error::CreateInterest(create_interest::Error::Validation(e)) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": e.reason(), "message": e.to_string(), "details": e.details() }),
            ),
            Error::CreateInterest(create_interest::Error::Persistence(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "internal_error", "message": "Internal server error" }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

fn success_status(schema_variant: SchemaVariant) -> StatusCode {
    match schema_variant {
        SchemaVariant::StrictNomad => StatusCode::OK,
        SchemaVariant::Minimal => StatusCode::CREATED,
    }
}

/// `User-Agent` plus the first `X-Forwarded-For` entry, falling back to the peer address.
fn source_metadata(headers: &HeaderMap, peer: Option<SocketAddr>) -> SourceMetadata {
    let forwarded_for = header_value(headers, "x-forwarded-for")
        .and_then(|s| s.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned);
    SourceMetadata {
        ip_address: forwarded_for.or_else(|| peer.map(|peer| peer.ip().to_string())),
        user_agent: header_value(headers, USER_AGENT.as_str()).map(str::to_owned),
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// An empty body is treated as `{}` and left to validation.
fn parse_payload(body: &[u8]) -> Result<serde_json::Value, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice::<serde_json::Value>(body).map_err(Error::InvalidJson)
}

async fn handler<T: HasCreateInterest + HasSchemaVariant>(
    State(state): State<T>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<ResponseBody>), Error> {
    let payload = parse_payload(&body)?;
    let metadata = source_metadata(&headers, connect_info.map(|ConnectInfo(peer)| peer));
    let output = state
        .create_interest()
        .execute(create_interest::Input { payload, metadata })
        .await
        .map_err(Error::CreateInterest)?;
    Ok((
        success_status(state.schema_variant()),
        Json(ResponseBody::from(output)),
    ))
}

pub fn router<T: Clone + HasCreateInterest + HasSchemaVariant + Send + Sync + 'static>(
) -> Router<T> {
    Router::new().route("/interest", axum::routing::post(handler::<T>))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use command_use_case::{
        create_interest::MockCreateInterest, port::interest_repository::PersistenceError,
    };
    use write_model::{
        value_object::{DateTime, InterestId},
        ValidationError,
    };

    use crate::server::handler::tests::{send_request, ResponseExt as _};

    use super::*;

    #[tokio::test]
    async fn test_happy_path() -> anyhow::Result<()> {
        for (schema_variant, expected_status) in [
            (SchemaVariant::StrictNomad, StatusCode::OK),
            (SchemaVariant::Minimal, StatusCode::CREATED),
        ] {
            let id = InterestId::generate();
            let created_at = DateTime::now();
            let mocks = Mocks::with_happy_path_behavior(schema_variant, id, created_at);
            let app = router().with_state(mocks.clone());
            let request = build_request(r#"{"persona":"nomade"}"#)?;
            let response = send_request(app, request).await?;
            assert_eq!(response.status(), expected_status);
            assert_eq!(
                response.into_body_as_json::<ResponseBody>().await?,
                ResponseBody {
                    id: id.to_string(),
                    created_at: created_at.to_string(),
                }
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_metadata() -> anyhow::Result<()> {
        let mut mock = MockCreateInterest::new();
        mock.expect_execute().return_once(|input| {
            assert_eq!(input.metadata.ip_address.as_deref(), Some("203.0.113.7"));
            assert_eq!(input.metadata.user_agent.as_deref(), Some("curl/8.0"));
            Ok(create_interest::Output {
                id: InterestId::generate(),
                created_at: DateTime::now(),
            })
        });
        let mocks = Mocks {
            create_interest: Arc::new(mock),
            schema_variant: SchemaVariant::StrictNomad,
        };
        let app = router().with_state(mocks);
        let request = axum::http::Request::builder()
            .method(axum::http::Method::POST)
            .uri("/interest")
            .header(axum::http::header::USER_AGENT, "curl/8.0")
            .header("x-forwarded-for", " 203.0.113.7 , 10.0.0.1")
            .body(axum::body::Body::from("{}"))?;
        let response = send_request(app, request).await?;
        assert_eq!(response.status(), StatusCode::OK);
        Ok(())
    }

    #[test]
    fn test_source_metadata_falls_back_to_peer() {
        let peer = SocketAddr::from(([192, 0, 2, 1], 443));
        assert_eq!(
            source_metadata(&HeaderMap::new(), Some(peer)),
            SourceMetadata {
                ip_address: Some("192.0.2.1".to_owned()),
                user_agent: None,
            }
        );
        assert_eq!(
            source_metadata(&HeaderMap::new(), None),
            SourceMetadata::default()
        );
    }

    #[tokio::test]
    async fn test_invalid_json() -> anyhow::Result<()> {
        let mut mock = MockCreateInterest::new();
        mock.expect_execute().never();
        let mocks = Mocks {
            create_interest: Arc::new(mock),
            schema_variant: SchemaVariant::StrictNomad,
        };
        for body in ["{", "not json", "{\"persona\":"] {
            let app = router().with_state(mocks.clone());
            let response = send_request(app, build_request(body)?).await?;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                response.into_body_as_json::<serde_json::Value>().await?,
                json!({ "error": "invalid_json", "message": "Invalid JSON format" })
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_body_is_an_empty_object() -> anyhow::Result<()> {
        for body in ["", "  \n"] {
            let mut mock = MockCreateInterest::new();
            mock.expect_execute().times(1).return_once(|input| {
                assert_eq!(input.payload, json!({}));
                Err(create_interest::Error::Validation(
                    ValidationError::InvalidPersona,
                ))
            });
            let mocks = Mocks {
                create_interest: Arc::new(mock),
                schema_variant: SchemaVariant::StrictNomad,
            };
            let app = router().with_state(mocks);
            let response = send_request(app, build_request(body)?).await?;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                response.into_body_as_json::<serde_json::Value>().await?["error"],
                "invalid_persona"
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_validation_error() -> anyhow::Result<()> {
        let mut mock = MockCreateInterest::new();
        mock.expect_execute().return_once(|_| {
            Err(create_interest::Error::Validation(
                ValidationError::InvalidNeed { index: 1 },
            ))
        });
        let mocks = Mocks {
            create_interest: Arc::new(mock),
            schema_variant: SchemaVariant::StrictNomad,
        };
        let app = router().with_state(mocks);
        let response = send_request(app, build_request("{}")?).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.into_body_as_json::<serde_json::Value>().await?,
            json!({
                "error": "invalid_need",
                "message": "Invalid needs value",
                "details": { "field": "needs", "index": 1 },
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_persistence_error() -> anyhow::Result<()> {
        let mut mock = MockCreateInterest::new();
        mock.expect_execute().return_once(|_| {
            Err(create_interest::Error::Persistence(PersistenceError::from(
                build_error(),
            )))
        });
        let mocks = Mocks {
            create_interest: Arc::new(mock),
            schema_variant: SchemaVariant::Minimal,
        };
        let app = router().with_state(mocks);
        let response = send_request(app, build_request("{}")?).await?;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.into_body_string().await?;
        assert!(!body.contains("secret-table"));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&body)?,
            json!({ "error": "internal_error", "message": "Internal server error" })
        );
        Ok(())
    }

    #[derive(Clone)]
    struct Mocks {
        create_interest: Arc<MockCreateInterest>,
        schema_variant: SchemaVariant,
    }

    impl Mocks {
        fn with_happy_path_behavior(
            schema_variant: SchemaVariant,
            id: InterestId,
            created_at: DateTime,
        ) -> Self {
            let mut create_interest = MockCreateInterest::new();
            create_interest.expect_execute().return_once(move |input| {
                assert_eq!(input.payload, json!({ "persona": "nomade" }));
                Ok(create_interest::Output { id, created_at })
            });
            Self {
                create_interest: Arc::new(create_interest),
                schema_variant,
            }
        }
    }

    impl HasCreateInterest for Mocks {
        fn create_interest(
            &self,
        ) -> Arc<dyn command_use_case::create_interest::CreateInterest + Send + Sync> {
            self.create_interest.clone()
        }
    }

    impl HasSchemaVariant for Mocks {
        fn schema_variant(&self) -> SchemaVariant {
            self.schema_variant
        }
    }

    fn build_error() -> Box<dyn std::error::Error + Send + Sync> {
        Box::new(std::io::Error::new(
            std::io::ErrorKind::Other,
            "table secret-table unreachable",
        ))
    }

    fn build_request(body: &str) -> anyhow::Result<axum::http::Request<axum::body::Body>> {
        Ok(axum::http::Request::builder()
            .method(axum::http::Method::POST)
            .uri("/interest")
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body.to_owned()))?)
    }
}
