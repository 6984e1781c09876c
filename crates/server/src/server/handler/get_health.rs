use axum::{Json, Router};
use write_model::value_object::DateTime;

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct ResponseBody {
    ok: bool,
    time: String,
}

async fn handler() -> Json<ResponseBody> {
    Json(ResponseBody {
        ok: true,
        time: DateTime::now().to_string(),
    })
}

pub fn router<T: Clone + Send + Sync + 'static>() -> Router<T> {
    Router::new().route("/health", axum::routing::get(handler))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use axum::http::StatusCode;

    use crate::server::handler::tests::{send_request, ResponseExt as _};

    use super::*;

    #[tokio::test]
    async fn test() -> anyhow::Result<()> {
        let app = router().with_state(());
        let request = axum::http::Request::builder()
            .method(axum::http::Method::GET)
            .uri("/health")
            .body(axum::body::Body::empty())?;
        let response = send_request(app, request).await?;
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body_as_json::<ResponseBody>().await?;
        assert!(body.ok);
        assert!(DateTime::from_str(&body.time).is_ok());
        Ok(())
    }
}
