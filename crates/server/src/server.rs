mod app;
mod handler;

use std::{net::SocketAddr, time::Duration};

use command_use_case::create_interest::{HasCreateInterest, HasSchemaVariant};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

pub use self::app::App;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("bind")]
    Bind(#[source] std::io::Error),
    #[error("serve")]
    Serve(#[source] std::io::Error),
}

/// All routes with tracing, request timeout and permissive CORS applied.
pub fn router<T>(app: T, request_timeout: Duration) -> axum::Router
where
    T: Clone + HasCreateInterest + HasSchemaVariant + Send + Sync + 'static,
{
    handler::router()
        .with_state(app)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
}

pub async fn run<T>(app: T, bind: SocketAddr, request_timeout: Duration) -> Result<(), Error>
where
    T: Clone + HasCreateInterest + HasSchemaVariant + Send + Sync + 'static,
{
    let router = router(app, request_timeout);
    let tcp_listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(Error::Bind)?;
    tracing::info!(%bind, "listening");
    axum::serve(
        tcp_listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(Error::Serve)?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
