use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::api::handlers;
use crate::error::Result;
use crate::store::RecordStore;

/// Build the route table over a shared read-only store handle.
///
/// The static `/api/v1.0/precipitation`, `/stations` and `/tobs` routes take
/// precedence over the dynamic `/:start` capture, so the date-range routes
/// only see genuine path parameters.
pub fn build_router(store: Arc<RecordStore>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/v1.0/precipitation", get(handlers::precipitation))
        .route("/api/v1.0/stations", get(handlers::stations))
        .route("/api/v1.0/tobs", get(handlers::tobs))
        .route("/api/v1.0/:start", get(handlers::temperature_from))
        .route("/api/v1.0/:start/:end", get(handlers::temperature_range))
        .with_state(store)
}

/// Bind and serve until the process is stopped. The store is published to
/// request handlers exactly once, before the listener accepts traffic.
pub async fn serve(store: RecordStore, host: &str, port: u16) -> Result<()> {
    let app = build_router(Arc::new(store));

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
