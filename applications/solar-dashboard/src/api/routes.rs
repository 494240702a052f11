use crate::api::handlers;
use crate::page::SharedPage;
use axum::{extract::Request, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::Level;

pub fn create_router(page: SharedPage) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/charts", get(handlers::list_charts))
        .route("/api/charts/{id}", get(handlers::get_chart))
        .route("/api/displays", get(handlers::get_displays))
        .with_state(page)
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request| {
                    tracing::span!(
                        Level::INFO,
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_response(
                    |_response: &axum::response::Response,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::event!(Level::DEBUG, latency = ?latency, "request completed");
                    },
                ),
        )
}
