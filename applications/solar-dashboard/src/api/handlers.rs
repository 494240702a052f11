use crate::chart::ChartConfig;
use crate::page::SharedPage;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::collections::BTreeMap;
use tracing::error;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Ids of the canvases that hold a chart
pub async fn list_charts(State(page): State<SharedPage>) -> Result<Json<Vec<String>>, StatusCode> {
    let page = page.lock().map_err(internal)?;
    Ok(Json(page.drawn_charts()))
}

/// Chart.js configuration drawn on a canvas
pub async fn get_chart(
    State(page): State<SharedPage>,
    Path(id): Path<String>,
) -> Result<Json<ChartConfig>, StatusCode> {
    let page = page.lock().map_err(internal)?;
    page.chart(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Current content of every text display
pub async fn get_displays(
    State(page): State<SharedPage>,
) -> Result<Json<BTreeMap<String, String>>, StatusCode> {
    let page = page.lock().map_err(internal)?;
    Ok(Json(page.texts()))
}

fn internal(e: crate::error::AppError) -> StatusCode {
    error!("Failed to read dashboard page: {}", e);
    StatusCode::INTERNAL_SERVER_ERROR
}
