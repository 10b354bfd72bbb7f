use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::errors::ApiError;

/// Body of `POST /api/color`
#[derive(Debug, Deserialize)]
pub struct ColorRequest {
    pub color: String,
}

/// Resolution echoed back with the original input
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ColorResponse {
    pub input: String,
    pub hex: String,
    pub name: String,
}

/// Build the application router.
///
/// Any origin may call the API; the CORS layer mirrors the request origin
/// so credentialed requests are accepted too.
pub fn router() -> Router {
    Router::new()
        .route("/api/color", post(resolve_color))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}

async fn resolve_color(
    payload: Result<Json<ColorRequest>, JsonRejection>,
) -> Result<Json<ColorResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(status = %rejection.status(), "rejected color request: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    let resolution = colorname::resolve(&request.color);
    Ok(Json(ColorResponse {
        input: request.color,
        hex: resolution.hex,
        name: resolution.name.to_string(),
    }))
}
