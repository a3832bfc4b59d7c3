//! Axum route handlers for the calc API.

use axum::{
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{error::GatewayError, query};

/// Calculator page served at `/`, embedded at compile time.
const INDEX_HTML: &str = include_str!("../static/index.html");

// ── Request / response types ──────────────────────────────────────────────────

/// Query parameters for the single-argument endpoints.
#[derive(Debug, Deserialize)]
pub struct UnaryParams {
    pub x: Option<String>,
}

/// Query parameters for `/api/pow`.
#[derive(Debug, Deserialize)]
pub struct BinaryParams {
    pub x: Option<String>,
    pub b: Option<String>,
}

/// Success envelope for float-valued operations.
#[derive(Debug, Serialize)]
pub struct FloatResult {
    pub result: f64,
}

/// Success envelope for `/api/fact`, which returns an exact integer.
#[derive(Debug, Serialize)]
pub struct IntResult {
    pub result: u128,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/sqrt", get(api_sqrt))
        .route("/api/fact", get(api_fact))
        .route("/api/ln", get(api_ln))
        .route("/api/pow", get(api_pow))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /` — static calculator page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /api/sqrt?x=` — non-negative real square root.
///
/// # Errors
/// 400 if `x` is absent, non-numeric, or negative.
pub async fn api_sqrt(
    Query(params): Query<UnaryParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let x = query::require_f64("x", params.x.as_deref())?;
    Ok(Json(FloatResult {
        result: calc_core::sqrt(x)?,
    }))
}

/// `GET /api/fact?x=` — exact factorial of an int-like argument.
///
/// # Errors
/// 400 if `x` is absent, non-numeric, negative, non-integral, or large
/// enough that the result exceeds 128 bits.
pub async fn api_fact(
    Query(params): Query<UnaryParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let x = query::require_f64("x", params.x.as_deref())?;
    Ok(Json(IntResult {
        result: calc_core::factorial(x)?,
    }))
}

/// `GET /api/ln?x=` — natural logarithm.
///
/// # Errors
/// 400 if `x` is absent, non-numeric, or not strictly positive.
pub async fn api_ln(
    Query(params): Query<UnaryParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let x = query::require_f64("x", params.x.as_deref())?;
    Ok(Json(FloatResult {
        result: calc_core::ln(x)?,
    }))
}

/// `GET /api/pow?x=&b=` — `x` raised to the power `b`.
///
/// No domain validation: non-finite results serialize as JSON `null`.
///
/// # Errors
/// 400 if `x` or `b` is absent or non-numeric.
pub async fn api_pow(
    Query(params): Query<BinaryParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let x = query::require_f64("x", params.x.as_deref())?;
    let b = query::require_f64("b", params.b.as_deref())?;
    Ok(Json(FloatResult {
        result: calc_core::power(x, b),
    }))
}
