//! HTTP API.
//!
//! | Route | Body | Response |
//! |---|---|---|
//! | `GET /health` | | `{"status":"ok"}` |
//! | `POST /generate_poster` | `{summary, style_hint?}` | [`SinglePoster`] |
//! | `POST /generate_campaign` | `{summary, style_hint?}` | [`Campaign`] |
//!
//! Failures answer `{"detail": "..."}` with `422` for invalid input and `500`
//! for everything else.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use marquee_campaign::CampaignPipeline;
use marquee_core::{Campaign, CampaignRequest, SinglePoster};
use marquee_error::{ConfigError, MarqueeError, MarqueeResult};
use marquee_interface::{GenreClassifier, ImageBackend};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Body accepted by both generation routes.
#[derive(Debug, Clone, Deserialize)]
pub struct PosterRequestBody {
    /// Movie summary
    pub summary: String,
    /// Optional style direction
    #[serde(default)]
    pub style_hint: Option<String>,
}

/// Error response carrying a status and a `detail` message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    /// Status code sent to the client.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<MarqueeError> for ApiError {
    fn from(err: MarqueeError) -> Self {
        let status = if err.is_validation() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self {
            status,
            detail: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, detail = %self.detail, "Request failed");
        } else {
            warn!(status = %self.status, detail = %self.detail, "Request rejected");
        }
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

type SharedPipeline<C, B> = Arc<CampaignPipeline<C, B>>;

/// Creates the API router around a shared pipeline.
pub fn create_router<C, B>(pipeline: SharedPipeline<C, B>) -> Router
where
    C: GenreClassifier + 'static,
    B: ImageBackend + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/generate_poster", post(generate_poster::<C, B>))
        .route("/generate_campaign", post(generate_campaign::<C, B>))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(pipeline)
}

/// Bind `address` and serve until the process is stopped.
///
/// # Errors
///
/// Returns a configuration error if the address cannot be bound.
pub async fn serve<C, B>(pipeline: SharedPipeline<C, B>, address: &str) -> MarqueeResult<()>
where
    C: GenreClassifier + 'static,
    B: ImageBackend + 'static,
{
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|e| ConfigError::new(format!("Cannot bind {}: {}", address, e)))?;

    info!(address, "Serving Marquee API");

    axum::serve(listener, create_router(pipeline))
        .await
        .map_err(|e| ConfigError::new(format!("Server stopped: {}", e)))?;
    Ok(())
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

fn to_request(
    body: Result<Json<PosterRequestBody>, JsonRejection>,
) -> Result<CampaignRequest, ApiError> {
    let Json(body) = body?;
    let request = CampaignRequest::new(body.summary, body.style_hint).map_err(MarqueeError::from)?;
    Ok(request)
}

/// Single poster from an ad-hoc prompt.
async fn generate_poster<C, B>(
    State(pipeline): State<SharedPipeline<C, B>>,
    body: Result<Json<PosterRequestBody>, JsonRejection>,
) -> Result<Json<SinglePoster>, ApiError>
where
    C: GenreClassifier + 'static,
    B: ImageBackend + 'static,
{
    let request = to_request(body)?;
    let poster = pipeline.run_single(&request).await?;
    Ok(Json(poster))
}

/// Full campaign.
async fn generate_campaign<C, B>(
    State(pipeline): State<SharedPipeline<C, B>>,
    body: Result<Json<PosterRequestBody>, JsonRejection>,
) -> Result<Json<Campaign>, ApiError>
where
    C: GenreClassifier + 'static,
    B: ImageBackend + 'static,
{
    let request = to_request(body)?;
    let campaign = pipeline.run_campaign(&request).await?;
    Ok(Json(campaign))
}
