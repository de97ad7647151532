use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::error::{ProcessingError, ValidationError};
use crate::offer::PricedOffer;
use crate::pipeline::AvailabilityProcessor;

pub const WELCOME_MESSAGE: &str = "Welcome to the XML to JSON API";
const INTERNAL_ERROR_DETAIL: &str = "Internal Server Error";

#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<AvailabilityProcessor>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthMessage {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub code: String,
    pub detail: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorBody {
                code: "internal_error".to_string(),
                detail: INTERNAL_ERROR_DETAIL.to_string(),
            },
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                code: err.code().to_string(),
                detail: err.to_string(),
            },
        }
    }
}

impl From<ProcessingError> for ApiError {
    fn from(err: ProcessingError) -> Self {
        match err {
            ProcessingError::Validation(err) => err.into(),
            ProcessingError::Internal(reason) => {
                tracing::error!(%reason, "unexpected error while processing XML request");
                ApiError::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

fn handle_panic(_panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("request handler panicked");
    ApiError::internal().into_response()
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/process", post(process_availability_request))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}

async fn home() -> Json<HealthMessage> {
    tracing::info!("home endpoint accessed");
    Json(HealthMessage {
        message: WELCOME_MESSAGE.to_string(),
    })
}

async fn process_availability_request(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PricedOffer>, ApiError> {
    tracing::info!(bytes = body.len(), "received XML availability request");

    let raw_xml = std::str::from_utf8(&body).map_err(|e| {
        ValidationError::MalformedInput(format!("request body is not valid UTF-8: {e}"))
    })?;

    match state.processor.process(raw_xml) {
        Ok(offer) => {
            tracing::info!(id = %offer.id, "successfully processed XML request");
            Ok(Json(offer))
        }
        Err(ProcessingError::Validation(err)) => {
            tracing::error!(code = err.code(), error = %err, "rejected XML request");
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
