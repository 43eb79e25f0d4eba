//! HTTP front-end.
//!
//! Routes:
//! - `/` (and any unmatched path): the HTML page from the templates directory
//! - `POST /api/generate-names`: `{"english_name"}` in, `{"suggestions"}` out
//! - `/static/*`: files from the static directory

use crate::config::ServerConfig;
use crate::logging::{log_error, log_info, log_warn};
use crate::names::{null_as_default, NameGenerator, NameSuggestions};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{any, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::Instrument;
use uuid::Uuid;

pub const GENERATE_NAMES_PATH: &str = "/api/generate-names";

/// Body of `POST /api/generate-names`
///
/// A missing or `null` name, or a `null` body, is treated as the empty name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub english_name: String,
}

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn NameGenerator>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(generator: Arc<dyn NameGenerator>, config: ServerConfig) -> Self {
        Self {
            generator,
            config: Arc::new(config),
        }
    }
}

/// Errors surfaced to HTTP callers. Bodies are generic; details go to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    MethodNotAllowed,
    BadRequest,
    Internal,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::MethodNotAllowed => "Only POST requests are supported",
            Self::BadRequest => "Malformed request body",
            Self::Internal => "An error occurred while generating names",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.message()).into_response()
    }
}

/// Build the axum Router with all endpoints.
pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", any(home))
        .route(
            GENERATE_NAMES_PATH,
            post(generate_names).fallback(method_not_allowed),
        )
        .nest_service("/static", static_files)
        .fallback(home)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create the templates and static directories if they are missing.
pub async fn prepare_directories(config: &ServerConfig) -> std::io::Result<()> {
    tokio::fs::create_dir_all(&config.templates_dir).await?;
    tokio::fs::create_dir_all(&config.static_dir).await?;
    Ok(())
}

/// Bind the configured address and serve until the process exits.
pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = state.config.bind_address;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log_info!("Server listening on http://localhost:{}", addr.port());
    axum::serve(listener, app).await?;
    Ok(())
}

async fn home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let path = state.config.index_template();
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Ok(Html(page)),
        Err(e) => {
            log_error!(path = %path.display(), error = %e, "Failed to load page template");
            Err(ApiError::Internal)
        }
    }
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn generate_names(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<NameSuggestions>, ApiError> {
    let request = serde_json::from_slice::<Option<NameRequest>>(&body)
        .map_err(|e| {
            log_warn!(error = %e, "Rejected malformed name request");
            ApiError::BadRequest
        })?
        .unwrap_or_default();

    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("generate_names", %request_id);

    async move {
        match state.generator.generate_names(&request.english_name).await {
            Ok(suggestions) => Ok(Json(NameSuggestions { suggestions })),
            Err(e) => {
                log_error!(
                    error = %e,
                    category = e.category().as_str(),
                    english_name = %request.english_name,
                    "Name generation failed"
                );
                Err(ApiError::Internal)
            }
        }
    }
    .instrument(span)
    .await
}
