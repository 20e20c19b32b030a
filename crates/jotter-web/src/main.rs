//! jotter-web - HTTP server for jotter

mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use jotter_core::{
    defaults, BulkDeleteRequest, CreateNoteRequest, NoteRepository, UpdateNoteRequest,
};
use jotter_store::Store;

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so request ids sort chronologically in
/// logs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

// =============================================================================
// APPLICATION STATE
// =============================================================================

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The in-memory note store, seeded at startup.
    store: Arc<Store>,
}

// =============================================================================
// EMBEDDED ASSETS
// =============================================================================

/// Serve OpenAPI YAML spec
async fn openapi_yaml() -> impl IntoResponse {
    const SPEC: &str = include_str!("openapi.yaml");
    ([(header::CONTENT_TYPE, "application/yaml")], SPEC)
}

/// Serve the embedded stylesheet.
async fn style_css() -> impl IntoResponse {
    const STYLE: &str = include_str!("style.css");
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE)
}

// =============================================================================
// CORS CONFIGURATION HELPER
// =============================================================================

/// Parse allowed origins from comma-separated environment variable.
///
/// # Environment Variable
/// `ALLOWED_ORIGINS` - Comma-separated list of allowed origins
///
/// # Default Origins
/// If not set or empty:
/// - http://localhost:3000
fn parse_allowed_origins() -> Vec<HeaderValue> {
    let origins_str =
        std::env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".to_string());

    if origins_str.trim().is_empty() {
        // Default origins
        return vec![HeaderValue::from_static("http://localhost:3000")];
    }

    origins_str
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with configurable output
    //
    // Environment variables:
    //   LOG_FORMAT  - "json" or "text" (default: "text")
    //   LOG_FILE    - path to log file (optional, enables file logging)
    //   LOG_ANSI    - "true"/"false" override ANSI colors (auto-detected by default)
    //   RUST_LOG    - standard env filter (default: "jotter_web=debug,tower_http=debug")
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let log_file = std::env::var("LOG_FILE").ok();
    let log_ansi = std::env::var("LOG_ANSI")
        .ok()
        .map(|v| v == "true" || v == "1");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jotter_web=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    // Optionally create a file appender with daily rotation
    let _file_guard = if let Some(ref path) = log_file {
        let file_dir = std::path::Path::new(path)
            .parent()
            .unwrap_or(std::path::Path::new("."));
        let file_name = std::path::Path::new(path)
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("jotter-web.log");
        let file_appender = tracing_appender::rolling::daily(file_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        if log_format == "json" {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking),
                )
                .init();
        } else {
            let mut layer = tracing_subscriber::fmt::layer().with_writer(non_blocking);
            if let Some(ansi) = log_ansi {
                layer = layer.with_ansi(ansi);
            } else {
                layer = layer.with_ansi(false); // no ANSI in files
            }
            registry.with(layer).init();
        }
        Some(guard)
    } else {
        // Console-only output
        if log_format == "json" {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        } else {
            let mut layer = tracing_subscriber::fmt::layer();
            if let Some(ansi) = log_ansi {
                layer = layer.with_ansi(ansi);
            }
            registry.with(layer).init();
        }
        None
    };

    info!(
        log_format = %log_format,
        log_file = log_file.as_deref().unwrap_or("(stdout)"),
        "Logging initialized"
    );

    // Get configuration from environment
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| defaults::SERVER_PORT.to_string())
        .parse()
        .unwrap_or(defaults::SERVER_PORT);

    // Seed the in-memory store
    let store = Arc::new(Store::with_starter_notes());
    info!(
        total_count = store.notes.count().await?,
        "Note store seeded"
    );

    let state = AppState { store };

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health_check))
        // OpenAPI spec
        .route("/openapi.yaml", get(openapi_yaml))
        // Pages
        .route("/", get(index_page))
        .route("/note/:id", get(note_page))
        .route("/new", get(new_note_page))
        .route("/empty", get(empty_page))
        .route("/assets/style.css", get(style_css))
        // Notes CRUD
        .route(
            "/api/notes",
            get(list_notes).post(create_note).delete(delete_notes),
        )
        .route(
            "/api/notes/:id",
            get(get_note).put(update_note).delete(delete_note),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer({
            let allowed_origins = parse_allowed_origins();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed_origins))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .max_age(std::time::Duration::from_secs(defaults::CORS_MAX_AGE_SECS))
        })
        .layer(RequestBodyLimitLayer::new(defaults::MAX_BODY_SIZE_BYTES))
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// =============================================================================
// HEALTH CHECK
// =============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// =============================================================================
// PAGE HANDLERS
// =============================================================================

async fn index_page(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let dashboard = state.store.notes.dashboard().await?;
    Ok(Html(views::index_page(&dashboard, chrono::Utc::now())))
}

async fn note_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = parse_note_id(&id).ok_or(PageError::NotFound)?;
    let note = state.store.notes.fetch(id).await?;
    Ok(Html(views::editor_page(Some(&note))))
}

async fn new_note_page() -> Html<String> {
    Html(views::editor_page(None))
}

async fn empty_page() -> Html<String> {
    Html(views::empty_page())
}

// =============================================================================
// NOTE API HANDLERS
// =============================================================================

/// Parse a note id from its URL path segment.
///
/// Ids that are not valid UUIDs cannot match any stored note, so they
/// surface as a lookup miss rather than a parse error.
fn parse_note_id(segment: &str) -> Option<Uuid> {
    Uuid::parse_str(segment).ok()
}

async fn list_notes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let notes = state.store.notes.list().await?;
    Ok(Json(notes))
}

async fn create_note(
    State(state): State<AppState>,
    Json(body): Json<CreateNoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let note = state.store.notes.insert(body).await?;
    Ok(Json(note))
}

async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_note_id(&id).ok_or_else(not_found)?;
    let note = state.store.notes.fetch(id).await?;
    Ok(Json(note))
}

async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateNoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_note_id(&id).ok_or_else(not_found)?;
    let note = state.store.notes.update(id, body).await?;
    Ok(Json(note))
}

async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_note_id(&id).ok_or_else(not_found)?;
    if state.store.notes.delete(id).await? == 0 {
        return Err(not_found());
    }
    Ok(Json(serde_json::json!({ "success": true })))
}

/// Body for DELETE /api/notes.
///
/// `ids` stays loosely typed: any JSON array counts as provided, and
/// elements that are not UUID strings are skipped the same way ids with no
/// matching note are.
#[derive(Debug, Default, Deserialize)]
struct DeleteNotesBody {
    #[serde(default)]
    all: Option<bool>,
    #[serde(default)]
    ids: Option<serde_json::Value>,
}

async fn delete_notes(
    State(state): State<AppState>,
    body: Option<Json<DeleteNotesBody>>,
) -> Result<impl IntoResponse, ApiError> {
    // A missing or malformed body behaves like an empty one
    let body = body.map(|Json(body)| body).unwrap_or_default();

    let ids = match body.ids {
        Some(serde_json::Value::Array(values)) => Some(
            values
                .iter()
                .filter_map(|value| value.as_str())
                .filter_map(|s| Uuid::parse_str(s).ok())
                .collect(),
        ),
        _ => None,
    };
    let req = BulkDeleteRequest {
        all: body.all.unwrap_or(false),
        ids,
    };

    let deleted = state.store.notes.bulk_delete(req).await?;
    Ok(Json(serde_json::json!({ "success": true, "deleted": deleted })))
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

#[derive(Debug)]
enum ApiError {
    Store(jotter_core::Error),
    NotFound(String),
    BadRequest(String),
}

/// 404 carrying the wire message the API contract promises.
fn not_found() -> ApiError {
    ApiError::NotFound("Note not found".to_string())
}

impl From<jotter_core::Error> for ApiError {
    fn from(err: jotter_core::Error) -> Self {
        match err {
            // The offending id stays in logs; clients get the bare message.
            jotter_core::Error::NoteNotFound(_) => not_found(),
            jotter_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Store(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Store(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

/// Errors on server-rendered pages respond with plain text, matching the
/// page routes' contract rather than the API's JSON envelope.
#[derive(Debug)]
enum PageError {
    NotFound,
    Internal(String),
}

impl From<jotter_core::Error> for PageError {
    fn from(err: jotter_core::Error) -> Self {
        match err {
            jotter_core::Error::NoteNotFound(_) => PageError::NotFound,
            other => PageError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> axum::response::Response {
        match self {
            PageError::NotFound => (StatusCode::NOT_FOUND, "Note not found").into_response(),
            PageError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
