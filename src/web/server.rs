use axum::{
    extract::{DefaultBodyLimit, Form, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::annotate::client::{AnnotationBackend, AnnotationClient, AnnotationError};
use crate::annotate::pipeline::AnnotatorPipeline;
use crate::cli::ServeArgs;
use crate::utils::validation;

/// Validation error message for the form route
pub const FORM_VALIDATION_ERROR: &str = "Please enter at least one sentence.";
/// Validation error message for the JSON API route
pub const API_VALIDATION_ERROR: &str = "Invalid input data.";

/// Gateway configuration resolved from CLI flags.
///
/// The annotation server location and the set of enabled routes are
/// explicit configuration; one binary covers every deployment.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Hostname of the annotation server
    pub annotation_host: String,
    /// Port of the annotation server
    pub annotation_port: u16,
    /// Whether to mount `POST /api/process`
    pub enable_api: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            annotation_host: "localhost".to_string(),
            annotation_port: 9000,
            enable_api: false,
        }
    }
}

/// Shared application state
pub struct AppState {
    /// Client handle for the annotation server, created once at startup
    pub backend: Arc<dyn AnnotationBackend>,
    /// The pipeline sent with every annotation request
    pub pipeline: AnnotatorPipeline,
}

/// Form body for `POST /process`. The field is optional so an absent
/// `text` key degrades to the structured validation error instead of a
/// framework rejection.
#[derive(Deserialize)]
struct ProcessForm {
    text: Option<String>,
}

/// JSON body for `POST /api/process`, same optionality as the form route
#[derive(Deserialize)]
struct ApiProcessRequest {
    text: Option<String>,
}

/// Errors surfaced from request handlers as JSON responses
#[derive(Debug)]
pub enum AppError {
    /// The annotation server call failed; details are logged server-side
    /// and never exposed to the caller.
    Annotation(AnnotationError),
}

impl From<AnnotationError> for AppError {
    fn from(e: AnnotationError) -> Self {
        AppError::Annotation(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Annotation(e) = self;
        tracing::error!("annotation backend failure: {e}");
        (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({
                "error": "Annotation service request failed."
            })),
        )
            .into_response()
    }
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server
/// fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with all routes and middleware configured.
#[allow(clippy::missing_panics_doc)] // Panics only on invalid governor config (constants are valid)
#[must_use]
pub fn create_router(backend: Arc<dyn AnnotationBackend>, config: &GatewayConfig) -> Router {
    let state = Arc::new(AppState {
        backend,
        pipeline: AnnotatorPipeline::default(),
    });

    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .unwrap();

    let mut app = Router::new()
        .route("/", get(index_handler))
        .route("/process", post(process_handler));

    // The JSON API route is opt-in
    if config.enable_api {
        app = app.route("/api/process", post(api_process_handler));
    }

    app.with_state(state).layer(
        ServiceBuilder::new()
            // Security headers for browser protection
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-frame-options"),
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            ))
            // Browser callers may live on another origin than the gateway
            .layer(CorsLayer::permissive())
            // IP-based rate limiting to prevent abuse
            .layer(GovernorLayer {
                config: Arc::new(governor_conf),
            })
            // Request timeout to prevent slow client attacks
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(30),
            ))
            // Limit concurrent requests to prevent DOS
            .layer(ConcurrencyLimitLayer::new(100))
            // Limit request body size (max text + form encoding overhead)
            .layer(DefaultBodyLimit::max(2 * 1024 * 1024)), // 2MB limit
    )
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let config = GatewayConfig {
        annotation_host: args.annotation_host.clone(),
        annotation_port: args.annotation_port,
        enable_api: args.api,
    };

    let backend = Arc::new(AnnotationClient::new(
        &config.annotation_host,
        config.annotation_port,
    ));
    let app = create_router(backend, &config);

    let addr = format!("{}:{}", args.address, args.port);
    println!(
        "Starting anno-gateway at http://{addr} (annotation server: {}:{})",
        config.annotation_host, config.annotation_port
    );

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Landing page handler
async fn index_handler() -> Html<&'static str> {
    tracing::info!("Index route accessed");
    Html(include_str!("templates/index.html"))
}

/// Check the submitted text before paying for a network round trip.
///
/// A missing or non-sentence text yields the route-specific validation
/// error (HTTP 200 with a structured body, the contract existing clients
/// rely on); oversized text yields 413. The backend is never contacted
/// for rejected input.
fn validate_text(text: Option<String>, validation_error: &'static str) -> Result<String, Response> {
    let Some(text) = text else {
        return Err(validation_response(validation_error));
    };

    if !validation::looks_like_sentence(&text) {
        return Err(validation_response(validation_error));
    }

    if let Some(msg) = validation::check_text_length(&text) {
        tracing::warn!("rejecting oversized text: {msg}");
        return Err((
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(serde_json::json!({ "error": "Text exceeds maximum length." })),
        )
            .into_response());
    }

    Ok(text)
}

fn validation_response(message: &str) -> Response {
    Json(serde_json::json!({ "error": message })).into_response()
}

/// Annotate text submitted from the landing page form
async fn process_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ProcessForm>,
) -> Result<Response, AppError> {
    let text = match validate_text(form.text, FORM_VALIDATION_ERROR) {
        Ok(text) => text,
        Err(rejection) => return Ok(rejection),
    };

    tracing::info!("Processing text: {text}");

    let result = state.backend.annotate(&text, &state.pipeline).await?;

    tracing::info!("Result: {result}");

    Ok(Json(serde_json::json!({ "result": result })).into_response())
}

/// Annotate text from a JSON body. Unlike the form route, the submitted
/// text and result are not logged.
async fn api_process_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ApiProcessRequest>,
) -> Result<Response, AppError> {
    let text = match validate_text(request.text, API_VALIDATION_ERROR) {
        Ok(text) => text,
        Err(rejection) => return Ok(rejection),
    };

    let result = state.backend.annotate(&text, &state.pipeline).await?;

    Ok(Json(serde_json::json!({ "result": result })).into_response())
}
