//! HTTP gateway for the SleepSense assistant.
//!
//! Exposes the pipeline over plain JSON routes plus a Bot Framework
//! compatible `/api/messages` endpoint:
//!
//! - `GET  /`                      — service info
//! - `GET  /health`                — liveness and configuration summary
//! - `GET  /api/knowledge`         — knowledge base domains and section keys
//! - `GET  /api/docs`              — endpoint documentation
//! - `POST /api/chat/test`         — answer a single message
//! - `POST /api/chat/batch-test`   — answer several messages in sequence
//! - `POST /api/messages`          — Bot Framework activities
//!
//! Built on Axum.

pub mod activity;

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use activity::{Activity, ActivityResponse, CONVERSATION_UPDATE, MESSAGE};
use sleepsense_agent::{AssistantPipeline, FALLBACK_RESPONSE, SAMPLE_QUERIES, WELCOME_MESSAGE};
use sleepsense_config::AppConfig;
use sleepsense_core::Domain;
use sleepsense_knowledge::KnowledgeStore;

const SERVICE_NAME: &str = "SleepSense OSA Medical Assistant";

const AVAILABLE_ENDPOINTS: &[&str] = &[
    "GET /",
    "GET /health",
    "GET /api/knowledge",
    "GET /api/docs",
    "POST /api/chat/test",
    "POST /api/chat/batch-test",
    "POST /api/messages",
];

const DOCS_DISCLAIMER: &str = "Informasi yang diberikan adalah untuk edukasi. SleepSense adalah alat screening - konsultasi dokter spesialis untuk diagnosis dan terapi definitif.";

/// Shared application state for the gateway.
pub struct GatewayState {
    pub config: AppConfig,
    pub pipeline: Arc<AssistantPipeline>,
    pub start_time: chrono::DateTime<chrono::Utc>,
}

impl GatewayState {
    pub fn new(config: AppConfig, pipeline: Arc<AssistantPipeline>) -> Self {
        Self {
            config,
            pipeline,
            start_time: chrono::Utc::now(),
        }
    }
}

pub type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
///
/// Layers applied:
/// - Permissive CORS (the chat page may be served from anywhere)
/// - Request body size limit (1 MB)
/// - HTTP trace logging
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/knowledge", get(knowledge_handler))
        .route("/api/docs", get(docs_handler))
        .route("/api/chat/test", post(chat_test_handler))
        .route("/api/chat/batch-test", post(batch_test_handler))
        .route("/api/messages", post(messages_handler))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Start the gateway HTTP server.
///
/// Builds the provider, knowledge store and pipeline once, then serves
/// until Ctrl-C or SIGTERM.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let provider = sleepsense_providers::build_from_config(&config)?;
    let knowledge = Arc::new(KnowledgeStore::load(config.knowledge.path.as_deref())?);
    let pipeline = Arc::new(AssistantPipeline::from_config(&config, provider, knowledge));

    let state = Arc::new(GatewayState::new(config, pipeline));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Gateway listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

// --- Handlers ---

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<&'static str>,
    timestamp: String,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            help: None,
            timestamp: now(),
        }
    }
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

async fn root_handler(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": SERVICE_NAME,
        "description": "AI-powered medical assistant untuk OSA monitoring system",
        "api_provider": state.pipeline.provider_name(),
        "model": state.pipeline.model(),
        "endpoints": {
            "health": "/health",
            "bot": "/api/messages",
            "knowledge": "/api/knowledge",
            "test": "/api/chat/test",
            "batch_test": "/api/chat/batch-test",
            "docs": "/api/docs",
        },
        "features": [
            "OSA medical education",
            "SleepSense device support",
            "Troubleshooting assistance",
            "Data interpretation guidance",
        ],
        "status": "running",
        "timestamp": now(),
    }))
}

#[derive(Serialize, Deserialize)]
struct HealthResponse {
    status: String,
    service: String,
    timestamp: String,
    api_provider: String,
    model: String,
    version: String,
    uptime_secs: i64,
    active_users: usize,
}

async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    let uptime = chrono::Utc::now() - state.start_time;
    Json(HealthResponse {
        status: "healthy".into(),
        service: SERVICE_NAME.into(),
        timestamp: now(),
        api_provider: state.pipeline.provider_name().into(),
        model: state.pipeline.model().into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_secs: uptime.num_seconds(),
        active_users: state.pipeline.history().user_count().await,
    })
}

async fn knowledge_handler(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let knowledge = state.pipeline.knowledge();
    let domains: serde_json::Map<String, serde_json::Value> = Domain::ALL
        .iter()
        .map(|d| (d.to_string(), serde_json::json!(knowledge.keys(*d))))
        .collect();

    Json(serde_json::json!({
        "sections": Domain::ALL.iter().map(Domain::as_str).collect::<Vec<_>>(),
        "total_sections": Domain::ALL.len(),
        "total_entries": knowledge.len(),
        "description": "SleepSense research paper knowledge base",
        "sample_sections": domains,
        "timestamp": now(),
    }))
}

async fn docs_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "title": "SleepSense OSA Medical Assistant API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /": "Service information dan available endpoints",
            "GET /health": "Health check dengan status konfigurasi",
            "GET /api/knowledge": "Knowledge base information dari research paper",
            "GET /api/docs": "API documentation (this endpoint)",
            "POST /api/chat/test": "Test endpoint untuk single chat",
            "POST /api/chat/batch-test": "Test endpoint untuk beberapa pertanyaan sekaligus",
            "POST /api/messages": "Bot Framework endpoint",
        },
        "test_examples": {
            "chat": {
                "url": "/api/chat/test",
                "method": "POST",
                "headers": {"Content-Type": "application/json"},
                "body": {
                    "message": SAMPLE_QUERIES[0],
                    "user_id": "test-user",
                },
            },
            "batch": {
                "url": "/api/chat/batch-test",
                "method": "POST",
                "body": {
                    "messages": &SAMPLE_QUERIES[..2],
                    "user_id": "batch-test-user",
                },
            },
        },
        "sample_queries": SAMPLE_QUERIES,
        "medical_disclaimer": DOCS_DISCLAIMER,
        "timestamp": now(),
    }))
}

#[derive(Deserialize)]
struct ChatTestRequest {
    #[serde(default)]
    message: Option<String>,
    #[serde(default, alias = "userId")]
    user_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct ChatTestResponse {
    success: bool,
    response: String,
    timestamp: String,
    user_id: String,
    api_provider: String,
    model: String,
    message_length: usize,
    response_time_ms: u64,
}

/// `POST /api/chat/test` — answer one message through the full pipeline.
async fn chat_test_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatTestRequest>,
) -> Result<Json<ChatTestResponse>, HandlerError> {
    let message = payload
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Message is required")),
            )
        })?;
    let user_id = payload.user_id.unwrap_or_else(|| "test-user".into());

    info!(user_id = %user_id, message_len = message.len(), "Chat test request");

    let started = Instant::now();
    match state.pipeline.process(&user_id, &message).await {
        Ok(response) => {
            let response_time_ms = started.elapsed().as_millis() as u64;
            Ok(Json(ChatTestResponse {
                success: true,
                message_length: response.chars().count(),
                response,
                timestamp: now(),
                user_id,
                api_provider: state.pipeline.provider_name().into(),
                model: state.pipeline.model().into(),
                response_time_ms,
            }))
        }
        Err(e) => {
            tracing::error!(user_id = %user_id, error = %e, "Chat test failed");
            let mut body = ErrorResponse::new(e.to_string());
            body.help = Some("Check your Gemini API key and internet connection");
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(body)))
        }
    }
}

#[derive(Deserialize)]
struct BatchTestRequest {
    #[serde(default)]
    messages: Option<serde_json::Value>,
    #[serde(default, alias = "userId")]
    user_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct BatchItem {
    query: String,
    success: bool,
    #[serde(default)]
    response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response_length: Option<usize>,
    timestamp: String,
}

#[derive(Serialize, Deserialize)]
struct BatchTestResponse {
    success: bool,
    total_queries: usize,
    successful_queries: usize,
    total_time_ms: u64,
    average_time_ms: u64,
    results: Vec<BatchItem>,
    timestamp: String,
}

/// `POST /api/chat/batch-test` — answer several messages one after another.
///
/// Item `i` is answered as user `{user_id}-{i}`, so items do not share history.
async fn batch_test_handler(
    State(state): State<SharedState>,
    Json(payload): Json<BatchTestRequest>,
) -> Result<Json<BatchTestResponse>, HandlerError> {
    let messages: Vec<String> = payload
        .messages
        .as_ref()
        .and_then(serde_json::Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
                .collect()
        })
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Messages should be an array")),
            )
        })?;
    let user_id = payload.user_id.unwrap_or_else(|| "batch-test-user".into());

    let started = Instant::now();
    let mut results = Vec::with_capacity(messages.len());

    for (i, message) in messages.into_iter().enumerate() {
        let item_user = format!("{user_id}-{i}");
        info!(user_id = %item_user, "Batch item {}", i + 1);

        let item = match state.pipeline.process(&item_user, &message).await {
            Ok(response) => BatchItem {
                query: message,
                success: true,
                response_length: Some(response.chars().count()),
                response: Some(response),
                error: None,
                timestamp: now(),
            },
            Err(e) => {
                warn!(user_id = %item_user, error = %e, "Batch item failed");
                BatchItem {
                    query: message,
                    success: false,
                    response: None,
                    error: Some(e.to_string()),
                    response_length: None,
                    timestamp: now(),
                }
            }
        };
        results.push(item);
    }

    let total_time_ms = started.elapsed().as_millis() as u64;
    let total_queries = results.len();
    Ok(Json(BatchTestResponse {
        success: true,
        total_queries,
        successful_queries: results.iter().filter(|r| r.success).count(),
        total_time_ms,
        average_time_ms: if total_queries == 0 {
            0
        } else {
            (total_time_ms as f64 / total_queries as f64).round() as u64
        },
        results,
        timestamp: now(),
    }))
}

/// `POST /api/messages` — Bot Framework activity handler.
///
/// Message activities are answered through the pipeline (falling back to
/// the fixed apology on failure); member additions get the welcome text.
/// Other activity types are acknowledged with no replies.
async fn messages_handler(
    State(state): State<SharedState>,
    Json(activity): Json<Activity>,
) -> Json<ActivityResponse> {
    let mut activities = Vec::new();

    match activity.kind.as_str() {
        MESSAGE => {
            let text = activity.text.as_deref().unwrap_or_default();
            info!(user_id = %activity.from.id, "Bot message received");
            let reply = if text.trim().is_empty() {
                FALLBACK_RESPONSE.to_string()
            } else {
                state.pipeline.respond(&activity.from.id, text).await
            };
            activities.push(activity.reply(reply));
        }
        CONVERSATION_UPDATE => {
            for member in activity.new_members() {
                info!(member = %member.id, "Welcoming new member");
                let mut welcome = activity.reply(WELCOME_MESSAGE);
                welcome.recipient = member.clone();
                activities.push(welcome);
            }
        }
        other => {
            tracing::debug!(kind = other, "Ignoring activity");
        }
    }

    Json(ActivityResponse { activities })
}

async fn not_found_handler() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "Endpoint not found",
            "available_endpoints": AVAILABLE_ENDPOINTS,
            "timestamp": now(),
        })),
    )
}
