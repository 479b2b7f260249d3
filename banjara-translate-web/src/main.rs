mod config;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use banjara_translate::mt::{GoogleTranslateProvider, MachineTranslator};
use banjara_translate::{
    Dictionary, LexicalMatcher, MemoryStore, NewTranslation, TranslationMethod,
    TranslationRecord, TranslationService, TranslationStore,
};
use config::{MAX_HISTORY_LIMIT, ServerConfig};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub banjara_text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub banjara_text: String,
    pub telugu_text: String,
    pub english_text: String,
    pub method: TranslationMethod,
    /// False when the translation could not be added to the history
    pub saved: bool,
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub dictionary_entries: usize,
    pub translator: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TranslationService>,
    pub store: Arc<dyn TranslationStore>,
    pub history_limit: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    info!(?config, "Starting Banjara translation server");

    // An empty or broken dictionary is fatal
    let dictionary = match &config.dictionary_path {
        Some(path) => Dictionary::load_from_file(path)?,
        None => Dictionary::builtin()?,
    };
    info!(entries = dictionary.len(), "Dictionary loaded");

    let translator: Option<Arc<dyn MachineTranslator>> = match &config.google_api_key {
        Some(key) => Some(Arc::new(GoogleTranslateProvider::with_timeout(
            key.clone(),
            config.fallback_timeout,
        )?)),
        None => {
            warn!("GOOGLE_TRANSLATE_API_KEY not set, unmatched input will get placeholders");
            None
        }
    };

    let matcher = Arc::new(LexicalMatcher::new(Arc::new(dictionary)));
    let state = AppState {
        service: Arc::new(TranslationService::new(
            matcher,
            translator,
            config.service_config(),
        )),
        store: Arc::new(MemoryStore::new()),
        history_limit: config.history_limit,
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Server running at http://{}", config.bind_addr);

    axum::serve(listener, build_router(state)).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/health", get(health))
        .route("/api/translate", post(translate_text))
        .route("/api/translations", get(list_translations))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        dictionary_entries: state.service.matcher().dictionary().len(),
        translator: state.service.provider_name().map(str::to_string),
    })
}

async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let banjara_text = request
        .banjara_text
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    message: "Banjara text is required".to_string(),
                    details: None,
                }),
            )
        })?;

    let result = state.service.translate(&banjara_text).await;
    info!(
        method = ?result.method,
        chars = banjara_text.chars().count(),
        "Translated request"
    );
    debug!(
        "Translated '{}' → '{}' / '{}'",
        &banjara_text, &result.telugu, &result.english
    );

    // History is best effort: the user still gets the translation
    let saved = match state
        .store
        .append(NewTranslation {
            banjara_text: banjara_text.clone(),
            telugu_text: result.telugu.clone(),
            english_text: result.english.clone(),
        })
        .await
    {
        Ok(record) => {
            info!(id = record.id, "Translation saved");
            true
        }
        Err(e) => {
            error!(error = %e, "Failed to save translation");
            false
        }
    };

    Ok(Json(TranslateResponse {
        banjara_text,
        telugu_text: result.telugu,
        english_text: result.english,
        method: result.method,
        saved,
    }))
}

async fn list_translations(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<TranslationRecord>>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(state.history_limit)
        .clamp(1, MAX_HISTORY_LIMIT);

    state.store.list_recent(limit).await.map(Json).map_err(|e| {
        error!(error = %e, "Failed to fetch translations");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                message: "Failed to fetch translations".to_string(),
                details: Some(e.to_string()),
            }),
        )
    })
}
