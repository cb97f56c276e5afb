use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use ogospeak::{Context, History, HistoryDocument, translate_sentence, translate_word};

#[derive(Parser)]
#[command(name = "ogospeak-web", about = "HTTP API for the Ogospeak translator")]
struct Args {
    /// Port to listen on
    #[arg(long, default_value_t = 3000, value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,
}

#[derive(Serialize, Deserialize)]
pub struct WordRequest {
    #[serde(rename = "english-word", default)]
    pub word: String,
}

#[derive(Serialize, Deserialize)]
pub struct WordResponse {
    #[serde(rename = "ogo-word")]
    pub word: String,
}

#[derive(Serialize, Deserialize)]
pub struct SentenceRequest {
    #[serde(rename = "english-sentence", default)]
    pub sentence: String,
}

#[derive(Serialize, Deserialize)]
pub struct SentenceResponse {
    #[serde(rename = "ogo-sentence")]
    pub sentence: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone)]
pub struct AppState {
    pub context: Arc<Context>,
    pub history: Arc<History>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let state = AppState {
        context: Arc::new(Context::default()),
        history: Arc::new(History::new()),
    };

    // Build router
    let app = Router::new()
        .route("/word", post(handle_word))
        .route("/sentence", post(handle_sentence))
        .route("/history", get(handle_history))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(5)))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    info!("🚀 Ogospeak server running on port {}", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn handle_word(
    State(state): State<AppState>,
    Json(request): Json<WordRequest>,
) -> Result<Json<WordResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.word.is_empty() {
        return Err(bad_request(
            "Request body must have 'english-word' field in it",
        ));
    }

    info!("Translating word '{}'", &request.word);

    let translated = translate_word(&state.context, &state.history, &request.word)
        .await
        .map_err(|e| bad_request(&e.to_string()))?;

    Ok(Json(WordResponse { word: translated }))
}

async fn handle_sentence(
    State(state): State<AppState>,
    Json(request): Json<SentenceRequest>,
) -> Result<Json<SentenceResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.sentence.is_empty() {
        return Err(bad_request(
            "Request body must have 'english-sentence' field in it",
        ));
    }

    info!("Translating sentence '{}'", &request.sentence);

    let translated = translate_sentence(&state.context, &state.history, &request.sentence)
        .await
        .map_err(|e| bad_request(&e.to_string()))?;

    Ok(Json(SentenceResponse {
        sentence: translated,
    }))
}

async fn handle_history(State(state): State<AppState>) -> Json<HistoryDocument> {
    Json(HistoryDocument::snapshot(&state.history))
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
