use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dj_song_matcher::{
    error::MatcherError,
    providers::{CatalogProvider, DemoProvider, JsonFileProvider},
    Catalog, MatchConfig, MatchEngine, MatchResult, ScoredSong,
};

#[derive(Clone)]
struct AppState {
    engine: Arc<MatchEngine>,
}

#[derive(Debug, Deserialize)]
struct SearchRequest {
    query: String,
    #[serde(default)]
    max_results: Option<usize>,
    #[serde(default)]
    min_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ValidateRequest {
    title: String,
    #[serde(default)]
    artist: String,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    query: String,
    results: Vec<ScoredSong>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct CatalogStatsResponse {
    songs: usize,
    artists: usize,
    ranker: String,
    config: MatchConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "song_matcher_server=debug,dj_song_matcher=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog_path = std::env::var("CATALOG_PATH").ok();
    let config = match std::env::var("CONFIG_PATH") {
        Ok(path) => MatchConfig::from_json_file(path)?,
        Err(_) => MatchConfig::default(),
    };
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8090);

    tracing::info!("🚀 Starting DJ Song Matcher Server");
    tracing::info!("⚙️ Config: {}", config);
    tracing::info!("🔌 Port: {}", port);

    let provider: Box<dyn CatalogProvider> = match &catalog_path {
        Some(path) => Box::new(JsonFileProvider::new(path)),
        None => Box::new(DemoProvider),
    };
    let engine = MatchEngine::new(Catalog::from_provider(provider.as_ref())?).with_config(config);

    let state = AppState {
        engine: Arc::new(engine),
    };

    // Build router
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/search", post(search_handler))
        .route("/v1/validate", post(validate_handler))
        .route("/v1/catalog/stats", get(stats_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("🎧 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: dj_song_matcher::VERSION.to_string(),
    })
}

async fn search_handler(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    tracing::debug!("Search request: {:?}", req);

    let config = state.engine.config();
    let min_score = req.min_score.unwrap_or(config.min_score);
    if !(0.0..=1.0).contains(&min_score) {
        return Err(MatcherError::InvalidConfig(format!(
            "min_score must be within [0, 1], got {}",
            min_score
        ))
        .into());
    }

    let results = state.engine.search(
        &req.query,
        req.max_results.unwrap_or(config.max_results),
        min_score,
    );

    tracing::info!("🔍 {} → {} suggestions", req.query, results.len());

    Ok(Json(SearchResponse {
        query: req.query,
        results,
    }))
}

async fn validate_handler(
    State(state): State<AppState>,
    Json(req): Json<ValidateRequest>,
) -> Json<MatchResult> {
    let result = state.engine.validate(&req.title, &req.artist);

    tracing::info!(
        "🎵 \"{}\" by {} → {:?} ({:.0}%)",
        req.title,
        req.artist,
        result.kind,
        result.confidence * 100.0
    );

    Json(result)
}

async fn stats_handler(State(state): State<AppState>) -> Json<CatalogStatsResponse> {
    let catalog = state.engine.catalog();

    Json(CatalogStatsResponse {
        songs: catalog.len(),
        artists: catalog.artist_count(),
        ranker: state.engine.ranker_name().to_string(),
        config: *state.engine.config(),
    })
}

// Error handling
struct AppError(MatcherError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            MatcherError::InvalidConfig(message) => (StatusCode::BAD_REQUEST, message),
            e => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        tracing::error!("❌ Error: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<MatcherError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
