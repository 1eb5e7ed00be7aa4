//! HTTP server.
//!
//! Read-only JSON API over the knowledge store. Routes are grouped per
//! domain under [`crate::routes`]; this module owns the shared state, the
//! error-to-response mapping and the server entry point.
//!
//! # Error contract
//!
//! ```json
//! { "error": "Planet \"Pluto\" not found", "suggestion": "Valid planets: ..." }
//! ```
//!
//! `400` for malformed or out-of-range input, `404` for unknown keys, `500`
//! for store failures (detail is logged, never returned).
//!
//! # CORS
//!
//! All origins, methods and headers are permitted.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqlitePool};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db;
use crate::error::LookupError;
use crate::routes;
use crate::seed;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }

    /// Check out one connection for the duration of a request. It goes back
    /// to the pool when the handler drops it.
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, AppError> {
        Ok(self.pool.acquire().await.map_err(LookupError::from)?)
    }
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

/// A [`LookupError`] on its way out as an HTTP response.
#[derive(Debug)]
pub struct AppError(pub LookupError);

impl From<LookupError> for AppError {
    fn from(err: LookupError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            LookupError::Validation { message } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message,
                    suggestion: None,
                },
            ),
            LookupError::NotFound {
                message,
                suggestion,
            } => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: message,
                    suggestion,
                },
            ),
            LookupError::Internal(err) => {
                tracing::error!(error = %format!("{:#}", err), "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Internal server error".to_string(),
                        suggestion: None,
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Parse an integer path segment, reporting junk as a validation error.
pub fn parse_number(raw: &str, what: &str) -> Result<i64, AppError> {
    raw.trim().parse::<i64>().map_err(|_| {
        AppError(LookupError::validation(format!(
            "{} must be an integer, got '{}'",
            what, raw
        )))
    })
}

/// `true` unless the parameter is present and is not `"true"`.
pub fn flag(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().eq_ignore_ascii_case("true"))
}

/// Treat blank query parameters as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ============ Router ============

/// Build the full router over `state`.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_health))
        .merge(routes::tarot::routes())
        .merge(routes::qabalah::routes())
        .merge(routes::astrology::routes())
        .merge(routes::rituals::routes())
        .fallback(handle_fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Connect, make sure the dataset is present, then serve until terminated.
///
/// The store check runs before the listener is bound, so a missing dataset
/// stops the process without ever accepting a connection.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let pool = db::connect(config).await?;
    let outcome = seed::ensure_seeded(&pool, config.server.auto_seed).await?;
    tracing::info!(
        reloaded = outcome.reloaded,
        cards = outcome.counts.cards,
        fingerprint = %outcome.fingerprint,
        "knowledge store ready"
    );

    let state = AppState::new(pool, config.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    tracing::info!("arcanum listening on http://{}", config.server.bind);
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn handle_fallback() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "message": "Visit / for API documentation"
        })),
    )
}

// ============ GET / ============

async fn handle_index() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Arcanum esoteric knowledge API",
        "description": "A read-only REST API for esoteric studies including Tarot, Qabalah, Astrology, and Ritual practices",
        "version": env!("CARGO_PKG_VERSION"),
        "features": [
            "Complete 78-card tarot deck with multiple system descriptions",
            "Tree of Life: 10 Sephiroth and 22 Paths",
            "Astrological correspondences: Planets and Zodiac Signs",
            "Esoteric rituals from Golden Dawn and Hermetic traditions",
            "Cross-referenced correspondences between all systems",
            "Comprehensive filtering and search capabilities"
        ],
        "endpoints": {
            "tarot": {
                "/cards": "Get all tarot cards (?arcana, ?suit, ?element, ?systems)",
                "/cards/{number}": "Get card by number (0-77)",
                "/cards/name/{name}": "Get card by name",
                "/cards/random": "Get random card",
                "/cards/daily": "Get the card of the day",
                "/cards/search?q={query}": "Search cards",
                "/cards/{number}/correspondences": "Get card with full qabalah & astrology links",
                "/cards/{number}/system/{system}": "Get one system's description of a card",
                "/systems": "List tarot systems"
            },
            "qabalah": {
                "/api/qabalah/sephiroth": "Get all 10 Sephiroth",
                "/api/qabalah/sephiroth/{number}": "Get Sephirah by number (1-10)",
                "/api/qabalah/sephiroth/name/{name}": "Get Sephirah by name",
                "/api/qabalah/paths": "Get all 22 Paths",
                "/api/qabalah/paths/{number}": "Get Path by number (11-32)",
                "/api/qabalah/paths/{number}/card": "Get Path with full tarot card data",
                "/api/qabalah/tree": "Get complete Tree of Life structure"
            },
            "astrology": {
                "/api/astrology/planets": "Get all planets",
                "/api/astrology/planets/{name}": "Get planet by name",
                "/api/astrology/signs": "Get all zodiac signs (?element, ?modality)",
                "/api/astrology/signs/{name}": "Get sign by name",
                "/api/astrology/elements": "Get elemental correspondences",
                "/api/astrology/modalities": "Get modality information",
                "/api/astrology/planetary-hours": "Get planetary days and hours",
                "/api/astrology/correspondences": "Get all astrological correspondences"
            },
            "rituals": {
                "/api/rituals": "Get all rituals (?tradition, ?category, ?difficulty, ?instructions)",
                "/api/rituals/{id}": "Get ritual by ID",
                "/api/rituals/name/{name}": "Get ritual by name or abbreviation",
                "/api/rituals/traditions": "List ritual traditions",
                "/api/rituals/categories": "List ritual categories",
                "/api/rituals/beginner": "Get beginner-friendly rituals",
                "/api/rituals/daily": "Get daily practice rituals",
                "/api/rituals/search?q={query}": "Search rituals",
                "/api/rituals/by-planet/{planet}": "Get rituals by planetary focus",
                "/api/rituals/by-element/{element}": "Get rituals by elemental focus",
                "/api/rituals/practice-guide": "Get practice progression guide"
            }
        },
        "examples": [
            "/cards/0/correspondences",
            "/api/qabalah/tree",
            "/api/qabalah/paths/11/card",
            "/api/astrology/planets/Venus",
            "/api/astrology/signs/Leo",
            "/api/rituals/name/LBRP",
            "/api/rituals?difficulty=Beginner"
        ]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_defaults_to_true() {
        assert!(flag(None));
        assert!(flag(Some("TRUE")));
        assert!(!flag(Some("false")));
        assert!(!flag(Some("0")));
    }

    #[test]
    fn test_parse_number_rejects_junk() {
        assert_eq!(parse_number("12", "Path number").unwrap(), 12);
        let err = parse_number("twelve", "Path number").unwrap_err();
        assert!(matches!(err.0, LookupError::Validation { .. }));
    }

    #[test]
    fn test_error_status_mapping() {
        let resp = AppError(LookupError::validation("bad")).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let resp = AppError(LookupError::not_found("gone")).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let resp = AppError(LookupError::Internal(anyhow::anyhow!("db locked"))).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
