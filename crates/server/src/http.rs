//! HTTP Endpoints
//!
//! The routes the voice platform and the companion display talk to.

use axum::{
    extract::{Json, State},
    http::{header, HeaderMap, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use santa_agent_tools::ToolExecutor;

use crate::state::AppState;
use crate::{swaig, swml};

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        &state.config.server.cors_origins,
        state.config.server.cors_enabled,
    );
    let web_dir = state.config.agent.web_dir.clone();

    Router::new()
        .route("/api/info", get(api_info))
        .route("/health", get(health_check))
        // The platform POSTs here at call start; GET is for manual inspection
        .route("/swml", get(swml_document).post(swml_document))
        .route("/swml/swaig", post(swaig_webhook))
        // Everything else is the companion display (HTML, JS, videos)
        .fallback_service(ServeDir::new(web_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If cors_origins is empty, allows any origin: the display assets are
///   public and the webhook carries no credentials
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(true)
}

/// System information
async fn api_info(State(state): State<AppState>) -> Json<Value> {
    let config = &state.config;
    Json(json!({
        "agent": "Santa Claus",
        "version": env!("CARGO_PKG_VERSION"),
        "christmas_year": config.agent.christmas_year,
        "status": "Ready for Christmas wishes!",
        "endpoints": {
            "ui": "/",
            "swml": "/swml",
            "swaig": "/swml/swaig",
            "health": "/health",
        },
    }))
}

/// Health check
async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let provider_configured = state.config.provider.is_configured();
    Json(json!({
        "status": "healthy",
        "message": "Ho ho ho! Santa is ready!",
        "tools": state.tools.len(),
        "provider_configured": provider_configured,
    }))
}

/// SWML document for an incoming call
async fn swml_document(State(state): State<AppState>, headers: HeaderMap) -> Json<Value> {
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost:5000");
    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|h| h.to_str().ok());
    let base = swml::base_url(host, proto);

    tracing::info!(base_url = %base, "serving SWML document");

    let document = swml::build_document(&base, &state.config, &state.tools.list_tools());
    Json(document)
}

/// Tool invocation webhook
async fn swaig_webhook(
    State(state): State<AppState>,
    Json(request): Json<swaig::SwaigRequest>,
) -> Json<Value> {
    Json(swaig::dispatch(&state.tools, request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use santa_agent_config::Settings;

    #[test]
    fn test_router_creation() {
        let state = AppState::new(Settings::default());
        let _ = create_router(state);
    }

    #[test]
    fn test_cors_layer_variants() {
        let _ = build_cors_layer(&[], true);
        let _ = build_cors_layer(&[], false);
        let _ = build_cors_layer(&["https://santa.example.com".to_string()], true);
    }
}
