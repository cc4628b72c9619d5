use axum::{
    extract::{Path, Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use log::error;
use serde::Serialize;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServiceConfig;
use crate::lookup::{self, LookupError};

// State for lookup API handlers
pub struct AppState {
    pub pool: SqlitePool,
    pub allowed_hosts: Vec<String>,
}

#[derive(Serialize)]
struct AudioResponse {
    language: String,
    url: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Run the HTTP lookup server (for serve command)
pub fn serve_lookup(config: ServiceConfig, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    println!("Store: {}", config.database_url);
    println!("Allowed hosts: {}", config.allowed_hosts.join(", "));
    println!("Listening on: http://[::]:{} (IPv4 + IPv6)", port);
    println!("Endpoint: GET /audio/{{language}}/");

    // Create tokio runtime and run server
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let pool = crate::db::open_pool(&config.database_url).await?;
        crate::db::init_schema(&pool).await?;

        let state = Arc::new(AppState {
            pool,
            allowed_hosts: config.allowed_hosts.clone(),
        });

        let app = build_router(state, &config.cors_origins);

        let listener = tokio::net::TcpListener::bind(format!("[::]:{}", port))
            .await
            .map_err(|e| format!("Failed to bind to port {}: {}", port, e))?;
        axum::serve(listener, app)
            .await
            .map_err(|e| format!("Server error: {}", e))?;

        Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
    })
    .map_err(|e| e as Box<dyn std::error::Error>)?;

    Ok(())
}

/// Build the application router. Split out from serve_lookup so tests can
/// mount it on an ephemeral port.
pub fn build_router(state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let cors = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Register both with and without the trailing slash so clients written
    // against either form work
    Router::new()
        .route("/audio/{language}", get(audio_handler))
        .route("/audio/{language}/", get(audio_handler))
        .layer(middleware::from_fn_with_state(state.clone(), validate_host))
        .layer(cors)
        .with_state(state)
}

/// Strip the port from a Host header value, handling bracketed IPv6 literals
fn host_without_port(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        // [::1]:8000 or [::1]
        match rest.find(']') {
            Some(end) => &rest[..end],
            None => host,
        }
    } else {
        match host.rfind(':') {
            Some(idx) => &host[..idx],
            None => host,
        }
    }
}

// Reject requests whose Host header is not in the allowlist
async fn validate_host(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if state.allowed_hosts.iter().any(|h| h == "*") {
        return next.run(request).await;
    }

    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(host_without_port);

    match host {
        Some(host) if state.allowed_hosts.iter().any(|h| h == host) => next.run(request).await,
        _ => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid Host header.".to_string(),
            }),
        )
            .into_response(),
    }
}

// Lookup endpoint handler
async fn audio_handler(
    State(state): State<Arc<AppState>>,
    Path(language): Path<String>,
) -> impl IntoResponse {
    match lookup::resolve(&state.pool, &language).await {
        Ok(record) => (
            StatusCode::OK,
            Json(AudioResponse {
                language: record.language().to_string(),
                url: record.url().to_string(),
            }),
        )
            .into_response(),
        Err(err @ LookupError::NotFound { .. }) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
            .into_response(),
        Err(LookupError::Unavailable(e)) => {
            // Log the store failure but keep connection details out of the body
            error!("Lookup for '{}' failed, store unavailable: {}", language, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error.".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::host_without_port;

    #[test]
    fn strips_port_from_hostname() {
        assert_eq!(host_without_port("localhost:8000"), "localhost");
        assert_eq!(host_without_port("localhost"), "localhost");
    }

    #[test]
    fn handles_ipv6_literals() {
        assert_eq!(host_without_port("[::1]:8000"), "::1");
        assert_eq!(host_without_port("[::1]"), "::1");
    }
}
