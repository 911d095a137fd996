//! HTTP Server for the cosmos waitlist API.
//!
//! Serves the landing page's one wire contract, plus a health check and
//! an optional static mount for the built frontend.
//!
//! # API Endpoints
//!
//! | Method | Path              | Description                          |
//! |--------|-------------------|--------------------------------------|
//! | GET    | `/health`         | Health check                         |
//! | POST   | `/api/waitlist`   | Register a waitlist submission       |

use std::path::{Path, PathBuf};

use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;

use super::types::{error_response, WaitlistAck, WaitlistRequest};
use crate::error::{ValidationError, WaitlistError};
use crate::models::{GuestEmail, GuestName, MissionInterest, WaitlistEntry};
use crate::store::WaitlistStore;

/// Build the CORS layer.
///
/// Permissive by default for development; `COSMOS_CORS_ORIGIN` narrows
/// it to a single origin for deployments where the page is hosted
/// elsewhere.
fn cors_layer() -> CorsLayer {
    let origin = match std::env::var("COSMOS_CORS_ORIGIN") {
        Ok(raw) => match raw.parse::<HeaderValue>() {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                eprintln!("⚠️  Invalid COSMOS_CORS_ORIGIN '{}', allowing any origin", raw);
                AllowOrigin::any()
            }
        },
        Err(_) => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Build the application router.
///
/// When `static_dir` is set, unmatched paths fall back to the built
/// frontend so a single process can host the whole site.
pub fn app(store: WaitlistStore, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/waitlist", post(join_waitlist));

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(cors_layer()).with_state(store)
}

/// Start the HTTP server.
pub async fn start_server(
    host: &str,
    port: u16,
    static_dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = WaitlistStore::new();
    let router = app(store, static_dir.as_deref());

    let addr = format!("{}:{}", host, port);
    println!("🚀 Cosmos waitlist server running on http://{}", addr);
    println!("   POST /api/waitlist - Register a submission");
    println!("   GET  /health       - Health check");
    if let Some(ref dir) = static_dir {
        println!("   Serving frontend from {}", dir.display());
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "cosmos",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "waitlist": "POST /api/waitlist"
        }
    }))
}

/// Map a waitlist error to its HTTP rejection.
fn reject(status: StatusCode, error: &WaitlistError) -> (StatusCode, Json<Value>) {
    (status, Json(error_response(&error.to_string())))
}

/// Waitlist registration endpoint
async fn join_waitlist(
    State(store): State<WaitlistStore>,
    Json(request): Json<WaitlistRequest>,
) -> Result<(StatusCode, Json<WaitlistAck>), (StatusCode, Json<Value>)> {
    let invalid = |e: ValidationError| reject(StatusCode::UNPROCESSABLE_ENTITY, &e.into());

    let name = GuestName::parse(&request.name).map_err(invalid)?;
    let email = GuestEmail::parse(&request.email).map_err(invalid)?;
    let mission = MissionInterest::parse(&request.mission).map_err(invalid)?;

    let entry = WaitlistEntry::new(name, email, mission, request.message, request.consent);

    let position = store.insert(entry.clone()).await.map_err(|e| {
        eprintln!("❌ Rejected submission: {}", e);
        reject(StatusCode::CONFLICT, &e)
    })?;

    println!(
        "📨 New waitlist entry #{}: {} <{}>{}",
        position,
        entry.name.as_str(),
        entry.email.as_str(),
        entry
            .mission
            .map(|m| format!(" ({})", m.as_str()))
            .unwrap_or_default()
    );

    Ok((StatusCode::CREATED, Json(WaitlistAck::new(&entry, position))))
}
