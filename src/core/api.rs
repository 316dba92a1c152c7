//! HTTP API
//!
//! JSON endpoints over a shared [`WordResolver`].
//!
//! ## Endpoints
//! - `GET /` - Liveness banner
//! - `GET /health` - Health check
//! - `POST /resolve` - Resolve a word (`{"query": "..."}`)
//! - `GET /suggest?q=` - English -> Tamil candidates
//! - `POST /finalize` - Create or overwrite an entry (`{"lemma": "...", "body": "..."}`)
//! - `GET /word-of-the-day` - Most searched term
//! - `GET /stats` - Per-source statistics

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json, Query as QueryParams, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::core::resolver::{Outcome, ResolveError, WordResolver};

pub const BANNER: &str = "அகராதி தளம் இயங்குகிறது (Server Active)";

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct FinalizeRequest {
    #[serde(default)]
    pub lemma: String,
    pub body: Option<String>,
}

// ============================================================================
// API Server
// ============================================================================

pub struct ApiServer {
    addr: SocketAddr,
    resolver: Arc<WordResolver>,
}

impl ApiServer {
    pub fn new(addr: SocketAddr, resolver: Arc<WordResolver>) -> Self {
        Self { addr, resolver }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Bind the configured address and serve until `shutdown` completes.
    pub async fn serve<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.addr).await?;
        serve_on(listener, self.resolver, shutdown).await
    }
}

/// Build the application router.
pub fn router(resolver: Arc<WordResolver>) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health_check))
        .route("/resolve", post(resolve))
        .route("/suggest", get(suggest))
        .route("/finalize", post(finalize))
        .route("/word-of-the-day", get(word_of_the_day))
        .route("/stats", get(stats))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(resolver)
}

/// Serve on an already bound listener until `shutdown` completes.
pub async fn serve_on<F>(
    listener: TcpListener,
    resolver: Arc<WordResolver>,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    log::info!("Sollagarathi API listening on http://{}", addr);

    axum::serve(listener, router(resolver))
        .with_graceful_shutdown(async move {
            shutdown.await;
            log::info!("API server shutting down");
        })
        .await
}

// ============================================================================
// HTTP Handlers
// ============================================================================

async fn banner() -> &'static str {
    BANNER
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn resolve(
    State(resolver): State<Arc<WordResolver>>,
    payload: Result<Json<ResolveRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            log::warn!("Rejected resolve request: {}", rejection.body_text());
            let outcome = Outcome::Error {
                message: rejection.body_text(),
            };
            return (rejection.status(), Json(outcome)).into_response();
        }
    };
    log::info!("Searching for: {:?}", request.query);
    let outcome = resolver.resolve(&request.query).await;
    let status = if outcome.is_error() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };
    (status, Json(outcome)).into_response()
}

async fn suggest(
    State(resolver): State<Arc<WordResolver>>,
    QueryParams(params): QueryParams<SuggestParams>,
) -> Response {
    Json(Outcome::choose(resolver.suggest(&params.q).await)).into_response()
}

async fn finalize(
    State(resolver): State<Arc<WordResolver>>,
    payload: Result<Json<FinalizeRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return (
                rejection.status(),
                Json(serde_json::json!({ "error": rejection.body_text() })),
            )
                .into_response();
        }
    };
    match resolver.finalize(&request.lemma, request.body.as_deref()).await {
        Ok(entry) => Json(entry).into_response(),
        Err(e) => error_response(e),
    }
}

async fn word_of_the_day(State(resolver): State<Arc<WordResolver>>) -> Response {
    match resolver.word_of_the_day().await {
        Ok(Some(top)) => Json(top).into_response(),
        Ok(None) => Json(serde_json::json!({})).into_response(),
        Err(e) => error_response(e),
    }
}

async fn stats(State(resolver): State<Arc<WordResolver>>) -> Response {
    Json(resolver.stats().await).into_response()
}

fn error_response(error: ResolveError) -> Response {
    let status = match error {
        ResolveError::EmptyLemma => StatusCode::BAD_REQUEST,
        ResolveError::Store(_) => {
            log::error!("Store error: {}", error);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(serde_json::json!({ "error": error.to_string() })),
    )
        .into_response()
}
