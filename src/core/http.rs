//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::analysis::{self, MarketMetrics};
use crate::dashboard::{DashboardService, DashboardSnapshot, SelectionState};
use crate::metrics::Metrics;
use crate::models::{order_series, NewsItem, PricePoint, SignalThresholds};

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub dashboard: Arc<DashboardService>,
    pub selection: Arc<RwLock<SelectionState>>,
}

impl AppState {
    pub fn new(dashboard: Arc<DashboardService>, metrics: Arc<Metrics>) -> Self {
        Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            dashboard,
            selection: Arc::new(RwLock::new(SelectionState::new())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "stock-pulse-dashboard"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// List the stock picker with latest prices; seeds an empty selection
async fn list_stocks(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let quotes = state.dashboard.load_market().await;

    let mut selection = state.selection.write().await;
    if selection.on_market_loaded(&quotes) {
        info!(symbol = ?selection.current(), "Default stock selected");
    }

    Ok(Json(json!({
        "stocks": quotes,
        "selected": selection.current(),
    })))
}

async fn get_selection(State(state): State<AppState>) -> Json<Value> {
    let selection = state.selection.read().await;
    Json(json!({ "selected": selection.current() }))
}

#[derive(Debug, Deserialize)]
struct SelectRequest {
    code: String,
}

async fn put_selection(
    State(state): State<AppState>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<Value>, StatusCode> {
    let code = state
        .dashboard
        .company(&request.code)
        .map(|meta| meta.code.clone())
        .ok_or(StatusCode::NOT_FOUND)?;

    let mut selection = state.selection.write().await;
    selection.select(code);
    info!(symbol = ?selection.current(), "Stock selected");
    Ok(Json(json!({ "selected": selection.current() })))
}

async fn stock_dashboard(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<DashboardSnapshot>, StatusCode> {
    state
        .dashboard
        .snapshot(&code)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Snapshot of whichever stock is currently selected
async fn current_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardSnapshot>, StatusCode> {
    let code = {
        let selection = state.selection.read().await;
        selection.current().map(str::to_string)
    }
    .ok_or(StatusCode::CONFLICT)?;

    state
        .dashboard
        .snapshot(&code)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

#[derive(Debug, Deserialize)]
struct RawNews {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default, alias = "sentiment_label")]
    sentiment: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnalysisRequest {
    #[serde(default)]
    series: Vec<PricePoint>,
    #[serde(default)]
    news: Vec<RawNews>,
    #[serde(default)]
    thresholds: Option<SignalThresholds>,
}

fn unprocessable(reason: String) -> (StatusCode, Json<Value>) {
    warn!(reason = %reason, "Rejected analysis request");
    (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "error": reason })))
}

/// Run the metrics engine over caller-supplied data.
///
/// The series may arrive in any order; it is sorted by date before the
/// calculators see it. Duplicate dates and unusable thresholds are 422s.
async fn run_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<MarketMetrics>, (StatusCode, Json<Value>)> {
    let series = order_series(request.series).map_err(|e| unprocessable(e.to_string()))?;

    let thresholds = request
        .thresholds
        .unwrap_or(state.dashboard.config().thresholds);
    thresholds
        .validate()
        .map_err(|e| unprocessable(e.to_string()))?;

    let news: Vec<NewsItem> = request
        .news
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| {
            let id = match raw.id {
                Some(Value::String(s)) => s,
                Some(other) => other.to_string(),
                None => idx.to_string(),
            };
            NewsItem::from_raw(
                id,
                raw.title.unwrap_or_default(),
                raw.source.as_deref(),
                raw.sentiment.as_deref(),
            )
        })
        .collect();

    Ok(Json(analysis::analyze(&series, &news, thresholds)))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/stocks", get(list_stocks))
        .route("/api/stocks/{code}/dashboard", get(stock_dashboard))
        .route("/api/selection", get(get_selection).put(put_selection))
        .route("/api/dashboard", get(current_dashboard))
        .route("/api/analysis", post(run_analysis))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    port: u16,
    dashboard: Arc<DashboardService>,
    metrics: Arc<Metrics>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state = AppState::new(dashboard, metrics);
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
