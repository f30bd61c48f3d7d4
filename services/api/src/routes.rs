use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use country_health::error::AppError;
use country_health::ingest::{RecordReader, Row};
use country_health::{CountrySeries, Domain, ScoringContext, ScoringEngine, ScoringOutcome};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Rows for one country as returned by the table service.
#[derive(Debug, Deserialize)]
pub(crate) struct CountryRows {
    pub(crate) indicators: Vec<Row>,
    #[serde(default)]
    pub(crate) population: Vec<Row>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    #[serde(flatten)]
    pub(crate) primary: CountryRows,
    #[serde(default)]
    pub(crate) comparison: Option<CountryRows>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub(crate) outcome: ScoringOutcome,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/scores/demographics", post(demographic_scores_endpoint))
        .route("/api/v1/scores/economics", post(economic_scores_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn demographic_scores_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    score_rows(&state.records, Domain::Demographic, payload).map(Json)
}

pub(crate) async fn economic_scores_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    score_rows(&state.records, Domain::Economic, payload).map(Json)
}

fn score_rows(
    reader: &RecordReader,
    domain: Domain,
    payload: ScoreRequest,
) -> Result<ScoreResponse, AppError> {
    let ScoreRequest {
        primary,
        comparison,
    } = payload;

    let mut context = ScoringContext::new(series_from_rows(reader, domain, &primary)?);
    if let Some(rows) = comparison {
        context = context.compared_with(series_from_rows(reader, domain, &rows)?);
    }

    Ok(ScoreResponse {
        generated_at: Utc::now(),
        outcome: ScoringEngine::new(domain).score(&context),
    })
}

fn series_from_rows(
    reader: &RecordReader,
    domain: Domain,
    rows: &CountryRows,
) -> Result<CountrySeries, AppError> {
    let indicators = reader.indicators_from_rows(&rows.indicators, domain)?;
    let population = reader.population_from_rows(&rows.population)?;
    Ok(CountrySeries::new(indicators).with_population(population))
}
