//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, put},
    Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::analytics::{dashboard_stats, summarize, WEEK_SPAN};
use crate::config::AppConfig;
use crate::db::{self, FitnessStore, InMemoryStore, PostgresStore, StoreError};
use crate::feedback::generate_feedback;
use crate::goals::{daily_goal_completion, goal_progress};
use crate::metrics::Metrics;
use crate::models::goal::{is_valid_target, Goal, GoalStatus, GoalType, GoalUpdate, NewGoal};
use crate::models::{
    AnalyticsSummary, DailyRecord, DashboardStats, Feedback, GoalProgress, RecordInput,
};

pub const SERVICE_NAME: &str = "fitness-dashboard";

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub store: Option<Arc<dyn FitnessStore>>,
}

impl AppState {
    /// `degraded` when no record store is configured
    pub fn health_status(&self) -> &'static str {
        if self.store.is_some() {
            "healthy"
        } else {
            "degraded"
        }
    }
}

type ApiError = (StatusCode, Json<Value>);
type ApiResult<T> = Result<Json<T>, ApiError>;

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

fn store_error(e: StoreError, action: &str) -> ApiError {
    let status = match &e {
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        StoreError::Database(_) | StoreError::Corrupt(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        error!(error = %e, action, "Store operation failed");
    }
    api_error(status, e.to_string())
}

fn require_store(state: &AppState) -> Result<&Arc<dyn FitnessStore>, ApiError> {
    state
        .store
        .as_ref()
        .ok_or_else(|| api_error(StatusCode::SERVICE_UNAVAILABLE, "Record store unavailable"))
}

/// Records for the engine endpoints. A missing or failing store yields an
/// empty history rather than an error.
async fn engine_records(state: &AppState) -> Vec<DailyRecord> {
    let Some(store) = state.store.as_ref() else {
        warn!("No record store configured, using empty history");
        return Vec::new();
    };
    store.list_records().await.unwrap_or_else(|e| {
        error!(error = %e, "Failed to load records, using empty history");
        Vec::new()
    })
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": state.health_status(),
        "database_connected": state.metrics.database_connected.get() > 0.0,
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
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
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Serialize)]
struct SavedResponse {
    id: i64,
    message: &'static str,
}

/// All fitness records, newest first
async fn list_records(State(state): State<AppState>) -> ApiResult<Vec<DailyRecord>> {
    let store = require_store(&state)?;
    let records = store
        .list_records()
        .await
        .map_err(|e| store_error(e, "list_records"))?;
    Ok(Json(records))
}

/// Insert or replace the record for a date
async fn save_record(
    State(state): State<AppState>,
    Json(input): Json<RecordInput>,
) -> ApiResult<SavedResponse> {
    let store = require_store(&state)?;
    let record = input
        .normalize()
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "date is required"))?;

    let id = store
        .upsert_record(&record)
        .await
        .map_err(|e| store_error(e, "upsert_record"))?;
    state.metrics.records_upserted_total.inc();
    info!(date = %record.date, id, "Saved fitness record");

    Ok(Json(SavedResponse {
        id,
        message: "Fitness record saved successfully",
    }))
}

#[derive(Debug, Deserialize)]
struct CreateGoalRequest {
    goal_type: GoalType,
    target_value: f64,
    #[serde(default)]
    deadline: Option<NaiveDate>,
}

/// Active goals in creation order
async fn list_goals(State(state): State<AppState>) -> ApiResult<Vec<Goal>> {
    let store = require_store(&state)?;
    let goals = store
        .list_goals(Some(GoalStatus::Active))
        .await
        .map_err(|e| store_error(e, "list_goals"))?;
    Ok(Json(goals))
}

async fn create_goal(
    State(state): State<AppState>,
    Json(request): Json<CreateGoalRequest>,
) -> ApiResult<SavedResponse> {
    let store = require_store(&state)?;
    if !is_valid_target(request.target_value) {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "target_value must be a positive number",
        ));
    }

    let goal = NewGoal {
        goal_type: request.goal_type,
        target_value: request.target_value,
        current_value: 0.0,
        deadline: request.deadline,
    };
    let id = store
        .create_goal(&goal)
        .await
        .map_err(|e| store_error(e, "create_goal"))?;
    info!(goal_id = id, goal_type = %goal.goal_type, "Created goal");

    Ok(Json(SavedResponse {
        id,
        message: "Goal created successfully",
    }))
}

/// Apply a partial update. Status changes only happen here.
async fn update_goal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<GoalUpdate>,
) -> ApiResult<Value> {
    let store = require_store(&state)?;
    if update.target_value.is_some_and(|t| !is_valid_target(t)) {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "target_value must be a positive number",
        ));
    }

    let mut goal = store
        .get_goal(id)
        .await
        .map_err(|e| store_error(e, "get_goal"))?;
    update.apply(&mut goal);
    store
        .update_goal(&goal)
        .await
        .map_err(|e| store_error(e, "update_goal"))?;

    Ok(Json(json!({ "message": "Goal updated successfully" })))
}

async fn delete_goal(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Value> {
    let store = require_store(&state)?;
    store
        .delete_goal(id)
        .await
        .map_err(|e| store_error(e, "delete_goal"))?;
    info!(goal_id = id, "Deleted goal");
    Ok(Json(json!({ "message": "Goal deleted successfully" })))
}

#[derive(Debug, Deserialize)]
struct DateQuery {
    date: Option<NaiveDate>,
}

fn today_or(query: &DateQuery) -> NaiveDate {
    query.date.unwrap_or_else(|| Utc::now().date_naive())
}

/// Today's record plus the trailing week summary
async fn get_dashboard_stats(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Json<DashboardStats> {
    let records = engine_records(&state).await;
    Json(dashboard_stats(&records, today_or(&query)))
}

async fn get_feedback(State(state): State<AppState>) -> Json<Feedback> {
    let records = engine_records(&state).await;
    Json(generate_feedback(&records))
}

#[derive(Debug, Deserialize)]
struct AnalyticsQuery {
    window: Option<usize>,
}

async fn get_analytics(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> Json<AnalyticsSummary> {
    let records = engine_records(&state).await;
    Json(summarize(&records, query.window.unwrap_or(WEEK_SPAN)))
}

#[derive(Debug, Serialize)]
struct GoalProgressEntry {
    goal: Goal,
    progress: GoalProgress,
}

#[derive(Debug, Serialize)]
struct GoalProgressResponse {
    date: NaiveDate,
    daily_goals_completed: usize,
    goals: Vec<GoalProgressEntry>,
}

/// Active goals and the record for `date`, with the same empty fallback as
/// [`engine_records`]
async fn engine_goals_and_record(state: &AppState, date: NaiveDate) -> (Vec<Goal>, DailyRecord) {
    let empty = DailyRecord::new(date);
    let Some(store) = state.store.as_ref() else {
        warn!("No record store configured, using empty goal set");
        return (Vec::new(), empty);
    };
    let goals = store
        .list_goals(Some(GoalStatus::Active))
        .await
        .unwrap_or_else(|e| {
            error!(error = %e, "Failed to load goals, using empty goal set");
            Vec::new()
        });
    let record = match store.get_record(date).await {
        Ok(record) => record.unwrap_or(empty),
        Err(e) => {
            error!(error = %e, %date, "Failed to load record, using empty record");
            empty
        }
    };
    (goals, record)
}

/// Progress for every active goal and today's daily completion count
async fn get_goal_progress(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Json<GoalProgressResponse> {
    let date = today_or(&query);
    let (goals, record) = engine_goals_and_record(&state, date).await;

    Json(GoalProgressResponse {
        date,
        daily_goals_completed: daily_goal_completion(&record, &goals),
        goals: goals
            .into_iter()
            .map(|goal| GoalProgressEntry {
                progress: goal_progress(&goal),
                goal,
            })
            .collect(),
    })
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/fitness-records", get(list_records).post(save_record))
        .route("/api/goals", get(list_goals).post(create_goal))
        .route("/api/goals/{id}", put(update_goal).delete(delete_goal))
        .route("/api/dashboard-stats", get(get_dashboard_stats))
        .route("/api/feedback", get(get_feedback))
        .route("/api/analytics", get(get_analytics))
        .route("/api/goal-progress", get(get_goal_progress))
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

/// Connect the store (falling back to memory), seed goals and serve
pub async fn start_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);

    let store: Arc<dyn FitnessStore> = match PostgresStore::connect(&config.database_url).await {
        Ok(store) => {
            info!("PostgreSQL connected");
            metrics.database_connected.set(1.0);
            Arc::new(store)
        }
        Err(e) => {
            warn!(error = %e, "PostgreSQL unavailable, records will be kept in memory only");
            metrics.database_connected.set(0.0);
            Arc::new(InMemoryStore::new())
        }
    };

    if config.seed_default_goals {
        if let Err(e) = db::seed_default_goals(store.as_ref()).await {
            warn!(error = %e, "Failed to seed default goals");
        }
    }

    let state = AppState {
        metrics,
        start_time: Arc::new(Instant::now()),
        store: Some(store),
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
