use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, put},
};
use chrono::NaiveDate;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::chart::{SeriesKind, ValueAxis};
use crate::padding::{IntervalError, ReportingInterval};
use crate::planning::{PlanningError, PlanningState};
use crate::plot::plot_data_string;
use crate::PlanningSnapshot;

#[derive(Clone)]
pub struct AppState {
    snapshot: Arc<RwLock<PlanningSnapshot>>,
}

impl AppState {
    pub fn new(snapshot: PlanningSnapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(snapshot)),
        }
    }

    fn snapshot(&self) -> Arc<RwLock<PlanningSnapshot>> {
        self.snapshot.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Conflict(String),
    Invalid(String),
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }
}

impl From<PlanningError> for ApiError {
    fn from(value: PlanningError) -> Self {
        match value {
            PlanningError::OrderNotFound(_) => ApiError::NotFound(value.to_string()),
            PlanningError::OrderNotScheduled(_) => ApiError::Conflict(value.to_string()),
            other => ApiError::Invalid(other.to_string()),
        }
    }
}

impl From<IntervalError> for ApiError {
    fn from(value: IntervalError) -> Self {
        ApiError::Invalid(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "not_found", message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, "conflict", message),
            ApiError::Invalid(message) => (StatusCode::BAD_REQUEST, "invalid_request", message),
        };
        (status, Json(ErrorBody { error, message })).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct IntervalQuery {
    start: NaiveDate,
    finish: NaiveDate,
}

impl IntervalQuery {
    fn interval(&self) -> Result<ReportingInterval, ApiError> {
        Ok(ReportingInterval::new(self.start, self.finish)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub kind: SeriesKind,
    pub points: usize,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSummary {
    pub order_id: i32,
    pub start: NaiveDate,
    pub finish: NaiveDate,
    pub max_hours: u32,
    pub value_axis: ValueAxis,
    pub series: Vec<SeriesSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: i32,
    pub name: String,
    pub tasks: usize,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/snapshot", put(replace_snapshot))
        .route("/orders", get(list_orders))
        .route("/orders/:id/tasks", get(order_tasks))
        .route("/orders/:id/chart", get(order_chart))
        .route("/orders/:id/chart/:series", get(order_chart_series))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, snapshot: PlanningSnapshot) -> std::io::Result<()> {
    let state = AppState::new(snapshot);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "workload chart HTTP API listening");
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn replace_snapshot(
    State(state): State<AppState>,
    Json(snapshot): Json<PlanningSnapshot>,
) -> Result<StatusCode, ApiError> {
    snapshot.validate().map_err(|err| ApiError::invalid(err.to_string()))?;
    let shared = state.snapshot();
    let orders = snapshot.orders.len();
    *shared.write() = snapshot;
    info!(orders, "replaced planning snapshot");
    Ok(StatusCode::NO_CONTENT)
}

async fn list_orders(State(state): State<AppState>) -> Json<Vec<OrderSummary>> {
    let shared = state.snapshot();
    let orders = {
        let guard = shared.read();
        guard
            .orders
            .iter()
            .map(|order| OrderSummary {
                id: order.id,
                name: order.name.clone(),
                tasks: order.tasks.len(),
            })
            .collect()
    };
    Json(orders)
}

async fn order_tasks(
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
) -> Result<Json<PlanningState>, ApiError> {
    let shared = state.snapshot();
    let planning_state = {
        let guard = shared.read();
        guard.planning_state(order_id)?
    };
    Ok(Json(planning_state))
}

async fn order_chart(
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
    Query(query): Query<IntervalQuery>,
) -> Result<Json<ChartSummary>, ApiError> {
    let interval = query.interval()?;
    let shared = state.snapshot();
    let chart = {
        let guard = shared.read();
        guard.chart_for_order(order_id, &interval)?
    };

    let series = SeriesKind::ALL
        .iter()
        .map(|kind| SeriesSummary {
            kind: *kind,
            points: chart.series(*kind).len(),
            uri: format!(
                "/orders/{order_id}/chart/{kind}?start={}&finish={}",
                interval.start(),
                interval.finish()
            ),
        })
        .collect();

    Ok(Json(ChartSummary {
        order_id,
        start: interval.start(),
        finish: interval.finish(),
        max_hours: chart.max_hours,
        value_axis: chart.value_axis(),
        series,
    }))
}

async fn order_chart_series(
    State(state): State<AppState>,
    Path((order_id, series)): Path<(i32, String)>,
    Query(query): Query<IntervalQuery>,
) -> Result<Response, ApiError> {
    let kind = SeriesKind::from_str(&series).map_err(ApiError::not_found)?;
    let interval = query.interval()?;
    let shared = state.snapshot();
    let chart = {
        let guard = shared.read();
        guard.chart_for_order(order_id, &interval)?
    };
    let body = plot_data_string(chart.series(kind));
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response())
}
