use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ClimateError;
use crate::queries::QueryEngine;
use crate::store::RecordStore;
use crate::utils::dates::is_iso_date;

/// Error surfaced over HTTP. Validation failures name the offending field;
/// everything else is an internal condition of the ingested snapshot.
#[derive(Debug)]
pub enum ApiError {
    BadRequest { field: String, message: String },
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message,
                    field: Some(field),
                },
            ),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: message,
                    field: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ClimateError> for ApiError {
    fn from(error: ClimateError) -> Self {
        match error {
            ClimateError::InvalidDate { field, value } => ApiError::BadRequest {
                message: format!("'{}' is not a YYYY-MM-DD date", value),
                field,
            },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

fn require_iso_date(field: &str, value: &str) -> Result<(), ApiError> {
    if is_iso_date(value) {
        return Ok(());
    }
    Err(ClimateError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    }
    .into())
}

/// `GET /` returns a plain-text index of the available routes.
pub async fn index() -> &'static str {
    "Welcome to the Climate Analysis API!\n\
     Available routes:\n\
     /api/v1.0/precipitation\n\
     /api/v1.0/stations\n\
     /api/v1.0/tobs\n\
     /api/v1.0/<start>\n\
     /api/v1.0/<start>/<end>\n"
}

/// `GET /api/v1.0/precipitation` serves `date -> precipitation` over the
/// trailing-12-month window ending at the most recent measurement date.
/// Dates with several readings keep the last one seen, and observation gaps
/// serialize as `null`.
pub async fn precipitation(
    State(store): State<Arc<RecordStore>>,
) -> Result<Json<BTreeMap<String, Option<f64>>>, ApiError> {
    let engine = QueryEngine::new(&store);
    let most_recent = engine.most_recent_date()?;
    let window_start = engine.one_year_window(&most_recent)?;
    tracing::debug!(%window_start, %most_recent, "serving precipitation window");

    let mapping: BTreeMap<String, Option<f64>> = engine
        .precipitation_series(&window_start, None)
        .into_iter()
        .map(|reading| (reading.date, reading.precipitation))
        .collect();

    Ok(Json(mapping))
}

/// `GET /api/v1.0/stations` serves every station code in the roster.
pub async fn stations(State(store): State<Arc<RecordStore>>) -> Json<Vec<String>> {
    let codes = store
        .all_stations()
        .iter()
        .map(|station| station.code.clone())
        .collect();

    Json(codes)
}

/// `GET /api/v1.0/tobs` serves a flat `[date, temperature, date, ...]` list
/// for the most active station over the trailing-12-month window.
pub async fn tobs(State(store): State<Arc<RecordStore>>) -> Result<Json<Vec<Value>>, ApiError> {
    let engine = QueryEngine::new(&store);
    let most_recent = engine.most_recent_date()?;
    let window_start = engine.one_year_window(&most_recent)?;
    let most_active = engine.most_active_station()?;
    tracing::debug!(station = %most_active.code, "serving temperature observations");

    let mut flattened = Vec::new();
    for reading in engine.temperature_series(&most_active.code, &window_start, None) {
        flattened.push(json!(reading.date));
        flattened.push(json!(reading.temperature));
    }

    Ok(Json(flattened))
}

/// `GET /api/v1.0/:start` serves flat `[min, avg, max]` temperature across all
/// stations for dates on or after `start`. An empty-but-valid window yields
/// `[null, null, null]` with a 200, keeping the contract uniform.
pub async fn temperature_from(
    State(store): State<Arc<RecordStore>>,
    Path(start): Path<String>,
) -> Result<Json<[Option<f64>; 3]>, ApiError> {
    require_iso_date("start", &start)?;

    let engine = QueryEngine::new(&store);
    summarize(engine.temperature_stats_all(&start, None))
}

/// `GET /api/v1.0/:start/:end` serves flat `[min, avg, max]` temperature across
/// all stations over the closed date range.
pub async fn temperature_range(
    State(store): State<Arc<RecordStore>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<[Option<f64>; 3]>, ApiError> {
    require_iso_date("start", &start)?;
    require_iso_date("end", &end)?;

    let engine = QueryEngine::new(&store);
    summarize(engine.temperature_stats_all(&start, Some(&end)))
}

fn summarize(
    stats: crate::error::Result<crate::queries::TemperatureSummary>,
) -> Result<Json<[Option<f64>; 3]>, ApiError> {
    match stats {
        Ok(summary) => Ok(Json([
            Some(summary.min),
            Some(summary.avg),
            Some(summary.max),
        ])),
        Err(ClimateError::NoData(_)) => Ok(Json([None, None, None])),
        Err(other) => Err(other.into()),
    }
}
