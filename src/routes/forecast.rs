use crate::app::AppState;
use crate::error::ForecastError;
use crate::models::forecast::{DEFAULT_DAYS, ForecastDays, ForecastRecord};
use axum::{
    Router,
    extract::{Json, Query, State},
    routing::get,
};
use serde::Deserialize;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/forecast", get(get_forecast))
        .with_state(state)
}

#[derive(Deserialize, Debug)]
pub struct ForecastQuery {
    days: Option<i32>,
}

async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> Result<Json<Vec<ForecastRecord>>, ForecastError> {
    let days = ForecastDays::new(query.days.unwrap_or(DEFAULT_DAYS))?;
    Ok(Json(state.forecasts.forecast(days).await))
}

/// Always five days, no parameters.
pub async fn get_default_forecast(State(state): State<AppState>) -> Json<Vec<ForecastRecord>> {
    Json(state.forecasts.forecast(ForecastDays::default()).await)
}
