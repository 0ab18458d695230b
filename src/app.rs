use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::models::forecast::ForecastService;
use crate::routes::forecast;

// Anything that goes in here must be a handle or pointer that can be cloned.
// The underlying state itself should be shared.
#[derive(Clone)]
pub struct AppState {
    pub forecasts: Arc<dyn ForecastService>,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/weatherforecast", get(forecast::get_default_forecast))
        .with_state(state.clone())
        .nest("/api/weather", forecast::routes(state))
        .layer(TraceLayer::new_for_http())
}
