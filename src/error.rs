use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::models::forecast::{MAX_DAYS, MIN_DAYS};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ForecastError {
    #[error("Days must be between {} and {}", MIN_DAYS, MAX_DAYS)]
    InvalidArgument { days: i32 },
}

impl IntoResponse for ForecastError {
    fn into_response(self) -> Response {
        // A bad request from the client, not a fault in the server.
        log::debug!("Rejecting forecast request: {:?}", self);
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("Both key_file_path and cert_file_path are needed for tls")]
    IncompleteTls,
}
